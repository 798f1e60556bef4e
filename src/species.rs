use crate::body::Species;

/// Display-facing properties for each species, consumed by snapshot
/// collaborators (renderers, recorders). The engine itself only reads labels
/// for logging.
#[derive(Clone, Copy, Debug)]
pub struct SpeciesProps {
    pub label: &'static str,
    pub color: [u8; 4],
}

pub fn get_species_props(species: Species) -> SpeciesProps {
    use Species::*;
    match species {
        Rock => SpeciesProps {
            label: "rock",
            color: [128, 128, 128, 255],
        },
        Paper => SpeciesProps {
            label: "paper",
            color: [240, 240, 220, 255],
        },
        Scissors => SpeciesProps {
            label: "scissors",
            color: [220, 60, 60, 255],
        },
    }
}
