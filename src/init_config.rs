// init_config.rs
// Handles loading and parsing the optional arena configuration from arena_config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::{self, SimConfig};

#[derive(Debug, Deserialize, Serialize)]
pub struct ArenaConfig {
    pub arena: Option<ArenaSection>,
    pub simulation: Option<SimulationSection>,
    pub populations: Option<PopulationsSection>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ArenaSection {
    /// Optional arena width. Falls back to the default when omitted.
    pub width: Option<f32>,
    /// Optional arena height. Falls back to the default when omitted.
    pub height: Option<f32>,
    pub particle_radius: Option<f32>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SimulationSection {
    pub speed: Option<f32>,
    pub tick_interval_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PopulationsSection {
    pub rock: Option<usize>,
    pub paper: Option<usize>,
    pub scissors: Option<usize>,
}

impl ArenaConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: ArenaConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file("arena_config.toml")
    }

    /// Merge the file contents over the built-in defaults. Speed and
    /// population values are clamped the same way live updates are.
    pub fn into_sim_config(self) -> SimConfig {
        let mut cfg = SimConfig::default();
        if let Some(arena) = self.arena {
            if let Some(width) = arena.width {
                cfg.width = width;
            }
            if let Some(height) = arena.height {
                cfg.height = height;
            }
            if let Some(radius) = arena.particle_radius {
                cfg.particle_radius = radius;
            }
        }
        if let Some(sim) = self.simulation {
            if let Some(speed) = sim.speed {
                cfg.speed = config::clamp_speed(speed);
            }
            if let Some(tick) = sim.tick_interval_ms {
                cfg.tick_interval_ms = tick;
            }
        }
        if let Some(pops) = self.populations {
            if let Some(rock) = pops.rock {
                cfg.rock_count = config::clamp_population(rock);
            }
            if let Some(paper) = pops.paper {
                cfg.paper_count = config::clamp_population(paper);
            }
            if let Some(scissors) = pops.scissors {
                cfg.scissors_count = config::clamp_population(scissors);
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let parsed: ArenaConfig = toml::from_str(
            r#"
            [populations]
            rock = 30
            "#,
        )
        .unwrap();
        let cfg = parsed.into_sim_config();
        assert_eq!(cfg.rock_count, 30);
        assert_eq!(cfg.paper_count, config::DEFAULT_POPULATION);
        assert_eq!(cfg.width, config::ARENA_WIDTH);
        assert_eq!(cfg.speed, config::DEFAULT_SPEED);
    }

    #[test]
    fn out_of_range_file_values_are_clamped() {
        let parsed: ArenaConfig = toml::from_str(
            r#"
            [simulation]
            speed = 99.0

            [populations]
            scissors = 1000
            "#,
        )
        .unwrap();
        let cfg = parsed.into_sim_config();
        assert_eq!(cfg.speed, config::MAX_SPEED);
        assert_eq!(cfg.scissors_count, config::MAX_POPULATION);
    }
}
