// Defines the body struct (position, velocity, radius, species) and its methods.
// Species carries the cyclic beats-relation that drives type conversion on contact.

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Species {
    Rock,
    Paper,
    Scissors,
}

impl Species {
    /// The species this one defeats under the fixed cyclic relation.
    pub fn beats(self) -> Species {
        use Species::*;
        match self {
            Rock => Scissors,
            Scissors => Paper,
            Paper => Rock,
        }
    }

    pub const ALL: [Species; 3] = [Species::Rock, Species::Paper, Species::Scissors];
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub id: u64,
    pub species: Species,
}

use std::sync::atomic::{AtomicU64, Ordering};
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, species: Species) -> Self {
        Self {
            pos,
            vel,
            radius,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            species,
        }
    }

    /// Convert to the winner's species after losing a collision.
    pub fn convert_to(&mut self, winner: Species) {
        self.species = winner;
    }
}
