// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};

use crate::body::Species;

// ====================
// Arena Parameters
// ====================
pub const ARENA_WIDTH: f32 = 600.0; // Arena width in simulation units
pub const ARENA_HEIGHT: f32 = 400.0; // Arena height in simulation units
pub const PARTICLE_RADIUS: f32 = 5.0;

// ====================
// Speed Parameters
// ====================
pub const DEFAULT_SPEED: f32 = 2.0;
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 10.0;

// ====================
// Population Parameters
// ====================
pub const DEFAULT_POPULATION: usize = 20; // Initial count per species
pub const MAX_POPULATION: usize = 50; // Per-species population cap

// ====================
// Scheduling
// ====================
/// Tick cadence for the external driving loop (~60 fps).
pub const TICK_INTERVAL_MS: u64 = 16;

/// Clamp a requested speed into the supported range.
pub fn clamp_speed(speed: f32) -> f32 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// Clamp a requested per-species population into the supported range.
pub fn clamp_population(count: usize) -> usize {
    count.min(MAX_POPULATION)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub width: f32,
    pub height: f32,
    pub particle_radius: f32,
    /// Global speed scale; spawn velocities and live rescaling derive from it.
    pub speed: f32,
    /// Requested population per species, realized by the particle store.
    pub rock_count: usize,
    pub paper_count: usize,
    pub scissors_count: usize,
    pub tick_interval_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            particle_radius: PARTICLE_RADIUS,
            speed: DEFAULT_SPEED,
            rock_count: DEFAULT_POPULATION,
            paper_count: DEFAULT_POPULATION,
            scissors_count: DEFAULT_POPULATION,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl SimConfig {
    pub fn population_target(&self, species: Species) -> usize {
        match species {
            Species::Rock => self.rock_count,
            Species::Paper => self.paper_count,
            Species::Scissors => self.scissors_count,
        }
    }

    pub fn set_population_target(&mut self, species: Species, count: usize) {
        match species {
            Species::Rock => self.rock_count = count,
            Species::Paper => self.paper_count = count,
            Species::Scissors => self.scissors_count = count,
        }
    }
}
