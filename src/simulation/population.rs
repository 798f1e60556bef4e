// simulation/population.rs
// Particle store operations: initialize, per-species resize, velocity rescale

use serde::{Deserialize, Serialize};

use crate::body::Species;
use crate::config::SimConfig;
use crate::simulation::Simulation;
use crate::utils::spawn_body;

/// Live particle tally per species.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationCounts {
    pub rock: usize,
    pub paper: usize,
    pub scissors: usize,
}

impl PopulationCounts {
    pub fn get(&self, species: Species) -> usize {
        match species {
            Species::Rock => self.rock,
            Species::Paper => self.paper,
            Species::Scissors => self.scissors,
        }
    }

    pub fn set(&mut self, species: Species, count: usize) {
        match species {
            Species::Rock => self.rock = count,
            Species::Paper => self.paper = count,
            Species::Scissors => self.scissors = count,
        }
    }

    pub fn total(&self) -> usize {
        self.rock + self.paper + self.scissors
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            rock: config.rock_count,
            paper: config.paper_count,
            scissors: config.scissors_count,
        }
    }
}

impl Simulation {
    /// Replace the whole particle set with freshly spawned bodies, counts[s]
    /// per species. Speed is passed explicitly by the caller.
    pub fn populate(&mut self, counts: PopulationCounts, speed: f32) {
        self.bodies.clear();
        for species in Species::ALL {
            for _ in 0..counts.get(species) {
                let body = spawn_body(&self.config, species, speed);
                self.bodies.push(body);
            }
        }
    }

    /// Adjust one species toward `target` without touching the others.
    /// Increases append fresh spawns; decreases remove members of that species
    /// chosen uniformly at random, preserving the relative order of survivors.
    pub fn resize_species(&mut self, species: Species, target: usize, speed: f32) {
        let mut members: Vec<usize> = self
            .bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.species == species)
            .map(|(idx, _)| idx)
            .collect();

        if target > members.len() {
            for _ in 0..(target - members.len()) {
                let body = spawn_body(&self.config, species, speed);
                self.bodies.push(body);
            }
        } else {
            let excess = members.len() - target;
            fastrand::shuffle(&mut members);
            let mut victims: Vec<usize> = members.into_iter().take(excess).collect();
            // Remove from the back so earlier indices stay valid.
            victims.sort_unstable_by(|a, b| b.cmp(a));
            for idx in victims {
                self.bodies.remove(idx);
            }
        }
    }

    /// Point every velocity at the new magnitude, keeping direction. Bodies at
    /// rest are left untouched, there is no direction to preserve.
    pub fn rescale_velocities(&mut self, new_speed: f32) {
        for body in &mut self.bodies {
            let speed = body.vel.mag();
            if speed > 0.0 {
                body.vel = body.vel / speed * new_speed;
            }
        }
    }

    pub fn counts(&self) -> PopulationCounts {
        let mut counts = PopulationCounts::default();
        for body in &self.bodies {
            let n = counts.get(body.species);
            counts.set(body.species, n + 1);
        }
        counts
    }
}
