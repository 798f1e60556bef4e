// simulation/simulation.rs
// Contains the Simulation struct and main methods (new, step, iterate, snapshot)

use serde::{Deserialize, Serialize};

use super::collision;
use crate::body::{Body, Species};
use crate::config::SimConfig;

/// Read-only per-tick view of one particle, for rendering/recording collaborators.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParticleView {
    pub species: Species,
    pub x: f32,
    pub y: f32,
}

/// The per-tick output consumed outside the engine.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub particles: Vec<ParticleView>,
}

/// The main simulation state and logic for the particle arena.
pub struct Simulation {
    pub frame: u64,
    pub bodies: Vec<Body>,
    pub config: SimConfig,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        // Start with no bodies; population setup goes through populate/resize
        Self {
            frame: 0,
            bodies: Vec::new(),
            config,
        }
    }

    /// One tick: integrate, reflect off walls, resolve pairwise contacts.
    pub fn step(&mut self) {
        self.iterate();
        collision::collide(self);
        self.frame += 1;
    }

    pub fn iterate(&mut self) {
        let width = self.config.width;
        let height = self.config.height;
        // Length is fixed at tick start; bodies appended mid-tick are not
        // integrated until the next tick.
        let len = self.bodies.len();
        for body in &mut self.bodies[..len] {
            body.pos += body.vel;

            let min_x = body.radius;
            let max_x = width - body.radius;
            let min_y = body.radius;
            let max_y = height - body.radius;

            // X-axis boundary enforcement
            if body.pos.x <= min_x {
                body.pos.x = min_x;
                body.vel.x = -body.vel.x;
            } else if body.pos.x >= max_x {
                body.pos.x = max_x;
                body.vel.x = -body.vel.x;
            }

            // Y-axis boundary enforcement
            if body.pos.y <= min_y {
                body.pos.y = min_y;
                body.vel.y = -body.vel.y;
            } else if body.pos.y >= max_y {
                body.pos.y = max_y;
                body.vel.y = -body.vel.y;
            }
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            particles: self
                .bodies
                .iter()
                .map(|b| ParticleView {
                    species: b.species,
                    x: b.pos.x,
                    y: b.pos.y,
                })
                .collect(),
        }
    }
}
