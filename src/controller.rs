// controller.rs
// Run/stop/reset lifecycle and the synchronous API consumed by external
// collaborators. All out-of-range inputs are clamped here, never propagated.

use log::{debug, warn};

use crate::body::Species;
use crate::config::{self, SimConfig};
use crate::simulation::{FrameSnapshot, PopulationCounts, Simulation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// No particles, nothing advancing.
    Idle,
    /// Stepping on every scheduling tick.
    Running,
    /// Particles retained, stepping halted.
    Stopped,
}

pub struct Controller {
    pub simulation: Simulation,
    state: RunState,
    /// Construction-time configuration restored by reset.
    defaults: SimConfig,
}

impl Controller {
    pub fn new(config: SimConfig) -> Self {
        Self {
            simulation: Simulation::new(config.clone()),
            state: RunState::Idle,
            defaults: config,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Materialize particles from the current targets and begin stepping.
    /// Only valid from Idle or Stopped; a redundant start is ignored.
    pub fn start(&mut self) {
        match self.state {
            RunState::Idle | RunState::Stopped => {
                let counts = PopulationCounts::from_config(&self.simulation.config);
                let speed = self.simulation.config.speed;
                self.simulation.populate(counts, speed);
                self.simulation.frame = 0;
                self.state = RunState::Running;
                debug!("simulation started with {} particles", counts.total());
            }
            RunState::Running => {
                warn!("start ignored: already running");
            }
        }
    }

    /// Halt stepping but keep the particle set so the arena freezes in place.
    pub fn stop(&mut self) {
        match self.state {
            RunState::Running => {
                self.state = RunState::Stopped;
                debug!("simulation stopped at frame {}", self.simulation.frame);
            }
            _ => {
                warn!("stop ignored: not running");
            }
        }
    }

    /// Clear all particles and restore the construction-time configuration.
    /// Valid from any state.
    pub fn reset(&mut self) {
        self.simulation = Simulation::new(self.defaults.clone());
        self.state = RunState::Idle;
        debug!("simulation reset");
    }

    /// Update the speed scale, clamped to the supported range. While running,
    /// live velocities are rescaled immediately so motion changes without a
    /// restart.
    pub fn set_speed(&mut self, speed: f32) {
        let clamped = config::clamp_speed(speed);
        if clamped != speed {
            warn!("speed {} out of range, clamped to {}", speed, clamped);
        }
        self.simulation.config.speed = clamped;
        if self.state == RunState::Running {
            self.simulation.rescale_velocities(clamped);
        }
    }

    /// Update one species' population target, clamped to the supported range.
    /// While running the store is resized immediately; otherwise the target is
    /// realized on the next start.
    pub fn set_population(&mut self, species: Species, count: usize) {
        let clamped = config::clamp_population(count);
        if clamped != count {
            warn!("population {} out of range, clamped to {}", count, clamped);
        }
        self.simulation.config.set_population_target(species, clamped);
        if self.state == RunState::Running {
            let speed = self.simulation.config.speed;
            self.simulation.resize_species(species, clamped, speed);
        }
    }

    /// Advance one tick when running; otherwise leave state untouched. Always
    /// returns the current snapshot.
    pub fn step(&mut self) -> FrameSnapshot {
        if self.state == RunState::Running {
            self.simulation.step();
        }
        self.simulation.snapshot()
    }

    /// Advance exactly one tick and hold. From Running this pauses after the
    /// tick; from Stopped it single-steps the frozen arena.
    pub fn step_once(&mut self) {
        if self.state == RunState::Idle {
            warn!("step ignored: no particles");
            return;
        }
        self.simulation.step();
        self.state = RunState::Stopped;
    }

    pub fn current_counts(&self) -> PopulationCounts {
        self.simulation.counts()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.simulation.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_POPULATION, MAX_SPEED, MIN_SPEED};
    use ultraviolet::Vec2;

    fn controller() -> Controller {
        fastrand::seed(11);
        Controller::new(SimConfig::default())
    }

    #[test]
    fn starts_only_from_idle_or_stopped() {
        let mut c = controller();
        assert_eq!(c.run_state(), RunState::Idle);
        c.start();
        assert_eq!(c.run_state(), RunState::Running);
        assert_eq!(c.current_counts().total(), 60);
        c.start(); // ignored
        assert_eq!(c.run_state(), RunState::Running);
        c.stop();
        assert_eq!(c.run_state(), RunState::Stopped);
        c.start();
        assert_eq!(c.run_state(), RunState::Running);
    }

    #[test]
    fn stop_freezes_particles_in_place() {
        let mut c = controller();
        c.start();
        c.step();
        c.stop();
        let frozen = c.snapshot();
        let after = c.step(); // no-op while stopped
        assert_eq!(after.frame, frozen.frame);
        assert_eq!(after.particles.len(), frozen.particles.len());
    }

    #[test]
    fn reset_then_initialize_round_trip() {
        let mut c = controller();
        c.start();
        c.step();
        c.reset();
        assert_eq!(c.run_state(), RunState::Idle);
        assert_eq!(c.current_counts().total(), 0);

        c.set_population(Species::Rock, 10);
        c.set_population(Species::Paper, 10);
        c.set_population(Species::Scissors, 10);
        c.start();
        let counts = c.current_counts();
        assert_eq!(counts.rock, 10);
        assert_eq!(counts.paper, 10);
        assert_eq!(counts.scissors, 10);
        assert_eq!(c.simulation.frame, 0, "zero ticks elapsed");
    }

    #[test]
    fn reset_restores_configuration_defaults() {
        let mut c = controller();
        c.set_speed(9.0);
        c.set_population(Species::Rock, 1);
        c.reset();
        assert_eq!(c.simulation.config.speed, SimConfig::default().speed);
        assert_eq!(
            c.simulation.config.rock_count,
            SimConfig::default().rock_count
        );
    }

    #[test]
    fn set_speed_clamps_to_bounds() {
        let mut c = controller();
        c.set_speed(0.01);
        assert_eq!(c.simulation.config.speed, MIN_SPEED);
        c.set_speed(50.0);
        assert_eq!(c.simulation.config.speed, MAX_SPEED);
    }

    #[test]
    fn set_speed_while_running_rescales_live_velocities() {
        let mut c = controller();
        c.start();
        c.simulation.bodies[0].vel = Vec2::new(3.0, 4.0);
        c.set_speed(5.0);
        // Magnitude was already 5: untouched.
        assert!((c.simulation.bodies[0].vel.x - 3.0).abs() < 1e-6);
        assert!((c.simulation.bodies[0].vel.y - 4.0).abs() < 1e-6);
        for body in &c.simulation.bodies {
            let mag = body.vel.mag();
            assert!(mag == 0.0 || (mag - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn set_speed_while_stopped_defers_rescale() {
        let mut c = controller();
        c.start();
        c.stop();
        let vel_before: Vec<Vec2> = c.simulation.bodies.iter().map(|b| b.vel).collect();
        c.set_speed(7.0);
        let vel_after: Vec<Vec2> = c.simulation.bodies.iter().map(|b| b.vel).collect();
        assert_eq!(vel_before, vel_after, "no mutation while stopped");
    }

    #[test]
    fn set_population_clamps_and_resizes_live() {
        let mut c = controller();
        c.start();
        c.set_population(Species::Scissors, 500);
        assert_eq!(c.current_counts().scissors, MAX_POPULATION);
        c.set_population(Species::Scissors, 3);
        assert_eq!(c.current_counts().scissors, 3);
    }

    #[test]
    fn set_population_while_idle_waits_for_start() {
        let mut c = controller();
        c.set_population(Species::Paper, 7);
        assert_eq!(c.current_counts().total(), 0, "nothing materialized yet");
        c.start();
        assert_eq!(c.current_counts().paper, 7);
    }

    #[test]
    fn step_once_advances_and_holds() {
        let mut c = controller();
        c.step_once(); // idle: ignored
        assert_eq!(c.run_state(), RunState::Idle);
        c.start();
        let frame = c.simulation.frame;
        c.step_once();
        assert_eq!(c.simulation.frame, frame + 1);
        assert_eq!(c.run_state(), RunState::Stopped);
        c.step_once();
        assert_eq!(c.simulation.frame, frame + 2);
        assert_eq!(c.run_state(), RunState::Stopped);
    }
}
