use crate::body::{Body, Species};
use crate::config::SimConfig;
use ultraviolet::Vec2;

/// Spawn one body at a uniformly random in-bounds position with velocity
/// components drawn independently from [-speed/2, speed/2]. Speed is passed
/// explicitly so spawning never reads ambient state.
pub fn spawn_body(config: &SimConfig, species: Species, speed: f32) -> Body {
    let r = config.particle_radius;
    let pos = Vec2::new(
        r + fastrand::f32() * (config.width - 2.0 * r),
        r + fastrand::f32() * (config.height - 2.0 * r),
    );
    let vel = Vec2::new(
        (fastrand::f32() - 0.5) * speed,
        (fastrand::f32() - 0.5) * speed,
    );
    Body::new(pos, vel, r, species)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn spawned_bodies_start_in_bounds() {
        fastrand::seed(7);
        let cfg = SimConfig::default();
        for _ in 0..200 {
            let b = spawn_body(&cfg, Species::Rock, config::DEFAULT_SPEED);
            assert!(b.pos.x >= cfg.particle_radius && b.pos.x <= cfg.width - cfg.particle_radius);
            assert!(b.pos.y >= cfg.particle_radius && b.pos.y <= cfg.height - cfg.particle_radius);
        }
    }

    #[test]
    fn spawn_velocity_components_stay_within_half_speed() {
        fastrand::seed(7);
        let cfg = SimConfig::default();
        let speed = 6.0;
        for _ in 0..200 {
            let b = spawn_body(&cfg, Species::Scissors, speed);
            assert!(b.vel.x.abs() <= speed / 2.0);
            assert!(b.vel.y.abs() <= speed / 2.0);
        }
    }
}
