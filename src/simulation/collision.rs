// simulation/collision.rs
// Contains collision detection and resolution functions

use crate::simulation::Simulation;
use ultraviolet::Vec2;

/// Exhaustive unordered-pair scan in list order, no broad phase. A body
/// converted earlier in the pass participates in later pairs with its new
/// species.
pub fn collide(sim: &mut Simulation) {
    let len = sim.bodies.len();
    for i in 0..len {
        for j in (i + 1)..len {
            let d = sim.bodies[j].pos - sim.bodies[i].pos;
            let contact = sim.bodies[i].radius + sim.bodies[j].radius;
            if d.mag_sq() < contact * contact {
                resolve(sim, i, j);
            }
        }
    }
}

/// Equal-mass elastic response along the contact normal, then the
/// beats-conversion evaluated on the pre-collision species of both bodies.
pub fn resolve(sim: &mut Simulation, i: usize, j: usize) {
    let b1 = &sim.bodies[i];
    let b2 = &sim.bodies[j];
    let d = b2.pos - b1.pos;
    let d_sq = d.mag_sq();
    // Coincident centers have no defined normal; skip the pair.
    if d_sq == 0.0 {
        return;
    }
    let normal = d / d_sq.sqrt();
    let tangent = Vec2::new(-normal.y, normal.x);

    let v1n = b1.vel.dot(normal);
    let v1t = b1.vel.dot(tangent);
    let v2n = b2.vel.dot(normal);
    let v2t = b2.vel.dot(tangent);

    let species1 = b1.species;
    let species2 = b2.species;

    // Elastic equal-mass exchange: normal components swap, tangential stay.
    sim.bodies[i].vel = normal * v2n + tangent * v1t;
    sim.bodies[j].vel = normal * v1n + tangent * v2t;

    if species1.beats() == species2 {
        sim.bodies[j].convert_to(species1);
    } else if species2.beats() == species1 {
        sim.bodies[i].convert_to(species2);
    }
}
