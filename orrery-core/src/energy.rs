//! Conservation diagnostics over a snapshot.
//!
//! Semi-implicit Euler keeps these quantities bounded rather than exact;
//! the headless runner reports their drift and the tests bound it.

use crate::body::Body;
use crate::forces::G;

/// Total kinetic energy, 0.5 * m * |v|^2 summed over bodies.
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Total gravitational potential energy, -G * mi * mj / d summed over
/// unordered pairs. Coincident pairs contribute nothing, consistent with
/// the zero-distance force guard.
pub fn potential_energy(bodies: &[Body]) -> f64 {
    let mut total = 0.0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let d = bodies[i].position().distance(bodies[j].position());
            if d > 0.0 {
                total -= G * bodies[i].mass() * bodies[j].mass() / d;
            }
        }
    }
    total
}

pub fn total_energy(bodies: &[Body]) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies)
}

/// Total angular momentum about the origin, m * (x * vy - y * vx) summed
/// over bodies.
pub fn angular_momentum(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::angular_momentum).sum()
}
