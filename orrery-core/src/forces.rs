use crate::body::Body;
use glam::DVec2;

/// Gravitational constant in m^3 kg^-1 s^-2.
pub const G: f64 = 6.6743e-11;

/// Force exerted on `on` by `from`: G * m1 * m2 / d^2 along the line
/// toward `from`.
///
/// Exactly coincident positions produce a zero force. There is no softening
/// beyond that guard; near-zero separations yield the large forces the
/// formula dictates.
pub fn gravitational_force(on: &Body, from: &Body) -> DVec2 {
    let r = from.position - on.position;
    let distance = r.length();
    if distance == 0.0 {
        return DVec2::ZERO;
    }
    // The mass product is grouped so both orderings of a pair compute the
    // same magnitude and the returned forces are exact opposites.
    let magnitude = G * (on.mass * from.mass) / (distance * distance);
    (r / distance) * magnitude
}

/// Net force on every body from every other body (self-pairs skipped).
///
/// All pair evaluations read the same snapshot, so the result does not
/// depend on body order. O(n^2): n * (n - 1) force evaluations per call.
pub fn net_forces(bodies: &[Body]) -> Vec<DVec2> {
    let mut forces = vec![DVec2::ZERO; bodies.len()];
    for i in 0..bodies.len() {
        for j in 0..bodies.len() {
            if i != j {
                forces[i] += gravitational_force(&bodies[i], &bodies[j]);
            }
        }
    }
    forces
}
