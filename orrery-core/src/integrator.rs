use crate::body::Body;
use crate::forces::net_forces;

/// Fixed integration step: one simulated day, in seconds.
pub const DT: f64 = 86_400.0;

/// Advance every body by `dt` and return the next snapshot.
///
/// Semi-implicit Euler: velocities update from accelerations first, then
/// positions update from the new velocities. The input snapshot is left
/// untouched; each returned body carries its trace extended by exactly one
/// point.
pub fn step(bodies: &[Body], dt: f64) -> Vec<Body> {
    // Compute all forces from the same snapshot before anything moves.
    let forces = net_forces(bodies);

    bodies
        .iter()
        .zip(forces)
        .map(|(body, force)| {
            let acceleration = force / body.mass;
            let velocity = body.velocity + acceleration * dt;
            let position = body.position + velocity * dt;

            let mut next = body.clone();
            next.velocity = velocity;
            next.position = position;
            next.trace.push(position);
            next
        })
        .collect()
}
