//! Unit tests for the pairwise gravity model

use glam::DVec2;
use orrery_core::tests::test_helpers::{approx_eq, approx_eq_rel, two_body_pair};
use orrery_core::{gravitational_force, net_forces, Body, G};

#[test]
fn test_force_magnitude_and_direction() {
    let a = Body::new("a", 2.0e20, DVec2::new(0.0, 0.0), DVec2::ZERO);
    let b = Body::new("b", 3.0e20, DVec2::new(3.0e5, 4.0e5), DVec2::ZERO);

    // Distance is 5e5, so |F| = G * m_a * m_b / 25e10.
    let force = gravitational_force(&a, &b);
    let expected_magnitude = G * 2.0e20 * 3.0e20 / (5.0e5 * 5.0e5);
    assert!(approx_eq_rel(force.length(), expected_magnitude, 1e-12));

    // Direction from a toward b is (0.6, 0.8).
    assert!(approx_eq(force.x / force.length(), 0.6, 1e-12));
    assert!(approx_eq(force.y / force.length(), 0.8, 1e-12));
}

#[test]
fn test_reference_pair_force() {
    let bodies = two_body_pair();
    let force = gravitational_force(&bodies[0], &bodies[1]);

    // G * m1 * m2 / d^2 = 6.6743e-11 * 1e30 * 1e24 / 1e22 = 6.6743e21 N,
    // entirely along +x on the heavy body.
    assert!(approx_eq_rel(force.x, 6.6743e21, 1e-12));
    assert_eq!(force.y, 0.0);
}

#[test]
fn test_newtons_third_law() {
    let bodies = two_body_pair();
    let on_heavy = gravitational_force(&bodies[0], &bodies[1]);
    let on_light = gravitational_force(&bodies[1], &bodies[0]);
    assert_eq!(on_heavy, -on_light);
}

#[test]
fn test_coincident_bodies_exert_no_force() {
    let a = Body::new("a", 1e30, DVec2::new(5.0, 5.0), DVec2::ZERO);
    let b = Body::new("b", 1e30, DVec2::new(5.0, 5.0), DVec2::ZERO);
    assert_eq!(gravitational_force(&a, &b), DVec2::ZERO);
    assert_eq!(gravitational_force(&b, &a), DVec2::ZERO);
}

#[test]
fn test_near_zero_separation_still_uses_the_formula() {
    // The guard fires on exact coincidence only; tiny separations get the
    // huge force the inverse square dictates.
    let a = Body::new("a", 1e30, DVec2::ZERO, DVec2::ZERO);
    let b = Body::new("b", 1e30, DVec2::new(1e-3, 0.0), DVec2::ZERO);
    let force = gravitational_force(&a, &b);
    assert!(force.x.is_finite());
    assert!(force.x > 1e50);
}

#[test]
fn test_net_forces_sum_over_others() {
    // Three collinear bodies; the middle one feels cancelling pulls.
    let bodies = vec![
        Body::new("left", 1e24, DVec2::new(-1e10, 0.0), DVec2::ZERO),
        Body::new("mid", 1e20, DVec2::new(0.0, 0.0), DVec2::ZERO),
        Body::new("right", 1e24, DVec2::new(1e10, 0.0), DVec2::ZERO),
    ];
    let forces = net_forces(&bodies);
    assert_eq!(forces.len(), 3);
    assert!(approx_eq(forces[1].x, 0.0, 1e-3));
    // The outer bodies pull toward the centre.
    assert!(forces[0].x > 0.0);
    assert!(forces[2].x < 0.0);
}

#[test]
fn test_lone_body_feels_nothing() {
    let lone = vec![Body::new("solo", 1e30, DVec2::ZERO, DVec2::ZERO)];
    assert_eq!(net_forces(&lone)[0], DVec2::ZERO);
}

#[test]
fn test_net_forces_independent_of_order() {
    let bodies = vec![
        Body::new("a", 1.989e30, DVec2::ZERO, DVec2::ZERO),
        Body::new("b", 5.972e24, DVec2::new(1.496e11, 0.0), DVec2::ZERO),
        Body::new("c", 6.39e23, DVec2::new(0.0, 2.2e11), DVec2::ZERO),
    ];
    let reversed: Vec<Body> = bodies.iter().rev().cloned().collect();

    let forward = net_forces(&bodies);
    let backward = net_forces(&reversed);
    assert_eq!(forward[0], backward[2]);
    assert_eq!(forward[1], backward[1]);
    assert_eq!(forward[2], backward[0]);
}
