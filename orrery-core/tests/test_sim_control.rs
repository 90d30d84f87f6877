//! Pause, time multiplier, and visibility entry points

use orrery_core::{solar_system, SimError, Simulation};

fn solar_sim() -> Simulation {
    Simulation::new(&solar_system()).unwrap()
}

#[test]
fn test_pause_freezes_everything() {
    let mut sim = solar_sim();
    sim.step_once();
    let positions: Vec<_> = sim.bodies().iter().map(|b| b.position()).collect();

    sim.set_paused(true);
    for _ in 0..5 {
        assert!(!sim.advance());
    }

    assert_eq!(sim.steps(), 1);
    for (body, pos) in sim.bodies().iter().zip(&positions) {
        assert_eq!(body.position(), *pos);
        assert_eq!(body.trace().len(), 2);
    }
}

#[test]
fn test_zero_multiplier_freezes_advance() {
    let mut sim = solar_sim();
    sim.set_time_multiplier(0.0);
    assert!(!sim.advance());
    assert_eq!(sim.steps(), 0);
    for body in sim.bodies() {
        assert_eq!(body.trace().len(), 1);
    }

    sim.set_time_multiplier(1.0);
    assert!(sim.advance());
    assert_eq!(sim.steps(), 1);
}

#[test]
fn test_manual_step_works_while_paused() {
    let mut sim = solar_sim();
    sim.set_paused(true);
    sim.step_once();
    assert_eq!(sim.steps(), 1);
    assert!(sim.is_paused());
}

#[test]
fn test_toggle_paused() {
    let mut sim = solar_sim();
    assert!(!sim.is_paused());
    sim.toggle_paused();
    assert!(sim.is_paused());
    sim.toggle_paused();
    assert!(!sim.is_paused());
}

#[test]
fn test_time_multiplier_clamped_at_zero() {
    let mut sim = solar_sim();
    assert_eq!(sim.time_multiplier(), 1.0);
    sim.set_time_multiplier(-3.0);
    assert_eq!(sim.time_multiplier(), 0.0);
    sim.set_time_multiplier(f64::NAN);
    assert_eq!(sim.time_multiplier(), 0.0);
    sim.set_time_multiplier(2.5);
    assert_eq!(sim.time_multiplier(), 2.5);
}

#[test]
fn test_show_trace_toggle() {
    let mut sim = solar_sim();
    sim.set_show_trace("Earth", false).unwrap();
    let earth = sim
        .appearances()
        .iter()
        .find(|a| a.name == "Earth")
        .unwrap();
    assert!(!earth.show_trace);

    assert!(matches!(
        sim.set_show_trace("Nibiru", true),
        Err(SimError::UnknownBody(_))
    ));
}

#[test]
fn test_appearances_parallel_to_bodies() {
    let sim = solar_sim();
    assert_eq!(sim.bodies().len(), sim.appearances().len());
    for (body, appearance) in sim.bodies().iter().zip(sim.appearances()) {
        assert_eq!(body.name(), appearance.name);
    }
}

#[test]
fn test_elapsed_days_counts_steps() {
    let mut sim = solar_sim();
    for _ in 0..3 {
        sim.step_once();
    }
    assert_eq!(sim.steps(), 3);
    assert_eq!(sim.elapsed_days(), 3);
}

#[test]
fn test_body_lookup() {
    let sim = solar_sim();
    assert_eq!(sim.body_count(), 9);
    assert!(sim.body("Neptune").is_some());
    assert!(sim.body("neptune").is_none());
}
