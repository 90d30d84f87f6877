//! The simulation controller: single owner of the canonical state.

use crate::body::{Body, TraceWindow};
use crate::catalog::{build, Appearance, BodySpec, CatalogError};
use crate::integrator::{step, DT};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("unknown body '{0}'")]
    UnknownBody(String),
    #[error("mass multiplier for '{name}' must be positive and finite, got {multiplier}")]
    InvalidMassMultiplier { name: String, multiplier: f64 },
}

/// Owns the body snapshot, the parallel appearance records, and the pacing
/// configuration. Every mutation of simulation state goes through these
/// methods; readers get shared slices.
#[derive(Debug)]
pub struct Simulation {
    bodies: Vec<Body>,
    appearances: Vec<Appearance>,
    name_to_idx: HashMap<String, usize>,
    steps: u64,
    time_multiplier: f64,
    paused: bool,
    trace_window: TraceWindow,
}

impl Simulation {
    pub fn new(specs: &[BodySpec]) -> Result<Self, CatalogError> {
        let (bodies, appearances) = build(specs)?;
        let name_to_idx = bodies
            .iter()
            .enumerate()
            .map(|(idx, body)| (body.name().to_string(), idx))
            .collect();
        Ok(Self {
            bodies,
            appearances,
            name_to_idx,
            steps: 0,
            time_multiplier: 1.0,
            paused: false,
            trace_window: TraceWindow::Unbounded,
        })
    }

    /// Scheduled step: refuses while paused or at multiplier zero, leaving
    /// state and traces untouched. Returns whether a step ran.
    pub fn advance(&mut self) -> bool {
        if self.paused || self.time_multiplier <= 0.0 {
            return false;
        }
        self.step_once();
        true
    }

    /// Unconditional single step, the manual path: replaces the snapshot
    /// and extends every trace by one point.
    pub fn step_once(&mut self) {
        self.bodies = step(&self.bodies, DT);
        self.steps += 1;
    }

    /// Rescale a body's mass from its catalog baseline:
    /// `mass = initial_mass * multiplier`. Never compounds; a multiplier of
    /// 1.0 restores the original exactly. Takes effect on the next step.
    pub fn set_mass_multiplier(&mut self, name: &str, multiplier: f64) -> Result<(), SimError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(SimError::InvalidMassMultiplier {
                name: name.to_string(),
                multiplier,
            });
        }
        let idx = self.index_of(name)?;
        let body = &mut self.bodies[idx];
        body.mass = body.initial_mass * multiplier;
        Ok(())
    }

    /// Current multiplier for a body, `mass / initial_mass`.
    pub fn mass_multiplier(&self, name: &str) -> Result<f64, SimError> {
        let body = &self.bodies[self.index_of(name)?];
        Ok(body.mass() / body.initial_mass())
    }

    pub fn set_show_trace(&mut self, name: &str, show: bool) -> Result<(), SimError> {
        let idx = self.index_of(name)?;
        self.appearances[idx].show_trace = show;
        Ok(())
    }

    /// Clamped at zero from below; non-finite values count as zero.
    pub fn set_time_multiplier(&mut self, multiplier: f64) {
        self.time_multiplier = if multiplier.is_finite() {
            multiplier.max(0.0)
        } else {
            0.0
        };
    }

    pub fn time_multiplier(&self) -> f64 {
        self.time_multiplier
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_trace_window(&mut self, window: TraceWindow) {
        self.trace_window = window;
    }

    pub fn trace_window(&self) -> TraceWindow {
        self.trace_window
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Appearance records in the same order as `bodies()`.
    pub fn appearances(&self) -> &[Appearance] {
        &self.appearances
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.name_to_idx.get(name).map(|&idx| &self.bodies[idx])
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Completed integration steps since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// One step is one simulated day.
    pub fn elapsed_days(&self) -> u64 {
        self.steps
    }

    fn index_of(&self, name: &str) -> Result<usize, SimError> {
        self.name_to_idx
            .get(name)
            .copied()
            .ok_or_else(|| SimError::UnknownBody(name.to_string()))
    }
}
