use glam::DVec2;

/// Append-only position history: the starting position plus one point per
/// completed integration step.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    points: Vec<DVec2>,
}

impl Trace {
    pub(crate) fn seeded(start: DVec2) -> Self {
        Self {
            points: vec![start],
        }
    }

    pub(crate) fn push(&mut self, point: DVec2) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The full history, oldest first.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// The suffix selected by a display window. Purely a read: the
    /// underlying history is never shortened.
    pub fn window(&self, window: TraceWindow) -> &[DVec2] {
        match window {
            TraceWindow::Unbounded => &self.points,
            TraceWindow::Last(n) => {
                let start = self.points.len().saturating_sub(n);
                &self.points[start..]
            }
        }
    }
}

/// How much of a trace the presentation layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceWindow {
    /// Show the whole history.
    Unbounded,
    /// Show only the most recent `n` points. `Last(0)` hides the trace.
    Last(usize),
}

/// A gravitating body.
///
/// `mass` is the current effective mass; `initial_mass` keeps the catalog
/// baseline so rescaling never compounds. Fields are crate-private: outside
/// the engine, writes go through the `Simulation` entry points.
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) name: String,
    pub(crate) mass: f64,
    pub(crate) initial_mass: f64,
    pub(crate) position: DVec2,
    pub(crate) velocity: DVec2,
    pub(crate) trace: Trace,
}

impl Body {
    /// A body with its trace seeded at the starting position.
    pub fn new(name: impl Into<String>, mass: f64, position: DVec2, velocity: DVec2) -> Self {
        Self {
            name: name.into(),
            mass,
            initial_mass: mass,
            position,
            velocity,
            trace: Trace::seeded(position),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current effective mass in kg.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// The catalog mass this body was created with.
    pub fn initial_mass(&self) -> f64 {
        self.initial_mass
    }

    /// Position in metres.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Velocity in metres per second.
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.distance(other.position)
    }

    /// 0.5 * m * |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// m * (x * vy - y * vx) about the origin.
    pub fn angular_momentum(&self) -> f64 {
        self.mass * self.position.perp_dot(self.velocity)
    }
}
