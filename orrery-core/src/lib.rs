pub mod body;
pub mod catalog;
pub mod clock;
pub mod energy;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod sim;

pub use body::{Body, Trace, TraceWindow};
pub use catalog::{circular_velocity, solar_system, Appearance, BodySpec, CatalogError, Velocity, AU};
pub use clock::{StepClock, MAX_STEPS_PER_TICK, STEP_INTERVAL};
pub use forces::{gravitational_force, net_forces, G};
pub use integrator::{step, DT};
pub use scenario::{parse_scenario, ScenarioError};
pub use sim::{SimError, Simulation};
