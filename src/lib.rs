pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{CelestialBody, KinematicState, NVec2};
pub use simulation::params::{RunConfig, G_CONSTANT, EARTH_MASS, EARTH_RADIUS, MOON_MASS, MOON_RADIUS, MOON_DISTANCE};
pub use simulation::forces::{Acceleration, AccelSet, FixedBodyGravity};
pub use simulation::integrator::rk4_step;
pub use simulation::energy::{EnergySample, energies, kinetic_energy, potential_energy};
pub use simulation::collision::detect_crash;
pub use simulation::log::TimeSeriesLog;
pub use simulation::engine::{SimulationRun, RunStatus, RunOutcome, StateSummary};
pub use simulation::scenario::Scenario;
pub use configuration::config::{RocketConfig, ParametersConfig, BodyConfig, ScenarioConfig};
pub use benchmark::sweep::{SweepRow, step_size_sweep, sweep_csv};
pub use error::{ConfigError, SingularField};
