//! Build validated runs from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`:
//! - a validated `RunConfig` (rocket mass, `G`, bodies, step, target time)
//! - the rocket's initial `KinematicState` at `t = 0`
//!
//! The secondary body is only placed in the body list when the scenario
//! selects it, so the primary is always entry 0.

use crate::configuration::config::ScenarioConfig;
use crate::error::ConfigError;

use super::engine::SimulationRun;
use super::params::RunConfig;
use super::states::{CelestialBody, KinematicState, NVec2};

/// A ready-to-run bundle: configuration plus initial state
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub config: RunConfig,
    pub initial: KinematicState,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        // Bodies: primary first, secondary only if selected
        let mut bodies: Vec<CelestialBody> = vec![(&cfg.primary).into()];
        if cfg.secondary_active {
            let secondary = cfg.secondary.as_ref().ok_or(ConfigError::MissingSecondary)?;
            bodies.push(secondary.into());
        }

        let p = &cfg.parameters;
        let config = RunConfig::new(cfg.rocket.mass, p.g, bodies, p.h, p.target_time)?;

        // Initial rocket state at t = 0
        let initial = KinematicState::new(
            NVec2::new(cfg.rocket.x[0], cfg.rocket.x[1]),
            NVec2::new(cfg.rocket.v[0], cfg.rocket.v[1]),
            0.0,
        );
        if !initial.is_finite() {
            return Err(ConfigError::NonFinite("initial state"));
        }

        Ok(Self { config, initial })
    }

    /// Start a fresh run of this scenario
    pub fn start(&self) -> Result<SimulationRun, ConfigError> {
        SimulationRun::new(self.config.clone(), self.initial)
    }
}
