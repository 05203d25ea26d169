//! Configuration types for loading rocket scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! run. A scenario consists of:
//!
//! - [`RocketConfig`]     – rocket mass and initial position/velocity
//! - [`ParametersConfig`] – step size, target time and `G`
//! - [`BodyConfig`]       – primary body and optional secondary body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An Earth–Moon scenario matching these types:
//!
//! ```yaml
//! rocket:
//!   mass: 100.0              # kg
//!   x: [ 0.0, 7.0e6 ]        # initial position (m)
//!   v: [ 7546.0, 0.0 ]       # initial velocity (m/s)
//!
//! parameters:
//!   h: 10.0                  # fixed step size (s)
//!   target_time: 10000.0     # total simulation time (s)
//!   G: 6.67430e-11           # optional, defaults to the SI value
//!
//! primary:                   # optional, defaults to Earth at the origin
//!   name: Earth
//!   mass: 5.972e24
//!   radius: 6.371e6
//!   x: [ 0.0, 0.0 ]
//!
//! secondary_active: true     # include the secondary body (Moon by default)
//! ```
//!
//! [`Scenario::build_scenario`](crate::Scenario::build_scenario) validates the
//! values and maps them onto the runtime types.

use serde::Deserialize;

use crate::simulation::params::G_CONSTANT;
use crate::simulation::states::{CelestialBody, NVec2};

/// Rocket's initial conditions
#[derive(Deserialize, Debug, Clone)]
pub struct RocketConfig {
    pub mass: f64,   // kg
    pub x: [f64; 2], // initial position (m)
    pub v: [f64; 2], // initial velocity (m/s)
}

/// Numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h: f64,           // fixed time step (s)
    pub target_time: f64, // run until t >= target_time (s)
    #[serde(rename = "G", default = "default_g")]
    pub g: f64, // gravitational constant
}

fn default_g() -> f64 {
    G_CONSTANT
}

/// A fixed celestial body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,   // kg
    pub radius: f64, // m
    #[serde(default)]
    pub x: [f64; 2], // fixed position (m), origin if omitted
}

impl From<&BodyConfig> for CelestialBody {
    fn from(bc: &BodyConfig) -> Self {
        CelestialBody::new(bc.name.clone(), bc.mass, bc.radius, NVec2::new(bc.x[0], bc.x[1]))
    }
}

impl From<&CelestialBody> for BodyConfig {
    fn from(b: &CelestialBody) -> Self {
        BodyConfig {
            name: b.name.clone(),
            mass: b.mass,
            radius: b.radius,
            x: [b.x.x, b.x.y],
        }
    }
}

fn default_primary() -> BodyConfig {
    (&CelestialBody::earth()).into()
}

fn default_secondary() -> Option<BodyConfig> {
    Some((&CelestialBody::moon()).into())
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub rocket: RocketConfig,
    pub parameters: ParametersConfig,
    #[serde(default = "default_primary")]
    pub primary: BodyConfig,
    #[serde(default = "default_secondary")]
    pub secondary: Option<BodyConfig>,
    #[serde(default)]
    pub secondary_active: bool, // `false` - primary only, `true` - primary and secondary
}
