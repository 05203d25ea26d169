//! Physical constants and validated run parameters
//!
//! `RunConfig` holds everything a run needs besides the initial state:
//! - rocket mass and gravitational constant `G`,
//! - the ordered list of celestial bodies (primary first, optional secondary),
//! - fixed step size `h` and the target simulation time.
//!
//! A `RunConfig` can only be obtained through [`RunConfig::new`], which
//! rejects bad inputs up front so the run loop never has to.

use crate::error::ConfigError;

use super::states::CelestialBody;

pub const G_CONSTANT: f64 = 6.67430e-11; // m^3 kg^-1 s^-2

pub const EARTH_MASS: f64 = 5.972e24; // kg
pub const EARTH_RADIUS: f64 = 6.371e6; // m

pub const MOON_MASS: f64 = 7.347e22; // kg
pub const MOON_RADIUS: f64 = 1.737e6; // m
pub const MOON_DISTANCE: f64 = 3.85e8; // m, from Earth's center

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    mass: f64,
    gravitational_constant: f64,
    bodies: Vec<CelestialBody>,
    h: f64,
    target_time: f64,
}

impl RunConfig {
    pub fn new(
        mass: f64,
        gravitational_constant: f64,
        bodies: Vec<CelestialBody>,
        h: f64,
        target_time: f64,
    ) -> Result<Self, ConfigError> {
        if !mass.is_finite() {
            return Err(ConfigError::NonFinite("mass"));
        }
        if mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(mass));
        }
        if !gravitational_constant.is_finite() {
            return Err(ConfigError::NonFinite("gravitational constant"));
        }
        if gravitational_constant <= 0.0 {
            return Err(ConfigError::NonPositiveGravitationalConstant(gravitational_constant));
        }
        if !h.is_finite() {
            return Err(ConfigError::NonFinite("time step"));
        }
        if h <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(h));
        }
        if !target_time.is_finite() {
            return Err(ConfigError::NonFinite("target time"));
        }
        if target_time <= 0.0 {
            return Err(ConfigError::NonPositiveTargetTime(target_time));
        }
        if bodies.is_empty() || bodies.len() > 2 {
            return Err(ConfigError::BodyCount(bodies.len()));
        }
        for b in &bodies {
            validate_body(b)?;
        }

        Ok(Self {
            mass,
            gravitational_constant,
            bodies,
            h,
            target_time,
        })
    }

    /// Earth only, or Earth and Moon, with the standard constants
    pub fn earth_moon(mass: f64, with_moon: bool, h: f64, target_time: f64) -> Result<Self, ConfigError> {
        let mut bodies = vec![CelestialBody::earth()];
        if with_moon {
            bodies.push(CelestialBody::moon());
        }
        Self::new(mass, G_CONSTANT, bodies, h, target_time)
    }

    /// Same configuration with a different step size
    pub fn with_step(&self, h: f64) -> Result<Self, ConfigError> {
        Self::new(
            self.mass,
            self.gravitational_constant,
            self.bodies.clone(),
            h,
            self.target_time,
        )
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn primary(&self) -> &CelestialBody {
        &self.bodies[0]
    }

    pub fn secondary(&self) -> Option<&CelestialBody> {
        self.bodies.get(1)
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn target_time(&self) -> f64 {
        self.target_time
    }
}

// A zero-mass body is accepted: it stands in for an absent body and is ignored by every stage.
fn validate_body(b: &CelestialBody) -> Result<(), ConfigError> {
    if !b.mass.is_finite() || !b.radius.is_finite() || !b.x.iter().all(|c| c.is_finite()) {
        return Err(ConfigError::NonFinite("celestial body"));
    }
    if b.mass < 0.0 {
        return Err(ConfigError::NegativeBodyMass {
            body: b.name.clone(),
            mass: b.mass,
        });
    }
    if b.radius <= 0.0 {
        return Err(ConfigError::NonPositiveRadius {
            body: b.name.clone(),
            radius: b.radius,
        });
    }
    Ok(())
}
