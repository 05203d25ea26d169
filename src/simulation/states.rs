//! Core state types for the rocket simulation.
//!
//! Defines the 2D value types shared by every stage of a run:
//! - `CelestialBody` a fixed gravitating mass (Earth, Moon, ...)
//! - `KinematicState` the rocket's position, velocity and time
//!
//! Both are plain values. A run never mutates a body, and a state is
//! replaced wholesale by the integrator once per step.

use nalgebra::Vector2;

use super::params::{EARTH_MASS, EARTH_RADIUS, MOON_DISTANCE, MOON_MASS, MOON_RADIUS};

pub type NVec2 = Vector2<f64>;

/// A gravitating body held at a fixed position for the whole run
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub mass: f64,   // kg
    pub radius: f64, // m, surface used for crash detection
    pub x: NVec2,    // fixed position (m)
}

impl CelestialBody {
    pub fn new(name: impl Into<String>, mass: f64, radius: f64, x: NVec2) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
            x,
        }
    }

    /// Earth centered on the origin
    pub fn earth() -> Self {
        Self::new("Earth", EARTH_MASS, EARTH_RADIUS, NVec2::zeros())
    }

    /// Moon parked on the +x axis at its mean distance from Earth.
    /// It does not orbit: bodies are static for the duration of a run.
    pub fn moon() -> Self {
        Self::new("Moon", MOON_MASS, MOON_RADIUS, NVec2::new(MOON_DISTANCE, 0.0))
    }

    /// Zero mass: no pull, no potential, no surface
    pub fn is_massless(&self) -> bool {
        self.mass == 0.0
    }

    /// Euclidean distance from the body's center to `p`
    pub fn distance_to(&self, p: &NVec2) -> f64 {
        (p - self.x).norm()
    }
}

/// Instantaneous state of the moving body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub t: f64,   // simulation time (s)
}

impl KinematicState {
    pub fn new(x: NVec2, v: NVec2, t: f64) -> Self {
        Self { x, v, t }
    }

    /// State at `t = 0` from raw components
    pub fn from_components(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self::new(NVec2::new(x, y), NVec2::new(vx, vy), 0.0)
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite()) && self.t.is_finite()
    }
}
