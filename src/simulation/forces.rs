//! Acceleration contributors for the moving body
//!
//! Defines the `Acceleration` trait and `AccelSet`, an ordered sum of terms.
//! The only term used by runs is `FixedBodyGravity`, one per celestial body,
//! but the set is open so other terms can be registered the same way.

use crate::error::SingularField;

use super::params::RunConfig;
use super::states::{CelestialBody, NVec2};

/// Collection of acceleration terms.
/// Contributions are summed in registration order into a single vector.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// One gravity term per configured body, primary first
    pub fn gravity_from(config: &RunConfig) -> Self {
        config
            .bodies()
            .iter()
            .fold(Self::new(), |set, body| {
                set.with(FixedBodyGravity {
                    gravitational_constant: config.gravitational_constant(),
                    body: body.clone(),
                })
            })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total acceleration at position `x`
    pub fn accumulate(&self, x: &NVec2) -> Result<NVec2, SingularField> {
        let mut out = NVec2::zeros();
        for term in &self.terms {
            term.acceleration(x, &mut out)?;
        }
        Ok(out)
    }
}

/// Acceleration source evaluated at a single point.
/// Implementations add their contribution into `out`.
pub trait Acceleration {
    fn acceleration(&self, x: &NVec2, out: &mut NVec2) -> Result<(), SingularField>;
}

/// Newtonian pull of a body that never moves.
/// No softening: evaluating exactly at the center of a massive body is an error.
pub struct FixedBodyGravity {
    pub gravitational_constant: f64,
    pub body: CelestialBody,
}

impl Acceleration for FixedBodyGravity {
    fn acceleration(&self, x: &NVec2, out: &mut NVec2) -> Result<(), SingularField> {
        if self.body.is_massless() {
            return Ok(());
        }

        // r points from the body to the evaluation point
        let r = x - self.body.x;
        let r2 = r.dot(&r);
        if r2 == 0.0 {
            return Err(SingularField {
                body: self.body.name.clone(),
            });
        }

        let inv_r = r2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;

        // a = -G M r / |r|^3, pointing back toward the body
        *out -= self.gravitational_constant * self.body.mass * inv_r3 * r;
        Ok(())
    }
}
