//! Mechanical energy diagnostics
//!
//! Kinetic, gravitational potential and total energy of the rocket for a
//! given state. Read-only: nothing here feeds back into the integration.

use super::params::RunConfig;
use super::states::KinematicState;

/// Energies of one logged state, in joules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySample {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

/// KE = 1/2 m |v|^2
pub fn kinetic_energy(state: &KinematicState, mass: f64) -> f64 {
    0.5 * mass * state.v.norm_squared()
}

/// GPE = sum over bodies of -G m M / |x - X|, massless bodies skipped
pub fn potential_energy(state: &KinematicState, config: &RunConfig) -> f64 {
    let g = config.gravitational_constant();
    let m = config.mass();
    config
        .bodies()
        .iter()
        .filter(|b| !b.is_massless())
        .map(|b| -(g * m * b.mass) / b.distance_to(&state.x))
        .sum()
}

pub fn energies(state: &KinematicState, config: &RunConfig) -> EnergySample {
    let kinetic = kinetic_energy(state, config.mass());
    let potential = potential_energy(state, config);
    EnergySample {
        kinetic,
        potential,
        total: kinetic + potential,
    }
}
