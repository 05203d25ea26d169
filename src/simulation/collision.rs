//! Surface-crossing checks against the celestial bodies

use super::states::{CelestialBody, KinematicState};

/// First body (in configuration order) whose surface the state is strictly
/// inside of, if any. Touching the surface exactly is not a crash.
/// Massless bodies stand in for an absent body and are never hit.
pub fn detect_crash<'a>(state: &KinematicState, bodies: &'a [CelestialBody]) -> Option<&'a CelestialBody> {
    bodies
        .iter()
        .filter(|b| !b.is_massless())
        .find(|b| b.distance_to(&state.x) < b.radius)
}
