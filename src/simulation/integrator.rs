//! Fixed-step time integrator for the moving body
//!
//! Classical 4th-order Runge–Kutta on the first-order system
//! `x' = v`, `v' = a(x)`, driven by an `AccelSet`. Four acceleration
//! evaluations per step, local error O(h^5). The step size never changes.

use crate::error::SingularField;

use super::forces::AccelSet;
use super::states::{KinematicState, NVec2};

/// Time derivative of a kinematic state: (dx/dt, dv/dt)
#[derive(Debug, Clone, Copy)]
struct Derivative {
    dx: NVec2,
    dv: NVec2,
}

/// Evaluate the derivative at position `x` moving with velocity `v`
fn derivative(forces: &AccelSet, x: &NVec2, v: &NVec2) -> Result<Derivative, SingularField> {
    Ok(Derivative {
        dx: *v,
        dv: forces.accumulate(x)?,
    })
}

/// Advance `state` by one step of size `h`.
///
/// Returns a new state; `state` itself is left untouched. Time advances by
/// exactly `h`. Fails only if a stage lands exactly on a body's center.
pub fn rk4_step(state: &KinematicState, forces: &AccelSet, h: f64) -> Result<KinematicState, SingularField> {
    let half_h = 0.5 * h;

    // k1 at the current state
    let k1 = derivative(forces, &state.x, &state.v)?;

    // k2 at the half step using k1
    let k2 = derivative(forces, &(state.x + half_h * k1.dx), &(state.v + half_h * k1.dv))?;

    // k3 at the half step using k2
    let k3 = derivative(forces, &(state.x + half_h * k2.dx), &(state.v + half_h * k2.dv))?;

    // k4 at the full step using k3
    let k4 = derivative(forces, &(state.x + h * k3.dx), &(state.v + h * k3.dv))?;

    // weights (1, 2, 2, 1) / 6
    let sixth_h = h / 6.0;
    let x = state.x + sixth_h * (k1.dx + 2.0 * k2.dx + 2.0 * k3.dx + k4.dx);
    let v = state.v + sixth_h * (k1.dv + 2.0 * k2.dv + 2.0 * k3.dv + k4.dv);

    Ok(KinematicState::new(x, v, state.t + h))
}
