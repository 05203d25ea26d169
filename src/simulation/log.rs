//! Append-only history of a run
//!
//! Eight parallel sequences: position x/y, velocity x/y, time, and the
//! kinetic/potential/total energies of each logged state. Entry 0 is the
//! initial state; every completed step appends exactly one entry to each.

use super::energy::EnergySample;
use super::states::{KinematicState, NVec2};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesLog {
    x: Vec<f64>,
    y: Vec<f64>,
    vx: Vec<f64>,
    vy: Vec<f64>,
    t: Vec<f64>,
    kinetic: Vec<f64>,
    potential: Vec<f64>,
    total: Vec<f64>,
}

impl TimeSeriesLog {
    /// Log seeded with the initial state and its energies
    pub fn seeded(state: &KinematicState, energy: EnergySample) -> Self {
        let mut log = Self::default();
        log.push(state, energy);
        log
    }

    pub(crate) fn push(&mut self, state: &KinematicState, energy: EnergySample) {
        self.x.push(state.x.x);
        self.y.push(state.x.y);
        self.vx.push(state.v.x);
        self.vy.push(state.v.y);
        self.t.push(state.t);
        self.kinetic.push(energy.kinetic);
        self.potential.push(energy.potential);
        self.total.push(energy.total);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn vx(&self) -> &[f64] {
        &self.vx
    }

    pub fn vy(&self) -> &[f64] {
        &self.vy
    }

    pub fn time(&self) -> &[f64] {
        &self.t
    }

    pub fn kinetic(&self) -> &[f64] {
        &self.kinetic
    }

    pub fn potential(&self) -> &[f64] {
        &self.potential
    }

    pub fn total(&self) -> &[f64] {
        &self.total
    }

    /// Lengths of all eight sequences, in declaration order
    pub fn lengths(&self) -> [usize; 8] {
        [
            self.x.len(),
            self.y.len(),
            self.vx.len(),
            self.vy.len(),
            self.t.len(),
            self.kinetic.len(),
            self.potential.len(),
            self.total.len(),
        ]
    }

    pub fn state_at(&self, i: usize) -> Option<KinematicState> {
        Some(KinematicState::new(
            NVec2::new(*self.x.get(i)?, *self.y.get(i)?),
            NVec2::new(*self.vx.get(i)?, *self.vy.get(i)?),
            *self.t.get(i)?,
        ))
    }

    pub fn energy_at(&self, i: usize) -> Option<EnergySample> {
        Some(EnergySample {
            kinetic: *self.kinetic.get(i)?,
            potential: *self.potential.get(i)?,
            total: *self.total.get(i)?,
        })
    }

    pub fn last_state(&self) -> Option<KinematicState> {
        self.len().checked_sub(1).and_then(|i| self.state_at(i))
    }

    /// (TE_last - TE_0) / |TE_0|
    pub fn relative_energy_drift(&self) -> Option<f64> {
        let first = *self.total.first()?;
        let last = *self.total.last()?;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first.abs())
    }
}
