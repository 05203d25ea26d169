//! Run driver: stepping, logging and termination
//!
//! A `SimulationRun` owns its current state, its log and the acceleration
//! terms built from its `RunConfig`. It starts `Running` and ends in exactly
//! one terminal outcome: `Completed` once the target time is reached, or
//! `Crashed` when the rocket ends a step inside a body.
//!
//! Each step runs in a fixed order:
//! 1. RK4 step
//! 2. append the new state and its energies to the log
//! 3. crash check
//! 4. target-time check

use std::fmt;

use tracing::{debug, info, trace};

use crate::error::ConfigError;

use super::collision::detect_crash;
use super::energy::energies;
use super::forces::AccelSet;
use super::integrator::rk4_step;
use super::log::TimeSeriesLog;
use super::params::RunConfig;
use super::states::KinematicState;

/// How a finished run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed,
    Crashed {
        body_name: String,
        final_state: KinematicState,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunStatus {
    Running,
    Finished(RunOutcome),
}

impl RunStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running)
    }
}

pub struct SimulationRun {
    config: RunConfig,
    forces: AccelSet,
    state: KinematicState,
    log: TimeSeriesLog,
    status: RunStatus,
    steps: usize,
}

impl SimulationRun {
    /// Start a run. The log is seeded with `initial` and its energies.
    /// A non-finite initial state is rejected before anything is logged.
    pub fn new(config: RunConfig, initial: KinematicState) -> Result<Self, ConfigError> {
        if !initial.is_finite() {
            return Err(ConfigError::NonFinite("initial state"));
        }

        let forces = AccelSet::gravity_from(&config);
        let log = TimeSeriesLog::seeded(&initial, energies(&initial, &config));

        debug!(
            bodies = config.bodies().len(),
            h = config.h(),
            target_time = config.target_time(),
            "simulation run created"
        );

        Ok(Self {
            config,
            forces,
            state: initial,
            log,
            status: RunStatus::Running,
            steps: 0,
        })
    }

    /// Advance by one step unless the run is already finished.
    ///
    /// Stopping the calls at any point leaves a consistent log; there is no
    /// partially applied step.
    pub fn step(&mut self) -> &RunStatus {
        if !self.status.is_running() {
            return &self.status;
        }
        if self.state.t >= self.config.target_time() {
            self.finish(RunOutcome::Completed);
            return &self.status;
        }

        let next = match rk4_step(&self.state, &self.forces, self.config.h()) {
            Ok(next) => next,
            Err(singular) => {
                // no valid next state exists; the last logged state is final
                self.finish(RunOutcome::Crashed {
                    body_name: singular.body,
                    final_state: self.state,
                });
                return &self.status;
            }
        };

        self.log.push(&next, energies(&next, &self.config));
        self.state = next;
        self.steps += 1;
        trace!(step = self.steps, t = next.t, x = next.x.x, y = next.x.y, "step");

        let crashed = detect_crash(&next, self.config.bodies()).map(|b| b.name.clone());
        if let Some(body_name) = crashed {
            self.finish(RunOutcome::Crashed {
                body_name,
                final_state: next,
            });
            return &self.status;
        }

        if next.t >= self.config.target_time() {
            self.finish(RunOutcome::Completed);
        }
        &self.status
    }

    /// Step until a terminal outcome is reached
    pub fn run(&mut self) -> RunOutcome {
        loop {
            if let RunStatus::Finished(outcome) = self.step() {
                return outcome.clone();
            }
        }
    }

    fn finish(&mut self, outcome: RunOutcome) {
        match &outcome {
            RunOutcome::Completed => {
                info!(steps = self.steps, t = self.state.t, "run completed");
            }
            RunOutcome::Crashed { body_name, final_state } => {
                info!(steps = self.steps, t = final_state.t, body = %body_name, "rocket crashed");
            }
        }
        self.status = RunStatus::Finished(outcome);
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn log(&self) -> &TimeSeriesLog {
        &self.log
    }

    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    pub fn outcome(&self) -> Option<&RunOutcome> {
        match &self.status {
            RunStatus::Running => None,
            RunStatus::Finished(outcome) => Some(outcome),
        }
    }

    /// Completed steps so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn into_log(self) -> TimeSeriesLog {
        self.log
    }

    pub fn summary(&self) -> StateSummary {
        StateSummary {
            mass: self.config.mass(),
            state: self.state,
        }
    }

    /// Summary of log entry `i`
    pub fn summary_at(&self, i: usize) -> Option<StateSummary> {
        self.log.state_at(i).map(|state| StateSummary {
            mass: self.config.mass(),
            state,
        })
    }
}

/// Human-readable snapshot of the rocket for diagnostics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSummary {
    pub mass: f64,
    pub state: KinematicState,
}

impl fmt::Display for StateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rocket(mass={}, x={:.2}, y={:.2}, velocity_x={:.2}, velocity_y={:.2})",
            self.mass, self.state.x.x, self.state.x.y, self.state.v.x, self.state.v.y
        )
    }
}
