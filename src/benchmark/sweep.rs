//! Step-size sweeps over independent runs
//!
//! Runs one `SimulationRun` per step size from the same scenario and
//! reports how each one ended, how far total energy drifted and how long
//! it took. Runs share nothing mutable, so they are spread over the rayon
//! pool. Output is CSV so it can be pasted straight into a spreadsheet.

use std::time::Instant;

use rayon::prelude::*;

use crate::error::ConfigError;
use crate::simulation::engine::{RunOutcome, SimulationRun};
use crate::simulation::scenario::Scenario;

/// Result of one run in a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub h: f64,
    pub steps: usize,
    pub outcome: RunOutcome,
    pub energy_drift: Option<f64>, // (TE_last - TE_0) / |TE_0|
    pub elapsed_ms: f64,
}

/// Run `scenario` once per entry of `hs`, rows in the same order as `hs`.
/// Every run is built and validated before any of them steps.
pub fn step_size_sweep(scenario: &Scenario, hs: &[f64]) -> Result<Vec<SweepRow>, ConfigError> {
    let runs = hs
        .iter()
        .map(|&h| SimulationRun::new(scenario.config.with_step(h)?, scenario.initial))
        .collect::<Result<Vec<_>, _>>()?;

    let rows = runs
        .into_par_iter()
        .map(|mut run| {
            let h = run.config().h();
            let t0 = Instant::now();
            let outcome = run.run();
            let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

            SweepRow {
                h,
                steps: run.steps(),
                outcome,
                energy_drift: run.log().relative_energy_drift(),
                elapsed_ms,
            }
        })
        .collect();

    Ok(rows)
}

/// Render sweep rows as CSV with a header line
pub fn sweep_csv(rows: &[SweepRow]) -> String {
    let mut out = String::from("h,steps,outcome,energy_drift,elapsed_ms\n");
    for row in rows {
        let outcome = match &row.outcome {
            RunOutcome::Completed => "completed".to_string(),
            RunOutcome::Crashed { body_name, .. } => format!("crashed:{body_name}"),
        };
        let drift = row.energy_drift.map(|d| format!("{d:.3e}")).unwrap_or_default();
        out.push_str(&format!("{},{},{},{},{:.3}\n", row.h, row.steps, outcome, drift, row.elapsed_ms));
    }
    out
}
