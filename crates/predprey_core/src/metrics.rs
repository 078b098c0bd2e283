//! Run metrics and structured logging.
//!
//! `RunMetrics` keeps cumulative event totals for a model run and emits a
//! periodic `tracing` summary.

use crate::systems::StepReport;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Cumulative totals over all steps of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTotals {
    pub steps: u64,
    pub prey_births: u64,
    pub predator_births: u64,
    pub prey_eaten: u64,
    pub prey_starved: u64,
    pub predators_starved: u64,
    pub grass_eaten: u64,
    pub grass_regrown: u64,
}

impl RunTotals {
    fn absorb(&mut self, report: &StepReport) {
        self.steps += 1;
        self.prey_births += report.prey_births as u64;
        self.predator_births += report.predator_births as u64;
        self.prey_eaten += report.prey_eaten as u64;
        self.prey_starved += report.prey_starved as u64;
        self.predators_starved += report.predators_starved as u64;
        self.grass_eaten += report.grass_eaten as u64;
        self.grass_regrown += report.grass_regrown as u64;
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.prey_births + self.predator_births
    }
}

/// Metrics collector owned by a model.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    totals: RunTotals,
    busy: Duration,
    log_interval: u64,
    start_time: Instant,
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RunMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::with_interval(50)
    }

    /// `log_interval` is the number of steps between `info` summaries;
    /// 0 disables them.
    #[must_use]
    pub fn with_interval(log_interval: u64) -> Self {
        Self {
            totals: RunTotals::default(),
            busy: Duration::ZERO,
            log_interval,
            start_time: Instant::now(),
        }
    }

    /// Records a completed step with its duration and resulting counts.
    pub fn record_step(
        &mut self,
        duration: Duration,
        report: &StepReport,
        prey: usize,
        predators: usize,
    ) {
        self.totals.absorb(report);
        self.busy += duration;

        let step = self.totals.steps;
        if self.log_interval > 0 && step % self.log_interval == 0 {
            tracing::info!(
                step,
                prey,
                predators,
                births = self.totals.births(),
                busy_ms = self.busy.as_millis() as u64,
                "Simulation progress"
            );
        }
    }

    #[must_use]
    pub fn totals(&self) -> &RunTotals {
        &self.totals
    }

    /// Time spent inside scheduler steps.
    #[must_use]
    pub fn busy(&self) -> Duration {
        self.busy
    }

    /// Mean scheduler time per step, or zero before the first step.
    #[must_use]
    pub fn mean_step_time(&self) -> Duration {
        match u32::try_from(self.totals.steps) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.busy / n,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs a formatting subscriber filtered by `RUST_LOG`, defaulting to
/// `info`. Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
