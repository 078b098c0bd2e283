//! The model driver: owns the configuration, the population store, the
//! seeded random stream and the per-step count log.

use crate::config::SimConfig;
use crate::metrics::RunMetrics;
use crate::population::Population;
use crate::systems::{self, StepReport};
use predprey_data::PopulationLog;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

pub struct Model {
    config: SimConfig,
    population: Population,
    rng: ChaCha8Rng,
    tick: usize,
    log: PopulationLog,
    metrics: RunMetrics,
    faulted: bool,
}

impl Model {
    /// Validates `config`, seeds the random stream from `config.model.seed`,
    /// samples the initial populations and records them as step 0.
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.model.seed);
        let population = Population::random_with_rng(&config, &mut rng);
        Ok(Self::assemble(config, population, rng))
    }

    /// Uses a caller-built population instead of sampling one. Only the
    /// behavioural parameters of `config` are validated; the `[model]`
    /// population sizes are ignored.
    pub fn with_population(config: SimConfig, population: Population) -> anyhow::Result<Self> {
        config.validate_parameters()?;
        let rng = ChaCha8Rng::seed_from_u64(config.model.seed);
        Ok(Self::assemble(config, population, rng))
    }

    fn assemble(config: SimConfig, population: Population, rng: ChaCha8Rng) -> Self {
        let mut log = PopulationLog::with_capacity(config.model.steps);
        let (prey, predators, grass) = population.counts(config.grass.log_divisor);
        log.push(prey, predators, grass);

        tracing::debug!(
            prey,
            predators,
            grass_patches = population.grass.len(),
            seed = config.model.seed,
            fingerprint = %config.fingerprint(),
            "Model initialised"
        );

        Self {
            config,
            population,
            rng,
            tick: 0,
            log,
            metrics: RunMetrics::new(),
            faulted: false,
        }
    }

    /// Advances one step and appends its counts to the log. A fault aborts
    /// the step and ends the run: every later call fails.
    pub fn step(&mut self) -> anyhow::Result<StepReport> {
        anyhow::ensure!(
            !self.faulted,
            "run aborted by a fault at step {}; the model cannot be stepped again",
            self.tick + 1
        );

        let started = Instant::now();
        let prey_before = self.population.prey.len();
        let predators_before = self.population.predators.len();

        let tick = self.tick + 1;
        let report = match systems::step(&mut self.population, &self.config, &mut self.rng) {
            Ok(report) => report,
            Err(e) => {
                self.faulted = true;
                tracing::error!(tick, error = %e, "Step aborted");
                return Err(anyhow::Error::new(e).context(format!("step {tick} aborted")));
            }
        };
        self.tick = tick;

        let (prey, predators, grass) = self.population.counts(self.config.grass.log_divisor);
        self.log.push(prey, predators, grass);
        self.metrics
            .record_step(started.elapsed(), &report, prey, predators);

        tracing::debug!(
            tick = self.tick,
            prey,
            predators,
            grass,
            births = report.births(),
            deaths = report.deaths(),
            grass_eaten = report.grass_eaten,
            grass_regrown = report.grass_regrown,
            "Step complete"
        );
        if prey == 0 && prey_before > 0 {
            tracing::warn!(tick = self.tick, "Prey population went extinct");
        }
        if predators == 0 && predators_before > 0 {
            tracing::warn!(tick = self.tick, "Predator population went extinct");
        }

        Ok(report)
    }

    /// Runs the configured number of steps.
    pub fn run(&mut self) -> anyhow::Result<&PopulationLog> {
        let steps = self.config.model.steps;
        self.run_for(steps)
    }

    /// Runs `steps` further steps.
    pub fn run_for(&mut self, steps: usize) -> anyhow::Result<&PopulationLog> {
        tracing::info!(
            steps,
            seed = self.config.model.seed,
            prey = self.population.prey.len(),
            predators = self.population.predators.len(),
            "Run started"
        );
        for _ in 0..steps {
            self.step()?;
        }
        if let Some(last) = self.log.last() {
            tracing::info!(
                tick = self.tick,
                prey = last.prey,
                predators = last.predators,
                grass = last.grass,
                elapsed_ms = self.metrics.elapsed().as_millis() as u64,
                "Run finished"
            );
        }
        Ok(&self.log)
    }

    #[must_use]
    pub fn tick(&self) -> usize {
        self.tick
    }

    /// True once a step has failed.
    #[must_use]
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Mutable access between steps, for scenario setup and inspection.
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    #[must_use]
    pub fn log(&self) -> &PopulationLog {
        &self.log
    }

    #[must_use]
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn into_log(self) -> PopulationLog {
        self.log
    }
}
