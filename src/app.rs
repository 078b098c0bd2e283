use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use predprey_core::config::{OffspringPolicy, SimConfig};
use predprey_core::{Model, RunTotals};
use predprey_data::PopulationLog;
use predprey_io::{write_population_log, HistoryFormat};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Predator-prey-grass agent simulation", long_about = None)]
pub struct Args {
    /// TOML configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of steps to run
    #[arg(long)]
    pub steps: Option<usize>,

    /// Initial prey population
    #[arg(long)]
    pub prey: Option<usize>,

    /// Initial predator population
    #[arg(long)]
    pub predators: Option<usize>,

    /// Number of grass patches
    #[arg(long)]
    pub grass: Option<usize>,

    /// Seed of the random stream
    #[arg(long)]
    pub seed: Option<u64>,

    /// Population that children of prey join
    #[arg(long, value_enum)]
    pub prey_offspring: Option<OffspringArg>,

    /// Write the count log here (.json, .json.gz or .csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffspringArg {
    Predators,
    Prey,
    Discard,
}

impl From<OffspringArg> for OffspringPolicy {
    fn from(arg: OffspringArg) -> Self {
        match arg {
            OffspringArg::Predators => OffspringPolicy::Predators,
            OffspringArg::Prey => OffspringPolicy::Prey,
            OffspringArg::Discard => OffspringPolicy::Discard,
        }
    }
}

impl Args {
    /// Reads the configuration file (or the defaults), applies the
    /// command-line overrides on top and validates the result.
    pub fn to_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::read(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SimConfig::default(),
        };

        if let Some(steps) = self.steps {
            config.model.steps = steps;
        }
        if let Some(prey) = self.prey {
            config.model.num_prey = prey;
        }
        if let Some(predators) = self.predators {
            config.model.num_predators = predators;
        }
        if let Some(grass) = self.grass {
            config.model.num_grass = grass;
        }
        if let Some(seed) = self.seed {
            config.model.seed = seed;
        }
        if let Some(policy) = self.prey_offspring {
            config.policy.prey_offspring = policy.into();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub seed: u64,
    pub steps: usize,
    pub log: PopulationLog,
    pub totals: RunTotals,
    pub elapsed: Duration,
    pub output: Option<PathBuf>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run complete: {} steps (seed {})", self.steps, self.seed)?;
        if let (Some(first), Some(last)) = (self.log.get(0), self.log.last()) {
            writeln!(
                f,
                "  prey       {:>6} -> {:>6}",
                first.prey, last.prey
            )?;
            writeln!(
                f,
                "  predators  {:>6} -> {:>6}",
                first.predators, last.predators
            )?;
            writeln!(
                f,
                "  grass      {:>6.2} -> {:>6.2}",
                first.grass, last.grass
            )?;
        }
        writeln!(
            f,
            "  births {} (prey {}, predator {}), eaten {}, starved {}",
            self.totals.births(),
            self.totals.prey_births,
            self.totals.predator_births,
            self.totals.prey_eaten,
            self.totals.prey_starved + self.totals.predators_starved
        )?;
        write!(f, "  elapsed {:.2?}", self.elapsed)?;
        if let Some(path) = &self.output {
            write!(f, "\n  log written to {}", path.display())?;
        }
        Ok(())
    }
}

/// Builds the configuration, runs the model to completion and writes the
/// count log if an output path was given.
pub fn run(args: &Args) -> Result<RunSummary> {
    let config = args.to_config()?;
    let output = match &args.output {
        Some(path) => Some((path, HistoryFormat::from_path(path)?)),
        None => None,
    };

    let seed = config.model.seed;
    let mut model = Model::new(config)?;
    model.run()?;

    if let Some((path, format)) = output {
        write_population_log(path, model.log(), format)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), ?format, "Population log saved");
    }

    let totals = *model.metrics().totals();
    let elapsed = model.metrics().elapsed();
    Ok(RunSummary {
        seed,
        steps: model.tick(),
        log: model.into_log(),
        totals,
        elapsed,
        output: args.output.clone(),
    })
}
