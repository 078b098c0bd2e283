//! Configuration for the predator–prey–grass model.
//!
//! Every tunable constant of the model lives here, grouped into sections that
//! map onto a `config.toml` file. Sections that are omitted from the file keep
//! their defaults.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [model]
//! steps = 500
//! num_prey = 300
//! seed = 7
//!
//! [predator]
//! speed_advantage = 2.5
//!
//! [policy]
//! prey_offspring = "prey"
//! ```

use serde::{Deserialize, Serialize};

/// Run-level parameters: how long to run and how many agents to start with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    pub steps: usize,
    pub num_prey: usize,
    pub num_predators: usize,
    pub num_grass: usize,
    pub seed: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            steps: 250,
            num_prey: 200,
            num_predators: 50,
            num_grass: 5000,
            seed: 12,
        }
    }
}

/// Extent of the square world and the integration time step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub min_position: f64,
    pub max_position: f64,
    pub delta_time: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            min_position: -1.0,
            max_position: 1.0,
            delta_time: 0.001,
        }
    }
}

impl WorldConfig {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_position - self.min_position
    }

    #[must_use]
    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min_position).min(self.max_position)
    }
}

/// Radii that govern steering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    /// Range at which predators see prey and prey flee predators.
    pub pred_prey_radius: f64,
    /// Range of same-species repulsion, for both prey and predators.
    pub same_species_avoidance_radius: f64,
    /// Range within which prey steer towards the local group centre.
    pub prey_cohesion_radius: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            pred_prey_radius: 0.3,
            same_species_avoidance_radius: 0.035,
            prey_cohesion_radius: 0.2,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PreyConfig {
    pub reproduce_prob: f64,
    /// Prey graze only while their life is below this level.
    pub hunger_threshold: f64,
    pub food_gain: f64,
    /// Initial life is drawn uniformly from `initial_life_min..initial_life_max`.
    pub initial_life_min: u32,
    pub initial_life_max: u32,
}

impl Default for PreyConfig {
    fn default() -> Self {
        Self {
            reproduce_prob: 0.05,
            hunger_threshold: 100.0,
            food_gain: 80.0,
            initial_life_min: 10,
            initial_life_max: 50,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PredatorConfig {
    pub reproduce_prob: f64,
    /// Predators hunt only while their life is below this level.
    pub hunger_threshold: f64,
    pub food_gain: f64,
    pub kill_distance: f64,
    /// Displacement multiplier applied on top of the shared time step.
    pub speed_advantage: f64,
    pub initial_life_min: u32,
    pub initial_life_max: u32,
}

impl Default for PredatorConfig {
    fn default() -> Self {
        Self {
            reproduce_prob: 0.03,
            hunger_threshold: 100.0,
            food_gain: 100.0,
            kill_distance: 0.03,
            speed_advantage: 3.0,
            initial_life_min: 10,
            initial_life_max: 15,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GrassConfig {
    pub eat_distance: f64,
    /// Steps a consumed patch stays unavailable.
    pub regrow_cycles: u32,
    /// Available patch count is divided by this before it is logged.
    pub log_divisor: f64,
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            eat_distance: 0.05,
            regrow_cycles: 20,
            log_divisor: 20.0,
        }
    }
}

/// Where children born to prey end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OffspringPolicy {
    /// Prey children join the predator population and take part in the
    /// predator reproduction pass of the same step.
    #[default]
    Predators,
    /// Prey children join the prey population.
    Prey,
    /// Parent life is still halved and the child draws are still consumed,
    /// but the child is dropped.
    Discard,
}

/// Handling of prey–predator repulsion at exactly zero distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GeometryPolicy {
    /// The coincident predator contributes no repulsion.
    #[default]
    Skip,
    /// The step aborts with [`crate::error::SimError::DegenerateGeometry`].
    Fault,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PolicyConfig {
    pub prey_offspring: OffspringPolicy,
    pub coincident_agents: GeometryPolicy,
}

/// Complete model configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SimConfig {
    pub model: ModelConfig,
    pub world: WorldConfig,
    pub interaction: InteractionConfig,
    pub prey: PreyConfig,
    pub predator: PredatorConfig,
    pub grass: GrassConfig,
    pub policy: PolicyConfig,
}

impl SimConfig {
    /// Validates every parameter, including the initial population sizes.
    ///
    /// A step count of zero is accepted: the run then only records the
    /// initial state.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.model.num_prey > 0, "Prey population must be positive");
        anyhow::ensure!(
            self.model.num_predators > 0,
            "Predator population must be positive"
        );
        anyhow::ensure!(self.model.num_grass > 0, "Grass population must be positive");
        self.validate_parameters()
    }

    /// Validates the behavioural parameters only. Used when the populations
    /// are supplied by the caller instead of being sampled.
    pub fn validate_parameters(&self) -> anyhow::Result<()> {
        // World
        anyhow::ensure!(
            self.world.min_position.is_finite() && self.world.max_position.is_finite(),
            "World bounds must be finite"
        );
        anyhow::ensure!(
            self.world.min_position < self.world.max_position,
            "min_position must be below max_position"
        );
        ensure_positive(self.world.delta_time, "Delta time")?;

        // Interaction
        ensure_positive(
            self.interaction.pred_prey_radius,
            "Predator/prey interaction radius",
        )?;
        ensure_positive(
            self.interaction.same_species_avoidance_radius,
            "Same-species avoidance radius",
        )?;
        ensure_positive(self.interaction.prey_cohesion_radius, "Prey cohesion radius")?;

        // Prey
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.prey.reproduce_prob),
            "Prey reproduction probability must be in [0.0, 1.0]"
        );
        ensure_non_negative(self.prey.hunger_threshold, "Prey hunger threshold")?;
        ensure_non_negative(self.prey.food_gain, "Prey food gain")?;
        anyhow::ensure!(
            self.prey.initial_life_min < self.prey.initial_life_max,
            "Prey initial life range is empty"
        );

        // Predator
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.predator.reproduce_prob),
            "Predator reproduction probability must be in [0.0, 1.0]"
        );
        ensure_non_negative(self.predator.hunger_threshold, "Predator hunger threshold")?;
        ensure_non_negative(self.predator.food_gain, "Predator food gain")?;
        ensure_positive(self.predator.kill_distance, "Kill distance")?;
        ensure_positive(self.predator.speed_advantage, "Speed advantage")?;
        anyhow::ensure!(
            self.predator.initial_life_min < self.predator.initial_life_max,
            "Predator initial life range is empty"
        );

        // Grass
        ensure_positive(self.grass.eat_distance, "Grass eat distance")?;
        anyhow::ensure!(
            self.grass.regrow_cycles > 0,
            "Grass regrow cycles must be positive"
        );
        ensure_positive(self.grass.log_divisor, "Grass log divisor")?;

        Ok(())
    }

    /// Parses a TOML document without validating it, so that callers can
    /// apply overrides before [`SimConfig::validate`].
    pub fn parse_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str::<Self>(content)?)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = Self::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file without validating it.
    pub fn read(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {e}", path.display()))?;
        Self::parse_toml(&content)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Digest of the behavioural parameters. Two runs with equal fingerprints
    /// and equal `[model]` sections produce identical logs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.interaction).as_bytes());
        hasher.update(format!("{:?}", self.prey).as_bytes());
        hasher.update(format!("{:?}", self.predator).as_bytes());
        hasher.update(format!("{:?}", self.grass).as_bytes());
        hasher.update(format!("{:?}", self.policy).as_bytes());
        hex::encode(hasher.finalize())
    }
}

fn ensure_positive(value: f64, name: &str) -> anyhow::Result<()> {
    anyhow::ensure!(
        value.is_finite() && value > 0.0,
        "{name} must be positive and finite"
    );
    Ok(())
}

fn ensure_non_negative(value: f64, name: &str) -> anyhow::Result<()> {
    anyhow::ensure!(
        value.is_finite() && value >= 0.0,
        "{name} must be non-negative and finite"
    );
    Ok(())
}
