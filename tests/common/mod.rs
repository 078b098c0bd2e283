pub mod macros;

use predprey_lib::sim::config::SimConfig;
use predprey_lib::sim::{Model, Population};
use predprey_lib::data::{Position, Velocity};

/// Builds a model from hand-placed agents instead of sampled populations.
#[allow(dead_code)]
pub struct ModelBuilder {
    config: SimConfig,
    population: Population,
}

#[allow(dead_code)]
impl ModelBuilder {
    pub fn new() -> Self {
        Self {
            config: SimConfig::default(),
            population: Population::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.model.seed = seed;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Turns off reproduction for both species so counts only fall.
    pub fn without_reproduction(self) -> Self {
        self.with_config(|c| {
            c.prey.reproduce_prob = 0.0;
            c.predator.reproduce_prob = 0.0;
        })
    }

    /// Adds a stationary prey. Ids are issued per species starting at 1,
    /// in the order agents are added.
    pub fn with_prey(mut self, x: f64, y: f64, life: f64) -> Self {
        self.population
            .spawn_prey(Position::new(x, y), Velocity::default(), life);
        self
    }

    /// Adds a stationary predator. Ids follow the same rule as prey.
    pub fn with_predator(mut self, x: f64, y: f64, life: f64) -> Self {
        self.population
            .spawn_predator(Position::new(x, y), Velocity::default(), life);
        self
    }

    pub fn with_grass(mut self, x: f64, y: f64) -> Self {
        self.population.add_grass(Position::new(x, y));
        self
    }

    pub fn build(self) -> Model {
        Model::with_population(self.config, self.population)
            .expect("Failed to create model in test builder")
    }
}

/// A default-parameter config with smaller populations for quick runs.
#[allow(dead_code)]
pub fn small_config(steps: usize, seed: u64) -> SimConfig {
    let mut config = SimConfig::default();
    config.model.steps = steps;
    config.model.num_prey = 60;
    config.model.num_predators = 15;
    config.model.num_grass = 600;
    config.model.seed = seed;
    config
}
