//! The population store: three ordered agent collections plus the id
//! allocator that numbers newcomers.

use crate::config::SimConfig;
use crate::ids::IdAllocator;
use crate::lifecycle;
use predprey_data::{AgentKind, Grass, Offspring, Position, Predator, Prey, Steering, Velocity};
use rand::Rng;

/// Owns every agent record. Membership changes only between scheduler
/// phases, never while a phase iterates a collection.
#[derive(Debug, Clone, Default)]
pub struct Population {
    pub prey: Vec<Prey>,
    pub predators: Vec<Predator>,
    pub grass: Vec<Grass>,
    ids: IdAllocator,
}

impl Population {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples the initial populations: all prey, then all predators, then
    /// all grass, using the sizes in `config.model`.
    pub fn random_with_rng<R: Rng>(config: &SimConfig, rng: &mut R) -> Self {
        let mut population = Self::new();
        population.prey.reserve(config.model.num_prey);
        population.predators.reserve(config.model.num_predators);
        population.grass.reserve(config.model.num_grass);

        for _ in 0..config.model.num_prey {
            let id = population.ids.next(AgentKind::Prey);
            population
                .prey
                .push(lifecycle::create_prey_with_rng(id, config, rng));
        }
        for _ in 0..config.model.num_predators {
            let id = population.ids.next(AgentKind::Predator);
            population
                .predators
                .push(lifecycle::create_predator_with_rng(id, config, rng));
        }
        for _ in 0..config.model.num_grass {
            population
                .grass
                .push(lifecycle::create_grass_with_rng(config, rng));
        }
        population
    }

    /// Places a prey explicitly and returns its id.
    pub fn spawn_prey(&mut self, position: Position, velocity: Velocity, life: f64) -> u64 {
        let id = self.ids.next(AgentKind::Prey);
        self.prey.push(Prey {
            id,
            position,
            velocity,
            steering: Steering::default(),
            life,
        });
        id
    }

    /// Places a predator explicitly and returns its id.
    pub fn spawn_predator(&mut self, position: Position, velocity: Velocity, life: f64) -> u64 {
        let id = self.ids.next(AgentKind::Predator);
        self.predators.push(Predator {
            id,
            position,
            velocity,
            steering: Steering::default(),
            life,
        });
        id
    }

    /// Places an available grass patch and returns its index.
    pub fn add_grass(&mut self, position: Position) -> usize {
        self.grass.push(Grass::new(position));
        self.grass.len() - 1
    }

    /// Numbers a newborn and appends it to the prey population.
    pub fn adopt_prey(&mut self, offspring: Offspring) -> u64 {
        let id = self.ids.next(AgentKind::Prey);
        self.prey.push(lifecycle::prey_from_offspring(id, offspring));
        id
    }

    /// Numbers a newborn and appends it to the predator population.
    pub fn adopt_predator(&mut self, offspring: Offspring) -> u64 {
        let id = self.ids.next(AgentKind::Predator);
        self.predators
            .push(lifecycle::predator_from_offspring(id, offspring));
        id
    }

    #[must_use]
    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    #[must_use]
    pub fn available_grass(&self) -> usize {
        self.grass.iter().filter(|g| g.available).count()
    }

    /// `(prey, predators, available grass / divisor)` as recorded in the log.
    #[must_use]
    pub fn counts(&self, grass_divisor: f64) -> (usize, usize, f64) {
        (
            self.prey.len(),
            self.predators.len(),
            self.available_grass() as f64 / grass_divisor,
        )
    }

    #[must_use]
    pub fn find_prey(&self, id: u64) -> Option<&Prey> {
        self.prey.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn find_predator(&self, id: u64) -> Option<&Predator> {
        self.predators.iter().find(|p| p.id == id)
    }
}
