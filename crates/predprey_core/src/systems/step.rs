//! The per-tick scheduler.
//!
//! A step runs its phases in a fixed order and each phase finishes before
//! the next begins:
//!
//! 1. shuffle predators, then prey
//! 2. predators follow prey
//! 3. prey avoid predators
//! 4. prey flock
//! 5. predators avoid each other
//! 6. prey move, then predators move
//! 7. grass is grazed
//! 8. eaten or starved prey are removed
//! 9. starved predators are removed
//! 10. prey reproduce, then predators reproduce
//! 11. grass regrows

use crate::behavior::{GrassLogic, PredatorLogic, PreyFate, PreyLogic};
use crate::config::{OffspringPolicy, SimConfig};
use crate::error::Result;
use crate::population::Population;
use predprey_data::Steering;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Event counts for one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub prey_eaten: usize,
    pub prey_starved: usize,
    pub predators_starved: usize,
    /// Successful prey reproduction draws, whatever the offspring policy.
    pub prey_births: usize,
    pub predator_births: usize,
    pub grass_eaten: usize,
    pub grass_regrown: usize,
}

impl StepReport {
    #[must_use]
    pub fn births(&self) -> usize {
        self.prey_births + self.predator_births
    }

    #[must_use]
    pub fn deaths(&self) -> usize {
        self.prey_eaten + self.prey_starved + self.predators_starved
    }
}

/// Runs one full step over `population`.
///
/// Random draws happen in this order: predator shuffle, prey shuffle, one
/// reproduction draw per prey (plus four per child), then the same for each
/// predator.
pub fn step<R: Rng>(
    population: &mut Population,
    config: &SimConfig,
    rng: &mut R,
) -> Result<StepReport> {
    let mut report = StepReport::default();

    shuffle(population, rng);
    steer(population, config)?;
    move_agents(population, config);
    graze(population, config, &mut report);
    cull(population, config, &mut report);
    reproduce(population, config, rng, &mut report);
    regrow(population, config, &mut report);

    Ok(report)
}

fn shuffle<R: Rng>(population: &mut Population, rng: &mut R) {
    population.predators.shuffle(rng);
    population.prey.shuffle(rng);
}

/// Phases 2–5. Same-species rules read the whole population, so their
/// contributions are computed first and applied afterwards.
fn steer(population: &mut Population, config: &SimConfig) -> Result<()> {
    for predator in &mut population.predators {
        predator.follow_prey(&population.prey, config);
    }

    for prey in &mut population.prey {
        prey.avoid_predators(&population.predators, config)?;
    }

    let flocking: Vec<Steering> = population
        .prey
        .iter()
        .map(|p| p.flock_steering(&population.prey, config))
        .collect();
    for (prey, steering) in population.prey.iter_mut().zip(flocking) {
        prey.steering.add(steering);
    }

    let avoidance: Vec<Steering> = population
        .predators
        .iter()
        .map(|p| p.avoidance_steering(&population.predators, config))
        .collect();
    for (predator, steering) in population.predators.iter_mut().zip(avoidance) {
        predator.steering.add(steering);
    }

    Ok(())
}

fn move_agents(population: &mut Population, config: &SimConfig) {
    for prey in &mut population.prey {
        prey.advance(config);
    }
    for predator in &mut population.predators {
        predator.advance(config);
    }
}

/// Patches are visited in order; a prey fed by one patch may be sated
/// before the next patch looks for a hungry prey.
fn graze(population: &mut Population, config: &SimConfig, report: &mut StepReport) {
    for grass in &mut population.grass {
        if let Some(index) = grass.eaten(&population.prey, config) {
            population.prey[index].life += config.prey.food_gain;
            report.grass_eaten += 1;
        }
    }
}

fn cull(population: &mut Population, config: &SimConfig, report: &mut StepReport) {
    let predators = &mut population.predators;
    population
        .prey
        .retain(|prey| match prey.eaten_or_starve(predators.as_slice(), config) {
            PreyFate::Eaten { predator } => {
                predators[predator].life += config.predator.food_gain;
                report.prey_eaten += 1;
                false
            }
            PreyFate::Starved => {
                report.prey_starved += 1;
                false
            }
            PreyFate::Survives => true,
        });

    let before = population.predators.len();
    population.predators.retain(|predator| !predator.starve());
    report.predators_starved = before - population.predators.len();
}

fn reproduce<R: Rng>(
    population: &mut Population,
    config: &SimConfig,
    rng: &mut R,
    report: &mut StepReport,
) {
    let mut prey_children = Vec::new();
    for prey in &mut population.prey {
        if let Some(child) = prey.reproduce(config, rng) {
            prey_children.push(child);
        }
    }
    report.prey_births = prey_children.len();

    match config.policy.prey_offspring {
        OffspringPolicy::Predators => {
            for child in prey_children {
                population.adopt_predator(child);
            }
        }
        OffspringPolicy::Prey => {
            for child in prey_children {
                population.adopt_prey(child);
            }
        }
        OffspringPolicy::Discard => {}
    }

    let mut predator_children = Vec::new();
    for predator in &mut population.predators {
        if let Some(child) = predator.reproduce(config, rng) {
            predator_children.push(child);
        }
    }
    report.predator_births = predator_children.len();
    for child in predator_children {
        population.adopt_predator(child);
    }
}

fn regrow(population: &mut Population, config: &SimConfig, report: &mut StepReport) {
    for grass in &mut population.grass {
        if grass.grow(config) {
            report.grass_regrown += 1;
        }
    }
}
