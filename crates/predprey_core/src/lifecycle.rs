//! Agent creation: initial sampling and reproduction.
//!
//! All random draws go through the caller's generator so that a seeded run
//! consumes the stream in a fixed order.

use crate::config::{SimConfig, WorldConfig};
use predprey_data::{Grass, Offspring, Position, Predator, Prey, Steering, Velocity};
use rand::Rng;

/// `lo + (hi - lo) * u` for a single uniform draw `u` in `[0, 1)`.
#[inline]
pub fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rng.gen::<f64>()
}

fn random_position<R: Rng>(world: &WorldConfig, rng: &mut R) -> Position {
    let x = uniform(rng, world.min_position, world.max_position);
    let y = uniform(rng, world.min_position, world.max_position);
    Position { x, y }
}

fn random_velocity<R: Rng>(rng: &mut R) -> Velocity {
    let vx = uniform(rng, -1.0, 1.0);
    let vy = uniform(rng, -1.0, 1.0);
    Velocity { vx, vy }
}

/// Samples an initial prey. Draw order: x, y, vx, vy, life.
pub fn create_prey_with_rng<R: Rng>(id: u64, config: &SimConfig, rng: &mut R) -> Prey {
    let position = random_position(&config.world, rng);
    let velocity = random_velocity(rng);
    let life = rng.gen_range(config.prey.initial_life_min..config.prey.initial_life_max);
    Prey {
        id,
        position,
        velocity,
        steering: Steering::default(),
        life: f64::from(life),
    }
}

/// Samples an initial predator. Draw order: x, y, vx, vy, life.
pub fn create_predator_with_rng<R: Rng>(id: u64, config: &SimConfig, rng: &mut R) -> Predator {
    let position = random_position(&config.world, rng);
    let velocity = random_velocity(rng);
    let life = rng.gen_range(config.predator.initial_life_min..config.predator.initial_life_max);
    Predator {
        id,
        position,
        velocity,
        steering: Steering::default(),
        life: f64::from(life),
    }
}

/// Samples a grass patch. Draw order: x, y.
pub fn create_grass_with_rng<R: Rng>(config: &SimConfig, rng: &mut R) -> Grass {
    Grass::new(random_position(&config.world, rng))
}

/// Shared reproduction rule for both mobile species.
///
/// One draw decides whether reproduction happens. On success the parent's
/// life is halved first and the child inherits the halved value; the child's
/// position and velocity then take four more draws (x, y, vx, vy).
pub fn reproduce<R: Rng>(
    life: &mut f64,
    probability: f64,
    world: &WorldConfig,
    rng: &mut R,
) -> Option<Offspring> {
    if rng.gen::<f64>() >= probability {
        return None;
    }

    *life /= 2.0;

    let x = rng.gen::<f64>() * world.width() + world.min_position;
    let y = rng.gen::<f64>() * world.width() + world.min_position;
    let vx = rng.gen::<f64>() * 2.0 - 1.0;
    let vy = rng.gen::<f64>() * 2.0 - 1.0;

    Some(Offspring {
        position: Position { x, y },
        velocity: Velocity { vx, vy },
        life: *life,
    })
}

#[must_use]
pub fn prey_from_offspring(id: u64, offspring: Offspring) -> Prey {
    Prey {
        id,
        position: offspring.position,
        velocity: offspring.velocity,
        steering: Steering::default(),
        life: offspring.life,
    }
}

#[must_use]
pub fn predator_from_offspring(id: u64, offspring: Offspring) -> Predator {
    Predator {
        id,
        position: offspring.position,
        velocity: offspring.velocity,
        steering: Steering::default(),
        life: offspring.life,
    }
}
