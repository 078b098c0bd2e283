use super::{integrate, repulsion};
use crate::config::SimConfig;
use crate::lifecycle;
use predprey_data::{Offspring, Predator, Prey, Steering};
use rand::Rng;

pub trait PredatorLogic {
    /// Points the steering straight at the nearest prey within
    /// `pred_prey_radius`, overwriting whatever it held. Leaves steering
    /// untouched when no prey is in range.
    fn follow_prey(&mut self, prey: &[Prey], config: &SimConfig);

    /// Separation from other predators closer than the same-species
    /// avoidance radius. `others` may contain `self`; it is excluded by id.
    fn avoidance_steering(&self, others: &[Predator], config: &SimConfig) -> Steering;

    /// Adds [`PredatorLogic::avoidance_steering`] to the accumulator.
    fn avoid_predators(&mut self, others: &[Predator], config: &SimConfig);

    /// Same integration as prey, with displacement multiplied by the speed
    /// advantage. Spends one unit of life.
    fn advance(&mut self, config: &SimConfig);

    fn starve(&self) -> bool;

    fn reproduce<R: Rng>(&mut self, config: &SimConfig, rng: &mut R) -> Option<Offspring>;
}

impl PredatorLogic for Predator {
    fn follow_prey(&mut self, prey: &[Prey], config: &SimConfig) {
        let mut closest = config.interaction.pred_prey_radius;
        let mut target = None;

        for p in prey {
            let (_, _, separation) = self.position.offset_from(&p.position);
            if separation < closest {
                target = Some(p.position);
                closest = separation;
            }
        }

        if let Some(target) = target {
            self.steering = Steering::new(target.x - self.position.x, target.y - self.position.y);
        }
    }

    fn avoidance_steering(&self, others: &[Predator], config: &SimConfig) -> Steering {
        let radius = config.interaction.same_species_avoidance_radius;
        let mut avoid = Steering::default();

        for other in others {
            let (dx, dy, separation) = self.position.offset_from(&other.position);
            if separation < radius && separation > 0.0 && self.id != other.id {
                avoid.add(repulsion(radius, dx, dy, separation));
            }
        }
        avoid
    }

    fn avoid_predators(&mut self, others: &[Predator], config: &SimConfig) {
        let steering = self.avoidance_steering(others, config);
        self.steering.add(steering);
    }

    fn advance(&mut self, config: &SimConfig) {
        integrate(
            &mut self.position,
            &mut self.velocity,
            self.steering,
            &config.world,
            config.predator.speed_advantage,
        );
        self.life -= 1.0;
    }

    fn starve(&self) -> bool {
        self.life < 1.0
    }

    fn reproduce<R: Rng>(&mut self, config: &SimConfig, rng: &mut R) -> Option<Offspring> {
        lifecycle::reproduce(
            &mut self.life,
            config.predator.reproduce_prob,
            &config.world,
            rng,
        )
    }
}
