use super::{integrate, repulsion};
use crate::config::{GeometryPolicy, SimConfig};
use crate::error::{Result, SimError};
use crate::lifecycle;
use predprey_data::{AgentKind, Offspring, Predator, Prey, Steering};
use rand::Rng;

/// Outcome of the end-of-step survival check for one prey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreyFate {
    Survives,
    /// Caught by the predator at this index of the list that was checked.
    Eaten { predator: usize },
    Starved,
}

impl PreyFate {
    #[must_use]
    pub fn is_removed(&self) -> bool {
        !matches!(self, PreyFate::Survives)
    }
}

pub trait PreyLogic {
    /// Clears the steering accumulator, then adds a repulsion of length
    /// `pred_prey_radius` away from every predator within that radius.
    fn avoid_predators(&mut self, predators: &[Predator], config: &SimConfig) -> Result<()>;

    /// Cohesion towards the centre of nearby prey plus separation from very
    /// close prey. `others` may contain `self`; it is excluded by id.
    fn flock_steering(&self, others: &[Prey], config: &SimConfig) -> Steering;

    /// Adds [`PreyLogic::flock_steering`] to the accumulator.
    fn flock(&mut self, others: &[Prey], config: &SimConfig);

    /// Integrates steering into velocity and position and spends one unit of
    /// life.
    fn advance(&mut self, config: &SimConfig);

    /// Decides whether this prey leaves the population this step. Predation
    /// is checked first: the nearest hungry predator within kill distance
    /// wins, ties going to the earliest in `predators`.
    fn eaten_or_starve(&self, predators: &[Predator], config: &SimConfig) -> PreyFate;

    fn reproduce<R: Rng>(&mut self, config: &SimConfig, rng: &mut R) -> Option<Offspring>;
}

impl PreyLogic for Prey {
    fn avoid_predators(&mut self, predators: &[Predator], config: &SimConfig) -> Result<()> {
        self.steering.reset();
        let radius = config.interaction.pred_prey_radius;

        for predator in predators {
            let (dx, dy, distance) = self.position.offset_from(&predator.position);
            if distance >= radius {
                continue;
            }
            if distance == 0.0 {
                match config.policy.coincident_agents {
                    GeometryPolicy::Skip => continue,
                    GeometryPolicy::Fault => {
                        return Err(SimError::DegenerateGeometry {
                            kind: AgentKind::Prey,
                            id: self.id,
                            other_kind: AgentKind::Predator,
                            other_id: predator.id,
                        })
                    }
                }
            }
            self.steering.add(repulsion(radius, dx, dy, distance));
        }
        Ok(())
    }

    fn flock_steering(&self, others: &[Prey], config: &SimConfig) -> Steering {
        let cohesion_radius = config.interaction.prey_cohesion_radius;
        let avoid_radius = config.interaction.same_species_avoidance_radius;

        let mut centre_x = 0.0;
        let mut centre_y = 0.0;
        let mut count = 0usize;
        let mut avoid = Steering::default();

        for other in others {
            let (dx, dy, separation) = self.position.offset_from(&other.position);
            if separation < cohesion_radius && self.id != other.id {
                centre_x += other.position.x;
                centre_y += other.position.y;
                count += 1;

                if separation < avoid_radius && separation > 0.0 {
                    avoid.add(repulsion(avoid_radius, dx, dy, separation));
                }
            }
        }

        let mut group = Steering::default();
        if count > 0 {
            centre_x /= count as f64;
            centre_y /= count as f64;
            group = Steering::new(centre_x - self.position.x, centre_y - self.position.y);
        }

        Steering::new(group.x + avoid.x, group.y + avoid.y)
    }

    fn flock(&mut self, others: &[Prey], config: &SimConfig) {
        let steering = self.flock_steering(others, config);
        self.steering.add(steering);
    }

    fn advance(&mut self, config: &SimConfig) {
        integrate(
            &mut self.position,
            &mut self.velocity,
            self.steering,
            &config.world,
            1.0,
        );
        self.life -= 1.0;
    }

    fn eaten_or_starve(&self, predators: &[Predator], config: &SimConfig) -> PreyFate {
        let mut closest_index = None;
        let mut closest = config.predator.kill_distance;

        for (i, predator) in predators.iter().enumerate() {
            if predator.life < config.predator.hunger_threshold {
                let (_, _, distance) = self.position.offset_from(&predator.position);
                if distance < closest {
                    closest_index = Some(i);
                    closest = distance;
                }
            }
        }

        if let Some(predator) = closest_index {
            return PreyFate::Eaten { predator };
        }
        if self.life < 1.0 {
            return PreyFate::Starved;
        }
        PreyFate::Survives
    }

    fn reproduce<R: Rng>(&mut self, config: &SimConfig, rng: &mut R) -> Option<Offspring> {
        lifecycle::reproduce(&mut self.life, config.prey.reproduce_prob, &config.world, rng)
    }
}
