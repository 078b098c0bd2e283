use crate::config::SimConfig;
use predprey_data::{Grass, Prey};

pub trait GrassLogic {
    /// Advances the regrowth counter. The counter is compared against the
    /// regrow threshold before the increment of this call is applied, so a
    /// consumed patch becomes available on the call that observes
    /// `dead_cycles == regrow_cycles`. Returns true on regrowth.
    fn grow(&mut self, config: &SimConfig) -> bool;

    /// If available, picks the nearest hungry prey within eat distance
    /// (ties to the earliest in `prey`), marks the patch consumed and
    /// returns that prey's index so the caller can feed it.
    fn eaten(&mut self, prey: &[Prey], config: &SimConfig) -> Option<usize>;
}

impl GrassLogic for Grass {
    fn grow(&mut self, config: &SimConfig) -> bool {
        let next_dead_cycles = self.dead_cycles + 1;
        let mut regrown = false;
        if self.dead_cycles == config.grass.regrow_cycles {
            self.dead_cycles = 0;
            self.available = true;
            regrown = true;
        }

        if !self.available {
            self.dead_cycles = next_dead_cycles;
        }
        regrown
    }

    fn eaten(&mut self, prey: &[Prey], config: &SimConfig) -> Option<usize> {
        if !self.available {
            return None;
        }

        let mut closest_index = None;
        let mut closest = config.grass.eat_distance;
        for (i, p) in prey.iter().enumerate() {
            if p.life < config.prey.hunger_threshold {
                let (_, _, distance) = self.position.offset_from(&p.position);
                if distance < closest {
                    closest_index = Some(i);
                    closest = distance;
                }
            }
        }

        if closest_index.is_some() {
            self.dead_cycles = 0;
            self.available = false;
        }
        closest_index
    }
}
