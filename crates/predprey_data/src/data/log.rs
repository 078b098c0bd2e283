use serde::{Deserialize, Serialize};

/// Population counts for a single step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepCounts {
    pub step: usize,
    pub prey: usize,
    pub predators: usize,
    /// Available grass patches divided by the configured log divisor.
    pub grass: f64,
}

/// Step-indexed population counts, one entry per step including the
/// initial state at step 0. The three series always have equal length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PopulationLog {
    pub prey: Vec<usize>,
    pub predators: Vec<usize>,
    pub grass: Vec<f64>,
}

impl PopulationLog {
    #[must_use]
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            prey: Vec::with_capacity(steps + 1),
            predators: Vec::with_capacity(steps + 1),
            grass: Vec::with_capacity(steps + 1),
        }
    }

    pub fn push(&mut self, prey: usize, predators: usize, grass: f64) {
        self.prey.push(prey);
        self.predators.push(predators);
        self.grass.push(grass);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prey.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prey.is_empty()
    }

    #[must_use]
    pub fn get(&self, step: usize) -> Option<StepCounts> {
        Some(StepCounts {
            step,
            prey: *self.prey.get(step)?,
            predators: *self.predators.get(step)?,
            grass: *self.grass.get(step)?,
        })
    }

    #[must_use]
    pub fn last(&self) -> Option<StepCounts> {
        self.len().checked_sub(1).and_then(|step| self.get(step))
    }

    pub fn iter(&self) -> impl Iterator<Item = StepCounts> + '_ {
        (0..self.len()).filter_map(|step| self.get(step))
    }

    /// True when all three series have the same number of entries.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.prey.len() == self.predators.len() && self.prey.len() == self.grass.len()
    }
}
