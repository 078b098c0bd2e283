//! Monotonic per-species id allocation owned by the population store.

use predprey_data::AgentKind;
use serde::{Deserialize, Serialize};

/// Hands out ids that are unique within a species and never reused.
/// Each model owns its own allocator, so independent models in one process
/// do not share a counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next_prey: u64,
    next_predator: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            next_prey: 1,
            next_predator: 1,
        }
    }
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, kind: AgentKind) -> u64 {
        let counter = match kind {
            AgentKind::Prey => &mut self.next_prey,
            AgentKind::Predator => &mut self.next_predator,
        };
        let id = *counter;
        *counter += 1;
        id
    }

    /// Number of ids issued so far for `kind`.
    #[must_use]
    pub fn issued(&self, kind: AgentKind) -> u64 {
        match kind {
            AgentKind::Prey => self.next_prey - 1,
            AgentKind::Predator => self.next_predator - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next(AgentKind::Prey), 1);
        assert_eq!(ids.next(AgentKind::Prey), 2);
        assert_eq!(ids.issued(AgentKind::Prey), 2);
    }

    #[test]
    fn test_species_counters_are_independent() {
        let mut ids = IdAllocator::new();
        ids.next(AgentKind::Prey);
        ids.next(AgentKind::Prey);
        assert_eq!(ids.next(AgentKind::Predator), 1);
        assert_eq!(ids.issued(AgentKind::Predator), 1);
    }

    #[test]
    fn test_allocators_do_not_share_state() {
        let mut a = IdAllocator::new();
        let mut b = IdAllocator::new();
        a.next(AgentKind::Predator);
        a.next(AgentKind::Predator);
        assert_eq!(b.next(AgentKind::Predator), 1);
    }
}
