//! Core data structures for the predator–prey–grass simulation.

pub mod agent;
pub mod log;
