//! Simulation systems driven once per tick.

pub mod step;

pub use step::{step, StepReport};
