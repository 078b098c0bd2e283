//! Plain data records shared by the predator–prey–grass simulation crates.

pub mod data;

pub use data::agent::{AgentKind, Grass, Offspring, Position, Predator, Prey, Steering, Velocity};
pub use data::log::{PopulationLog, StepCounts};
