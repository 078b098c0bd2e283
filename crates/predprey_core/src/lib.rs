//! # Predprey Core
//!
//! A discrete-time predator–prey–grass model. Prey flock and flee, predators
//! pursue prey, both starve without food and reproduce stochastically, and
//! grass patches are grazed and regrow.
//!
//! This crate contains:
//! - Model configuration with validation and TOML loading
//! - Agent behaviour rules for prey, predators and grass
//! - The population store and the fixed-order step scheduler
//! - The model driver that records per-step population counts
//! - Run metrics and structured logging
//!
//! A run is fully determined by its configuration: every random draw comes
//! from a single ChaCha8 stream seeded from `config.model.seed`.
//!
//! ## Example
//!
//! ```
//! use predprey_core::config::SimConfig;
//! use predprey_core::Model;
//!
//! let mut config = SimConfig::default();
//! config.model.steps = 5;
//! config.model.num_grass = 500;
//!
//! let mut model = Model::new(config).unwrap();
//! let log = model.run().unwrap();
//! assert_eq!(log.len(), 6);
//! ```

/// Agent behaviour rules (steering, movement, feeding, reproduction)
pub mod behavior;
/// Configuration management for simulation parameters
pub mod config;
/// Error taxonomy for faults that abort a run
pub mod error;
/// Per-species monotonic id allocation
pub mod ids;
/// Agent creation and reproduction sampling
pub mod lifecycle;
/// Run metrics collection and logging setup
pub mod metrics;
/// The model driver
pub mod model;
/// Ownership of the prey, predator and grass collections
pub mod population;
/// The per-tick scheduler
pub mod systems;

pub use behavior::{GrassLogic, PredatorLogic, PreyFate, PreyLogic};
pub use config::{GeometryPolicy, OffspringPolicy, SimConfig};
pub use error::SimError;
pub use metrics::{init_logging, RunMetrics, RunTotals};
pub use model::Model;
pub use population::Population;
pub use predprey_data::{Grass, Offspring, PopulationLog, Position, Predator, Prey, StepCounts};
pub use systems::StepReport;
