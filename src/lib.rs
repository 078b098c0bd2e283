//! Command-line runner for the predator–prey–grass model.
//!
//! The simulation itself lives in `predprey_core`; this crate wires a
//! configuration together from a TOML file and command-line overrides, runs
//! the model and persists the resulting count log through `predprey_io`.

pub mod app;

pub use predprey_core as sim;
pub use predprey_data as data;
pub use predprey_io as io;
