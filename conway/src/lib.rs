//! Conway's Game of Life engine with a navigable history.
//!
//! [`Simulation`] is the entry point for every front-end: it owns the live
//! [`Grid`], applies the transition rule from [`rules`] and records each
//! state in a [`History`] that can be rewound, replayed and pruned.

pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod logging;
pub mod patterns;
pub mod rules;
pub mod simulation;

pub use config::SimulationConfig;
pub use error::{LifeError, PatternError};
pub use grid::Grid;
pub use history::{History, Snapshot};
pub use patterns::{PATTERNS, Pattern, PatternStore};
pub use simulation::Simulation;
