//! Simulated Annealing (SA) for the 0/1 knapsack.
//!
//! A single-solution trajectory search that accepts worsening moves with
//! a probability shrinking as the temperature cools, allowing the search
//! to escape local optima.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod acceptance;
mod config;
mod cooling;
mod runner;
mod types;

pub use acceptance::{AcceptanceRule, Decision};
pub use config::AnnealConfig;
pub use cooling::CoolingSchedule;
pub use runner::AnnealingEngine;
pub use types::{AnnealResult, CycleDecision, EngineState, ItemRow, IterationReport, Report};
