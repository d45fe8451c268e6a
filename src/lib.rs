//! 0/1 knapsack search by simulated annealing.
//!
//! - [`knapsack`]: the immutable problem instance, the inclusion-vector
//!   solution with feasibility-gated scoring, and the add-then-repair
//!   neighbor move.
//! - [`sa`]: the annealing engine with its geometric cooling schedule,
//!   Metropolis-style acceptance rule, and best-solution tracking.
//!
//! # Architecture
//!
//! The engine performs no I/O. Callers supply a [`knapsack::ProblemInstance`]
//! and an [`sa::AnnealConfig`], drive the search one iteration at a time
//! with [`sa::AnnealingEngine::run_iteration`] (or to completion with
//! [`sa::AnnealingEngine::run`]), and read the final item table from
//! [`sa::AnnealingEngine::report`]. Progress is also emitted as `tracing`
//! events.

pub mod error;
pub mod knapsack;
pub mod sa;

pub use error::AnnealError;
