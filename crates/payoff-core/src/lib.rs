//! payoff-core
//!
//! Debt payoff simulation engine: strategy ordering, month stepping,
//! milestones, baseline, and strategy comparison.
//! Depends on payoff-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod allocation;
pub mod baseline;
pub mod comparison;
pub mod error;
pub mod milestones;
pub mod month_step;
pub mod public_api;
pub mod repository;
pub mod scheduler;
pub mod state;
pub mod strategy;
pub mod time;
pub mod validation;

pub use allocation::*;
pub use baseline::*;
pub use comparison::*;
pub use error::PayoffError;
pub use milestones::*;
pub use month_step::*;
pub use public_api::*;
pub use repository::*;
pub use scheduler::*;
pub use state::*;
pub use strategy::*;
pub use time::*;
