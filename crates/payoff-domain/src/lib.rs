//! payoff-domain
//!
//! Pure domain models for debt payoff planning (DebtAccount, PayoffOptions,
//! PayoffStep, PayoffSimulation, comparison results).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod comparison;
pub mod debt;
pub mod options;
pub mod schedule;

pub use common::*;
pub use comparison::*;
pub use debt::*;
pub use options::*;
pub use schedule::*;
