#![doc(test(attr(deny(warnings))))]

//! Debt Payoff bundles the payoff engine crates behind a small facade: tracing
//! setup, display-unit currency formatting, and the `debt_payoff_cli` binary.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod utils;

pub use payoff_config as config;
pub use payoff_core as engine;
pub use payoff_domain as domain;
pub use payoff_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Debt Payoff tracing initialized.");
    });
}
