#![doc(test(attr(deny(warnings))))]

//! Expense Core offers a small append-only expense ledger backed by a flat
//! CSV store, together with the interactive CLI shell that drives it.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
