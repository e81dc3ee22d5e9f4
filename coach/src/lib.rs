//! HTTP server exposing grounded interview-answer generation.

pub mod logging;
pub mod web;

pub use logging::init_logging;
pub use web::{app, AppState};
