//! AI components

pub mod config;
pub mod fsm;
pub mod route;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod fsm_tests;

// Re-export all components
pub use config::*;
pub use fsm::*;
pub use route::*;
