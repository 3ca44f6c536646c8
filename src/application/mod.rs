//! Application layer: use cases built on the domain
//!
//! This layer orchestrates domain logic for the CLI: timed scenario runs.

pub mod error;
pub mod harness;

pub use error::{ApplicationError, ApplicationResult};
pub use harness::{default_scenarios, run_scenarios, time_build, BuildReport, Scenario};
