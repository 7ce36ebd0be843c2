//! Domain services

pub mod script;

pub use script::{run_script, Operation, Outcome, RunReport, Step, DEMO_SCRIPT};
