//! Scenario runs: build a truck from config and drive a script through it

use log::info;
use trashtruck_domain::service::{run_script, Operation, RunReport, DEMO_SCRIPT};
use trashtruck_types::Result;

use crate::config::Config;

/// Parse script tokens (`pickup:30`, `compress`, ...) in order.
///
/// Stops at the first bad token.
pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Operation>> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Run the demonstration: pick up 30, compress, drive 100, offload
pub fn run_demo(config: &Config) -> RunReport {
    run_operations(config, DEMO_SCRIPT)
}

/// Run `operations` against a fresh truck built from `config`
pub fn run_operations(config: &Config, operations: &[Operation]) -> RunReport {
    let mut truck = config.build_truck();
    let report = run_script(&mut truck, operations);
    info!(
        "{}: {} step(s), {} refused",
        truck.license_plate(),
        report.steps.len(),
        report.failed_count()
    );
    report
}
