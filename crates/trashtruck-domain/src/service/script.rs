//! Operation scripts
//!
//! A script is an ordered list of truck operations. Scripts are parsed from
//! short tokens such as `pickup:30`, `compress`, `drive:100`, `offload` and
//! `sniff`, then applied to a truck one after another.

use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use trashtruck_types::Error;

use crate::model::{
    CompressOutcome, DriveOutcome, OffloadOutcome, PickupOutcome, SniffOutcome, Truck,
};

/// The demonstration run: pick up 30, compress, drive 100 miles, offload
pub const DEMO_SCRIPT: &[Operation] = &[
    Operation::PickUp(30.0),
    Operation::Compress,
    Operation::Drive(100.0),
    Operation::Offload,
];

/// One truck operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Operation {
    PickUp(f64),
    Compress,
    Drive(f64),
    Offload,
    Sniff,
}

impl Operation {
    /// Apply the operation to `truck`
    pub fn apply(&self, truck: &mut Truck) -> Outcome {
        match *self {
            Operation::PickUp(amount) => Outcome::PickUp(truck.pick_up_trash(amount)),
            Operation::Compress => Outcome::Compress(truck.compress()),
            Operation::Drive(distance) => Outcome::Drive(truck.drive(distance)),
            Operation::Offload => Outcome::Offload(truck.offload()),
            Operation::Sniff => Outcome::Sniff(truck.sniff()),
        }
    }

    /// Line shown before the operation runs, if any
    pub fn announcement(&self) -> Option<&'static str> {
        match self {
            Operation::Compress => Some("Compressing trash..."),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::PickUp(amount) => write!(f, "pickup:{}", amount),
            Operation::Compress => write!(f, "compress"),
            Operation::Drive(distance) => write!(f, "drive:{}", distance),
            Operation::Offload => write!(f, "offload"),
            Operation::Sniff => write!(f, "sniff"),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        let (name, arg) = match token.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (token.as_str(), None),
        };

        let parse_arg = |arg: Option<&str>| -> Result<f64, Error> {
            let raw = arg
                .filter(|a| !a.is_empty())
                .ok_or_else(|| Error::InvalidOperation(format!("'{}' needs a value", name)))?;
            let value: f64 = raw
                .parse()
                .map_err(|_| Error::InvalidOperation(format!("'{}' is not a number", raw)))?;
            if !value.is_finite() {
                return Err(Error::InvalidOperation(format!("'{}' is not finite", raw)));
            }
            Ok(value)
        };

        let no_arg = |op: Operation| -> Result<Operation, Error> {
            match arg {
                None => Ok(op),
                Some(_) => Err(Error::InvalidOperation(format!("'{}' takes no value", name))),
            }
        };

        match name {
            "pickup" | "pick-up" | "pick_up" => Ok(Operation::PickUp(parse_arg(arg)?)),
            "compress" => no_arg(Operation::Compress),
            "drive" => Ok(Operation::Drive(parse_arg(arg)?)),
            "offload" => no_arg(Operation::Offload),
            "sniff" => no_arg(Operation::Sniff),
            other => Err(Error::InvalidOperation(format!("unknown operation '{}'", other))),
        }
    }
}

/// Outcome of one applied operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PickUp(PickupOutcome),
    Compress(CompressOutcome),
    Drive(DriveOutcome),
    Offload(OffloadOutcome),
    Sniff(SniffOutcome),
}

impl Outcome {
    /// False when the truck refused the operation and kept its state
    pub fn is_success(&self) -> bool {
        match self {
            Outcome::PickUp(o) => o.is_success(),
            Outcome::Compress(o) => o.is_success(),
            Outcome::Drive(o) => o.is_success(),
            Outcome::Offload(_) | Outcome::Sniff(_) => true,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::PickUp(o) => write!(f, "{}", o),
            Outcome::Compress(o) => write!(f, "{}", o),
            Outcome::Drive(o) => write!(f, "{}", o),
            Outcome::Offload(o) => write!(f, "{}", o),
            Outcome::Sniff(o) => write!(f, "{}", o),
        }
    }
}

/// One executed step of a script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub operation: Operation,
    pub outcome: Outcome,
}

/// Everything that happened during a script run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub steps: Vec<Step>,
    /// Truck state after the last step
    pub truck: Truck,
}

impl RunReport {
    /// Number of steps the truck refused
    pub fn failed_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.outcome.is_success()).count()
    }

    /// Status lines in the order a person watching the truck would see them
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            if let Some(line) = step.operation.announcement() {
                lines.push(line.to_string());
            }
            // Compress already announced itself; only its failure adds a line
            match step.outcome {
                Outcome::Compress(CompressOutcome::Compressed { .. }) => {}
                outcome => lines.push(outcome.to_string()),
            }
        }
        lines
    }
}

/// Apply `operations` to `truck` in order
pub fn run_script(truck: &mut Truck, operations: &[Operation]) -> RunReport {
    info!(
        "Running {} operation(s) on {} ({})",
        operations.len(),
        truck.license_plate(),
        truck.truck_type()
    );

    let steps: Vec<Step> = operations
        .iter()
        .map(|operation| {
            let outcome = operation.apply(truck);
            debug!("{} -> {}", operation, outcome);
            Step {
                operation: *operation,
                outcome,
            }
        })
        .collect();

    RunReport {
        steps,
        truck: truck.clone(),
    }
}
