//! Results of truck operations
//!
//! Rejected operations are variants here rather than errors: the truck keeps
//! its previous state and the caller gets a status line to show.

use serde::{Deserialize, Serialize};

/// Result of `Truck::pick_up_trash`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PickupOutcome {
    Loaded { amount: f64, load: f64, odor: u32 },
    OverCapacity { amount: f64, load: f64, capacity: f64 },
}

impl PickupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PickupOutcome::Loaded { .. })
    }
}

impl std::fmt::Display for PickupOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickupOutcome::Loaded { amount, .. } => {
                write!(f, "Picked up {} units of trash.", amount)
            }
            PickupOutcome::OverCapacity { .. } => {
                write!(f, "Cannot pick up trash. Exceeds capacity!")
            }
        }
    }
}

/// Result of `Truck::compress`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CompressOutcome {
    Compressed { load: f64 },
    NotEnoughTrash { load: f64 },
}

impl CompressOutcome {
    /// Load left in the truck after the call
    pub fn load(&self) -> f64 {
        match self {
            CompressOutcome::Compressed { load } | CompressOutcome::NotEnoughTrash { load } => *load,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CompressOutcome::Compressed { .. })
    }
}

impl std::fmt::Display for CompressOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressOutcome::Compressed { load } => {
                write!(f, "Compressed trash. Load is now {} units.", load)
            }
            CompressOutcome::NotEnoughTrash { .. } => write!(f, "Not enough trash to compress."),
        }
    }
}

/// Result of `Truck::drive`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DriveOutcome {
    Drove {
        distance: f64,
        fuel_used: f64,
        fuel_left: f64,
    },
    NotEnoughFuel {
        distance: f64,
        fuel_needed: f64,
        fuel_available: f64,
    },
}

impl DriveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DriveOutcome::Drove { .. })
    }
}

impl std::fmt::Display for DriveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriveOutcome::Drove {
                distance,
                fuel_left,
                ..
            } => write!(f, "Drove {} miles. Gas left: {} gallons", distance, fuel_left),
            DriveOutcome::NotEnoughFuel { .. } => write!(f, "Not enough gas to drive there."),
        }
    }
}

/// Result of `Truck::offload`: what was dumped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffloadOutcome {
    pub dumped_load: f64,
    pub cleared_odor: u32,
}

impl std::fmt::Display for OffloadOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Offloading trash...")
    }
}

/// Result of `Truck::sniff`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SniffOutcome {
    pub odor: u32,
}

impl std::fmt::Display for SniffOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sniffing the trash... Smell factor is {}.", self.odor)
    }
}
