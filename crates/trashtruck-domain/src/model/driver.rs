//! Driver type definitions

use serde::{Deserialize, Serialize};

/// Driver assigned to a truck
///
/// Immutable once built; a truck swaps drivers by replacing the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    name: String,
    age: u32,
}

impl Driver {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new("Default Driver", 30)
    }
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}
