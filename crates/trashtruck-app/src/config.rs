//! Configuration management for trash-truck
//!
//! Config stored at: ~/.config/trash-truck/config.json

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trashtruck_domain::{Driver, Truck};
use trashtruck_types::{ConfigError, OutputFormat, Result};

/// Scenario configuration: the truck and driver the commands start from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Truck category label
    #[serde(default = "default_truck_type")]
    pub truck_type: String,

    #[serde(default = "default_driver_name")]
    pub driver_name: String,

    #[serde(default = "default_driver_age")]
    pub driver_age: u32,

    /// Starting fuel in gallons
    #[serde(default = "default_fuel_gallons")]
    pub fuel_gallons: f64,

    /// Maximum load
    #[serde(default = "default_capacity")]
    pub capacity: f64,

    #[serde(default = "default_license_plate")]
    pub license_plate: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_truck_type() -> String {
    "Recycling".to_string()
}

fn default_driver_name() -> String {
    "Jalyn Alexander".to_string()
}

fn default_driver_age() -> u32 {
    35
}

fn default_fuel_gallons() -> f64 {
    50.0
}

fn default_capacity() -> f64 {
    100.0
}

fn default_license_plate() -> String {
    "ABC-123".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            truck_type: default_truck_type(),
            driver_name: default_driver_name(),
            driver_age: default_driver_age(),
            fuel_gallons: default_fuel_gallons(),
            capacity: default_capacity(),
            license_plate: default_license_plate(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("trash-truck");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or use defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Check values that JSON cannot round-trip
    pub fn validate(&self) -> Result<()> {
        let numbers = [("fuel_gallons", self.fuel_gallons), ("capacity", self.capacity)];
        for (name, value) in numbers {
            if !value.is_finite() {
                let msg = format!("{} must be finite, got {}", name, value);
                return Err(ConfigError::InvalidValue(msg).into());
            }
        }
        Ok(())
    }

    /// Save config to `path`. Nothing is written if `validate` fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    pub fn driver(&self) -> Driver {
        Driver::new(self.driver_name.clone(), self.driver_age)
    }

    /// Build an empty truck from these settings
    pub fn build_truck(&self) -> Truck {
        Truck::new(
            self.truck_type.clone(),
            self.driver(),
            self.fuel_gallons,
            self.capacity,
            self.license_plate.clone(),
        )
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Trash Truck Configuration")?;
        writeln!(f, "=========================")?;
        writeln!(f)?;
        writeln!(f, "Truck type:     {}", self.truck_type)?;
        writeln!(f, "License plate:  {}", self.license_plate)?;
        writeln!(f, "Driver:         {} ({})", self.driver_name, self.driver_age)?;
        writeln!(f, "Fuel:           {:.1} gal", self.fuel_gallons)?;
        writeln!(f, "Capacity:       {:.1}", self.capacity)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        Ok(())
    }
}
