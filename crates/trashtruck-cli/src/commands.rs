//! Command handlers

use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::output::output_report;
use log::info;
use trashtruck_app::config::Config;
use trashtruck_app::scenario::{parse_script, run_demo, run_operations};
use trashtruck_types::{OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => Config::config_path()?,
    };

    match &cli.command {
        Commands::Demo => {
            let config = Config::load_from(&config_path)?;
            let format = cli.format.unwrap_or(config.output_format);
            info!("Running demo with truck {}", config.license_plate);
            output_report(format, &run_demo(&config))
        }

        Commands::Run { operations } => {
            let config = Config::load_from(&config_path)?;
            let format = cli.format.unwrap_or(config.output_format);
            let script = parse_script(operations.as_slice())?;
            output_report(format, &run_operations(&config, &script))
        }

        Commands::Config {
            show,
            set_type,
            set_driver_name,
            set_driver_age,
            set_fuel,
            set_capacity,
            set_plate,
            set_output,
            reset,
        } => cmd_config(
            &config_path,
            *show,
            ConfigUpdate {
                truck_type: set_type.clone(),
                driver_name: set_driver_name.clone(),
                driver_age: *set_driver_age,
                fuel_gallons: *set_fuel,
                capacity: *set_capacity,
                license_plate: set_plate.clone(),
                output_format: *set_output,
            },
            *reset,
        ),
    }
}

/// Settings to overwrite in the stored config
#[derive(Debug, Default)]
struct ConfigUpdate {
    truck_type: Option<String>,
    driver_name: Option<String>,
    driver_age: Option<u32>,
    fuel_gallons: Option<f64>,
    capacity: Option<f64>,
    license_plate: Option<String>,
    output_format: Option<OutputFormat>,
}

impl ConfigUpdate {
    /// Apply to `config`, returning whether anything changed
    fn apply(self, config: &mut Config) -> bool {
        let mut modified = false;

        if let Some(truck_type) = self.truck_type {
            config.truck_type = truck_type;
            modified = true;
        }

        if let Some(name) = self.driver_name {
            config.driver_name = name;
            modified = true;
        }

        if let Some(age) = self.driver_age {
            config.driver_age = age;
            modified = true;
        }

        if let Some(fuel) = self.fuel_gallons {
            config.fuel_gallons = fuel;
            modified = true;
        }

        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
            modified = true;
        }

        if let Some(plate) = self.license_plate {
            config.license_plate = plate;
            modified = true;
        }

        if let Some(output_format) = self.output_format {
            config.output_format = output_format;
            modified = true;
        }

        modified
    }
}

fn cmd_config(path: &Path, show: bool, update: ConfigUpdate, reset: bool) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        println!("Config file:    {}", path.display());
        return Ok(());
    }

    let mut config = Config::load_from(path)?;
    let modified = update.apply(&mut config);

    if modified {
        config.save_to(path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
        println!("Config file:    {}", path.display());
    }

    Ok(())
}
