//! Domain model types

pub mod driver;
pub mod outcome;
pub mod truck;

pub use driver::Driver;
pub use outcome::{CompressOutcome, DriveOutcome, OffloadOutcome, PickupOutcome, SniffOutcome};
pub use truck::{Truck, COMPRESSION_STEP, FUEL_PER_MILE, ODOR_PER_PICKUP};
