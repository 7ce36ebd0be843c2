//! Truck entity and its operations

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::driver::Driver;
use super::outcome::{CompressOutcome, DriveOutcome, OffloadOutcome, PickupOutcome, SniffOutcome};

/// Odor added by each successful pickup
pub const ODOR_PER_PICKUP: u32 = 2;

/// Load removed by one compression cycle
pub const COMPRESSION_STEP: f64 = 10.0;

/// Gallons burned per mile driven
pub const FUEL_PER_MILE: f64 = 0.1;

/// A trash truck with its current fuel, load and odor
///
/// `current_load` never rises above `capacity` through `pick_up_trash`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    /// Category label (e.g. "Recycling", "Basic")
    truck_type: String,
    driver: Driver,
    /// Fuel in the tank (gallons)
    fuel_gallons: f64,
    /// Maximum load
    capacity: f64,
    current_load: f64,
    /// Smell factor
    odor: u32,
    license_plate: String,
}

impl Truck {
    /// Build an empty truck. Fuel and capacity are taken as given.
    pub fn new(
        truck_type: impl Into<String>,
        driver: Driver,
        fuel_gallons: f64,
        capacity: f64,
        license_plate: impl Into<String>,
    ) -> Self {
        Self {
            truck_type: truck_type.into(),
            driver,
            fuel_gallons,
            capacity,
            current_load: 0.0,
            odor: 0,
            license_plate: license_plate.into(),
        }
    }

    /// Pick up `amount` units of trash unless it would overflow the capacity.
    ///
    /// Filling exactly to capacity is allowed. Negative amounts are not
    /// rejected and lower the load.
    pub fn pick_up_trash(&mut self, amount: f64) -> PickupOutcome {
        if self.current_load + amount > self.capacity {
            warn!(
                "{}: pickup of {} rejected (load {} / capacity {})",
                self.license_plate, amount, self.current_load, self.capacity
            );
            return PickupOutcome::OverCapacity {
                amount,
                load: self.current_load,
                capacity: self.capacity,
            };
        }

        if amount < 0.0 {
            warn!("{}: negative pickup amount {}", self.license_plate, amount);
        }

        self.current_load += amount;
        // Pins at u32::MAX rather than wrapping
        self.odor = self.odor.saturating_add(ODOR_PER_PICKUP);
        debug!(
            "{}: picked up {} -> load {}, odor {}",
            self.license_plate, amount, self.current_load, self.odor
        );

        PickupOutcome::Loaded {
            amount,
            load: self.current_load,
            odor: self.odor,
        }
    }

    /// Compress the load by one step if there is more than one step's worth.
    pub fn compress(&mut self) -> CompressOutcome {
        if self.current_load > COMPRESSION_STEP {
            self.current_load -= COMPRESSION_STEP;
            debug!("{}: compressed -> load {}", self.license_plate, self.current_load);
            CompressOutcome::Compressed {
                load: self.current_load,
            }
        } else {
            warn!(
                "{}: not enough trash to compress (load {})",
                self.license_plate, self.current_load
            );
            CompressOutcome::NotEnoughTrash {
                load: self.current_load,
            }
        }
    }

    /// Drive `distance` miles, burning `FUEL_PER_MILE` per mile.
    pub fn drive(&mut self, distance: f64) -> DriveOutcome {
        let fuel_needed = distance * FUEL_PER_MILE;

        if self.fuel_gallons >= fuel_needed {
            self.fuel_gallons -= fuel_needed;
            debug!(
                "{}: drove {} miles -> fuel {}",
                self.license_plate, distance, self.fuel_gallons
            );
            DriveOutcome::Drove {
                distance,
                fuel_used: fuel_needed,
                fuel_left: self.fuel_gallons,
            }
        } else {
            warn!(
                "{}: {} miles needs {} gallons, only {} in tank",
                self.license_plate, distance, fuel_needed, self.fuel_gallons
            );
            DriveOutcome::NotEnoughFuel {
                distance,
                fuel_needed,
                fuel_available: self.fuel_gallons,
            }
        }
    }

    /// Dump everything and air the truck out.
    pub fn offload(&mut self) -> OffloadOutcome {
        let outcome = OffloadOutcome {
            dumped_load: self.current_load,
            cleared_odor: self.odor,
        };
        self.current_load = 0.0;
        self.odor = 0;
        debug!(
            "{}: offloaded {} units (odor {} cleared)",
            self.license_plate, outcome.dumped_load, outcome.cleared_odor
        );
        outcome
    }

    pub fn sniff(&self) -> SniffOutcome {
        SniffOutcome { odor: self.odor }
    }

    pub fn truck_type(&self) -> &str {
        &self.truck_type
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    /// Replace the driver
    pub fn set_driver(&mut self, driver: Driver) {
        self.driver = driver;
    }

    pub fn fuel(&self) -> f64 {
        self.fuel_gallons
    }

    pub fn set_fuel(&mut self, fuel_gallons: f64) {
        self.fuel_gallons = fuel_gallons;
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: f64) {
        self.capacity = capacity;
    }

    pub fn current_load(&self) -> f64 {
        self.current_load
    }

    pub fn odor(&self) -> u32 {
        self.odor
    }
}

impl Default for Truck {
    fn default() -> Self {
        Self::new("Basic", Driver::default(), 50.0, 100.0, "DEFAULT-000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn recycling_truck() -> Truck {
        Truck::new(
            "Recycling",
            Driver::new("Jalyn Alexander", 35),
            50.0,
            100.0,
            "ABC-123",
        )
    }

    #[test]
    fn test_new_truck_is_empty() {
        let truck = recycling_truck();
        assert_eq!(truck.truck_type(), "Recycling");
        assert_eq!(truck.license_plate(), "ABC-123");
        assert_eq!(truck.driver().name(), "Jalyn Alexander");
        assert!((truck.fuel() - 50.0).abs() < EPS);
        assert!((truck.capacity() - 100.0).abs() < EPS);
        assert_eq!(truck.current_load(), 0.0);
        assert_eq!(truck.odor(), 0);
    }

    #[test]
    fn test_default_truck() {
        let truck = Truck::default();
        assert_eq!(truck.truck_type(), "Basic");
        assert_eq!(truck.driver(), &Driver::new("Default Driver", 30));
        assert!((truck.fuel() - 50.0).abs() < EPS);
        assert!((truck.capacity() - 100.0).abs() < EPS);
        assert_eq!(truck.license_plate(), "DEFAULT-000");
        assert_eq!(truck.current_load(), 0.0);
        assert_eq!(truck.odor(), 0);
    }

    #[test]
    fn test_new_accepts_negative_values() {
        let truck = Truck::new("Odd", Driver::default(), -5.0, -1.0, "NEG-1");
        assert!((truck.fuel() + 5.0).abs() < EPS);
        assert!((truck.capacity() + 1.0).abs() < EPS);
    }

    // ==========================================
    // pick_up_trash
    // ==========================================

    #[test]
    fn test_pickup_adds_load_and_odor() {
        let mut truck = recycling_truck();
        let outcome = truck.pick_up_trash(30.0);
        assert!(outcome.is_success());
        assert!((truck.current_load() - 30.0).abs() < EPS);
        assert_eq!(truck.odor(), 2);
    }

    #[test]
    fn test_pickup_over_capacity_leaves_state() {
        let mut truck = recycling_truck();
        truck.pick_up_trash(60.0);
        let before = truck.clone();

        let outcome = truck.pick_up_trash(50.0);
        assert!(!outcome.is_success());
        assert_eq!(
            outcome,
            PickupOutcome::OverCapacity {
                amount: 50.0,
                load: 60.0,
                capacity: 100.0
            }
        );
        assert_eq!(truck, before);
    }

    #[test]
    fn test_pickup_exactly_to_capacity() {
        let mut truck = recycling_truck();
        truck.pick_up_trash(40.0);
        let outcome = truck.pick_up_trash(60.0);
        assert!(outcome.is_success());
        assert!((truck.current_load() - 100.0).abs() < EPS);
    }

    #[test]
    fn test_load_never_exceeds_capacity() {
        let mut truck = recycling_truck();
        for amount in [25.0, 40.0, 33.0, 12.5, 7.0, 80.0, 0.5] {
            truck.pick_up_trash(amount);
            assert!(truck.current_load() <= truck.capacity());
        }
    }

    #[test]
    fn test_odor_grows_per_pickup() {
        let mut truck = recycling_truck();
        truck.set_capacity(1_000.0);
        for i in 1..=20 {
            truck.pick_up_trash(1.0);
            assert_eq!(truck.odor(), i * ODOR_PER_PICKUP);
        }
    }

    #[test]
    fn test_odor_saturates_instead_of_overflowing() {
        let mut truck = recycling_truck();
        truck.odor = u32::MAX - 1;
        assert!(truck.pick_up_trash(1.0).is_success());
        assert_eq!(truck.odor(), u32::MAX);
        assert!(truck.pick_up_trash(1.0).is_success());
        assert_eq!(truck.odor(), u32::MAX);
        assert!((truck.current_load() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_negative_pickup_lowers_load() {
        let mut truck = recycling_truck();
        truck.pick_up_trash(20.0);
        let outcome = truck.pick_up_trash(-5.0);
        assert!(outcome.is_success());
        assert!((truck.current_load() - 15.0).abs() < EPS);
        assert_eq!(truck.odor(), 4);
    }

    // ==========================================
    // compress
    // ==========================================

    #[test]
    fn test_compress_reduces_by_step() {
        let mut truck = recycling_truck();
        truck.pick_up_trash(30.0);
        let outcome = truck.compress();
        assert!(outcome.is_success());
        assert!((outcome.load() - 20.0).abs() < EPS);
        assert!((truck.current_load() - 20.0).abs() < EPS);
    }

    #[test]
    fn test_compress_at_exactly_step_does_nothing() {
        let mut truck = recycling_truck();
        truck.pick_up_trash(10.0);
        let outcome = truck.compress();
        assert!(!outcome.is_success());
        assert_eq!(outcome, CompressOutcome::NotEnoughTrash { load: 10.0 });
        assert!((truck.current_load() - 10.0).abs() < EPS);
    }

    #[test]
    fn test_compress_empty_truck() {
        let mut truck = recycling_truck();
        let outcome = truck.compress();
        assert_eq!(outcome.load(), truck.current_load());
        assert_eq!(truck.current_load(), 0.0);
    }

    #[test]
    fn test_compress_does_not_touch_odor() {
        let mut truck = recycling_truck();
        truck.pick_up_trash(50.0);
        truck.compress();
        assert_eq!(truck.odor(), 2);
    }

    // ==========================================
    // drive
    // ==========================================

    #[test]
    fn test_drive_burns_fuel() {
        let mut truck = recycling_truck();
        let outcome = truck.drive(100.0);
        assert!(outcome.is_success());
        assert!((truck.fuel() - 40.0).abs() < EPS);
    }

    #[test]
    fn test_drive_uses_whole_tank() {
        let mut truck = recycling_truck();
        truck.set_fuel(10.0);
        assert!(truck.drive(100.0).is_success());
        assert!(truck.fuel().abs() < EPS);
    }

    #[test]
    fn test_drive_without_enough_fuel() {
        let mut truck = recycling_truck();
        truck.set_fuel(5.0);
        let outcome = truck.drive(100.0);
        assert!(!outcome.is_success());
        match outcome {
            DriveOutcome::NotEnoughFuel {
                fuel_needed,
                fuel_available,
                ..
            } => {
                assert!((fuel_needed - 10.0).abs() < EPS);
                assert!((fuel_available - 5.0).abs() < EPS);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!((truck.fuel() - 5.0).abs() < EPS);
    }

    // ==========================================
    // offload / sniff
    // ==========================================

    #[test]
    fn test_offload_resets_load_and_odor() {
        let mut truck = recycling_truck();
        truck.pick_up_trash(45.0);
        truck.pick_up_trash(45.0);
        let outcome = truck.offload();
        assert!((outcome.dumped_load - 90.0).abs() < EPS);
        assert_eq!(outcome.cleared_odor, 4);
        assert_eq!(truck.current_load(), 0.0);
        assert_eq!(truck.odor(), 0);
    }

    #[test]
    fn test_offload_empty_truck() {
        let mut truck = recycling_truck();
        truck.offload();
        assert_eq!(truck.current_load(), 0.0);
        assert_eq!(truck.odor(), 0);
    }

    #[test]
    fn test_sniff_is_read_only() {
        let mut truck = recycling_truck();
        truck.pick_up_trash(5.0);
        let before = truck.clone();
        assert_eq!(truck.sniff().odor, 2);
        assert_eq!(truck, before);
    }

    #[test]
    fn test_set_driver_replaces_driver() {
        let mut truck = recycling_truck();
        truck.set_driver(Driver::new("Morgan Lee", 52));
        assert_eq!(truck.driver().name(), "Morgan Lee");
        assert_eq!(truck.driver().age(), 52);
    }

    #[test]
    fn test_demo_sequence() {
        let mut truck = recycling_truck();

        truck.pick_up_trash(30.0);
        assert!((truck.current_load() - 30.0).abs() < EPS);
        assert_eq!(truck.odor(), 2);

        let compressed = truck.compress();
        assert!((compressed.load() - 20.0).abs() < EPS);

        truck.drive(100.0);
        assert!((truck.fuel() - 40.0).abs() < EPS);

        truck.offload();
        assert_eq!(truck.current_load(), 0.0);
        assert_eq!(truck.odor(), 0);
    }
}
