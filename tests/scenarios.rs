use pizza_dispatch::setup::init::{load_fleet, load_roster};
use pizza_dispatch::{AssignmentEngine, Customer, DispatchError, Vehicle, VehicleClass};

fn sample_engine() -> AssignmentEngine {
    let employees = load_roster(None).unwrap();
    let vehicles = load_fleet(None).unwrap();
    AssignmentEngine::new(employees, vehicles).unwrap()
}

#[test]
fn short_trip_gets_first_bike_and_first_employee() {
    let mut engine = sample_engine();
    let delivery = engine.deliver(&Customer::new("Joe", 1.0)).unwrap();

    assert_eq!(delivery.employee.name, "Jessica");
    assert_eq!(delivery.vehicle, Vehicle::bike("street", "red"));
    assert_eq!(delivery.description, "on a red street bike!");
}

#[test]
fn long_trip_gets_first_car_and_first_licensed_employee() {
    let mut engine = sample_engine();
    let delivery = engine.deliver(&Customer::new("Mary", 5.0)).unwrap();

    assert_eq!(delivery.employee.name, "Mathew");
    assert!(delivery.employee.has_license);
    assert_eq!(delivery.vehicle, Vehicle::car("black", "mazda", 1998));
    assert_eq!(delivery.description, "in a black mazda!");
}

#[test]
fn repeated_short_trip_rotates_to_next_bike() {
    let mut engine = sample_engine();
    let first = engine.deliver(&Customer::new("Joe", 1.0)).unwrap();
    let second = engine.deliver(&Customer::new("Joe", 1.0)).unwrap();

    assert_eq!(first.vehicle, Vehicle::bike("street", "red"));
    assert_eq!(second.vehicle, Vehicle::bike("cruiser", "black"));
    assert_eq!(second.employee.name, "Mathew");
    assert_eq!(
        engine.pool().vehicles().last(),
        Some(&Vehicle::bike("cruiser", "black"))
    );
}

#[test]
fn fleet_without_cars_is_exhausted_for_long_trips() {
    let employees = load_roster(None).unwrap();
    let bikes: Vec<Vehicle> = load_fleet(None)
        .unwrap()
        .into_iter()
        .filter(|v| v.class() == VehicleClass::Bike)
        .collect();
    let mut engine = AssignmentEngine::new(employees, bikes).unwrap();

    assert_eq!(
        engine.deliver(&Customer::new("Mary", 2.0)),
        Err(DispatchError::PoolExhausted(VehicleClass::Car))
    );
    // Short trips still work afterwards.
    assert!(engine.deliver(&Customer::new("Joe", 0.0)).is_ok());
}

#[test]
fn cars_cycle_through_licensed_drivers() {
    let mut engine = sample_engine();
    let drivers: Vec<String> = (0..4)
        .map(|_| engine.deliver(&Customer::new("Mary", 3.0)).unwrap())
        .map(|d| d.employee.name)
        .collect();

    assert_eq!(drivers, vec!["Mathew", "Sam", "Bob", "Mathew"]);
}
