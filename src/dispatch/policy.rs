use crate::domain::types::VehicleClass;

/// Vehicle class needed to cover `distance`: a car at or beyond the threshold, a bike below it.
pub fn required_class(distance: f64, car_distance_threshold: f64) -> VehicleClass {
    if distance >= car_distance_threshold {
        VehicleClass::Car
    } else {
        VehicleClass::Bike
    }
}
