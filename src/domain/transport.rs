use crate::domain::types::Vehicle;

/// Describe how a delivery is carried out with the given vehicle.
pub fn transport(vehicle: &Vehicle) -> String {
    match vehicle {
        Vehicle::Bike { style, color } => format!("on a {} {} bike!", color, style),
        Vehicle::Car { color, model, .. } => format!("in a {} {}!", color, model),
    }
}
