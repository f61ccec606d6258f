use colored::*;
use tracing::info;

use crate::domain::pool::ResourcePool;
use crate::domain::types::{Delivery, VehicleClass};
use crate::error::DispatchError;

pub fn format_delivery(delivery: &Delivery) -> String {
    let license = if delivery.employee.has_license {
        "has a"
    } else {
        "has no"
    };
    format!(
        "{} {} license, will deliver pizza {}",
        delivery.employee.name, license, delivery.description
    )
}

pub fn format_failure(customer_name: &str, err: &DispatchError) -> String {
    format!("Cannot deliver to {}: {}", customer_name, err)
}

pub fn print_delivery(delivery: &Delivery) {
    println!("{}", format_delivery(delivery).green());
}

pub fn print_failure(customer_name: &str, err: &DispatchError) {
    println!("{}", format_failure(customer_name, err).red());
}

/// Log the current rotation order of both pools.
pub fn print_pool_summary(pool: &ResourcePool) {
    info!(
        "Roster: {} employees ({} licensed), fleet: {} bikes, {} cars",
        pool.employee_count(),
        pool.licensed_count(),
        pool.class_count(VehicleClass::Bike),
        pool.class_count(VehicleClass::Car)
    );
    let roster: Vec<&str> = pool.employees().map(|e| e.name.as_str()).collect();
    info!("Roster order: {:?}", roster);
    let fleet: Vec<String> = pool.vehicles().map(|v| v.to_string()).collect();
    info!("Fleet order: {:?}", fleet);
}
