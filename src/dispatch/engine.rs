use std::collections::HashSet;

use tracing::{debug, info, span, warn, Level};

use crate::config::{DispatchSettings, FailurePolicy};
use crate::dispatch::policy::required_class;
use crate::domain::pool::ResourcePool;
use crate::domain::transport::transport;
use crate::domain::types::{Customer, Delivery, Employee, Vehicle};
use crate::error::DispatchError;

/// Pairs customers with a vehicle and an eligible employee, rotating both pools.
#[derive(Debug, Clone)]
pub struct AssignmentEngine {
    pool: ResourcePool,
    settings: DispatchSettings,
}

impl AssignmentEngine {
    pub fn new(employees: Vec<Employee>, vehicles: Vec<Vehicle>) -> Result<Self, DispatchError> {
        Self::with_settings(employees, vehicles, DispatchSettings::default())
    }

    pub fn with_settings(
        employees: Vec<Employee>,
        vehicles: Vec<Vehicle>,
        settings: DispatchSettings,
    ) -> Result<Self, DispatchError> {
        let mut seen_employees = HashSet::new();
        for employee in &employees {
            if !seen_employees.insert(employee) {
                return Err(DispatchError::DuplicateEmployee(employee.name.clone()));
            }
        }

        let mut seen_vehicles = HashSet::new();
        for vehicle in &vehicles {
            if !seen_vehicles.insert(vehicle) {
                return Err(DispatchError::DuplicateVehicle(vehicle.to_string()));
            }
        }

        info!(
            "Dispatch ready with {} employees and {} vehicles (car threshold {}, {:?})",
            employees.len(),
            vehicles.len(),
            settings.car_distance_threshold,
            settings.failure_policy
        );

        Ok(Self {
            pool: ResourcePool::new(employees, vehicles),
            settings,
        })
    }

    pub fn deliver(&mut self, customer: &Customer) -> Result<Delivery, DispatchError> {
        let span = span!(Level::DEBUG, "deliver", customer = %customer.name);
        let _guard = span.enter();

        let class = required_class(customer.distance, self.settings.car_distance_threshold);
        debug!(
            "Distance {} needs a {} (threshold {})",
            customer.distance, class, self.settings.car_distance_threshold
        );

        let (position, vehicle) = self
            .pool
            .pick_vehicle_with_position(class)
            .ok_or(DispatchError::PoolExhausted(class))?;

        let require_license = vehicle.class().requires_license();
        let employee = match self.pool.pick_employee(require_license) {
            Some(employee) => employee,
            None => {
                if self.settings.failure_policy == FailurePolicy::Rollback {
                    self.pool.restore_vehicle(position);
                }
                warn!(
                    "No employee for {} (license required: {}), vehicle {}",
                    vehicle,
                    require_license,
                    match self.settings.failure_policy {
                        FailurePolicy::Rollback => "restored",
                        FailurePolicy::KeepRotated => "left rotated",
                    }
                );
                return Err(DispatchError::NoEligibleEmployee { require_license });
            }
        };

        let description = transport(&vehicle);
        debug!("{} assigned {} {}", customer.name, employee.name, description);

        Ok(Delivery {
            employee,
            vehicle,
            description,
        })
    }

    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }
}
