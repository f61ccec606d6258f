use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::domain::types::{Employee, Vehicle, VehicleClass};

/// An ordered collection where every selection moves the chosen entry to the back.
#[derive(Debug, Clone)]
pub struct RotatingPool<T> {
    items: VecDeque<T>,
}

impl<T> RotatingPool<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Rotate the first entry matching `eligible` to the back.
    /// Returns the position it was taken from, or `None` with the order untouched.
    pub fn rotate_first<F>(&mut self, eligible: F) -> Option<usize>
    where
        F: Fn(&T) -> bool,
    {
        let position = self.items.iter().position(eligible)?;
        let item = self.items.remove(position)?;
        self.items.push_back(item);
        Some(position)
    }

    /// Put the back entry back at `position`, reversing the last `rotate_first`.
    pub fn undo_rotation(&mut self, position: usize) {
        if position >= self.items.len() {
            return;
        }
        if let Some(item) = self.items.pop_back() {
            self.items.insert(position, item);
        }
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count<F>(&self, pred: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().filter(|item| pred(*item)).count()
    }
}

/// The roster and the fleet, each rotating independently.
#[derive(Debug, Clone)]
pub struct ResourcePool {
    employees: RotatingPool<Employee>,
    vehicles: RotatingPool<Vehicle>,
}

impl ResourcePool {
    pub fn new(employees: Vec<Employee>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            employees: RotatingPool::new(employees),
            vehicles: RotatingPool::new(vehicles),
        }
    }

    pub fn pick_vehicle(&mut self, required: VehicleClass) -> Option<Vehicle> {
        self.pick_vehicle_with_position(required)
            .map(|(_, vehicle)| vehicle)
    }

    /// Same as `pick_vehicle`, also returning where the vehicle sat before rotation.
    pub fn pick_vehicle_with_position(&mut self, required: VehicleClass) -> Option<(usize, Vehicle)> {
        let position = self.vehicles.rotate_first(|v| v.class() == required)?;
        let vehicle = self.vehicles.last()?.clone();
        debug!("Picked {} from fleet position {}", vehicle, position);
        Some((position, vehicle))
    }

    pub fn pick_employee(&mut self, require_license: bool) -> Option<Employee> {
        let position = self
            .employees
            .rotate_first(|e| e.is_eligible(require_license))?;
        let employee = self.employees.last()?.clone();
        debug!(
            "Picked {} from roster position {} (license required: {})",
            employee.name, position, require_license
        );
        Some(employee)
    }

    pub fn restore_vehicle(&mut self, position: usize) {
        trace!("Restoring rotated vehicle to fleet position {}", position);
        self.vehicles.undo_rotation(position);
    }

    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn licensed_count(&self) -> usize {
        self.employees.count(|e| e.has_license)
    }

    pub fn class_count(&self, class: VehicleClass) -> usize {
        self.vehicles.count(|v| v.class() == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pool: &ResourcePool) -> Vec<&str> {
        pool.employees().map(|e| e.name.as_str()).collect()
    }

    fn small_pool() -> ResourcePool {
        ResourcePool::new(
            vec![
                Employee::new("Jessica", 26, false),
                Employee::new("Mathew", 18, true),
                Employee::new("Bill", 16, false),
            ],
            vec![
                Vehicle::bike("street", "red"),
                Vehicle::car("black", "mazda", 1998),
                Vehicle::bike("cruiser", "black"),
            ],
        )
    }

    #[test]
    fn test_rotate_first_moves_to_back() {
        let mut pool = RotatingPool::new(vec![1, 2, 3, 4]);
        assert_eq!(pool.rotate_first(|n| n % 2 == 0), Some(1));
        assert_eq!(pool.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_rotate_first_no_match_keeps_order() {
        let mut pool = RotatingPool::new(vec![1, 3, 5]);
        assert_eq!(pool.rotate_first(|n| n % 2 == 0), None);
        assert_eq!(pool.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_undo_rotation() {
        let mut pool = RotatingPool::new(vec!['a', 'b', 'c']);
        let position = pool.rotate_first(|c| *c == 'b').unwrap();
        pool.undo_rotation(position);
        assert_eq!(pool.iter().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_empty_pool() {
        let mut pool = ResourcePool::new(vec![], vec![]);
        assert!(pool.pick_vehicle(VehicleClass::Bike).is_none());
        assert!(pool.pick_employee(false).is_none());
    }

    #[test]
    fn test_pick_employee_without_license_takes_first() {
        let mut pool = small_pool();
        assert_eq!(pool.pick_employee(false).unwrap().name, "Jessica");
        assert_eq!(names(&pool), vec!["Mathew", "Bill", "Jessica"]);
    }

    #[test]
    fn test_pick_employee_with_license_skips_unlicensed() {
        let mut pool = small_pool();
        assert_eq!(pool.pick_employee(true).unwrap().name, "Mathew");
        assert_eq!(names(&pool), vec!["Jessica", "Bill", "Mathew"]);
        // Only one licensed employee, so it comes back again.
        assert_eq!(pool.pick_employee(true).unwrap().name, "Mathew");
    }

    #[test]
    fn test_pick_employee_no_licensed() {
        let mut pool = ResourcePool::new(vec![Employee::new("Anne", 17, false)], vec![]);
        assert!(pool.pick_employee(true).is_none());
        assert_eq!(names(&pool), vec!["Anne"]);
    }

    #[test]
    fn test_pick_employee_matches_eligibility_rule() {
        for require_license in [false, true] {
            let mut pool = small_pool();
            let expected = pool
                .employees()
                .find(|e| e.is_eligible(require_license))
                .cloned();
            assert_eq!(pool.pick_employee(require_license), expected);
        }
    }

    #[test]
    fn test_pick_vehicle_by_class() {
        let mut pool = small_pool();
        assert_eq!(
            pool.pick_vehicle(VehicleClass::Car),
            Some(Vehicle::car("black", "mazda", 1998))
        );
        assert_eq!(
            pool.pick_vehicle(VehicleClass::Bike),
            Some(Vehicle::bike("street", "red"))
        );
        assert_eq!(
            pool.pick_vehicle(VehicleClass::Bike),
            Some(Vehicle::bike("cruiser", "black"))
        );
        assert_eq!(pool.vehicle_count(), 3);
    }

    #[test]
    fn test_restore_vehicle() {
        let mut pool = small_pool();
        let before: Vec<Vehicle> = pool.vehicles().cloned().collect();
        let (position, _) = pool.pick_vehicle_with_position(VehicleClass::Car).unwrap();
        assert_eq!(position, 1);
        pool.restore_vehicle(position);
        let after: Vec<Vehicle> = pool.vehicles().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_counts() {
        let pool = small_pool();
        assert_eq!(pool.employee_count(), 3);
        assert_eq!(pool.licensed_count(), 1);
        assert_eq!(pool.class_count(VehicleClass::Bike), 2);
        assert_eq!(pool.class_count(VehicleClass::Car), 1);
    }
}
