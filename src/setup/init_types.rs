use serde::Deserialize;

use crate::domain::types::{Employee, Vehicle};
use crate::error::LoadError;

/// Flat employee record as it appears in roster files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeRecord {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub has_license: Option<bool>,
}

/// Flat vehicle record. A `model` field marks a car; anything else is read as a bike.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleRecord {
    pub color: Option<String>,
    pub style: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

// CSV hands back empty cells as empty strings
fn present(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl EmployeeRecord {
    pub fn into_employee(self, index: usize) -> Result<Employee, LoadError> {
        let name = present(self.name).ok_or_else(|| LoadError::malformed(index, "missing name"))?;
        let age = self
            .age
            .ok_or_else(|| LoadError::malformed(index, format!("{} has no age", name)))?;
        let has_license = self
            .has_license
            .ok_or_else(|| LoadError::malformed(index, format!("{} has no has_license", name)))?;

        Ok(Employee {
            name,
            age,
            has_license,
        })
    }
}

impl VehicleRecord {
    pub fn into_vehicle(self, index: usize) -> Result<Vehicle, LoadError> {
        let color = present(self.color).ok_or_else(|| LoadError::malformed(index, "missing color"))?;

        match present(self.model) {
            Some(model) => {
                let year = self
                    .year
                    .ok_or_else(|| LoadError::malformed(index, format!("car {} has no year", model)))?;
                Ok(Vehicle::Car { color, model, year })
            }
            None => {
                let style = present(self.style)
                    .ok_or_else(|| LoadError::malformed(index, "bike has no style"))?;
                Ok(Vehicle::Bike { style, color })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_field_selects_car() {
        let record = VehicleRecord {
            color: Some("black".into()),
            model: Some("mazda".into()),
            year: Some(1998),
            ..Default::default()
        };
        assert_eq!(
            record.into_vehicle(0).unwrap(),
            Vehicle::car("black", "mazda", 1998)
        );
    }

    #[test]
    fn test_no_model_selects_bike() {
        let record = VehicleRecord {
            color: Some("red".into()),
            style: Some("street".into()),
            model: Some("".into()),
            ..Default::default()
        };
        assert_eq!(record.into_vehicle(0).unwrap(), Vehicle::bike("street", "red"));
    }

    #[test]
    fn test_car_without_year_is_malformed() {
        let record = VehicleRecord {
            color: Some("red".into()),
            model: Some("toyota".into()),
            ..Default::default()
        };
        match record.into_vehicle(5) {
            Err(LoadError::MalformedRecord { index, .. }) => assert_eq!(index, 5),
            other => panic!("expected malformed record, got {:?}", other),
        }
    }

    #[test]
    fn test_bike_without_style_is_malformed() {
        let record = VehicleRecord {
            color: Some("red".into()),
            ..Default::default()
        };
        assert!(matches!(
            record.into_vehicle(1),
            Err(LoadError::MalformedRecord { index: 1, .. })
        ));
    }

    #[test]
    fn test_employee_missing_fields() {
        let record = EmployeeRecord {
            name: Some("Sam".into()),
            age: Some(30),
            has_license: None,
        };
        assert!(matches!(
            record.into_employee(2),
            Err(LoadError::MalformedRecord { index: 2, .. })
        ));

        let record = EmployeeRecord {
            name: Some("  ".into()),
            age: Some(30),
            has_license: Some(true),
        };
        assert!(record.into_employee(0).is_err());
    }
}
