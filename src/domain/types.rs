use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Employee {
    pub name: String,
    pub age: u32,
    pub has_license: bool,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: u32, has_license: bool) -> Self {
        Self {
            name: name.into(),
            age,
            has_license,
        }
    }

    /// Whether this employee can take a delivery with the given license requirement.
    pub fn is_eligible(&self, require_license: bool) -> bool {
        !require_license || self.has_license
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    Bike,
    Car,
}

impl VehicleClass {
    pub fn requires_license(self) -> bool {
        matches!(self, VehicleClass::Car)
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleClass::Bike => write!(f, "bike"),
            VehicleClass::Car => write!(f, "car"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Vehicle {
    Bike {
        style: String,
        color: String,
    },
    Car {
        color: String,
        model: String,
        year: i32,
    },
}

impl Vehicle {
    pub fn bike(style: impl Into<String>, color: impl Into<String>) -> Self {
        Vehicle::Bike {
            style: style.into(),
            color: color.into(),
        }
    }

    pub fn car(color: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Vehicle::Car {
            color: color.into(),
            model: model.into(),
            year,
        }
    }

    pub fn class(&self) -> VehicleClass {
        match self {
            Vehicle::Bike { .. } => VehicleClass::Bike,
            Vehicle::Car { .. } => VehicleClass::Car,
        }
    }
}

// Short label used in logs and duplicate-record errors.
impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vehicle::Bike { style, color } => write!(f, "{} {} bike", color, style),
            Vehicle::Car { color, model, year } => write!(f, "{} {} ({})", color, model, year),
        }
    }
}

/// A delivery request. Distance is in whatever unit the caller uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub distance: f64,
}

impl Customer {
    pub fn new(name: impl Into<String>, distance: f64) -> Self {
        Self {
            name: name.into(),
            distance,
        }
    }
}

/// Outcome of a successful dispatch. Employee and vehicle are copies of the pooled entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub employee: Employee,
    pub vehicle: Vehicle,
    pub description: String,
}
