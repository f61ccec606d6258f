use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::types::{Employee, Vehicle};
use crate::error::LoadError;
use crate::fixtures::sample_data::{SAMPLE_FLEET_JSON, SAMPLE_ROSTER_JSON};
use crate::setup::init_types::{EmployeeRecord, VehicleRecord};

pub fn employees_from_json(json: &str) -> Result<Vec<Employee>, LoadError> {
    let records: Vec<EmployeeRecord> = serde_json::from_str(json)?;
    into_employees(records)
}

pub fn vehicles_from_json(json: &str) -> Result<Vec<Vehicle>, LoadError> {
    let records: Vec<VehicleRecord> = serde_json::from_str(json)?;
    into_vehicles(records)
}

/// Reads a roster CSV with a `name,age,has_license` header.
pub fn employees_from_csv<R: Read>(reader: R) -> Result<Vec<Employee>, LoadError> {
    into_employees(read_csv_records(reader)?)
}

/// Reads a fleet CSV with a `color,style,model,year` header; cells may be left empty.
pub fn vehicles_from_csv<R: Read>(reader: R) -> Result<Vec<Vehicle>, LoadError> {
    into_vehicles(read_csv_records(reader)?)
}

/// Load the roster from `path`, or the built-in sample roster when no path is given.
pub fn load_roster(path: Option<&str>) -> Result<Vec<Employee>, LoadError> {
    let employees = match path {
        Some(path) => match DataFormat::from_path(path)? {
            DataFormat::Json => employees_from_json(&std::fs::read_to_string(path)?)?,
            DataFormat::Csv => employees_from_csv(File::open(path)?)?,
        },
        None => employees_from_json(SAMPLE_ROSTER_JSON)?,
    };
    info!(
        "Loaded {} employees from {}",
        employees.len(),
        path.unwrap_or("built-in roster")
    );
    Ok(employees)
}

/// Load the fleet from `path`, or the built-in sample fleet when no path is given.
pub fn load_fleet(path: Option<&str>) -> Result<Vec<Vehicle>, LoadError> {
    let vehicles = match path {
        Some(path) => match DataFormat::from_path(path)? {
            DataFormat::Json => vehicles_from_json(&std::fs::read_to_string(path)?)?,
            DataFormat::Csv => vehicles_from_csv(File::open(path)?)?,
        },
        None => vehicles_from_json(SAMPLE_FLEET_JSON)?,
    };
    info!(
        "Loaded {} vehicles from {}",
        vehicles.len(),
        path.unwrap_or("built-in fleet")
    );
    Ok(vehicles)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataFormat {
    Json,
    Csv,
}

impl DataFormat {
    fn from_path(path: &str) -> Result<Self, LoadError> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(DataFormat::Json),
            "csv" => Ok(DataFormat::Csv),
            _ => Err(LoadError::UnsupportedFormat(path.to_string())),
        }
    }
}

fn read_csv_records<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, LoadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    debug!("Read {} CSV rows", records.len());
    Ok(records)
}

fn into_employees(records: Vec<EmployeeRecord>) -> Result<Vec<Employee>, LoadError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_employee(index))
        .collect()
}

fn into_vehicles(records: Vec<VehicleRecord>) -> Result<Vec<Vehicle>, LoadError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_vehicle(index))
        .collect()
}
