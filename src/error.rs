use thiserror::Error;

use crate::domain::types::VehicleClass;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no {0} left in the fleet")]
    PoolExhausted(VehicleClass),
    #[error("no employee available (license required: {require_license})")]
    NoEligibleEmployee { require_license: bool },
    #[error("employee listed twice in roster: {0}")]
    DuplicateEmployee(String),
    #[error("vehicle listed twice in fleet: {0}")]
    DuplicateVehicle(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("record {index} is malformed: {reason}")]
    MalformedRecord { index: usize, reason: String },
    #[error("unsupported data file extension: {0}")]
    UnsupportedFormat(String),
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl LoadError {
    pub fn malformed<S: Into<String>>(index: usize, reason: S) -> Self {
        Self::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}
