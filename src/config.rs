use std::env;
use std::str::FromStr;

use tracing::{info, warn};

pub mod constant {
    pub const CAR_DISTANCE_THRESHOLD: f64 = 2.0;
    pub const SEED: usize = 64;
    pub const SIMULATED_CUSTOMERS: usize = 12;
    pub const MAX_SIMULATED_DISTANCE: u32 = 6;
}

/// What to do with a vehicle that was rotated when no eligible employee turns up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Put the vehicle back where it was.
    #[default]
    Rollback,
    /// Leave the vehicle at the back of the fleet.
    KeepRotated,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rollback" => Ok(FailurePolicy::Rollback),
            "keep-rotated" | "keep_rotated" => Ok(FailurePolicy::KeepRotated),
            other => Err(format!("unknown failure policy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchSettings {
    pub car_distance_threshold: f64,
    pub failure_policy: FailurePolicy,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            car_distance_threshold: constant::CAR_DISTANCE_THRESHOLD,
            failure_policy: FailurePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Interactive,
    Simulate,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interactive" => Ok(Mode::Interactive),
            "simulate" => Ok(Mode::Simulate),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub mode: Mode,
    pub dispatch: DispatchSettings,
    pub roster_path: Option<String>,
    pub fleet_path: Option<String>,
}

impl Settings {
    /// Read settings from the process environment. `.env` is loaded once at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup. Bad values are logged and replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let mode = parse_or(&lookup, "DISPATCH_MODE", defaults.mode);
        let failure_policy = parse_or(&lookup, "FAILURE_POLICY", defaults.dispatch.failure_policy);
        let mut car_distance_threshold = parse_or(
            &lookup,
            "CAR_DISTANCE_THRESHOLD",
            defaults.dispatch.car_distance_threshold,
        );
        if !car_distance_threshold.is_finite() || car_distance_threshold < 0.0 {
            warn!(
                "CAR_DISTANCE_THRESHOLD must be a non-negative number, using {}",
                constant::CAR_DISTANCE_THRESHOLD
            );
            car_distance_threshold = constant::CAR_DISTANCE_THRESHOLD;
        }

        let settings = Settings {
            mode,
            dispatch: DispatchSettings {
                car_distance_threshold,
                failure_policy,
            },
            roster_path: lookup("ROSTER_PATH").filter(|p| !p.trim().is_empty()),
            fleet_path: lookup("FLEET_PATH").filter(|p| !p.trim().is_empty()),
        };
        info!("Loaded settings: {:?}", settings);
        settings
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring {}={:?}: {}", key, raw, e);
                default
            }
        },
        None => default,
    }
}
