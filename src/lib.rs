//! Pizza delivery dispatch.
//!
//! Assigns an employee and a vehicle to each customer order. Short trips go out on a
//! bike with anyone from the roster; trips at or beyond the car threshold need a car
//! and a licensed driver. Every pick rotates the chosen employee or vehicle to the back
//! of its pool so repeated orders spread across the roster and fleet.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod setup;
pub mod utils;

pub use dispatch::AssignmentEngine;
pub use domain::{Customer, Delivery, Employee, Vehicle, VehicleClass};
pub use error::{DispatchError, LoadError};
