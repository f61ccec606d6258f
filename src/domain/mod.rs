pub mod pool;
pub mod transport;
pub mod types;

pub use pool::{ResourcePool, RotatingPool};
pub use transport::transport;
pub use types::{Customer, Delivery, Employee, Vehicle, VehicleClass};
