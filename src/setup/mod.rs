pub mod init;
pub mod init_types;

pub use init::{load_fleet, load_roster};
