pub mod engine;
pub mod policy;

pub use engine::AssignmentEngine;
pub use policy::required_class;
