pub mod data_generator;
pub mod sample_data;
