pub mod runner;
pub mod sample;

pub use runner::{run_inspection, InspectConfig, InspectionReport};
