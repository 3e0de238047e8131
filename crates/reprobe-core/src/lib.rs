pub mod analyze;
pub mod config;
pub mod errors;
pub mod model;
pub mod orchestrate;
pub mod rank;
pub mod report;
pub mod runner;
