pub mod analyzer;
pub mod generator;
pub mod report;
pub mod store;

pub mod error;
