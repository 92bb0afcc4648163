// Library for the binary and integration tests

pub mod aggregator;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod summary;
