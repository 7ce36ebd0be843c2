//! Application layer - config and scenario runs

pub mod config;
pub mod scenario;
