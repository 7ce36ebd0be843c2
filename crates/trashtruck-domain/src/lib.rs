//! Trash truck domain: the truck entity, its driver, and operation scripts

pub mod model;
pub mod service;

pub use model::*;
