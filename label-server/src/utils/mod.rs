//! Utility modules

pub mod logger;
pub mod price;
