// Utility modules

pub mod distance;
pub mod generator;
