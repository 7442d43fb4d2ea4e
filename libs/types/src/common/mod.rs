//! Shared error and fixed-point types

pub mod errors;
pub mod fixed_point;
