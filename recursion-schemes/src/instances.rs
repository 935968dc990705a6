//! Base functors for common types

pub mod list;
pub mod peano;
pub mod stub;
