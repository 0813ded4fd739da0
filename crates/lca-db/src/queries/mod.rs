//! Database query implementations.

pub mod analyses;
pub mod contracts;
