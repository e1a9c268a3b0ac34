//! Infrastructure Layer - Store implementations
//!
//! This layer contains the repository trait implementations.

pub mod memory;
pub mod postgres;
