//! Presentation Layer
//!
//! HTTP handlers, extractors and DTOs for the API.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod router;
