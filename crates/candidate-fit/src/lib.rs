//! Candidate fit scoring.
//!
//! The [`fuzzy`] module holds the inference engine; [`scoring`] wraps it with
//! request validation, HTTP routes and batch scoring. Configuration, telemetry
//! and the application error type are shared with the API service.

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod telemetry;
