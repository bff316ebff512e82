//! tsa-common - Shared library for the Treasury Solutions Agent
//!
//! Holds the pieces used by more than one layer of the application:
//! the workflow stage table and step router, the analysis progress
//! banding rules, event types for SSE broadcasting, error types, and
//! configuration resolution.

pub mod config;
pub mod error;
pub mod events;
pub mod progress;
pub mod workflow;

pub use error::{Error, Result};
