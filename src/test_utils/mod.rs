//! Test utilities for use case and HTTP-level testing.
//!
//! This module provides:
//! - Test data factories for creating valid submissions
//! - In-memory port implementations that record every outbound call
//! - A builder for constructing `AppState` with those mocks

mod app_state_builder;
mod factories;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use waitlist_mocks::*;
