//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `blackbox-trigger` application.
//!
//! It holds the error types shared by the relay and the transport, and the
//! logging setup used by the binary.

pub mod error;
pub mod logging;
