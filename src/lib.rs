//! # blackbox-trigger
//!
//! `blackbox-trigger` is a small MQTT notification relay. It subscribes to a
//! topic filter, looks at the top-level `type` field of every JSON payload it
//! receives, and publishes `"<type> detected"` to `blackbox/record` when that
//! type is on the configured watch-list.
//!
//! ## Core Modules
//!
//! - `config`: Loads settings from defaults, an optional config file and the environment.
//! - `relay`: The relay lifecycle, the watch-set and the per-message handler.
//! - `transport`: The MQTT client setup and the `Publisher` seam.
//! - `utils`: Error types and logging setup.

pub mod config;
pub mod relay;
pub mod transport;
pub mod utils;
