//! The `relay` module holds the filter-and-forward component.
//!
//! - `engine`: [`Relay`], the connection lifecycle and receive loop.
//! - `handler`: [`MessageHandler`], the per-message JSON check and notification.
//! - `message`: inbound and outbound message shapes.
//! - `watch`: [`WatchSet`], the configured object types.

pub mod engine;
pub mod handler;
pub mod message;
pub mod watch;

pub use engine::{Relay, RelayState};
pub use handler::MessageHandler;
pub use message::{BLACKBOX_RECORD_TOPIC, InboundMessage, Notification};
pub use watch::WatchSet;
