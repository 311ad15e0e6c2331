//! Per-message filter-and-forward logic.
//!
//! The handler runs inline on the task that drives the connection, one call per
//! delivery. It never returns an error to its caller: every failure is logged
//! here and the message is dropped.

use serde_json::Value;
use tracing::{debug, error};

use crate::relay::message::{InboundMessage, Notification};
use crate::relay::watch::WatchSet;
use crate::transport::Publisher;
use crate::utils::error::MessageError;

/// Checks inbound payloads against the watch-set and publishes notifications.
#[derive(Debug)]
pub struct MessageHandler<P> {
    watch: WatchSet,
    publisher: P,
}

impl<P: Publisher> MessageHandler<P> {
    pub fn new(watch: WatchSet, publisher: P) -> Self {
        Self { watch, publisher }
    }

    pub fn watch(&self) -> &WatchSet {
        &self.watch
    }

    /// Handles one delivery. Returns the notification that was published, if any.
    pub fn handle(&self, msg: &InboundMessage) -> Option<Notification> {
        debug!(
            "Message on topic {}. {} bytes",
            msg.topic,
            msg.payload.len()
        );

        let notification = match self.process(msg) {
            Ok(Some(notification)) => notification,
            Ok(None) => return None,
            Err(e) => {
                error!("Failed to process MQTT message on {}: {}", msg.topic, e);
                return None;
            }
        };

        if let Err(e) = self.publisher.publish(&notification) {
            error!("Failed to publish {:?}: {}", notification.body, e);
            return None;
        }

        debug!("Published {:?} to {}", notification.body, notification.topic);
        Some(notification)
    }

    /// Decodes and inspects the payload. `Ok(None)` means no watched type was found.
    pub fn process(&self, msg: &InboundMessage) -> Result<Option<Notification>, MessageError> {
        let text = std::str::from_utf8(&msg.payload)?;
        debug!("Topic {}: {}", msg.topic, text);

        let data: Value = serde_json::from_str(text).map_err(|source| MessageError::Parse {
            text: text.to_string(),
            source,
        })?;

        Ok(object_type(&data)
            .filter(|object| self.watch.contains(object))
            .map(Notification::detected))
    }
}

/// The top-level `type` field, when `data` is an object holding a string there.
fn object_type(data: &Value) -> Option<&str> {
    data.get("type").and_then(Value::as_str)
}
