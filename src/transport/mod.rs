//! The `transport` module is responsible for network communication with the
//! MQTT broker.
//!
//! It builds the `rumqttc` client from the settings, converts broker deliveries
//! into [`InboundMessage`](crate::relay::message::InboundMessage)s, and defines
//! [`Publisher`], the seam through which the relay sends notifications.

pub mod mqtt;

use rumqttc::{AsyncClient, QoS};
use tokio::sync::mpsc::UnboundedSender;

use crate::relay::message::Notification;
use crate::utils::error::{RelayError, Result};

/// Sends a notification without waiting for any acknowledgement.
///
/// Implementations are called from the task that delivers messages and must
/// not block it.
pub trait Publisher {
    fn publish(&self, notification: &Notification) -> Result<()>;
}

/// QoS 0, not retained. `try_publish` only queues the request for the event
/// loop, which is the same task that calls us, so awaiting here could stall.
impl Publisher for AsyncClient {
    fn publish(&self, notification: &Notification) -> Result<()> {
        self.try_publish(
            notification.topic.as_str(),
            QoS::AtMostOnce,
            false,
            notification.body.as_bytes().to_vec(),
        )
        .map_err(|e| {
            RelayError::publish(
                format!("cannot queue publish to {}", notification.topic),
                e,
            )
        })
    }
}

/// In-process delivery, for embedding the relay without a broker.
impl Publisher for UnboundedSender<Notification> {
    fn publish(&self, notification: &Notification) -> Result<()> {
        self.send(notification.clone())
            .map_err(|e| RelayError::publish("notification channel closed", e))
    }
}
