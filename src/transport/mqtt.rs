use std::time::Duration;

use rumqttc::{AsyncClient, EventLoop, MqttOptions, Publish};
use uuid::Uuid;

use crate::config::MqttSettings;
use crate::relay::message::InboundMessage;

/// Capacity of the client's request queue (subscribe and publish requests
/// waiting for the event loop).
pub const REQUEST_CAPACITY: usize = 64;

/// The configured client id, or `blackbox-trigger-<uuid>` when none is set.
pub fn client_id(settings: &MqttSettings) -> String {
    settings
        .client_id
        .clone()
        .unwrap_or_else(|| format!("blackbox-trigger-{}", Uuid::new_v4()))
}

pub fn mqtt_options(settings: &MqttSettings) -> MqttOptions {
    let mut options = MqttOptions::new(client_id(settings), settings.host.clone(), settings.port);
    options.set_keep_alive(Duration::from_secs(u64::from(settings.keep_alive_secs)));
    options.set_clean_session(true);
    options
}

/// Builds the client handle and its event loop. No socket is opened until the
/// event loop is first polled.
pub fn client(settings: &MqttSettings) -> (AsyncClient, EventLoop) {
    AsyncClient::new(mqtt_options(settings), REQUEST_CAPACITY)
}

impl From<Publish> for InboundMessage {
    fn from(publish: Publish) -> Self {
        Self {
            topic: publish.topic,
            payload: publish.payload.to_vec(),
        }
    }
}
