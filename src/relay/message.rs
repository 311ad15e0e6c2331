/// Topic every notification is published to.
pub const BLACKBOX_RECORD_TOPIC: &str = "blackbox/record";

/// A message delivered by the broker for the subscribed filter.
///
/// Lives only for the duration of one handler call.
///
/// # Fields
///
/// - `topic` - The concrete topic the message was published on.
/// - `payload` - The raw payload bytes, expected to be UTF-8 JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub topic: String,
    pub payload: Vec<u8>,
}

impl InboundMessage {
    pub fn new(topic: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
        }
    }
}

/// The trigger published when a watched object type is observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub topic: String,
    pub body: String,
}

impl Notification {
    /// `"<object> detected"` on [`BLACKBOX_RECORD_TOPIC`].
    pub fn detected(object: &str) -> Self {
        Self {
            topic: BLACKBOX_RECORD_TOPIC.to_string(),
            body: format!("{object} detected"),
        }
    }
}
