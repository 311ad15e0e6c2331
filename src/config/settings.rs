use serde::Deserialize;

/// Literal defaults, used when neither a flag, the environment nor a config file
/// provides a value.
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 1883;
pub const DEFAULT_TOPIC: &str = "#";
pub const DEFAULT_OBJECTS: &str = "person";
pub const DEFAULT_KEEP_ALIVE_SECS: u16 = 60;

/// Top-level configuration settings for the application.
///
/// Includes settings for both the MQTT connection and the relay itself.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub mqtt: MqttSettings,
    pub relay: RelaySettings,
}

/// Configuration settings for the broker connection.
///
/// Defines where to connect and which topic filter to subscribe to.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MqttSettings {
    pub host: String,
    pub port: u16,
    pub topic: String,
    /// Generated per process when unset.
    pub client_id: Option<String>,
    /// MQTT carries keep-alive as a 16-bit field.
    pub keep_alive_secs: u16,
}

/// Configuration settings for the relay.
///
/// `objects` is the raw comma-separated watch-list; it is parsed into a
/// `WatchSet` when the relay is built.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RelaySettings {
    pub objects: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Keys are flat so that they line up with the environment variable names
/// (`MQTT_HOST` becomes `mqtt_host`). Missing values are filled from defaults.
#[derive(Debug, Deserialize, Default)]
pub struct PartialSettings {
    pub mqtt_host: Option<String>,
    pub mqtt_port: Option<u16>,
    pub mqtt_topic: Option<String>,
    pub mqtt_client_id: Option<String>,
    pub mqtt_keep_alive_secs: Option<u16>,
    pub objects: Option<String>,
}

/// Values given on the command line. They take precedence over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub topic: Option<String>,
    pub objects: Option<String>,
}

impl Settings {
    /// Fills the gaps of `partial` with the literal defaults.
    pub fn from_partial(partial: PartialSettings) -> Self {
        let default = Settings::default();

        Self {
            mqtt: MqttSettings {
                host: partial.mqtt_host.unwrap_or(default.mqtt.host),
                port: partial.mqtt_port.unwrap_or(default.mqtt.port),
                topic: partial.mqtt_topic.unwrap_or(default.mqtt.topic),
                client_id: partial.mqtt_client_id.or(default.mqtt.client_id),
                keep_alive_secs: partial
                    .mqtt_keep_alive_secs
                    .unwrap_or(default.mqtt.keep_alive_secs),
            },
            relay: RelaySettings {
                objects: partial.objects.unwrap_or(default.relay.objects),
            },
        }
    }

    /// Applies command-line values on top of the loaded settings.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(host) = overrides.host {
            self.mqtt.host = host;
        }
        if let Some(port) = overrides.port {
            self.mqtt.port = port;
        }
        if let Some(topic) = overrides.topic {
            self.mqtt.topic = topic;
        }
        if let Some(objects) = overrides.objects {
            self.relay.objects = objects;
        }
        self
    }
}

/// Provides default values for `Settings`.
impl Default for Settings {
    fn default() -> Self {
        Self {
            mqtt: MqttSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                topic: DEFAULT_TOPIC.to_string(),
                client_id: None,
                keep_alive_secs: DEFAULT_KEEP_ALIVE_SECS,
            },
            relay: RelaySettings {
                objects: DEFAULT_OBJECTS.to_string(),
            },
        }
    }
}
