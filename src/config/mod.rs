//! The `config` module loads the relay's settings.
//!
//! Sources, lowest precedence first: literal defaults, an optional
//! `config/default.{toml,yaml,json}` file, the process environment
//! (`MQTT_HOST`, `MQTT_PORT`, `MQTT_TOPIC`, `OBJECTS`, ...). Command-line
//! values are applied afterwards with [`Settings::with_overrides`].

mod settings;

use config::{Config, ConfigError, Environment, File};

use settings::PartialSettings;

pub use settings::{
    DEFAULT_HOST, DEFAULT_KEEP_ALIVE_SECS, DEFAULT_OBJECTS, DEFAULT_PORT, DEFAULT_TOPIC,
    MqttSettings, Overrides, RelaySettings, Settings,
};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the mqtt and relay configurations
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default());

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(Settings::from_partial(partial))
}

#[cfg(test)]
mod tests;
