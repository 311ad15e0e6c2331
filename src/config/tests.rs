use super::settings::PartialSettings;
use super::{Overrides, Settings, load_config};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

const KEYS: [&str; 6] = [
    "MQTT_HOST",
    "MQTT_PORT",
    "MQTT_TOPIC",
    "MQTT_CLIENT_ID",
    "MQTT_KEEP_ALIVE_SECS",
    "OBJECTS",
];

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.mqtt.host, "127.0.0.1");
    assert_eq!(settings.mqtt.port, 1883);
    assert_eq!(settings.mqtt.topic, "#");
    assert_eq!(settings.mqtt.client_id, None);
    assert_eq!(settings.mqtt.keep_alive_secs, 60);
    assert_eq!(settings.relay.objects, "person");
}

#[test]
fn test_partial_settings_fill_gaps() {
    let partial = PartialSettings {
        mqtt_port: Some(1884),
        objects: Some("person,car".to_string()),
        ..Default::default()
    };
    let settings = Settings::from_partial(partial);
    assert_eq!(settings.mqtt.host, "127.0.0.1");
    assert_eq!(settings.mqtt.port, 1884);
    assert_eq!(settings.relay.objects, "person,car");
}

#[test]
fn test_overrides_take_precedence() {
    let settings = Settings::default().with_overrides(Overrides {
        host: Some("broker.local".to_string()),
        port: None,
        topic: Some("frigate/events".to_string()),
        objects: Some("dog".to_string()),
    });
    assert_eq!(settings.mqtt.host, "broker.local");
    assert_eq!(settings.mqtt.port, 1883);
    assert_eq!(settings.mqtt.topic, "frigate/events");
    assert_eq!(settings.relay.objects, "dog");
}

#[test]
#[serial]
fn load_config_without_sources_uses_defaults() {
    temp_env::with_vars_unset(KEYS, || {
        let cfg = load_config().expect("load_config failed");
        assert_eq!(cfg, Settings::default());
    });
}

#[test]
#[serial]
fn load_config_reads_environment() {
    temp_env::with_vars(
        [
            ("MQTT_HOST", Some("10.0.0.5")),
            ("MQTT_PORT", Some("8883")),
            ("MQTT_TOPIC", Some("cameras/+/events")),
            ("MQTT_CLIENT_ID", Some("trigger-1")),
            ("MQTT_KEEP_ALIVE_SECS", None),
            ("OBJECTS", Some("person,car")),
        ],
        || {
            let cfg = load_config().expect("load_config failed");
            assert_eq!(cfg.mqtt.host, "10.0.0.5");
            assert_eq!(cfg.mqtt.port, 8883);
            assert_eq!(cfg.mqtt.topic, "cameras/+/events");
            assert_eq!(cfg.mqtt.client_id.as_deref(), Some("trigger-1"));
            assert_eq!(cfg.mqtt.keep_alive_secs, 60);
            assert_eq!(cfg.relay.objects, "person,car");
        },
    );
}

#[test]
#[serial]
fn load_config_rejects_unparsable_port() {
    temp_env::with_vars([("MQTT_PORT", Some("not-a-port"))], || {
        assert!(load_config().is_err());
    });
}

#[test]
#[serial]
fn load_config_rejects_keep_alive_beyond_u16() {
    temp_env::with_vars([("MQTT_KEEP_ALIVE_SECS", Some("70000"))], || {
        assert!(load_config().is_err());
    });
    temp_env::with_vars([("MQTT_KEEP_ALIVE_SECS", Some("65535"))], || {
        let cfg = load_config().expect("load_config failed");
        assert_eq!(cfg.mqtt.keep_alive_secs, u16::MAX);
    });
}

#[test]
#[serial]
fn load_config_from_file_overrides_defaults() {
    // Create a temporary directory and set it as current dir so load_config
    // will pick up config/default.toml from there.
    let tmp = TempDir::new().expect("create tempdir");
    let orig = env::current_dir().expect("current_dir");
    env::set_current_dir(tmp.path()).expect("set current dir");

    fs::create_dir_all("config").expect("create config dir");
    let toml = r#"
        mqtt_host = "0.0.0.0"
        mqtt_port = 1885
        objects = "cat"
    "#;
    fs::write("config/default.toml", toml).expect("write config file");

    let result = temp_env::with_vars(
        [("MQTT_HOST", None::<&str>), ("MQTT_PORT", None), ("OBJECTS", Some("car"))],
        load_config,
    );

    // restore cwd before asserting
    env::set_current_dir(orig).expect("restore cwd");

    let cfg = result.expect("load_config failed");
    assert_eq!(cfg.mqtt.host, "0.0.0.0");
    assert_eq!(cfg.mqtt.port, 1885);
    // environment beats the file
    assert_eq!(cfg.relay.objects, "car");
}
