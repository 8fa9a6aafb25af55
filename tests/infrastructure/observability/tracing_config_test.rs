use voxrelay::infrastructure::observability::{TracingConfig, default_filter};
use voxrelay::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_uses_local_plain_text() {
    let config = TracingConfig::default();

    assert_eq!(config.environment, Environment::Local);
    assert_eq!(config.level, "info");
    assert!(!config.json_format);
}

#[test]
fn given_json_logging_settings_when_building_config_then_json_is_enabled() {
    let settings = LoggingSettings {
        level: "debug".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert!(config.json_format);
    assert_eq!(config.level, "debug");
    assert_eq!(config.environment, Environment::Prod);
}

#[test]
fn given_info_level_when_building_default_filter_then_crate_and_http_log_at_debug() {
    let config = TracingConfig::default();

    assert_eq!(
        default_filter(&config),
        "info,voxrelay=debug,tower_http=debug"
    );
}

#[test]
fn given_warn_level_when_building_default_filter_then_base_level_follows_settings() {
    let settings = LoggingSettings {
        level: "warn".to_string(),
        enable_json: false,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Local);

    assert!(default_filter(&config).starts_with("warn,"));
}
