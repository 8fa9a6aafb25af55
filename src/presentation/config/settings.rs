use std::time::Duration;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::environment::Environment;
use super::scaffold_config::ScaffoldConfig;

pub const DEFAULT_SPACE: &str = "Ravishankarsharma/voice2text-summarizer";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub inference: InferenceSettings,
    pub download: DownloadSettings,
    pub staging: StagingSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceSettings {
    /// Hugging Face Space id (`owner/name`) or the Space's root URL.
    pub space: String,
    pub api_name: String,
    pub hub_url: String,
    #[serde(default)]
    pub hf_token: Option<String>,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl InferenceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DownloadSettings {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StagingSettings {
    #[serde(default)]
    pub directory: Option<String>,
    pub prefix: String,
    pub suffix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers defaults, `appsettings.<env>.*`, then `APP_*` variables
    /// (`__` separates sections, e.g. `APP_SERVER__PORT`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Defaults and the settings file only, without environment overrides.
    pub fn load_without_env(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?.build()?.try_deserialize()
    }

    fn builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("inference.space", DEFAULT_SPACE)?
            .set_default("inference.api_name", "/predict")?
            .set_default("inference.hub_url", "https://huggingface.co")?
            .set_default("inference.connect_timeout_secs", 10)?
            .set_default("inference.timeout_secs", 300)?
            .set_default("download.connect_timeout_secs", 10)?
            .set_default("download.timeout_secs", 120)?
            .set_default("staging.prefix", "voxrelay-")?
            .set_default("staging.suffix", ".wav")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("scaffold.enabled", false)?
            .set_default("scaffold.mock_response_delay_ms", 0)?
            .add_source(File::with_name(&environment.settings_file()).required(false)))
    }
}
