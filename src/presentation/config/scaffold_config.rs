use serde::Deserialize;

/// Runs the relay against a canned inference client instead of the remote space.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub mock_response_delay_ms: u64,
}
