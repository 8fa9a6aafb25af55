use std::fmt;

use url::Url;

/// Absolute `http`/`https` location of the audio to relay.
///
/// Keeps the caller's string verbatim so it can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioUrl {
    raw: String,
    parsed: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AudioUrlError {
    #[error("url must not be empty")]
    Empty,
    #[error("invalid url '{0}': {1}")]
    Malformed(String, String),
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),
}

impl AudioUrl {
    pub fn parse(raw: impl Into<String>) -> Result<Self, AudioUrlError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AudioUrlError::Empty);
        }

        let parsed = Url::parse(trimmed)
            .map_err(|e| AudioUrlError::Malformed(raw.clone(), e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self { raw, parsed }),
            other => Err(AudioUrlError::UnsupportedScheme(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn as_url(&self) -> &Url {
        &self.parsed
    }
}

impl fmt::Display for AudioUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
