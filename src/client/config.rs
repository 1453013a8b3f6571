//! Client configuration: token, timeout, response format, base URL.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::error::HubError;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://ws.hubdodesenvolvedor.com.br/v2/";

/// Default request timeout (600 seconds). A zero timeout disables the limit.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

pub const ENV_TOKEN: &str = "HUBDODESENVOLVEDOR_TOKEN";
pub const ENV_TIMEOUT: &str = "HUBDODESENVOLVEDOR_TIMEOUT";
pub const ENV_FORMAT: &str = "HUBDODESENVOLVEDOR_TIPO_RETORNO";

/// Wire format requested from the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// Literal token sent on the query string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(HubError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for ResponseFormat {
    type Error = HubError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ResponseFormat> for String {
    fn from(f: ResponseFormat) -> String {
        f.as_str().to_string()
    }
}

/// Immutable client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    pub token: String,
    #[serde(default = "default_timeout", rename = "timeout", with = "timeout_secs")]
    timeout: Duration,
    #[serde(default, rename = "tipoRetorno")]
    pub format: ResponseFormat,
    #[serde(default = "default_base_url")]
    base_url: String,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

/// `timeout` as (possibly fractional) seconds on the wire.
mod timeout_secs {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl HubConfig {
    /// Configuration with the given token and all defaults.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            timeout: default_timeout(),
            format: ResponseFormat::default(),
            base_url: default_base_url(),
        }
    }

    /// Request timeout. [`Duration::ZERO`] waits indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the API root (e.g. for a staging host or a local stub).
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = format!("{}/", url.trim_end_matches('/'));
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }

    /// API root, always ending in `/`.
    pub fn root(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    /// Load from `HUBDODESENVOLVEDOR_*` environment variables.
    ///
    /// A missing token yields an empty token, as the service will reject it
    /// on the first call. An unknown format is an error; an unparsable
    /// timeout is ignored.
    pub fn from_env() -> Result<Self, HubError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, HubError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(lookup(ENV_TOKEN).unwrap_or_default().trim());

        if let Some(raw) = lookup(ENV_TIMEOUT) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                match trimmed.parse::<u64>() {
                    Ok(secs) => config.timeout = Duration::from_secs(secs),
                    Err(err) => {
                        tracing::warn!("invalid {ENV_TIMEOUT}, ignoring: {err}");
                    }
                }
            }
        }

        if let Some(raw) = lookup(ENV_FORMAT) {
            if !raw.trim().is_empty() {
                config.format = raw.parse()?;
            }
        }

        Ok(config)
    }
}
