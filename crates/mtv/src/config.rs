use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_PROTOCOL: &str = "http";
pub const DEFAULT_HOST: &str = "api.mtvnservices.com/1";
pub const DEFAULT_BASE_URL: &str = const_format::formatcp!("{DEFAULT_PROTOCOL}://{DEFAULT_HOST}");

/// Where requests are sent.
///
/// `base_url` is derived from `protocol` and `host` unless it is set
/// explicitly, in which case it wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MtvConfig {
    pub protocol: String,
    pub host: String,
    pub base_url: Option<String>,
}

impl Default for MtvConfig {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
            base_url: None,
        }
    }
}

impl MtvConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => format!("{}://{}", self.protocol, self.host),
        }
    }
}

/// Loads the config from `mtv.toml`, the user config dir and `MTV_*` env vars,
/// in increasing order of precedence.
pub fn load() -> Result<MtvConfig> {
    let mut figment = Figment::from(Serialized::defaults(MtvConfig::default()))
        .merge(Toml::file("mtv.toml"));

    if let Some(dir) = dirs::config_dir() {
        figment = figment.merge(Toml::file(dir.join("mtv").join("config.toml")));
    }

    Ok(figment.merge(Env::prefixed("MTV_")).extract()?)
}

/// Loads the config from a single TOML file, env vars still applied on top.
pub fn load_from(path: impl AsRef<Path>) -> Result<MtvConfig> {
    Ok(Figment::from(Serialized::defaults(MtvConfig::default()))
        .merge(Toml::file(path.as_ref()))
        .merge(Env::prefixed("MTV_"))
        .extract()?)
}
