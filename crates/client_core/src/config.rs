use std::{fs, path::Path, time::Duration};

use anyhow::{bail, Context};
use serde::Deserialize;
use shared::protocol::AMPHIBIANS_PATH;
use tracing::warn;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://android-kotlin-fun-mars-server.appspot.com/";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const SETTINGS_FILE: &str = "amphibians.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    /// `None` leaves requests without a deadline.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    base_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the TOML file at `path` if present, then environment
/// overrides looked up through `env`.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.base_url {
                    settings.base_url = v;
                }
                if let Some(secs) = file_cfg.request_timeout_secs {
                    settings.request_timeout = timeout_from_secs(secs);
                }
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring malformed settings file");
            }
        }
    }

    for key in ["AMPHIBIANS_BASE_URL", "APP__BASE_URL"] {
        if let Some(v) = env(key) {
            settings.base_url = v;
        }
    }

    for key in ["AMPHIBIANS_TIMEOUT_SECS", "APP__TIMEOUT_SECS"] {
        if let Some(v) = env(key) {
            match v.trim().parse::<u64>() {
                Ok(secs) => settings.request_timeout = timeout_from_secs(secs),
                Err(_) => warn!(key, value = %v, "ignoring non-numeric timeout override"),
            }
        }
    }

    settings
}

pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Resolves the listing endpoint against `base_url`, treating the base as a
/// directory even when it lacks a trailing slash.
pub fn endpoint_url(base_url: &str) -> anyhow::Result<Url> {
    let base_url = base_url.trim();
    let mut base =
        Url::parse(base_url).with_context(|| format!("invalid base url '{base_url}'"))?;

    if !matches!(base.scheme(), "http" | "https") {
        bail!("unsupported scheme '{}' in base url '{base_url}'", base.scheme());
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(AMPHIBIANS_PATH)
        .with_context(|| format!("failed to resolve '{AMPHIBIANS_PATH}' against '{base_url}'"))
}
