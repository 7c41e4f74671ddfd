// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::ScoutError;

/// Everything read from `ht_scout.toml`.
///
/// ```toml
/// store_dir = ".store"
/// export_dir = "out"
///
/// [sync]
/// enabled = true
/// blob_url = "https://account.blob.core.windows.net/container/scouts.csv?sv=..."
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub store_dir: PathBuf,
    pub export_dir: PathBuf,
    pub sync: SyncConfig,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(STORE_DIR),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            sync: SyncConfig::default(),
        }
    }
}

/// Cloud sync switch plus the pre-signed blob URL.
/// The URL is a capability token: never log it whole, use `redacted_url`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub enabled: bool,
    pub blob_url: Option<String>,
}

impl SyncConfig {
    /// The URL to talk to, if one is configured and non-blank.
    pub fn endpoint(&self) -> Option<&str> {
        self.blob_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    /// URL with its query string (the signature) cut off.
    pub fn redacted_url(&self) -> String {
        match self.endpoint() {
            Some(url) => match url.find('?') {
                Some(q) => format!("{}?…", &url[..q]),
                None => s!(url),
            },
            None => s!("<none>"),
        }
    }
}

impl AppOptions {
    /// Load from `path`; a missing file means defaults. Env overrides apply either way.
    pub fn load(path: &Path) -> Result<Self, ScoutError> {
        let mut opts = if path.exists() {
            let text = fs::read_to_string(path)?;
            Self::from_toml(&text)?
        } else {
            Self::default()
        };
        opts.apply_env(|key| std::env::var(key).ok());
        Ok(opts)
    }

    pub fn from_toml(text: &str) -> Result<Self, ScoutError> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_SYNC_ENABLED) {
            self.sync.enabled = matches!(v.trim(), "1") || v.trim().eq_ignore_ascii_case("true");
        }
        if let Some(v) = lookup(ENV_BLOB_URL) {
            self.sync.blob_url = Some(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_sync_off() {
        let opts = AppOptions::default();
        assert!(!opts.sync.enabled);
        assert_eq!(opts.sync.endpoint(), None);
        assert_eq!(opts.store_dir, PathBuf::from(".store"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let opts = AppOptions::from_toml(
            r#"
            [sync]
            enabled = true
            blob_url = "https://acct.blob.core.windows.net/c/scouts.csv?sig=abc"
            "#,
        )
        .unwrap();
        assert!(opts.sync.enabled);
        assert_eq!(opts.export_dir, PathBuf::from("out"));
        assert_eq!(
            opts.sync.redacted_url(),
            "https://acct.blob.core.windows.net/c/scouts.csv?…"
        );
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = AppOptions::from_toml("store_dir = [").unwrap_err();
        assert!(matches!(err, ScoutError::Config(_)));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut opts = AppOptions::default();
        opts.apply_env(|key| match key {
            ENV_SYNC_ENABLED => Some(s!("TRUE")),
            ENV_BLOB_URL => Some(s!("https://x/y.csv")),
            _ => None,
        });
        assert!(opts.sync.enabled);
        assert_eq!(opts.sync.endpoint(), Some("https://x/y.csv"));
    }

    #[test]
    fn blank_url_is_no_endpoint() {
        let cfg = SyncConfig { enabled: true, blob_url: Some(s!("   ")) };
        assert_eq!(cfg.endpoint(), None);
    }
}
