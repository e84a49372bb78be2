// src/config/service.rs
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";
pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";
pub const ENV_MAX_TEXT_BYTES: &str = "ANALYZER_MAX_TEXT_BYTES";
pub const ENV_MAX_BATCH_ITEMS: &str = "ANALYZER_MAX_BATCH_ITEMS";
pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";

fn default_max_text_bytes() -> usize {
    64 * 1024
}
fn default_max_batch_items() -> usize {
    64
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub debug: DebugSection,
    #[serde(default)]
    pub metrics: MetricsSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    /// Longest accepted news text, in bytes.
    #[serde(default = "default_max_text_bytes")]
    pub max_text_bytes: usize,
    /// Most items accepted by one `/batch` call.
    #[serde(default = "default_max_batch_items")]
    pub max_batch_items: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            max_text_bytes: default_max_text_bytes(),
            max_batch_items: default_max_batch_items(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DebugSection {
    #[serde(default)]
    pub routes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ServiceConfig {
    /// Parse from a TOML string and sanitize.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let mut cfg: ServiceConfig = toml::from_str(s)?;
        cfg.sanitize();
        Ok(cfg)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading service config from {}", path.display()))?;
        Self::from_toml_str(&data)
            .with_context(|| format!("parsing service config at {}", path.display()))
    }

    /// Resolve config:
    /// 1) $ANALYZER_CONFIG_PATH or config/analyzer.toml (missing file → defaults)
    /// 2) env overrides for limits and debug routes
    pub fn from_env() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut cfg = if path.exists() {
            Self::load_from_file(&path)?
        } else {
            info!(path = %path.display(), "service config not found, using defaults");
            Self::default()
        };
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(v) = parse_usize_env(ENV_MAX_TEXT_BYTES) {
            self.server.max_text_bytes = v;
        }
        if let Some(v) = parse_usize_env(ENV_MAX_BATCH_ITEMS) {
            self.server.max_batch_items = v;
        }
        if let Ok(v) = std::env::var(ENV_DEBUG_ROUTES) {
            self.debug.routes = v.trim() == "1";
        }
        self.sanitize();
    }

    /// Zero limits would reject everything; fall back to defaults.
    fn sanitize(&mut self) {
        if self.server.max_text_bytes == 0 {
            self.server.max_text_bytes = default_max_text_bytes();
        }
        if self.server.max_batch_items == 0 {
            self.server.max_batch_items = default_max_batch_items();
        }
    }
}

fn parse_usize_env(name: &str) -> Option<usize> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}
