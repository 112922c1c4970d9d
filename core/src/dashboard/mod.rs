// Dashboard module - Launch records visualization
//
// Provides a simple HTTP server that serves the page and recomputed chart figures.

mod api;
mod layout;
mod static_assets;

pub use api::{DashboardServer, TableSummary};
pub use layout::{DropdownOption, PageLayout, RangeSliderSpec, SiteDropdown};

use crate::aggregator::RangeMode;
use crate::{DashError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4444;
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";
pub const DEFAULT_PAYLOAD_STEP: f64 = 1000.0;

/// Dashboard configuration
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub port: u16,
    pub host: String,
    /// Launch records CSV
    pub data_path: PathBuf,
    /// Range slider step (kg)
    pub payload_step: f64,
    pub range_mode: RangeMode,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            payload_step: DEFAULT_PAYLOAD_STEP,
            range_mode: RangeMode::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset or unparsable values keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let range_mode = match var("PAYLOAD_RANGE_MODE").map(|v| v.parse::<RangeMode>()) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                tracing::warn!(target: "dashboard", error = %e, "Ignoring PAYLOAD_RANGE_MODE");
                default.range_mode
            }
            None => default.range_mode,
        };

        Self {
            port: var("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(default.port),
            host: var("IP").unwrap_or(default.host),
            data_path: var("LAUNCH_DATA_CSV")
                .map(PathBuf::from)
                .unwrap_or(default.data_path),
            payload_step: var("PAYLOAD_STEP")
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|s| s.is_finite() && *s > 0.0)
                .unwrap_or(default.payload_step),
            range_mode,
        }
    }

    /// Env-driven config with an optional TOML overlay
    /// (path via LAUNCHDASH_CONFIG or ./launchdash.toml).
    pub fn load() -> Self {
        let path = std::env::var("LAUNCHDASH_CONFIG").unwrap_or_else(|_| "launchdash.toml".into());
        Self::from_env().with_toml_file(Path::new(&path))
    }

    /// Overlay the TOML file at `p` if present; any read or parse failure keeps `self`.
    pub fn with_toml_file(self, p: &Path) -> Self {
        if !p.exists() {
            tracing::info!(target: "dashboard", path = %p.display(), "No TOML config found; using defaults/env");
            return self;
        }
        match fs::read_to_string(p) {
            Ok(s) => match self.clone().overlay_toml(&s) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!(target: "dashboard", error = %e, "Failed to parse TOML; using defaults/env");
                    self
                }
            },
            Err(e) => {
                tracing::warn!(target: "dashboard", error = %e, "Failed to read TOML; using defaults/env");
                self
            }
        }
    }

    /// Apply a TOML document on top of this config
    pub fn overlay_toml(self, doc: &str) -> Result<Self> {
        let t: DashboardToml = toml::from_str(doc).map_err(|e| DashError::Config(e.to_string()))?;
        t.apply(self)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =========================
// TOML overlay definitions
// =========================

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct DashboardToml {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_path: Option<PathBuf>,
    pub payload_step: Option<f64>,
    pub range_mode: Option<String>,
}

impl DashboardToml {
    fn apply(self, mut c: DashboardConfig) -> Result<DashboardConfig> {
        if let Some(x) = self.host {
            c.host = x;
        }
        if let Some(x) = self.port {
            c.port = x;
        }
        if let Some(x) = self.data_path {
            c.data_path = x;
        }
        if let Some(x) = self.payload_step {
            if !x.is_finite() || x <= 0.0 {
                return Err(DashError::Config(format!("payload_step must be positive, got {x}")));
            }
            c.payload_step = x;
        }
        if let Some(x) = self.range_mode {
            c.range_mode = x.parse()?;
        }
        Ok(c)
    }
}
