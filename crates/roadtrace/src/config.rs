use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use roadtrace::search::frames::DEFAULT_FRAME_STRIDE;
use roadtrace::search::types::{Algorithm, Heuristic, SearchOptions};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "roadtrace";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<TraceConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<Heuristic>,

    /// Multiplier converting coordinate distance into weight units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic_scale: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Node finalizations per exported frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_stride: Option<usize>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `roadtrace config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# roadtrace configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn algorithm(&self) -> Algorithm {
        self.defaults
            .as_ref()
            .and_then(|d| d.algorithm)
            .unwrap_or(Algorithm::Dijkstra)
    }

    pub fn search_options(&self) -> SearchOptions {
        let defaults = SearchOptions::default();
        let search = self.search.as_ref();
        SearchOptions {
            heuristic: search
                .and_then(|s| s.heuristic)
                .unwrap_or(defaults.heuristic),
            heuristic_scale: search
                .and_then(|s| s.heuristic_scale)
                .unwrap_or(defaults.heuristic_scale),
        }
    }

    pub fn frame_stride(&self) -> usize {
        self.trace
            .as_ref()
            .and_then(|t| t.frame_stride)
            .unwrap_or(DEFAULT_FRAME_STRIDE)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.algorithm" => {
                let algorithm = value.parse::<Algorithm>().map_err(anyhow::Error::msg)?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .algorithm = Some(algorithm);
            }
            "search.heuristic" => {
                let heuristic = value.parse::<Heuristic>().map_err(anyhow::Error::msg)?;
                self.search
                    .get_or_insert_with(SearchConfig::default)
                    .heuristic = Some(heuristic);
            }
            "search.heuristic_scale" => {
                let scale = match value.parse::<f64>() {
                    Ok(s) if s.is_finite() && s > 0.0 => s,
                    _ => anyhow::bail!(
                        "Invalid heuristic_scale: {value}. Must be a positive number."
                    ),
                };
                self.search
                    .get_or_insert_with(SearchConfig::default)
                    .heuristic_scale = Some(scale);
            }
            "trace.frame_stride" => {
                let stride = match value.parse::<usize>() {
                    Ok(n) if n > 0 => n,
                    _ => anyhow::bail!(
                        "Invalid frame_stride: {value}. Must be a positive integer."
                    ),
                };
                self.trace
                    .get_or_insert_with(TraceConfig::default)
                    .frame_stride = Some(stride);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.algorithm, search.heuristic, search.heuristic_scale, trace.frame_stride"
            ),
        }
        Ok(())
    }
}
