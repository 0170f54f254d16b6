//! Paging configuration and its loaders.

use crate::query::types::DEFAULT_PAGE_SIZE;
use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "PAGEVIEW_CONFIG_PATH";
/// Environment variable holding inline JSON config.
pub const CONFIG_JSON_ENV: &str = "PAGEVIEW_CONFIG_JSON";

/// Source that produced the paging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PagingConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
}

/// Settings shared by every [`PagedView`](crate::PagedView) built from them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size handed out by `PagedView::request()`.
    pub default_page_size: usize,
    /// Upper bound applied to every request's page size. `None` leaves
    /// requests uncapped.
    pub max_page_size: Option<usize>,
    /// Row count at which sorting moves to the rayon pool. `None` keeps all
    /// sorting on the calling thread.
    pub parallel_sort_threshold: Option<usize>,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: None,
            parallel_sort_threshold: None,
        }
    }
}

/// Guard-rail violations in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("default_page_size must be at least 1")]
    ZeroDefaultPageSize,

    #[error("max_page_size must be at least 1")]
    ZeroMaxPageSize,

    #[error("default_page_size {default} exceeds max_page_size {max}")]
    DefaultExceedsMax { default: usize, max: usize },
}

impl PagingConfig {
    /// Load configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$PAGEVIEW_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$PAGEVIEW_CONFIG_JSON` (inline JSON),
    /// 3) defaults if neither is set.
    pub fn load_from_env() -> anyhow::Result<(Self, PagingConfigSource)> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// [`load_from_env`](Self::load_from_env) against an arbitrary variable
    /// lookup.
    pub fn load_with<F>(lookup: F) -> anyhow::Result<(Self, PagingConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_file(&path)?;
            debug!(path = %path.display(), "loaded paging config from file");
            return Ok((config, PagingConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            parsed.validate()?;
            debug!("loaded paging config from inline json");
            return Ok((parsed, PagingConfigSource::EnvInline));
        }

        debug!("using default paging config");
        Ok((Self::default(), PagingConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read paging config from {}", path.display())
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid paging config {}", path.display())
            })?,
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!("invalid paging config {}: {}", path.display(), err)
                })?
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string())?,
        };

        config
            .validate()
            .with_context(|| format!("rejected paging config {}", path.display()))?;
        Ok(config)
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse paging config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid paging config json: {err}"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::ZeroDefaultPageSize);
        }
        if let Some(max) = self.max_page_size {
            if max == 0 {
                return Err(ConfigError::ZeroMaxPageSize);
            }
            if self.default_page_size > max {
                return Err(ConfigError::DefaultExceedsMax {
                    default: self.default_page_size,
                    max,
                });
            }
        }
        Ok(())
    }
}
