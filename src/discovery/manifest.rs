//! Project manifest (swatch.yaml) parsing.
//!
//! The manifest supplies per-project defaults: which targets to scan, where
//! to write the report, and the extraction settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

/// Default maximum number of colours per asset.
pub const DEFAULT_TOP: usize = 6;

/// Default side length of the sampling square.
pub const DEFAULT_SAMPLE: u32 = 80;

/// Conventional asset directory scanned when no targets are given.
pub const DEFAULT_SOURCE: &str = "brandbook/gradients";

/// Project manifest loaded from swatch.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Files or directories to scan when none are given on the command line.
    pub sources: Vec<String>,

    /// Report destination; stdout when absent.
    pub output: Option<PathBuf>,

    /// Maximum number of colours per asset.
    pub top: Option<usize>,

    /// Sampling square size.
    pub sample: Option<u32>,

    /// Emit the flattened `{name: [hex]}` form.
    pub flatten: Option<bool>,

    /// Patterns to exclude from directory expansion.
    pub excludes: Vec<String>,
}

impl Manifest {
    /// Load manifest from a swatch.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SwatchError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check swatch.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir))
                    || path.starts_with(&format!("{}/", dir));
            }
            return path.ends_with(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !suffix.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Targets to scan, falling back to [`DEFAULT_SOURCE`].
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![DEFAULT_SOURCE.to_string()]
        } else {
            self.sources.clone()
        }
    }

    pub fn effective_top(&self) -> usize {
        self.top.unwrap_or(DEFAULT_TOP)
    }

    pub fn effective_sample(&self) -> u32 {
        self.sample.unwrap_or(DEFAULT_SAMPLE)
    }
}
