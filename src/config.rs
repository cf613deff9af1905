//! Project configuration.
//!
//! Settings load from an optional `rootshow.toml`. Config files are sparse —
//! override only the values you want; everything else keeps its stock
//! default. Unknown keys are rejected to catch typos early.
//!
//! ```toml
//! [canvas]
//! width = 1280            # SVG viewport in pixels
//! height = 720
//!
//! [scenes]
//! output_dir = "media/scenes"
//!
//! [slides]
//! content_dir = "slides/content"
//! output_dir = "slides/output"
//! title = "Nth Roots of Unity"
//!
//! [rendering]
//! max_workers = 4         # omit for auto = CPU cores
//! ```
//!
//! The worker count is resolved by [`effective_workers`] and passed to the
//! orchestrator explicitly; nothing in the batch layer reads configuration
//! or global state on its own.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Top-level configuration, mirroring `rootshow.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub scenes: ScenesConfig,
    pub slides: SlidesConfig,
    pub rendering: RenderingConfig,
}

impl Config {
    /// Load from a `rootshow.toml` at `path`, falling back to stock defaults
    /// when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Validation(
                "canvas.width and canvas.height must be non-zero".into(),
            ));
        }
        if self.rendering.max_workers == Some(0) {
            return Err(ConfigError::Validation(
                "rendering.max_workers must be at least 1 (omit for auto)".into(),
            ));
        }
        Ok(())
    }
}

/// SVG viewport dimensions shared by every scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenesConfig {
    /// Where rendered scene SVGs are written.
    pub output_dir: String,
}

impl Default for ScenesConfig {
    fn default() -> Self {
        Self {
            output_dir: "media/scenes".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlidesConfig {
    /// Directory of markdown slide sources, one file per slide.
    pub content_dir: String,
    /// Where `presentation.html` is written.
    pub output_dir: String,
    /// Deck title, shown on the title bar and the empty-deck placeholder.
    pub title: String,
}

impl Default for SlidesConfig {
    fn default() -> Self {
        Self {
            content_dir: "slides/content".to_string(),
            output_dir: "slides/output".to_string(),
            title: "Nth Roots of Unity".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderingConfig {
    /// Maximum number of parallel scene-rendering workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_workers: Option<usize>,
}

/// Resolve the effective worker count.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_workers(rendering: &RenderingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    rendering.max_workers.map(|n| n.min(cores)).unwrap_or(cores)
}

/// A fully documented stock config, printed by `rootshow gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = Config::default();
    format!(
        r#"# rootshow configuration. Every key is optional; defaults shown.

[canvas]
# SVG viewport for rendered scenes, in pixels.
width = {width}
height = {height}

[scenes]
# Where rendered scene SVGs are written.
output_dir = "{scenes_out}"

[slides]
# Markdown slide sources, one file per slide; filename order is slide order.
content_dir = "{slides_content}"
# Where presentation.html is written.
output_dir = "{slides_out}"
# Deck title.
title = "{title}"

[rendering]
# Maximum parallel scene-rendering workers. Omit for auto (CPU cores).
# max_workers = 4
"#,
        width = defaults.canvas.width,
        height = defaults.canvas.height,
        scenes_out = defaults.scenes.output_dir,
        slides_content = defaults.slides.content_dir,
        slides_out = defaults.slides.output_dir,
        title = defaults.slides.title,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 1280);
        assert_eq!(config.canvas.height, 720);
        assert_eq!(config.scenes.output_dir, "media/scenes");
        assert_eq!(config.slides.content_dir, "slides/content");
        assert!(config.rendering.max_workers.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&tmp.path().join("rootshow.toml")).unwrap();
        assert_eq!(config.canvas.width, 1280);
    }

    #[test]
    fn partial_config_overrides_only_named_keys() {
        // Sparse override: only canvas width changes.
        let config: Config = toml::from_str("[canvas]\nwidth = 640\n").unwrap();
        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.canvas.height, 720);
        assert_eq!(config.slides.title, "Nth Roots of Unity");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Config, _> = toml::from_str("[canvas]\nwdith = 640\n");
        assert!(result.is_err());
    }

    #[test]
    fn zero_canvas_is_invalid() {
        let config: Config = toml::from_str("[canvas]\nwidth = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn zero_workers_is_invalid() {
        let config: Config = toml::from_str("[rendering]\nmax_workers = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn load_reads_and_validates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rootshow.toml");
        std::fs::write(&path, "[rendering]\nmax_workers = 2\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.rendering.max_workers, Some(2));
    }

    #[test]
    fn load_rejects_invalid_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rootshow.toml");
        std::fs::write(&path, "[rendering]\nmax_workers = 0\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn effective_workers_auto_uses_cores() {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(effective_workers(&RenderingConfig::default()), cores);
    }

    #[test]
    fn effective_workers_clamped_to_cores() {
        let rendering = RenderingConfig {
            max_workers: Some(99999),
        };
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(effective_workers(&rendering), cores);
    }

    #[test]
    fn effective_workers_can_constrain_down() {
        let rendering = RenderingConfig {
            max_workers: Some(1),
        };
        assert_eq!(effective_workers(&rendering), 1);
    }

    #[test]
    fn stock_config_parses_back() {
        let config: Config = toml::from_str(&stock_config_toml()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.canvas.width, Config::default().canvas.width);
    }
}
