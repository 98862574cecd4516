use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Browser presentation settings, loadable from a JSON file with per-field
/// defaults so hosts only override what they care about.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "BrowserConfig::default_max_icon_size")]
    pub max_icon_size: f32,
    #[serde(default = "BrowserConfig::default_button_size")]
    pub button_size: f32,
    #[serde(default = "BrowserConfig::default_button_padding")]
    pub button_padding: f32,
    #[serde(default = "BrowserConfig::default_panel_width")]
    pub panel_width: f32,
    /// Window anchor as a fraction of the screen, matching the tool's default
    /// drag position.
    #[serde(default = "BrowserConfig::default_position")]
    pub default_position: [f32; 2],
}

impl BrowserConfig {
    const fn default_max_icon_size() -> f32 {
        32.0
    }

    const fn default_button_size() -> f32 {
        40.0
    }

    const fn default_button_padding() -> f32 {
        4.0
    }

    const fn default_panel_width() -> f32 {
        160.0
    }

    const fn default_position() -> [f32; 2] {
        [0.5, 0.4]
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading browser config {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("parsing browser config {}", path.display()))?;
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("[spawndeck] {err:#}. Falling back to default browser config.");
                Self::default()
            }
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            max_icon_size: Self::default_max_icon_size(),
            button_size: Self::default_button_size(),
            button_padding: Self::default_button_padding(),
            panel_width: Self::default_panel_width(),
            default_position: Self::default_position(),
        }
    }
}
