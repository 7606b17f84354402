use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, TexUvError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "TEXUV_CONFIG";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub overlay: OverlayStyle,
    pub viewport: ViewportConfig,
}

/// Appearance of the UV label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub font_size: f32,
    /// RGB
    pub text_color: [u8; 3],
    pub background: [u8; 3],
    pub border: [u8; 3],
    /// Box padding as a fraction of the font size.
    pub padding: f32,
    pub rounding: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            text_color: [255, 0, 0],
            background: [255, 255, 255],
            border: [255, 0, 0],
            padding: 0.5,
            rounding: 4.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Largest initial window inner size; images up to this size open at 1:1.
    pub max_window: [f32; 2],
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 20.0,
            max_window: [1600.0, 1000.0],
        }
    }
}

impl PickerConfig {
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text).map_err(|e| TexUvError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Load from the file named by `TEXUV_CONFIG`, or fall back to defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = Path::new(&path);
                info!(path = %path.display(), "loading config");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let v = &self.viewport;
        let o = &self.overlay;
        let message = if !(v.min_zoom.is_finite() && v.max_zoom.is_finite()) {
            format!("zoom limits must be finite, got {}..{}", v.min_zoom, v.max_zoom)
        } else if !(v.min_zoom > 0.0 && v.min_zoom <= v.max_zoom) {
            format!("zoom range {}..{} is empty", v.min_zoom, v.max_zoom)
        } else if !(o.font_size.is_finite() && o.font_size > 0.0) {
            format!("font_size must be positive, got {}", o.font_size)
        } else if !(o.padding.is_finite() && o.padding >= 0.0) {
            format!("padding must be non-negative, got {}", o.padding)
        } else if !(o.rounding.is_finite() && o.rounding >= 0.0) {
            format!("rounding must be non-negative, got {}", o.rounding)
        } else if !v.max_window.iter().all(|s| s.is_finite() && *s >= 1.0) {
            "max_window extents must be finite and at least 1".to_string()
        } else {
            return Ok(());
        };
        Err(TexUvError::Config {
            path: path.to_path_buf(),
            message,
        })
    }
}
