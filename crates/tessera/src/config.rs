//! TOML widget configuration.
//!
//! Widgets can be described in a TOML document and built from it:
//!
//! ```
//! use tessera::config::WidgetsConfig;
//! use tessera_render::Color;
//!
//! let config = WidgetsConfig::from_toml_str(r##"
//! [color_buttons.fill]
//! label = "Fill"
//! initial_color = "#00FF00"
//!
//! [image_labels.preview]
//! oversize = true
//! horizontal_align = "left"
//! "##).unwrap();
//!
//! let button = config.color_buttons["fill"].build().unwrap();
//! assert_eq!(button.color(), Some(Color::from_rgb8(0, 255, 0)));
//!
//! let label = config.image_labels["preview"].build().unwrap();
//! assert!(label.oversize_allowed());
//! ```
//!
//! Relative image sources are resolved against the directory of the
//! configuration file when it is loaded with [`WidgetsConfig::from_file`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tessera_core::logging::targets;
use tessera_render::{Alignment, Color, HorizontalAlign, RenderError, VerticalAlign, loader};

use crate::widget::widgets::{ColorPickerButton, ScalableImageLabel};

/// Errors produced while reading configuration or building widgets from it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match the schema.
    #[error("invalid widget configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color string could not be parsed.
    #[error("invalid color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// An image source could not be loaded.
    #[error("failed to load image source: {0}")]
    Load(#[from] RenderError),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// ============================================================================
// Alignment
// ============================================================================

/// Horizontal alignment as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignConfig {
    Left,
    #[default]
    Center,
    Right,
}

impl From<HorizontalAlignConfig> for HorizontalAlign {
    fn from(align: HorizontalAlignConfig) -> Self {
        match align {
            HorizontalAlignConfig::Left => HorizontalAlign::Left,
            HorizontalAlignConfig::Center => HorizontalAlign::Center,
            HorizontalAlignConfig::Right => HorizontalAlign::Right,
        }
    }
}

/// Vertical alignment as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignConfig {
    Top,
    #[default]
    Center,
    Bottom,
}

impl From<VerticalAlignConfig> for VerticalAlign {
    fn from(align: VerticalAlignConfig) -> Self {
        match align {
            VerticalAlignConfig::Top => VerticalAlign::Top,
            VerticalAlignConfig::Center => VerticalAlign::Center,
            VerticalAlignConfig::Bottom => VerticalAlign::Bottom,
        }
    }
}

// ============================================================================
// Widget configs
// ============================================================================

/// Construction options for a [`ColorPickerButton`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorPickerButtonConfig {
    /// Fixed overlay text.
    pub label: Option<String>,
    /// Initial color as `#RRGGBB` or `#RRGGBBAA`; unset when absent.
    pub initial_color: Option<String>,
}

impl ColorPickerButtonConfig {
    /// Parse the initial color.
    pub fn color(&self) -> ConfigResult<Option<Color>> {
        self.initial_color
            .as_deref()
            .map(|hex| Color::from_hex(hex).ok_or_else(|| ConfigError::InvalidColor(hex.to_owned())))
            .transpose()
    }

    /// Build the configured button.
    pub fn build(&self) -> ConfigResult<ColorPickerButton> {
        let mut button = ColorPickerButton::new(self.color()?);
        if let Some(label) = &self.label {
            button = button.with_label(label.clone());
        }
        Ok(button)
    }
}

/// Construction options for a [`ScalableImageLabel`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageLabelConfig {
    /// Image file to display.
    pub source: Option<PathBuf>,
    /// Allow upscaling past the native resolution.
    pub oversize: bool,
    pub horizontal_align: HorizontalAlignConfig,
    pub vertical_align: VerticalAlignConfig,
    /// Restrict hit testing of animations to visible pixels.
    pub shape_mask: bool,
    /// Overlay text.
    pub text: Option<String>,
}

impl Default for ImageLabelConfig {
    fn default() -> Self {
        Self {
            source: None,
            oversize: false,
            horizontal_align: HorizontalAlignConfig::Center,
            vertical_align: VerticalAlignConfig::Center,
            shape_mask: true,
            text: None,
        }
    }
}

impl ImageLabelConfig {
    /// The configured alignment.
    pub fn alignment(&self) -> Alignment {
        Alignment::new(self.horizontal_align.into(), self.vertical_align.into())
    }

    /// Build the configured label, loading its source if one is set.
    pub fn build(&self) -> ConfigResult<ScalableImageLabel> {
        let mut label = ScalableImageLabel::new()
            .with_oversize_allowed(self.oversize)
            .with_alignment(self.alignment())
            .with_shape_mask(self.shape_mask);

        if let Some(text) = &self.text {
            label = label.with_text(text.clone());
        }
        if let Some(source) = &self.source {
            label = label.with_content(loader::load_file(source)?);
        }
        Ok(label)
    }
}

/// A set of named widget configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetsConfig {
    pub color_buttons: BTreeMap<String, ColorPickerButtonConfig>,
    pub image_labels: BTreeMap<String, ImageLabelConfig>,
}

impl WidgetsConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read a TOML file, resolving relative image sources against its
    /// directory.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).inspect_err(|err| {
            tracing::warn!(
                target: targets::CONFIG,
                path = %path.display(),
                error = %err,
                "failed to read widget configuration"
            );
        })?;

        let mut config = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent() {
            config.resolve_sources(dir);
        }
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            color_buttons = config.color_buttons.len(),
            image_labels = config.image_labels.len(),
            "loaded widget configuration"
        );
        Ok(config)
    }

    fn resolve_sources(&mut self, dir: &Path) {
        for label in self.image_labels.values_mut() {
            if let Some(source) = label.source.as_mut().filter(|source| source.is_relative()) {
                *source = dir.join(&*source);
            }
        }
    }
}
