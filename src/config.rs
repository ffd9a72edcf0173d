//! Presentation settings: shared defaults, call-site props and per-icon literals
//!
//! Three layers feed every render. [`IconProps`] carries explicit call-site
//! values, [`IconConfig`] carries application-wide defaults (usually loaded
//! once at startup), and [`IconDefaults`] carries the literal fallbacks baked
//! into each icon. See [`crate::resolve`] for how they combine.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::descriptor::{AttrValue, Attributes};

/// Errors that can occur when loading or validating a shared config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read icon config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse icon config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid icon config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Application-wide default presentation settings
///
/// Every field is optional; a missing field defers to the icon's own
/// literal default. The renderer only ever reads this value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconConfig {
    /// Optional name for the config
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub default_size: Option<f64>,
    pub default_color: Option<String>,
    pub default_stroke_width: Option<f64>,
    pub default_absolute_stroke_width: Option<bool>,
}

/// TOML structure for deserializing configs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    metadata: Option<TomlMetadata>,
    defaults: Option<TomlDefaults>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDefaults {
    size: Option<f64>,
    color: Option<String>,
    stroke_width: Option<f64>,
    absolute_stroke_width: Option<bool>,
}

impl IconConfig {
    /// Create an empty config (every field defers to icon literals)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load config from TOML string
    ///
    /// ```rust
    /// use iconkit::IconConfig;
    ///
    /// let config = IconConfig::from_str(r#"
    ///     [defaults]
    ///     size = 32
    ///     color = "slategray"
    /// "#).unwrap();
    /// assert_eq!(config.default_size, Some(32.0));
    /// ```
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = parsed.defaults.unwrap_or(TomlDefaults {
            size: None,
            color: None,
            stroke_width: None,
            absolute_stroke_width: None,
        });

        let config = IconConfig {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            default_size: defaults.size,
            default_color: defaults.color,
            default_stroke_width: defaults.stroke_width,
            default_absolute_stroke_width: defaults.absolute_stroke_width,
        };
        config.validate()?;

        log::debug!(
            "loaded icon config {:?}: size={:?} color={:?} stroke_width={:?} absolute={:?}",
            config.name,
            config.default_size,
            config.default_color,
            config.default_stroke_width,
            config.default_absolute_stroke_width
        );
        Ok(config)
    }

    /// Check that every present value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(size) = self.default_size {
            if !size.is_finite() || size <= 0.0 {
                return Err(ConfigError::Invalid {
                    field: "size",
                    message: format!("expected a positive number, got {}", size),
                });
            }
        }
        if let Some(width) = self.default_stroke_width {
            if !width.is_finite() || width < 0.0 {
                return Err(ConfigError::Invalid {
                    field: "stroke_width",
                    message: format!("expected a non-negative number, got {}", width),
                });
            }
        }
        if let Some(color) = &self.default_color {
            if color.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field: "color",
                    message: "color must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn with_default_size(mut self, size: f64) -> Self {
        self.default_size = Some(size);
        self
    }

    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = Some(color.into());
        self
    }

    pub fn with_default_stroke_width(mut self, width: f64) -> Self {
        self.default_stroke_width = Some(width);
        self
    }

    pub fn with_default_absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.default_absolute_stroke_width = Some(absolute);
        self
    }
}

/// Explicit call-site presentation values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconProps {
    pub size: Option<f64>,
    pub color: Option<String>,
    pub stroke_width: Option<f64>,
    pub absolute_stroke_width: Option<bool>,
    /// Extra CSS class for the root `<svg>`
    pub class: Option<String>,
    /// Attributes forwarded to the root `<svg>`
    pub attributes: Attributes,
}

impl IconProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = Some(absolute);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Forward an attribute to the root `<svg>`
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

/// Which shape attributes an icon family fills in
///
/// Icon families differ here: some set round caps and joins, some don't,
/// and some never scale the stroke with the icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeStyle {
    /// Default `stroke-linecap` and `stroke-linejoin` to `round`
    pub round_caps: bool,
    /// Scale non-absolute stroke widths by `size / 24`
    pub scale_stroke: bool,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            round_caps: true,
            scale_stroke: true,
        }
    }
}

/// Literal fallback values baked into an icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconDefaults {
    pub size: f64,
    pub color: String,
    pub stroke_width: f64,
    pub absolute_stroke_width: bool,
    pub style: ShapeStyle,
}

impl Default for IconDefaults {
    fn default() -> Self {
        Self::outline()
    }
}

impl IconDefaults {
    pub fn new(size: f64, stroke_width: f64) -> Self {
        Self {
            size,
            color: "currentColor".to_string(),
            stroke_width,
            absolute_stroke_width: false,
            style: ShapeStyle::default(),
        }
    }

    /// 24px icons with a 2px stroke
    pub fn outline() -> Self {
        Self::new(24.0, 2.0)
    }

    /// 24px icons with a 1.8px stroke
    pub fn fine() -> Self {
        Self::new(24.0, 1.8)
    }

    /// 16px icons with a 1.5px stroke
    pub fn compact() -> Self {
        Self::new(16.0, 1.5)
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = absolute;
        self
    }

    pub fn with_round_caps(mut self, round_caps: bool) -> Self {
        self.style.round_caps = round_caps;
        self
    }

    pub fn with_scaled_stroke(mut self, scale_stroke: bool) -> Self {
        self.style.scale_stroke = scale_stroke;
        self
    }
}
