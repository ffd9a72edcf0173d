//! iconkit - stroke icons from one renderer and a table of SVG descriptors
//!
//! Every icon is static data: a list of SVG element descriptors plus the
//! literal defaults of its family. A single renderer resolves size, color and
//! stroke width (call-site props, then shared defaults, then the icon's own
//! literals), fills in missing presentation attributes on shape elements and
//! wraps the result in a `<svg viewBox="0 0 24 24">` root.
//!
//! # Example
//!
//! ```rust
//! use iconkit::{render, IconProps};
//!
//! let svg = render("check", &IconProps::new().with_size(48.0)).unwrap();
//! assert!(svg.contains(r#"width="48""#));
//! assert!(svg.contains(r#"stroke-width="4""#));
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod icons;
pub mod parser;
pub mod registry;
pub mod renderer;
pub mod resolve;

pub use config::{ConfigError, IconConfig, IconDefaults, IconProps, ShapeStyle};
pub use descriptor::{AttrValue, Attributes, Children, IconNode};
pub use error::ParseError;
pub use parser::parse_fragment;
pub use registry::{IconDefinition, IconSet, IconSetError};
pub use renderer::{render_svg, resolve_and_render, IconRenderer, SvgConfig};
pub use resolve::ResolvedConfig;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error looking up the icon
    #[error("icon error: {0}")]
    Icon(#[from] IconSetError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Shared default presentation settings
    pub icon: IconConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shared default presentation settings
    pub fn with_icon_config(mut self, config: IconConfig) -> Self {
        self.icon = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Build a renderer from this configuration
    pub fn renderer(&self) -> IconRenderer {
        IconRenderer::new(self.icon.clone()).with_svg(self.svg.clone())
    }
}

/// Render a built-in icon to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use iconkit::{render, IconProps};
///
/// let svg = render("circle-check", &IconProps::new().with_color("green")).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains(r#"stroke="green""#));
/// ```
pub fn render(name: &str, props: &IconProps) -> Result<String, RenderError> {
    render_with_config(&IconSet::builtin(), name, props, &RenderConfig::default())
}

/// Render an icon from a set to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use iconkit::{render_with_config, IconConfig, IconProps, IconSet, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_icon_config(IconConfig::new().with_default_color("#333"))
///     .with_svg(SvgConfig::default().with_pretty_print(false));
///
/// let svg = render_with_config(&IconSet::builtin(), "plus", &IconProps::new(), &config).unwrap();
/// assert!(svg.contains(r##"stroke="#333""##));
/// ```
pub fn render_with_config(
    icons: &IconSet,
    name: &str,
    props: &IconProps,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let icon = icons.get(name)?;
    Ok(config.renderer().render_svg(icon, props))
}
