//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to emit an XML declaration before the root element
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Whether the root `<svg>` carries the SVG namespace
    pub include_xmlns: bool,

    /// Prefix for CSS class names (e.g., "ik-" for "ik-icon ik-check")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: true,
            include_xmlns: true,
            class_prefix: Some("ik-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set whether to emit the `xmlns` attribute
    pub fn with_xmlns(mut self, include: bool) -> Self {
        self.include_xmlns = include;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix (no generated classes)
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
