//! Presentation setting resolution

use crate::config::{IconConfig, IconDefaults, IconProps, ShapeStyle};

/// Side length of the canonical icon viewBox
pub const VIEWBOX_UNIT: f64 = 24.0;

/// Final presentation values for a single render
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub size: f64,
    pub color: String,
    pub stroke_width: f64,
    pub absolute_stroke_width: bool,
}

impl ResolvedConfig {
    /// Resolve each field from the first layer that has it:
    /// explicit prop, then shared config, then the icon's literal default.
    pub fn resolve(props: &IconProps, config: &IconConfig, defaults: &IconDefaults) -> Self {
        Self {
            size: props
                .size
                .or(config.default_size)
                .unwrap_or(defaults.size),
            color: props
                .color
                .clone()
                .or_else(|| config.default_color.clone())
                .unwrap_or_else(|| defaults.color.clone()),
            stroke_width: props
                .stroke_width
                .or(config.default_stroke_width)
                .unwrap_or(defaults.stroke_width),
            absolute_stroke_width: props
                .absolute_stroke_width
                .or(config.default_absolute_stroke_width)
                .unwrap_or(defaults.absolute_stroke_width),
        }
    }

    /// Stroke width injected into shapes that don't declare their own
    pub fn effective_stroke_width(&self, style: &ShapeStyle) -> f64 {
        if self.absolute_stroke_width || !style.scale_stroke {
            self.stroke_width
        } else {
            self.stroke_width * self.size / VIEWBOX_UNIT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_defaults_when_nothing_set() {
        let resolved = ResolvedConfig::resolve(
            &IconProps::default(),
            &IconConfig::default(),
            &IconDefaults::outline(),
        );
        assert_eq!(
            resolved,
            ResolvedConfig {
                size: 24.0,
                color: "currentColor".to_string(),
                stroke_width: 2.0,
                absolute_stroke_width: false,
            }
        );
    }

    #[test]
    fn test_shared_config_beats_literal() {
        let config = IconConfig::new()
            .with_default_size(32.0)
            .with_default_color("navy")
            .with_default_stroke_width(1.0)
            .with_default_absolute_stroke_width(true);
        let resolved =
            ResolvedConfig::resolve(&IconProps::default(), &config, &IconDefaults::compact());
        assert_eq!(resolved.size, 32.0);
        assert_eq!(resolved.color, "navy");
        assert_eq!(resolved.stroke_width, 1.0);
        assert!(resolved.absolute_stroke_width);
    }

    #[test]
    fn test_props_beat_shared_config() {
        let config = IconConfig::new()
            .with_default_size(32.0)
            .with_default_color("navy")
            .with_default_stroke_width(1.0)
            .with_default_absolute_stroke_width(true);
        let props = IconProps::new()
            .with_size(12.0)
            .with_color("red")
            .with_stroke_width(3.0)
            .with_absolute_stroke_width(false);
        let resolved = ResolvedConfig::resolve(&props, &config, &IconDefaults::outline());
        assert_eq!(resolved.size, 12.0);
        assert_eq!(resolved.color, "red");
        assert_eq!(resolved.stroke_width, 3.0);
        assert!(!resolved.absolute_stroke_width);
    }

    #[test]
    fn test_fields_resolve_independently() {
        let config = IconConfig::new().with_default_color("navy");
        let props = IconProps::new().with_size(48.0);
        let resolved = ResolvedConfig::resolve(&props, &config, &IconDefaults::outline());
        assert_eq!(resolved.size, 48.0);
        assert_eq!(resolved.color, "navy");
        assert_eq!(resolved.stroke_width, 2.0);
    }

    #[test]
    fn test_effective_stroke_width_scales_with_size() {
        let resolved = ResolvedConfig {
            size: 48.0,
            color: "currentColor".to_string(),
            stroke_width: 2.0,
            absolute_stroke_width: false,
        };
        assert_eq!(resolved.effective_stroke_width(&ShapeStyle::default()), 4.0);
    }

    #[test]
    fn test_effective_stroke_width_absolute() {
        let resolved = ResolvedConfig {
            size: 48.0,
            color: "currentColor".to_string(),
            stroke_width: 3.0,
            absolute_stroke_width: true,
        };
        assert_eq!(resolved.effective_stroke_width(&ShapeStyle::default()), 3.0);
    }

    #[test]
    fn test_effective_stroke_width_unscaled_style() {
        let resolved = ResolvedConfig {
            size: 96.0,
            color: "currentColor".to_string(),
            stroke_width: 1.8,
            absolute_stroke_width: false,
        };
        let style = ShapeStyle {
            round_caps: true,
            scale_stroke: false,
        };
        assert_eq!(resolved.effective_stroke_width(&style), 1.8);
    }
}
