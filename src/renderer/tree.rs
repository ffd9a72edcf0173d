//! Attribute resolution and element tree construction

use crate::config::{IconConfig, IconDefaults, IconProps, ShapeStyle};
use crate::descriptor::{same_attribute, Attributes, Children, IconNode};
use crate::registry::IconDefinition;
use crate::resolve::ResolvedConfig;

use super::svg::render_svg;
use super::SvgConfig;

/// Fixed viewBox of every icon
pub const VIEW_BOX: &str = "0 0 24 24";

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Render a descriptor list with resolved settings
///
/// Shape elements get `stroke`, `fill`, `stroke-width` and (when the style
/// asks for it) round caps and joins, each only when the descriptor does not
/// already declare it. A shape that declares its own stroke width keeps that
/// literal unscaled. Other elements pass through untouched. Injected
/// attributes come first, followed by the descriptor's own in their
/// original order.
pub fn resolve_and_render(
    descriptors: &[IconNode],
    resolved: &ResolvedConfig,
    style: &ShapeStyle,
) -> Vec<IconNode> {
    let stroke_width = resolved.effective_stroke_width(style);
    descriptors
        .iter()
        .map(|node| render_node(node, resolved, style, stroke_width))
        .collect()
}

fn render_node(
    node: &IconNode,
    resolved: &ResolvedConfig,
    style: &ShapeStyle,
    stroke_width: f64,
) -> IconNode {
    let attrs = if node.is_shape() {
        shape_attributes(&node.attrs, resolved, style, stroke_width)
    } else {
        node.attrs.clone()
    };

    let children = match &node.children {
        Some(Children::Nodes(nodes)) => Some(Children::Nodes(
            nodes
                .iter()
                .map(|child| render_node(child, resolved, style, stroke_width))
                .collect(),
        )),
        other => other.clone(),
    };

    IconNode {
        tag: node.tag.clone(),
        attrs,
        children,
    }
}

fn shape_attributes(
    declared: &Attributes,
    resolved: &ResolvedConfig,
    style: &ShapeStyle,
    stroke_width: f64,
) -> Attributes {
    let mut attrs = Attributes::new();
    if !declared.contains("stroke") {
        attrs.set("stroke", resolved.color.as_str());
    }
    if !declared.contains("fill") {
        attrs.set("fill", "none");
    }
    if !declared.contains("stroke-width") {
        attrs.set("stroke-width", stroke_width);
    }
    if style.round_caps {
        if !declared.contains("stroke-linecap") {
            attrs.set("stroke-linecap", "round");
        }
        if !declared.contains("stroke-linejoin") {
            attrs.set("stroke-linejoin", "round");
        }
    }
    attrs.extend_from(declared);
    attrs
}

/// Renders icons against one shared default configuration
///
/// The shared defaults are handed to the renderer once, at construction,
/// and every render reads them from here.
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    config: IconConfig,
    svg: SvgConfig,
}

impl IconRenderer {
    pub fn new(config: IconConfig) -> Self {
        Self {
            config,
            svg: SvgConfig::default(),
        }
    }

    /// Set the SVG output configuration
    pub fn with_svg(mut self, svg: SvgConfig) -> Self {
        self.svg = svg;
        self
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    pub fn svg_config(&self) -> &SvgConfig {
        &self.svg
    }

    /// Resolve presentation settings for one render
    pub fn resolve(&self, props: &IconProps, defaults: &IconDefaults) -> ResolvedConfig {
        ResolvedConfig::resolve(props, &self.config, defaults)
    }

    /// Resolve settings and render a descriptor list (without the `<svg>` root)
    pub fn resolve_and_render(
        &self,
        descriptors: &[IconNode],
        props: &IconProps,
        defaults: &IconDefaults,
    ) -> Vec<IconNode> {
        let resolved = self.resolve(props, defaults);
        log::debug!(
            "resolved icon settings: size={} color={} stroke_width={} absolute={}",
            resolved.size,
            resolved.color,
            resolved.stroke_width,
            resolved.absolute_stroke_width
        );
        resolve_and_render(descriptors, &resolved, &defaults.style)
    }

    /// Render an icon into a complete `<svg>` element tree
    pub fn render_element(&self, icon: &IconDefinition, props: &IconProps) -> IconNode {
        let resolved = self.resolve(props, &icon.defaults);
        let children = resolve_and_render(&icon.nodes, &resolved, &icon.defaults.style);

        let mut classes: Vec<String> = vec![];
        if let Some(prefix) = &self.svg.class_prefix {
            classes.push(format!("{}icon", prefix));
            classes.push(format!("{}{}", prefix, icon.name));
        }
        if let Some(class) = &props.class {
            classes.push(class.clone());
        }

        let mut forwarded = Attributes::new();
        for (name, value) in &props.attributes {
            if same_attribute(name, "className") || same_attribute(name, "class") {
                classes.push(value.to_string());
            } else {
                forwarded.set(name.clone(), value.clone());
            }
        }

        let mut attrs = Attributes::new();
        if self.svg.include_xmlns {
            attrs.set("xmlns", SVG_NAMESPACE);
        }
        attrs.set("width", resolved.size);
        attrs.set("height", resolved.size);
        attrs.set("viewBox", VIEW_BOX);
        attrs.set("fill", "none");
        if !classes.is_empty() {
            attrs.set("class", classes.join(" "));
        }
        attrs.extend_from(&forwarded);

        IconNode::new("svg")
            .with_attrs(attrs)
            .with_children(children)
    }

    /// Render an icon to SVG markup
    pub fn render_svg(&self, icon: &IconDefinition, props: &IconProps) -> String {
        render_svg(&self.render_element(icon, props), &self.svg)
    }
}
