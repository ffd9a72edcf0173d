//! SVG markup generation from rendered element trees

use std::borrow::Cow;

use crate::descriptor::{Children, IconNode};

use super::SvgConfig;

/// Camel-case presentation attribute names and their SVG spelling
const CAMEL_ATTRIBUTES: &[(&str, &str)] = &[
    ("className", "class"),
    ("strokeWidth", "stroke-width"),
    ("strokeLinecap", "stroke-linecap"),
    ("strokeLinejoin", "stroke-linejoin"),
    ("strokeDasharray", "stroke-dasharray"),
    ("strokeDashoffset", "stroke-dashoffset"),
    ("strokeMiterlimit", "stroke-miterlimit"),
    ("strokeOpacity", "stroke-opacity"),
    ("fillOpacity", "fill-opacity"),
    ("fillRule", "fill-rule"),
    ("clipRule", "clip-rule"),
    ("clipPath", "clip-path"),
    ("stopColor", "stop-color"),
    ("stopOpacity", "stop-opacity"),
    ("vectorEffect", "vector-effect"),
    ("paintOrder", "paint-order"),
    ("shapeRendering", "shape-rendering"),
    ("fontFamily", "font-family"),
    ("fontSize", "font-size"),
    ("fontWeight", "font-weight"),
    ("textAnchor", "text-anchor"),
    ("dominantBaseline", "dominant-baseline"),
];

/// SVG spelling of an attribute name
///
/// Names native to SVG in camel case (`viewBox`, `gradientUnits`) are left
/// alone; only presentation attributes are rewritten.
pub fn svg_attribute_name(name: &str) -> Cow<'_, str> {
    CAMEL_ATTRIBUTES
        .iter()
        .find(|(camel, _)| *camel == name)
        .map(|(_, svg)| Cow::Borrowed(*svg))
        .unwrap_or(Cow::Borrowed(name))
}

/// Write SVG elements incrementally
struct SvgWriter<'a> {
    config: &'a SvgConfig,
    out: String,
}

impl<'a> SvgWriter<'a> {
    fn new(config: &'a SvgConfig) -> Self {
        Self {
            config,
            out: String::new(),
        }
    }

    fn indent_str(&self, depth: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn write_open_tag(&mut self, node: &IconNode) {
        self.out.push('<');
        self.out.push_str(&node.tag);
        for (name, value) in &node.attrs {
            self.out.push_str(&format!(
                r#" {}="{}""#,
                svg_attribute_name(name),
                escape_xml(&value.to_string())
            ));
        }
    }

    fn write_node(&mut self, node: &IconNode, depth: usize) {
        let indent = self.indent_str(depth);
        let nl = self.newline();
        self.out.push_str(&indent);
        self.write_open_tag(node);

        match &node.children {
            None => self.out.push_str("/>"),
            Some(Children::Nodes(nodes)) if nodes.is_empty() => self.out.push_str("/>"),
            Some(Children::Text(text)) => {
                self.out.push('>');
                self.out.push_str(&escape_xml(text));
                self.out.push_str(&format!("</{}>", node.tag));
            }
            Some(Children::Nodes(nodes)) => {
                self.out.push('>');
                self.out.push_str(nl);
                for child in nodes {
                    self.write_node(child, depth + 1);
                    self.out.push_str(nl);
                }
                self.out.push_str(&indent);
                self.out.push_str(&format!("</{}>", node.tag));
            }
        }
    }
}

/// Serialize an element tree to SVG markup
pub fn render_svg(root: &IconNode, config: &SvgConfig) -> String {
    let mut writer = SvgWriter::new(config);
    let nl = writer.newline();

    // XML declaration for standalone
    if config.standalone {
        writer
            .out
            .push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        writer.out.push_str(nl);
    }

    writer.write_node(root, 0);
    writer.out
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> SvgConfig {
        SvgConfig::new().with_pretty_print(false)
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_svg_attribute_name() {
        assert_eq!(svg_attribute_name("strokeWidth"), "stroke-width");
        assert_eq!(svg_attribute_name("className"), "class");
        assert_eq!(svg_attribute_name("viewBox"), "viewBox");
        assert_eq!(svg_attribute_name("stroke-linecap"), "stroke-linecap");
    }

    #[test]
    fn test_leaf_is_self_closing() {
        let node = IconNode::new("circle").attr("cx", 12).attr("r", 1.5);
        assert_eq!(render_svg(&node, &compact()), r#"<circle cx="12" r="1.5"/>"#);
    }

    #[test]
    fn test_text_content_escaped() {
        let node = IconNode::new("text").attr("x", 2).with_text("a<b");
        assert_eq!(
            render_svg(&node, &compact()),
            r#"<text x="2">a&lt;b</text>"#
        );
    }

    #[test]
    fn test_pretty_print_nested() {
        let node = IconNode::new("svg").with_children(vec![IconNode::new("g")
            .with_children(vec![IconNode::new("path").attr("d", "M0 0")])]);
        let svg = render_svg(&node, &SvgConfig::default());
        assert_eq!(svg, "<svg>\n  <g>\n    <path d=\"M0 0\"/>\n  </g>\n</svg>");
    }

    #[test]
    fn test_standalone_declaration() {
        let node = IconNode::new("svg");
        let svg = render_svg(&node, &compact().with_standalone(true));
        assert_eq!(svg, r#"<?xml version="1.0" encoding="UTF-8"?><svg/>"#);
    }

    #[test]
    fn test_camel_case_attributes_written_as_svg() {
        let node = IconNode::new("path").attr("strokeLinejoin", "miter");
        assert_eq!(
            render_svg(&node, &compact()),
            r#"<path stroke-linejoin="miter"/>"#
        );
    }

    #[test]
    fn test_attribute_values_escaped() {
        let node = IconNode::new("g").attr("data-label", r#"say "hi""#);
        assert_eq!(
            render_svg(&node, &compact()),
            r#"<g data-label="say &quot;hi&quot;"/>"#
        );
    }
}
