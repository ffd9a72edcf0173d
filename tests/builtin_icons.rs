//! Properties that hold for every built-in icon

use iconkit::{
    AttrValue, IconConfig, IconDefinition, IconNode, IconProps, IconRenderer, IconSet,
    ResolvedConfig,
};

/// Pair every shape in the icon data with its rendered counterpart
fn shape_pairs<'a>(
    icon: &'a IconDefinition,
    rendered: &'a IconNode,
) -> Vec<(&'a IconNode, &'a IconNode)> {
    let originals: Vec<&IconNode> = icon.nodes.iter().flat_map(|n| n.walk()).collect();
    let outputs: Vec<&IconNode> = rendered
        .child_nodes()
        .iter()
        .flat_map(|n| n.walk())
        .collect();
    assert_eq!(originals.len(), outputs.len(), "tree shape of {}", icon.name);
    originals
        .into_iter()
        .zip(outputs)
        .filter(|(original, _)| original.is_shape())
        .collect()
}

fn prop_variants() -> Vec<IconProps> {
    vec![
        IconProps::new(),
        IconProps::new().with_size(48.0),
        IconProps::new().with_size(18.0).with_color("tomato"),
        IconProps::new()
            .with_size(40.0)
            .with_stroke_width(3.0)
            .with_absolute_stroke_width(true),
        IconProps::new().with_stroke_width(1.25).with_color("#0a0a0a"),
    ]
}

#[test]
fn test_stroke_equals_resolved_color() {
    let icons = IconSet::builtin();
    let renderer = IconRenderer::default();
    for icon in icons.iter() {
        for props in prop_variants() {
            let resolved = renderer.resolve(&props, &icon.defaults);
            let root = renderer.render_element(icon, &props);
            for (original, output) in shape_pairs(icon, &root) {
                if original.attrs.contains("stroke") {
                    continue;
                }
                assert_eq!(
                    output.attrs.get("stroke"),
                    Some(&AttrValue::from(resolved.color.as_str())),
                    "{}",
                    icon.name
                );
                assert_eq!(output.attrs.get("fill"), Some(&AttrValue::from("none")));
            }
        }
    }
}

#[test]
fn test_stroke_width_formula() {
    let icons = IconSet::builtin();
    let renderer = IconRenderer::default();
    for icon in icons.iter() {
        for props in prop_variants() {
            let resolved = renderer.resolve(&props, &icon.defaults);
            let expected = if resolved.absolute_stroke_width || !icon.defaults.style.scale_stroke {
                resolved.stroke_width
            } else {
                resolved.stroke_width * resolved.size / 24.0
            };

            let root = renderer.render_element(icon, &props);
            for (original, output) in shape_pairs(icon, &root) {
                let width = output.attrs.get("stroke-width");
                if original.attrs.contains("stroke-width") {
                    assert_eq!(width, original.attrs.get("stroke-width"), "{}", icon.name);
                } else {
                    assert_eq!(width, Some(&AttrValue::Num(expected)), "{}", icon.name);
                }
            }
        }
    }
}

#[test]
fn test_absolute_stroke_width_independent_of_size() {
    let icons = IconSet::builtin();
    let renderer = IconRenderer::default();
    for icon in icons.iter() {
        for size in [8.0, 24.0, 100.0] {
            let props = IconProps::new()
                .with_size(size)
                .with_stroke_width(2.5)
                .with_absolute_stroke_width(true);
            let root = renderer.render_element(icon, &props);
            for (original, output) in shape_pairs(icon, &root) {
                if !original.attrs.contains("stroke-width") {
                    assert_eq!(output.attrs.get("stroke-width"), Some(&AttrValue::Num(2.5)));
                }
            }
        }
    }
}

#[test]
fn test_round_caps_follow_icon_style() {
    let icons = IconSet::builtin();
    let renderer = IconRenderer::default();
    for icon in icons.iter() {
        let root = renderer.render_element(icon, &IconProps::new());
        for (_, output) in shape_pairs(icon, &root) {
            assert_eq!(
                output.attrs.contains("stroke-linecap"),
                icon.defaults.style.round_caps,
                "{}",
                icon.name
            );
            assert_eq!(
                output.attrs.contains("stroke-linejoin"),
                icon.defaults.style.round_caps,
                "{}",
                icon.name
            );
        }
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let icons = IconSet::builtin();
    let renderer = IconRenderer::new(IconConfig::new().with_default_color("navy"));
    for icon in icons.iter() {
        for props in prop_variants() {
            assert_eq!(
                renderer.render_element(icon, &props),
                renderer.render_element(icon, &props)
            );
            assert_eq!(renderer.render_svg(icon, &props), renderer.render_svg(icon, &props));
        }
    }
}

#[test]
fn test_precedence_chain() {
    let icons = IconSet::builtin();
    let config = IconConfig::new()
        .with_default_size(30.0)
        .with_default_color("navy")
        .with_default_stroke_width(1.0);
    for icon in icons.iter() {
        let from_literals =
            ResolvedConfig::resolve(&IconProps::new(), &IconConfig::new(), &icon.defaults);
        assert_eq!(from_literals.size, icon.defaults.size);
        assert_eq!(from_literals.color, icon.defaults.color);

        let from_config = ResolvedConfig::resolve(&IconProps::new(), &config, &icon.defaults);
        assert_eq!(from_config.size, 30.0);
        assert_eq!(from_config.color, "navy");
        assert_eq!(from_config.stroke_width, 1.0);

        let props = IconProps::new().with_size(10.0).with_color("red");
        let from_props = ResolvedConfig::resolve(&props, &config, &icon.defaults);
        assert_eq!(from_props.size, 10.0);
        assert_eq!(from_props.color, "red");
        assert_eq!(from_props.stroke_width, 1.0);
    }
}

#[test]
fn test_root_carries_size_and_viewbox() {
    let icons = IconSet::builtin();
    let renderer = IconRenderer::default();
    for icon in icons.iter() {
        let root = renderer.render_element(icon, &IconProps::new().with_size(20.0));
        assert_eq!(root.tag, "svg");
        assert_eq!(root.attrs.get("width"), Some(&AttrValue::Num(20.0)));
        assert_eq!(root.attrs.get("height"), Some(&AttrValue::Num(20.0)));
        assert_eq!(root.attrs.get("viewBox"), Some(&AttrValue::from("0 0 24 24")));
        assert_eq!(root.attrs.get("fill"), Some(&AttrValue::from("none")));
        assert_eq!(root.child_nodes().len(), icon.nodes.len());
    }
}
