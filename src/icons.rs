//! Built-in icon data
//!
//! Inner SVG markup for a small stroke icon set on the 24x24 grid. Shapes
//! carry geometry only; presentation attributes come from the renderer.

use crate::config::IconDefaults;

pub const ALBUM: &str = r#"<rect x="3" y="3" width="18" height="18" rx="2" ry="2"/><polyline points="11 3 11 11 14 8 17 11 17 3"/>"#;

pub const ARROW_RIGHT: &str = r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#;

pub const CHECK: &str = r#"<path d="M20 6 9 17l-5-5"/>"#;

pub const CIRCLE_CHECK: &str = r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#;

pub const DATABASE: &str = r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5V19A9 3 0 0 0 21 19V5"/><path d="M3 12A9 3 0 0 0 21 12"/>"#;

pub const EQUAL: &str = r#"<line x1="5" x2="19" y1="9" y2="9"/><line x1="5" x2="19" y1="15" y2="15"/>"#;

pub const HOUSE: &str = r#"<path d="M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8"/><path d="M3 10a2 2 0 0 1 .709-1.528l7-6a2 2 0 0 1 2.582 0l7 6A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>"#;

pub const MAIL: &str = r#"<path d="m22 7-8.991 5.727a2 2 0 0 1-2.009 0L2 7"/><rect x="2" y="4" width="20" height="16" rx="2"/>"#;

pub const MINUS: &str = r#"<path d="M5 12h14"/>"#;

pub const PLAY: &str = r#"<polygon points="6 3 20 12 6 21 6 3"/>"#;

pub const PLUS: &str = r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#;

pub const SEARCH: &str = r#"<path d="m21 21-4.34-4.34"/><circle cx="11" cy="11" r="8"/>"#;

pub const USER: &str = r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#;

pub const X: &str = r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#;

/// Grouped layers; the outer ring keeps a hairline stroke at every size
pub const TARGET: &str = r#"<circle cx="12" cy="12" r="10" stroke-width="1"/><g><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/></g>"#;

/// Sharp-cornered square from the fine family
pub const SQUARE_SHARP: &str = r#"<rect x="3" y="3" width="18" height="18"/>"#;

/// 16px check from the compact family
pub const CHECK_SMALL: &str = r#"<path d="M20 6 9 17l-5-5"/>"#;

/// Every built-in icon: name, literal defaults, markup
pub(crate) fn builtin_icons() -> Vec<(&'static str, IconDefaults, &'static str)> {
    let outline = IconDefaults::outline();
    vec![
        ("album", outline.clone(), ALBUM),
        ("arrow-right", outline.clone(), ARROW_RIGHT),
        ("check", outline.clone(), CHECK),
        ("circle-check", outline.clone(), CIRCLE_CHECK),
        ("database", outline.clone(), DATABASE),
        ("equal", outline.clone(), EQUAL),
        ("house", outline.clone(), HOUSE),
        ("mail", outline.clone(), MAIL),
        ("minus", outline.clone(), MINUS),
        ("play", outline.clone(), PLAY),
        ("plus", outline.clone(), PLUS),
        ("search", outline.clone(), SEARCH),
        ("user", outline.clone(), USER),
        ("x", outline.clone(), X),
        ("target", outline, TARGET),
        (
            "square-sharp",
            IconDefaults::fine()
                .with_round_caps(false)
                .with_scaled_stroke(false),
            SQUARE_SHARP,
        ),
        ("check-small", IconDefaults::compact(), CHECK_SMALL),
    ]
}
