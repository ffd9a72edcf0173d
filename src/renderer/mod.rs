//! Icon renderer
//!
//! This module turns icon descriptors plus presentation settings into a
//! rendered element tree, and serializes trees to SVG markup.

pub mod config;
pub mod svg;
pub mod tree;

pub use config::SvgConfig;
pub use svg::render_svg;
pub use tree::{resolve_and_render, IconRenderer, VIEW_BOX};
