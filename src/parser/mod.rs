//! Parser for SVG icon fragments

mod fragment;
pub mod lexer;

pub use fragment::parse_fragment;
