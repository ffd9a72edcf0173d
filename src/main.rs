//! iconkit CLI
//!
//! Usage:
//!   iconkit [OPTIONS] [NAME]
//!
//! Options:
//!   -s, --size <SIZE>                Icon size in pixels
//!   -c, --color <COLOR>              Stroke color
//!   -w, --stroke-width <WIDTH>       Stroke width
//!   -a, --absolute-stroke-width      Don't scale the stroke with the size
//!   -C, --config <FILE>              Shared defaults (TOML format)
//!   -i, --input <FILE>               Render an SVG fragment file
//!   -l, --list                       List available icons
//!   -h, --help                       Print help

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};

use iconkit::{
    IconConfig, IconDefaults, IconDefinition, IconProps, IconSet, IconSetError, RenderConfig,
    SvgConfig,
};

#[derive(Parser)]
#[command(name = "iconkit")]
#[command(about = "Render stroke icons to SVG")]
struct Cli {
    /// Icon name (see --list)
    name: Option<String>,

    /// Icon size in pixels
    #[arg(short, long)]
    size: Option<f64>,

    /// Stroke color
    #[arg(short, long)]
    color: Option<String>,

    /// Stroke width
    #[arg(short = 'w', long)]
    stroke_width: Option<f64>,

    /// Keep the stroke width constant regardless of size
    #[arg(short, long)]
    absolute_stroke_width: bool,

    /// Extra CSS class on the root element
    #[arg(long)]
    class: Option<String>,

    /// Attribute forwarded to the root element (repeatable)
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    attrs: Vec<(String, String)>,

    /// Shared default settings file (TOML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Load icons from a directory of .svg files instead of the built-in set
    #[arg(long)]
    icons: Option<PathBuf>,

    /// Render a single SVG fragment file
    #[arg(short, long, conflicts_with = "icons")]
    input: Option<PathBuf>,

    /// Icon family for --input and --icons
    #[arg(long, value_enum, default_value_t = Family::Outline)]
    family: Family,

    /// List available icons
    #[arg(short, long)]
    list: bool,

    /// Emit output without indentation
    #[arg(long)]
    compact: bool,

    /// Emit an XML declaration
    #[arg(long)]
    standalone: bool,

    /// Debug mode: log resolved settings
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Family {
    /// 24px, 2px stroke
    Outline,
    /// 24px, 1.8px stroke
    Fine,
    /// 16px, 1.5px stroke
    Compact,
}

impl Family {
    fn defaults(self) -> IconDefaults {
        match self {
            Family::Outline => IconDefaults::outline(),
            Family::Fine => IconDefaults::fine(),
            Family::Compact => IconDefaults::compact(),
        }
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Load shared defaults
    let icon_config = match &cli.config {
        Some(path) => match IconConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => IconConfig::default(),
    };

    // Load icons
    let (icons, name) = match &cli.input {
        Some(path) => {
            let icon = load_fragment_file(path, cli.family.defaults());
            let name = icon.name.clone();
            let mut set = IconSet::new();
            if let Err(e) = set.insert(icon) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
            (set, Some(name))
        }
        None => {
            let set = match &cli.icons {
                Some(dir) => match IconSet::load_dir(dir, &cli.family.defaults()) {
                    Ok(set) => set,
                    Err(e) => {
                        eprintln!("Error loading icons from '{}': {}", dir.display(), e);
                        process::exit(1);
                    }
                },
                None => IconSet::builtin(),
            };
            (set, cli.name.clone())
        }
    };

    if cli.list {
        for name in icons.names() {
            println!("{}", name);
        }
        return;
    }

    let name = match name {
        Some(name) => name,
        None => {
            eprintln!("Error: no icon name given (use --list to see available icons)");
            process::exit(1);
        }
    };

    let mut props = IconProps::new();
    props.size = cli.size;
    props.color = cli.color.clone();
    props.stroke_width = cli.stroke_width;
    if cli.absolute_stroke_width {
        props.absolute_stroke_width = Some(true);
    }
    props.class = cli.class.clone();
    for (key, value) in &cli.attrs {
        props.attributes.set(key.clone(), value.as_str());
    }

    let config = RenderConfig::new().with_icon_config(icon_config).with_svg(
        SvgConfig::new()
            .with_pretty_print(!cli.compact)
            .with_standalone(cli.standalone),
    );

    match iconkit::render_with_config(&icons, &name, &props, &config) {
        Ok(svg) => {
            println!("{}", svg);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Read and parse a fragment file, printing annotated errors on failure
fn load_fragment_file(path: &Path, defaults: IconDefaults) -> IconDefinition {
    let source = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            process::exit(1);
        }
    };
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("icon")
        .to_string();

    match IconDefinition::from_fragment(name, defaults, &source) {
        Ok(icon) => icon,
        Err(IconSetError::Parse { errors, .. }) => {
            let filename = path.display().to_string();
            for error in &errors {
                eprint!("{}", error.format(&source, &filename));
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
