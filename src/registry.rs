//! Icon registry: icon names mapped to descriptor data

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::IconDefaults;
use crate::descriptor::IconNode;
use crate::error::ParseError;
use crate::icons::builtin_icons;
use crate::parser::parse_fragment;

/// Errors that can occur during icon set operations
#[derive(Debug, Error)]
pub enum IconSetError {
    /// Icon not found in the set
    #[error("icon not found: {name}")]
    NotFound { name: String },

    /// Duplicate icon definition
    #[error("duplicate icon definition: {name}")]
    Duplicate { name: String },

    /// Error reading an icon file or directory
    #[error("error reading icon source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Icon markup failed to parse
    #[error("invalid markup for icon {name}: {}", format_parse_errors(.errors))]
    Parse {
        name: String,
        errors: Vec<ParseError>,
    },
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A named icon: descriptors plus the literal defaults baked into it
#[derive(Debug, Clone, PartialEq)]
pub struct IconDefinition {
    pub name: String,
    pub defaults: IconDefaults,
    pub nodes: Vec<IconNode>,
}

impl IconDefinition {
    pub fn new(name: impl Into<String>, defaults: IconDefaults, nodes: Vec<IconNode>) -> Self {
        Self {
            name: name.into(),
            defaults,
            nodes,
        }
    }

    /// Build a definition from SVG fragment markup
    pub fn from_fragment(
        name: impl Into<String>,
        defaults: IconDefaults,
        source: &str,
    ) -> Result<Self, IconSetError> {
        let name = name.into();
        match parse_fragment(source) {
            Ok(nodes) => Ok(Self::new(name, defaults, nodes)),
            Err(errors) => Err(IconSetError::Parse { name, errors }),
        }
    }
}

/// Icon table keyed by name
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: BTreeMap<String, IconDefinition>,
}

impl IconSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The icons shipped with the crate
    pub fn builtin() -> Self {
        let mut set = Self::new();
        for (name, defaults, markup) in builtin_icons() {
            let icon = IconDefinition::from_fragment(name, defaults, markup)
                .expect("Built-in icon markup should be valid");
            set.insert(icon)
                .expect("Built-in icon names should be unique");
        }
        set
    }

    /// Load every `*.svg` file in a directory, named after the file stem
    pub fn load_dir(path: &Path, defaults: &IconDefaults) -> Result<Self, IconSetError> {
        let io_err = |source| IconSetError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut files = vec![];
        for entry in std::fs::read_dir(path).map_err(io_err)? {
            let file = entry.map_err(io_err)?.path();
            if file.extension().map_or(false, |ext| ext == "svg") {
                files.push(file);
            }
        }
        files.sort();

        let mut set = Self::new();
        for file in files {
            let name = match file.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            let source = std::fs::read_to_string(&file).map_err(|source| IconSetError::Io {
                path: file.clone(),
                source,
            })?;
            set.insert(IconDefinition::from_fragment(name, defaults.clone(), &source)?)?;
        }

        log::debug!("loaded {} icons from {}", set.len(), path.display());
        Ok(set)
    }

    /// Register an icon; names must be unique
    pub fn insert(&mut self, icon: IconDefinition) -> Result<(), IconSetError> {
        if self.icons.contains_key(&icon.name) {
            return Err(IconSetError::Duplicate { name: icon.name });
        }
        self.icons.insert(icon.name.clone(), icon);
        Ok(())
    }

    /// Parse and register an icon from SVG fragment markup
    pub fn insert_fragment(
        &mut self,
        name: impl Into<String>,
        defaults: IconDefaults,
        source: &str,
    ) -> Result<(), IconSetError> {
        let icon = IconDefinition::from_fragment(name, defaults, source)?;
        self.insert(icon)
    }

    /// Get an icon by name
    pub fn get(&self, name: &str) -> Result<&IconDefinition, IconSetError> {
        self.icons.get(name).ok_or_else(|| IconSetError::NotFound {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Icon names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconDefinition> {
        self.icons.values()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
