use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use shapeql_core::{ReadError, ShapeGraph};

/// Where the shape document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeSource {
    File(PathBuf),
    Stdin,
    Inline(String),
    Missing,
}

impl ShapeSource {
    /// Inline text wins over a path; the path `-` is stdin.
    pub fn new(path: Option<PathBuf>, document: Option<String>) -> Self {
        match (document, path) {
            (Some(text), _) => ShapeSource::Inline(text),
            (None, Some(path)) if path.as_os_str() == "-" => ShapeSource::Stdin,
            (None, Some(path)) => ShapeSource::File(path),
            (None, None) => ShapeSource::Missing,
        }
    }

    pub fn read_text(&self) -> Result<String, LoadError> {
        match self {
            ShapeSource::Inline(text) => Ok(text.clone()),
            ShapeSource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(LoadError::Stdin)?;
                Ok(buf)
            }
            ShapeSource::File(path) => fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            }),
            ShapeSource::Missing => Err(LoadError::Missing),
        }
    }

    pub fn load(&self) -> Result<ShapeGraph, LoadError> {
        let text = self.read_text()?;
        if text.trim().is_empty() {
            return Err(LoadError::Empty);
        }
        let graph = ShapeGraph::from_json(&text)?;
        log::debug!("loaded {} shape(s) from {}", graph.len(), self);
        Ok(graph)
    }
}

impl std::fmt::Display for ShapeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeSource::File(path) => write!(f, "'{}'", path.display()),
            ShapeSource::Stdin => f.write_str("stdin"),
            ShapeSource::Inline(_) => f.write_str("inline document"),
            ShapeSource::Missing => f.write_str("nowhere"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("shape document is required: use a path, - for stdin, or -d/--document")]
    Missing,

    #[error("shape document cannot be empty")]
    Empty,

    #[error("failed to read '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error(transparent)]
    Read(#[from] ReadError),
}
