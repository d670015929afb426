//! Shared logic for the where, construct and dump commands.

use shapeql_compiler::{RenderConfig, resolve_shape};
use shapeql_core::{ShapeGraph, ShapeId};

use super::shape_loader::ShapeSource;

/// Print `error: {message}` and exit with status 1.
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1)
}

/// Load the document and pick the shape to compile.
pub fn load_shape(source: &ShapeSource, shape: Option<&str>) -> (ShapeGraph, ShapeId) {
    let graph = source.load().unwrap_or_else(|e| fail(e));
    let id = resolve_shape(&graph, shape).unwrap_or_else(|e| fail(e));
    (graph, id)
}

/// Render configuration for `graph`. Compaction uses the document's prefixes
/// plus the built-in ones.
pub fn render_config(graph: &ShapeGraph, compact_iris: bool, color: bool) -> RenderConfig {
    let config = RenderConfig::new().colored(color);
    if !compact_iris {
        return config;
    }
    config
        .prefixes(graph.prefixes().clone())
        .builtin_prefixes()
}
