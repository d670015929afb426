//! shapeql compiler: node shapes into SPARQL graph patterns.
//!
//! - `naming` - scoped variable names derived from the root focus
//! - `pattern` - blocks and flat unions of triple patterns
//! - `compile` - WHERE pattern builder and CONSTRUCT deduplicator
//! - `render` - SPARQL text
//! - `query` - entry points and options

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod naming;
pub mod pattern;
pub mod query;
pub mod render;

#[cfg(test)]
mod naming_tests;
#[cfg(test)]
mod pattern_tests;
#[cfg(test)]
pub mod test_utils;

pub use naming::{FocusNode, FocusVariable, VariableNamer, is_variable_name};
pub use pattern::{Block, PatternElement, PatternNode, TriplePattern};
pub use query::{
    ConstructOptions, ConstructQuery, Focus, WhereOptions, compile_construct_query,
    compile_where_patterns, resolve_shape,
};
pub use render::{RenderConfig, RenderError, render_construct, render_select, render_where};

use shapeql_core::ReadError;

/// Errors surfaced by the query facade.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("no shape named '{0}'")]
    UnknownShape(String),

    #[error("shape graph has no named shapes")]
    NoNamedShapes,

    #[error("'{0}' is not a valid SPARQL variable name")]
    InvalidVariable(String),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;
