#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for shapeql.
//!
//! - [`Term`]: IRIs and variables as they appear in graph patterns
//! - [`ShapeGraph`]: immutable, id-indexed arena of node shapes
//! - [`reader`]: JSON shape documents into a `ShapeGraph`
//! - [`vocab`]: well-known namespaces and IRIs
//! - [`Colors`]: terminal colors for rendered queries

mod colors;
mod invariants;
pub mod reader;
mod shape;
mod term;
pub mod vocab;

pub use colors::Colors;
pub use reader::{ReadError, expand_term, parse_shape_document};
pub use shape::{PropertyConstraint, ShapeGraph, ShapeId, ShapeNode};
pub use term::Term;

#[cfg(test)]
mod shape_tests;
