//! Shape-to-pattern compilation.
//!
//! Both traversals walk the shape graph depth-first in property declaration
//! order and allocate variables through the same [`VariableNamer`], so the
//! WHERE pattern and the CONSTRUCT template agree on every variable.
//!
//! # Module Organization
//!
//! - `elements`: per-shape elements shared by both traversals (target class, property triple)
//! - `builder`: WHERE side, a flat union of depth-first chains
//! - `construct`: CONSTRUCT side, a duplicate-free triple list
//!
//! [`VariableNamer`]: crate::naming::VariableNamer

mod builder;
mod construct;
mod elements;


pub use builder::PatternBuilder;
pub use construct::ConstructCollector;
