//! SPARQL text for compiled patterns.
//!
//! Namespaces for IRI compaction come from the [`RenderConfig`] passed in;
//! there is no global prefix table.

mod config;
mod emitter;


pub use config::RenderConfig;

use emitter::Emitter;

use crate::pattern::{PatternNode, TriplePattern};

/// Errors raised while rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A property constraint without a path reached the output.
    #[error("property of {subject} bound to {object} has no path")]
    UndefinedPredicate { subject: String, object: String },
}

/// Pattern lines only, for embedding in a larger query. No `PREFIX`
/// declarations are written, even when IRIs were compacted.
pub fn render_where(node: &PatternNode, config: &RenderConfig) -> Result<String, RenderError> {
    let mut emitter = Emitter::new(config);
    emitter.pattern(0, node)?;
    Ok(emitter.into_body())
}

/// `SELECT * WHERE { ... }`
pub fn render_select(node: &PatternNode, config: &RenderConfig) -> Result<String, RenderError> {
    let mut emitter = Emitter::new(config);
    emitter.keyword_line(0, "SELECT", " * WHERE {");
    emitter.pattern(1, node)?;
    emitter.line(0, "}");
    Ok(emitter.finish())
}

/// `CONSTRUCT { ... } WHERE { ... }`
pub fn render_construct(
    template: &[TriplePattern],
    where_pattern: &PatternNode,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let mut emitter = Emitter::new(config);

    emitter.keyword_line(0, "CONSTRUCT", " {");
    for triple in template {
        emitter.triple(1, triple)?;
    }
    emitter.line(0, "}");

    emitter.keyword_line(0, "WHERE", " {");
    emitter.pattern(1, where_pattern)?;
    emitter.line(0, "}");

    Ok(emitter.finish())
}
