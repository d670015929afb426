//! Pattern tree: basic graph patterns and flat unions of them.
//!
//! A [`PatternNode`] is either a single [`Block`] or a [`PatternNode::Union`]
//! of blocks. Unions never nest: the combinators below rebuild trees bottom-up
//! and flatten as they go, so a renderer only ever sees one level of `UNION`.
//!
//! Prefixing a union distributes the prefix over its alternatives:
//!
//! ```text
//! prefix [t1]  to  { a } UNION { b c }   =>   { t1 a } UNION { t1 b c }
//! ```

use serde::Serialize;
use shapeql_core::Term;

/// `(subject, predicate, object)`. The predicate is `None` when the shape
/// declared no path; the renderer rejects such triples.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TriplePattern {
    pub subject: Term,
    pub predicate: Option<Term>,
    pub object: Term,
}

impl TriplePattern {
    pub fn new(subject: Term, predicate: Option<Term>, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// One unit of a basic graph pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatternElement {
    Triple(TriplePattern),
    /// `FILTER (?variable IN (values...))`
    FilterIn { variable: String, values: Vec<Term> },
}

impl PatternElement {
    pub fn as_triple(&self) -> Option<&TriplePattern> {
        match self {
            PatternElement::Triple(t) => Some(t),
            PatternElement::FilterIn { .. } => None,
        }
    }
}

impl From<TriplePattern> for PatternElement {
    fn from(triple: TriplePattern) -> Self {
        PatternElement::Triple(triple)
    }
}

/// Ordered sequence of pattern elements, all required together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Block(Vec<PatternElement>);

impl Block {
    pub fn new(elements: Vec<PatternElement>) -> Self {
        Self(elements)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[PatternElement] {
        &self.0
    }

    pub fn triples(&self) -> impl Iterator<Item = &TriplePattern> {
        self.0.iter().filter_map(PatternElement::as_triple)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `prefix` followed by this block's elements.
    pub fn prefixed(self, prefix: &[PatternElement]) -> Self {
        if prefix.is_empty() {
            return self;
        }
        let mut elements = Vec::with_capacity(prefix.len() + self.0.len());
        elements.extend_from_slice(prefix);
        elements.extend(self.0);
        Self(elements)
    }
}

impl From<Vec<PatternElement>> for Block {
    fn from(elements: Vec<PatternElement>) -> Self {
        Self(elements)
    }
}

/// A block, or a flat union of at least two blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "patterns", rename_all = "snake_case")]
pub enum PatternNode {
    Block(Block),
    Union(Vec<Block>),
}

impl Default for PatternNode {
    fn default() -> Self {
        PatternNode::Block(Block::empty())
    }
}

impl PatternNode {
    /// Combine alternatives, collapsing zero or one of them into a block.
    pub fn from_alternatives(mut alternatives: Vec<Block>) -> Self {
        match alternatives.len() {
            0 => PatternNode::default(),
            1 => PatternNode::Block(alternatives.remove(0)),
            _ => PatternNode::Union(alternatives),
        }
    }

    /// Alternatives of this node; a block is its own single alternative.
    pub fn alternatives(&self) -> &[Block] {
        match self {
            PatternNode::Block(block) => std::slice::from_ref(block),
            PatternNode::Union(blocks) => blocks,
        }
    }

    pub fn into_alternatives(self) -> Vec<Block> {
        match self {
            PatternNode::Block(block) => vec![block],
            PatternNode::Union(blocks) => blocks,
        }
    }

    pub fn is_union(&self) -> bool {
        matches!(self, PatternNode::Union(_))
    }

    /// Prepend `prefix` to every alternative.
    pub fn prefixed(self, prefix: &[PatternElement]) -> Self {
        match self {
            PatternNode::Block(block) => PatternNode::Block(block.prefixed(prefix)),
            PatternNode::Union(blocks) => PatternNode::Union(
                blocks
                    .into_iter()
                    .map(|block| block.prefixed(prefix))
                    .collect(),
            ),
        }
    }
}
