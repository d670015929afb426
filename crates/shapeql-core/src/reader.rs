//! Constraint-graph reader: shape documents into a [`ShapeGraph`].
//!
//! Two layers, as with any external format:
//! - **Deserialization layer**: `Raw*` types, a 1:1 mapping of the JSON document
//! - **Lowering**: prefix expansion, shape reference resolution, id assignment
//!
//! ```json
//! {
//!   "prefixes": { "foaf": "http://xmlns.com/foaf/0.1/" },
//!   "shapes": {
//!     "Person": {
//!       "targetClass": "foaf:Person",
//!       "property": [
//!         { "path": "foaf:name" },
//!         { "path": "foaf:knows", "node": "Person" }
//!       ]
//!     }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use crate::shape::{PropertyConstraint, ShapeGraph, ShapeId, ShapeNode};
use crate::vocab::BUILTIN_PREFIXES;

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw shape document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub prefixes: IndexMap<String, String>,
    pub shapes: IndexMap<String, RawShape>,
}

/// Raw node shape. Keys outside the supported vocabulary are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawShape {
    #[serde(rename = "targetClass")]
    pub target_class: Option<RawTargets>,
    #[serde(default)]
    pub property: Vec<RawProperty>,
}

/// `targetClass` is a single term or a list of terms.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTargets {
    One(String),
    Many(Vec<String>),
}

impl RawTargets {
    fn iter(&self) -> impl Iterator<Item = &str> {
        let terms: &[String] = match self {
            RawTargets::One(term) => std::slice::from_ref(term),
            RawTargets::Many(terms) => terms,
        };
        terms.iter().map(String::as_str)
    }
}

/// Raw property constraint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProperty {
    pub path: Option<String>,
    #[serde(default)]
    pub deactivated: bool,
    pub node: Option<RawNodeRef>,
}

/// `node` names another shape of the document or nests one inline.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNodeRef {
    Named(String),
    Inline(Box<RawShape>),
}

/// Parse a shape document without lowering it.
pub fn parse_shape_document(json: &str) -> Result<RawDocument, serde_json::Error> {
    serde_json::from_str(json)
}

// ============================================================================
// Lowering
// ============================================================================

/// Errors raised while reading a shape document.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("invalid shape document: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("shape document declares no shapes")]
    NoShapes,

    #[error("shape name cannot be empty")]
    EmptyShapeName,

    #[error("prefix '{0}' has an empty namespace")]
    EmptyNamespace(String),

    #[error("unknown prefix '{prefix}' in '{term}'")]
    UnknownPrefix { prefix: String, term: String },

    #[error("invalid IRI '{0}'")]
    InvalidIri(String),

    #[error("shape '{shape}' refers to unknown shape '{reference}'")]
    UnknownShape { shape: String, reference: String },
}

impl ShapeGraph {
    /// Read a JSON shape document.
    pub fn from_json(json: &str) -> Result<Self, ReadError> {
        let document = parse_shape_document(json)?;
        Self::from_document(&document)
    }

    /// Lower an already parsed document.
    pub fn from_document(document: &RawDocument) -> Result<Self, ReadError> {
        Lowering::new(document)?.run()
    }
}

struct Lowering<'d> {
    document: &'d RawDocument,
    graph: ShapeGraph,
    /// Named shape currently being lowered, for error context.
    current: &'d str,
}

impl<'d> Lowering<'d> {
    fn new(document: &'d RawDocument) -> Result<Self, ReadError> {
        if document.shapes.is_empty() {
            return Err(ReadError::NoShapes);
        }

        let mut graph = ShapeGraph::new();
        for (prefix, namespace) in &document.prefixes {
            if namespace.is_empty() {
                return Err(ReadError::EmptyNamespace(prefix.clone()));
            }
            graph.declare_prefix(prefix.as_str(), namespace.as_str());
        }

        Ok(Self {
            document,
            graph,
            current: "",
        })
    }

    fn run(mut self) -> Result<ShapeGraph, ReadError> {
        let document = self.document;

        // Ids first, so shapes can refer to any named shape, themselves included.
        for name in document.shapes.keys() {
            if name.trim().is_empty() {
                return Err(ReadError::EmptyShapeName);
            }
            let id = self.graph.reserve();
            self.graph.name(name.as_str(), id);
        }

        for (name, raw) in &document.shapes {
            self.current = name;
            let id = self.named_id(name)?;
            let shape = self.lower_shape(raw)?;
            self.graph.define(id, shape);
        }

        log::debug!(
            "read {} shapes ({} named)",
            self.graph.len(),
            document.shapes.len()
        );
        Ok(self.graph)
    }

    fn named_id(&self, name: &str) -> Result<ShapeId, ReadError> {
        self.graph
            .by_name(name)
            .ok_or_else(|| ReadError::UnknownShape {
                shape: self.current.to_owned(),
                reference: name.to_owned(),
            })
    }

    fn lower_shape(&mut self, raw: &RawShape) -> Result<ShapeNode, ReadError> {
        let mut shape = ShapeNode::new();

        if let Some(targets) = &raw.target_class {
            for term in targets.iter() {
                shape = shape.target_class(self.expand(term)?);
            }
        }

        for property in &raw.property {
            shape = shape.property(self.lower_property(property)?);
        }

        Ok(shape)
    }

    fn lower_property(&mut self, raw: &RawProperty) -> Result<PropertyConstraint, ReadError> {
        let mut property = match &raw.path {
            Some(path) => PropertyConstraint::new(self.expand(path)?),
            None => PropertyConstraint::without_path(),
        };
        property = property.deactivated(raw.deactivated);

        let nested = match &raw.node {
            None => None,
            Some(RawNodeRef::Named(name)) => Some(self.named_id(name)?),
            Some(RawNodeRef::Inline(inline)) => {
                let shape = self.lower_shape(inline)?;
                Some(self.graph.add(shape))
            }
        };
        if let Some(id) = nested {
            property = property.node(id);
        }

        Ok(property)
    }

    fn expand(&self, term: &str) -> Result<String, ReadError> {
        expand_term(term, self.graph.prefixes())
    }
}

/// Expand `prefix:local`, `<iri>`, or a bare absolute IRI to a full IRI.
///
/// Declared prefixes shadow the built-in ones.
pub fn expand_term(term: &str, prefixes: &IndexMap<String, String>) -> Result<String, ReadError> {
    let term = term.trim();
    let invalid = || ReadError::InvalidIri(term.to_owned());

    if term.is_empty() || term.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    if let Some(inner) = term.strip_prefix('<') {
        let iri = inner.strip_suffix('>').ok_or_else(invalid)?;
        if iri.is_empty() || !iri.contains(':') || has_excluded_char(iri) {
            return Err(invalid());
        }
        return Ok(iri.to_owned());
    }
    if has_excluded_char(term) {
        return Err(invalid());
    }

    let (prefix, local) = term.split_once(':').ok_or_else(invalid)?;

    let namespace = prefixes.get(prefix).map(String::as_str).or_else(|| {
        BUILTIN_PREFIXES
            .iter()
            .find(|(name, _)| *name == prefix)
            .map(|(_, ns)| *ns)
    });
    if let Some(namespace) = namespace {
        return Ok(format!("{namespace}{local}"));
    }

    // Scheme-qualified IRIs written without brackets.
    if local.starts_with("//") || prefix == "urn" {
        return Ok(term.to_owned());
    }

    Err(ReadError::UnknownPrefix {
        prefix: prefix.to_owned(),
        term: term.to_owned(),
    })
}

/// Characters an IRIREF may not contain.
fn has_excluded_char(iri: &str) -> bool {
    iri.chars()
        .any(|c| matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\'))
}
