//! Entry points: compile a shape into WHERE patterns or a CONSTRUCT query.

use serde::Serialize;
use shapeql_core::{ShapeGraph, ShapeId, Term};

use crate::compile::{ConstructCollector, PatternBuilder};
use crate::naming::{
    FIXED_FOCUS_ROOT, FocusNode, VariableNamer, is_variable_fragment, is_variable_name,
};
use crate::pattern::{PatternNode, TriplePattern};
use crate::render::{RenderConfig, RenderError, render_construct};
use crate::{Error, Result};

/// Options for [`compile_where_patterns`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhereOptions {
    subject_variable: String,
    object_variable_prefix: Option<String>,
}

impl WhereOptions {
    /// Root focus is `?{subject_variable}`.
    pub fn new(subject_variable: impl Into<String>) -> Self {
        Self {
            subject_variable: subject_variable.into(),
            object_variable_prefix: None,
        }
    }

    /// Insert `prefix` after the root name of every object variable.
    pub fn object_variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.object_variable_prefix = Some(prefix.into());
        self
    }

    pub fn subject_variable(&self) -> &str {
        &self.subject_variable
    }

    /// Check that every variable these options produce is a valid SPARQL
    /// variable name.
    pub fn validate(&self) -> Result<()> {
        check_variables(&self.subject_variable, self.object_variable_prefix.as_deref())
    }
}

/// Root focus of a CONSTRUCT query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    /// A variable, named without the leading `?`.
    Variable(String),
    /// A fixed term; child variables derive from `resource`.
    Term(Term),
}

impl Focus {
    fn to_focus_node(&self) -> FocusNode {
        match self {
            Focus::Variable(name) => FocusNode::variable(name.as_str()),
            Focus::Term(term) => FocusNode::fixed(term.clone()),
        }
    }
}

/// Options for [`compile_construct_query`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructOptions {
    focus: Focus,
    object_variable_prefix: Option<String>,
}

impl ConstructOptions {
    pub fn subject_variable(name: impl Into<String>) -> Self {
        Self::with_focus(Focus::Variable(name.into()))
    }

    /// Focus on a fixed IRI.
    pub fn focus_term(iri: impl Into<String>) -> Self {
        Self::with_focus(Focus::Term(Term::iri(iri)))
    }

    pub fn with_focus(focus: Focus) -> Self {
        Self {
            focus,
            object_variable_prefix: None,
        }
    }

    pub fn object_variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.object_variable_prefix = Some(prefix.into());
        self
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// Check the root variable and object prefix. A fixed focus names its
    /// children after `resource`, so only the prefix is checked.
    pub fn validate(&self) -> Result<()> {
        let prefix = self.object_variable_prefix.as_deref();
        match &self.focus {
            Focus::Variable(name) => check_variables(name, prefix),
            Focus::Term(_) => check_variables(FIXED_FOCUS_ROOT, prefix),
        }
    }
}

fn check_variables(root: &str, object_prefix: Option<&str>) -> Result<()> {
    if !is_variable_name(root) {
        return Err(Error::InvalidVariable(root.to_owned()));
    }
    match object_prefix {
        Some(prefix) if !is_variable_fragment(prefix) => {
            Err(Error::InvalidVariable(format!("{root}_{prefix}")))
        }
        _ => Ok(()),
    }
}

/// A compiled CONSTRUCT query: the template and the pattern it is matched
/// against, sharing variables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConstructQuery {
    pub construct_triples: Vec<TriplePattern>,
    pub where_pattern: PatternNode,
}

impl ConstructQuery {
    pub fn render(&self, config: &RenderConfig) -> std::result::Result<String, RenderError> {
        render_construct(&self.construct_triples, &self.where_pattern, config)
    }
}

/// Compile `shape` into a WHERE pattern tree rooted at a variable.
pub fn compile_where_patterns(
    graph: &ShapeGraph,
    shape: ShapeId,
    options: &WhereOptions,
) -> PatternNode {
    let namer = VariableNamer::with_object_prefix(options.object_variable_prefix.as_deref());
    let focus = FocusNode::variable(options.subject_variable.as_str());
    PatternBuilder::new(graph, namer).build(shape, &focus)
}

/// Compile `shape` into a CONSTRUCT template plus its WHERE pattern.
pub fn compile_construct_query(
    graph: &ShapeGraph,
    shape: ShapeId,
    options: &ConstructOptions,
) -> ConstructQuery {
    let namer = VariableNamer::with_object_prefix(options.object_variable_prefix.as_deref());
    let focus = options.focus.to_focus_node();

    ConstructQuery {
        construct_triples: ConstructCollector::new(graph, namer.clone()).collect(shape, &focus),
        where_pattern: PatternBuilder::new(graph, namer).build(shape, &focus),
    }
}

/// Pick a named shape, or the first named shape of the document.
pub fn resolve_shape(graph: &ShapeGraph, name: Option<&str>) -> Result<ShapeId> {
    match name {
        Some(name) => graph
            .by_name(name)
            .ok_or_else(|| Error::UnknownShape(name.to_owned())),
        None => graph.first_named().ok_or(Error::NoNamedShapes),
    }
}
