//! Analysis layer: the shape graph the compiler walks.
//!
//! Shapes live in an arena and refer to each other by [`ShapeId`], so one
//! sub-shape can be shared by several properties and a shape may (directly
//! or transitively) refer to itself. The graph is immutable once built by the
//! reader; the builder methods exist for the reader and for tests.

use indexmap::{IndexMap, IndexSet};

/// Index of a shape inside its [`ShapeGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u32);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node shape: target classes plus ordered property constraints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeNode {
    target_classes: IndexSet<String>,
    properties: Vec<PropertyConstraint>,
}

impl ShapeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target class IRI. Repeated classes are kept once.
    pub fn target_class(mut self, iri: impl Into<String>) -> Self {
        self.target_classes.insert(iri.into());
        self
    }

    pub fn property(mut self, property: PropertyConstraint) -> Self {
        self.properties.push(property);
        self
    }

    /// Declared target classes, in declaration order.
    pub fn target_classes(&self) -> &IndexSet<String> {
        &self.target_classes
    }

    /// All property constraints, deactivated ones included.
    pub fn properties(&self) -> &[PropertyConstraint] {
        &self.properties
    }

    /// Property constraints that take part in compilation.
    pub fn active_properties(&self) -> impl Iterator<Item = &PropertyConstraint> {
        self.properties.iter().filter(|p| !p.is_deactivated())
    }
}

/// A property constraint (`sh:property`) of a node shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyConstraint {
    path: Option<String>,
    deactivated: bool,
    node: Option<ShapeId>,
}

impl PropertyConstraint {
    /// Constraint on a single predicate path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Constraint without `sh:path`. Accepted as-is; the renderer rejects it.
    pub fn without_path() -> Self {
        Self::default()
    }

    pub fn deactivated(mut self, value: bool) -> Self {
        self.deactivated = value;
        self
    }

    /// Nested node constraint (`sh:node`).
    pub fn node(mut self, shape: ShapeId) -> Self {
        self.node = Some(shape);
        self
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn is_deactivated(&self) -> bool {
        self.deactivated
    }

    pub fn nested_shape(&self) -> Option<ShapeId> {
        self.node
    }
}

/// Arena of shapes with document-level names and prefixes.
#[derive(Clone, Debug, Default)]
pub struct ShapeGraph {
    shapes: Vec<ShapeNode>,
    names: IndexMap<String, ShapeId>,
    prefixes: IndexMap<String, String>,
}

impl ShapeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape and return its id.
    pub fn add(&mut self, shape: ShapeNode) -> ShapeId {
        let id = self.reserve();
        self.shapes[id.0 as usize] = shape;
        id
    }

    /// Allocate an id for a shape whose body is filled in later with
    /// [`ShapeGraph::define`]. Needed for shapes that refer to themselves.
    pub fn reserve(&mut self) -> ShapeId {
        let id = ShapeId(self.shapes.len() as u32);
        self.shapes.push(ShapeNode::default());
        id
    }

    /// Replace the body of a reserved shape.
    pub fn define(&mut self, id: ShapeId, shape: ShapeNode) {
        *self.ensure_shape_mut(id) = shape;
    }

    /// Bind a document-level name to a shape. A later binding wins.
    pub fn name(&mut self, name: impl Into<String>, id: ShapeId) {
        self.names.insert(name.into(), id);
    }

    pub fn declare_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeNode> {
        self.shapes.get(id.0 as usize)
    }

    pub(crate) fn get_mut(&mut self, id: ShapeId) -> Option<&mut ShapeNode> {
        self.shapes.get_mut(id.0 as usize)
    }

    /// Look up a shape by its document-level name.
    pub fn by_name(&self, name: &str) -> Option<ShapeId> {
        self.names.get(name).copied()
    }

    /// Named shapes in declaration order.
    pub fn named(&self) -> impl Iterator<Item = (&str, ShapeId)> {
        self.names.iter().map(|(name, &id)| (name.as_str(), id))
    }

    /// First named shape of the document.
    pub fn first_named(&self) -> Option<ShapeId> {
        self.names.first().map(|(_, &id)| id)
    }

    /// Prefixes declared by the document (built-ins excluded).
    pub fn prefixes(&self) -> &IndexMap<String, String> {
        &self.prefixes
    }

    /// Number of shapes, named and anonymous.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl std::ops::Index<ShapeId> for ShapeGraph {
    type Output = ShapeNode;

    fn index(&self, id: ShapeId) -> &ShapeNode {
        self.ensure_shape(id)
    }
}
