//! CONSTRUCT template: the triples of the WHERE side, each once.

use indexmap::IndexSet;
use shapeql_core::{ShapeGraph, ShapeId};

use crate::naming::{FocusNode, VariableNamer};
use crate::pattern::{PatternElement, TriplePattern};

use super::elements::{property_triple, target_elements};

/// Walks a shape the same way as [`PatternBuilder`] and keeps every triple
/// at its first sighting. Filters are not part of the template.
///
/// [`PatternBuilder`]: super::PatternBuilder
pub struct ConstructCollector<'g> {
    graph: &'g ShapeGraph,
    namer: VariableNamer,
    path: Vec<ShapeId>,
    triples: IndexSet<TriplePattern>,
}

impl<'g> ConstructCollector<'g> {
    pub fn new(graph: &'g ShapeGraph, namer: VariableNamer) -> Self {
        Self {
            graph,
            namer,
            path: Vec::new(),
            triples: IndexSet::new(),
        }
    }

    pub fn collect(mut self, shape: ShapeId, focus: &FocusNode) -> Vec<TriplePattern> {
        self.shape(shape, focus);
        log::debug!(
            "collected {} CONSTRUCT triple(s) for shape {shape}",
            self.triples.len()
        );
        self.triples.into_iter().collect()
    }

    fn shape(&mut self, id: ShapeId, focus: &FocusNode) {
        let graph = self.graph;
        let shape = &graph[id];

        for element in target_elements(shape, focus, &self.namer) {
            if let PatternElement::Triple(triple) = element {
                self.triples.insert(triple);
            }
        }

        self.path.push(id);
        for (index, property) in shape.active_properties().enumerate() {
            let object = self.namer.object(focus.focus_variable(), index);
            self.triples.insert(property_triple(property, focus, &object));

            match property.nested_shape() {
                Some(nested) if !self.path.contains(&nested) => {
                    self.shape(nested, &FocusNode::from(object));
                }
                _ => {}
            }
        }
        self.path.pop();
    }
}
