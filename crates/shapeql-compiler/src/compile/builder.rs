//! WHERE-side pattern builder.
//!
//! For each active property the builder emits the property triple as its own
//! alternative, followed by every alternative of the nested shape prefixed
//! with that triple. Unions are flattened as they are combined, so each
//! alternative is one depth-first chain from the root focus:
//!
//! ```text
//! knows
//! knows  name
//! knows  address
//! knows  address  locality
//! ```
//!
//! Target-class elements are unconditional and go in front of every
//! alternative of their shape.

use shapeql_core::{ShapeGraph, ShapeId};

use crate::naming::{FocusNode, VariableNamer};
use crate::pattern::{Block, PatternElement, PatternNode};

use super::elements::{property_triple, target_elements};

/// Compiles one shape into a WHERE pattern tree.
pub struct PatternBuilder<'g> {
    graph: &'g ShapeGraph,
    namer: VariableNamer,
    /// Shapes on the current recursion path, outermost first.
    path: Vec<ShapeId>,
}

impl<'g> PatternBuilder<'g> {
    pub fn new(graph: &'g ShapeGraph, namer: VariableNamer) -> Self {
        Self {
            graph,
            namer,
            path: Vec::new(),
        }
    }

    /// Compile `shape` focused on `focus`.
    pub fn build(mut self, shape: ShapeId, focus: &FocusNode) -> PatternNode {
        let node = self.shape(shape, focus);
        log::debug!(
            "compiled WHERE pattern for shape {shape}: {} alternative(s)",
            node.alternatives().len()
        );
        node
    }

    fn shape(&mut self, id: ShapeId, focus: &FocusNode) -> PatternNode {
        let graph = self.graph;
        let shape = &graph[id];
        let targets = target_elements(shape, focus, &self.namer);

        self.path.push(id);
        let mut alternatives = Vec::new();
        for (index, property) in shape.active_properties().enumerate() {
            let object = self.namer.object(focus.focus_variable(), index);
            let triple = property_triple(property, focus, &object);
            log::trace!("{} property {index} -> {}", focus.focus_variable(), object);

            let head = [PatternElement::Triple(triple)];
            alternatives.push(Block::new(head.to_vec()));

            let Some(nested) = property.nested_shape() else {
                continue;
            };
            if self.path.contains(&nested) {
                log::debug!("shape {nested} already on the path at {object}, not expanding");
                continue;
            }

            let sub = self.shape(nested, &FocusNode::from(object));
            alternatives.extend(
                sub.into_alternatives()
                    .into_iter()
                    .filter(|block| !block.is_empty())
                    .map(|block| block.prefixed(&head)),
            );
        }
        self.path.pop();

        if alternatives.is_empty() {
            return PatternNode::Block(Block::new(targets));
        }
        PatternNode::from_alternatives(alternatives).prefixed(&targets)
    }
}
