//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{ShapeGraph, ShapeId, ShapeNode};

impl ShapeGraph {
    pub(crate) fn ensure_shape(&self, id: ShapeId) -> &ShapeNode {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "ShapeGraph: shape {id} not found \
                 (ids are only valid for the graph that issued them)"
            )
        })
    }

    pub(crate) fn ensure_shape_mut(&mut self, id: ShapeId) -> &mut ShapeNode {
        let len = self.len();
        self.get_mut(id).unwrap_or_else(|| {
            panic!("ShapeGraph: shape {id} not found (graph holds {len} shapes)")
        })
    }
}
