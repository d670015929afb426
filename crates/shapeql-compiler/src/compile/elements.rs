//! Elements a single shape contributes for a given focus.

use shapeql_core::vocab::RDF_TYPE;
use shapeql_core::{PropertyConstraint, ShapeNode, Term};

use crate::naming::{FocusNode, FocusVariable, VariableNamer};
use crate::pattern::{PatternElement, TriplePattern};

/// Unconditional target-class elements of `shape` at `focus`.
///
/// One class is a plain `rdf:type` triple. Several classes bind the type to
/// `?focus_targetClass` and restrict it with a `FILTER IN`.
pub(super) fn target_elements(
    shape: &ShapeNode,
    focus: &FocusNode,
    namer: &VariableNamer,
) -> Vec<PatternElement> {
    let classes = shape.target_classes();
    let rdf_type = Some(Term::iri(RDF_TYPE));

    match classes.len() {
        0 => Vec::new(),
        1 => classes
            .iter()
            .map(|class| {
                TriplePattern::new(focus.subject().clone(), rdf_type.clone(), Term::iri(class))
                    .into()
            })
            .collect(),
        _ => {
            let class_var = namer.target_class(focus.focus_variable());
            let triple = TriplePattern::new(focus.subject().clone(), rdf_type, class_var.to_term());
            vec![
                triple.into(),
                PatternElement::FilterIn {
                    variable: class_var.name().to_owned(),
                    values: classes.iter().map(Term::iri).collect(),
                },
            ]
        }
    }
}

/// `(focus, path, object)` for one active property. A missing path stays
/// undefined here and is rejected when rendered.
pub(super) fn property_triple(
    property: &PropertyConstraint,
    focus: &FocusNode,
    object: &FocusVariable,
) -> TriplePattern {
    TriplePattern::new(
        focus.subject().clone(),
        property.path().map(Term::iri),
        object.to_term(),
    )
}
