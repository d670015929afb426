//! Test utilities: shape fixtures and rendering shortcuts.

use shapeql_core::{PropertyConstraint, ShapeGraph, ShapeId, ShapeNode, Term};

use crate::pattern::TriplePattern;
use crate::query::{ConstructOptions, WhereOptions, compile_construct_query, compile_where_patterns};
use crate::render::{RenderConfig, render_where};

pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
pub const SCHEMA: &str = "http://schema.org/";
pub const EX: &str = "http://example.org/";

/// Compare the rendered WHERE patterns of a JSON shape document.
#[macro_export]
macro_rules! assert_where {
    ($doc:literal, $subject:literal, $expected:literal) => {{
        let output = $crate::test_utils::where_text(indoc::indoc!($doc), $subject);
        assert_eq!(output, indoc::indoc!($expected));
    }};
}

/// Compare a rendered CONSTRUCT query (prefix declarations included).
#[macro_export]
macro_rules! assert_construct {
    ($doc:literal, $subject:literal, $expected:literal) => {{
        let output = $crate::test_utils::construct_text(indoc::indoc!($doc), $subject);
        assert_eq!(output, indoc::indoc!($expected));
    }};
}

pub fn foaf(local: &str) -> String {
    format!("{FOAF}{local}")
}

pub fn schema(local: &str) -> String {
    format!("{SCHEMA}{local}")
}

pub fn var(name: &str) -> Term {
    Term::variable(name)
}

pub fn triple(subject: Term, predicate: &str, object: Term) -> TriplePattern {
    TriplePattern::new(subject, Some(Term::iri(predicate)), object)
}

/// Document prefixes plus the built-in ones.
pub fn config_for(graph: &ShapeGraph) -> RenderConfig {
    RenderConfig::new()
        .prefixes(graph.prefixes().clone())
        .builtin_prefixes()
}

pub fn where_text(doc: &str, subject: &str) -> String {
    let graph = ShapeGraph::from_json(doc).unwrap();
    let shape = graph.first_named().unwrap();
    let node = compile_where_patterns(&graph, shape, &WhereOptions::new(subject));
    render_where(&node, &config_for(&graph)).unwrap()
}

pub fn construct_text(doc: &str, subject: &str) -> String {
    let graph = ShapeGraph::from_json(doc).unwrap();
    let shape = graph.first_named().unwrap();
    let query =
        compile_construct_query(&graph, shape, &ConstructOptions::subject_variable(subject));
    query.render(&config_for(&graph)).unwrap()
}

/// `{ foaf:name, foaf:lastName }`
pub fn person_graph() -> (ShapeGraph, ShapeId) {
    let mut graph = ShapeGraph::new();
    let person = graph.add(
        ShapeNode::new()
            .property(PropertyConstraint::new(foaf("name")))
            .property(PropertyConstraint::new(foaf("lastName"))),
    );
    graph.name("Person", person);
    graph.declare_prefix("foaf", FOAF);
    (graph, person)
}

/// ```text
/// foaf:knows
///   foaf:name
///   schema:address
///     schema:addressLocality
///     schema:addressCountry
///       schema:name
/// ```
pub fn deep_graph() -> (ShapeGraph, ShapeId) {
    let mut graph = ShapeGraph::new();
    let country = graph.add(ShapeNode::new().property(PropertyConstraint::new(schema("name"))));
    let address = graph.add(
        ShapeNode::new()
            .property(PropertyConstraint::new(schema("addressLocality")))
            .property(PropertyConstraint::new(schema("addressCountry")).node(country)),
    );
    let friend = graph.add(
        ShapeNode::new()
            .property(PropertyConstraint::new(foaf("name")))
            .property(PropertyConstraint::new(schema("address")).node(address)),
    );
    let root = graph.add(ShapeNode::new().property(PropertyConstraint::new(foaf("knows")).node(friend)));
    graph.name("Root", root);
    graph.declare_prefix("foaf", FOAF);
    graph.declare_prefix("schema", SCHEMA);
    (graph, root)
}
