use crate::{PropertyConstraint, ShapeGraph, ShapeNode};

#[test]
fn active_properties_skip_deactivated() {
    let shape = ShapeNode::new()
        .property(PropertyConstraint::new("urn:a").deactivated(true))
        .property(PropertyConstraint::new("urn:b"))
        .property(PropertyConstraint::new("urn:c").deactivated(false));

    let paths: Vec<_> = shape.active_properties().map(|p| p.path()).collect();

    assert_eq!(shape.properties().len(), 3);
    assert_eq!(paths, vec![Some("urn:b"), Some("urn:c")]);
}

#[test]
fn target_classes_are_deduplicated_in_order() {
    let shape = ShapeNode::new()
        .target_class("urn:B")
        .target_class("urn:A")
        .target_class("urn:B");

    let classes: Vec<_> = shape.target_classes().iter().map(String::as_str).collect();
    assert_eq!(classes, vec!["urn:B", "urn:A"]);
}

#[test]
fn reserve_then_define_allows_self_reference() {
    let mut graph = ShapeGraph::new();
    let id = graph.reserve();
    graph.define(
        id,
        ShapeNode::new().property(PropertyConstraint::new("urn:knows").node(id)),
    );
    graph.name("Person", id);

    assert_eq!(graph.by_name("Person"), Some(id));
    assert_eq!(graph[id].properties()[0].nested_shape(), Some(id));
}

#[test]
fn first_named_follows_declaration_order() {
    let mut graph = ShapeGraph::new();
    let a = graph.add(ShapeNode::new());
    let b = graph.add(ShapeNode::new());
    graph.name("B", b);
    graph.name("A", a);

    assert_eq!(graph.first_named(), Some(b));
    let names: Vec<_> = graph.named().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn path_is_optional() {
    let property = PropertyConstraint::without_path();
    assert_eq!(property.path(), None);
    assert!(!property.is_deactivated());
    assert_eq!(property.nested_shape(), None);
}

#[test]
#[should_panic(expected = "ShapeGraph: shape #3 not found")]
fn index_with_foreign_id_panics() {
    let mut other = ShapeGraph::new();
    let foreign = (0..4).map(|_| other.add(ShapeNode::new())).last().unwrap();

    let mut graph = ShapeGraph::new();
    graph.add(ShapeNode::new());

    let _ = &graph[foreign];
}
