use shapeql_core::Term;

use crate::pattern::{Block, PatternElement, PatternNode, TriplePattern};

fn t(s: &str, o: &str) -> PatternElement {
    TriplePattern::new(Term::variable(s), Some(Term::iri("urn:p")), Term::variable(o)).into()
}

#[test]
fn zero_alternatives_is_empty_block() {
    let node = PatternNode::from_alternatives(vec![]);
    assert_eq!(node, PatternNode::Block(Block::empty()));
    assert_eq!(node.alternatives().len(), 1);
    assert!(node.alternatives()[0].is_empty());
}

#[test]
fn one_alternative_collapses() {
    let block = Block::new(vec![t("a", "b")]);
    let node = PatternNode::from_alternatives(vec![block.clone()]);

    assert!(!node.is_union());
    assert_eq!(node, PatternNode::Block(block));
}

#[test]
fn several_alternatives_form_union() {
    let node = PatternNode::from_alternatives(vec![
        Block::new(vec![t("a", "b")]),
        Block::new(vec![t("a", "c")]),
    ]);

    assert!(node.is_union());
    assert_eq!(node.alternatives().len(), 2);
}

#[test]
fn prefix_goes_first_in_block() {
    let block = Block::new(vec![t("b", "c")]).prefixed(&[t("a", "b")]);
    assert_eq!(block.elements(), &[t("a", "b"), t("b", "c")]);
}

#[test]
fn prefixing_union_distributes_over_alternatives() {
    let node = PatternNode::Union(vec![
        Block::new(vec![t("b", "c")]),
        Block::new(vec![t("b", "d"), t("d", "e")]),
    ])
    .prefixed(&[t("a", "b")]);

    assert_eq!(
        node.into_alternatives(),
        vec![
            Block::new(vec![t("a", "b"), t("b", "c")]),
            Block::new(vec![t("a", "b"), t("b", "d"), t("d", "e")]),
        ]
    );
}

#[test]
fn empty_prefix_is_identity() {
    let node = PatternNode::Block(Block::new(vec![t("a", "b")]));
    assert_eq!(node.clone().prefixed(&[]), node);
}

#[test]
fn triples_skip_filters() {
    let block = Block::new(vec![
        t("a", "b"),
        PatternElement::FilterIn {
            variable: "b".to_owned(),
            values: vec![Term::iri("urn:x")],
        },
    ]);

    assert_eq!(block.len(), 2);
    assert_eq!(block.triples().count(), 1);
}

#[test]
fn serializes_as_tagged_tree() {
    let node = PatternNode::Block(Block::new(vec![PatternElement::FilterIn {
        variable: "v".to_owned(),
        values: vec![Term::iri("urn:x")],
    }]));

    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "block",
            "patterns": [
                {
                    "type": "filter_in",
                    "variable": "v",
                    "values": [ { "kind": "iri", "value": "urn:x" } ]
                }
            ]
        })
    );
}
