use shapeql_core::Term;

use crate::naming::{
    FIXED_FOCUS_ROOT, FocusNode, FocusVariable, VariableNamer, is_variable_fragment,
    is_variable_name,
};

#[test]
fn child_names_append_suffix() {
    let root = FocusVariable::root("node");
    let child = root.extend(0);
    let grandchild = child.extend(3);

    assert_eq!(root.name(), "node");
    assert_eq!(child.name(), "node_0");
    assert_eq!(grandchild.name(), "node_0_3");
    assert_eq!(grandchild.depth(), 2);
    assert!(root.is_root());
    assert!(!child.is_root());
    assert_eq!(grandchild.to_string(), "?node_0_3");
}

#[test]
fn namer_without_prefix() {
    let namer = VariableNamer::new();
    let root = FocusVariable::root("node");

    let object = namer.object(&root, 1);
    assert_eq!(object.name(), "node_1");
    assert_eq!(namer.object(&object, 0).name(), "node_1_0");
    assert_eq!(namer.target_class(&root).name(), "node_targetClass");
}

#[test]
fn object_prefix_inserted_after_root_only() {
    let namer = VariableNamer::with_object_prefix(Some("obj"));
    let root = FocusVariable::root("node");

    let object = namer.object(&root, 0);
    let nested = namer.object(&object, 1);
    assert_eq!(object.name(), "node_obj_0");
    assert_eq!(nested.name(), "node_obj_0_1");
}

#[test]
fn target_class_is_not_prefixed() {
    let namer = VariableNamer::with_object_prefix(Some("obj"));
    let root = FocusVariable::root("node");

    assert_eq!(namer.target_class(&root).name(), "node_targetClass");
    let object = namer.object(&root, 0);
    assert_eq!(namer.target_class(&object).name(), "node_obj_0_targetClass");
}

#[test]
fn empty_object_prefix_means_none() {
    let namer = VariableNamer::with_object_prefix(Some(""));
    assert_eq!(namer.object_prefix(), None);
    assert_eq!(namer.object(&FocusVariable::root("n"), 2).name(), "n_2");
}

#[test]
fn naming_is_pure() {
    let namer = VariableNamer::with_object_prefix(Some("o"));
    let root = FocusVariable::root("x");
    assert_eq!(namer.object(&root, 4), namer.object(&root, 4));
}

#[test]
fn variable_focus() {
    let focus = FocusNode::variable("person");
    assert_eq!(focus.subject(), &Term::variable("person"));
    assert_eq!(focus.focus_variable().name(), "person");
}

#[test]
fn fixed_focus_derives_from_resource() {
    let john = Term::iri("http://example.org/John");
    let focus = FocusNode::fixed(john.clone());

    assert_eq!(focus.subject(), &john);
    assert_eq!(focus.focus_variable().name(), FIXED_FOCUS_ROOT);
    assert_eq!(
        VariableNamer::new().object(focus.focus_variable(), 0).name(),
        "resource_0"
    );
}

#[test]
fn sparql_variable_names() {
    for name in ["node", "_x", "0", "person_0_targetClass", "n\u{00B7}1", "é"] {
        assert!(is_variable_name(name), "{name:?} should be accepted");
    }
    for name in ["", "?node", "a b", "a-b", "x.y", "\u{00B7}x"] {
        assert!(!is_variable_name(name), "{name:?} should be rejected");
    }
}

#[test]
fn object_prefix_fragments() {
    assert!(is_variable_fragment("obj"));
    assert!(is_variable_fragment("\u{00B7}obj"));
    assert!(!is_variable_fragment("o-bj"));
}
