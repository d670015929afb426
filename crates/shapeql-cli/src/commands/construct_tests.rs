use shapeql_compiler::{ConstructOptions, Error, Focus, WhereOptions};
use shapeql_core::{ReadError, ShapeGraph, Term};

use super::construct::construct_options;
use super::where_::where_options;

fn graph() -> ShapeGraph {
    ShapeGraph::from_json(
        r#"{
            "prefixes": { "ex": "http://example.org/" },
            "shapes": { "Person": { "property": [ { "path": "<http://xmlns.com/foaf/0.1/name>" } ] } }
        }"#,
    )
    .unwrap()
}

fn options(subject: &str, focus: Option<&str>) -> Result<ConstructOptions, Error> {
    construct_options(&graph(), subject.to_owned(), focus.map(str::to_owned), None)
}

#[test]
fn subject_variable_without_focus() {
    let options = options("person", None).unwrap();
    assert_eq!(options.focus(), &Focus::Variable("person".to_owned()));
}

#[test]
fn focus_takes_precedence() {
    let options = options("node", Some("http://example.org/John")).unwrap();
    assert_eq!(
        options.focus(),
        &Focus::Term(Term::iri("http://example.org/John"))
    );
}

#[test]
fn bracketed_focus_is_unwrapped() {
    let options = options("node", Some("<urn:x:John>")).unwrap();
    assert_eq!(options.focus(), &Focus::Term(Term::iri("urn:x:John")));
}

#[test]
fn prefixed_focus_uses_document_prefixes() {
    let options = options("node", Some("ex:John")).unwrap();
    assert_eq!(
        options.focus(),
        &Focus::Term(Term::iri("http://example.org/John"))
    );
}

#[test]
fn malformed_focus_is_rejected() {
    for focus in ["http://example.org/a b>c", "http://example.org/a>c", "<urn:x", "John"] {
        let err = options("node", Some(focus)).unwrap_err();
        assert!(
            matches!(err, Error::Read(ReadError::InvalidIri(_))),
            "expected rejection for {focus:?}, got {err:?}"
        );
    }
}

#[test]
fn focus_with_unknown_prefix_is_rejected() {
    let err = options("node", Some("nope:John")).unwrap_err();
    assert!(matches!(err, Error::Read(ReadError::UnknownPrefix { .. })));
}

#[test]
fn invalid_subject_variable_is_rejected() {
    for subject in ["", "a b", "-x", "x?"] {
        let err = options(subject, None).unwrap_err();
        assert!(matches!(&err, Error::InvalidVariable(name) if name == subject));
    }
}

#[test]
fn invalid_object_prefix_is_rejected() {
    let err = construct_options(&graph(), "node".to_owned(), None, Some("o-bj".to_owned()))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidVariable(_)));
    assert_eq!(
        err.to_string(),
        "'node_o-bj' is not a valid SPARQL variable name"
    );
}

#[test]
fn where_options_check_subject() {
    assert_eq!(
        where_options("person".to_owned(), Some("obj".to_owned())).unwrap(),
        WhereOptions::new("person").object_variable_prefix("obj")
    );
    assert!(matches!(
        where_options(String::new(), None),
        Err(Error::InvalidVariable(_))
    ));
}
