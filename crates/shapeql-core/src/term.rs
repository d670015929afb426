//! RDF terms as they appear in graph patterns.

use std::fmt;

use serde::Serialize;

/// A term in subject, predicate, or object position.
///
/// Only the two kinds the compiler ever produces are modelled: IRIs from the
/// shape graph and variables allocated during compilation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Term {
    /// Absolute IRI, stored without angle brackets.
    Iri(String),
    /// Query variable, stored without the leading `?`.
    Variable(String),
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Variable(_) => None,
        }
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Variable(name) => Some(name),
            Term::Iri(_) => None,
        }
    }
}

/// N-Triples style: `<iri>` or `?name`.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Variable(name) => write!(f, "?{name}"),
        }
    }
}
