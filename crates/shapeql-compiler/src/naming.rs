//! Variable naming: scoped, collision-free variables keyed by their path
//! from the root focus node.
//!
//! Every variable is its parent's name plus `_` and a local suffix:
//!
//! ```text
//! node                    root focus
//! node_0                  first active property of the root shape
//! node_0_1                second active property of the shape nested under node_0
//! node_0_targetClass      target class of the shape nested under node_0
//! ```
//!
//! Names are a pure function of (parent, suffix, object prefix), so the WHERE
//! and CONSTRUCT traversals agree on every variable without sharing state.

use std::fmt;

use shapeql_core::Term;

/// Suffix of the variable bound to a shape's declared target class, when the
/// shape declares more than one.
pub const TARGET_CLASS_SUFFIX: &str = "targetClass";

/// Root variable name used when the focus is a fixed term.
pub const FIXED_FOCUS_ROOT: &str = "resource";

/// Whether `name` is a SPARQL `VARNAME` (the part after `?`).
pub fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphanumeric() || first == '_' => chars.all(is_name_char),
        _ => false,
    }
}

/// Whether every character of `fragment` may follow the first character of a
/// `VARNAME`. Object prefixes are inserted after a `_`, so this is enough.
pub fn is_variable_fragment(fragment: &str) -> bool {
    fragment.chars().all(is_name_char)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric()
        || matches!(c, '_' | '\u{00B7}' | '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}

/// A variable bound to one position in the pattern tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FocusVariable {
    name: String,
    depth: u32,
}

impl FocusVariable {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            depth: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the bare root variable.
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Number of suffixes appended to the root name.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Derive a child variable.
    pub fn extend(&self, suffix: impl fmt::Display) -> Self {
        Self {
            name: format!("{}_{}", self.name, suffix),
            depth: self.depth + 1,
        }
    }

    pub fn to_term(&self) -> Term {
        Term::variable(self.name.as_str())
    }
}

impl fmt::Display for FocusVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}

/// Allocates object and target-class variables.
#[derive(Clone, Debug, Default)]
pub struct VariableNamer {
    object_prefix: Option<String>,
}

impl VariableNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `prefix` after the root name, once, before the first
    /// property index. An empty prefix means none.
    pub fn with_object_prefix(prefix: Option<&str>) -> Self {
        Self {
            object_prefix: prefix.filter(|p| !p.is_empty()).map(str::to_owned),
        }
    }

    pub fn object_prefix(&self) -> Option<&str> {
        self.object_prefix.as_deref()
    }

    /// Variable for the object of the `index`-th active property of the shape
    /// focused on `parent`.
    pub fn object(&self, parent: &FocusVariable, index: usize) -> FocusVariable {
        match &self.object_prefix {
            Some(prefix) if parent.is_root() => parent.extend(prefix).extend(index),
            _ => parent.extend(index),
        }
    }

    /// Variable holding the class of `parent` for multi-class targets.
    pub fn target_class(&self, parent: &FocusVariable) -> FocusVariable {
        parent.extend(TARGET_CLASS_SUFFIX)
    }
}

/// The current subject of a shape: the term written in subject position and
/// the variable child names derive from.
///
/// For a variable focus both are the same variable. For a fixed focus the
/// subject is the fixed term and children derive from [`FIXED_FOCUS_ROOT`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusNode {
    subject: Term,
    variable: FocusVariable,
}

impl FocusNode {
    pub fn variable(name: impl Into<String>) -> Self {
        Self::from(FocusVariable::root(name))
    }

    pub fn fixed(term: Term) -> Self {
        Self {
            subject: term,
            variable: FocusVariable::root(FIXED_FOCUS_ROOT),
        }
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn focus_variable(&self) -> &FocusVariable {
        &self.variable
    }
}

impl From<FocusVariable> for FocusNode {
    fn from(variable: FocusVariable) -> Self {
        Self {
            subject: variable.to_term(),
            variable,
        }
    }
}
