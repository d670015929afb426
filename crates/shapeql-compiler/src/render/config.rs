//! Configuration for SPARQL rendering.

use indexmap::IndexMap;
use shapeql_core::Colors;
use shapeql_core::vocab::BUILTIN_PREFIXES;

/// Configuration for SPARQL rendering.
///
/// Prefixes are only used for compaction: an IRI under a registered namespace
/// is written as `prefix:local`, and standalone queries declare the prefixes
/// they actually used.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Prefix name -> namespace IRI
    pub(crate) prefixes: IndexMap<String, String>,
    /// Spaces per nesting level
    pub(crate) indent: usize,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            prefixes: IndexMap::new(),
            indent: 2,
            colors: Colors::OFF,
        }
    }
}

impl RenderConfig {
    /// Create a new RenderConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prefix for compaction. A later registration of the same
    /// name wins.
    pub fn prefix(mut self, name: impl Into<String>, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        if !namespace.is_empty() {
            self.prefixes.insert(name.into(), namespace);
        }
        self
    }

    /// Register several prefixes, in iteration order.
    pub fn prefixes<I, K, V>(self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        prefixes
            .into_iter()
            .fold(self, |config, (name, ns)| config.prefix(name, ns))
    }

    /// Register `rdf`, `rdfs`, `xsd` and `sh` unless already present.
    pub fn builtin_prefixes(mut self) -> Self {
        for (name, namespace) in BUILTIN_PREFIXES {
            if !self.prefixes.contains_key(name) {
                self.prefixes.insert(name.to_owned(), namespace.to_owned());
            }
        }
        self
    }

    /// Set the number of spaces per nesting level.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn registered_prefixes(&self) -> &IndexMap<String, String> {
        &self.prefixes
    }
}
