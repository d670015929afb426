//! Core emitter struct: pattern trees into SPARQL text.

use std::fmt::Write as _;

use indexmap::IndexSet;
use shapeql_core::{Colors, Term};

use crate::pattern::{Block, PatternElement, PatternNode, TriplePattern};

use super::{RenderConfig, RenderError};

pub(super) struct Emitter<'c> {
    config: &'c RenderConfig,
    /// Indices into `config.prefixes` used by compacted IRIs.
    used_prefixes: IndexSet<usize>,
    /// Output buffer
    output: String,
}

impl<'c> Emitter<'c> {
    pub(super) fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            used_prefixes: IndexSet::new(),
            output: String::new(),
        }
    }

    fn c(&self) -> Colors {
        self.config.colors
    }

    /// Body only, without `PREFIX` declarations.
    pub(super) fn into_body(self) -> String {
        self.output
    }

    /// `PREFIX` declarations for every prefix used, then the body.
    pub(super) fn finish(self) -> String {
        if self.used_prefixes.is_empty() {
            return self.output;
        }

        let c = self.c();
        let mut used: Vec<_> = self.used_prefixes.iter().copied().collect();
        used.sort_unstable();

        let mut header = String::new();
        for index in used {
            if let Some((name, namespace)) = self.config.prefixes.get_index(index) {
                let _ = writeln!(
                    header,
                    "{}PREFIX{} {name}: {}<{namespace}>{}",
                    c.keyword, c.reset, c.dim, c.reset
                );
            }
        }
        header.push('\n');
        header.push_str(&self.output);
        header
    }

    pub(super) fn line(&mut self, depth: usize, text: &str) {
        self.indent(depth);
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub(super) fn keyword_line(&mut self, depth: usize, keyword: &str, rest: &str) {
        let c = self.c();
        self.indent(depth);
        let _ = writeln!(self.output, "{}{keyword}{}{rest}", c.keyword, c.reset);
    }

    fn indent(&mut self, depth: usize) {
        let width = depth * self.config.indent;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    pub(super) fn pattern(&mut self, depth: usize, node: &PatternNode) -> Result<(), RenderError> {
        match node {
            PatternNode::Block(block) => self.block(depth, block),
            PatternNode::Union(blocks) => {
                for (i, block) in blocks.iter().enumerate() {
                    if i > 0 {
                        self.keyword_line(depth, "UNION", "");
                    }
                    self.line(depth, "{");
                    self.block(depth + 1, block)?;
                    self.line(depth, "}");
                }
                Ok(())
            }
        }
    }

    fn block(&mut self, depth: usize, block: &Block) -> Result<(), RenderError> {
        for element in block.elements() {
            match element {
                PatternElement::Triple(triple) => self.triple(depth, triple)?,
                PatternElement::FilterIn { variable, values } => {
                    self.filter_in(depth, variable, values)
                }
            }
        }
        Ok(())
    }

    pub(super) fn triple(&mut self, depth: usize, triple: &TriplePattern) -> Result<(), RenderError> {
        let predicate = triple
            .predicate
            .as_ref()
            .ok_or_else(|| RenderError::UndefinedPredicate {
                subject: triple.subject.to_string(),
                object: triple.object.to_string(),
            })?;

        let subject = self.term(&triple.subject);
        let predicate = self.term(predicate);
        let object = self.term(&triple.object);
        self.line(depth, &format!("{subject} {predicate} {object} ."));
        Ok(())
    }

    fn filter_in(&mut self, depth: usize, variable: &str, values: &[Term]) {
        let c = self.c();
        let values: Vec<String> = values.iter().map(|v| self.term(v)).collect();
        let rest = format!(
            " ({}?{variable}{} {}IN{} ({}))",
            c.variable,
            c.reset,
            c.keyword,
            c.reset,
            values.join(", ")
        );
        self.keyword_line(depth, "FILTER", &rest);
    }

    fn term(&mut self, term: &Term) -> String {
        let c = self.c();
        match term {
            Term::Variable(name) => format!("{}?{name}{}", c.variable, c.reset),
            Term::Iri(iri) => match self.compact(iri) {
                Some(name) => format!("{}{name}{}", c.dim, c.reset),
                None => format!("{}<{iri}>{}", c.dim, c.reset),
            },
        }
    }

    /// Longest registered namespace whose remainder is a valid local name.
    fn compact(&mut self, iri: &str) -> Option<String> {
        let config = self.config;
        let mut best: Option<(usize, &str, &str)> = None;
        for (index, (name, namespace)) in config.prefixes.iter().enumerate() {
            let Some(local) = iri.strip_prefix(namespace.as_str()) else {
                continue;
            };
            if !is_local_name(local) {
                continue;
            }
            if best.is_none_or(|(_, _, ns)| namespace.len() > ns.len()) {
                best = Some((index, name.as_str(), namespace.as_str()));
            }
        }

        let (index, name, namespace) = best?;
        self.used_prefixes.insert(index);
        Some(format!("{name}:{}", &iri[namespace.len()..]))
    }
}

/// Conservative subset of SPARQL `PN_LOCAL`.
fn is_local_name(local: &str) -> bool {
    let valid_char = |ch: char| ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.');
    if !local.chars().all(valid_char) {
        return false;
    }
    !(local.starts_with(['-', '.']) || local.ends_with('.'))
}
