use shapeql_compiler::{ConstructOptions, Error, Focus, compile_construct_query};
use shapeql_core::{ShapeGraph, Term, expand_term};

use super::run_common::{fail, load_shape, render_config};
use super::shape_loader::ShapeSource;

pub struct ConstructArgs {
    pub source: ShapeSource,
    pub shape: Option<String>,
    pub subject: String,
    /// Fixed focus IRI; takes precedence over `subject`.
    pub focus: Option<String>,
    pub object_prefix: Option<String>,
    pub compact_iris: bool,
    pub color: bool,
}

pub fn run(args: ConstructArgs) {
    let (graph, shape) = load_shape(&args.source, args.shape.as_deref());

    let options = construct_options(&graph, args.subject, args.focus, args.object_prefix)
        .unwrap_or_else(|e| fail(e));
    let query = compile_construct_query(&graph, shape, &options);

    let config = render_config(&graph, args.compact_iris, args.color);
    let rendered = query.render(&config).unwrap_or_else(|e| fail(e));
    print!("{rendered}");
}

/// Options for a variable or fixed-IRI focus. The focus is read like any
/// document term (`<iri>`, `prefix:local` against the document's prefixes,
/// or a bare absolute IRI).
pub fn construct_options(
    graph: &ShapeGraph,
    subject: String,
    focus: Option<String>,
    object_prefix: Option<String>,
) -> Result<ConstructOptions, Error> {
    let mut options = match focus {
        Some(focus) => {
            let iri = expand_term(&focus, graph.prefixes())?;
            ConstructOptions::with_focus(Focus::Term(Term::iri(iri)))
        }
        None => ConstructOptions::subject_variable(subject),
    };
    if let Some(prefix) = object_prefix {
        options = options.object_variable_prefix(prefix);
    }
    options.validate()?;
    Ok(options)
}
