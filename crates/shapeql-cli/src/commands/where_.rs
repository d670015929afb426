use shapeql_compiler::{Error, WhereOptions, compile_where_patterns, render_select, render_where};

use super::run_common::{fail, load_shape, render_config};
use super::shape_loader::ShapeSource;

pub struct WhereArgs {
    pub source: ShapeSource,
    pub shape: Option<String>,
    pub subject: String,
    pub object_prefix: Option<String>,
    pub select: bool,
    pub compact_iris: bool,
    pub color: bool,
}

pub fn run(args: WhereArgs) {
    let (graph, shape) = load_shape(&args.source, args.shape.as_deref());

    let options = where_options(args.subject, args.object_prefix).unwrap_or_else(|e| fail(e));
    let pattern = compile_where_patterns(&graph, shape, &options);

    let config = render_config(&graph, args.compact_iris, args.color);
    let rendered = if args.select {
        render_select(&pattern, &config)
    } else {
        render_where(&pattern, &config)
    };
    print!("{}", rendered.unwrap_or_else(|e| fail(e)));
}

/// Options for a variable focus, checked for valid variable names.
pub fn where_options(
    subject: String,
    object_prefix: Option<String>,
) -> Result<WhereOptions, Error> {
    let mut options = WhereOptions::new(subject);
    if let Some(prefix) = object_prefix {
        options = options.object_variable_prefix(prefix);
    }
    options.validate()?;
    Ok(options)
}
