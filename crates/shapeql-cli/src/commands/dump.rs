use shapeql_compiler::{compile_construct_query, compile_where_patterns};

use super::construct::construct_options;
use super::run_common::{fail, load_shape};
use super::shape_loader::ShapeSource;
use super::where_::where_options;

pub struct DumpArgs {
    pub source: ShapeSource,
    pub shape: Option<String>,
    pub subject: String,
    pub focus: Option<String>,
    pub object_prefix: Option<String>,
    pub construct: bool,
}

pub fn run(args: DumpArgs) {
    let (graph, shape) = load_shape(&args.source, args.shape.as_deref());

    let json = if args.construct || args.focus.is_some() {
        let options = construct_options(&graph, args.subject, args.focus, args.object_prefix)
            .unwrap_or_else(|e| fail(e));
        let query = compile_construct_query(&graph, shape, &options);
        serde_json::to_string_pretty(&query)
    } else {
        let options = where_options(args.subject, args.object_prefix).unwrap_or_else(|e| fail(e));
        serde_json::to_string_pretty(&compile_where_patterns(&graph, shape, &options))
    };

    println!("{}", json.unwrap_or_else(|e| fail(e)));
}
