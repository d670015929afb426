//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Shape document path (positional). `-` reads stdin.
pub fn shapes_path_arg() -> Arg {
    Arg::new("shapes_path")
        .value_name("SHAPES")
        .value_parser(value_parser!(PathBuf))
        .help("Shape document (JSON), or - for stdin")
}

/// Inline shape document (-d/--document).
pub fn document_arg() -> Arg {
    Arg::new("document")
        .short('d')
        .long("document")
        .value_name("JSON")
        .conflicts_with("shapes_path")
        .help("Inline shape document")
}

/// Shape to compile (--shape).
pub fn shape_arg() -> Arg {
    Arg::new("shape")
        .long("shape")
        .value_name("NAME")
        .help("Shape to compile (default: first shape of the document)")
}

/// Root variable name (--subject).
pub fn subject_arg() -> Arg {
    Arg::new("subject")
        .long("subject")
        .value_name("VAR")
        .default_value("node")
        .help("Root variable name, without '?'")
}

/// Fixed focus IRI (--focus).
pub fn focus_arg() -> Arg {
    Arg::new("focus")
        .long("focus")
        .value_name("IRI")
        .conflicts_with("subject")
        .help("Focus on a fixed IRI instead of a variable")
}

/// Object variable prefix (--object-prefix).
pub fn object_prefix_arg() -> Arg {
    Arg::new("object_prefix")
        .long("object-prefix")
        .value_name("PREFIX")
        .help("Insert PREFIX after the root name of object variables")
}

/// Wrap in SELECT (--select).
pub fn select_arg() -> Arg {
    Arg::new("select")
        .long("select")
        .action(ArgAction::SetTrue)
        .help("Print a complete SELECT * WHERE query")
}

/// Dump the CONSTRUCT query instead of the WHERE tree (--construct).
pub fn construct_arg() -> Arg {
    Arg::new("construct")
        .long("construct")
        .action(ArgAction::SetTrue)
        .help("Dump the CONSTRUCT template along with the WHERE pattern")
}

/// Compact IRIs with document prefixes (--compact-iris).
pub fn compact_iris_arg() -> Arg {
    Arg::new("compact_iris")
        .long("compact-iris")
        .action(ArgAction::SetTrue)
        .help("Write IRIs as prefixed names where a prefix is known")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Log compilation steps (-vv for more)")
}
