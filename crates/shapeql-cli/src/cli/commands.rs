//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Shape input, selection and output flags every command takes.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(shapes_path_arg())
        .arg(document_arg())
        .arg(shape_arg())
        .arg(object_prefix_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("shapeql")
        .about("Compile SHACL-style node shapes into SPARQL queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(where_command())
        .subcommand(construct_command())
        .subcommand(dump_command())
}

/// Print the WHERE patterns of a shape.
pub fn where_command() -> Command {
    let cmd = Command::new("where")
        .about("Print the WHERE patterns of a shape")
        .override_usage(
            "\
  shapeql where <SHAPES> [--shape <NAME>] [--subject <VAR>]
  shapeql where -d <JSON> [--select]",
        )
        .after_help(
            r#"EXAMPLES:
  shapeql where shapes.json                      # first shape, ?node
  shapeql where shapes.json --shape Person       # named shape
  shapeql where shapes.json --subject person     # ?person as root
  shapeql where shapes.json --select             # full SELECT query
  cat shapes.json | shapeql where -              # from stdin"#,
        )
        .arg(subject_arg())
        .arg(select_arg())
        .arg(compact_iris_arg())
        .arg(color_arg());

    with_common_args(cmd)
}

/// Print a CONSTRUCT query for a shape.
pub fn construct_command() -> Command {
    let cmd = Command::new("construct")
        .about("Print a CONSTRUCT query for a shape")
        .override_usage(
            "\
  shapeql construct <SHAPES> [--shape <NAME>] [--subject <VAR>]
  shapeql construct <SHAPES> --focus <IRI>",
        )
        .after_help(
            r#"EXAMPLES:
  shapeql construct shapes.json                                # ?node as root
  shapeql construct shapes.json --focus http://example.org/John
  shapeql construct shapes.json --compact-iris                 # prefixed names"#,
        )
        .arg(subject_arg())
        .arg(focus_arg())
        .arg(compact_iris_arg())
        .arg(color_arg());

    with_common_args(cmd)
}

/// Dump the compiled pattern tree as JSON.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Dump the compiled pattern tree as JSON")
        .after_help(
            r#"EXAMPLES:
  shapeql dump shapes.json                   # WHERE pattern tree
  shapeql dump shapes.json --construct       # template and pattern tree"#,
        )
        .arg(subject_arg())
        .arg(focus_arg())
        .arg(construct_arg());

    with_common_args(cmd)
}
