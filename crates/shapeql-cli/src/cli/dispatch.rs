//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the fields each command uses
//! - `Into<*Args>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use log::LevelFilter;

use super::ColorChoice;
use crate::commands::construct::ConstructArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::shape_loader::ShapeSource;
use crate::commands::where_::WhereArgs;

pub struct WhereParams {
    pub shapes_path: Option<PathBuf>,
    pub document: Option<String>,
    pub shape: Option<String>,
    pub subject: String,
    pub object_prefix: Option<String>,
    pub select: bool,
    pub compact_iris: bool,
    pub color: ColorChoice,
}

impl WhereParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            shapes_path: m.get_one::<PathBuf>("shapes_path").cloned(),
            document: m.get_one::<String>("document").cloned(),
            shape: m.get_one::<String>("shape").cloned(),
            subject: parse_subject(m),
            object_prefix: m.get_one::<String>("object_prefix").cloned(),
            select: m.get_flag("select"),
            compact_iris: m.get_flag("compact_iris"),
            color: parse_color(m),
        }
    }
}

impl From<WhereParams> for WhereArgs {
    fn from(p: WhereParams) -> Self {
        Self {
            source: ShapeSource::new(p.shapes_path, p.document),
            shape: p.shape,
            subject: p.subject,
            object_prefix: p.object_prefix,
            select: p.select,
            compact_iris: p.compact_iris,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ConstructParams {
    pub shapes_path: Option<PathBuf>,
    pub document: Option<String>,
    pub shape: Option<String>,
    pub subject: String,
    pub focus: Option<String>,
    pub object_prefix: Option<String>,
    pub compact_iris: bool,
    pub color: ColorChoice,
}

impl ConstructParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            shapes_path: m.get_one::<PathBuf>("shapes_path").cloned(),
            document: m.get_one::<String>("document").cloned(),
            shape: m.get_one::<String>("shape").cloned(),
            subject: parse_subject(m),
            focus: m.get_one::<String>("focus").cloned(),
            object_prefix: m.get_one::<String>("object_prefix").cloned(),
            compact_iris: m.get_flag("compact_iris"),
            color: parse_color(m),
        }
    }
}

impl From<ConstructParams> for ConstructArgs {
    fn from(p: ConstructParams) -> Self {
        Self {
            source: ShapeSource::new(p.shapes_path, p.document),
            shape: p.shape,
            subject: p.subject,
            focus: p.focus,
            object_prefix: p.object_prefix,
            compact_iris: p.compact_iris,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub shapes_path: Option<PathBuf>,
    pub document: Option<String>,
    pub shape: Option<String>,
    pub subject: String,
    pub focus: Option<String>,
    pub object_prefix: Option<String>,
    pub construct: bool,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            shapes_path: m.get_one::<PathBuf>("shapes_path").cloned(),
            document: m.get_one::<String>("document").cloned(),
            shape: m.get_one::<String>("shape").cloned(),
            subject: parse_subject(m),
            focus: m.get_one::<String>("focus").cloned(),
            object_prefix: m.get_one::<String>("object_prefix").cloned(),
            construct: m.get_flag("construct"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            source: ShapeSource::new(p.shapes_path, p.document),
            shape: p.shape,
            subject: p.subject,
            focus: p.focus,
            object_prefix: p.object_prefix,
            construct: p.construct,
        }
    }
}

/// `-v` count to a log level. `RUST_LOG` still takes precedence.
pub fn log_level(m: &ArgMatches) -> LevelFilter {
    match m.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn parse_subject(m: &ArgMatches) -> String {
    let subject = m.get_one::<String>("subject").map_or("node", String::as_str);
    subject.trim_start_matches('?').to_owned()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
