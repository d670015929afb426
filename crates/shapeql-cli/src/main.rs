mod cli;
mod commands;

use clap::ArgMatches;
use cli::{ConstructParams, DumpParams, WhereParams, build_cli, log_level};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("where", m)) => {
            init_logging(m);
            let params = WhereParams::from_matches(m);
            commands::where_::run(params.into());
        }
        Some(("construct", m)) => {
            init_logging(m);
            let params = ConstructParams::from_matches(m);
            commands::construct::run(params.into());
        }
        Some(("dump", m)) => {
            init_logging(m);
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr so query text on stdout stays pipeable.
fn init_logging(m: &ArgMatches) {
    let level = log_level(m);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .target(env_logger::Target::Stderr)
        .init();
}
