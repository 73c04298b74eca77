use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use thiserror::Error;
use tracing::{debug, warn};
use zipren_renamer::{model::Strategy, settings::Settings};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // NOTE: logs go to a file, stdout is reserved for status messages
    if let Ok(logpath) = get_logging_path() {
        let logfile = tracing_appender::rolling::daily(logpath, "log");
        tracing_subscriber::fmt()
            .compact()
            .with_ansi(false)
            .with_writer(logfile)
            .init();
    }

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&cli().get_matches(), &mut settings);

    let renamed = zipren_renamer::run(settings, &mut std::io::stdout()).await;

    debug!("closing application after renaming {} files", renamed);
}

fn cli() -> Command {
    Command::new("zipren")
        .about("zipren - rename zip files in a directory to avoid naming conflicts")
        .version(env!("CARGO_PKG_VERSION"))
        .args([
            // NOTE: arguments
            Arg::new("directory")
                .action(ArgAction::Set)
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("directory containing zip files to rename"),
            // NOTE: options
            Arg::new("method")
                .long("method")
                .action(ArgAction::Set)
                .value_parser(Strategy::VALUES)
                .default_value("sequential")
                .help("method to use for generating unique names"),
            Arg::new("prefix")
                .long("prefix")
                .action(ArgAction::Set)
                .help("optional prefix to add to renamed files"),
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("show what would be done without actually renaming files"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    if let Some(directory) = args.get_one::<PathBuf>("directory") {
        settings.directory = directory.clone();
    }

    if let Some(method) = args.get_one::<String>("method") {
        match method.parse() {
            Ok(strategy) => settings.strategy = strategy,
            Err(err) => warn!("falling back to {}: {}", settings.strategy, err),
        }
    }

    if let Some(prefix) = args.get_one::<String>("prefix") {
        settings.prefix = prefix.clone();
    }

    settings.dry_run = args.get_flag("dry-run");
}

fn get_logging_path() -> Result<PathBuf, Error> {
    match dirs::cache_dir() {
        Some(cache_dir) => Ok(cache_dir.join("zipren/logs")),
        None => Err(Error::Initialization),
    }
}
