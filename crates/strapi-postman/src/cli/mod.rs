//! Command-line definition

pub mod setup;

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

pub fn build_cli() -> Command {
    Command::new("strapi-postman")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a Postman collection from local Strapi content-type schemas")
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Strapi project root (default: current directory)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Where to write the collection, relative to the root (default: postman_collection.json)"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .help("Default value of the baseUrl collection variable"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Print the collection to stdout instead of writing it"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log discovery details to stderr"),
        )
}

/// Parsed command-line options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub base_url: Option<String>,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Options {
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            root: matches.get_one::<PathBuf>("root").cloned(),
            output: matches.get_one::<PathBuf>("output").cloned(),
            base_url: matches.get_one::<String>("base-url").cloned(),
            dry_run: matches.get_flag("dry-run"),
            verbose: matches.get_flag("verbose"),
        }
    }
}
