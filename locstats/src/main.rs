//! # locstats
//!
//! A CLI tool that counts code, comment, and blank lines of hash-commented
//! sources (Ruby by default), grouped by top-level directory.
//!
//! ## Usage
//!
//! ```bash
//! # Count .rb files under app/
//! locstats app
//!
//! # Count Python files instead
//! locstats . --ext .py
//!
//! # Skip vendored code
//! locstats . --exclude "**/vendor/**"
//!
//! # Show debug records
//! RUST_LOG=debug locstats app
//! ```
//!
//! Output is one line per top-level entry of the scanned directory:
//!
//! ```text
//! controllers: loc=812 comments=95 void=140
//! models: loc=530 comments=61 void=88
//! ```

mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use locstatslib::{count_directory, CountOptions, FilterConfig, DEFAULT_EXTENSION};
use log::debug;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("locstats")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Counts code, comment and blank lines per top-level directory")
        .arg(
            Arg::new("path")
                .help("Directory to scan (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("ext")
                .short('x')
                .long("ext")
                .default_value(DEFAULT_EXTENSION)
                .help("Count files whose path ends with this suffix"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("follow-links")
                .long("follow-links")
                .action(ArgAction::SetTrue)
                .help("Follow symbolic links while walking"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> anyhow::Result<FilterConfig> {
    let mut filter = FilterConfig::new();

    if let Some(ext) = matches.get_one::<String>("ext") {
        filter = filter.extension(ext)?;
    }

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Count and render; nothing is rendered unless the whole walk succeeded.
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");

    let options = CountOptions::new()
        .filter(build_filter(matches)?)
        .follow_links(matches.get_flag("follow-links"));
    debug!("scanning {} for *{}", path, options.file_filter.extension);

    let buckets =
        count_directory(path, &options).with_context(|| format!("counting lines in {}", path))?;
    if buckets.is_empty() {
        debug!("no files matched under {}", path);
    }

    Ok(render::render_buckets(&buckets))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
