//! Command-line interface entry point for `coursegraph`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_graph::config::Config;
use course_graph::info;
use course_graph::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // `stored` is what `config set/unset` persist; overrides only reach `config`
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    if let Some(log_path) = args.log_file.clone().or_else(|| config.log_file_path()) {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let display_path = log_path.to_string_lossy();
        if init_file_logging(&log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Scrape {
            urls,
            html_files,
            output,
            format,
            timeout: _,
        } => {
            commands::scrape::run(
                &urls,
                &html_files,
                output.as_deref(),
                format.into(),
                &config,
            );
        }
        Command::Tokenize { text } => {
            commands::tokenize::run(&text.join(" "));
        }
    }
}
