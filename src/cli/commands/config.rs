//! Config command handler
//!
//! Edits go to the stored configuration only; CLI overrides for the current
//! run never reach this module.

use crate::args::ConfigSubcommand;
use course_graph::config::{unknown_key, Config};
use course_graph::core::scrape::Selectors;
use course_graph::error;
use std::io::{self, Write};

/// Dispatch config subcommands against the stored configuration
pub fn run(subcommand: Option<ConfigSubcommand>, stored: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            println!("\n=== Configuration ===\n");
            print!("{stored}");
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => {
            describe(stored, &key).map(|lines| {
                for line in lines {
                    println!("{line}");
                }
            })
        }
        Some(ConfigSubcommand::Set { key, value }) => {
            set_value(stored, &key, &value).and_then(|msg| persist(stored, &msg))
        }
        Some(ConfigSubcommand::Unset { key }) => {
            unset_value(stored, defaults, &key).and_then(|msg| persist(stored, &msg))
        }
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(message) = result {
        error!("{message}");
        eprintln!("✗ {message}");
        std::process::exit(1);
    }
}

/// Lines printed for `config get KEY`; `urls` gets one line per page
fn describe(config: &Config, key: &str) -> Result<Vec<String>, String> {
    let value = config.get(key).ok_or_else(|| unknown_key(key))?;
    Ok(match key.replace('-', "_").as_str() {
        "urls" if config.scrape.urls.is_empty() => vec!["(none)".to_string()],
        "urls" => config.scrape.urls.clone(),
        "timeout_secs" if config.scrape.timeout_secs == 0 => {
            vec!["0 (built-in default)".to_string()]
        }
        _ => vec![value],
    })
}

/// Apply `key = value`, refusing selectors that would break the next scrape
fn set_value(config: &mut Config, key: &str, value: &str) -> Result<String, String> {
    let mut updated = config.clone();
    updated.set(key, value)?;
    if key.replace('-', "_").ends_with("_selector") {
        Selectors::from_config(&updated.scrape).map_err(|e| e.to_string())?;
    }
    *config = updated;

    Ok(match key.replace('-', "_").as_str() {
        "urls" => format!("Set urls ({} pages)", config.scrape.urls.len()),
        _ => format!("Set {key} = {value}"),
    })
}

fn unset_value(config: &mut Config, defaults: &Config, key: &str) -> Result<String, String> {
    config.unset(key, defaults)?;
    let value = config.get(key).unwrap_or_default();
    Ok(format!("Reset {key} to default ({value})"))
}

fn persist(config: &Config, message: &str) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    println!("✓ {message}");
    Ok(())
}

/// Delete the config file after confirmation
fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();
    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if !matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        println!("✗ Reset cancelled");
        return Ok(());
    }
    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}
