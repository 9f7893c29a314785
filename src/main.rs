//! CLI entry point for tinge.

mod cli;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tinge::error::ConfigError;
use tinge::input::ThemeInput;
use tinge::store::cache::{default_theme, remove_cached_theme, set_cached_theme};
use tinge::store::FileStore;
use tinge::theme::{
    auto_theme, create_theme, preset_named, preset_names, to_exported_theme, Theme,
    AUTO_THEME_NAME,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: cli::Args) -> Result<(), ConfigError> {
    match &args.command {
        cli::Command::Presets => {
            for name in preset_names() {
                println!("{name}");
            }
        }
        cli::Command::Resolve { input, name } => {
            let theme = resolve_input_file(input, name)?;
            print_json(&theme)?;
        }
        cli::Command::Export { input } => {
            let tokens = match input {
                Some(path) => resolve_input_file(path, "Custom Theme")?.tokens,
                None => active_theme(&args).tokens,
            };
            print_json(&to_exported_theme(&tokens))?;
        }
        cli::Command::Show => {
            print_json(&active_theme(&args))?;
        }
        cli::Command::Set { target } => {
            let theme = theme_for_target(target, args.prefers_dark)?;
            let store = open_store(&args).ok_or_else(|| {
                ConfigError::Invalid("local storage is unavailable; nothing persisted".to_string())
            })?;
            set_cached_theme(&store, &theme);
            eprintln!("active theme: {}", theme.name);
        }
        cli::Command::Clear => {
            if let Some(store) = open_store(&args) {
                remove_cached_theme(&store);
            }
        }
    }
    Ok(())
}

/// Active theme under the default priority: cached choice, else the system
/// preset. Unavailable storage degrades to the system preset.
fn active_theme(args: &cli::Args) -> Theme {
    match open_store(args) {
        Some(store) => default_theme(&store, args.prefers_dark),
        None => auto_theme(args.prefers_dark),
    }
}

fn open_store(args: &cli::Args) -> Option<FileStore> {
    match &args.store_dir {
        Some(dir) => FileStore::open(dir),
        None => FileStore::open_default(),
    }
}

fn theme_for_target(target: &str, prefers_dark: bool) -> Result<Theme, ConfigError> {
    if let Some(preset) = preset_named(target) {
        return Ok(preset);
    }
    if target == AUTO_THEME_NAME {
        return Ok(auto_theme(prefers_dark));
    }
    resolve_input_file(target, "Custom Theme")
}

fn resolve_input_file(path: &str, name: &str) -> Result<Theme, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    let input: ThemeInput = toml::from_str(&text)?;
    Ok(create_theme(name, &input, None, false))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ConfigError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
