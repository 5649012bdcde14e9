//! Folio - a static site generator for a personal blog and portfolio.

mod analytics;
mod build;
mod cli;
mod config;
mod content;
mod feed;
mod generator;
mod logger;
mod nav;
mod render;
mod serve;
mod theme;
mod utils;

use anyhow::{Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::{ConfigError, SiteConfig};
use serve::{bind_server, serve_site};
use std::path::Path;
use theme::{FileStore, PreferenceStore, STORAGE_KEY, ThemePreference, ThemeToggle};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::Serve { .. } => {
            let (server, addr) = bind_server(&config)?;
            config.update_with_bound_addr(addr, &cli);
            build_site(&config)?;
            serve_site(server, addr, &config)
        }
        Commands::Theme { toggle } => theme_command(&config, *toggle),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!(ConfigError::Missing(config_path));
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Show the stored theme preference, or flip it with `--toggle`.
fn theme_command(config: &SiteConfig, toggle: bool) -> Result<()> {
    let store = FileStore::new(&config.theme.state);

    if !toggle {
        let stored = store.load(STORAGE_KEY)?;
        let preference = stored
            .as_deref()
            .and_then(ThemePreference::parse)
            .unwrap_or(config.theme.default);
        let note = if stored.is_none() { " (default)" } else { "" };
        log!("theme"; "{preference}{note}");
        return Ok(());
    }

    let mut theme = ThemeToggle::load_or(&store, config.theme.default);
    let preference = theme.toggle();
    if theme.is_persistent() {
        log!("theme"; "{preference}, saved to {}", store.path().display());
    } else {
        log!("theme"; "{preference} (session only, could not write {})", store.path().display());
    }
    Ok(())
}
