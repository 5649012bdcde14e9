//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// folio: personal blog generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to site root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to site root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable rss feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rss: Option<bool>,

    /// Enable sitemap generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override the site url, e.g. for a preview deployment
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the site into the output directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Build, then serve the output directory locally
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show or flip the default theme baked into built pages
    Theme {
        /// Flip between dark and light
        #[arg(short, long)]
        toggle: bool,
    },
}

impl Cli {
    pub const fn build_args(&self) -> Option<&BuildArgs> {
        match &self.command {
            Commands::Build { build_args } | Commands::Serve { build_args, .. } => Some(build_args),
            Commands::Theme { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::parse_from(["folio", "build", "--clean", "--minify", "false", "--rss"]);
        let args = cli.build_args().unwrap();
        assert!(args.clean);
        assert_eq!(args.minify, Some(false));
        assert_eq!(args.rss, Some(true));
        assert_eq!(args.sitemap, None);
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["folio", "-r", "site", "serve", "-p", "8080"]);
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert!(matches!(cli.command, Commands::Serve { port: Some(8080), .. }));
    }

    #[test]
    fn test_parse_theme() {
        let cli = Cli::parse_from(["folio", "theme", "--toggle"]);
        assert!(matches!(cli.command, Commands::Theme { toggle: true }));
        assert!(cli.build_args().is_none());
    }
}
