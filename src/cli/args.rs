//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Pressroom publishing backend CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: pressroom.toml)
    #[arg(short = 'C', long, global = true, default_value = "pressroom.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the publishing server
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Regenerate sitemap.xml from the posts index
    #[command(visible_alias = "m")]
    Sitemap,

    /// Print the homepage feed as JSON
    #[command(visible_alias = "p")]
    Posts {
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}
