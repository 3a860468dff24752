//! Pressroom - a minimal publishing backend for pre-rendered blog posts.

mod api;
mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod post;
mod store;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::PressConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = PressConfig::load(&cli)?;
    debug!("config"; "project root {}", config.get_root().display());

    match &cli.command {
        Commands::Serve { .. } => cli::serve::serve(config),
        Commands::Sitemap => cli::sitemap::regenerate(&config),
        Commands::Posts { pretty } => cli::posts::print_feed(&config, *pretty),
    }
}
