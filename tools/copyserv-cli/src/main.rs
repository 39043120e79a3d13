//! CopyServ CLI - catalog, contact requests and the static landing page.
//!
//! Commands:
//! - `copyserv catalog` - List, filter and look up products
//! - `copyserv contact` - Validate a contact request or compose its chat link
//! - `copyserv site` - Render the landing page
//! - `copyserv config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, ContactArgs, SiteArgs};

/// CopyServ CLI - photocopier catalog and contact tools
#[derive(Parser)]
#[command(name = "copyserv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog(CatalogArgs),

    /// Validate and send contact requests
    Contact(ContactArgs),

    /// Build the landing page
    Site(SiteArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Catalog(_) => "catalog",
            Commands::Contact(_) => "contact",
            Commands::Site(_) => "site",
            Commands::Config(_) => "config",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone(), cli.command.name()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    ctx.logger
        .debug_builder("command started")
        .field("session", ctx.logger.session_id().as_str())
        .field_bool("config_file", ctx.config_path.is_some())
        .emit();

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Contact(args) => commands::contact::run(args, &ctx).await,
        Commands::Site(args) => commands::site::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
