//! Cart CLI - Command line driver for the Rocketshoes cart.
//!
//! Commands:
//! - `cart show` - Print the persisted cart
//! - `cart add` - Add one unit of a product
//! - `cart remove` - Remove a product
//! - `cart update` - Set the quantity of a product
//! - `cart clear-store` - Delete the persisted cart

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, ClearStoreArgs, RemoveArgs, ShowArgs, UpdateArgs};

/// Cart CLI - Manage the Rocketshoes shopping cart
#[derive(Parser)]
#[command(name = "cart")]
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
    /// Print the persisted cart
    Show(ShowArgs),

    /// Add one unit of a product
    Add(AddArgs),

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Set the quantity of a product in the cart
    Update(UpdateArgs),

    /// Delete the persisted cart
    ClearStore(ClearStoreArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    init_logging(&ctx, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Add(args) => commands::mutate::add(args, &ctx).await,
        Commands::Remove(args) => commands::mutate::remove(args, &ctx).await,
        Commands::Update(args) => commands::mutate::update(args, &ctx).await,
        Commands::ClearStore(args) => commands::clear::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over config and flags.
fn init_logging(ctx: &context::Context, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        ctx.config.log.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
