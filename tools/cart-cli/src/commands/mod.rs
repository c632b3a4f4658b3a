//! CLI command implementations.

pub mod clear;
pub mod mutate;
pub mod show;

use cart_core::ProductId;
use clap::Args;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Only print the header badge label.
    #[arg(long)]
    pub badge: bool,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product to add.
    pub id: ProductId,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product to remove.
    pub id: ProductId,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Product to update.
    pub id: ProductId,

    /// New quantity. Zero or less is ignored.
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

/// Arguments for the clear-store command.
#[derive(Args)]
pub struct ClearStoreArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}
