//! Delete the persisted cart.

use anyhow::{Context as _, Result};
use cart_store::KvStore;
use dialoguer::Confirm;
use tracing::info;

use super::ClearStoreArgs;
use crate::context::Context;

/// Run the clear-store command.
pub async fn run(args: ClearStoreArgs, ctx: &Context) -> Result<()> {
    let mut persistence = ctx.persistence()?;

    if !persistence.store().exists(persistence.key())? {
        ctx.output.info("Nothing to clear");
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete the saved cart?")
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Clear cancelled");
            return Ok(());
        }
    }

    persistence
        .clear()
        .with_context(|| format!("Failed to clear {}", ctx.store_path().display()))?;
    info!(store = %ctx.store_path().display(), key = persistence.key(), "saved cart cleared");
    ctx.output.success("Saved cart deleted");
    Ok(())
}
