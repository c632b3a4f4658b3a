//! Cart mutations: add, remove, update.

use anyhow::{bail, Result};
use cart_core::{IgnoreReason, Outcome, UpdateProductAmount};
use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use super::{AddArgs, RemoveArgs, UpdateArgs};
use crate::commands::show::{cart_json, print_cart};
use crate::context::{Context, Manager};

/// Run the add command.
pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let (mut manager, rx) = prepare(ctx).await?;
    let outcome = manager.add_product(args.id);
    report(ctx, &manager, rx, &outcome, &format!("Added product {}", args.id))
}

/// Run the remove command.
pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let (mut manager, rx) = prepare(ctx).await?;
    let outcome = manager.remove_product(args.id);
    report(ctx, &manager, rx, &outcome, &format!("Removed product {}", args.id))
}

/// Run the update command.
pub async fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let (mut manager, rx) = prepare(ctx).await?;
    let outcome = manager.update_product_amount(UpdateProductAmount::new(args.id, args.amount));
    report(
        ctx,
        &manager,
        rx,
        &outcome,
        &format!("Product {} quantity set to {}", args.id, args.amount),
    )
}

/// Open the manager and load the catalog into it.
async fn prepare(ctx: &Context) -> Result<(Manager, UnboundedReceiver<String>)> {
    let (mut manager, rx) = ctx.manager()?;
    debug!(
        store = %ctx.store_path().display(),
        entries = manager.cart().len(),
        "cart restored"
    );

    let source = ctx.catalog_source()?;
    let spinner = ctx.output.spinner("Loading catalog...");
    manager.load_catalog(&*source).await;
    spinner.finish_and_clear();

    if !manager.catalog().is_ready() {
        ctx.output
            .warn("Catalog did not load; stock checks will refuse changes");
    }

    Ok((manager, rx))
}

/// Print notifications, the outcome, and the resulting cart.
fn report(
    ctx: &Context,
    manager: &Manager,
    mut rx: UnboundedReceiver<String>,
    outcome: &Outcome,
    accepted: &str,
) -> Result<()> {
    info!(
        outcome = outcome_name(outcome),
        entries = manager.cart().len(),
        "cart operation finished"
    );

    let mut notifications = Vec::new();
    while let Ok(message) = rx.try_recv() {
        ctx.output.warn(&message);
        notifications.push(message);
    }

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "outcome": outcome_name(outcome),
            "notifications": notifications,
            "cart": cart_json(manager.cart()),
        }));
    } else {
        match outcome {
            Outcome::Accepted => ctx.output.success(accepted),
            Outcome::Rejected(rejection) => ctx.output.debug(&rejection.to_string()),
            Outcome::Ignored(reason) => ctx.output.info(&ignored_message(reason)),
            Outcome::Failed(_) => {}
        }
        print_cart(ctx, manager.cart());
    }

    if let Outcome::Failed(notice) = outcome {
        bail!("{}", notice.message(ctx.config.cart.locale));
    }
    Ok(())
}

fn outcome_name(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Accepted => "accepted",
        Outcome::Rejected(_) => "rejected",
        Outcome::Ignored(_) => "ignored",
        Outcome::Failed(_) => "failed",
    }
}

fn ignored_message(reason: &IgnoreReason) -> String {
    match reason {
        IgnoreReason::ProductNotFound(id) => format!("Product {} is not in the catalog", id),
        IgnoreReason::NotInCart(id) => format!("Product {} is not in the cart", id),
        IgnoreReason::NonPositiveAmount(amount) => {
            format!("Quantity {} ignored; use remove instead", amount)
        }
    }
}
