//! Print the persisted cart.

use anyhow::Result;
use cart_core::{Cart, CartBadge};
use serde_json::json;

use super::ShowArgs;
use crate::context::Context;
use crate::output::format_price;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.persistence()?.load_or_default();
    let badge = CartBadge::from_cart(&cart);

    if ctx.output.is_json() {
        ctx.output.json(&cart_json(&cart));
        return Ok(());
    }

    if args.badge {
        println!("{}", badge);
        return Ok(());
    }

    print_cart(ctx, &cart);
    Ok(())
}

/// JSON document describing a cart.
pub fn cart_json(cart: &Cart) -> serde_json::Value {
    json!({
        "items": cart,
        "itemCount": cart.item_count(),
        "total": cart.total(),
        "badge": CartBadge::from_cart(cart).label(),
    })
}

/// Print the cart as a table followed by totals.
pub fn print_cart(ctx: &Context, cart: &Cart) {
    ctx.output.header(&format!("Cart ({})", CartBadge::from_cart(cart)));

    if cart.is_empty() {
        ctx.output.info("Cart is empty");
        return;
    }

    let widths = [6, 40, 6, 12, 12];
    ctx.output
        .table_row(&["ID", "PRODUCT", "QTY", "PRICE", "SUBTOTAL"], &widths);
    for entry in cart {
        let id = entry.id().to_string();
        let amount = entry.amount().to_string();
        let price = format_price(entry.price());
        let subtotal = format_price(entry.subtotal());
        ctx.output.table_row(
            &[
                id.as_str(),
                entry.title(),
                amount.as_str(),
                price.as_str(),
                subtotal.as_str(),
            ],
            &widths,
        );
    }

    println!();
    ctx.output.kv("Items", &cart.item_count().to_string());
    ctx.output.kv("Total", &format_price(cart.total()));
}
