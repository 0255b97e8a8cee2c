use std::io::{BufRead, Write};

use hearth_core::Invoice;
use tracing::{debug, info, warn};

use super::{cart, Flow};
use crate::error::AppResult;
use crate::session::Session;

/// Confirms the order, prints the invoice and empties the cart.
///
/// ## Flow
/// ```text
/// cart empty? ── yes ──► "Add items before placing an order."
///      │ no
///      ▼
/// show cart ──► Y/N ── no ──► cart kept, keep shopping
///                  │ yes
///                  ▼
///      Invoice::issue ──► print ──► log as JSON ──► cart.clear()
/// ```
pub fn place_order<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Flow> {
    if session.cart.is_empty() {
        session
            .console
            .say("Cart is empty. Add items before placing an order.")?;
        return Ok(Flow::Continue);
    }
    cart::view_cart(session)?;

    if !session.console.read_yes_no("Confirm place order? (Y/N): ")? {
        debug!("place_order: cancelled by customer");
        session
            .console
            .say("Order cancelled. You can continue shopping.")?;
        return Ok(Flow::Continue);
    }

    let invoice = Invoice::issue(&session.catalog, &session.cart);
    let text = session.renderer.invoice(&invoice);
    session.console.show(&text)?;
    session.console.say("")?;

    info!(
        order_id = %invoice.order_id,
        outlet = %invoice.outlet.id(),
        lines = invoice.lines.len(),
        total = %invoice.total,
        "Order placed"
    );
    match serde_json::to_string(&invoice) {
        Ok(json) => info!(invoice = %json, "Invoice issued"),
        Err(e) => warn!(error = %e, "Failed to serialize invoice for the log"),
    }

    session.cart.clear();
    Ok(Flow::Continue)
}

pub fn exit<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Flow> {
    debug!(abandoned_lines = session.cart.item_count(), "exit command");
    session.console.say("Exiting. Goodbye.")?;
    Ok(Flow::Exit)
}
