//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐
//! │  Empty   │────►│ In Cart  │────►│ Confirm  │────►│ Invoice  │
//! │  Cart    │     │          │     │  (Y/N)   │     │ printed  │
//! └──────────┘     └──────────┘     └──────────┘     └────┬─────┘
//!      ▲                │                                  │
//!      │           add_item                                │
//!      │           update_item                             │
//!      │           remove_item                             │
//!      └───────────────────────── cart cleared ◄──────────┘
//! ```

use std::io::{BufRead, Write};

use hearth_core::{CoreError, QuantityChange};
use tracing::debug;

use super::{food_id, menu, Flow};
use crate::error::AppResult;
use crate::session::Session;

/// Shows the menu, asks for a food and a quantity, and adds them.
///
/// Unknown ids are answered on screen; nothing reaches the cart.
pub fn add_item<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Flow> {
    menu::view_menu(session)?;

    let raw_id = session
        .console
        .read_int("Enter Food ID to add: ", Some(1), None)?;
    let food = match food_id(raw_id).and_then(|id| session.catalog.get_food(id)) {
        Some(food) => food.clone(),
        None => {
            debug!(food_id = raw_id, "add_item: unknown food id");
            session.console.say("Invalid Food ID. Please try again.")?;
            return Ok(Flow::Continue);
        }
    };

    let qty = session.console.read_int("Enter quantity: ", Some(1), None)?;
    debug!(food_id = %food.id(), quantity = qty, "add_item command");

    match session.cart.add(&food, qty) {
        Ok(()) => session
            .console
            .say(format!("Added: {} x {}", food.name(), qty))?,
        Err(e) => session.console.say(e)?,
    }
    Ok(Flow::Continue)
}

/// Shows the cart and its total.
pub fn view_cart<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Flow> {
    debug!(lines = session.cart.item_count(), "view_cart command");

    let text = session.renderer.cart(&session.cart);
    session.console.show(&text)?;
    Ok(Flow::Continue)
}

/// Sets a new quantity for a line; 0 removes it.
pub fn update_item<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Flow> {
    if session.cart.is_empty() {
        session.console.say("Cart is empty. Nothing to update.")?;
        return Ok(Flow::Continue);
    }
    view_cart(session)?;

    let raw_id = session
        .console
        .read_int("Enter Food ID to update quantity: ", Some(1), None)?;
    let qty = session
        .console
        .read_int("Enter new quantity (0 to remove): ", Some(0), None)?;
    debug!(food_id = raw_id, quantity = qty, "update_item command");

    let Some(id) = food_id(raw_id) else {
        session.console.say("That item is not in your cart.")?;
        return Ok(Flow::Continue);
    };

    match session.cart.update_qty(id, qty) {
        Ok(QuantityChange::Removed) => session.console.say("Item removed from cart.")?,
        Ok(QuantityChange::Updated) => session.console.say("Quantity updated successfully.")?,
        Err(CoreError::ItemNotFound(_)) => session.console.say("That item is not in your cart.")?,
        Err(e) => session.console.say(e)?,
    }
    Ok(Flow::Continue)
}

/// Drops a line. Ids not in the cart are ignored.
pub fn remove_item<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Flow> {
    if session.cart.is_empty() {
        session.console.say("Cart is empty. Nothing to remove.")?;
        return Ok(Flow::Continue);
    }
    view_cart(session)?;

    let raw_id = session
        .console
        .read_int("Enter Food ID to remove: ", Some(1), None)?;
    let removed = food_id(raw_id).and_then(|id| session.cart.remove(id));
    debug!(food_id = raw_id, removed = removed.is_some(), "remove_item command");

    session.console.say("Item removed (if it existed).")?;
    Ok(Flow::Continue)
}
