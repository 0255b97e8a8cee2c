//! Scripted counter sessions over in-memory input and output.

use std::io::Cursor;

use hearth_core::{Cart, FoodId, Money, Renderer};
use hearth_terminal::config::TerminalConfig;
use hearth_terminal::console::Console;
use hearth_terminal::session::Session;

type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

fn session(script: &str) -> ScriptedSession {
    let catalog = TerminalConfig::default().catalog().unwrap();
    let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    Session::new(catalog, Renderer::default(), console)
}

/// Runs the script to the end and returns the final cart and everything printed.
fn run(script: &str) -> (Cart, String) {
    let mut session = session(script);
    session.run().unwrap();
    let cart = session.cart().clone();
    (cart, String::from_utf8(session.into_output()).unwrap())
}

#[test]
fn full_order_prints_invoice_and_clears_cart() {
    // add 2 x Margherita, add 1 x Garlic Bread, view cart, place order, exit
    let (cart, out) = run("2\n1\n2\n2\n5\n1\n3\n6\ny\n7\n");

    assert!(out.contains("PIZZA HUT FOOD ORDERING APP"));
    assert!(out.contains("Added: Margherita x 2"));
    assert!(out.contains("Added: Garlic Bread x 1"));
    assert!(out.contains("TOTAL BILL (₹)"));
    assert!(out.contains("547.00"));
    assert!(out.contains("ORDER CONFIRMATION / INVOICE"));
    assert!(out.contains("Thank you for ordering from Pizza Hut."));
    assert!(out.trim_end().ends_with("Exiting. Goodbye."));
    assert!(cart.is_empty());
}

#[test]
fn cancelled_order_keeps_the_cart() {
    let (cart, out) = run("2\n8\n3\n6\nn\n7\n");

    assert!(out.contains("Added: Brownie x 3"));
    assert!(out.contains("Order cancelled. You can continue shopping."));
    assert!(!out.contains("ORDER CONFIRMATION"));
    assert_eq!(cart.total_bill(), Money::from_major_minor(387, 0));
}

#[test]
fn invalid_main_menu_input_re_prompts() {
    let (_, out) = run("abc\n0\n9\n7\n");

    assert!(out.contains("Invalid input. Please enter a whole number."));
    assert!(out.contains("Please enter a number >= 1."));
    assert!(out.contains("Please enter a number <= 7."));
    assert!(out.contains("Exiting. Goodbye."));
}

#[test]
fn unknown_food_id_is_rejected_before_quantity() {
    let (cart, out) = run("2\n42\n7\n");

    assert!(out.contains("Invalid Food ID. Please try again."));
    assert!(!out.contains("Enter quantity: "));
    assert!(cart.is_empty());
}

#[test]
fn zero_quantity_on_add_re_prompts() {
    let (cart, out) = run("2\n6\n0\n4\n7\n");

    assert!(out.contains("Please enter a number >= 1."));
    assert!(out.contains("Added: Cheesy Dip x 4"));
    assert_eq!(cart.get(FoodId::new(6)).unwrap().quantity(), 4);
}

#[test]
fn empty_cart_commands_explain_themselves() {
    let (_, out) = run("3\n4\n5\n6\n7\n");

    assert!(out.contains("Your cart is empty."));
    assert!(out.contains("Cart is empty. Nothing to update."));
    assert!(out.contains("Cart is empty. Nothing to remove."));
    assert!(out.contains("Cart is empty. Add items before placing an order."));
}

#[test]
fn update_changes_removes_and_reports_missing_lines() {
    // add 1 x Farmhouse, set it to 3, update an id not in the cart, set it to 0
    let (cart, out) = run("2\n2\n1\n4\n2\n3\n4\n7\n2\n4\n2\n0\n7\n");

    assert!(out.contains("Quantity updated successfully."));
    assert!(out.contains("That item is not in your cart."));
    assert!(out.contains("Item removed from cart."));
    assert!(cart.is_empty());
}

#[test]
fn remove_ignores_ids_not_in_cart() {
    let (cart, out) = run("2\n7\n2\n5\n3\n5\n7\n7\n");

    assert_eq!(out.matches("Item removed (if it existed).").count(), 2);
    assert!(cart.is_empty());
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    let mut mid_add = session("2\n1\n");
    assert!(mid_add.run().is_ok());
    assert!(mid_add.cart().is_empty());

    let mut silent = session("");
    assert!(silent.run().is_ok());
}

#[test]
fn yes_no_prompt_repeats_until_answered() {
    let (cart, out) = run("2\n3\n1\n6\nmaybe\nYES\n7\n");

    assert!(out.contains("Please type Y/Yes or N/No."));
    assert!(out.contains("369.00"));
    assert!(cart.is_empty());
}

#[test]
fn oversized_quantity_is_refused_and_the_cart_still_renders() {
    let (cart, out) = run("2\n1\n9223372036854775807\n3\n2\n1\n2\n4\n1\n9223372036854775807\n3\n7\n");

    assert_eq!(out.matches("Quantity for item 1 is too large").count(), 2);
    assert!(out.contains("Your cart is empty."));
    assert!(out.contains("Added: Margherita x 2"));
    assert!(out.contains("398.00"));
    assert_eq!(cart.get(FoodId::new(1)).unwrap().quantity(), 2);
}
