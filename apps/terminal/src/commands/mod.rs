//! # Counter Commands
//!
//! One function per main-menu option.
//!
//! ```text
//! commands/
//! ├── mod.rs      ◄─── MenuChoice, Flow, dispatch
//! ├── menu.rs     ◄─── view the catalog
//! ├── cart.rs     ◄─── add / view / update / remove
//! └── order.rs    ◄─── place order, exit
//! ```
//!
//! Cart rule violations are answered on screen and the session carries on;
//! only console failures propagate.

pub mod cart;
pub mod menu;
pub mod order;

use std::io::{BufRead, Write};

use hearth_core::FoodId;

use crate::error::{AppError, AppResult};
use crate::session::Session;

/// Main-menu options, numbered as shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewMenu = 1,
    AddItem = 2,
    ViewCart = 3,
    UpdateItem = 4,
    RemoveItem = 5,
    PlaceOrder = 6,
    Exit = 7,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ViewMenu,
        MenuChoice::AddItem,
        MenuChoice::ViewCart,
        MenuChoice::UpdateItem,
        MenuChoice::RemoveItem,
        MenuChoice::PlaceOrder,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ViewMenu => "View Menu",
            MenuChoice::AddItem => "Add Item to Cart",
            MenuChoice::ViewCart => "View Cart",
            MenuChoice::UpdateItem => "Update Cart Item Quantity",
            MenuChoice::RemoveItem => "Remove Item from Cart",
            MenuChoice::PlaceOrder => "Place Order",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|c| *c as i64 == value)
            .ok_or(AppError::InvalidChoice(value))
    }
}

/// Whether the session keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn dispatch<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    choice: MenuChoice,
) -> AppResult<Flow> {
    match choice {
        MenuChoice::ViewMenu => menu::view_menu(session),
        MenuChoice::AddItem => cart::add_item(session),
        MenuChoice::ViewCart => cart::view_cart(session),
        MenuChoice::UpdateItem => cart::update_item(session),
        MenuChoice::RemoveItem => cart::remove_item(session),
        MenuChoice::PlaceOrder => order::place_order(session),
        MenuChoice::Exit => order::exit(session),
    }
}

/// Ids typed at the prompt are `i64`; anything beyond `u32` names no food.
pub(crate) fn food_id(raw: i64) -> Option<FoodId> {
    u32::try_from(raw).ok().map(FoodId::new)
}
