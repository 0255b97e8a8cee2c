//! # Ordering Session
//!
//! One customer at the counter: a catalog to order from, a cart that starts
//! empty, and the console they type into.
//!
//! ## Session Loop
//! ```text
//! ┌──────────────┐    read 1-7    ┌──────────────┐   Flow::Continue
//! │  Main menu   │──────────────►│   command    │──────────────────┐
//! └──────────────┘               └──────┬───────┘                  │
//!        ▲                              │ Flow::Exit               │
//!        │                              ▼                          │
//!        │                          session ends                   │
//!        └─────────────────────────────────────────────────────────┘
//! ```
//!
//! End of input at any prompt also ends the session without error.

use std::io::{BufRead, Write};

use hearth_core::render::RECEIPT_WIDTH;
use hearth_core::{Cart, Catalog, Renderer};
use tracing::{debug, info};

use crate::commands::{self, Flow, MenuChoice};
use crate::console::Console;
use crate::error::{AppError, AppResult};

pub struct Session<R, W> {
    pub(crate) catalog: Catalog,
    pub(crate) cart: Cart,
    pub(crate) renderer: Renderer,
    pub(crate) console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, renderer: Renderer, console: Console<R, W>) -> Self {
        Session {
            catalog,
            cart: Cart::new(),
            renderer,
            console,
        }
    }

    /// Runs the main menu until the customer exits or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.print_main_menu()?;

            let raw = match self.console.read_int("Choose an option (1-7): ", Some(1), Some(7)) {
                Ok(raw) => raw,
                Err(AppError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            let choice = MenuChoice::try_from(raw)?;
            debug!(?choice, "Main menu choice");

            match commands::dispatch(self, choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(AppError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn print_main_menu(&mut self) -> AppResult<()> {
        let rule = "=".repeat(RECEIPT_WIDTH);
        let title = format!(
            "{} FOOD ORDERING APP",
            self.catalog.outlet().brand().to_uppercase()
        );

        let mut block = String::new();
        for line in [rule.as_str(), title.as_str(), rule.as_str()] {
            block.push_str(line);
            block.push('\n');
        }
        for choice in MenuChoice::ALL {
            block.push_str(&format!("{}) {}\n", choice as i64, choice.label()));
        }
        block.push_str(&rule);
        block.push('\n');

        self.console.show(&block)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Hands back the output, so scripted sessions can inspect what was shown.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}
