//! # Order Screen
//!
//! Loops until the order is checked out or cancelled.

use deli_receipts::ReceiptStore;
use std::io::{BufRead, Write};

use super::{checkout, chips, drink, sandwich, title, MENU_RULE_WIDTH};
use crate::error::CliResult;
use crate::input::Prompter;
use crate::state::SessionState;

/// Runs the order screen for the session's active order.
pub fn order_screen<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    session: &mut SessionState,
    store: &dyn ReceiptStore,
) -> CliResult<()> {
    loop {
        let Some(order) = session.order_mut() else {
            return Ok(());
        };

        title(p, "ORDER SCREEN")?;
        p.say("  1) Add Sandwich")?;
        p.say("  2) Add Drink")?;
        p.say("  3) Add Chips")?;
        p.say("  4) Checkout")?;
        p.say("  0) Cancel Order")?;
        p.say("─".repeat(MENU_RULE_WIDTH))?;
        if !order.is_empty() {
            p.say(format!("\nCurrent items: {}", order.len()))?;
        }

        match p.ask_int("\nEnter your choice: ")? {
            1 => sandwich::add_sandwich(p, order)?,
            2 => drink::add_drink(p, order)?,
            3 => chips::add_chips(p, order)?,
            4 => {
                checkout::checkout(p, session, store)?;
            }
            0 => cancel(p, session)?,
            _ => p.say("\nInvalid choice. Please try again.")?,
        }
    }
}

/// Discards the order, asking first when it has items.
fn cancel<R: BufRead, W: Write>(p: &mut Prompter<R, W>, session: &mut SessionState) -> CliResult<()> {
    let has_items = session.order().is_some_and(|order| !order.is_empty());
    if has_items && !p.ask_yes_no("\nAre you sure you want to cancel this order? (y/n): ")? {
        return Ok(());
    }

    session.cancel();
    p.say("\nOrder cancelled.")
}
