//! # Checkout Screen
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout                                         │
//! │                                                                         │
//! │  order.validate()                                                      │
//! │       │ Err ──► "Your order is empty..." / "Invalid order: ..."        │
//! │       ▼                 (back to order screen, order kept)             │
//! │  print order.render()                                                  │
//! │       │                                                                 │
//! │  1) Confirm ──► store.save_order(order, now)                           │
//! │                      │ Err ──► "Error saving receipt: ..."             │
//! │                      │              (order kept, checkout retryable)   │
//! │                      ▼                                                  │
//! │                 session.finish()  (order discarded)                    │
//! │  0) Return ───► back to order screen                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Local;
use deli_receipts::ReceiptStore;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use super::title;
use crate::error::{CliError, CliResult};
use crate::input::Prompter;
use crate::state::SessionState;

/// Runs checkout for the active order.
///
/// ## Returns
/// `true` when the order was completed and removed from the session.
pub fn checkout<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    session: &mut SessionState,
    store: &dyn ReceiptStore,
) -> CliResult<bool> {
    let Some(order) = session.order() else {
        return Ok(false);
    };

    if let Err(err) = order.validate() {
        warn!(order_id = %order.id(), %err, "checkout refused");
        p.say(format!("\n{}", CliError::from(err).message))?;
        return Ok(false);
    }

    title(p, "CHECKOUT")?;
    p.say("")?;
    p.say(order.render())?;
    p.say("\nOptions:")?;
    p.say("  1) Confirm Order")?;
    p.say("  0) Cancel and return to order")?;

    if p.ask_int("\nYour choice: ")? != 1 {
        return Ok(false);
    }

    match store.save_order(order, Local::now().naive_local()) {
        Ok(path) => {
            info!(
                order_id = %order.id(),
                total = %order.total_price(),
                path = %path.display(),
                "order completed"
            );
            session.finish();

            let rule = "═".repeat(50);
            p.say(format!("\nReceipt saved successfully: {}", path.display()))?;
            p.say(format!("\n{}", rule))?;
            p.say("Order completed successfully!")?;
            p.say("Thank you for your order!")?;
            p.say(rule)?;
            Ok(true)
        }
        Err(err) => {
            p.say(format!("\n{}", CliError::from(err).message))?;
            p.say("Your order is still open. You can try checking out again.")?;
            Ok(false)
        }
    }
}
