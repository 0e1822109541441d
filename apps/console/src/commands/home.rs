//! # Home Screen

use deli_receipts::ReceiptStore;
use std::io::{BufRead, Write};
use tracing::info;

use super::{order, title, MENU_RULE_WIDTH};
use crate::error::CliResult;
use crate::input::Prompter;
use crate::state::{ConfigState, SessionState};

const WELCOME_RULE_WIDTH: usize = 60;

/// Welcome banner, then the home menu until the operator exits.
pub fn home_screen<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    session: &mut SessionState,
    store: &dyn ReceiptStore,
    config: &ConfigState,
) -> CliResult<()> {
    welcome(p, config)?;

    loop {
        title(p, "HOME SCREEN")?;
        p.say("  1) New Order")?;
        p.say("  0) Exit")?;
        p.say("─".repeat(MENU_RULE_WIDTH))?;

        match p.ask_int("Enter your choice: ")? {
            1 => {
                session.start();
                order::order_screen(p, session, store)?;
            }
            0 => {
                info!("operator exited");
                return p.say(format!("\nThank you for visiting {}! Goodbye!", config.store_name));
            }
            _ => p.say("\nInvalid choice. Please try again.")?,
        }
    }
}

fn welcome<R: BufRead, W: Write>(p: &mut Prompter<R, W>, config: &ConfigState) -> CliResult<()> {
    let rule = "═".repeat(WELCOME_RULE_WIDTH);
    p.say(format!("\n{}", rule))?;
    p.say(format!("\n{:^60}", format!("Welcome to {}!", config.store_name)))?;
    p.say(format!("{:^60}", "Your Custom Sandwich Destination"))?;
    p.say(format!("{}\n", rule))
}
