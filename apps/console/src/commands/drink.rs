//! # Add Drink Screen

use deli_core::validation::validate_flavor;
use deli_core::{Drink, DrinkSize, Order};
use std::io::{BufRead, Write};
use tracing::{info, warn};

use super::{choose, title, Choice};
use crate::error::{CliError, CliResult};
use crate::input::Prompter;

/// Size first, then a free-text flavor.
pub fn add_drink<R: BufRead, W: Write>(p: &mut Prompter<R, W>, order: &mut Order) -> CliResult<()> {
    title(p, "ADD DRINK")?;
    p.say("\nSelect drink size:")?;

    let size = match choose(p, "\nYour choice: ", &DrinkSize::ALL, "Cancel", DrinkSize::menu_label)? {
        Choice::Picked(size) => size,
        Choice::Back | Choice::Invalid => return Ok(()),
    };

    let answer = p.ask("\nEnter drink flavor (e.g., Coke, Sprite, Lemonade): ")?;
    let flavor = match validate_flavor("Flavor", &answer) {
        Ok(flavor) => flavor,
        Err(err) => {
            warn!(%err, "drink flavor rejected");
            return p.say(CliError::from(err).message);
        }
    };

    let drink = Drink::new(size, flavor);
    info!(order_id = %order.id(), drink = %drink.description(), "drink added");
    order.add_product(drink);
    p.say("\n✓ Drink added to order!")
}
