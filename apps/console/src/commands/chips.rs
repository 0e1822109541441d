//! # Add Chips Screen

use deli_core::validation::validate_flavor;
use deli_core::{Chips, Order};
use std::io::{BufRead, Write};
use tracing::{info, warn};

use super::title;
use crate::error::{CliError, CliResult};
use crate::input::Prompter;

pub fn add_chips<R: BufRead, W: Write>(p: &mut Prompter<R, W>, order: &mut Order) -> CliResult<()> {
    title(p, "ADD CHIPS")?;

    let answer = p.ask("\nEnter chip type (e.g., Lays, Doritos, Cheetos): ")?;
    let kind = match validate_flavor("Chip type", &answer) {
        Ok(kind) => kind,
        Err(err) => {
            warn!(%err, "chip type rejected");
            return p.say(CliError::from(err).message);
        }
    };

    info!(order_id = %order.id(), kind = %kind, "chips added");
    order.add_product(Chips::new(kind));
    p.say("\n✓ Chips added to order!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{prompter, shown};

    #[test]
    fn test_add_chips() {
        let mut p = prompter("Doritos\n");
        let mut order = Order::new();

        add_chips(&mut p, &mut order).unwrap();

        assert_eq!(order.products()[0].description(), "Doritos Chips - $1.50");
        assert!(shown(p).contains("✓ Chips added to order!"));
    }

    #[test]
    fn test_empty_kind_rejected() {
        let mut p = prompter("\n");
        let mut order = Order::new();

        add_chips(&mut p, &mut order).unwrap();

        assert!(order.is_empty());
        assert!(shown(p).contains("Chip type cannot be empty."));
    }

    #[test]
    fn test_overlong_kind_rejected() {
        let mut p = prompter(&format!("{}\n", "Z".repeat(51)));
        let mut order = Order::new();

        add_chips(&mut p, &mut order).unwrap();

        assert!(order.is_empty());
        assert!(shown(p).contains("Chip type must be at most 50 characters"));
    }
}
