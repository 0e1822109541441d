//! # Add Sandwich Screen
//!
//! Custom sandwiches are built step by step; signature sandwiches start
//! from a recipe and may take extra toppings.
//!
//! ## Custom Flow
//! ```text
//! bread ─► size ─► meats* ─► cheese* ─► toppings* ─► sauces* ─► sides* ─► toasted?
//!                    │         │
//!                    └─ "Extra <name>? (y/n)" after each pick
//!
//! * loop until 0
//! ```
//!
//! Cancelling at bread or size adds nothing to the order.

use deli_core::{
    BreadType, CheeseType, MeatType, Order, RegularTopping, Sandwich, SandwichSize, Sauce,
    SideType, SignatureSandwich, SignatureSandwichType, Topping,
};
use deli_core::validation::validate_menu_choice;
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::info;

use super::{choose, title, Choice};
use crate::error::CliResult;
use crate::input::Prompter;

/// Entry point from the order screen.
pub fn add_sandwich<R: BufRead, W: Write>(p: &mut Prompter<R, W>, order: &mut Order) -> CliResult<()> {
    title(p, "ADD SANDWICH")?;
    p.say("\nWhat type of sandwich would you like?")?;
    p.say("  1) Custom Sandwich (build your own)")?;
    p.say("  2) Signature Sandwich (chef's special)")?;
    p.say("  0) Cancel")?;

    match p.ask_int("\nYour choice: ")? {
        1 => add_custom_sandwich(p, order),
        2 => add_signature_sandwich(p, order),
        0 => Ok(()),
        _ => p.say("Invalid choice."),
    }
}

fn add_custom_sandwich<R: BufRead, W: Write>(p: &mut Prompter<R, W>, order: &mut Order) -> CliResult<()> {
    p.say("\nSelect your bread:")?;
    let bread = match choose(p, "\nYour choice: ", BreadType::ALL, "Cancel", |b| b.to_string())? {
        Choice::Picked(bread) => bread,
        Choice::Back | Choice::Invalid => return Ok(()),
    };

    let Some(size) = select_size(p)? else {
        return Ok(());
    };

    let mut sandwich = Sandwich::new(size, bread);
    for topping in pick_meats(p)?
        .into_iter()
        .chain(pick_cheese(p)?)
        .chain(pick_regular_toppings(p)?)
        .chain(pick_sauces(p)?)
        .chain(pick_sides(p)?)
    {
        sandwich.add_topping(topping);
    }
    sandwich.set_toasted(p.ask_yes_no("\nWould you like the sandwich toasted? (y/n): ")?);

    info!(order_id = %order.id(), price = %sandwich.price(), "custom sandwich added");
    order.add_product(sandwich);
    p.say("\n✓ Sandwich added to order!")
}

fn add_signature_sandwich<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    order: &mut Order,
) -> CliResult<()> {
    let rule = "═".repeat(48);
    p.say(format!("\n╔{}╗", rule))?;
    p.say(format!("║{:7}{:<41}║", "", "SIGNATURE SANDWICH MENU"))?;
    p.say(format!("╚{}╝", rule))?;

    let signatures = SignatureSandwichType::ALL;
    for (number, signature) in signatures.iter().enumerate() {
        p.say(format!("\n{}) {}", number + 1, signature))?;
        p.say(format!("   {}", signature.blurb()))?;
    }
    p.say("\n0) Cancel")?;

    let choice = p.ask_int("\nSelect signature sandwich: ")?;
    if choice == 0 {
        return Ok(());
    }
    let signature = match validate_menu_choice(choice, signatures.len()) {
        Ok(index) => signatures[index],
        Err(_) => return p.say("Invalid choice."),
    };

    let Some(size) = select_size(p)? else {
        return Ok(());
    };

    let mut sandwich = SignatureSandwich::build(signature, size);
    p.say(format!("\nYour {} has been prepared!", signature))?;

    if p.ask_yes_no("Would you like to add additional toppings? (y/n): ")? {
        p.say("\n--- Customize Your Signature Sandwich ---")?;
        let mut extras = Vec::new();
        if p.ask_yes_no("Add more meats? (y/n): ")? {
            extras.extend(pick_meats(p)?);
        }
        if p.ask_yes_no("Add more cheese? (y/n): ")? {
            extras.extend(pick_cheese(p)?);
        }
        if p.ask_yes_no("Add more regular toppings? (y/n): ")? {
            extras.extend(pick_regular_toppings(p)?);
        }
        if p.ask_yes_no("Add more sauces? (y/n): ")? {
            extras.extend(pick_sauces(p)?);
        }
        if p.ask_yes_no("Add sides? (y/n): ")? {
            extras.extend(pick_sides(p)?);
        }
        for topping in extras {
            sandwich.add_topping(topping);
        }
    }

    info!(
        order_id = %order.id(),
        signature = %signature,
        price = %sandwich.price(),
        "signature sandwich added"
    );
    order.add_product(sandwich);
    p.say(format!("\n✓ {} added to order!", signature))
}

/// `None` when the operator backs out or picks an invalid size.
fn select_size<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> CliResult<Option<SandwichSize>> {
    p.say("\nSelect sandwich size:")?;
    match choose(p, "\nYour choice: ", &SandwichSize::ALL, "Cancel", SandwichSize::menu_label)? {
        Choice::Picked(size) => Ok(Some(size)),
        Choice::Back | Choice::Invalid => Ok(None),
    }
}

// =============================================================================
// Topping Loops
// =============================================================================

fn pick_meats<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> CliResult<Vec<Topping>> {
    pick_loop(p, "Meats (or 0 when done)", "meat", "meats", MeatType::ALL, |p, meat| {
        let extra = p.ask_yes_no(&format!("Extra {}? (y/n): ", meat))?;
        Ok(if extra { Topping::extra_meat(meat) } else { Topping::meat(meat) })
    })
}

fn pick_cheese<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> CliResult<Vec<Topping>> {
    pick_loop(p, "Cheese (or 0 when done)", "cheese", "cheese", CheeseType::ALL, |p, cheese| {
        let extra = p.ask_yes_no(&format!("Extra {}? (y/n): ", cheese))?;
        Ok(if extra {
            Topping::extra_cheese(cheese)
        } else {
            Topping::cheese(cheese)
        })
    })
}

fn pick_regular_toppings<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> CliResult<Vec<Topping>> {
    pick_loop(
        p,
        "Regular Toppings (or 0 when done)",
        "topping",
        "toppings",
        RegularTopping::ALL,
        |_, topping| Ok(Topping::regular(topping)),
    )
}

fn pick_sauces<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> CliResult<Vec<Topping>> {
    pick_loop(p, "Sauces (or 0 when done)", "sauce", "sauces", Sauce::ALL, |_, sauce| {
        Ok(Topping::sauce(sauce))
    })
}

fn pick_sides<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> CliResult<Vec<Topping>> {
    pick_loop(
        p,
        "Sides (served separately, not on sandwich)",
        "side",
        "sides",
        SideType::ALL,
        |_, side| Ok(Topping::side(side)),
    )
}

/// Repeats a numbered menu until 0, turning each pick into a topping.
fn pick_loop<T, R, W, F>(
    p: &mut Prompter<R, W>,
    heading: &str,
    noun: &str,
    plural: &str,
    options: &[T],
    mut make: F,
) -> CliResult<Vec<Topping>>
where
    T: Copy + Display,
    R: BufRead,
    W: Write,
    F: FnMut(&mut Prompter<R, W>, T) -> CliResult<Topping>,
{
    p.say(format!("\n--- Select {} ---", heading))?;
    let prompt = format!("\nSelect {}: ", noun);
    let done = format!("Done adding {}", plural);

    let mut picked = Vec::new();
    loop {
        match choose(p, &prompt, options, &done, |option| option.to_string())? {
            Choice::Picked(option) => {
                let topping = make(p, option)?;
                p.say(format!("✓ {} added!", topping))?;
                picked.push(topping);
            }
            Choice::Back => return Ok(picked),
            Choice::Invalid => {}
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
