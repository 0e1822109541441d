//! # Console Screens
//!
//! One module per screen of the counter flow.
//!
//! ```text
//! home ──1──► order ──1──► sandwich (custom │ signature)
//!   ▲           │   ──2──► drink
//!   │           │   ──3──► chips
//!   │           │   ──4──► checkout ──confirm──► receipt saved ──┐
//!   │           │   ──0──► cancel ───────────────────────────────┤
//!   └───────────┴────────────────────────────────────────────────┘
//! ```
//!
//! Screens write through a [`Prompter`] and never touch stdin/stdout
//! directly.

pub mod checkout;
pub mod chips;
pub mod drink;
pub mod home;
pub mod order;
pub mod sandwich;

use deli_core::validation::validate_menu_choice;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::CliResult;
use crate::input::Prompter;

/// Inner width of a screen title box.
const TITLE_BOX_WIDTH: usize = 40;

/// Width of the rule under a menu.
pub(crate) const MENU_RULE_WIDTH: usize = 42;

/// Outcome of a numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Choice<T> {
    Picked(T),
    /// The operator entered 0.
    Back,
    /// Out of range; "Invalid choice." has been shown.
    Invalid,
}

/// Prints a boxed screen title.
pub(crate) fn title<R: BufRead, W: Write>(p: &mut Prompter<R, W>, text: &str) -> CliResult<()> {
    let rule = "═".repeat(TITLE_BOX_WIDTH);
    p.say(format!("\n╔{}╗", rule))?;
    p.say(format!("║{:12}{:<28}║", "", text))?;
    p.say(format!("╚{}╝", rule))
}

/// Lists `options` as `1) ..`, `2) ..` plus `0) <back_label>` and reads a pick.
pub(crate) fn choose<T, R, W, F>(
    p: &mut Prompter<R, W>,
    prompt: &str,
    options: &[T],
    back_label: &str,
    label: F,
) -> CliResult<Choice<T>>
where
    T: Copy,
    R: BufRead,
    W: Write,
    F: Fn(T) -> String,
{
    for (number, option) in options.iter().enumerate() {
        p.say(format!("  {}) {}", number + 1, label(*option)))?;
    }
    p.say(format!("  0) {}", back_label))?;

    let choice = p.ask_int(prompt)?;
    if choice == 0 {
        return Ok(Choice::Back);
    }

    match validate_menu_choice(choice, options.len()) {
        Ok(index) => Ok(Choice::Picked(options[index])),
        Err(err) => {
            debug!(%err, "menu choice rejected");
            p.say("Invalid choice.")?;
            Ok(Choice::Invalid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{prompter, shown};
    use deli_core::BreadType;

    #[test]
    fn test_title_box() {
        let mut p = prompter("");
        title(&mut p, "HOME SCREEN").unwrap();
        assert_eq!(
            shown(p),
            format!(
                "\n╔{rule}╗\n║            HOME SCREEN                 ║\n╚{rule}╝\n",
                rule = "═".repeat(40)
            )
        );
    }

    #[test]
    fn test_choose() {
        let mut p = prompter("2\n");
        let picked = choose(&mut p, "Pick: ", BreadType::ALL, "Cancel", |b| b.to_string()).unwrap();
        assert_eq!(picked, Choice::Picked(BreadType::Wheat));

        let out = shown(p);
        assert!(out.starts_with("  1) White\n  2) Wheat\n  3) Rye\n  4) Wrap\n  0) Cancel\nPick: "));
    }

    #[test]
    fn test_choose_back_and_invalid() {
        let mut p = prompter("0\n9\n");
        let back = choose(&mut p, "Pick: ", BreadType::ALL, "Cancel", |b| b.to_string()).unwrap();
        let invalid = choose(&mut p, "Pick: ", BreadType::ALL, "Cancel", |b| b.to_string()).unwrap();

        assert_eq!(back, Choice::Back);
        assert_eq!(invalid, Choice::Invalid);
        assert!(shown(p).contains("Invalid choice."));
    }
}
