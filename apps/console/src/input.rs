//! # Terminal Input
//!
//! Line-oriented prompting over any reader and writer.
//!
//! The console runs it over locked stdin/stdout; tests run it over a
//! `Cursor` of scripted answers and a `Vec<u8>` capturing everything shown.
//!
//! ## Re-prompting
//! ```text
//! ask_int("Your choice: ")        ask_yes_no("Extra Ham? (y/n): ")
//!   "abc" → "Please enter a        "maybe" → "Please enter 'y' or 'n'."
//!            valid number."        "Y" / "yes" → true
//!   " 2 " → 2                      "n" / "NO"  → false
//!
//! EOF at any prompt → CliError { code: InputClosed }
//! ```

use std::io::{BufRead, Write};

use crate::error::{CliError, CliResult};

/// Reads answers from `R` and writes prompts and screens to `W`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Gives back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl AsRef<str>) -> CliResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Shows `prompt` and returns the trimmed answer.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing.
    pub fn ask(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(CliError::input_closed());
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Asks until the answer parses as an integer.
    pub fn ask_int(&mut self, prompt: &str) -> CliResult<i64> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }
    }

    /// Asks until the answer is y, yes, n or no (any case).
    pub fn ask_yes_no(&mut self, prompt: &str) -> CliResult<bool> {
        loop {
            let answer = self.ask(prompt)?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please enter 'y' or 'n'.")?,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::testing::{prompter, shown};
    use std::io::Cursor;

    #[test]
    fn test_ask_trims() {
        let mut p = prompter("  Dr Pepper \n");
        assert_eq!(p.ask("Flavor: ").unwrap(), "Dr Pepper");
        assert_eq!(shown(p), "Flavor: ");
    }

    #[test]
    fn test_ask_int_reprompts_on_garbage() {
        let mut p = prompter("abc\n\n 3 \n");
        assert_eq!(p.ask_int("Choice: ").unwrap(), 3);

        let out = shown(p);
        assert_eq!(out.matches("Please enter a valid number.").count(), 2);
        assert_eq!(out.matches("Choice: ").count(), 3);
    }

    #[test]
    fn test_ask_int_accepts_negative() {
        let mut p = prompter("-4\n");
        assert_eq!(p.ask_int("Choice: ").unwrap(), -4);
    }

    #[test]
    fn test_ask_yes_no() {
        let mut p = prompter("maybe\nYES\nn\nY\nNo\n");
        assert!(p.ask_yes_no("? ").unwrap());
        assert!(!p.ask_yes_no("? ").unwrap());
        assert!(p.ask_yes_no("? ").unwrap());
        assert!(!p.ask_yes_no("? ").unwrap());
        assert!(shown(p).contains("Please enter 'y' or 'n'."));
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut p = prompter("abc\n");
        let err = p.ask_int("Choice: ").unwrap_err();
        assert_eq!(err.code, ErrorCode::InputClosed);

        let mut p = prompter("");
        assert!(p.ask_yes_no("? ").unwrap_err().is_input_closed());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut p = Prompter::new(Cursor::new(b"Caf\xE9\n7\n".to_vec()), Vec::new());
        assert_eq!(p.ask("Chip type: ").unwrap(), "Caf\u{FFFD}");
        assert_eq!(p.ask_int("Choice: ").unwrap(), 7);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompter("2");
        assert_eq!(p.ask_int("Choice: ").unwrap(), 2);
    }
}
