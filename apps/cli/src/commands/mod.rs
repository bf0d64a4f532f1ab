//! # Console Commands Module
//!
//! The text menu. It collects input, calls a service, prints the result.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Console, prompts, main menu)
//! ├── product.rs   ◄─── Products menu
//! ├── customer.rs  ◄─── Customers menu
//! └── cart.rs      ◄─── Cart menu, checkout, receipts
//! ```
//!
//! ## How a Menu Action Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input                                                                  │
//! │  ─────                                                                  │
//! │  "3" (Cart) → "7" (customer id) → "2" (Add) → "1" → "3"                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Console::add_to_cart                                                   │
//! │         │  prompt_i64 re-asks until the input parses                   │
//! │         ▼                                                               │
//! │  state.carts().add_product_to_cart(7, 1, 3)                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Ok(cart)  → "Added. Cart total: $29.97"                               │
//! │  Err(err)  → "Error: Insufficient stock for Widget (#1): ..."          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The console owns no rules. End of input anywhere ends the session.

use std::io::{self, BufRead, Write};

use shopkeep_core::Money;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

mod cart;
mod customer;
mod product;

pub use cart::{Receipt, ReceiptItem};

/// Line-oriented menu over any input/output pair.
///
/// ## Usage
/// ```rust
/// use std::io::Cursor;
/// use shopkeep_cli_lib::commands::Console;
/// use shopkeep_cli_lib::state::{AppConfig, AppState};
///
/// let state = AppState::new(AppConfig::default());
/// let mut console = Console::new(state, Cursor::new("0\n"), Vec::new());
/// console.run().unwrap();
///
/// let output = String::from_utf8(console.into_output()).unwrap();
/// assert!(output.contains("Goodbye"));
/// ```
pub struct Console<R, W> {
    state: AppState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(state: AppState, input: R, output: W) -> Self {
        Console {
            state,
            input,
            output,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the main menu until `0` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to {}", self.state.config().store_name)?;

        match self.main_menu() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                writeln!(self.output)?;
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1) Products  2) Customers  3) Cart  0) Exit")?;

            match self.prompt_line("> ")?.as_str() {
                "1" => self.products_menu()?,
                "2" => self.customers_menu()?,
                "3" => self.cart_menu()?,
                "0" => {
                    writeln!(self.output, "Goodbye.")?;
                    return Ok(());
                }
                other => writeln!(self.output, "Unknown option: {}", other)?,
            }
        }
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    /// Prints `label`, reads one line, returns it trimmed.
    ///
    /// End of input is reported as `UnexpectedEof`.
    fn prompt_line(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim().to_string())
    }

    /// Re-asks until the input parses as an integer.
    fn prompt_i64(&mut self, label: &str) -> io::Result<i64> {
        loop {
            match self.prompt_line(label)?.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    /// Re-asks until the input is a decimal amount such as `9.99`.
    fn prompt_money(&mut self, label: &str) -> io::Result<Money> {
        loop {
            let line = self.prompt_line(label)?;
            match Money::parse_decimal(&line) {
                Ok(amount) => return Ok(amount),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    // =========================================================================
    // Output helpers
    // =========================================================================

    fn print_error(&mut self, err: &AppError) -> io::Result<()> {
        writeln!(self.output, "Error: {}", err)
    }

    /// Prints `label` and the amount, or the error in its place.
    fn print_amount(&mut self, label: &str, amount: AppResult<Money>) -> io::Result<()> {
        match amount {
            Ok(amount) => {
                let amount = self.money(amount);
                writeln!(self.output, "{}{}", label, amount)
            }
            Err(e) => self.print_error(&e),
        }
    }

    fn money(&self, amount: Money) -> String {
        self.state.config().format_currency(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;
    use std::io::Cursor;

    /// Runs a session over `input` and returns what it printed.
    pub(super) fn run_session(state: AppState, input: &str) -> (AppState, String) {
        let mut console = Console::new(state, Cursor::new(input.to_string()), Vec::new());
        console.run().unwrap();
        let Console { state, output, .. } = console;
        (state, String::from_utf8(output).unwrap())
    }

    pub(super) fn empty_state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_exit() {
        let (_, out) = run_session(empty_state(), "0\n");
        assert!(out.starts_with("Welcome to Shopkeep"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (_, out) = run_session(empty_state(), "");
        assert!(!out.contains("Goodbye."));
    }

    #[test]
    fn test_unknown_option() {
        let (_, out) = run_session(empty_state(), "9\n0\n");
        assert!(out.contains("Unknown option: 9"));
    }

    #[test]
    fn test_integer_prompt_reasks() {
        // Products → Restock → id "abc" (re-ask) → 1 → qty 2 → back → exit
        let (_, out) = run_session(empty_state(), "1\n3\nabc\n1\n2\n0\n0\n");
        assert!(out.contains("Please enter a whole number."));
        assert!(out.contains("Error: Product not found: 1"));
    }
}
