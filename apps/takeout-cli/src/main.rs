//! # Takeout CLI
//!
//! Interactive take-out ordering at the terminal.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          takeout (binary)                               │
//! │                                                                         │
//! │  1. init_tracing()        RUST_LOG, stderr                              │
//! │  2. AppConfig::load()     TAKEOUT_* environment variables               │
//! │  3. MenuChoice::catalog   compiled-in menu → MenuIndex                  │
//! │  4. OrderSession::run     StdConsole (stdin / stdout)                   │
//! │  5. print_receipt         text or JSON on stdout                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! cargo run -p takeout-cli
//! TAKEOUT_MENU=desserts TAKEOUT_RECEIPT_FORMAT=json cargo run -p takeout-cli
//! RUST_LOG=takeout_core=debug cargo run -p takeout-cli
//! ```

mod config;
mod console;
mod menus;

use std::io::{self, Write};

use anyhow::Context;
use takeout_core::{CompletedOrder, MenuIndex, OrderSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ReceiptFormat};
use crate::console::StdConsole;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load()?;
    info!(
        restaurant = %config.restaurant_name,
        menu = %config.menu,
        receipt_format = ?config.receipt_format,
        "Configuration loaded"
    );

    let catalog = config
        .menu
        .catalog()
        .with_context(|| format!("compiled-in menu '{}' is invalid", config.menu))?;
    let menu = MenuIndex::build(&catalog);

    let completed = OrderSession::new(&menu, StdConsole::stdio(), config.restaurant_name.as_str())
        .run()
        .context("ordering session failed")?;

    let stdout = io::stdout();
    print_receipt(&mut stdout.lock(), &completed, config.receipt_format)?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Every session transition and rejected answer
/// - `RUST_LOG=takeout_core=info` - Session start and end only
/// - Default: WARN (quiet, the terminal belongs to the customer)
///
/// Logs go to stderr so piping stdout captures only the session and receipt.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Writes the closing message and the receipt in the configured format.
fn print_receipt<W: Write>(
    out: &mut W,
    completed: &CompletedOrder,
    format: ReceiptFormat,
) -> anyhow::Result<()> {
    let receipt = completed.receipt();

    match format {
        ReceiptFormat::Text => {
            writeln!(out, "This is what we are preparing for you.")?;
            writeln!(out)?;
            write!(out, "{}", receipt)?;
        }
        ReceiptFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &receipt)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use takeout_core::Money;

    use crate::menus::MenuChoice;

    fn session(answers: &str) -> CompletedOrder {
        let catalog = MenuChoice::Meals.catalog().unwrap();
        let menu = MenuIndex::build(&catalog);
        let mut transcript = Vec::new();
        let console = StdConsole::new(Cursor::new(answers.to_string()), &mut transcript);
        OrderSession::new(&menu, console, "Generic Take Out Restaurant")
            .run()
            .unwrap()
    }

    #[test]
    fn test_text_receipt() {
        let completed = session("1\n2\ny\n15\n\nn\n");
        assert_eq!(completed.total, Money::from_cents(449 * 2 + 849));

        let mut out = Vec::new();
        print_receipt(&mut out, &completed, ReceiptFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("This is what we are preparing for you.\n\n"));
        assert!(text.contains("Burrito - Chicken               | $4.49  | 2\n"));
        assert!(text.contains("Burger - Beef                   | $8.49  | 1\n"));
        assert!(text.contains("Total price: $17.47\n"));
    }

    #[test]
    fn test_json_receipt() {
        let completed = session("3\n4\nn\n");

        let mut out = Vec::new();
        print_receipt(&mut out, &completed, ReceiptFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["total_cents"], 1596);
        assert_eq!(json["lines"][0]["name"], "Burrito - Vegetarian");
        assert_eq!(json["lines"][0]["quantity"], 4);
    }

    #[test]
    fn test_quantity_is_typed_below_the_hint() {
        let catalog = MenuChoice::Meals.catalog().unwrap();
        let menu = MenuIndex::build(&catalog);
        let mut screen = Vec::new();
        let console = StdConsole::new(Cursor::new("1\n2\nn\n"), &mut screen);
        OrderSession::new(&menu, console, "Generic Take Out Restaurant")
            .run()
            .unwrap();

        let screen = String::from_utf8(screen).unwrap();
        assert!(screen.contains(
            "What quantity of Burrito - Chicken would you like?\n\
             (This will default to 1 if number is not entered)\n\
             Would you like to keep ordering? (N) to quit: "
        ));
    }

    #[test]
    fn test_closed_stdin_gives_empty_receipt() {
        let completed = session("");
        assert!(completed.order.is_empty());

        let mut out = Vec::new();
        print_receipt(&mut out, &completed, ReceiptFormat::Text).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Total price: $0.00"));
    }
}
