//! # Ordering Session
//!
//! The interactive loop that turns console answers into an [`Order`].
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Welcoming ──► PromptingSelection ──► Validating(input)                 │
//! │                    ▲      │ EOF            │         │                  │
//! │                    │      ▼                │ invalid │ valid            │
//! │                    │  Terminated ◄──┐      │         ▼                  │
//! │                    │                │      │   PromptingQuantity(entry) │
//! │                    │           "n"/EOF     │         │                  │
//! │                    │                │      │         ▼                  │
//! │                    │                │      │   Appending(line)          │
//! │                    │                │      ▼         │                  │
//! │                    └── other ── PromptingContinue ◄──┘                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Bad answers are printed and absorbed in the same turn; the session cannot
//! be crashed by what the customer types. Only a failing [`Console`]
//! (an `io::Error`) ends it early, and a failed step leaves the state as it
//! was so it can be retried.
//!
//! ## End of Input
//! - at the menu-number or keep-ordering prompt: same as answering `n`
//! - at the quantity prompt: same as an unusable quantity (orders 1)

use std::mem;

use serde::Serialize;
use tracing::{debug, info};

use crate::console::Console;
use crate::error::{SelectionError, SessionError};
use crate::menu::{MenuEntry, MenuIndex};
use crate::money::Money;
use crate::order::{LineItem, Order};
use crate::receipt::{menu_lines, Receipt};
use crate::validation::{parse_quantity, parse_selection, wants_to_stop};

pub const ORDER_PROMPT: &str = "What would you like to order?";
pub const SELECTION_PROMPT: &str = "Type menu number: ";
pub const QUANTITY_HINT: &str = "(This will default to 1 if number is not entered)";
pub const CONTINUE_PROMPT: &str = "Would you like to keep ordering? (N) to quit: ";
pub const NO_SELECTION_NOTICE: &str = "A menu option hasn't been selected";
pub const FAREWELL: &str = "Thank you for your order.";

/// Where the session is in the ordering loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Banner not shown yet.
    Welcoming,
    /// Showing the menu and waiting for a menu number.
    PromptingSelection,
    /// A raw menu-number answer waiting to be checked.
    Validating(String),
    /// A valid item waiting for its quantity.
    PromptingQuantity(MenuEntry),
    /// A finished line waiting to be added to the order.
    Appending(LineItem),
    /// Asking whether to keep ordering.
    PromptingContinue,
    /// The customer is done; the total is fixed.
    Terminated,
}

/// The result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedOrder {
    pub order: Order,
    /// Computed once, when the session terminated.
    pub total: Money,
}

impl CompletedOrder {
    pub fn receipt(&self) -> Receipt {
        Receipt::new(&self.order, self.total)
    }
}

/// One customer's ordering session over a menu.
pub struct OrderSession<'m, C> {
    menu: &'m MenuIndex,
    console: C,
    restaurant: String,
    state: SessionState,
    order: Order,
    total: Option<Money>,
}

impl<'m, C: Console> OrderSession<'m, C> {
    /// Creates a session. Nothing is written until the first [`step`](Self::step).
    pub fn new(menu: &'m MenuIndex, console: C, restaurant: impl Into<String>) -> Self {
        OrderSession {
            menu,
            console,
            restaurant: restaurant.into(),
            state: SessionState::Welcoming,
            order: Order::new(),
            total: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Lines accepted so far.
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// The final total, once terminated.
    pub fn total(&self) -> Option<Money> {
        self.total
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Performs exactly one transition and returns the new state.
    ///
    /// Stepping a terminated session does nothing. A step that fails leaves
    /// the session in the state it had before the call.
    pub fn step(&mut self) -> Result<&SessionState, SessionError> {
        let current = mem::replace(&mut self.state, SessionState::Terminated);
        match self.transition(&current) {
            Ok(next) => self.state = next,
            Err(err) => {
                self.state = current;
                return Err(err);
            }
        }
        Ok(&self.state)
    }

    /// Steps until the customer is done.
    pub fn run(mut self) -> Result<CompletedOrder, SessionError> {
        while !self.is_terminated() {
            self.step()?;
        }

        // terminate() always sets the total
        let total = self.total.unwrap_or_else(|| self.order.total());
        Ok(CompletedOrder {
            order: self.order,
            total,
        })
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    fn transition(&mut self, current: &SessionState) -> Result<SessionState, SessionError> {
        match current {
            SessionState::Welcoming => {
                info!(restaurant = %self.restaurant, menu_items = self.menu.len(), "Ordering session started");
                self.console
                    .write_line(&format!("Welcome to the {}.", self.restaurant))?;
                Ok(SessionState::PromptingSelection)
            }
            SessionState::PromptingSelection => self.prompt_selection(),
            SessionState::Validating(raw) => self.validate(raw),
            SessionState::PromptingQuantity(entry) => self.prompt_quantity(entry),
            SessionState::Appending(line) => {
                debug!(item = %line.name(), quantity = line.quantity(), "Line item appended");
                self.order.push(line.clone());
                Ok(SessionState::PromptingContinue)
            }
            SessionState::PromptingContinue => self.prompt_continue(),
            SessionState::Terminated => Ok(SessionState::Terminated),
        }
    }

    fn prompt_selection(&mut self) -> Result<SessionState, SessionError> {
        self.console.write_line(ORDER_PROMPT)?;
        for line in menu_lines(self.menu) {
            self.console.write_line(&line)?;
        }

        match self.console.prompt(SELECTION_PROMPT)? {
            Some(raw) => Ok(SessionState::Validating(raw)),
            None => {
                debug!("End of input at menu selection");
                self.terminate()
            }
        }
    }

    fn validate(&mut self, raw: &str) -> Result<SessionState, SessionError> {
        match parse_selection(raw, self.menu) {
            Ok(entry) => {
                debug!(index = entry.index, item = %entry.display_name, "Menu selection accepted");
                Ok(SessionState::PromptingQuantity(entry.clone()))
            }
            Err(err) => {
                debug!(input = %err.input(), error = ?err, "Menu selection rejected");
                self.console.write_line(&err.to_string())?;
                if let SelectionError::NotAnOption { input } = &err {
                    // echo the number as read: "007" comes back as "7"
                    let shown = input
                        .parse::<usize>()
                        .map_or_else(|_| input.clone(), |number| number.to_string());
                    self.console
                        .write_line(&format!("{}, {}", shown, NO_SELECTION_NOTICE))?;
                }
                Ok(SessionState::PromptingContinue)
            }
        }
    }

    fn prompt_quantity(&mut self, entry: &MenuEntry) -> Result<SessionState, SessionError> {
        self.console.write_line(&format!(
            "What quantity of {} would you like?",
            entry.display_name
        ))?;
        // the hint is a full line; the answer goes on the next one
        self.console.write_line(QUANTITY_HINT)?;
        let answer = self.console.read_line()?.unwrap_or_default();

        let quantity = parse_quantity(&answer);
        if quantity.is_defaulted() {
            debug!(input = %answer, outcome = ?quantity, "Quantity defaulted");
        }

        Ok(SessionState::Appending(LineItem::from_entry(entry, quantity)))
    }

    fn prompt_continue(&mut self) -> Result<SessionState, SessionError> {
        match self.console.prompt(CONTINUE_PROMPT)? {
            Some(answer) if !wants_to_stop(&answer) => Ok(SessionState::PromptingSelection),
            Some(_) => self.terminate(),
            None => {
                debug!("End of input at keep-ordering prompt");
                self.terminate()
            }
        }
    }

    fn terminate(&mut self) -> Result<SessionState, SessionError> {
        self.console.write_line(FAREWELL)?;

        let total = self.order.total();
        self.total = Some(total);
        info!(
            lines = self.order.len(),
            units = self.order.total_quantity(),
            total = %total,
            "Ordering session finished"
        );

        Ok(SessionState::Terminated)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::console::ScriptedConsole;
    use std::io;

    fn burrito_menu() -> MenuIndex {
        let catalog = Catalog::builder()
            .category("Burrito", [("Chicken", Money::from_cents(449))])
            .build()
            .unwrap();
        MenuIndex::build(&catalog)
    }

    #[test]
    fn test_step_walks_the_happy_path() {
        let menu = burrito_menu();
        let mut console = ScriptedConsole::new(["1", "2", "n"]);
        let mut session = OrderSession::new(&menu, &mut console, "Test Kitchen");

        assert_eq!(session.step().unwrap(), &SessionState::PromptingSelection);
        assert_eq!(session.step().unwrap(), &SessionState::Validating("1".to_string()));
        assert!(matches!(session.step().unwrap(), SessionState::PromptingQuantity(e) if e.index == 1));
        assert!(matches!(session.step().unwrap(), SessionState::Appending(l) if l.quantity() == 2));
        assert!(session.order().is_empty());
        assert_eq!(session.step().unwrap(), &SessionState::PromptingContinue);
        assert_eq!(session.order().len(), 1);
        assert_eq!(session.total(), None);
        assert_eq!(session.step().unwrap(), &SessionState::Terminated);
        assert_eq!(session.total(), Some(Money::from_cents(898)));

        // terminated sessions stay put
        assert_eq!(session.step().unwrap(), &SessionState::Terminated);
    }

    #[test]
    fn test_invalid_selection_skips_quantity() {
        let menu = burrito_menu();
        let mut console = ScriptedConsole::new(["abc", "n"]);
        let mut session = OrderSession::new(&menu, &mut console, "Test Kitchen");

        session.step().unwrap();
        session.step().unwrap();
        assert_eq!(session.step().unwrap(), &SessionState::PromptingContinue);
        assert_eq!(session.step().unwrap(), &SessionState::Terminated);
        assert!(session.order().is_empty());
        drop(session);

        assert!(console.transcript().iter().any(|l| l == "abc was not a menu option."));
    }

    #[test]
    fn test_not_an_option_prints_both_notices() {
        let menu = burrito_menu();
        let mut console = ScriptedConsole::new(["99", "n"]);
        let completed = OrderSession::new(&menu, &mut console, "Test Kitchen")
            .run()
            .unwrap();

        assert!(completed.order.is_empty());
        let transcript = console.transcript();
        let at = transcript
            .iter()
            .position(|l| l == "Sorry, that number isn't an option.")
            .unwrap();
        assert_eq!(transcript[at + 1], "99, A menu option hasn't been selected");
    }

    #[test]
    fn test_not_an_option_echoes_the_parsed_number() {
        let menu = burrito_menu();
        let mut console = ScriptedConsole::new(["007", "n"]);
        OrderSession::new(&menu, &mut console, "Test Kitchen")
            .run()
            .unwrap();

        assert!(console
            .transcript()
            .iter()
            .any(|l| l == "7, A menu option hasn't been selected"));
    }

    #[test]
    fn test_large_explicit_quantity_is_kept() {
        let menu = burrito_menu();
        let completed = OrderSession::new(&menu, ScriptedConsole::new(["1", "1000", "n"]), "K")
            .run()
            .unwrap();

        assert_eq!(completed.order.lines()[0].quantity(), 1000);
        assert_eq!(completed.total, Money::from_cents(449 * 1000));
        assert_eq!(completed.total.to_string(), "$4490.00");
    }

    #[test]
    fn test_transcript_order() {
        let menu = burrito_menu();
        let mut console = ScriptedConsole::new(["1", "xyz", "N"]);
        OrderSession::new(&menu, &mut console, "Generic Take Out Restaurant")
            .run()
            .unwrap();

        let expected = [
            "Welcome to the Generic Take Out Restaurant.",
            ORDER_PROMPT,
            "--------------------------------------------------",
            "Item # | Item name                        | Price",
            "-------|----------------------------------|-------",
            "1      | Burrito - Chicken                | $4.49",
            SELECTION_PROMPT,
            "What quantity of Burrito - Chicken would you like?",
            QUANTITY_HINT,
            CONTINUE_PROMPT,
            FAREWELL,
        ];
        assert_eq!(console.transcript(), expected);
    }

    #[test]
    fn test_menu_is_redisplayed_every_round() {
        let menu = burrito_menu();
        let mut console = ScriptedConsole::new(["1", "1", "", "1", "1", "n"]);
        let completed = OrderSession::new(&menu, &mut console, "Test Kitchen")
            .run()
            .unwrap();

        assert_eq!(completed.order.len(), 2);
        let shown = console
            .transcript()
            .iter()
            .filter(|l| l.as_str() == ORDER_PROMPT)
            .count();
        assert_eq!(shown, 2);
    }

    #[test]
    fn test_end_of_input_terminates() {
        let menu = burrito_menu();

        // EOF at the very first prompt
        let completed = OrderSession::new(&menu, ScriptedConsole::new(Vec::<String>::new()), "K")
            .run()
            .unwrap();
        assert!(completed.order.is_empty());
        assert!(completed.total.is_zero());

        // EOF at the quantity prompt still orders one
        let completed = OrderSession::new(&menu, ScriptedConsole::new(["1"]), "K")
            .run()
            .unwrap();
        assert_eq!(completed.order.len(), 1);
        assert_eq!(completed.order.lines()[0].quantity(), 1);
        assert_eq!(completed.total.cents(), 449);
    }

    struct BrokenConsole;

    impl Console for BrokenConsole {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::Other, "stdin closed"))
        }

        fn write_line(&mut self, _line: &str) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_failure_is_reported() {
        let menu = burrito_menu();
        let err = OrderSession::new(&menu, BrokenConsole, "K").run().unwrap_err();
        assert!(matches!(err, SessionError::Console(_)));
    }

    /// Fails the next read once, then replays its script.
    struct FlakyConsole {
        inner: ScriptedConsole,
        fail_next_read: bool,
    }

    impl Console for FlakyConsole {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            if mem::take(&mut self.fail_next_read) {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "hiccup"));
            }
            self.inner.read_line()
        }

        fn write_line(&mut self, line: &str) -> io::Result<()> {
            self.inner.write_line(line)
        }
    }

    #[test]
    fn test_failed_step_keeps_the_state() {
        let menu = burrito_menu();
        let console = FlakyConsole {
            inner: ScriptedConsole::new(["1", "3", "n"]),
            fail_next_read: false,
        };
        let mut session = OrderSession::new(&menu, console, "K");

        session.step().unwrap();
        session.step().unwrap();
        let waiting = session.step().unwrap().clone();
        assert!(matches!(&waiting, SessionState::PromptingQuantity(e) if e.index == 1));

        session.console.fail_next_read = true;
        assert!(matches!(session.step(), Err(SessionError::Console(_))));
        assert_eq!(session.state(), &waiting);
        assert!(!session.is_terminated());
        assert_eq!(session.total(), None);

        // retrying picks up where it left off
        let completed = session.run().unwrap();
        assert_eq!(completed.order.lines()[0].quantity(), 3);
        assert_eq!(completed.total.cents(), 449 * 3);
    }
}
