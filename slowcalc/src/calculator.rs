//! Calculator state machine behind the keypad.
//!
//! Evaluation is strictly left to right with two operands: an operator key
//! captures the display as the left operand, `=` applies it to whatever
//! has been typed since. The display text is the only working buffer.

use crate::error::{CalcError, Result};
use crate::format::{format_result, parse_operand};
use crate::keypad::Button;
use crate::operation::Operation;

/// Text shown after a failed calculation. Only `clear` leaves this state.
pub const ERROR_TEXT: &str = "ERROR";

const INITIAL_DISPLAY: &str = "0";

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    /// Left operand captured by the last operator key.
    cache: Option<f64>,
    pending: Option<Operation>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_owned(),
            cache: None,
            pending: None,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn cache(&self) -> Option<f64> {
        self.cache
    }

    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_TEXT
    }

    /// An operator was just pressed and nothing has been typed since.
    pub fn awaiting_operand(&self) -> bool {
        self.pending.is_some() && self.display == INITIAL_DISPLAY
    }

    /// Route a keypad button to its handler.
    pub fn press(&mut self, button: Button) {
        tracing::trace!(?button, display = %self.display, "press");
        match button {
            Button::Digit(d) => self.input(char::from(b'0' + d.min(9))),
            Button::Decimal => self.input('.'),
            Button::Operator(op) => self.operator(op),
            Button::Equals => self.equals(),
            Button::Delete => self.delete(),
            Button::Clear => self.clear(),
        }
    }

    /// Digit or decimal point.
    ///
    /// A lone `0` is replaced (`.` turns it into `0.`); otherwise the symbol
    /// is appended as typed. Repeated points are accepted here and rejected
    /// when the number is next parsed.
    pub fn input(&mut self, symbol: char) {
        if !(symbol.is_ascii_digit() || symbol == '.') {
            tracing::trace!(%symbol, "ignoring non-numeric input");
            return;
        }
        if self.display == INITIAL_DISPLAY {
            self.display = if symbol == '.' { "0.".to_owned() } else { symbol.to_string() };
        } else {
            self.display.push(symbol);
        }
    }

    pub fn operator(&mut self, op: Operation) {
        match parse_operand(&self.display) {
            Ok(value) => {
                self.cache = Some(value);
                self.pending = Some(op);
                self.display = INITIAL_DISPLAY.to_owned();
            }
            Err(e) => self.fail(e),
        }
    }

    /// Apply the pending operation to the cached value and the display.
    ///
    /// Cache and pending operation survive, so a repeated `=` re-applies the
    /// operation with the previous result as the right operand, and typing a
    /// digit extends the result.
    pub fn equals(&mut self) {
        let (Some(lhs), Some(op)) = (self.cache, self.pending) else {
            return;
        };
        match self.evaluate(lhs, op) {
            Ok(result) => {
                tracing::debug!(lhs, ?op, result, "evaluated");
                self.display = format_result(result);
            }
            Err(e) => self.fail(e),
        }
    }

    fn evaluate(&self, lhs: f64, op: Operation) -> Result<f64> {
        let rhs = parse_operand(&self.display)?;
        op.apply(lhs, rhs)
    }

    /// Drop the last character; a single character collapses to `0`.
    pub fn delete(&mut self) {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else if self.display != INITIAL_DISPLAY {
            self.display = INITIAL_DISPLAY.to_owned();
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn fail(&mut self, error: CalcError) {
        tracing::debug!(%error, display = %self.display, "calculation failed");
        self.clear();
        self.display = ERROR_TEXT.to_owned();
    }
}
