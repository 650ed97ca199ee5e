//! SlowCalc - a four-function calculator for the Slow Computer
//!
//! [`Calculator`] holds the display text, the cached left operand and the
//! pending operation; [`app::SlowCalcApp`] puts it in an eframe window.

pub mod app;
pub mod calculator;
pub mod config;
pub mod error;
pub mod format;
pub mod keypad;
pub mod operation;

pub use calculator::{Calculator, ERROR_TEXT};
pub use error::CalcError;
pub use keypad::Button;
pub use operation::Operation;
