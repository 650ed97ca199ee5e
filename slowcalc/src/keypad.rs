//! Keypad buttons, their grid layout and keyboard shortcuts.

use egui::Key;

use crate::operation::Operation;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Button {
    /// 0..=9
    Digit(u8),
    Decimal,
    Operator(Operation),
    Equals,
    Delete,
    Clear,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Digit(d) => DIGIT_LABELS[usize::from(d.min(9))],
            Button::Decimal => ".",
            Button::Operator(op) => op.symbol(),
            Button::Equals => "=",
            Button::Delete => "DEL",
            Button::Clear => "C",
        }
    }
}

/// Grid column count; every row's spans add up to this.
pub const COLUMNS: usize = 4;

/// Keypad rows as (button, column span).
pub const LAYOUT: [&[(Button, usize)]; 5] = [
    &[
        (Button::Clear, 1),
        (Button::Delete, 1),
        (Button::Operator(Operation::Divide), 1),
        (Button::Operator(Operation::Multiply), 1),
    ],
    &[
        (Button::Digit(7), 1),
        (Button::Digit(8), 1),
        (Button::Digit(9), 1),
        (Button::Operator(Operation::Subtract), 1),
    ],
    &[
        (Button::Digit(4), 1),
        (Button::Digit(5), 1),
        (Button::Digit(6), 1),
        (Button::Operator(Operation::Add), 1),
    ],
    &[
        (Button::Digit(1), 1),
        (Button::Digit(2), 1),
        (Button::Digit(3), 1),
        (Button::Decimal, 1),
    ],
    &[(Button::Digit(0), 2), (Button::Equals, 2)],
];

/// Button for a typed character (`Event::Text`).
///
/// Characters come through text events so shifted symbols like `+` and `*`
/// work on any keyboard layout.
pub fn button_for_text(text: &str) -> Option<Button> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match c {
        '0'..='9' => Some(Button::Digit(c as u8 - b'0')),
        '.' | ',' => Some(Button::Decimal),
        '=' => Some(Button::Equals),
        'c' | 'C' => Some(Button::Clear),
        _ => Operation::from_symbol(c).map(Button::Operator),
    }
}

/// Button for a non-text key press.
pub fn button_for_key(key: Key) -> Option<Button> {
    match key {
        Key::Enter => Some(Button::Equals),
        Key::Backspace | Key::Delete => Some(Button::Delete),
        Key::Escape => Some(Button::Clear),
        _ => None,
    }
}
