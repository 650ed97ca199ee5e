//! Property-based tests for the calculator controller.

use proptest::prelude::*;

use slowcalc::format::{format_result, round_to};
use slowcalc::{Button, Calculator, Operation, ERROR_TEXT};

fn type_text(calc: &mut Calculator, text: &str) {
    for c in text.chars() {
        calc.input(c);
    }
}

fn operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

fn button() -> impl Strategy<Value = Button> {
    prop_oneof![
        (0u8..=9).prop_map(Button::Digit),
        Just(Button::Decimal),
        operation().prop_map(Button::Operator),
        Just(Button::Equals),
        Just(Button::Delete),
        Just(Button::Clear),
    ]
}

/// A number as typed on the keypad: no leading zeros, optional fraction.
fn operand() -> impl Strategy<Value = String> {
    ("[1-9][0-9]{0,5}", prop::option::of("[0-9]{1,4}")).prop_map(|(int, frac)| match frac {
        Some(frac) => format!("{int}.{frac}"),
        None => int,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The first digit replaces the initial zero.
    #[test]
    fn first_digit_replaces_zero(d in 0u8..=9) {
        let mut calc = Calculator::new();
        calc.press(Button::Digit(d));
        prop_assert_eq!(calc.display(), d.to_string());
    }

    /// Delete undoes the last append.
    #[test]
    fn delete_undoes_append(text in operand(), d in 0u8..=9) {
        let mut calc = Calculator::new();
        type_text(&mut calc, &text);
        let before = calc.display().to_owned();
        calc.press(Button::Digit(d));
        calc.delete();
        prop_assert_eq!(calc.display(), before);
    }

    /// Clear always returns to the initial state.
    #[test]
    fn clear_always_resets(buttons in prop::collection::vec(button(), 0..30)) {
        let mut calc = Calculator::new();
        for b in buttons {
            calc.press(b);
        }
        calc.clear();
        prop_assert_eq!(calc, Calculator::new());
    }

    /// The display is never empty, whatever is pressed.
    #[test]
    fn display_never_empty(buttons in prop::collection::vec(button(), 0..40)) {
        let mut calc = Calculator::new();
        for b in buttons {
            calc.press(b);
            prop_assert!(!calc.display().is_empty());
        }
    }

    /// `a op b =` shows `a op b` rounded to ten places.
    #[test]
    fn arithmetic_matches_f64(a in operand(), b in operand(), op in operation()) {
        let mut calc = Calculator::new();
        type_text(&mut calc, &a);
        calc.operator(op);
        type_text(&mut calc, &b);
        calc.equals();

        let lhs: f64 = a.parse().unwrap();
        let rhs: f64 = b.parse().unwrap();
        let expected = match op {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        };
        prop_assert_eq!(calc.display(), format_result(expected));

        let shown: f64 = calc.display().parse().unwrap();
        prop_assert_eq!(shown, round_to(expected, 10) + 0.0);
    }

    /// Dividing anything by zero lands in the error state.
    #[test]
    fn divide_by_zero_errors(a in operand(), zeros in "0{1,3}(\\.0{0,2})?") {
        let mut calc = Calculator::new();
        type_text(&mut calc, &a);
        calc.operator(Operation::Divide);
        type_text(&mut calc, &zeros);
        calc.equals();
        prop_assert_eq!(calc.display(), ERROR_TEXT);
        prop_assert_eq!(calc.cache(), None);
        prop_assert_eq!(calc.pending(), None);
    }

    /// Operators and equals keep the error state.
    #[test]
    fn error_state_is_idempotent(ops in prop::collection::vec(operation(), 1..5)) {
        let mut calc = Calculator::new();
        calc.input('1');
        calc.operator(Operation::Divide);
        calc.equals();
        for op in ops {
            calc.operator(op);
            calc.equals();
            prop_assert_eq!(calc.display(), ERROR_TEXT);
        }
    }
}
