//! The four binary operations behind the operator keys.

use crate::error::{CalcError, Result};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Apply `lhs <op> rhs`.
    ///
    /// Dividing by zero (either sign) and any non-finite result are errors,
    /// so the display never has to show `inf` or `NaN`.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        let result = match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                lhs / rhs
            }
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }

    /// Glyph shown on the keypad.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Accepts the keypad glyphs and their ASCII spellings.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operation::Add),
            '-' | '−' => Some(Operation::Subtract),
            '*' | '×' | 'x' => Some(Operation::Multiply),
            '/' | '÷' => Some(Operation::Divide),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operation::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operation::Subtract.apply(5.0, 8.0), Ok(-3.0));
        assert_eq!(Operation::Multiply.apply(2.5, 4.0), Ok(10.0));
        assert_eq!(Operation::Divide.apply(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operation::Divide.apply(1.0, 0.0), Err(CalcError::DivideByZero));
        assert_eq!(Operation::Divide.apply(1.0, -0.0), Err(CalcError::DivideByZero));
        assert_eq!(Operation::Divide.apply(0.0, 0.0), Err(CalcError::DivideByZero));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(Operation::Multiply.apply(f64::MAX, 10.0), Err(CalcError::Overflow));
        assert_eq!(Operation::Add.apply(f64::MAX, f64::MAX), Err(CalcError::Overflow));
    }

    #[test]
    fn test_symbols_round_trip() {
        for op in Operation::ALL {
            let glyph = op.symbol().chars().next().unwrap();
            assert_eq!(Operation::from_symbol(glyph), Some(op));
        }
        assert_eq!(Operation::from_symbol('*'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('-'), Some(Operation::Subtract));
        assert_eq!(Operation::from_symbol('='), None);
    }
}
