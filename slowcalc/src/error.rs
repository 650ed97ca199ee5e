use thiserror::Error;

/// Why a calculation failed. Every variant puts the calculator into the
/// error state; the distinction only shows up in logs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("not a number: {text:?}")]
    Parse { text: String },
    #[error("division by zero")]
    DivideByZero,
    #[error("result out of range")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, CalcError>;
