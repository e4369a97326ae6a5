use std::fmt;

/// Errors from wide-integer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WideIntError {
    /// Division or remainder with a zero divisor.
    DivisionByZero,
    /// Numeral base outside the supported `[2, 36]` range.
    InvalidBase(u32),
    /// A character that is not a digit of the requested base.
    InvalidDigit(char),
    /// An empty numeral string.
    InvalidFormat,
    /// An operand outside an operation's domain, e.g. `log2` of zero or a
    /// negative upper bound for random sampling.
    InvalidOperand(&'static str),
    /// A bit width that is zero or not a multiple of 8.
    InvalidWidth(usize),
}

impl fmt::Display for WideIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WideIntError::DivisionByZero => write!(f, "division by zero"),
            WideIntError::InvalidBase(base) => write!(f, "invalid base {base}"),
            WideIntError::InvalidDigit(ch) => write!(f, "invalid digit {ch:?}"),
            WideIntError::InvalidFormat => write!(f, "invalid numeral string"),
            WideIntError::InvalidOperand(what) => write!(f, "invalid operand: {what}"),
            WideIntError::InvalidWidth(bits) => {
                write!(f, "invalid width {bits} (must be a positive multiple of 8)")
            }
        }
    }
}

impl std::error::Error for WideIntError {}
