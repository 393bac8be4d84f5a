#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every recoverable failure of a single calculator iteration.
///
/// The `Display` output of each variant is exactly the diagnostic line shown
/// to the user. The carried text is only used for logging.
pub enum CalcError {
    /// An operand could not be parsed as a decimal number.
    MalformedNumber {
        /// The raw text the user entered.
        input: String,
    },
    /// The operator symbol is not in the operation table.
    UnknownOperator {
        /// The raw symbol the user entered.
        symbol: String,
    },
    /// The second operand of a division was zero.
    DivisionByZero,
}

impl CalcError {
    /// Short machine-friendly name of the error kind, used in log records.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedNumber { .. } => "malformed_number",
            Self::UnknownOperator { .. } => "unknown_operator",
            Self::DivisionByZero => "division_by_zero",
        }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber { .. } => write!(f, "Invalid input"),
            Self::UnknownOperator { .. } => write!(f, "Invalid operation"),
            Self::DivisionByZero => write!(f, "Cannot divide by zero"),
        }
    }
}

impl std::error::Error for CalcError {}
