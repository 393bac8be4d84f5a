use crate::error::CalcError;

/// Result type used by the arithmetic layer.
///
/// Every operation either yields a number or the `CalcError` describing why
/// it could not.
pub type CalcResult<T> = Result<T, CalcError>;

/// Represents one of the four binary arithmetic operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operation {
    /// Returns the symbol the user types to select this operation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Returns the lowercase name of the operation, used in log records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
            Self::Div => "divide",
        }
    }

    /// Applies the operation to two operands.
    ///
    /// Only division can fail, and only when the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use quadcalc::{error::CalcError, operation::core::Operation};
    ///
    /// assert_eq!(Operation::Mul.apply(1.5, 2.0), Ok(3.0));
    /// assert_eq!(Operation::Div.apply(4.0, 0.0), Err(CalcError::DivisionByZero));
    /// ```
    pub fn apply(self, x: f64, y: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(add(x, y)),
            Self::Sub => Ok(subtract(x, y)),
            Self::Mul => Ok(multiply(x, y)),
            Self::Div => divide(x, y),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Adds two operands.
#[must_use]
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// Subtracts `y` from `x`.
#[must_use]
pub fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

/// Multiplies two operands.
#[must_use]
pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

/// Divides `x` by `y`.
///
/// Both `0.0` and `-0.0` count as a zero divisor.
///
/// # Errors
/// Returns `CalcError::DivisionByZero` if `y` is zero.
///
/// # Example
/// ```
/// use quadcalc::{error::CalcError, operation::core::divide};
///
/// assert_eq!(divide(9.0, 3.0), Ok(3.0));
/// assert_eq!(divide(1.0, -0.0), Err(CalcError::DivisionByZero));
/// ```
pub fn divide(x: f64, y: f64) -> CalcResult<f64> {
    if y == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(x / y)
}
