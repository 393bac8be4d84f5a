/// Calculator errors.
///
/// Defines the failures a single iteration of the calculator loop can run
/// into: operand text that is not a number, an operator symbol that has no
/// operation, and division by zero. None of them ends the session.
pub mod calc_error;

pub use calc_error::CalcError;
