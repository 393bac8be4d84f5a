/// Session configuration.
///
/// Holds the quit token and the prompt switch, both decided before the loop
/// starts.
pub mod config;

/// The calculator loop and its state machine.
///
/// Reads an operator, then two operands, prints the result or a diagnostic,
/// and repeats until the quit token is entered or the input ends.
pub mod core;
