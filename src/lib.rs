//! # quadcalc
//!
//! quadcalc is an interactive four-function calculator. It reads an operator
//! symbol and two operands per iteration, prints the result, and keeps going
//! until the quit token is entered.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use crate::session::{
    config::SessionConfig,
    core::{Session, SessionStats},
};

/// Provides the error type for a calculator iteration.
///
/// This module defines the failures an iteration can hit. Each error renders
/// as the exact diagnostic line the user sees and carries the offending input
/// for logging.
///
/// # Responsibilities
/// - Defines the error enum for every recoverable failure.
/// - Maps each failure to its user-facing message.
pub mod error;
/// Defines the arithmetic operations and their symbol table.
///
/// # Responsibilities
/// - Declares the `Operation` enum and the arithmetic it performs.
/// - Guards division against a zero divisor.
/// - Holds the fixed, immutable symbol-to-operation table.
pub mod operation;
/// Runs the interactive loop.
///
/// This module ties the operation table, operand parsing and result
/// formatting together behind a small state machine that reads from any
/// `BufRead` and writes to any `Write`.
///
/// # Responsibilities
/// - Prompts for and reads the operator and operands.
/// - Reports recoverable errors and moves on to the next iteration.
/// - Stops on the quit token or at end of input.
pub mod session;
/// Operand parsing and result formatting.
pub mod util;

/// Runs a full calculator session over the given streams.
///
/// The session reads until the quit token is entered or the input ends, and
/// returns the counters it collected.
///
/// # Errors
/// Returns an error if reading the input or writing the output fails. Bad
/// operands, unknown operators and division by zero are reported on the
/// output stream and are not errors here.
///
/// # Examples
/// ```
/// use quadcalc::{run_session, session::config::SessionConfig};
///
/// let input = "/\n4\n0\n%\nq\n".as_bytes();
/// let mut output = Vec::new();
///
/// let stats = run_session(input, &mut output, SessionConfig::default().without_prompts()).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "Cannot divide by zero\nInvalid operation\n");
/// assert_eq!(stats.rejected, 2);
/// ```
pub fn run_session<R: BufRead, W: Write>(input: R,
                                         output: W,
                                         config: SessionConfig)
                                         -> io::Result<SessionStats> {
    Session::new(input, output, config).run()
}
