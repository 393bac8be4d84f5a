use std::io::{self, BufRead, Write};

use log::{debug, info, trace};

use crate::{
    error::CalcError,
    operation::{core::Operation, table::lookup_operation},
    session::config::SessionConfig,
    util::num::{format_number, parse_operand},
};

/// Prompt shown before reading the first operand.
pub const FIRST_OPERAND_PROMPT: &str = "Enter a number: ";
/// Prompt shown before reading the second operand.
pub const SECOND_OPERAND_PROMPT: &str = "Enter another number: ";

/// The states of the calculator loop.
///
/// `AwaitingOperator` is the initial state. A known operator moves the loop
/// to `AwaitingOperands`, which always returns to `AwaitingOperator` once a
/// result or diagnostic has been printed. The quit token (or end of input)
/// moves it to `Stopped`, which is terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// Waiting for an operator symbol or the quit token.
    AwaitingOperator,
    /// An operator was accepted; waiting for its two operands.
    AwaitingOperands(Operation),
    /// The session is over.
    Stopped,
}

/// Counters collected over a session.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Iterations that printed a numeric result.
    pub evaluated: usize,
    /// Iterations that printed a diagnostic instead.
    pub rejected:  usize,
}

/// Drives the calculator loop over a pair of streams.
///
/// ## Usage
///
/// `Session` owns its input and output so that the binary can hand it the
/// locked standard streams and tests can hand it byte buffers. Call
/// [`Session::run`] to loop until the session stops, or [`Session::step`] to
/// advance one transition at a time.
pub struct Session<R, W> {
    input:  R,
    output: W,
    config: SessionConfig,
    state:  State,
    stats:  SessionStats,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session in the `AwaitingOperator` state.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self { input,
               output,
               config,
               state: State::AwaitingOperator,
               stats: SessionStats::default() }
    }

    /// The current state of the loop.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Counters collected so far.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Consumes the session and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Performs a single state transition and returns the new state.
    ///
    /// Calling `step` on a stopped session does nothing.
    ///
    /// # Errors
    /// Returns an error only if reading from or writing to the console fails.
    /// Calculator errors are reported to the user and never returned.
    pub fn step(&mut self) -> io::Result<State> {
        let next = match self.state {
            State::AwaitingOperator => self.read_operator()?,
            State::AwaitingOperands(operation) => self.evaluate(operation)?,
            State::Stopped => State::Stopped,
        };

        trace!("transition {:?} -> {next:?}", self.state);
        self.state = next;
        Ok(next)
    }

    /// Runs the loop until the session stops.
    ///
    /// # Errors
    /// Returns an error if the console streams fail.
    ///
    /// # Example
    /// ```
    /// use quadcalc::session::{config::SessionConfig, core::Session};
    ///
    /// let input = "+\n2\n3\nq\n".as_bytes();
    /// let mut session = Session::new(input, Vec::new(), SessionConfig::default().without_prompts());
    ///
    /// let stats = session.run().unwrap();
    /// assert_eq!(stats.evaluated, 1);
    /// assert_eq!(session.into_output(), b"5.0\n");
    /// ```
    pub fn run(&mut self) -> io::Result<SessionStats> {
        while self.step()? != State::Stopped {}

        info!("session finished: {} evaluated, {} rejected",
              self.stats.evaluated,
              self.stats.rejected);
        Ok(self.stats)
    }

    fn read_operator(&mut self) -> io::Result<State> {
        let prompt = self.config.operator_prompt();
        let Some(line) = self.read_line(&prompt)? else {
            return Ok(State::Stopped);
        };
        let symbol = line.trim();

        if symbol == self.config.quit_token {
            debug!("quit token entered");
            return Ok(State::Stopped);
        }

        if let Some(operation) = lookup_operation(symbol) {
            debug!("operator '{symbol}' selects {}", operation.name());
            Ok(State::AwaitingOperands(operation))
        } else {
            self.reject(&CalcError::UnknownOperator { symbol: symbol.to_string() })?;
            Ok(State::AwaitingOperator)
        }
    }

    fn evaluate(&mut self, operation: Operation) -> io::Result<State> {
        let mut operands = [0.0; 2];

        for (slot, prompt) in operands.iter_mut()
                                      .zip([FIRST_OPERAND_PROMPT, SECOND_OPERAND_PROMPT])
        {
            let Some(text) = self.read_line(prompt)? else {
                return Ok(State::Stopped);
            };
            match parse_operand(&text) {
                Ok(value) => *slot = value,
                Err(e) => {
                    self.reject(&e)?;
                    return Ok(State::AwaitingOperator);
                },
            }
        }

        let [x, y] = operands;
        match operation.apply(x, y) {
            Ok(value) => {
                debug!("{} {x} {y} = {value}", operation.name());
                self.stats.evaluated += 1;
                self.emit(&format_number(value))?;
            },
            Err(e) => self.reject(&e)?,
        }

        Ok(State::AwaitingOperator)
    }

    /// Writes the prompt (if enabled) and reads one line.
    ///
    /// Returns `None` at end of input. Bytes that are not valid UTF-8 are
    /// replaced rather than treated as a console failure, so they surface as
    /// an ordinary parse or lookup error.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.config.prompts {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            debug!("end of input");
            if self.config.prompts {
                writeln!(self.output)?;
            }
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    fn reject(&mut self, error: &CalcError) -> io::Result<()> {
        debug!("iteration rejected ({}): {error:?}", error.kind());
        self.stats.rejected += 1;
        self.emit(&error.to_string())
    }

    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }
}
