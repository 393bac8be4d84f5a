/// Quit token used when none is configured.
pub const DEFAULT_QUIT_TOKEN: &str = "q";

/// Runtime settings for a calculator session.
///
/// Built once before the loop starts; the session never changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Input that ends the session when entered in place of an operator.
    pub quit_token: String,
    /// Whether prompts are written before each read.
    pub prompts:    bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { quit_token: DEFAULT_QUIT_TOKEN.to_string(),
               prompts:    true, }
    }
}

impl SessionConfig {
    /// Replaces the quit token.
    ///
    /// Operator input is compared after trimming, so the token is trimmed
    /// too. A token that is empty after trimming makes a blank line end the
    /// session.
    ///
    /// # Example
    /// ```
    /// use quadcalc::session::config::SessionConfig;
    ///
    /// let config = SessionConfig::default().with_quit_token(" exit ");
    /// assert_eq!(config.quit_token, "exit");
    /// ```
    #[must_use]
    pub fn with_quit_token(mut self, token: &str) -> Self {
        self.quit_token = token.trim().to_string();
        self
    }

    /// Disables prompts, for piped input.
    #[must_use]
    pub const fn without_prompts(mut self) -> Self {
        self.prompts = false;
        self
    }

    /// The prompt shown before reading an operator symbol.
    #[must_use]
    pub fn operator_prompt(&self) -> String {
        format!("Enter an operation (+, -, *, / and {} for quit): ", self.quit_token)
    }
}
