//! Session configuration.

/// Default command that ends a session.
pub const DEFAULT_END_COMMAND: &str = "END";

/// Configuration for a [`crate::Session`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether command names are upper-cased before dispatch.
    ///
    /// Arguments are never case-folded.
    pub case_insensitive_commands: bool,

    /// Command name that ends the session, or `None` to run until input
    /// is exhausted.
    pub end_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_insensitive_commands: true,
            end_command: Some(DEFAULT_END_COMMAND.to_string()),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether command names are case-insensitive.
    #[must_use]
    pub fn case_insensitive_commands(mut self, value: bool) -> Self {
        self.case_insensitive_commands = value;
        self
    }

    /// Sets the command that ends the session.
    #[must_use]
    pub fn end_command(mut self, command: impl Into<String>) -> Self {
        self.end_command = Some(command.into());
        self
    }

    /// Disables the end command; the session runs until input ends.
    #[must_use]
    pub fn without_end_command(mut self) -> Self {
        self.end_command = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.case_insensitive_commands);
        assert_eq!(config.end_command.as_deref(), Some("END"));
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new()
            .case_insensitive_commands(false)
            .end_command("QUIT");

        assert!(!config.case_insensitive_commands);
        assert_eq!(config.end_command.as_deref(), Some("QUIT"));

        let config = config.without_end_command();
        assert!(config.end_command.is_none());
    }
}
