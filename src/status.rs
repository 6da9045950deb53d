use serde::Serialize;
use std::fmt;

/// How a [status](Status) message should be presented.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Plain information.
    Info,
    /// A rejected intent or a situation that needs attention.
    Warning,
    /// Asks a player to act.
    Highlight,
    /// A successful start or a new winner.
    Success,
    /// The round was lost.
    GameOver,
    /// Somebody won.
    Win,
    /// A wrong guess in the find-the-double round.
    Wrong,
}

/// A human readable status message with a [severity](Severity).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Status {
    /// The text shown to the players.
    pub message: String,
    /// How the text should be presented.
    pub severity: Severity,
}

impl Status {
    /// A status with the given severity.
    pub fn new(message: impl Into<String>, severity: Severity) -> Status {
        Status {
            message: message.into(),
            severity,
        }
    }

    /// A [Severity::Info] status.
    pub fn info(message: impl Into<String>) -> Status {
        Status::new(message, Severity::Info)
    }

    /// A [Severity::Warning] status.
    pub fn warning(message: impl Into<String>) -> Status {
        Status::new(message, Severity::Warning)
    }

    /// A [Severity::Highlight] status.
    pub fn highlight(message: impl Into<String>) -> Status {
        Status::new(message, Severity::Highlight)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// # Returns
///
/// The english ordinal of `n` for announcing winners: `first` to `fourth`, then `5th`, `6th`, ...
pub fn ordinal(n: usize) -> String {
    match n {
        1 => "first".to_owned(),
        2 => "second".to_owned(),
        3 => "third".to_owned(),
        4 => "fourth".to_owned(),
        _ => format!("{}th", n),
    }
}
