//! Outcome record returned by every convergence run.

use serde::Serialize;

/// Final status of a convergence run.
///
/// Dry-run reports `WouldSucceed`/`WouldFail` instead of asserting a state
/// that was never reached; `Neutral` (nothing to do) is the same in both
/// modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Neutral,
    Success,
    Failure,
    WouldSucceed,
    WouldFail,
}

/// Changed-state description: `old` is always empty, `new` is the alias that
/// was (or would be) added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Changes {
    pub old: String,
    pub new: String,
}

impl Changes {
    pub fn added(alias: &str) -> Self {
        Self {
            old: String::new(),
            new: alias.to_string(),
        }
    }
}

/// Result of one convergence run.
///
/// Produced exactly once per invocation; discovery and validation failures
/// are values here, never errors.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<Changes>,
    pub result: Status,
    pub comment: String,
}

impl Outcome {
    pub fn new(name: &str, result: Status, comment: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            changes: None,
            result,
            comment: comment.into(),
        }
    }

    pub fn with_changes(mut self, changes: Changes) -> Self {
        self.changes = Some(changes);
        self
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.result, Status::Failure | Status::WouldFail)
    }
}
