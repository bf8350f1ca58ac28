use std::{collections::BTreeMap, time::Duration};

/// Extra facts a command derives from its own output, e.g. the username
/// printed by `whoami`.
pub type Summary = BTreeMap<String, String>;

/// Why a command did not run to normal completion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    #[error("Command timed out (>{} seconds)", .0.as_secs())]
    Timeout(Duration),
    #[error("{program}: {reason}")]
    Launch { program: String, reason: String },
    #[error("Failed to wait for process: {0}")]
    Wait(String),
    #[error("{0}")]
    Directory(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The process ran and exited, possibly with a non-zero code.
    Completed {
        exit_status: i32,
        stdout: String,
        stderr: String,
    },
    /// The process never produced an exit status of its own.
    Failed { error: Failure },
}

/// The normalized result of one command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub command: String,
    pub status: Status,
    pub summary: Option<Summary>,
}

impl Outcome {
    pub fn completed(
        command: impl Into<String>,
        exit_status: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            status: Status::Completed {
                exit_status,
                stdout: stdout.into(),
                stderr: stderr.into(),
            },
            summary: None,
        }
    }

    pub fn failed(command: impl Into<String>, error: Failure) -> Self {
        Self {
            command: command.into(),
            status: Status::Failed { error },
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.status, Status::Completed { exit_status: 0, .. })
    }

    pub fn exit_status(&self) -> Option<i32> {
        match &self.status {
            Status::Completed { exit_status, .. } => Some(*exit_status),
            Status::Failed { .. } => None,
        }
    }

    pub fn stdout(&self) -> Option<&str> {
        match &self.status {
            Status::Completed { stdout, .. } => Some(stdout),
            Status::Failed { .. } => None,
        }
    }

    pub fn stderr(&self) -> Option<&str> {
        match &self.status {
            Status::Completed { stderr, .. } => Some(stderr),
            Status::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&Failure> {
        match &self.status {
            Status::Completed { .. } => None,
            Status::Failed { error } => Some(error),
        }
    }

    pub fn error_detail(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

/// Builds a one-entry summary.
pub fn summary(key: &str, value: impl Into<String>) -> Summary {
    let mut summary = Summary::new();
    summary.insert(key.to_string(), value.into());
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_zero_is_success() {
        let outcome = Outcome::completed("true", 0, "", "");
        assert!(outcome.succeeded());
        assert_eq!(outcome.exit_status(), Some(0));
        assert_eq!(outcome.error_detail(), None);
    }

    #[test]
    fn test_completed_non_zero_keeps_streams() {
        let outcome = Outcome::completed("false", 1, "out", "err");
        assert!(!outcome.succeeded());
        assert_eq!(outcome.exit_status(), Some(1));
        assert_eq!(outcome.stdout(), Some("out"));
        assert_eq!(outcome.stderr(), Some("err"));
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_failed_has_no_streams() {
        let outcome = Outcome::failed("sleep 31", Failure::Timeout(Duration::from_secs(30)));
        assert!(!outcome.succeeded());
        assert_eq!(outcome.exit_status(), None);
        assert_eq!(outcome.stdout(), None);
        assert_eq!(outcome.stderr(), None);
        assert_eq!(
            outcome.error_detail().as_deref(),
            Some("Command timed out (>30 seconds)")
        );
    }

    #[test]
    fn test_launch_failure_message() {
        let failure = Failure::Launch {
            program: "nope".to_string(),
            reason: "No such file or directory (os error 2)".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "nope: No such file or directory (os error 2)"
        );
    }

    #[test]
    fn test_with_summary() {
        let outcome = Outcome::completed("whoami", 0, "root\n", "")
            .with_summary(summary("username", "root"));
        let summary = outcome.summary.unwrap();
        assert_eq!(summary.get("username").map(String::as_str), Some("root"));
    }
}
