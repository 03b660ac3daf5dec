//! Asynchronous task handles and polling status.

use crate::{Error, ErrorContext};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned id of a submitted job; used to poll its status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId(s.to_string())
    }
}

/// Id of a finished run; used to fetch its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RunId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(RunId).map_err(|e| {
            Error::validation_with_context(
                format!("run id '{}' is not numeric: {}", s, e),
                ErrorContext::new().with_field_path("run_id"),
            )
        })
    }
}

/// Returned by job submission endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskHandle {
    pub task_id: TaskId,
}

/// State of an asynchronous job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "TaskStatusWire")]
pub enum TaskStatus {
    Pending,
    /// The job finished; fetch its output with `run_id`.
    Success { run_id: Option<RunId> },
    Error { reason: String },
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskStatus::Pending)
    }
}

#[derive(Deserialize)]
struct TaskStatusWire {
    status: String,
    #[serde(default)]
    run_id: Option<RunId>,
    #[serde(default)]
    exception_reason: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl From<TaskStatusWire> for TaskStatus {
    fn from(wire: TaskStatusWire) -> Self {
        let detail = wire.exception_reason.or(wire.message);
        match wire.status.to_ascii_uppercase().as_str() {
            "PENDING" => TaskStatus::Pending,
            "SUCCESS" => TaskStatus::Success {
                run_id: wire.run_id,
            },
            "ERROR" => TaskStatus::Error {
                reason: detail.unwrap_or_else(|| "task failed".to_string()),
            },
            "TIMEOUT" => TaskStatus::Error {
                reason: detail.unwrap_or_else(|| "task timed out".to_string()),
            },
            "PAYMENT_REQUIRED" => TaskStatus::Error {
                reason: detail.unwrap_or_else(|| "payment required".to_string()),
            },
            other => TaskStatus::Error {
                reason: format!("unrecognized task status '{}'", other),
            },
        }
    }
}

/// Where a finished TTS run's audio can be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLocator {
    Url(String),
    Embedded(Bytes),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> TaskStatus {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn wire_statuses_map_to_variants() {
        assert_eq!(decode(r#"{"status": "PENDING"}"#), TaskStatus::Pending);
        assert_eq!(
            decode(r#"{"status": "SUCCESS", "run_id": 42}"#),
            TaskStatus::Success {
                run_id: Some(RunId(42))
            }
        );
        assert_eq!(
            decode(r#"{"status": "ERROR", "exception_reason": "bad video"}"#),
            TaskStatus::Error {
                reason: "bad video".to_string()
            }
        );
        assert_eq!(
            decode(r#"{"status": "TIMEOUT", "run_id": null}"#),
            TaskStatus::Error {
                reason: "task timed out".to_string()
            }
        );
        assert!(matches!(
            decode(r#"{"status": "PAYMENT_REQUIRED"}"#),
            TaskStatus::Error { .. }
        ));
    }

    #[test]
    fn unknown_status_is_terminal_error() {
        let status = decode(r#"{"status": "EXPLODED"}"#);
        assert!(status.is_terminal());
        assert_eq!(
            status,
            TaskStatus::Error {
                reason: "unrecognized task status 'EXPLODED'".to_string()
            }
        );
        assert!(!TaskStatus::Pending.is_terminal());
    }

    #[test]
    fn run_id_parses_from_task_id_text() {
        assert_eq!("123".parse::<RunId>().unwrap(), RunId(123));
        let err = "abc".parse::<RunId>().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }
}
