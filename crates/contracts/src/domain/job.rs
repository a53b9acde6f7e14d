use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Import job identifier. The backend issues a UUID per upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of an import job. `queued` and `processing` are non-terminal;
/// `completed` and `failed` are terminal. The backend historically spells
/// the queued state `"pending"`, so that form is accepted on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[serde(alias = "pending")]
    Queued,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    /// No further transitions happen out of a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }
}

/// Server-side CSV import job. `processed_rows` is monotone and bounded
/// by `total_rows`; both counters start at zero while the job is queued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: JobId,
    pub status: JobStatus,
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub processed_rows: u64,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response of `POST /uploads`: the job created for the uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub job_id: JobId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn decodes_legacy_pending_spelling() {
        let job: Job = serde_json::from_str(
            r#"{"job_id": "c5a2d3f0-9f4e-4e6f-8a2b-1c3d5e7f9a0b", "status": "pending"}"#,
        )
        .unwrap();
        assert_eq!(job.status, JobStatus::Queued);
        assert_eq!(job.total_rows, 0);
        assert_eq!(job.processed_rows, 0);
    }

    #[test]
    fn status_round_trips_lowercase() {
        assert_eq!(
            serde_json::to_string(&JobStatus::Queued).unwrap(),
            r#""queued""#
        );
        assert_eq!(
            serde_json::from_str::<JobStatus>(r#""processing""#).unwrap(),
            JobStatus::Processing
        );
    }
}
