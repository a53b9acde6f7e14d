//! Finite-state watcher over one import job.
//!
//! States: queued and processing are non-terminal, completed and failed
//! are terminal. Transitions happen only through explicit observations
//! (a fresh fetch of the job); nothing is inferred locally. Polling
//! cadence and cutoff are caller policy, not part of the tracker.

use contracts::domain::job::{Job, JobId, UploadReceipt};
use contracts::error::TransportError;
use contracts::resource::ResourceId;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::session::Session;
use crate::shared::transport::{Method, Payload, Transport};

/// Fold a fresh snapshot over the previous one. Within one tracking
/// session a terminal status is sticky and `processed_rows` never
/// regresses, whatever an out-of-order response claims.
pub fn merge_observation(prev: Option<&Job>, fresh: Job) -> Job {
    let Some(prev) = prev else { return fresh };
    if prev.status.is_terminal() && fresh.status != prev.status {
        return prev.clone();
    }
    let mut merged = fresh;
    if merged.processed_rows < prev.processed_rows {
        merged.processed_rows = prev.processed_rows;
    }
    merged
}

#[derive(Clone, Copy)]
pub struct JobTracker<T> {
    transport: T,
    session: Session,
}

impl<T: Transport> JobTracker<T> {
    pub fn new(transport: T, session: Session) -> Self {
        Self { transport, session }
    }

    /// Submit a CSV file; the backend answers with the job created for it.
    pub async fn submit_upload(&self, file: web_sys::File) -> Result<JobId, TransportError> {
        let value = self
            .transport
            .request(Method::Post, "/uploads", Some(Payload::File(file)))
            .await?;
        let receipt: UploadReceipt =
            serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))?;
        Ok(receipt.job_id)
    }

    /// Fetch the latest snapshot of one job and fold it into the store.
    /// Safe to call at any cadence; an unchanged snapshot is a no-op for
    /// the store revision.
    pub async fn observe(&self, job_id: JobId) -> Result<Job, TransportError> {
        let path = format!("/jobs/{}", job_id);
        let value = self.transport.request(Method::Get, &path, None).await?;
        let fresh: Job =
            serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))?;

        let prev = self
            .session
            .store
            .with_untracked(|s| s.jobs.get(&ResourceId::Job(job_id)).cloned());
        let merged = merge_observation(prev.as_ref(), fresh);
        self.session.store.update(|s| s.jobs.upsert(merged.clone()));
        Ok(merged)
    }

    /// Bounded polling loop. Stops at the first terminal snapshot, after
    /// `max_polls` observations, or on the first transport failure.
    pub async fn poll_until_terminal(
        &self,
        job_id: JobId,
        interval_ms: u32,
        max_polls: u32,
    ) -> Result<Job, TransportError> {
        let mut last = self.observe(job_id).await?;
        let mut polls = 1u32;
        while !last.status.is_terminal() && polls < max_polls {
            TimeoutFuture::new(interval_ms).await;
            last = self.observe(job_id).await?;
            polls += 1;
        }
        Ok(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::job::JobStatus;
    use contracts::resource::ResourceKind;
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use uuid::Uuid;

    fn job_id() -> JobId {
        JobId(Uuid::from_u128(7))
    }

    fn job(status: JobStatus, processed: u64) -> Job {
        Job {
            job_id: job_id(),
            status,
            total_rows: 100,
            processed_rows: processed,
            error_message: None,
            created_at: None,
        }
    }

    fn job_json(status: &str, processed: u64) -> Value {
        json!({
            "job_id": job_id().to_string(),
            "status": status,
            "total_rows": 100,
            "processed_rows": processed
        })
    }

    struct MockTransport {
        responses: RefCell<Vec<Result<Value, TransportError>>>,
    }

    impl Transport for &MockTransport {
        async fn request(
            &self,
            _method: Method,
            _path: &str,
            _body: Option<Payload>,
        ) -> Result<Value, TransportError> {
            self.responses.borrow_mut().remove(0)
        }
    }

    #[test]
    fn merge_keeps_processed_rows_monotone() {
        let prev = job(JobStatus::Processing, 60);
        let merged = merge_observation(Some(&prev), job(JobStatus::Processing, 40));
        assert_eq!(merged.processed_rows, 60);

        let merged = merge_observation(Some(&prev), job(JobStatus::Processing, 80));
        assert_eq!(merged.processed_rows, 80);
    }

    #[test]
    fn merge_never_leaves_a_terminal_state() {
        let prev = job(JobStatus::Completed, 100);
        let merged = merge_observation(Some(&prev), job(JobStatus::Processing, 50));
        assert_eq!(merged.status, JobStatus::Completed);
        assert_eq!(merged.processed_rows, 100);
    }

    #[test]
    fn first_observation_is_taken_as_is() {
        let fresh = job(JobStatus::Queued, 0);
        assert_eq!(merge_observation(None, fresh.clone()), fresh);
    }

    #[test]
    fn repeated_observation_is_idempotent() {
        let transport = MockTransport {
            responses: RefCell::new(vec![
                Ok(job_json("processing", 40)),
                Ok(job_json("processing", 40)),
            ]),
        };
        let session = Session::new();
        let tracker = JobTracker::new(&transport, session);

        let first = block_on(tracker.observe(job_id())).unwrap();
        let revision = session.store.with_untracked(|s| s.revision(ResourceKind::Job));
        let second = block_on(tracker.observe(job_id())).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            session.store.with_untracked(|s| s.revision(ResourceKind::Job)),
            revision
        );
    }

    #[test]
    fn observe_accepts_the_backends_pending_spelling() {
        let transport = MockTransport {
            responses: RefCell::new(vec![Ok(job_json("pending", 0))]),
        };
        let session = Session::new();
        let tracker = JobTracker::new(&transport, session);

        let seen = block_on(tracker.observe(job_id())).unwrap();
        assert_eq!(seen.status, JobStatus::Queued);
    }

    #[test]
    fn observed_regression_does_not_reach_the_store() {
        let transport = MockTransport {
            responses: RefCell::new(vec![
                Ok(job_json("processing", 60)),
                Ok(job_json("processing", 40)),
            ]),
        };
        let session = Session::new();
        let tracker = JobTracker::new(&transport, session);

        block_on(tracker.observe(job_id())).unwrap();
        block_on(tracker.observe(job_id())).unwrap();

        let stored = session
            .store
            .with_untracked(|s| s.jobs.get(&ResourceId::Job(job_id())).cloned())
            .unwrap();
        assert_eq!(stored.processed_rows, 60);
    }
}
