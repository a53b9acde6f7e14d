use contracts::domain::job::JobId;
use contracts::resource::ResourceKind;
use leptos::prelude::*;

use crate::shared::components::FeedbackBanner;
use crate::shared::job_tracker::JobTracker;
use crate::shared::session::Session;
use crate::shared::sync::MutationCoordinator;
use crate::shared::transport::HttpTransport;

// Caller policy for the optional polling loop; the tracker itself does
// not mandate any cadence.
const POLL_INTERVAL_MS: u32 = 1_000;
const POLL_CAP: u32 = 60;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn JobsPage() -> impl IntoView {
    let session = Session::use_session();
    session.clear_feedback();
    let coordinator = MutationCoordinator::new(HttpTransport, session);
    let tracker = JobTracker::new(HttpTransport, session);

    let jobs = move || session.store.with(|s| s.jobs.list().to_vec());
    let (tracking, set_tracking) = signal(Option::<JobId>::None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = coordinator.refresh(ResourceKind::Job).await {
                session.report_error(e.user_message());
            }
        });
    };

    let handle_check = move |job_id: JobId| {
        session.clear_feedback();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = tracker.observe(job_id).await {
                session.report_error(e.user_message());
            }
        });
    };

    let handle_track = move |job_id: JobId| {
        if tracking.get_untracked().is_some() {
            return;
        }
        session.clear_feedback();
        set_tracking.set(Some(job_id));
        wasm_bindgen_futures::spawn_local(async move {
            match tracker
                .poll_until_terminal(job_id, POLL_INTERVAL_MS, POLL_CAP)
                .await
            {
                Ok(job) if job.status.is_terminal() => {
                    session.report_success(format!("Job {}: {}", job_id, job.status.as_str()));
                }
                Ok(_) => {
                    session.report_error(format!("Job {} is still running", job_id));
                }
                Err(e) => session.report_error(e.user_message()),
            }
            set_tracking.set(None);
        });
    };

    fetch();

    view! {
        <div class="page">
            <h2>"Jobs"</h2>
            <FeedbackBanner />

            <button on:click=move |_| fetch()>"Refresh"</button>
            <ul class="resource-list">
                {move || jobs().into_iter().map(|job| {
                    let job_id = job.job_id;
                    let terminal = job.status.is_terminal();
                    let created = job.created_at.map(format_timestamp);
                    let failure = job
                        .error_message
                        .clone()
                        .filter(|_| job.status == contracts::domain::job::JobStatus::Failed);
                    view! {
                        <li>
                            <strong>{job_id.to_string()}</strong>
                            " — status: " {job.status.as_str()}
                            " — processed: " {job.processed_rows} "/" {job.total_rows}
                            {created.map(|c| view! { <span class="muted">" (" {c} ")"</span> })}
                            {failure.map(|msg| view! { <div class="job-error">{msg}</div> })}
                            <button on:click=move |_| handle_check(job_id)>"Check"</button>
                            <Show when=move || !terminal>
                                <button
                                    disabled=move || tracking.get().is_some()
                                    on:click=move |_| handle_track(job_id)
                                >
                                    {move || if tracking.get() == Some(job_id) { "Tracking..." } else { "Track" }}
                                </button>
                            </Show>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_timestamp;
    use chrono::TimeZone;

    #[test]
    fn timestamps_render_compact() {
        let dt = chrono::Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(dt), "2024-03-15 14:02:26");
    }
}
