use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::components::FeedbackBanner;
use crate::shared::job_tracker::JobTracker;
use crate::shared::session::Session;
use crate::shared::transport::HttpTransport;

#[component]
#[allow(non_snake_case)]
pub fn UploadPage() -> impl IntoView {
    let session = Session::use_session();
    session.clear_feedback();
    let tracker = JobTracker::new(HttpTransport, session);

    // web_sys::File is not Send, so the picked file lives in local storage
    let file = RwSignal::new_local(Option::<web_sys::File>::None);
    let (busy, set_busy) = signal(false);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let picked = input.and_then(|input| input.files()).and_then(|l| l.get(0));
        file.set(picked);
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(picked) = file.get_untracked() else {
            return;
        };
        set_busy.set(true);
        session.report_success("Uploading...");
        wasm_bindgen_futures::spawn_local(async move {
            match tracker.submit_upload(picked).await {
                Ok(job_id) => {
                    session.report_success(format!("Uploaded. job_id: {}", job_id));
                    // seed the jobs list with the fresh job
                    if let Err(e) = tracker.observe(job_id).await {
                        log::warn!("could not fetch the new job: {}", e);
                    }
                }
                Err(e) => session.report_error(e.user_message()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page">
            <h2>"Upload CSV"</h2>
            <FeedbackBanner />

            <form on:submit=handle_submit>
                <input type="file" accept=".csv" on:change=handle_file_select />
                <button
                    type="submit"
                    disabled=move || busy.get() || file.with(|f| f.is_none())
                >
                    "Upload"
                </button>
            </form>
        </div>
    }
}
