use contracts::domain::webhook::{WebhookDraft, WebhookId};
use contracts::resource::{ResourceDraft, ResourceId, ResourceKind};
use leptos::prelude::*;

use crate::shared::components::FeedbackBanner;
use crate::shared::session::Session;
use crate::shared::sync::MutationCoordinator;
use crate::shared::transport::HttpTransport;

const DEFAULT_EVENTS: &str = "product.created,product.updated";

fn parse_event_types(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn WebhooksPage() -> impl IntoView {
    let session = Session::use_session();
    session.clear_feedback();
    let coordinator = MutationCoordinator::new(HttpTransport, session);

    let (url, set_url) = signal(String::new());
    let (events, set_events) = signal(DEFAULT_EVENTS.to_string());
    let (enabled, set_enabled) = signal(true);
    let (busy, set_busy) = signal(false);

    let webhooks = move || session.store.with(|s| s.webhooks.list().to_vec());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = coordinator.refresh(ResourceKind::Webhook).await {
                session.report_error(e.user_message());
            }
        });
    };

    let handle_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = WebhookDraft {
            url: url.get_untracked().trim().to_string(),
            event_types: parse_event_types(&events.get_untracked()),
            enabled: enabled.get_untracked(),
        };
        set_busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            if coordinator.create(ResourceDraft::Webhook(draft)).await.is_ok() {
                set_url.set(String::new());
                set_events.set(DEFAULT_EVENTS.to_string());
                set_enabled.set(true);
            }
            set_busy.set(false);
        });
    };

    let handle_delete = move |id: WebhookId| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let _ = coordinator
                .delete(ResourceKind::Webhook, ResourceId::from(id))
                .await;
        });
    };

    fetch();

    view! {
        <div class="page">
            <h2>"Webhooks"</h2>
            <FeedbackBanner />

            <form on:submit=handle_create>
                <input
                    type="text"
                    placeholder="URL (e.g., http://example.com/webhook)"
                    prop:value=url
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Events (comma-separated)"
                    prop:value=events
                    on:input=move |ev| set_events.set(event_target_value(&ev))
                />
                <label>
                    <input
                        type="checkbox"
                        prop:checked=enabled
                        on:change=move |ev| set_enabled.set(event_target_checked(&ev))
                    />
                    "Enabled"
                </label>
                <button type="submit" disabled=busy>"Create"</button>
            </form>

            <button on:click=move |_| fetch()>"Refresh"</button>
            <ul class="resource-list">
                {move || webhooks().into_iter().map(|w| {
                    let id = w.id;
                    let last_response = w
                        .last_response_status
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "never".to_string());
                    let state = if w.enabled { "enabled" } else { "disabled" };
                    view! {
                        <li>
                            <strong>{w.url.clone()}</strong>
                            <br />
                            "Events: " {w.event_types.join(", ")}
                            <br />
                            "Status: " {state} " | Last response: " {last_response}
                            <button on:click=move |_| handle_delete(id)>"Delete"</button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
