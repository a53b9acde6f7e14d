use contracts::domain::product::{ProductDraft, ProductId};
use contracts::resource::{ResourceDraft, ResourceId, ResourceKind};
use leptos::prelude::*;

use crate::shared::components::FeedbackBanner;
use crate::shared::session::Session;
use crate::shared::sync::MutationCoordinator;
use crate::shared::transport::HttpTransport;

#[component]
#[allow(non_snake_case)]
pub fn ProductsPage() -> impl IntoView {
    let session = Session::use_session();
    // feedback is page-scoped; entering the page drops the previous one
    session.clear_feedback();
    let coordinator = MutationCoordinator::new(HttpTransport, session);

    let (sku, set_sku) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let products = move || session.store.with(|s| s.products.list().to_vec());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = coordinator.refresh(ResourceKind::Product).await {
                session.report_error(e.user_message());
            }
        });
    };

    let handle_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let desc = description.get_untracked().trim().to_string();
        let draft = ProductDraft {
            sku: sku.get_untracked().trim().to_string(),
            name: name.get_untracked().trim().to_string(),
            description: if desc.is_empty() { None } else { Some(desc) },
        };
        set_busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            if coordinator.create(ResourceDraft::Product(draft)).await.is_ok() {
                set_sku.set(String::new());
                set_name.set(String::new());
                set_description.set(String::new());
            }
            set_busy.set(false);
        });
    };

    let handle_delete = move |id: ProductId| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let _ = coordinator
                .delete(ResourceKind::Product, ResourceId::from(id))
                .await;
        });
    };

    fetch();

    view! {
        <div class="page">
            <h2>"Products"</h2>
            <FeedbackBanner />

            <form on:submit=handle_create>
                <input
                    type="text"
                    placeholder="SKU"
                    prop:value=sku
                    on:input=move |ev| set_sku.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=description
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <button type="submit" disabled=busy>"Create"</button>
            </form>

            <button on:click=move |_| fetch()>"Refresh"</button>
            <ul class="resource-list">
                {move || products().into_iter().map(|p| {
                    let id = p.id;
                    view! {
                        <li>
                            <strong>{p.sku.clone()}</strong>
                            " - "
                            {p.name.clone()}
                            <button on:click=move |_| handle_delete(id)>"Delete"</button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
