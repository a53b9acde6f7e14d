use leptos::prelude::*;

use crate::shared::feedback::FeedbackKind;
use crate::shared::session::Session;

/// Transient status banner fed by the session feedback slot.
#[component]
pub fn FeedbackBanner() -> impl IntoView {
    let session = Session::use_session();

    view! {
        {move || {
            session.feedback.get().current().cloned().map(|message| {
                let class = match message.kind {
                    FeedbackKind::Success => "banner banner--success",
                    FeedbackKind::Error => "banner banner--error",
                };
                view! { <div class=class>{message.text}</div> }
            })
        }}
    }
}
