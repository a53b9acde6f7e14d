use crate::domain::products::ProductsPage;
use crate::domain::webhooks::WebhooksPage;
use crate::shared::session::Session;
use crate::usecases::jobs::JobsPage;
use crate::usecases::upload::UploadPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // Provide the session (resource store + feedback slot) to the whole
    // app via context.
    provide_context(Session::new());

    view! {
        <Router>
            <div class="app">
                <nav class="nav">
                    <A href="/">"Upload"</A>
                    <A href="/jobs">"Jobs"</A>
                    <A href="/products">"Products"</A>
                    <A href="/webhooks">"Webhooks"</A>
                </nav>
                <main>
                    <Routes fallback=|| view! { <p>"Not found"</p> }>
                        <Route path=path!("/") view=UploadPage />
                        <Route path=path!("/jobs") view=JobsPage />
                        <Route path=path!("/products") view=ProductsPage />
                        <Route path=path!("/webhooks") view=WebhooksPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
