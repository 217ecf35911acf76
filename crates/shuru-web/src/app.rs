use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{DocsPage, HomePage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"404 - Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/docs") view=DocsPage />
            </Routes>
        </Router>
    }
}
