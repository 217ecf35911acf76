use leptos::prelude::*;

use super::AnchorLink;

/// Docs section with a heading and a smooth-scrolling `§` permalink.
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let anchor_href = format!("#{}", id);

    view! {
        <section id=id class="doc-section">
            <h2>
                {title}
                <AnchorLink href=anchor_href class="section-anchor">
                    " \u{00A7}"
                </AnchorLink>
            </h2>
            <div class="doc-section-body">{children()}</div>
        </section>
    }
}
