use leptos::prelude::*;

use crate::behavior::anchor_target;
use crate::platform;

/// Link that smooth-scrolls to in-page targets.
///
/// Hrefs that are not `#id`, or whose target is missing, navigate normally.
/// `on_follow` runs on every click, before any scrolling.
#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_follow: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let target = href.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(on_follow) = on_follow {
            on_follow.run(());
        }
        if let Some(id) = anchor_target(&target)
            && platform::scroll_to_anchor(id)
        {
            ev.prevent_default();
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
