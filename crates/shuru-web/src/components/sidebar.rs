use leptos::html;
use leptos::prelude::*;

use super::AnchorLink;
use super::menu::close_on_link;
use crate::behavior::MenuState;
use crate::config::CONFIG;

/// Docs navigation. Collapsed behind a toggle on narrow screens; link
/// clicks only close it below the mobile breakpoint.
#[component]
pub fn Sidebar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::new(CONFIG.behavior.sidebar_policy()));
    let trigger = NodeRef::<html::Button>::new();
    let panel = NodeRef::<html::Aside>::new();

    #[cfg(feature = "hydrate")]
    super::menu::close_on_outside_click(
        menu,
        move || trigger.get_untracked().map(web_sys::Node::from),
        move || panel.get_untracked().map(web_sys::Node::from),
    );

    let on_link = close_on_link(menu);
    let is_open = move || menu.get().is_open();

    view! {
        <button
            node_ref=trigger
            type="button"
            class="menu-toggle"
            aria-label="Toggle documentation menu"
            aria-expanded=move || is_open().to_string()
            on:click=move |_| menu.update(MenuState::toggle)
        >
            <span></span>
            <span></span>
            <span></span>
        </button>
        <aside node_ref=panel class="sidebar" class:active=is_open>
            <a href="/" class="sidebar-brand">{CONFIG.name}</a>
            <nav>
                <ul>
                    {CONFIG
                        .docs_nav
                        .iter()
                        .map(|entry| {
                            view! {
                                <li>
                                    <AnchorLink href=entry.href on_follow=on_link>
                                        {entry.label}
                                    </AnchorLink>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
}
