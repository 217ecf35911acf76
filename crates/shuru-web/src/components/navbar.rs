use leptos::html;
use leptos::prelude::*;

use super::AnchorLink;
use super::menu::close_on_link;
use crate::behavior::{LinkClosePolicy, MenuState, NavbarBackground};
use crate::config::CONFIG;
use crate::platform;

/// Fixed top nav for the landing page.
///
/// The background darkens once the page scrolls past the threshold. On
/// narrow screens the links collapse behind a toggle; opening it also marks
/// `<body>` with `menu-open`.
#[component]
pub fn Navbar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::new(LinkClosePolicy::Always));
    let scroll_y = RwSignal::new(0.0_f64);
    let trigger = NodeRef::<html::Button>::new();
    let panel = NodeRef::<html::Ul>::new();

    #[cfg(feature = "hydrate")]
    {
        // No debouncing: each tick is a comparison and a style write at most.
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            scroll_y.set(platform::scroll_offset());
        });
        on_cleanup(move || handle.remove());

        super::menu::close_on_outside_click(
            menu,
            move || trigger.get_untracked().map(web_sys::Node::from),
            move || panel.get_untracked().map(web_sys::Node::from),
        );
    }

    Effect::new(move |_| {
        scroll_y.set(platform::scroll_offset());
    });
    Effect::new(move |_| {
        platform::set_body_class("menu-open", menu.get().is_open());
    });
    super::menu::clear_body_class_on_cleanup("menu-open", platform::set_body_class);

    let background = Memo::new(move |_| {
        NavbarBackground::for_offset(scroll_y.get(), CONFIG.behavior.navbar_scroll_threshold)
    });
    let on_link = close_on_link(menu);
    let is_open = move || menu.get().is_open();

    view! {
        <nav class="navbar" style:background-color=move || background.get().css_color()>
            <a href="/" class="navbar-brand">{CONFIG.name}</a>
            <button
                node_ref=trigger
                type="button"
                class="menu-toggle"
                class:active=is_open
                aria-label="Toggle navigation"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| menu.update(MenuState::toggle)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <ul node_ref=panel class="nav-links" class:active=is_open>
                {CONFIG
                    .nav
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
                <li>
                    <a
                        href=CONFIG.links.repository
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=move |_| on_link.run(())
                    >
                        "GitHub \u{2197}"
                    </a>
                </li>
            </ul>
        </nav>
    }
}
