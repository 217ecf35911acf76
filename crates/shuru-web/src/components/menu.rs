use leptos::prelude::*;

use crate::behavior::MenuState;
use crate::platform;

/// Close the menu when a link inside it is followed, subject to its policy.
pub(crate) fn close_on_link(menu: RwSignal<MenuState>) -> Callback<()> {
    Callback::new(move |_| {
        if menu.get_untracked().is_open() {
            let width = platform::viewport_width();
            menu.update(|m| {
                m.link_click(width);
            });
        }
    })
}

/// Close the menu on clicks that land outside both trigger and panel.
#[cfg(feature = "hydrate")]
pub(crate) fn close_on_outside_click<T, P>(menu: RwSignal<MenuState>, trigger: T, panel: P)
where
    T: Fn() -> Option<web_sys::Node> + 'static,
    P: Fn() -> Option<web_sys::Node> + 'static,
{
    use crate::behavior::ClickTarget;

    let handle = window_event_listener(leptos::ev::click, move |ev| {
        if !menu.get_untracked().is_open() {
            return;
        }
        let target = ClickTarget::classify(
            platform::event_within(&ev, trigger().as_ref()),
            platform::event_within(&ev, panel().as_ref()),
        );
        menu.update(|m| {
            m.document_click(target);
        });
    });

    on_cleanup(move || handle.remove());
}

/// Clear `class` from `<body>` when the owning component is torn down, so a
/// client-side navigation away from an open menu does not leave it behind.
pub(crate) fn clear_body_class_on_cleanup<F>(class: &'static str, set_body_class: F)
where
    F: Fn(&'static str, bool) + Send + Sync + 'static,
{
    on_cleanup(move || set_body_class(class, false));
}
