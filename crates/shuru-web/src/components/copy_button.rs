use leptos::prelude::*;

use crate::behavior::{CopyMachine, CopyState, CopyVariant, MachineStore, copy_with_feedback};
use crate::platform;

impl MachineStore for RwSignal<CopyMachine> {
    fn with_machine<R>(&self, f: impl FnOnce(&mut CopyMachine) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Start a copy in the background. The click handler does not wait for it.
pub(crate) fn spawn_copy(text: String, variant: CopyVariant, machine: RwSignal<CopyMachine>) {
    leptos::task::spawn_local(async move {
        let platform = platform::browser();
        copy_with_feedback(&text, variant, &platform, &machine).await;
    });
}

/// A button that copies text to clipboard, with feedback through a
/// `copied` (or `error`) class rather than its label.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: String,
    /// Button label, unchanged by copying
    #[prop(into, default = "Copy".to_string())]
    label: String,
) -> impl IntoView {
    let machine = RwSignal::new(CopyMachine::default());
    let on_click = move |_| spawn_copy(text.clone(), CopyVariant::Class, machine);

    view! {
        <button
            type="button"
            data-clipboard="true"
            class="copy-button"
            class:copied=move || machine.get().state() == CopyState::Copied
            class:error=move || machine.get().state() == CopyState::Error
            on:click=on_click
        >
            {label}
        </button>
    }
}

/// One-line command with a copy button beside it.
#[component]
pub fn CodeSnippet(#[prop(into)] code: String) -> impl IntoView {
    let text = code.clone();

    view! {
        <div class="snippet">
            <code>{code}</code>
            <CopyButton text=text />
        </div>
    }
}
