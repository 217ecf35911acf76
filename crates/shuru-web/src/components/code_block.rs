use leptos::prelude::*;

use super::copy_button::spawn_copy;
use crate::behavior::{CopyMachine, CopyVariant};

/// Multi-line code with a "Copy" button pinned to its corner.
///
/// The button label reports the outcome ("Copied!" or "Error") for a
/// second before returning to "Copy". Only `code` is copied. Styles live in
/// `style/main.css`, every rule under `.code-block`.
#[component]
pub fn CodeBlock(
    #[prop(into)] code: String,
    /// Adds a `language-*` class for highlighters
    #[prop(optional, into)]
    language: Option<String>,
) -> impl IntoView {
    let machine = RwSignal::new(CopyMachine::default());
    let copy_text = code.clone();
    let code_class = language.map(|lang| format!("language-{}", lang)).unwrap_or_default();

    view! {
        <div class="code-block">
            <pre>
                <code class=code_class>{code}</code>
                <button
                    type="button"
                    class="code-block-copy"
                    on:click=move |_| spawn_copy(copy_text.clone(), CopyVariant::Label, machine)
                >
                    {move || machine.get().state().label()}
                </button>
            </pre>
        </div>
    }
}
