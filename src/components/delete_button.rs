//! Delete Button Component
//!
//! The × button on list rows. Confirmation happens in the action itself.

use leptos::prelude::*;

#[component]
pub fn DeleteButton(
    /// Tooltip, e.g. "Delete todo"
    #[prop(into)]
    title: String,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            class="delete-btn"
            title=title
            on:click=move |ev| {
                ev.stop_propagation();
                on_click();
            }
        >
            "×"
        </button>
    }
}
