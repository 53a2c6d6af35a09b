//! Thought Panel Component
//!
//! Thought of the day. "Generate" swaps server text into the panel in
//! place; "Save" stores what is in the editor and reloads.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::store::{use_planner_store, PlannerStateStoreFields};

#[component]
pub fn ThoughtPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_planner_store();
    let (draft, set_draft) = signal(String::new());

    let generate = move |_| {
        spawn_local(async move {
            actions::generate_thought(&ctx.transport(), &ctx.page()).await;
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get();
        spawn_local(async move {
            actions::add_thought(&ctx.transport(), &ctx.page(), &content).await;
        });
    };

    view! {
        <section class="planner-card thought">
            <h2>"Thought of the Day"</h2>
            <p id="thoughtContent" class="thought-content">
                {move || store.thought_content().get()}
            </p>
            <button type="button" class="generate-btn" on:click=generate>
                "Generate"
            </button>
            <Show when=move || store.show_forms().get()>
                <form class="record-form" on:submit=on_submit>
                    <textarea
                        placeholder="Write your own..."
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit">"Save thought"</button>
                </form>
            </Show>
        </section>
    }
}
