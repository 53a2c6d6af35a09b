//! Priority Section Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::commands::CreatePriorityArgs;
use crate::components::DeleteButton;
use crate::context::use_app_context;
use crate::models::{Priority, RecordId};
use crate::store::{use_planner_store, PlannerStateStoreFields};

#[component]
pub fn PrioritySection() -> impl IntoView {
    let store = use_planner_store();

    view! {
        <section class="planner-card priorities">
            <h2>"Top Priorities"</h2>
            <ul class="record-list">
                <For
                    each=move || store.priorities().get()
                    key=|priority| priority.id
                    children=move |priority| view! { <PriorityRow priority=priority /> }
                />
            </ul>
            <Show when=move || store.show_forms().get()>
                <PriorityForm />
            </Show>
        </section>
    }
}

#[component]
fn PriorityRow(priority: Priority) -> impl IntoView {
    let ctx = use_app_context();
    let id = RecordId::from(priority.id);
    let delete_id = id.clone();
    let completed = priority.completed;

    view! {
        <li class=if completed { "record-row completed" } else { "record-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    let id = id.clone();
                    spawn_local(async move {
                        actions::update_priority(&ctx.transport(), &ctx.page(), &id, checked).await;
                    });
                }
            />
            <div class="record-text">
                <span class="record-title">{priority.title.clone()}</span>
                <p class="record-description">{priority.description.clone()}</p>
            </div>
            <DeleteButton
                title="Delete priority"
                on_click=move || {
                    let id = delete_id.clone();
                    spawn_local(async move {
                        actions::delete_priority(&ctx.transport(), &ctx.page(), &id).await;
                    });
                }
            />
        </li>
    }
}

#[component]
fn PriorityForm() -> impl IntoView {
    let ctx = use_app_context();
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (title, description) = (title.get(), description.get());
        spawn_local(async move {
            let args = CreatePriorityArgs { title: &title, description: &description };
            actions::add_priority(&ctx.transport(), &ctx.page(), &args).await;
        });
    };

    view! {
        <form class="record-form" on:submit=on_submit>
            <input
                id="priorityTitle"
                type="text"
                placeholder="Priority"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                id="priorityDescription"
                placeholder="Why it matters"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <button type="submit">"Add priority"</button>
        </form>
    }
}
