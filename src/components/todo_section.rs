//! Todo Section Component
//!
//! Today's todos with completion checkboxes, plus the creation form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::commands::CreateTodoArgs;
use crate::components::DeleteButton;
use crate::context::use_app_context;
use crate::models::{RecordId, Todo};
use crate::store::{use_planner_store, PlannerStateStoreFields};

#[component]
pub fn TodoSection() -> impl IntoView {
    let store = use_planner_store();

    view! {
        <section class="planner-card todos">
            <h2>"Todos"</h2>
            <Show
                when=move || !store.todos().get().is_empty()
                fallback=|| view! { <p class="empty">"Nothing due today."</p> }
            >
                <ul class="record-list">
                    <For
                        each=move || store.todos().get()
                        key=|todo| todo.id
                        children=move |todo| view! { <TodoRow todo=todo /> }
                    />
                </ul>
            </Show>
            <Show when=move || store.show_forms().get()>
                <TodoForm />
            </Show>
        </section>
    }
}

#[component]
fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let id = RecordId::from(todo.id);
    let delete_id = id.clone();
    let completed = todo.completed;

    view! {
        <li class=if completed { "record-row completed" } else { "record-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    let id = id.clone();
                    spawn_local(async move {
                        actions::update_todo(&ctx.transport(), &ctx.page(), &id, checked).await;
                    });
                }
            />
            <div class="record-text">
                <span class="record-title">{todo.title.clone()}</span>
                <span class="record-meta">{todo.due_day().to_string()}</span>
                <p class="record-description">{todo.description.clone()}</p>
            </div>
            <DeleteButton
                title="Delete todo"
                on_click=move || {
                    let id = delete_id.clone();
                    spawn_local(async move {
                        actions::delete_todo(&ctx.transport(), &ctx.page(), &id).await;
                    });
                }
            />
        </li>
    }
}

#[component]
fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (title, description, due_date) = (title.get(), description.get(), due_date.get());
        spawn_local(async move {
            let args = CreateTodoArgs {
                title: &title,
                description: &description,
                due_date: &due_date,
            };
            actions::add_todo(&ctx.transport(), &ctx.page(), &args).await;
        });
    };

    view! {
        <form class="record-form" on:submit=on_submit>
            <input
                id="todoTitle"
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                id="todoDescription"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <input
                id="todoDueDate"
                type="date"
                prop:value=move || due_date.get()
                on:input=move |ev| set_due_date.set(event_target_value(&ev))
            />
            <button type="submit">"Add todo"</button>
        </form>
    }
}
