//! Contact Section Component
//!
//! People to reach out to today, with a type selector for new entries.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::commands::CreateContactArgs;
use crate::components::DeleteButton;
use crate::context::use_app_context;
use crate::models::{Contact, RecordId};
use crate::store::{use_planner_store, PlannerStateStoreFields};

/// Contact type options
pub const CONTACT_TYPES: &[(&str, &str)] = &[
    ("Call", "📞 Call"),
    ("Email", "✉ Email"),
    ("Text", "💬 Text"),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    let store = use_planner_store();

    view! {
        <section class="planner-card contacts">
            <h2>"Reach Out"</h2>
            <ul class="record-list">
                <For
                    each=move || store.contacts().get()
                    key=|contact| contact.id
                    children=move |contact| view! { <ContactRow contact=contact /> }
                />
            </ul>
            <Show when=move || store.show_forms().get()>
                <ContactForm />
            </Show>
        </section>
    }
}

#[component]
fn ContactRow(contact: Contact) -> impl IntoView {
    let ctx = use_app_context();
    let id = RecordId::from(contact.id);
    let delete_id = id.clone();
    let completed = contact.completed;
    let badge = format!("contact-type {}", contact.contact_type.to_lowercase());

    view! {
        <li class=if completed { "record-row completed" } else { "record-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    let id = id.clone();
                    spawn_local(async move {
                        actions::update_contact(&ctx.transport(), &ctx.page(), &id, checked).await;
                    });
                }
            />
            <div class="record-text">
                <span class=badge>{contact.contact_type.clone()}</span>
                <span class="record-title">{contact.name.clone()}</span>
                <p class="record-description">{contact.description.clone()}</p>
            </div>
            <DeleteButton
                title="Delete contact"
                on_click=move || {
                    let id = delete_id.clone();
                    spawn_local(async move {
                        actions::delete_contact(&ctx.transport(), &ctx.page(), &id).await;
                    });
                }
            />
        </li>
    }
}

/// Contact type selector buttons
#[component]
fn ContactTypeSelector(
    current_type: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {CONTACT_TYPES.iter().map(|(value, label)| {
                let val = value.to_string();
                let val_clone = val.clone();
                let is_selected = move || current_type.get() == val;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change(val_clone.clone())
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());
    let (contact_type, set_contact_type) = signal(String::from("Call"));
    let (description, set_description) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (name, contact_type, description) = (name.get(), contact_type.get(), description.get());
        spawn_local(async move {
            let args = CreateContactArgs {
                name: &name,
                contact_type: &contact_type,
                description: &description,
            };
            actions::add_contact(&ctx.transport(), &ctx.page(), &args).await;
        });
    };

    view! {
        <form class="record-form" on:submit=on_submit>
            <input
                id="contactName"
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <ContactTypeSelector
                current_type=contact_type
                on_change=move |value| set_contact_type.set(value)
            />
            <textarea
                id="contactDescription"
                placeholder="About"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <button type="submit">"Add contact"</button>
        </form>
    }
}
