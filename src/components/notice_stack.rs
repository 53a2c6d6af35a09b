//! Notice Stack Component
//!
//! Renders flashed notices at the top of the container, newest first.

use leptos::prelude::*;

use crate::notice::NoticeBoard;
use crate::store::{use_planner_store, PlannerStateStoreFields};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let store = use_planner_store();

    view! {
        <div class="notice-stack">
            <For
                each=move || store.notices().get().entries().to_vec()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.level.class() role="alert">
                            {notice.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| store.dismiss(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
