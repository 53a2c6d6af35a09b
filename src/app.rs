//! Daily Planner App
//!
//! Loads today's plan once on mount and lays out the dashboard sections.
//! Mutations reload the whole page, so there is no incremental refresh.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ContactSection, NoticeStack, PrioritySection, ThoughtPanel, TodoSection, WaterTracker};
use crate::config::PlannerConfig;
use crate::context::AppContext;
use crate::dashboard::{fetch_dashboard, today};
use crate::store::{PlannerState, PlannerStateStoreFields, PlannerStore};

#[component]
pub fn App(config: PlannerConfig) -> impl IntoView {
    let store: PlannerStore = Store::new(PlannerState::default());
    let ctx = AppContext::new(config, store);

    provide_context(store);
    provide_context(ctx);

    // Load today's plan on mount
    Effect::new(move |_| {
        spawn_local(async move {
            load_dashboard(ctx, store).await;
        });
    });

    view! {
        <div class="container">
            <NoticeStack />

            <header class="planner-header">
                <h1>"Daily Planner"</h1>
                <button
                    class="forms-toggle"
                    on:click=move |_| store.show_forms().update(|v| *v = !*v)
                >
                    {move || if store.show_forms().get() { "Hide forms" } else { "Show forms" }}
                </button>
            </header>

            <div class="planner-grid">
                <TodoSection />
                <PrioritySection />
                <ContactSection />
                <WaterTracker />
                <ThoughtPanel />
            </div>
        </div>
    }
}

async fn load_dashboard(ctx: AppContext, store: PlannerStore) {
    let state = fetch_dashboard(&ctx.transport()).await.into_state(&today());

    // Field by field, so notices posted meanwhile survive
    store.show_forms().set(state.show_forms);
    store.thought_content().set(state.thought_content);
    store.water_intake().set(state.water_intake);
    store.todos().set(state.todos);
    store.priorities().set(state.priorities);
    store.contacts().set(state.contacts);
}
