//! Water Tracker Component
//!
//! One glass per target slot. Clicking a glass sets today's count.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::store::{use_planner_store, PlannerStateStoreFields};

/// Count to submit when glass `index` (0-based) is clicked.
///
/// Clicking the last filled glass empties it; any other glass fills up to it.
pub fn glasses_after_click(current: i32, index: i32) -> i32 {
    if current == index + 1 {
        index
    } else {
        index + 1
    }
}

#[component]
pub fn WaterTracker() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_planner_store();

    let on_glass = move |index: i32| {
        let glasses = glasses_after_click(store.water_intake().get().glasses, index);
        spawn_local(async move {
            actions::update_water_intake(&ctx.transport(), &ctx.page(), glasses).await;
        });
    };

    view! {
        <section class="planner-card water">
            <h2>"Water"</h2>
            <div class="water-glasses">
                {move || {
                    let intake = store.water_intake().get();
                    (0..intake.target.max(0)).map(|index| {
                        let filled = index < intake.glasses;
                        view! {
                            <button
                                type="button"
                                class=if filled { "glass filled" } else { "glass" }
                                title=format!("{} glasses", index + 1)
                                on:click=move |_| on_glass(index)
                            >
                                {if filled { "🥛" } else { "○" }}
                            </button>
                        }
                    }).collect_view()
                }}
            </div>
            <p class="water-count">
                {move || {
                    let intake = store.water_intake().get();
                    format!("{} / {} glasses", intake.glasses, intake.target)
                }}
            </p>
        </section>
    }
}
