//! Planner page: the equipment workspace.
//!
//! ARCHITECTURE
//! ============
//! The page owns route-scoped orchestration — kicking off the one-time
//! catalog load and switching tabs — and delegates rendering details to
//! `components`.

use leptos::prelude::*;

use crate::components::crafting_dialog::CraftingDialog;
use crate::components::dps_panel::DpsPanel;
use crate::components::equipment_grid::EquipmentGrid;
use crate::components::header_bar::HeaderBar;
use crate::components::stat_panel::StatPanel;
use crate::state::ui::{MainTab, UiState};

/// The single planner screen.
#[component]
pub fn PlannerPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let catalog = expect_context::<RwSignal<crate::state::catalog::CatalogState>>();
        let config = expect_context::<crate::net::api::StoreConfig>();
        crate::state::catalog::load(config, catalog);
    }

    let tab_button = move |tab: MainTab, label: &'static str| {
        view! {
            <button
                class="planner-page__tab"
                class:planner-page__tab--active=move || ui.get().active_tab == tab
                on:click=move |_| ui.update(|state| state.active_tab = tab)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="planner-page">
            <HeaderBar/>
            <main class="planner-page__layout">
                <aside class="planner-page__left">
                    <StatPanel/>
                </aside>
                <section class="planner-page__center">
                    <nav class="planner-page__tabs">
                        {tab_button(MainTab::Gear, "Снаряжение")}
                        {tab_button(MainTab::Skills, "Умения")}
                        {tab_button(MainTab::Talents, "Таланты")}
                    </nav>
                    {move || match ui.get().active_tab {
                        MainTab::Gear => view! { <EquipmentGrid/> }.into_any(),
                        MainTab::Skills => {
                            view! { <p class="planner-page__stub">"Умения появятся позже."</p> }
                                .into_any()
                        }
                        MainTab::Talents => {
                            view! { <p class="planner-page__stub">"Таланты появятся позже."</p> }
                                .into_any()
                        }
                    }}
                </section>
                <aside class="planner-page__right">
                    <DpsPanel/>
                </aside>
            </main>

            <Show when=move || ui.get().show_crafting>
                <CraftingDialog/>
            </Show>
        </div>
    }
}
