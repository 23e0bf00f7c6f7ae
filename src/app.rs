//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::StoreConfig;
use crate::pages::planner::PlannerPage;
use crate::state::catalog::CatalogState;
use crate::state::selection::SelectionState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the store configuration and all shared state contexts, then sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let catalog = RwSignal::new(CatalogState::default());
    let selection = RwSignal::new(SelectionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(StoreConfig::from_env());
    provide_context(catalog);
    provide_context(selection);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/gearforge.css"/>
        <Title text="Gearforge"/>

        <Router>
            <Routes fallback=|| "Страница не найдена.".into_view()>
                <Route path=StaticSegment("") view=PlannerPage/>
            </Routes>
        </Router>
    }
}
