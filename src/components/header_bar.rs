//! Top application header with the build actions.
//!
//! The save and share buttons are deliberately inert: build persistence has no
//! backing mutation in this system and the store is read-only reference data.

use leptos::prelude::*;

/// Application header: title plus inert save/share actions.
#[component]
pub fn HeaderBar() -> impl IntoView {
    view! {
        <header class="header-bar">
            <div class="header-bar__brand">
                <span class="header-bar__mark" aria-hidden="true">"⚔"</span>
                <h1 class="header-bar__title">"Gearforge"</h1>
            </div>
            <div class="header-bar__actions">
                <button class="btn btn--primary" disabled=true title="Сохранение недоступно">
                    "Сохранить билд"
                </button>
                <button class="btn btn--secondary" disabled=true title="Публикация недоступна">
                    "Поделиться"
                </button>
            </div>
        </header>
    }
}
