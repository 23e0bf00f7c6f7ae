//! Character stat panel with static placeholder values.
//!
//! Stat computation is out of scope for the planner; the panel keeps the
//! layout honest until a future character model feeds it.

use leptos::prelude::*;

/// Left-column character stats. Values are placeholders, not computed.
#[component]
pub fn StatPanel() -> impl IntoView {
    view! {
        <section class="stat-panel">
            <h2 class="stat-panel__title">"Характеристики персонажа"</h2>
            <ul class="stat-panel__rows">
                <li class="stat-panel__row">
                    <span class="stat-panel__label stat-panel__label--life">"Здоровье"</span>
                    <span class="stat-panel__value">"3,450"</span>
                </li>
                <li class="stat-panel__row">
                    <span class="stat-panel__label stat-panel__label--shield">
                        "Энергетический щит"
                    </span>
                    <span class="stat-panel__value">"1,200"</span>
                </li>
                <li class="stat-panel__row">
                    <span class="stat-panel__label stat-panel__label--dps">"УВС"</span>
                    <span class="stat-panel__value">"245,670"</span>
                </li>
            </ul>
        </section>
    }
}
