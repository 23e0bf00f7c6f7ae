//! DPS breakdown panel with static placeholder values.

use leptos::prelude::*;

struct DpsRow {
    label: &'static str,
    value: &'static str,
    percent: u8,
    kind: &'static str,
}

const DPS_ROWS: [DpsRow; 3] = [
    DpsRow { label: "Физический", value: "125,340", percent: 60, kind: "physical" },
    DpsRow { label: "Огненный", value: "75,230", percent: 35, kind: "fire" },
    DpsRow { label: "Молния", value: "45,100", percent: 25, kind: "lightning" },
];

/// Right-column DPS distribution. Values are placeholders, not computed.
#[component]
pub fn DpsPanel() -> impl IntoView {
    view! {
        <section class="dps-panel">
            <h2 class="dps-panel__title">"Распределение УВС"</h2>
            <div class="dps-panel__rows">
                {DPS_ROWS
                    .iter()
                    .map(|row| {
                        view! {
                            <div class="dps-panel__row">
                                <div class="dps-panel__line">
                                    <span>{row.label}</span>
                                    <span class="dps-panel__value">{row.value}</span>
                                </div>
                                <div class="dps-panel__track">
                                    <div
                                        class=format!("dps-panel__fill dps-panel__fill--{}", row.kind)
                                        style=format!("width: {}%", row.percent)
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
