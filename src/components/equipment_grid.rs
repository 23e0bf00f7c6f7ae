//! Equipment grid laying out the ten planner slots.
//!
//! Row shape mirrors a paper-doll layout: helmet on top, jewellery and
//! weapons around the body armour, boots and belt at the bottom.

use leptos::prelude::*;

use crate::components::slot_card::SlotCard;
use crate::state::catalog::CatalogState;
use crate::state::slots::EQUIPMENT_SLOTS;

/// The paper-doll grid, or a loading indicator during the initial fetch.
#[component]
pub fn EquipmentGrid() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    view! {
        <div class="equipment-grid">
            <Show
                when=move || !catalog.get().loading
                fallback=|| {
                    view! {
                        <div class="equipment-grid__loading">
                            <div class="spinner" aria-hidden="true"></div>
                            <p>"Загрузка данных..."</p>
                        </div>
                    }
                }
            >
                <div class="equipment-grid__cells">
                    <div class="equipment-grid__cell equipment-grid__cell--helmet">
                        <SlotCard slot_def={EQUIPMENT_SLOTS[0]}/>
                    </div>
                    <div class="equipment-grid__cell equipment-grid__cell--amulet">
                        <SlotCard slot_def={EQUIPMENT_SLOTS[1]}/>
                    </div>
                    <div class="equipment-grid__cell equipment-grid__cell--weapon">
                        <SlotCard slot_def={EQUIPMENT_SLOTS[2]}/>
                    </div>
                    <div class="equipment-grid__cell equipment-grid__cell--body">
                        <SlotCard slot_def={EQUIPMENT_SLOTS[3]}/>
                    </div>
                    <div class="equipment-grid__cell equipment-grid__cell--shield">
                        <SlotCard slot_def={EQUIPMENT_SLOTS[5]}/>
                    </div>
                    <div class="equipment-grid__cell equipment-grid__cell--ring-left">
                        <SlotCard slot_def={EQUIPMENT_SLOTS[4]}/>
                    </div>
                    <div class="equipment-grid__cell equipment-grid__cell--gloves">
                        <SlotCard slot_def={EQUIPMENT_SLOTS[6]}/>
                    </div>
                    <div class="equipment-grid__cell equipment-grid__cell--ring-right">
                        <SlotCard slot_def={EQUIPMENT_SLOTS[7]}/>
                    </div>
                    <div class="equipment-grid__cell equipment-grid__cell--boots">
                        <SlotCard slot_def={EQUIPMENT_SLOTS[8]}/>
                    </div>
                    <div class="equipment-grid__cell equipment-grid__cell--belt">
                        <SlotCard slot_def={EQUIPMENT_SLOTS[9]}/>
                    </div>
                </div>
            </Show>
        </div>
    }
}
