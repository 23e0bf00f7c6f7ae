//! One cell of the equipment grid.
//!
//! DESIGN
//! ======
//! The card only reads shared state; clicking hands the slot to the selection
//! state and opens the crafting dialog. A card shows its base name and mod
//! count only while it is the active selection — occupied-slot persistence is
//! build state this system does not keep.

use leptos::prelude::*;

use crate::state::selection::SelectionState;
use crate::state::slots::EquipmentSlot;
use crate::state::ui::UiState;
use crate::util::format::mod_count_text;

/// A clickable equipment slot.
#[component]
pub fn SlotCard(slot_def: EquipmentSlot) -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let is_active = move || selection.get().slot.map(|active| active.id) == Some(slot_def.id);
    let active_base = move || {
        let state = selection.get();
        if state.slot.map(|active| active.id) == Some(slot_def.id) {
            state.base
        } else {
            None
        }
    };

    let on_click = move |_| {
        selection.update(|state| state.select_slot(slot_def));
        ui.update(|state| state.show_crafting = true);
    };

    view! {
        <button
            class="slot-card"
            class:slot-card--active=is_active
            on:click=on_click
            title=slot_def.label
        >
            {move || match active_base() {
                Some(base) => {
                    let mods = mod_count_text(selection.get().selected_mods().len());
                    view! {
                        <span class="slot-card__content">
                            <span class="slot-card__name">{base.name_ru.clone()}</span>
                            <span class="slot-card__meta">{mods}</span>
                        </span>
                    }
                        .into_any()
                }
                None => view! {
                    <span class="slot-card__placeholder">{slot_def.label}</span>
                }
                    .into_any(),
            }}
        </button>
    }
}
