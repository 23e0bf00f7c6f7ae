//! Available-modifier list for the crafting dialog.
//!
//! Mods render sorted by tier and grouped under their mutual-exclusivity tag.
//! Duplicate groups are shown as-is — exclusion is crafting semantics the
//! planner does not apply.

use leptos::prelude::*;

use crate::state::selection::SelectionState;
use crate::util::format::{tier_weight_text, value_range_text};
use crate::util::mods::grouped_by_mod_group;

/// Modifier pool listing for the currently selected base.
#[component]
pub fn ModList() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    view! {
        <div class="mod-list">
            {move || {
                let groups = grouped_by_mod_group(&selection.get().selected_mods());
                if groups.is_empty() {
                    view! { <p class="mod-list__empty">"Нет доступных модификаторов"</p> }
                        .into_any()
                } else {
                    groups
                        .into_iter()
                        .map(|(group, members)| {
                            view! {
                                <div class="mod-list__group">
                                    <h4 class="mod-list__group-tag">{group}</h4>
                                    {members
                                        .into_iter()
                                        .map(|item_mod| {
                                            let range = value_range_text(
                                                item_mod.min_value,
                                                item_mod.max_value,
                                            );
                                            view! {
                                                <div class="mod-list__entry">
                                                    <div class="mod-list__name">
                                                        {item_mod.name_ru.clone()}
                                                    </div>
                                                    <div class="mod-list__stat">
                                                        {item_mod.stat_text_ru.clone()}
                                                        {range
                                                            .map(|text| {
                                                                view! {
                                                                    <span class="mod-list__range">
                                                                        " " {text}
                                                                    </span>
                                                                }
                                                            })}
                                                    </div>
                                                    <div class="mod-list__meta">
                                                        {tier_weight_text(
                                                            item_mod.tier,
                                                            item_mod.weight,
                                                        )}
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
