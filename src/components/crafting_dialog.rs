//! Crafting dialog: base selection and preview for the active slot.
//!
//! DESIGN
//! ======
//! The dialog is pure orchestration. Base filtering and all fetch sequencing
//! live in `state::selection`; the dialog reads shared state and forwards
//! choices. The "create item" action is intentionally inert — the store is
//! read-only and item creation has no backing mutation.

use leptos::prelude::*;

use crate::components::mod_list::ModList;
use crate::net::api::StoreConfig;
use crate::net::types::ItemBase;
use crate::state::catalog::CatalogState;
use crate::state::selection::{SelectionState, bases_for_slot, select_base};
use crate::state::ui::UiState;
use crate::util::format::{base_option_label, cost_text, requirement_text, stat_type_label, value_range_text};

/// Modal dialog for picking and previewing a base in the active slot.
#[component]
pub fn CraftingDialog() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<StoreConfig>();

    // Type choice is dialog-local: it only gates the base select.
    let selected_type = RwSignal::new(None::<String>);

    let close = move || ui.update(|state| state.show_crafting = false);

    let filtered_bases = move || -> Vec<ItemBase> {
        let state = selection.get();
        match state.slot {
            Some(slot) => bases_for_slot(slot, &catalog.get().item_bases),
            None => Vec::new(),
        }
    };

    let on_type_change = move |ev| {
        let value = event_target_value(&ev);
        selected_type.set(if value.is_empty() { None } else { Some(value) });
    };

    let on_base_change = move |ev| {
        let id = event_target_value(&ev);
        if let Some(base) = filtered_bases().into_iter().find(|base| base.id == id) {
            select_base(config.clone(), selection, base);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--crafting" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2 class="dialog__title">
                        "Создание предмета — "
                        {move || selection.get().slot.map_or("Слот", |slot| slot.label)}
                    </h2>
                    <button class="dialog__close" on:click=move |_| close() aria-label="Закрыть">
                        "✕"
                    </button>
                </div>

                <div class="dialog__columns">
                    <div class="dialog__column">
                        <label class="dialog__label">
                            "Тип предмета"
                            <select class="dialog__select" on:change=on_type_change>
                                <option value="">"Выберите тип"</option>
                                {move || {
                                    catalog
                                        .get()
                                        .item_types
                                        .into_iter()
                                        .map(|entry| {
                                            view! {
                                                <option value=entry.item_type.id.clone()>
                                                    {entry.item_type.name_ru.clone()}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>

                        <label class="dialog__label">
                            "База предмета"
                            <select
                                class="dialog__select"
                                on:change=on_base_change
                                disabled=move || selected_type.get().is_none()
                            >
                                <option value="">"Выберите базу"</option>
                                {move || {
                                    filtered_bases()
                                        .into_iter()
                                        .map(|base| {
                                            view! {
                                                <option value=base.id.clone()>
                                                    {base_option_label(
                                                        &base.name_ru,
                                                        base.required_level,
                                                    )}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>

                        <BaseStats/>
                        <VariantPicker/>
                    </div>

                    <div class="dialog__column">
                        <Show when=move || selection.get().base.is_some()>
                            <h3 class="dialog__section-title">"Методы крафта"</h3>
                            <CraftingMethodList/>
                            <h3 class="dialog__section-title">"Доступные модификаторы"</h3>
                            <ModList/>
                        </Show>
                    </div>
                </div>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "Отмена"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || selection.get().base.is_none()
                        title="Создание предметов недоступно"
                    >
                        "Создать предмет"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Base defences, rolled stat ranges, and the requirement line.
#[component]
fn BaseStats() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    view! {
        {move || {
            let state = selection.get();
            let base = state.base?;
            let detail = state.detail;
            Some(
                view! {
                    <div class="base-stats">
                        <h3 class="dialog__section-title">"Характеристики предмета"</h3>
                        <div class="base-stats__grid">
                            {base
                                .base_armor
                                .map(|value| defence_row("Броня", value))}
                            {base
                                .base_evasion
                                .map(|value| defence_row("Уклонение", value))}
                            {base
                                .base_energy_shield
                                .map(|value| defence_row("Энергетический щит", value))}
                        </div>
                        {detail
                            .map(|detail| {
                                view! {
                                    <div class="base-stats__rolls">
                                        {detail
                                            .item_stats
                                            .into_iter()
                                            .map(|stat| {
                                                let range = value_range_text(
                                                        Some(stat.min_value),
                                                        Some(stat.max_value),
                                                    )
                                                    .unwrap_or_default();
                                                view! {
                                                    <div class="base-stats__roll">
                                                        <span>{stat_type_label(stat.stat_type)}</span>
                                                        <span class="base-stats__range">{range}</span>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                        {detail
                                            .item_requirements
                                            .map(|requirement| {
                                                view! {
                                                    <p class="base-stats__requirement">
                                                        {requirement_text(&requirement)}
                                                    </p>
                                                }
                                            })}
                                    </div>
                                }
                            })}
                    </div>
                },
            )
        }}
    }
}

fn defence_row(label: &'static str, value: i32) -> impl IntoView {
    view! {
        <div class="base-stats__row">
            <span class="base-stats__label">{label}</span>
            <span class="base-stats__value">{value}</span>
        </div>
    }
}

/// Variant list with the displayed variant highlighted.
#[component]
fn VariantPicker() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    view! {
        {move || {
            let state = selection.get();
            let variants = state.detail.as_ref().map(|d| d.item_variants.clone())?;
            if variants.is_empty() {
                return None;
            }
            let active_id = state.variant.as_ref().map(|variant| variant.id.clone());
            Some(
                view! {
                    <div class="variant-picker">
                        <h3 class="dialog__section-title">"Вариант предмета"</h3>
                        {variants
                            .into_iter()
                            .map(|variant| {
                                let is_active = active_id.as_deref() == Some(variant.id.as_str());
                                let on_pick = {
                                    let variant = variant.clone();
                                    move |_| {
                                        selection
                                            .update(|state| state.select_variant(variant.clone()));
                                    }
                                };
                                view! {
                                    <button
                                        class="variant-picker__entry"
                                        class:variant-picker__entry--active=is_active
                                        on:click=on_pick
                                    >
                                        <span class="variant-picker__name">
                                            {variant.variant_name_ru.clone()}
                                        </span>
                                        {variant
                                            .quality_bonus
                                            .clone()
                                            .map(|bonus| {
                                                view! {
                                                    <span class="variant-picker__bonus">
                                                        "Бонус качества: " {bonus}
                                                    </span>
                                                }
                                            })}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                },
            )
        }}
    }
}

/// Crafting method list with costs.
#[component]
fn CraftingMethodList() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    view! {
        <div class="method-list">
            {move || {
                let methods = catalog.get().crafting_methods;
                if methods.is_empty() {
                    view! { <p class="method-list__empty">"Нет доступных методов"</p> }
                        .into_any()
                } else {
                    methods
                        .into_iter()
                        .map(|method| {
                            let cost = cost_text(method.cost_amount, method.cost_type.as_deref());
                            view! {
                                <div class="method-list__entry">
                                    <div class="method-list__name">{method.name_ru.clone()}</div>
                                    <div class="method-list__description">
                                        {method.description_ru.clone()}
                                    </div>
                                    {cost
                                        .map(|text| {
                                            view! { <div class="method-list__cost">{text}</div> }
                                        })}
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
