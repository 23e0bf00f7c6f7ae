use super::*;
use crate::net::types::{ItemClass, ModPool, ModType};
use crate::state::slots::EQUIPMENT_SLOTS;

fn slot_for(class: ItemClass) -> EquipmentSlot {
    EQUIPMENT_SLOTS
        .iter()
        .copied()
        .find(|slot| slot.item_class == class)
        .expect("every class has a slot")
}

fn base(name: &str, class: ItemClass) -> ItemBase {
    ItemBase {
        id: format!("base-{name}"),
        name_ru: name.to_owned(),
        name_en: name.to_owned(),
        item_class: class,
        required_level: 1,
        base_armor: None,
        base_evasion: None,
        base_energy_shield: None,
    }
}

fn detail_with_variants(base: &ItemBase, variant_names: &[&str]) -> ItemBaseDetail {
    ItemBaseDetail {
        base: base.clone(),
        item_stats: Vec::new(),
        item_requirements: None,
        item_variants: variant_names
            .iter()
            .map(|name| ItemVariant {
                id: format!("var-{name}"),
                item_base_id: base.id.clone(),
                variant_name_ru: (*name).to_owned(),
                variant_name_en: (*name).to_owned(),
                quality_bonus: None,
            })
            .collect(),
        item_mods: Vec::new(),
    }
}

fn pool_with_mod(name: &str, group: &str, tier: Option<i32>) -> ModPoolWithMods {
    ModPoolWithMods {
        pool: ModPool {
            id: format!("pool-{name}"),
            name_ru: name.to_owned(),
            name_en: name.to_owned(),
            item_class: ItemClass::Helmet,
            mod_type: ModType::Prefix,
        },
        item_mods: vec![ItemMod {
            id: format!("mod-{name}"),
            name_ru: name.to_owned(),
            name_en: name.to_owned(),
            mod_group: group.to_owned(),
            mod_type: ModType::Prefix,
            tier,
            weight: 100,
            min_level: 1,
            stat_text_ru: String::new(),
            stat_text_en: String::new(),
            min_value: None,
            max_value: None,
        }],
    }
}

// =============================================================
// bases_for_slot
// =============================================================

#[test]
fn filter_keeps_only_matching_class_in_original_order() {
    let all = [
        base("iron-hat", ItemClass::Helmet),
        base("iron-sword", ItemClass::Weapon),
        base("steel-hat", ItemClass::Helmet),
    ];
    let filtered = bases_for_slot(slot_for(ItemClass::Helmet), &all);
    let names: Vec<&str> = filtered.iter().map(|b| b.name_en.as_str()).collect();
    assert_eq!(names, ["iron-hat", "steel-hat"]);
}

#[test]
fn helmet_slot_filters_out_the_sword() {
    let all = [
        base("Iron Hat", ItemClass::Helmet),
        base("Iron Sword", ItemClass::Weapon),
    ];
    let filtered = bases_for_slot(slot_for(ItemClass::Helmet), &all);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name_en, "Iron Hat");
}

#[test]
fn empty_filter_result_is_valid() {
    let all = [base("Iron Sword", ItemClass::Weapon)];
    assert!(bases_for_slot(slot_for(ItemClass::Belt), &all).is_empty());
}

// =============================================================
// Slot and base transitions
// =============================================================

#[test]
fn default_selection_is_empty() {
    let state = SelectionState::default();
    assert!(state.slot.is_none());
    assert!(state.base.is_none());
    assert!(state.detail.is_none());
    assert!(state.variant.is_none());
    assert!(state.mod_pools.is_empty());
}

#[test]
fn select_slot_resets_previous_base() {
    let mut state = SelectionState::default();
    let chosen = base("iron-hat", ItemClass::Helmet);
    let generation = state.begin_base_selection(chosen.clone());
    state.apply_detail(generation, detail_with_variants(&chosen, &[]));

    state.select_slot(slot_for(ItemClass::Weapon));
    assert!(state.base.is_none());
    assert!(state.detail.is_none());
}

#[test]
fn select_slot_invalidates_in_flight_fetches() {
    let mut state = SelectionState::default();
    let chosen = base("iron-hat", ItemClass::Helmet);
    let generation = state.begin_base_selection(chosen.clone());

    state.select_slot(slot_for(ItemClass::Helmet));
    state.apply_detail(generation, detail_with_variants(&chosen, &["Tempered"]));
    assert!(state.detail.is_none(), "late result for a reset slot must be dropped");
}

#[test]
fn first_variant_becomes_default_displayed_variant() {
    let mut state = SelectionState::default();
    let chosen = base("iron-hat", ItemClass::Helmet);
    let generation = state.begin_base_selection(chosen.clone());
    state.apply_detail(generation, detail_with_variants(&chosen, &["Tempered", "Gilded"]));
    assert_eq!(
        state.variant.as_ref().map(|v| v.variant_name_en.as_str()),
        Some("Tempered")
    );
}

#[test]
fn zero_variants_leaves_default_variant_absent() {
    let mut state = SelectionState::default();
    let chosen = base("iron-hat", ItemClass::Helmet);
    let generation = state.begin_base_selection(chosen.clone());
    state.apply_detail(generation, detail_with_variants(&chosen, &[]));
    assert!(state.detail.is_some());
    assert!(state.variant.is_none());
}

#[test]
fn select_variant_switches_the_displayed_variant() {
    let mut state = SelectionState::default();
    let chosen = base("iron-hat", ItemClass::Helmet);
    let generation = state.begin_base_selection(chosen.clone());
    let detail = detail_with_variants(&chosen, &["Tempered", "Gilded"]);
    let gilded = detail.item_variants[1].clone();
    state.apply_detail(generation, detail);

    state.select_variant(gilded);
    assert_eq!(
        state.variant.as_ref().map(|v| v.variant_name_en.as_str()),
        Some("Gilded")
    );
}

// =============================================================
// Generation guard
// =============================================================

#[test]
fn stale_detail_is_discarded_newest_selection_wins() {
    let mut state = SelectionState::default();
    let first = base("iron-hat", ItemClass::Helmet);
    let second = base("steel-hat", ItemClass::Helmet);

    let first_generation = state.begin_base_selection(first.clone());
    let second_generation = state.begin_base_selection(second.clone());

    // Second selection's detail lands first, then the superseded one.
    state.apply_detail(second_generation, detail_with_variants(&second, &[]));
    state.apply_detail(first_generation, detail_with_variants(&first, &["Old"]));

    let detail = state.detail.as_ref().expect("newest detail retained");
    assert_eq!(detail.base.name_en, "steel-hat");
    assert!(state.variant.is_none(), "stale variant must not leak through");
}

#[test]
fn stale_mod_pools_are_discarded() {
    let mut state = SelectionState::default();
    let first_generation = state.begin_base_selection(base("iron-hat", ItemClass::Helmet));
    let _ = state.begin_base_selection(base("steel-hat", ItemClass::Helmet));

    state.apply_mods(first_generation, vec![pool_with_mod("stale", "life", Some(1))]);
    assert!(state.mod_pools.is_empty());
}

#[test]
fn repeating_the_same_selection_is_idempotent() {
    let mut state = SelectionState::default();
    let chosen = base("iron-hat", ItemClass::Helmet);

    let generation = state.begin_base_selection(chosen.clone());
    state.apply_detail(generation, detail_with_variants(&chosen, &["Tempered"]));
    state.apply_mods(generation, vec![pool_with_mod("agile", "evasion", Some(2))]);
    let first_detail = state.detail.clone();
    let first_mods = state.selected_mods();

    let generation = state.begin_base_selection(chosen.clone());
    state.apply_detail(generation, detail_with_variants(&chosen, &["Tempered"]));
    state.apply_mods(generation, vec![pool_with_mod("agile", "evasion", Some(2))]);

    assert_eq!(state.detail, first_detail);
    assert_eq!(state.selected_mods(), first_mods);
}

// =============================================================
// selected_mods
// =============================================================

#[test]
fn selected_mods_flatten_pools_in_tier_order() {
    let mut state = SelectionState::default();
    let generation = state.begin_base_selection(base("iron-hat", ItemClass::Helmet));
    state.apply_mods(
        generation,
        vec![
            pool_with_mod("heavy", "armour", Some(3)),
            pool_with_mod("agile", "evasion", Some(1)),
        ],
    );
    let names: Vec<String> = state.selected_mods().into_iter().map(|m| m.name_ru).collect();
    assert_eq!(names, ["agile", "heavy"]);
}

#[test]
fn selected_mods_is_empty_before_pools_resolve() {
    let mut state = SelectionState::default();
    let _ = state.begin_base_selection(base("iron-hat", ItemClass::Helmet));
    assert!(state.selected_mods().is_empty());
}
