use super::*;
use crate::net::types::{ItemClass, ItemType};

fn sample_type(name: &str) -> ItemTypeWithSubtypes {
    ItemTypeWithSubtypes {
        item_type: ItemType {
            id: format!("type-{name}"),
            name_ru: name.to_owned(),
            name_en: name.to_owned(),
            description_ru: None,
            description_en: None,
            icon_url: None,
        },
        item_subtypes: Vec::new(),
    }
}

fn sample_base(name: &str) -> ItemBase {
    ItemBase {
        id: format!("base-{name}"),
        name_ru: name.to_owned(),
        name_en: name.to_owned(),
        item_class: ItemClass::Helmet,
        required_level: 1,
        base_armor: None,
        base_evasion: None,
        base_energy_shield: None,
    }
}

#[test]
fn default_catalog_is_empty_and_loading() {
    let state = CatalogState::default();
    assert!(state.item_types.is_empty());
    assert!(state.item_bases.is_empty());
    assert!(state.crafting_methods.is_empty());
    assert!(state.loading);
}

#[test]
fn successful_results_populate_each_family() {
    let mut state = CatalogState::default();
    state.apply_item_types(Ok(vec![sample_type("armour")]));
    state.apply_item_bases(Ok(vec![sample_base("iron-hat")]));
    state.apply_crafting_methods(Ok(Vec::new()));
    state.finish_loading();

    assert_eq!(state.item_types.len(), 1);
    assert_eq!(state.item_bases.len(), 1);
    assert!(!state.loading);
}

#[test]
fn failed_family_stays_empty_while_others_load() {
    let mut state = CatalogState::default();
    state.apply_item_types(Ok(vec![sample_type("armour")]));
    state.apply_item_bases(Ok(vec![sample_base("iron-hat")]));
    state.apply_crafting_methods(Err("crafting_methods request failed: 500".to_owned()));
    state.finish_loading();

    assert_eq!(state.item_types.len(), 1);
    assert_eq!(state.item_bases.len(), 1);
    assert!(state.crafting_methods.is_empty());
    assert!(!state.loading, "load completes even with a failed family");
}

#[test]
fn failure_does_not_clobber_previously_loaded_data() {
    let mut state = CatalogState::default();
    state.apply_item_bases(Ok(vec![sample_base("iron-hat")]));
    state.apply_item_bases(Err("item_bases request failed: 502".to_owned()));
    assert_eq!(state.item_bases.len(), 1);
}
