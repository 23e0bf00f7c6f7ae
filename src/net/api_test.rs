use super::*;

#[test]
fn request_url_joins_base_path_and_query() {
    let config = StoreConfig {
        base_url: "https://store.example".to_owned(),
        anon_key: "anon".to_owned(),
    };
    let url = request_url(&config, &crafting_methods_select());
    assert_eq!(
        url,
        "https://store.example/rest/v1/crafting_methods?select=*&order=name_ru.asc"
    );
}

#[test]
fn empty_base_url_yields_relative_requests() {
    let config = StoreConfig::default();
    let url = request_url(&config, &item_bases_select());
    assert!(url.starts_with("/rest/v1/item_bases?"));
}

#[test]
fn store_request_failed_message_formats_status() {
    assert_eq!(
        store_request_failed_message(Table::ItemBases, 500),
        "item_bases request failed: 500"
    );
}

#[test]
fn row_not_found_message_names_the_table() {
    assert_eq!(
        row_not_found_message(Table::ItemRequirements),
        "item_requirements row not found"
    );
}

#[test]
fn store_decode_failed_message_names_the_table() {
    assert_eq!(
        store_decode_failed_message(Table::ModPools),
        "mod_pools response could not be decoded"
    );
}

#[test]
fn item_bases_listing_orders_by_localized_name() {
    assert_eq!(item_bases_select().query_string(), "select=*&order=name_ru.asc");
}

#[test]
fn item_types_listing_embeds_subtypes() {
    assert_eq!(
        item_types_select().query_string(),
        "select=*,item_subtypes(*)&order=name_ru.asc"
    );
}

#[test]
fn item_subtypes_listing_filters_by_parent_type() {
    assert_eq!(
        item_subtypes_select("type-9").query_string(),
        "select=*&type_id=eq.type-9&order=name_ru.asc"
    );
}

#[test]
fn affix_listing_orders_by_tier_then_name() {
    assert_eq!(
        item_affixes_select().query_string(),
        "select=*&order=tier.asc,name_ru.asc"
    );
}

#[test]
fn mod_listing_orders_by_tier_then_group() {
    assert_eq!(
        item_mods_select().query_string(),
        "select=*&order=tier.asc,mod_group.asc"
    );
}

#[test]
fn mods_by_type_filters_and_orders_by_tier() {
    assert_eq!(
        mods_by_type_select(ModType::Suffix).query_string(),
        "select=*&mod_type=eq.suffix&order=tier.asc,name_ru.asc"
    );
}

#[test]
fn stat_listing_filters_by_owning_base() {
    assert_eq!(
        item_stats_select("base-5").query_string(),
        "select=*&item_base_id=eq.base-5"
    );
}

#[test]
fn variant_listing_filters_and_orders_by_name() {
    assert_eq!(
        item_variants_select("base-5").query_string(),
        "select=*&item_base_id=eq.base-5&order=variant_name_ru.asc"
    );
}

#[test]
fn requirement_lookup_is_single_row() {
    let select = item_requirement_select("base-5");
    assert!(select.is_single());
    assert_eq!(select.table(), Table::ItemRequirements);
    assert_eq!(select.query_string(), "select=*&item_base_id=eq.base-5");
}

#[test]
fn mod_pool_listing_filters_by_class() {
    assert_eq!(
        mod_pools_select(ItemClass::Ring).query_string(),
        "select=*&item_class=eq.ring&order=name_ru.asc"
    );
}

#[test]
fn available_mods_embeds_pool_members() {
    assert_eq!(
        available_mods_select(ItemClass::BodyArmour).query_string(),
        "select=*,item_mods(*)&item_class=eq.body_armour&order=name_ru.asc"
    );
}

#[test]
fn detail_lookup_embeds_every_child_family_and_is_single() {
    let select = item_detail_select("base-5");
    assert!(select.is_single());
    assert_eq!(
        select.query_string(),
        "select=*,item_stats(*),item_requirements(*),item_variants(*),item_mods(*)&id=eq.base-5"
    );
}
