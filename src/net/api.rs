//! Read operations against the hosted store, one per entity family.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the store's
//! PostgREST endpoint, described by `storeq` descriptors. Non-browser builds
//! get stubs returning errors since the store is only reachable from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation surfaces a single undifferentiated failure as
//! `Err(String)`. Callers log and render the affected section empty; there are
//! no retries and no cause taxonomy. The one distinction the contract makes is
//! singular lookups: a single-row select that matches nothing is a "not found"
//! error, never a silent empty.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use storeq::{Direction, Select, Table};

use super::types::{
    CraftingMethod, ItemAffix, ItemBase, ItemBaseDetail, ItemClass, ItemMod, ItemRequirement,
    ItemStat, ItemSubtype, ItemTypeWithSubtypes, ItemVariant, ModPool, ModPoolWithMods, ModType,
};

/// Connection settings for the hosted store.
///
/// Resolved once at startup and provided to components via context. The URL
/// and key are baked in at compile time; an empty base URL produces relative
/// request paths, which works when the app is served behind a proxy to the
/// store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Store origin, e.g. `https://abc.supabase.co`. Empty for same-origin.
    pub base_url: String,
    /// Anonymous API key sent as `apikey` and bearer token.
    pub anon_key: String,
}

impl StoreConfig {
    /// Build the config from compile-time environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("GEARFORGE_STORE_URL").unwrap_or_default().to_owned(),
            anon_key: option_env!("GEARFORGE_STORE_KEY").unwrap_or_default().to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_url(config: &StoreConfig, select: &Select) -> String {
    format!("{}{}?{}", config.base_url, select.path(), select.query_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn store_request_failed_message(table: Table, status: u16) -> String {
    format!("{table} request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn row_not_found_message(table: Table) -> String {
    format!("{table} row not found")
}

#[cfg(any(test, feature = "hydrate"))]
fn store_decode_failed_message(table: Table) -> String {
    format!("{table} response could not be decoded")
}

/// HTTP status PostgREST returns when a single-row select matches zero or
/// more than one row.
#[cfg(any(test, feature = "hydrate"))]
const NOT_ACCEPTABLE: u16 = 406;

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, String> {
    Err("store not reachable outside the browser".to_owned())
}

#[cfg(feature = "hydrate")]
async fn fetch_decoded<T: serde::de::DeserializeOwned>(
    config: &StoreConfig,
    select: &Select,
) -> Result<T, String> {
    let mut request = gloo_net::http::Request::get(&request_url(config, select))
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {}", config.anon_key));
    if select.is_single() {
        request = request.header("Accept", "application/vnd.pgrst.object+json");
    }
    let resp = request.send().await.map_err(|e| e.to_string())?;
    if select.is_single() && resp.status() == NOT_ACCEPTABLE {
        return Err(row_not_found_message(select.table()));
    }
    if !resp.ok() {
        return Err(store_request_failed_message(select.table(), resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|_| store_decode_failed_message(select.table()))
}

// Descriptor constructors are split out from the fetch functions so the
// request shape of every operation stays testable without a browser.

#[cfg(any(test, feature = "hydrate"))]
fn item_bases_select() -> Select {
    Select::from(Table::ItemBases).order("name_ru", Direction::Asc)
}

#[cfg(any(test, feature = "hydrate"))]
fn item_types_select() -> Select {
    Select::from(Table::ItemTypes)
        .embed(Table::ItemSubtypes)
        .expect("item_types embeds item_subtypes")
        .order("name_ru", Direction::Asc)
}

#[cfg(any(test, feature = "hydrate"))]
fn item_subtypes_select(type_id: &str) -> Select {
    Select::from(Table::ItemSubtypes)
        .eq("type_id", type_id)
        .order("name_ru", Direction::Asc)
}

#[cfg(any(test, feature = "hydrate"))]
fn item_affixes_select() -> Select {
    Select::from(Table::ItemAffixes)
        .order("tier", Direction::Asc)
        .order("name_ru", Direction::Asc)
}

#[cfg(any(test, feature = "hydrate"))]
fn item_mods_select() -> Select {
    Select::from(Table::ItemMods)
        .order("tier", Direction::Asc)
        .order("mod_group", Direction::Asc)
}

#[cfg(any(test, feature = "hydrate"))]
fn mods_by_type_select(mod_type: ModType) -> Select {
    Select::from(Table::ItemMods)
        .eq("mod_type", mod_type.as_str())
        .order("tier", Direction::Asc)
        .order("name_ru", Direction::Asc)
}

#[cfg(any(test, feature = "hydrate"))]
fn item_stats_select(item_base_id: &str) -> Select {
    Select::from(Table::ItemStats).eq("item_base_id", item_base_id)
}

#[cfg(any(test, feature = "hydrate"))]
fn item_variants_select(item_base_id: &str) -> Select {
    Select::from(Table::ItemVariants)
        .eq("item_base_id", item_base_id)
        .order("variant_name_ru", Direction::Asc)
}

#[cfg(any(test, feature = "hydrate"))]
fn item_requirement_select(item_base_id: &str) -> Select {
    Select::from(Table::ItemRequirements)
        .eq("item_base_id", item_base_id)
        .single()
}

#[cfg(any(test, feature = "hydrate"))]
fn mod_pools_select(item_class: ItemClass) -> Select {
    Select::from(Table::ModPools)
        .eq("item_class", item_class.as_str())
        .order("name_ru", Direction::Asc)
}

#[cfg(any(test, feature = "hydrate"))]
fn available_mods_select(item_class: ItemClass) -> Select {
    Select::from(Table::ModPools)
        .embed(Table::ItemMods)
        .expect("mod_pools embeds item_mods")
        .eq("item_class", item_class.as_str())
        .order("name_ru", Direction::Asc)
}

#[cfg(any(test, feature = "hydrate"))]
fn crafting_methods_select() -> Select {
    Select::from(Table::CraftingMethods).order("name_ru", Direction::Asc)
}

#[cfg(any(test, feature = "hydrate"))]
fn item_detail_select(item_base_id: &str) -> Select {
    Select::from(Table::ItemBases)
        .embed(Table::ItemStats)
        .expect("item_bases embeds item_stats")
        .embed(Table::ItemRequirements)
        .expect("item_bases embeds item_requirements")
        .embed(Table::ItemVariants)
        .expect("item_bases embeds item_variants")
        .embed(Table::ItemMods)
        .expect("item_bases embeds item_mods")
        .eq("id", item_base_id)
        .single()
}

/// All item bases, ordered by Russian display name.
///
/// # Errors
///
/// Returns a short message when the request fails or cannot be decoded.
pub async fn fetch_item_bases(config: &StoreConfig) -> Result<Vec<ItemBase>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &item_bases_select()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        unavailable()
    }
}

/// All item types with their subtypes embedded, ordered by Russian name.
///
/// # Errors
///
/// Returns a short message when the request fails or cannot be decoded.
pub async fn fetch_item_types(config: &StoreConfig) -> Result<Vec<ItemTypeWithSubtypes>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &item_types_select()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        unavailable()
    }
}

/// Subtypes of one item type, ordered by Russian name.
///
/// # Errors
///
/// Returns a short message when the request fails or cannot be decoded.
pub async fn fetch_item_subtypes(
    config: &StoreConfig,
    type_id: &str,
) -> Result<Vec<ItemSubtype>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &item_subtypes_select(type_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, type_id);
        unavailable()
    }
}

/// All affix definitions, ordered by tier then Russian name.
///
/// # Errors
///
/// Returns a short message when the request fails or cannot be decoded.
pub async fn fetch_item_affixes(config: &StoreConfig) -> Result<Vec<ItemAffix>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &item_affixes_select()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        unavailable()
    }
}

/// All modifier definitions, ordered by tier then grouping tag.
///
/// # Errors
///
/// Returns a short message when the request fails or cannot be decoded.
pub async fn fetch_item_mods(config: &StoreConfig) -> Result<Vec<ItemMod>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &item_mods_select()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        unavailable()
    }
}

/// Modifiers of one position (prefix/suffix/implicit), ordered by tier then
/// Russian name.
///
/// # Errors
///
/// Returns a short message when the request fails or cannot be decoded.
pub async fn fetch_mods_by_type(
    config: &StoreConfig,
    mod_type: ModType,
) -> Result<Vec<ItemMod>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &mods_by_type_select(mod_type)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, mod_type);
        unavailable()
    }
}

/// Stat rolls of one item base.
///
/// # Errors
///
/// Returns a short message when the request fails or cannot be decoded.
pub async fn fetch_item_stats(
    config: &StoreConfig,
    item_base_id: &str,
) -> Result<Vec<ItemStat>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &item_stats_select(item_base_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, item_base_id);
        unavailable()
    }
}

/// Variants of one item base, ordered by Russian variant name.
///
/// # Errors
///
/// Returns a short message when the request fails or cannot be decoded.
pub async fn fetch_item_variants(
    config: &StoreConfig,
    item_base_id: &str,
) -> Result<Vec<ItemVariant>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &item_variants_select(item_base_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, item_base_id);
        unavailable()
    }
}

/// The requirement row of one item base.
///
/// Requirements are one-to-one with bases; a base without a requirement row
/// yields a "not found" error rather than an empty result.
///
/// # Errors
///
/// Returns a short message when the request fails, no row matches, or the
/// response cannot be decoded.
pub async fn fetch_item_requirement(
    config: &StoreConfig,
    item_base_id: &str,
) -> Result<ItemRequirement, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &item_requirement_select(item_base_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, item_base_id);
        unavailable()
    }
}

/// Mod pools for one item class, ordered by Russian name.
///
/// # Errors
///
/// Returns a short message when the request fails or cannot be decoded.
pub async fn fetch_mod_pools(
    config: &StoreConfig,
    item_class: ItemClass,
) -> Result<Vec<ModPool>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &mod_pools_select(item_class)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, item_class);
        unavailable()
    }
}

/// Mod pools for one item class with member modifiers embedded.
///
/// # Errors
///
/// Returns a short message when the request fails or cannot be decoded.
pub async fn fetch_available_mods(
    config: &StoreConfig,
    item_class: ItemClass,
) -> Result<Vec<ModPoolWithMods>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &available_mods_select(item_class)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, item_class);
        unavailable()
    }
}

/// All crafting methods, ordered by Russian name.
///
/// # Errors
///
/// Returns a short message when the request fails or cannot be decoded.
pub async fn fetch_crafting_methods(config: &StoreConfig) -> Result<Vec<CraftingMethod>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &crafting_methods_select()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        unavailable()
    }
}

/// One item base with stats, requirement, variants, and mods embedded.
///
/// # Errors
///
/// Returns a short message when the request fails, no row matches, or the
/// response cannot be decoded.
pub async fn fetch_item_detail(
    config: &StoreConfig,
    item_base_id: &str,
) -> Result<ItemBaseDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_decoded(config, &item_detail_select(item_base_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, item_base_id);
        unavailable()
    }
}
