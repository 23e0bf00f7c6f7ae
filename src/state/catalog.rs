//! Reference-data catalog loaded once per session.
//!
//! DESIGN
//! ======
//! The initial load joins three independent fetches and applies each result on
//! its own: a failed family is logged and left empty while the others render
//! normally. The catalog never refetches — all entities are immutable
//! reference data owned by the remote store.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{CraftingMethod, ItemBase, ItemTypeWithSubtypes};

/// Reference data held in memory for the session.
#[derive(Clone, Debug)]
pub struct CatalogState {
    pub item_types: Vec<ItemTypeWithSubtypes>,
    pub item_bases: Vec<ItemBase>,
    pub crafting_methods: Vec<CraftingMethod>,
    pub loading: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            item_types: Vec::new(),
            item_bases: Vec::new(),
            crafting_methods: Vec::new(),
            loading: true,
        }
    }
}

impl CatalogState {
    /// Apply the item-types fetch result; a failure leaves the family empty.
    pub fn apply_item_types(&mut self, result: Result<Vec<ItemTypeWithSubtypes>, String>) {
        match result {
            Ok(item_types) => self.item_types = item_types,
            Err(message) => log::warn!("item types failed to load: {message}"),
        }
    }

    /// Apply the item-bases fetch result; a failure leaves the family empty.
    pub fn apply_item_bases(&mut self, result: Result<Vec<ItemBase>, String>) {
        match result {
            Ok(item_bases) => self.item_bases = item_bases,
            Err(message) => log::warn!("item bases failed to load: {message}"),
        }
    }

    /// Apply the crafting-methods fetch result; a failure leaves the family
    /// empty.
    pub fn apply_crafting_methods(&mut self, result: Result<Vec<CraftingMethod>, String>) {
        match result {
            Ok(crafting_methods) => self.crafting_methods = crafting_methods,
            Err(message) => log::warn!("crafting methods failed to load: {message}"),
        }
    }

    /// Mark the initial load finished, whatever subset arrived.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}

/// Kick off the one-time catalog load and apply the results as they land.
#[cfg(feature = "hydrate")]
pub fn load(config: crate::net::api::StoreConfig, catalog: leptos::prelude::RwSignal<CatalogState>) {
    use leptos::prelude::Update as _;

    leptos::task::spawn_local(async move {
        let (item_types, item_bases, crafting_methods) = futures::join!(
            crate::net::api::fetch_item_types(&config),
            crate::net::api::fetch_item_bases(&config),
            crate::net::api::fetch_crafting_methods(&config),
        );
        catalog.update(|state| {
            state.apply_item_types(item_types);
            state.apply_item_bases(item_bases);
            state.apply_crafting_methods(crafting_methods);
            state.finish_loading();
        });
    });
}
