//! Session selection state: active slot, chosen base, resolved detail.
//!
//! DESIGN
//! ======
//! Selection follows one linear progression — slot chosen, base chosen,
//! detail loaded — with no terminal states beyond "fetch failed, section
//! renders empty". Every transition is a synchronous method here; the async
//! fetch glue is a thin feature-gated layer on top.
//!
//! Detail and mod-pool fetches race against later selections: a user can pick
//! another base while the previous base's responses are in flight. Each
//! `begin_base_selection` bumps a generation counter and in-flight results
//! carry the generation they were started under; stale results are discarded
//! instead of overwriting the newer selection.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::net::types::{ItemBase, ItemBaseDetail, ItemMod, ItemVariant, ModPoolWithMods};
use crate::state::slots::EquipmentSlot;
use crate::util::mods::sorted_for_display;

/// Current selection and its resolved display data.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    pub slot: Option<EquipmentSlot>,
    pub base: Option<ItemBase>,
    pub detail: Option<ItemBaseDetail>,
    pub variant: Option<ItemVariant>,
    pub mod_pools: Vec<ModPoolWithMods>,
    generation: u64,
}

impl SelectionState {
    /// Record the active equipment slot and reset any base chosen for a
    /// previous slot. In-flight fetches for that base become stale.
    pub fn select_slot(&mut self, slot: EquipmentSlot) {
        self.slot = Some(slot);
        self.clear_base();
    }

    /// Record the chosen base and invalidate all in-flight fetch results.
    ///
    /// Returns the generation token the caller must present when applying the
    /// detail and mod-pool results for this selection.
    pub fn begin_base_selection(&mut self, base: ItemBase) -> u64 {
        self.base = Some(base);
        self.detail = None;
        self.variant = None;
        self.mod_pools = Vec::new();
        self.generation += 1;
        self.generation
    }

    /// Apply a fetched item detail. Stale generations are discarded.
    ///
    /// The first available variant, if any, becomes the default displayed
    /// variant.
    pub fn apply_detail(&mut self, generation: u64, detail: ItemBaseDetail) {
        if generation != self.generation {
            return;
        }
        self.variant = detail.item_variants.first().cloned();
        self.detail = Some(detail);
    }

    /// Apply fetched mod pools. Stale generations are discarded.
    pub fn apply_mods(&mut self, generation: u64, mod_pools: Vec<ModPoolWithMods>) {
        if generation != self.generation {
            return;
        }
        self.mod_pools = mod_pools;
    }

    /// Switch the displayed variant to another of the current base's variants.
    pub fn select_variant(&mut self, variant: ItemVariant) {
        self.variant = Some(variant);
    }

    /// Member modifiers of the resolved pools in display order.
    #[must_use]
    pub fn selected_mods(&self) -> Vec<ItemMod> {
        let flattened: Vec<ItemMod> = self
            .mod_pools
            .iter()
            .flat_map(|pool| pool.item_mods.iter().cloned())
            .collect();
        sorted_for_display(&flattened)
    }

    /// Generation token of the current selection.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn clear_base(&mut self) {
        self.base = None;
        self.detail = None;
        self.variant = None;
        self.mod_pools = Vec::new();
        self.generation += 1;
    }
}

/// Bases whose item class matches the slot's, in their original relative
/// order. An empty result is valid — some classes have no bases yet.
#[must_use]
pub fn bases_for_slot(slot: EquipmentSlot, all_bases: &[ItemBase]) -> Vec<ItemBase> {
    all_bases
        .iter()
        .filter(|base| base.item_class == slot.item_class)
        .cloned()
        .collect()
}

/// Record the chosen base and start its two dependent fetches.
///
/// The detail and mod-pool requests run as independent tasks; each applies
/// its own result under the generation token taken at selection time, so a
/// superseded selection's late responses are dropped.
#[cfg(feature = "hydrate")]
pub fn select_base(
    config: crate::net::api::StoreConfig,
    selection: leptos::prelude::RwSignal<SelectionState>,
    base: ItemBase,
) {
    use leptos::prelude::Update as _;

    let mut generation = 0;
    selection.update(|state| generation = state.begin_base_selection(base.clone()));

    let item_class = base.item_class;
    let base_id = base.id;

    let detail_config = config.clone();
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_item_detail(&detail_config, &base_id).await {
            Ok(detail) => selection.update(|state| state.apply_detail(generation, detail)),
            Err(message) => log::warn!("item detail failed to load: {message}"),
        }
    });

    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_available_mods(&config, item_class).await {
            Ok(mod_pools) => selection.update(|state| state.apply_mods(generation, mod_pools)),
            Err(message) => log::warn!("mod pools failed to load: {message}"),
        }
    });
}

/// Non-browser stub: records the selection without starting fetches.
#[cfg(not(feature = "hydrate"))]
pub fn select_base(
    _config: crate::net::api::StoreConfig,
    selection: leptos::prelude::RwSignal<SelectionState>,
    base: ItemBase,
) {
    use leptos::prelude::Update as _;

    selection.update(|state| {
        let _ = state.begin_base_selection(base);
    });
}
