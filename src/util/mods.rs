//! Display ordering for modifier lists.
//!
//! The store already orders listings by tier, but mods arrive nested inside
//! their pools, so the flattened display list is re-sorted here. Grouping by
//! the mutual-exclusivity tag is presentation only; duplicate-group exclusion
//! is crafting semantics and does not happen in this client.

#[cfg(test)]
#[path = "mods_test.rs"]
mod mods_test;

use crate::net::types::ItemMod;

/// Sort mods for display: tier ascending with untiered mods last, ties broken
/// by grouping tag, then by Russian name.
#[must_use]
pub fn sorted_for_display(mods: &[ItemMod]) -> Vec<ItemMod> {
    let mut ordered = mods.to_vec();
    ordered.sort_by(|a, b| {
        display_tier(a)
            .cmp(&display_tier(b))
            .then_with(|| a.mod_group.cmp(&b.mod_group))
            .then_with(|| a.name_ru.cmp(&b.name_ru))
    });
    ordered
}

/// Group a mod list by grouping tag for display.
///
/// Groups appear in order of their best (lowest) tier member within the
/// display sort; members keep their tier order inside the group.
#[must_use]
pub fn grouped_by_mod_group(mods: &[ItemMod]) -> Vec<(String, Vec<ItemMod>)> {
    let mut groups: Vec<(String, Vec<ItemMod>)> = Vec::new();
    for item_mod in sorted_for_display(mods) {
        match groups.iter_mut().find(|(group, _)| *group == item_mod.mod_group) {
            Some((_, members)) => members.push(item_mod),
            None => groups.push((item_mod.mod_group.clone(), vec![item_mod])),
        }
    }
    groups
}

fn display_tier(item_mod: &ItemMod) -> i32 {
    item_mod.tier.unwrap_or(i32::MAX)
}
