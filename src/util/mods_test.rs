use super::*;
use crate::net::types::ModType;

fn sample_mod(name: &str, group: &str, tier: Option<i32>) -> ItemMod {
    ItemMod {
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
    }
}

#[test]
fn sort_orders_by_tier_ascending() {
    let mods = [
        sample_mod("c", "life", Some(3)),
        sample_mod("a", "life", Some(1)),
        sample_mod("b", "life", Some(2)),
    ];
    let names: Vec<String> = sorted_for_display(&mods).into_iter().map(|m| m.name_ru).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn untiered_mods_sort_last() {
    let mods = [
        sample_mod("implicit", "base", None),
        sample_mod("rolled", "life", Some(5)),
    ];
    let names: Vec<String> = sorted_for_display(&mods).into_iter().map(|m| m.name_ru).collect();
    assert_eq!(names, ["rolled", "implicit"]);
}

#[test]
fn tier_ties_break_by_group_then_name() {
    let mods = [
        sample_mod("b", "mana", Some(1)),
        sample_mod("a", "mana", Some(1)),
        sample_mod("z", "life", Some(1)),
    ];
    let names: Vec<String> = sorted_for_display(&mods).into_iter().map(|m| m.name_ru).collect();
    assert_eq!(names, ["z", "a", "b"]);
}

#[test]
fn sort_does_not_mutate_input() {
    let mods = [sample_mod("b", "life", Some(2)), sample_mod("a", "life", Some(1))];
    let _ = sorted_for_display(&mods);
    assert_eq!(mods[0].name_ru, "b");
}

#[test]
fn grouping_preserves_tier_order_within_groups() {
    let mods = [
        sample_mod("life-t2", "life", Some(2)),
        sample_mod("mana-t1", "mana", Some(1)),
        sample_mod("life-t1", "life", Some(1)),
    ];
    let groups = grouped_by_mod_group(&mods);
    assert_eq!(groups.len(), 2);
    // Both groups have a tier-1 member; the tier tie breaks by group name,
    // so "life" leads.
    assert_eq!(groups[0].0, "life");
    let life_names: Vec<&str> = groups[0].1.iter().map(|m| m.name_ru.as_str()).collect();
    assert_eq!(life_names, ["life-t1", "life-t2"]);
    assert_eq!(groups[1].0, "mana");
}

#[test]
fn duplicate_groups_are_not_deduplicated() {
    let mods = [
        sample_mod("first", "life", Some(1)),
        sample_mod("second", "life", Some(1)),
    ];
    let groups = grouped_by_mod_group(&mods);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].1.len(), 2);
}
