use super::*;

#[test]
fn base_option_label_includes_level() {
    assert_eq!(base_option_label("Железная каска", 3), "Железная каска (ур. 3)");
}

#[test]
fn value_range_requires_both_bounds() {
    assert_eq!(value_range_text(Some(5.0), Some(12.0)), Some("(5 – 12)".to_owned()));
    assert_eq!(value_range_text(Some(5.0), None), None);
    assert_eq!(value_range_text(None, None), None);
}

#[test]
fn value_range_keeps_fractional_bounds() {
    assert_eq!(
        value_range_text(Some(0.5), Some(1.5)),
        Some("(0.5 – 1.5)".to_owned())
    );
}

#[test]
fn tier_weight_text_drops_missing_tier() {
    assert_eq!(tier_weight_text(Some(2), 500), "Тир 2 • Вес 500");
    assert_eq!(tier_weight_text(None, 1000), "Вес 1000");
}

#[test]
fn cost_text_requires_an_amount() {
    assert_eq!(
        cost_text(Some(3), Some("chaos_orb")),
        Some("Стоимость: 3 chaos_orb".to_owned())
    );
    assert_eq!(cost_text(Some(3), None), Some("Стоимость: 3".to_owned()));
    assert_eq!(cost_text(None, Some("chaos_orb")), None);
}

#[test]
fn stat_type_labels_cover_known_kinds() {
    use crate::net::types::StatType;
    assert_eq!(stat_type_label(StatType::Armor), "Броня");
    assert_eq!(stat_type_label(StatType::EnergyShield), "Энергетический щит");
    assert_eq!(stat_type_label(StatType::Unknown), "Прочее");
}

#[test]
fn requirement_text_lists_all_thresholds() {
    use crate::net::types::ItemRequirement;
    let requirement = ItemRequirement {
        id: "req-1".to_owned(),
        item_base_id: "base-1".to_owned(),
        level: 3,
        strength: 10,
        dexterity: 5,
        intelligence: 0,
    };
    assert_eq!(
        requirement_text(&requirement),
        "Требуется: ур. 3, Сила 10, Ловкость 5, Интеллект 0"
    );
}

#[test]
fn mod_count_pluralizes_russian_forms() {
    assert_eq!(mod_count_text(1), "1 модификатор");
    assert_eq!(mod_count_text(2), "2 модификатора");
    assert_eq!(mod_count_text(5), "5 модификаторов");
    assert_eq!(mod_count_text(11), "11 модификаторов");
    assert_eq!(mod_count_text(21), "21 модификатор");
    assert_eq!(mod_count_text(104), "104 модификатора");
    assert_eq!(mod_count_text(0), "0 модификаторов");
}
