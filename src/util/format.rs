//! Russian display-text helpers for the planner UI.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{ItemRequirement, StatType};

/// Option label for a base select entry, e.g. `Железная каска (ур. 3)`.
#[must_use]
pub fn base_option_label(name: &str, required_level: i32) -> String {
    format!("{name} (ур. {required_level})")
}

/// Value range annotation for a modifier, e.g. `(5 – 12)`.
///
/// Returns `None` when the modifier rolls no numeric value.
#[must_use]
pub fn value_range_text(min_value: Option<f64>, max_value: Option<f64>) -> Option<String> {
    match (min_value, max_value) {
        (Some(min), Some(max)) => Some(format!("({} – {})", trim_number(min), trim_number(max))),
        _ => None,
    }
}

/// Tier and weight annotation, e.g. `Тир 2 • Вес 500`.
///
/// Untiered modifiers show only the weight.
#[must_use]
pub fn tier_weight_text(tier: Option<i32>, weight: i32) -> String {
    match tier {
        Some(tier) => format!("Тир {tier} • Вес {weight}"),
        None => format!("Вес {weight}"),
    }
}

/// Cost line for a crafting method, e.g. `Стоимость: 3 chaos_orb`.
///
/// Returns `None` when the method is free.
#[must_use]
pub fn cost_text(cost_amount: Option<i32>, cost_type: Option<&str>) -> Option<String> {
    let amount = cost_amount?;
    Some(match cost_type {
        Some(resource) => format!("Стоимость: {amount} {resource}"),
        None => format!("Стоимость: {amount}"),
    })
}

/// Modifier count with Russian pluralization, e.g. `1 модификатор`,
/// `3 модификатора`, `11 модификаторов`.
#[must_use]
pub fn mod_count_text(count: usize) -> String {
    format!("{count} {}", plural_modifiers(count))
}

/// Russian label for a stat kind.
#[must_use]
pub fn stat_type_label(stat_type: StatType) -> &'static str {
    match stat_type {
        StatType::PhysicalDamage => "Физический урон",
        StatType::ElementalDamage => "Стихийный урон",
        StatType::Armor => "Броня",
        StatType::Evasion => "Уклонение",
        StatType::EnergyShield => "Энергетический щит",
        StatType::Block => "Блок",
        StatType::CriticalStrike => "Критический удар",
        StatType::AttackSpeed => "Скорость атаки",
        StatType::Unknown => "Прочее",
    }
}

/// Requirement line, e.g. `Требуется: ур. 3, Сила 10, Ловкость 5, Интеллект 0`.
#[must_use]
pub fn requirement_text(requirement: &ItemRequirement) -> String {
    format!(
        "Требуется: ур. {}, Сила {}, Ловкость {}, Интеллект {}",
        requirement.level, requirement.strength, requirement.dexterity, requirement.intelligence
    )
}

fn plural_modifiers(count: usize) -> &'static str {
    let tens = count % 100;
    let units = count % 10;
    if (11..=14).contains(&tens) {
        "модификаторов"
    } else if units == 1 {
        "модификатор"
    } else if (2..=4).contains(&units) {
        "модификатора"
    } else {
        "модификаторов"
    }
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
