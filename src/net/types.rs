//! Row DTOs for the hosted store tables.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the store's relational rows one-to-one so
//! serde can decode responses straight off the wire, including the nested
//! child arrays produced by embedded selects. Entities are flat reference
//! data; nothing here computes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Equipment classification of an item base. Fixed by the store schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClass {
    BodyArmour,
    Helmet,
    Gloves,
    Boots,
    Weapon,
    Shield,
    Amulet,
    Ring,
    Belt,
}

impl ItemClass {
    /// Wire value of the class as stored in `item_class` columns.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BodyArmour => "body_armour",
            Self::Helmet => "helmet",
            Self::Gloves => "gloves",
            Self::Boots => "boots",
            Self::Weapon => "weapon",
            Self::Shield => "shield",
            Self::Amulet => "amulet",
            Self::Ring => "ring",
            Self::Belt => "belt",
        }
    }
}

/// Modifier position on an item. Fixed by the store schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModType {
    Prefix,
    Suffix,
    Implicit,
}

impl ModType {
    /// Wire value of the modifier type as stored in `mod_type` columns.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
            Self::Implicit => "implicit",
        }
    }
}

/// Stat kind tag on a base-item stat roll.
///
/// `Unknown` absorbs tags added to the store after this client shipped so a
/// new row cannot break catalog decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatType {
    PhysicalDamage,
    ElementalDamage,
    Armor,
    Evasion,
    EnergyShield,
    Block,
    CriticalStrike,
    AttackSpeed,
    #[serde(other)]
    Unknown,
}

/// A template item before modifiers are applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemBase {
    /// Unique row identifier (UUID string).
    pub id: String,
    /// Russian display name.
    pub name_ru: String,
    /// English display name.
    pub name_en: String,
    /// Equipment classification used for slot filtering.
    pub item_class: ItemClass,
    /// Character level required to equip.
    pub required_level: i32,
    /// Base armour value, when the class provides one.
    pub base_armor: Option<i32>,
    /// Base evasion value, when the class provides one.
    pub base_evasion: Option<i32>,
    /// Base energy shield value, when the class provides one.
    pub base_energy_shield: Option<i32>,
}

/// An item base with all child rows embedded, as returned by the nested
/// single-row detail select.
///
/// Absent child arrays decode as empty collections, not errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemBaseDetail {
    #[serde(flatten)]
    pub base: ItemBase,
    /// Stat rolls scoped to this base.
    #[serde(default)]
    pub item_stats: Vec<ItemStat>,
    /// At most one requirement row per base.
    #[serde(default)]
    pub item_requirements: Option<ItemRequirement>,
    /// Cosmetic/quality variants of this base.
    #[serde(default)]
    pub item_variants: Vec<ItemVariant>,
    /// Modifiers attached directly to this base.
    #[serde(default)]
    pub item_mods: Vec<ItemMod>,
}

/// Classification metadata for a family of item bases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    /// Unique row identifier (UUID string).
    pub id: String,
    /// Russian display name.
    pub name_ru: String,
    /// English display name.
    pub name_en: String,
    /// Russian description, if any.
    pub description_ru: Option<String>,
    /// English description, if any.
    pub description_en: Option<String>,
    /// Icon image URL, if any.
    pub icon_url: Option<String>,
}

/// An item type with its subtypes embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemTypeWithSubtypes {
    #[serde(flatten)]
    pub item_type: ItemType,
    /// Subtypes referencing this type.
    #[serde(default)]
    pub item_subtypes: Vec<ItemSubtype>,
}

/// Finer-grained classification under one [`ItemType`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemSubtype {
    /// Unique row identifier (UUID string).
    pub id: String,
    /// Parent type identifier.
    pub type_id: String,
    /// Russian display name.
    pub name_ru: String,
    /// English display name.
    pub name_en: String,
    /// Russian description, if any.
    pub description_ru: Option<String>,
    /// English description, if any.
    pub description_en: Option<String>,
}

/// A stat roll range on one item base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemStat {
    /// Unique row identifier (UUID string).
    pub id: String,
    /// Owning item base.
    pub item_base_id: String,
    /// Kind of stat this range rolls.
    pub stat_type: StatType,
    /// Lower bound of the roll.
    pub min_value: f64,
    /// Upper bound of the roll.
    pub max_value: f64,
}

/// Level and attribute thresholds to equip one item base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemRequirement {
    /// Unique row identifier (UUID string).
    pub id: String,
    /// Owning item base.
    pub item_base_id: String,
    /// Required character level.
    pub level: i32,
    /// Required strength.
    pub strength: i32,
    /// Required dexterity.
    pub dexterity: i32,
    /// Required intelligence.
    pub intelligence: i32,
}

/// A named cosmetic/quality variant of an item base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemVariant {
    /// Unique row identifier (UUID string).
    pub id: String,
    /// Owning item base.
    pub item_base_id: String,
    /// Russian variant name.
    pub variant_name_ru: String,
    /// English variant name.
    pub variant_name_en: String,
    /// Quality bonus description, if any.
    pub quality_bonus: Option<String>,
}

/// A rollable affix definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemAffix {
    /// Unique row identifier (UUID string).
    pub id: String,
    /// Russian display name.
    pub name_ru: String,
    /// English display name.
    pub name_en: String,
    /// Modifier position (prefix/suffix/implicit).
    pub affix_type: ModType,
    /// Tier, lower is stronger.
    pub tier: i32,
    /// Grouping tag controlling mutual exclusivity when rolling.
    pub mod_group: String,
    /// Roll weight.
    pub weight: i32,
    /// Minimum item level for this affix to roll.
    pub min_level: i32,
    /// Russian stat description text.
    pub stat_text_ru: String,
    /// English stat description text.
    pub stat_text_en: String,
    /// Lower numeric bound, if the affix rolls a value.
    pub min_value: Option<f64>,
    /// Upper numeric bound, if the affix rolls a value.
    pub max_value: Option<f64>,
    /// Free-form classification tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A rollable modifier definition as referenced by mod pools.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemMod {
    /// Unique row identifier (UUID string).
    pub id: String,
    /// Russian display name.
    pub name_ru: String,
    /// English display name.
    pub name_en: String,
    /// Grouping tag controlling mutual exclusivity when rolling.
    pub mod_group: String,
    /// Modifier position (prefix/suffix/implicit).
    pub mod_type: ModType,
    /// Tier, when the modifier is tiered.
    pub tier: Option<i32>,
    /// Roll weight.
    pub weight: i32,
    /// Minimum item level for this modifier to roll.
    pub min_level: i32,
    /// Russian stat description text.
    pub stat_text_ru: String,
    /// English stat description text.
    pub stat_text_en: String,
    /// Lower numeric bound, if the modifier rolls a value.
    pub min_value: Option<f64>,
    /// Upper numeric bound, if the modifier rolls a value.
    pub max_value: Option<f64>,
}

/// The set of modifiers eligible to roll on one item class and modifier type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModPool {
    /// Unique row identifier (UUID string).
    pub id: String,
    /// Russian display name.
    pub name_ru: String,
    /// English display name.
    pub name_en: String,
    /// Item class this pool applies to.
    pub item_class: ItemClass,
    /// Modifier position this pool fills.
    pub mod_type: ModType,
}

/// A mod pool with its member modifiers embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModPoolWithMods {
    #[serde(flatten)]
    pub pool: ModPool,
    /// Member modifiers of this pool.
    #[serde(default)]
    pub item_mods: Vec<ItemMod>,
}

/// A named crafting operation a player can apply to an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CraftingMethod {
    /// Unique row identifier (UUID string).
    pub id: String,
    /// Russian display name.
    pub name_ru: String,
    /// English display name.
    pub name_en: String,
    /// Russian description.
    pub description_ru: String,
    /// English description.
    pub description_en: String,
    /// Resource tag of the cost, if the method costs anything.
    pub cost_type: Option<String>,
    /// Amount of the cost resource, if the method costs anything.
    pub cost_amount: Option<i32>,
}
