//! Equipment slot table for the planner grid.
//!
//! DESIGN
//! ======
//! Slots are fixed configuration, not store data: the grid shape never
//! changes, only which base occupies a slot. Keeping the table in code avoids
//! a pointless fetch for ten constant rows.

#[cfg(test)]
#[path = "slots_test.rs"]
mod slots_test;

use crate::net::types::ItemClass;

/// One cell of the equipment grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipmentSlot {
    /// Stable slot identifier, also the grid position index.
    pub id: u8,
    /// Russian display label.
    pub label: &'static str,
    /// Item class this slot accepts.
    pub item_class: ItemClass,
}

/// The ten planner slots in grid order. Rings appear twice on purpose.
pub const EQUIPMENT_SLOTS: [EquipmentSlot; 10] = [
    EquipmentSlot { id: 0, label: "Шлем", item_class: ItemClass::Helmet },
    EquipmentSlot { id: 1, label: "Амулет", item_class: ItemClass::Amulet },
    EquipmentSlot { id: 2, label: "Оружие", item_class: ItemClass::Weapon },
    EquipmentSlot { id: 3, label: "Нагрудник", item_class: ItemClass::BodyArmour },
    EquipmentSlot { id: 4, label: "Кольцо", item_class: ItemClass::Ring },
    EquipmentSlot { id: 5, label: "Щит", item_class: ItemClass::Shield },
    EquipmentSlot { id: 6, label: "Перчатки", item_class: ItemClass::Gloves },
    EquipmentSlot { id: 7, label: "Кольцо", item_class: ItemClass::Ring },
    EquipmentSlot { id: 8, label: "Ботинки", item_class: ItemClass::Boots },
    EquipmentSlot { id: 9, label: "Пояс", item_class: ItemClass::Belt },
];

/// Look up a slot by its identifier.
#[must_use]
pub fn slot_by_id(id: u8) -> Option<EquipmentSlot> {
    EQUIPMENT_SLOTS.iter().copied().find(|slot| slot.id == id)
}
