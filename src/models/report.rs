use crate::models::item::{Item, ThrownClass, WeaponEntry};

/// One line of the accuracy table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub id: String,
    pub name: String,
    pub class: ThrownClass,
    pub accuracy: i64,
}

impl ReportRow {
    pub fn from_weapon(item: &Item, class: ThrownClass, weapon: &WeaponEntry) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            class,
            accuracy: weapon.accuracy,
        }
    }
}
