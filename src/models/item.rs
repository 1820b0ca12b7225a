use serde::Deserialize;
use serde_json::Value;

/// Item record matching an entry of data/items.json.
/// Decoding never fails on a record: null or wrong-typed fields fall back
/// to their defaults, and a non-object record becomes an empty item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Value")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub item_type: Option<String>,
    pub weapons: Vec<WeaponEntry>,
}

/// One weapon variant of an item
#[derive(Debug, Clone, Default)]
pub struct WeaponEntry {
    pub class: Option<String>,
    pub accuracy: i64,
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        let weapons = match value.get("weapons") {
            Some(Value::Array(entries)) => entries.iter().map(WeaponEntry::from).collect(),
            _ => Vec::new(),
        };
        Self {
            id: string_field(&value, "id").unwrap_or_default(),
            name: string_field(&value, "name").unwrap_or_default(),
            item_type: string_field(&value, "type"),
            weapons,
        }
    }
}

impl From<&Value> for WeaponEntry {
    fn from(value: &Value) -> Self {
        Self {
            class: string_field(value, "class"),
            // Non-integer accuracy counts as missing
            accuracy: value.get("accuracy").and_then(Value::as_i64).unwrap_or(0),
        }
    }
}

impl Item {
    /// First weapon entry whose class is throwable, with its parsed class
    pub fn first_thrown_weapon(&self) -> Option<(ThrownClass, &WeaponEntry)> {
        self.weapons.iter().find_map(|weapon| {
            let class = weapon.class.as_deref().and_then(ThrownClass::from_class)?;
            Some((class, weapon))
        })
    }
}

/// Weapon classes counted as thrown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrownClass {
    Javelin,
    ThrowingAxe,
    ThrowingKnife,
    Stone,
    Boulder,
}

impl ThrownClass {
    pub const ALL: [ThrownClass; 5] = [
        ThrownClass::Javelin,
        ThrownClass::ThrowingAxe,
        ThrownClass::ThrowingKnife,
        ThrownClass::Stone,
        ThrownClass::Boulder,
    ];

    /// Exact, case-sensitive match on the class name
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "Javelin" => Some(ThrownClass::Javelin),
            "ThrowingAxe" => Some(ThrownClass::ThrowingAxe),
            "ThrowingKnife" => Some(ThrownClass::ThrowingKnife),
            "Stone" => Some(ThrownClass::Stone),
            "Boulder" => Some(ThrownClass::Boulder),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThrownClass::Javelin => "Javelin",
            ThrownClass::ThrowingAxe => "ThrowingAxe",
            ThrownClass::ThrowingKnife => "ThrowingKnife",
            ThrownClass::Stone => "Stone",
            ThrownClass::Boulder => "Boulder",
        }
    }
}

impl std::fmt::Display for ThrownClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_defaults() {
        let item: Item = serde_json::from_str("{}").unwrap();
        assert_eq!(item.id, "");
        assert_eq!(item.name, "");
        assert!(item.item_type.is_none());
        assert!(item.weapons.is_empty());
    }

    #[test]
    fn test_weapon_accuracy_defaults_to_zero() {
        let weapon = WeaponEntry::from(&json!({"class": "Stone"}));
        assert_eq!(weapon.class.as_deref(), Some("Stone"));
        assert_eq!(weapon.accuracy, 0);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{
            "id": "crpg_throwing_axe_h0",
            "name": "Francisca",
            "type": "Thrown",
            "culture": "Vlandia",
            "tier": 4.2,
            "weapons": [{"class": "ThrowingAxe", "accuracy": 88, "thrustDamage": 0}]
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type.as_deref(), Some("Thrown"));
        assert_eq!(item.weapons.len(), 1);
        assert_eq!(item.weapons[0].accuracy, 88);
    }

    #[test]
    fn test_wrong_field_types_default() {
        let item: Item = serde_json::from_str(
            r#"{"id": 5, "name": null, "type": ["Thrown"], "weapons": null}"#,
        )
        .unwrap();
        assert_eq!(item.id, "");
        assert_eq!(item.name, "");
        assert!(item.item_type.is_none());
        assert!(item.weapons.is_empty());
    }

    #[test]
    fn test_bad_weapon_entries_default() {
        let item = Item::from(json!({
            "id": "crpg_rock",
            "type": "Thrown",
            "weapons": [7, {"class": null, "accuracy": 12.5}, {"class": "Stone", "accuracy": "high"}]
        }));
        assert_eq!(item.weapons.len(), 3);
        assert!(item.weapons[0].class.is_none());
        assert!(item.weapons[1].class.is_none());
        assert_eq!(item.weapons[1].accuracy, 0);
        assert_eq!(item.weapons[2].class.as_deref(), Some("Stone"));
        assert_eq!(item.weapons[2].accuracy, 0);
    }

    #[test]
    fn test_non_object_record_is_empty_item() {
        let items: Vec<Item> = serde_json::from_str(r#"[3, "crpg_x", null]"#).unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.id.is_empty() && i.item_type.is_none()));
    }

    #[test]
    fn test_thrown_class_round_trip_names() {
        for class in ThrownClass::ALL {
            assert_eq!(ThrownClass::from_class(class.as_str()), Some(class));
            assert_eq!(class.to_string(), class.as_str());
        }
    }

    #[test]
    fn test_thrown_class_rejects_others() {
        assert_eq!(ThrownClass::from_class("Arrow"), None);
        assert_eq!(ThrownClass::from_class("javelin"), None);
        assert_eq!(ThrownClass::from_class("OneHandedPolearm"), None);
        assert_eq!(ThrownClass::from_class(""), None);
    }

    #[test]
    fn test_first_thrown_weapon_skips_non_thrown() {
        let item = Item {
            id: "crpg_rock".to_string(),
            name: "Rock".to_string(),
            item_type: Some("Thrown".to_string()),
            weapons: vec![
                WeaponEntry { class: Some("Arrow".to_string()), accuracy: 70 },
                WeaponEntry { class: None, accuracy: 99 },
                WeaponEntry { class: Some("Stone".to_string()), accuracy: 40 },
                WeaponEntry { class: Some("Boulder".to_string()), accuracy: 10 },
            ],
        };
        let (class, weapon) = item.first_thrown_weapon().unwrap();
        assert_eq!(class, ThrownClass::Stone);
        assert_eq!(weapon.accuracy, 40);
    }

    #[test]
    fn test_first_thrown_weapon_none() {
        let item = Item {
            weapons: vec![WeaponEntry { class: Some("Bow".to_string()), accuracy: 95 }],
            ..Default::default()
        };
        assert!(item.first_thrown_weapon().is_none());
    }
}
