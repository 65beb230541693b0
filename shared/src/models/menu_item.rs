//! Menu source record

use serde::{Deserialize, Serialize};

/// One purchasable catalog entry, as stored in the menu source file.
///
/// Immutable once loaded. Only rows with `availability && active` are
/// exposed to ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Stable unique identifier
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Unit price, non-negative, two decimal places
    pub price: f64,
    pub category: String,
    /// In stock right now
    pub availability: bool,
    /// Still on the menu at all
    pub active: bool,
}

impl MenuItem {
    /// Whether the item may be ordered
    pub fn is_orderable(&self) -> bool {
        self.availability && self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(availability: bool, active: bool) -> MenuItem {
        MenuItem {
            id: 1,
            name: "Garlic Bread".to_string(),
            description: "Toasted sourdough".to_string(),
            price: 5.0,
            category: "Starters".to_string(),
            availability,
            active,
        }
    }

    #[test]
    fn orderable_requires_both_flags() {
        assert!(item(true, true).is_orderable());
        assert!(!item(false, true).is_orderable());
        assert!(!item(true, false).is_orderable());
        assert!(!item(false, false).is_orderable());
    }

    #[test]
    fn deserializes_menu_source_row() {
        let raw = r#"{
            "id": 3,
            "name": "Margherita",
            "description": "Tomato, mozzarella, basil",
            "price": 18.5,
            "category": "Pizza",
            "availability": true,
            "active": true
        }"#;
        let item: MenuItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.price, 18.5);
        assert!(item.is_orderable());
    }
}
