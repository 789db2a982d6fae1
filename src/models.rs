//! Packing List Models
//!
//! Data structures shared by the store and the views.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::draft::DraftError;

/// Quantities offered by the add form
pub const QUANTITY_CHOICES: [u32; 3] = [1, 2, 3];

/// Unique item identifier (time-derived, see `ids`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single packing-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u32,
    #[serde(default)]
    pub packed: bool,
}

impl Item {
    pub fn new(id: ItemId, description: String, quantity: u32) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
        }
    }

    /// Same item with `packed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}

/// Parse a `<select>` value into one of `QUANTITY_CHOICES`
pub fn parse_quantity(value: &str) -> Result<u32, DraftError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|q| QUANTITY_CHOICES.contains(q))
        .ok_or_else(|| DraftError::InvalidQuantity(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_unpacked() {
        let item = Item::new(ItemId(7), "Socks".to_string(), 1);
        assert!(!item.packed);
        assert_eq!(item.id, ItemId(7));
    }

    #[test]
    fn test_toggled_only_flips_packed() {
        let item = Item::new(ItemId(7), "Socks".to_string(), 3);
        let toggled = item.toggled();
        assert!(toggled.packed);
        assert_eq!(toggled.description, "Socks");
        assert_eq!(toggled.quantity, 3);
        assert_eq!(toggled.toggled(), item);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
        assert_eq!(
            parse_quantity("4"),
            Err(DraftError::InvalidQuantity("4".to_string()))
        );
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("two").is_err());
    }

    #[test]
    fn test_item_json_shape() {
        let item: Item =
            serde_json::from_str(r#"{"id": 2, "description": "Pants", "quantity": 2}"#).unwrap();
        assert_eq!(item, Item::new(ItemId(2), "Pants".to_string(), 2));

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["packed"], false);
    }
}
