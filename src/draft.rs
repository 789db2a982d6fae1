//! Add-Form Draft
//!
//! Transient input state of the add form, kept apart from the view so the
//! submit rules can be tested without a browser.

use thiserror::Error;

use crate::models::{Item, ItemId};

/// Why a draft could not become an item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("description is empty")]
    EmptyDescription,
    #[error("quantity {0:?} is not one of the offered choices")]
    InvalidQuantity(String),
}

/// Description and quantity typed into the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub description: String,
    pub quantity: u32,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: 1,
        }
    }
}

impl ItemDraft {
    /// Turn the draft into a new unpacked item and reset the fields.
    ///
    /// An empty description leaves the draft untouched and no id is drawn.
    pub fn submit(&mut self, next_id: impl FnOnce() -> ItemId) -> Result<Item, DraftError> {
        if self.description.is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        let draft = std::mem::take(self);
        Ok(Item::new(next_id(), draft.description, draft.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_builds_item_and_resets() {
        let mut draft = ItemDraft {
            description: "Socks".to_string(),
            quantity: 3,
        };
        let item = draft.submit(|| ItemId(10)).unwrap();

        assert_eq!(item.id, ItemId(10));
        assert_eq!(item.description, "Socks");
        assert_eq!(item.quantity, 3);
        assert!(!item.packed);
        assert_eq!(draft, ItemDraft::default());
    }

    #[test]
    fn test_empty_description_is_ignored() {
        let mut draft = ItemDraft {
            description: String::new(),
            quantity: 2,
        };
        let result = draft.submit(|| panic!("no id for an empty draft"));
        assert_eq!(result, Err(DraftError::EmptyDescription));
        assert_eq!(draft.quantity, 2);
        assert!(draft.description.is_empty());
    }

    #[test]
    fn test_default_quantity_is_one() {
        assert_eq!(ItemDraft::default().quantity, 1);
    }
}
