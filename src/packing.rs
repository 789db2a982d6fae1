//! Packing List Transitions
//!
//! Pure functions from (collection, action) to the next collection.
//! Inputs are never modified; callers replace their collection with the result.

use crate::models::{Item, ItemId};

/// Typed event raised by a UI control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackingAction {
    Add(Item),
    Toggle(ItemId),
    Delete(ItemId),
}

/// Append `item`; an id that is already present leaves the list as is
pub fn add_item(items: &[Item], item: Item) -> Vec<Item> {
    let mut next = items.to_vec();
    if !items.iter().any(|existing| existing.id == item.id) {
        next.push(item);
    }
    next
}

/// Flip `packed` on the item with `id`
pub fn toggle_item(items: &[Item], id: ItemId) -> Vec<Item> {
    items
        .iter()
        .map(|item| if item.id == id { item.toggled() } else { item.clone() })
        .collect()
}

/// Drop the item with `id`
pub fn delete_item(items: &[Item], id: ItemId) -> Vec<Item> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

pub fn apply(items: &[Item], action: &PackingAction) -> Vec<Item> {
    match action {
        PackingAction::Add(item) => add_item(items, item.clone()),
        PackingAction::Toggle(id) => toggle_item(items, *id),
        PackingAction::Delete(id) => delete_item(items, *id),
    }
}
