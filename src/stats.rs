//! Packing Progress
//!
//! Aggregates shown in the footer.

use crate::models::Item;

pub const EMPTY_LIST_PROMPT: &str = "Start adding some items to your packing list";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackingStats {
    pub total: usize,
    pub packed: usize,
    /// Packed share, rounded half-up to a whole percent
    pub percentage: u32,
}

impl PackingStats {
    /// `None` for an empty list; no percentage is computed then
    pub fn compute(items: &[Item]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let total = items.len();
        let packed = items.iter().filter(|item| item.packed).count();
        let percentage = ((packed * 100 + total / 2) / total) as u32;
        Some(Self {
            total,
            packed,
            percentage,
        })
    }
}

/// Footer sentence for the current list
pub fn stats_message(items: &[Item]) -> String {
    match PackingStats::compute(items) {
        None => EMPTY_LIST_PROMPT.to_string(),
        Some(stats) => format!(
            "You have {} items in the list. You already packed {} ({}%).",
            stats.total, stats.packed, stats.percentage
        ),
    }
}
