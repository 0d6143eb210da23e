use serde::{Deserialize, Serialize};
use crate::books::Book;
use crate::books::dto::BookCopyDto;

/// Chooses which physical copy of a title to lend.
///
/// Implementations only select. Flipping the copy to borrowed is the lending
/// service's job, done while it still holds the title's lock.
pub trait AllocationStrategy: Sync + Send {
    /// Returns the position of the chosen copy in `copies`, or `None` when nothing can be lent.
    fn allocate(&self, copies: &[BookCopyDto]) -> Option<usize>;
}

// FirstAvailableStrategy lends the earliest-added copy that is on the shelf.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailableStrategy;

impl AllocationStrategy for FirstAvailableStrategy {
    fn allocate(&self, copies: &[BookCopyDto]) -> Option<usize> {
        copies.iter().position(|c| c.is_available())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum AllocationPolicy {
    FirstAvailable,
}

pub fn create_allocation_strategy(policy: AllocationPolicy) -> Box<dyn AllocationStrategy> {
    match policy {
        AllocationPolicy::FirstAvailable => {
            Box::new(FirstAvailableStrategy)
        }
    }
}
