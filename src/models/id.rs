//! Employee id allocation.

use std::sync::atomic::{AtomicU64, Ordering};

/// The first id handed out by a fresh allocator.
pub const FIRST_ID: u64 = 1;

/// Hands out unique, strictly increasing employee ids.
///
/// The allocator is passed into every employee constructor rather than kept
/// as global state. Reading the next id and advancing the counter is a single
/// atomic operation, so an allocator shared between threads never hands out
/// the same id twice.
///
/// # Example
///
/// ```
/// use acme_roster::models::IdAllocator;
///
/// let ids = IdAllocator::new();
/// assert_eq!(ids.next_id(), 1);
/// assert_eq!(ids.next_id(), 2);
/// assert_eq!(ids.peek(), 3);
/// ```
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Creates an allocator whose first id is `1`.
    pub fn new() -> Self {
        Self::starting_at(FIRST_ID)
    }

    /// Creates an allocator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns the current id and advances the counter.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the id the next construction will receive.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }

    /// Moves the counter past `id_number` so it is never handed out.
    ///
    /// Never moves the counter backwards.
    pub fn reserve(&self, id_number: u64) {
        self.next
            .fetch_max(id_number.saturating_add(1), Ordering::Relaxed);
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
