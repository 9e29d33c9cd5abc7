//! Vergabe stabiler Entity-IDs.

use serde::{Deserialize, Serialize};

/// Monoton steigender ID-Zähler. IDs werden nie wiederverwendet, damit
/// Referenzen laufender Drags nach Löschungen nicht auf neue Entities zeigen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    /// Vergibt die nächste freie ID.
    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    /// Stellt sicher, dass künftige IDs größer als `used` sind.
    pub fn reserve_above(&mut self, used: u64) {
        self.next = self.next.max(used.saturating_add(1));
    }

    /// IDs unterhalb des Zählers gelten als vergeben (auch die nie vergebene 0).
    pub fn is_allocated(&self, id: u64) -> bool {
        id < self.next
    }
}
