use serde::Serialize;

/// Position of a node in the graph's node list (append order, 0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Index as a `usize` for slice access.
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// IO slot binding a decode, encode, or watermark node to an external byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IoId(pub u32);

impl std::fmt::Display for IoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Hands out IO slots `0, 1, 2, ...` in call order.
///
/// Slots are never reused or reclaimed, so after `n` allocations the issued slots are exactly
/// `[0, n)`.
#[derive(Debug, Clone, Default)]
pub struct IoAllocator {
    next: u32,
}

impl IoAllocator {
    /// Create an allocator whose first slot is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next slot.
    pub fn allocate(&mut self) -> IoId {
        let id = IoId(self.next);
        self.next += 1;
        id
    }

    /// Number of slots issued so far.
    pub fn issued(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/ids.rs"]
mod tests;
