use core::ops;

/// A node index is the position of a node in the arena.
/// NodeID 0 is always the root group.
pub type NodeID = usize;

/// The root group, which captures the whole match.
pub const ROOT: NodeID = 0;

/// A group index is u16.
/// CaptureGroupID 0 corresponds to the whole pattern.
pub type CaptureGroupID = u16;

/// The maximum number of capture groups supported, including group 0.
pub const MAX_CAPTURE_GROUPS: usize = 65535;

/// One capture slot: where a group began and how much it consumed.
/// An absent `begin` means the group did not participate in the match.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    pub begin: Option<usize>,
    pub len: usize,
}

impl Slot {
    /// \return the captured range, or None if the group did not match.
    #[inline]
    pub fn range(&self) -> Option<ops::Range<usize>> {
        self.begin.map(|begin| begin..begin + self.len)
    }

    /// \return whether the group was captured.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.begin.is_some()
    }

    /// Reset the slot to "not captured."
    #[inline]
    pub fn reset(&mut self) {
        *self = Slot::default();
    }
}
