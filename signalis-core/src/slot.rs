//! Slot identity.

use std::fmt;

/// Handle returned by slot registration and used to remove the slot later.
///
/// Ids come from a per-signal counter starting at zero. A signal never hands
/// out the same id twice, even after the slot it named has been removed. The
/// counter does not wrap: once `u64::MAX` has been assigned there is no next
/// id, and a signal refuses further registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u64);

impl SlotId {
    /// The first id a fresh signal assigns.
    pub const FIRST: SlotId = SlotId(0);

    /// Wraps a raw counter value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw counter value.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The id assigned right after this one, or `None` if this is the last.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl From<SlotId> for u64 {
    fn from(id: SlotId) -> Self {
        id.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}
