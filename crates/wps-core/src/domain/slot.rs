//! Primary / secondary slot of an attribute or goal.

use serde::{Deserialize, Serialize};
use wps_shared::constants::{MAX_PRIMARY_SLOTS, MAX_SECONDARY_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Primary,
    Secondary,
}

impl Slot {
    pub fn from_is_primary(is_primary: bool) -> Self {
        if is_primary {
            Slot::Primary
        } else {
            Slot::Secondary
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Slot::Primary)
    }

    pub fn capacity(&self) -> usize {
        match self {
            Slot::Primary => MAX_PRIMARY_SLOTS,
            Slot::Secondary => MAX_SECONDARY_SLOTS,
        }
    }

    pub fn other(&self) -> Slot {
        match self {
            Slot::Primary => Slot::Secondary,
            Slot::Secondary => Slot::Primary,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Slot::Primary => "primary",
            Slot::Secondary => "secondary",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Slot::Primary => "Primary",
            Slot::Secondary => "Secondary",
        }
    }
}

/// Primary/secondary occupancy of one collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SlotCounts {
    pub primary: usize,
    pub secondary: usize,
}

impl SlotCounts {
    pub fn from_flags<I: IntoIterator<Item = bool>>(flags: I) -> Self {
        flags.into_iter().fold(Self::default(), |mut counts, is_primary| {
            if is_primary {
                counts.primary += 1;
            } else {
                counts.secondary += 1;
            }
            counts
        })
    }

    pub fn count(&self, slot: Slot) -> usize {
        match slot {
            Slot::Primary => self.primary,
            Slot::Secondary => self.secondary,
        }
    }

    pub fn is_full(&self, slot: Slot) -> bool {
        self.count(slot) >= slot.capacity()
    }

    pub fn remaining(&self, slot: Slot) -> usize {
        slot.capacity().saturating_sub(self.count(slot))
    }

    /// Slot that the next added entry lands in: primary until full, then
    /// secondary. `None` when both are full.
    pub fn next_open(&self) -> Option<Slot> {
        if !self.is_full(Slot::Primary) {
            Some(Slot::Primary)
        } else if !self.is_full(Slot::Secondary) {
            Some(Slot::Secondary)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_next_open() {
        let counts = SlotCounts::from_flags([true, true, true, false]);
        assert_eq!(counts.primary, 3);
        assert_eq!(counts.secondary, 1);
        assert!(counts.is_full(Slot::Primary));
        assert_eq!(counts.remaining(Slot::Secondary), 2);
        assert_eq!(counts.next_open(), Some(Slot::Secondary));

        let full = SlotCounts::from_flags([true, true, true, false, false, false]);
        assert_eq!(full.next_open(), None);
    }
}
