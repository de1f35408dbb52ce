//! Command history ring buffer.
//!
//! Static allocation: `N` slots of `CAP` bytes each. The newest entry sits
//! just behind `write_index`; once every slot is used the oldest entry is
//! overwritten. Recall walks backwards from `read_index` and stops at the
//! first slot that was never written.

use heapless::String;

/// Fixed-capacity ring of executed lines.
#[derive(Debug, Clone)]
pub struct HistoryRing<const CAP: usize, const N: usize> {
    slots: [String<CAP>; N],
    write_index: usize,
    read_index: usize,
}

impl<const CAP: usize, const N: usize> Default for HistoryRing<CAP, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize, const N: usize> HistoryRing<CAP, N> {
    /// Create an empty ring.
    pub fn new() -> Self {
        const { assert!(N > 0, "history needs at least one slot") };
        Self {
            slots: core::array::from_fn(|_| String::new()),
            write_index: 0,
            read_index: 0,
        }
    }

    /// Forget every entry and rewind both cursors.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.clear();
        }
        self.write_index = 0;
        self.read_index = 0;
    }

    /// Store an executed line.
    ///
    /// A line equal to the newest entry is not stored again. Either way the
    /// recall cursor is rewound so the next recall starts from the newest
    /// entry. Returns `true` if a slot was written.
    pub fn record(&mut self, line: &str) -> bool {
        let newest = self.slots[Self::prev(self.write_index)].as_str();
        let stored = if line.is_empty() || newest == line {
            false
        } else {
            let slot = &mut self.slots[self.write_index];
            slot.clear();
            for ch in line.chars() {
                if slot.len() + ch.len_utf8() >= CAP || slot.push(ch).is_err() {
                    break;
                }
            }
            self.write_index = Self::next(self.write_index);
            true
        };
        self.read_index = self.write_index;
        stored
    }

    /// Step the recall cursor one entry back and return that entry.
    ///
    /// Returns `None` and leaves the cursor alone when the previous slot
    /// was never written.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let candidate = Self::prev(self.read_index);
        if self.slots[candidate].is_empty() {
            return None;
        }
        self.read_index = candidate;
        Some(self.slots[candidate].as_str())
    }

    /// Raw slot contents. Empty for slots never written.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|slot| slot.as_str())
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        (1..=N)
            .map(move |back| self.slots[(self.write_index + N - back) % N].as_str())
            .take_while(|entry| !entry.is_empty())
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slot the next recorded line goes into.
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Slot of the entry last recalled, or `write_index` right after a record.
    pub fn read_index(&self) -> usize {
        self.read_index
    }

    /// Number of slots.
    pub const fn capacity(&self) -> usize {
        N
    }

    fn prev(index: usize) -> usize {
        (index + N - 1) % N
    }

    fn next(index: usize) -> usize {
        (index + 1) % N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Ring = HistoryRing<16, 3>;

    #[test]
    fn starts_empty() {
        let mut ring = Ring::new();
        assert!(ring.is_empty());
        assert_eq!(ring.recall_previous(), None);
        assert_eq!(ring.read_index(), 0);
        assert_eq!(ring.write_index(), 0);
    }

    #[test]
    fn suppresses_consecutive_duplicates() {
        let mut ring = Ring::new();
        assert!(ring.record("status"));
        assert!(!ring.record("status"));
        assert_eq!(ring.len(), 1);
        assert!(ring.record("help"));
        assert!(ring.record("status"));
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn recall_walks_newest_to_oldest_then_stops() {
        let mut ring = Ring::new();
        ring.record("a");
        ring.record("b");
        assert_eq!(ring.recall_previous(), Some("b"));
        assert_eq!(ring.recall_previous(), Some("a"));
        // slot 2 was never written
        assert_eq!(ring.recall_previous(), None);
        assert_eq!(ring.read_index(), 0);
    }

    #[test]
    fn record_rewinds_recall() {
        let mut ring = Ring::new();
        ring.record("a");
        ring.record("b");
        ring.recall_previous();
        ring.recall_previous();
        ring.record("b");
        assert_eq!(ring.read_index(), ring.write_index());
        assert_eq!(ring.recall_previous(), Some("b"));
    }

    #[test]
    fn overwrites_oldest_when_full() {
        let mut ring = Ring::new();
        for line in ["one", "two", "three", "four"] {
            ring.record(line);
        }
        assert_eq!(ring.len(), 3);
        let mut entries = ring.iter();
        assert_eq!(entries.next(), Some("four"));
        assert_eq!(entries.next(), Some("three"));
        assert_eq!(entries.next(), Some("two"));
        assert_eq!(entries.next(), None);
    }

    #[test]
    fn full_ring_recall_wraps_around() {
        let mut ring = Ring::new();
        for line in ["one", "two", "three"] {
            ring.record(line);
        }
        assert_eq!(ring.recall_previous(), Some("three"));
        assert_eq!(ring.recall_previous(), Some("two"));
        assert_eq!(ring.recall_previous(), Some("one"));
        assert_eq!(ring.recall_previous(), Some("three"));
    }

    #[test]
    fn empty_line_is_not_stored() {
        let mut ring = Ring::new();
        assert!(!ring.record(""));
        assert!(ring.is_empty());
    }

    #[test]
    fn long_line_is_truncated_to_slot() {
        let mut ring: HistoryRing<6, 2> = HistoryRing::new();
        ring.record("abcdefgh");
        assert_eq!(ring.get(0), Some("abcde"));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut ring = Ring::new();
        ring.record("a");
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.write_index(), 0);
        assert_eq!(ring.recall_previous(), None);
    }
}
