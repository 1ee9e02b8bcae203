//! Bounded artifact history.
//!
//! Finished pages land here newest-first. Capacity depends on what produced
//! the entries: single generations keep [`HISTORY_CAPACITY`] pages, a
//! storybook batch widens the window to [`STORY_HISTORY_CAPACITY`] so all
//! four scenes fit alongside recent work. The two capacities are
//! independent configured constants, not a derived rule, and a later single
//! generation trims the list back down to the narrow window.
//!
//! Eviction is always from the tail (oldest first). Both insert operations
//! report what they evicted so the caller can drop stale references held
//! elsewhere, such as booklet selections.

use std::collections::VecDeque;

use crate::story::STORY_SCENE_COUNT;
use crate::{Artifact, HISTORY_CAPACITY, STORY_HISTORY_CAPACITY};

/// Newest-first ring of generated pages.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: VecDeque<Artifact>,
}

impl HistoryStore {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends one page, then trims the tail to [`HISTORY_CAPACITY`].
    /// Returns the evicted pages, oldest last.
    pub fn push(&mut self, artifact: Artifact) -> Vec<Artifact> {
        self.entries.push_front(artifact);
        self.trim(HISTORY_CAPACITY)
    }

    /// Prepends a whole storybook batch as one group, then trims the tail
    /// to [`STORY_HISTORY_CAPACITY`]. The group is inserted so the first
    /// scene reads first: immediately afterwards `iter()` yields scene 1
    /// through scene 4, then the pre-existing entries. The trim happens
    /// once, after the full group is in place, never between scenes.
    pub fn push_batch(&mut self, batch: [Artifact; STORY_SCENE_COUNT]) -> Vec<Artifact> {
        for artifact in batch.into_iter().rev() {
            self.entries.push_front(artifact);
        }
        self.trim(STORY_HISTORY_CAPACITY)
    }

    /// Pages, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> + '_ {
        self.entries.iter()
    }

    /// Page at `index` (0 = newest), if present.
    pub fn get(&self, index: usize) -> Option<&Artifact> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `artifact` is currently retained.
    pub fn contains(&self, artifact: &Artifact) -> bool {
        self.entries.contains(artifact)
    }

    /// The capacity applied after an insert of the given shape.
    pub fn capacity_for(storybook_batch: bool) -> usize {
        if storybook_batch {
            STORY_HISTORY_CAPACITY
        } else {
            HISTORY_CAPACITY
        }
    }

    fn trim(&mut self, capacity: usize) -> Vec<Artifact> {
        if self.entries.len() <= capacity {
            return Vec::new();
        }
        Vec::from(self.entries.split_off(capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(n: usize) -> Artifact {
        Artifact::from_data_uri(format!("data:image/png;base64,img{n}"))
    }

    #[test]
    fn push_keeps_newest_first() {
        let mut history = HistoryStore::new();
        history.push(art(1));
        history.push(art(2));
        let pages: Vec<_> = history.iter().cloned().collect();
        assert_eq!(pages, vec![art(2), art(1)]);
    }

    #[test]
    fn push_evicts_oldest_beyond_capacity() {
        let mut history = HistoryStore::new();
        for n in 1..=HISTORY_CAPACITY {
            assert!(history.push(art(n)).is_empty());
        }
        let evicted = history.push(art(99));
        assert_eq!(evicted, vec![art(1)]);
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.get(0), Some(&art(99)));
        assert!(!history.contains(&art(1)));
    }

    #[test]
    fn batch_reads_in_scene_order() {
        let mut history = HistoryStore::new();
        history.push(art(0));
        history.push_batch([art(1), art(2), art(3), art(4)]);
        let pages: Vec<_> = history.iter().cloned().collect();
        assert_eq!(pages, vec![art(1), art(2), art(3), art(4), art(0)]);
    }

    #[test]
    fn batch_trims_once_to_wide_capacity() {
        let mut history = HistoryStore::new();
        for n in 1..=6 {
            history.push(art(n));
        }
        // Single pushes already trimmed to the narrow window.
        assert_eq!(history.len(), HISTORY_CAPACITY);

        let evicted = history.push_batch([art(10), art(11), art(12), art(13)]);
        assert_eq!(history.len(), STORY_HISTORY_CAPACITY);
        // 4 batch + 4 surviving singles fit exactly; nothing evicted.
        assert!(evicted.is_empty());

        let evicted = history.push_batch([art(20), art(21), art(22), art(23)]);
        assert_eq!(history.len(), STORY_HISTORY_CAPACITY);
        // The four oldest singles fall off the tail together.
        assert_eq!(evicted, vec![art(6), art(5), art(4), art(3)]);
    }

    #[test]
    fn single_push_narrows_after_a_batch() {
        let mut history = HistoryStore::new();
        history.push_batch([art(1), art(2), art(3), art(4)]);
        history.push_batch([art(5), art(6), art(7), art(8)]);
        assert_eq!(history.len(), STORY_HISTORY_CAPACITY);

        let evicted = history.push(art(9));
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(evicted.len(), 5);
        let pages: Vec<_> = history.iter().cloned().collect();
        assert_eq!(pages, vec![art(9), art(5), art(6), art(7)]);
    }

    #[test]
    fn capacity_for_mode_shape() {
        assert_eq!(HistoryStore::capacity_for(false), HISTORY_CAPACITY);
        assert_eq!(HistoryStore::capacity_for(true), STORY_HISTORY_CAPACITY);
    }
}
