//! Episode queue and current selection
//!
//! The queue is only ever replaced wholesale: starting a new episode or
//! list swaps the whole thing out. There is no add/remove/reorder API.

use cast_core::Episode;

/// Ordered episodes plus the index of the selected one
///
/// `current_index` is not validated against the list length, so an
/// out-of-range index is representable and simply selects nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Queue {
    episodes: Vec<Episode>,
    current_index: usize,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue with a single episode
    pub fn replace_with_one(&mut self, episode: Episode) {
        self.episodes = vec![episode];
        self.current_index = 0;
    }

    /// Replace the queue with a list, selecting `index` without bounds checks
    pub fn replace(&mut self, episodes: Vec<Episode>, index: usize) {
        self.episodes = episodes;
        self.current_index = index;
    }

    /// Empty the queue and reset the selection
    pub fn clear(&mut self) {
        self.episodes.clear();
        self.current_index = 0;
    }

    /// Move the selection
    pub fn select(&mut self, index: usize) {
        self.current_index = index;
    }

    /// Currently selected episode, if the index points at one
    pub fn current(&self) -> Option<&Episode> {
        self.episodes.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(n: u32) -> Episode {
        Episode::new(
            format!("Episode {n}"),
            "Host",
            format!("https://cdn.example.com/{n}.jpg"),
            600,
            format!("https://cdn.example.com/{n}.mp3"),
        )
    }

    #[test]
    fn new_queue_is_empty_with_no_current() {
        let queue = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.current_index(), 0);
        assert!(queue.current().is_none());
    }

    #[test]
    fn replace_with_one_discards_previous_list() {
        let mut queue = Queue::new();
        queue.replace(vec![episode(1), episode(2), episode(3)], 2);

        queue.replace_with_one(episode(9));

        assert_eq!(queue.episodes(), &[episode(9)]);
        assert_eq!(queue.current_index(), 0);
        assert_eq!(queue.current(), Some(&episode(9)));
    }

    #[test]
    fn replace_selects_given_index() {
        let mut queue = Queue::new();
        queue.replace(vec![episode(1), episode(2), episode(3)], 1);
        assert_eq!(queue.current(), Some(&episode(2)));
    }

    #[test]
    fn out_of_range_index_selects_nothing() {
        let mut queue = Queue::new();
        queue.replace(vec![episode(1), episode(2)], 5);

        assert_eq!(queue.current_index(), 5);
        assert_eq!(queue.len(), 2);
        assert!(queue.current().is_none());
    }

    #[test]
    fn clear_resets_index() {
        let mut queue = Queue::new();
        queue.replace(vec![episode(1), episode(2)], 1);

        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.current_index(), 0);
    }
}
