//! Fixed-capacity ring buffer of recent positions.
//!
//! Storage is allocated once; once full, each push overwrites the oldest
//! slot and advances the write cursor. Iteration is always oldest first.

use super::geometry::Vec2;

/// Default trail length (positions kept per particle)
pub const TRAIL_CAPACITY: usize = 20;

#[derive(Clone, Debug)]
pub struct TrailBuffer {
    slots: Vec<Vec2>,
    capacity: usize,
    /// Next slot to overwrite once full (== oldest entry)
    cursor: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append, evicting the oldest entry when full.
    pub fn push(&mut self, pos: Vec2) {
        if self.slots.len() < self.capacity {
            self.slots.push(pos);
        } else {
            self.slots[self.cursor] = pos;
            self.cursor = (self.cursor + 1) % self.capacity;
        }
    }

    /// Drop all entries, keeping the allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.cursor = 0;
    }

    /// Entry `i` counted from the oldest (0 = oldest).
    pub fn get(&self, i: usize) -> Option<Vec2> {
        if i >= self.slots.len() {
            return None;
        }
        Some(self.slots[(self.cursor + i) % self.slots.len()])
    }

    pub fn oldest(&self) -> Option<Vec2> {
        self.get(0)
    }

    pub fn newest(&self) -> Option<Vec2> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        let (newer, older) = self.slots.split_at(self.cursor);
        older.iter().chain(newer.iter()).copied()
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(TRAIL_CAPACITY)
    }
}
