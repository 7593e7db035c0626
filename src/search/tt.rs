use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

impl Bound {
    /// Classify a fail-soft result against the window it was searched with.
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Bound {
        if score <= alpha { Bound::Upper } else if score >= beta { Bound::Lower } else { Bound::Exact }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: u64,
    pub depth: u32,
    pub score: i32,
    pub bound: Bound,
}

impl Entry {
    /// Score usable at `depth` under window `(alpha, beta)`, if any.
    pub fn cutoff(&self, depth: u32, alpha: i32, beta: i32) -> Option<i32> {
        if self.depth < depth { return None; }
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= beta => Some(self.score),
            Bound::Upper if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

pub const DEFAULT_CAPACITY: usize = 100_000;

/// Single-owner cache. Once it holds more than `capacity` entries the next
/// insert drops everything first.
pub struct Tt {
    entries: HashMap<u64, Entry>,
    capacity: usize,
    clears: u64,
}

impl Default for Tt {
    fn default() -> Self { Self::new() }
}

impl Tt {
    pub fn new() -> Self { Self { entries: HashMap::new(), capacity: DEFAULT_CAPACITY, clears: 0 } }

    pub fn clear(&mut self) { self.entries.clear(); }

    pub fn get(&self, key: u64) -> Option<Entry> { self.entries.get(&key).copied() }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn set_capacity_entries(&mut self, cap: usize) { self.capacity = cap.max(1); }

    pub fn capacity(&self) -> usize { self.capacity }

    /// Number of overflow clears since construction.
    pub fn overflow_clears(&self) -> u64 { self.clears }

    pub fn put(&mut self, e: Entry) {
        if self.entries.len() > self.capacity {
            log::trace!("tt overflow at {} entries, clearing", self.entries.len());
            self.entries.clear();
            self.clears += 1;
        }
        self.entries.insert(e.key, e);
    }
}
