// Copyright (c) Sienna Satterwhite, Strata Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::fmt::{
    self,
    Display,
};

use getset::CopyGetters;
use rand::rngs::SmallRng;
use tracing::instrument;

use crate::skiplist::{
    level_generator::{
        GeometricalLevelGenerator,
        LevelGenerator,
    },
    node::{
        Arena,
        Node,
    },
    DEFAULT_MAX_HEIGHT,
    DEFAULT_PROBABILITY,
};

/// An ordered map from unique keys to values, backed by a skip list.
///
/// Every operation enters at the head sentinel, scans right at each level
/// until the next node would overshoot the target key, then drops a level.
/// Node heights are geometrically distributed, which bounds the expected
/// cost of search, insert, and remove at O(log n) without any rebalancing.
///
/// The list is single-threaded; callers sharing one across threads must
/// serialize access themselves.
#[derive(CopyGetters)]
pub struct SkipList<K, V, G = GeometricalLevelGenerator<SmallRng>> {
    arena: Arena<K, V>,
    head: usize,

    /// Current height of the structure. At least 1, even when empty.
    #[getset(get_copy = "pub")]
    level: usize,

    /// Number of entries, the head sentinel excluded.
    #[getset(get_copy = "pub")]
    size: usize,

    heights: G,
}

impl<K: Ord, V> SkipList<K, V> {
    /// An empty list with the default geometric level generator, seeded
    /// from system entropy.
    pub fn new() -> Self {
        Self::with_level_generator(GeometricalLevelGenerator::default())
    }

    /// An empty list whose level generator is seeded with `seed`. The same
    /// seed and the same operation sequence reproduce the same topology.
    pub fn with_seed(seed: u64) -> Self {
        match GeometricalLevelGenerator::from_seed(DEFAULT_MAX_HEIGHT, DEFAULT_PROBABILITY, seed) {
            | Ok(heights) => Self::with_level_generator(heights),
            | Err(_) => unreachable!("default parameters are valid"),
        }
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V, G: LevelGenerator> SkipList<K, V, G> {
    /// An empty list that draws node heights from `heights`.
    pub fn with_level_generator(heights: G) -> Self {
        let mut arena = Arena::new();
        let head = arena.alloc(Node::head(1));
        SkipList {
            arena,
            head,
            level: 1,
            size: 0,
            heights,
        }
    }

    /// Whether the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Look up `key`, returning its value if present. Absence is a normal
    /// outcome, not an error.
    #[instrument(level = "debug", skip_all)]
    pub fn search(&self, key: &K) -> Option<&V> {
        let found = self.find(key)?;
        let node = &self.arena[found];
        if node.key.as_ref() == Some(key) {
            node.value.as_ref()
        } else {
            None
        }
    }

    /// Insert a key/value entry. A key that is already present is left
    /// untouched: the stored value is kept and the call is a no-op.
    #[instrument(level = "debug", skip_all)]
    pub fn insert(&mut self, key: K, value: V) {
        if self.search(&key).is_some() {
            return;
        }

        let height = self.heights.random();
        if height > self.level {
            self.grow_head(height);
        }

        // the head grows first so the walk covers the new top levels,
        // recording the head itself as their predecessor
        let mut preds = Vec::with_capacity(self.level);
        self.find_with_predecessors(&key, &mut preds);

        let node = self.arena.alloc(Node::new(key, value, height));
        for (lvl, &pred) in preds.iter().enumerate().take(height) {
            let succ = self.arena[pred].forwards[lvl];
            self.arena[node].forwards[lvl] = succ;
            self.arena[pred].forwards[lvl] = Some(node);
        }
        self.size += 1;
    }

    /// Remove `key`, returning its value. Removing an absent key returns
    /// `None` and leaves the structure untouched.
    #[instrument(level = "debug", skip_all)]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let mut preds = Vec::with_capacity(self.level);
        let target = self.find_with_predecessors(key, &mut preds)?;
        if self.arena[target].key.as_ref() != Some(key) {
            return None;
        }

        for (lvl, &pred) in preds.iter().enumerate() {
            // the target does not participate above the first level where
            // its predecessor links elsewhere
            if self.arena[pred].forwards[lvl] != Some(target) {
                break;
            }
            let succ = self.arena[target].forwards[lvl];
            self.arena[pred].forwards[lvl] = succ;
        }

        let node = self.arena.release(target);
        self.size -= 1;

        while self.level > 1 && self.arena[self.head].forwards[self.level - 1].is_none() {
            self.level -= 1;
        }
        let head = self.head;
        self.arena[head].forwards.truncate(self.level);

        node.value
    }

    /// Iterate over entries in ascending key order along the base level.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            next: self.arena[self.head].forwards[0],
            remaining: self.size,
        }
    }

    /// Render the list for debugging: one row per node from the head in
    /// base-level order, the node's value repeated once per level it
    /// occupies, so row width tracks node height.
    pub fn dump(&self) -> Vec<String>
    where
        V: Display,
    {
        let mut rows = Vec::with_capacity(self.size + 1);
        let mut cur = Some(self.head);
        while let Some(idx) = cur {
            let node = &self.arena[idx];
            let cell = match node.value.as_ref() {
                | Some(value) => value.to_string(),
                | None => "head".to_string(),
            };
            let mut row = String::new();
            for lvl in 0..node.height() {
                if lvl > 0 {
                    row.push(' ');
                }
                row.push_str("[ ");
                row.push_str(&cell);
                row.push_str(" ]");
            }
            rows.push(row);
            cur = node.forwards[0];
        }
        rows
    }

    /// Rightmost-before-`key` walk shared by every operation: descend from
    /// the top level, advancing while the next node's key is strictly less
    /// than the target. Returns the first base-level node at or past `key`.
    fn find(&self, key: &K) -> Option<usize> {
        let mut cur = self.head;
        for lvl in (0..self.level).rev() {
            while let Some(next) = self.arena[cur].forwards[lvl] {
                match self.arena[next].key.as_ref() {
                    | Some(k) if k < key => cur = next,
                    | _ => break,
                }
            }
        }
        self.arena[cur].forwards[0]
    }

    /// Same walk as [`find`](SkipList::find), but records the predecessor at
    /// every level into `preds`, which is resized to the current `level`.
    /// The recorded set is the splice point list consumed by insert and
    /// remove.
    fn find_with_predecessors(&self, key: &K, preds: &mut Vec<usize>) -> Option<usize> {
        preds.clear();
        preds.resize(self.level, self.head);

        let mut cur = self.head;
        for lvl in (0..self.level).rev() {
            while let Some(next) = self.arena[cur].forwards[lvl] {
                match self.arena[next].key.as_ref() {
                    | Some(k) if k < key => cur = next,
                    | _ => break,
                }
            }
            preds[lvl] = cur;
        }
        self.arena[cur].forwards[0]
    }

    /// Replace the head sentinel with one of height `new_level`, carrying
    /// over the existing forward links. The head's forward array length
    /// stays equal to `level` at all times.
    fn grow_head(&mut self, new_level: usize) {
        let mut head = Node::head(new_level);
        for lvl in 0..self.level {
            head.forwards[lvl] = self.arena[self.head].forwards[lvl];
        }
        let retired = self.head;
        self.head = self.arena.alloc(head);
        self.arena.release(retired);
        self.level = new_level;
    }
}

impl<K: Ord, V: Display, G: LevelGenerator> Display for SkipList<K, V, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.dump() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Base-level iterator over entries in ascending key order.
pub struct Iter<'a, K, V> {
    arena: &'a Arena<K, V>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[instrument(level = "trace", skip_all)]
    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = &self.arena[idx];
        self.next = node.forwards[0];
        self.remaining -= 1;
        match (node.key.as_ref(), node.value.as_ref()) {
            | (Some(key), Some(value)) => Some((key, value)),
            // only the head lacks a key, and iteration starts past it
            | _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
