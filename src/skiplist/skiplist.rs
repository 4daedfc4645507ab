// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::{
    borrow::Borrow,
    fmt,
};

use rand::rngs::SmallRng;
use tracing::{
    debug,
    instrument,
    trace,
};

use crate::{
    config::SkipListConfig,
    errs::SkipListError,
    random::{
        RandomSource,
        RngSource,
    },
    skiplist::{
        level_generator::{
            GeometricalLevelGenerator,
            LevelGenerator,
        },
        skipnode::{
            Link,
            Node,
            NodeId,
        },
    },
};

/// The generator used by [`SkipList::default`].
pub type DefaultLevelGenerator = GeometricalLevelGenerator<RngSource<SmallRng>>;

/// Where a traversal currently stands: the header sentinel or a stored node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Head,
    At(NodeId),
}

/// An ordered map from `K` to `V` with expected `O(log n)` insertion and
/// lookup.
///
/// The list owns every node in an arena and links them by index. Level 0
/// holds every entry in ascending key order and each level above it holds a
/// subset of the level beneath. The header carries `max_level + 1` forward
/// links and is the starting point of every traversal.
pub struct SkipList<K, V, G = DefaultLevelGenerator> {
    head: Vec<Link>,
    nodes: Vec<Node<K, V>>,
    max_level: usize,
    generator: G,
}

impl<K: Ord, V, R: RandomSource> SkipList<K, V, GeometricalLevelGenerator<R>> {
    /// Builds an empty list sampling heights from `source` with promotion
    /// probability `p`.
    ///
    /// Fails with [`SkipListError::InvalidProbability`] if `p` is not in
    /// `(0, 1)`.
    pub fn new(source: R, p: f64) -> Result<Self, SkipListError> {
        Ok(Self::with_config(
            source,
            SkipListConfig::default().with_p(p)?,
        ))
    }

    pub fn with_config(source: R, config: SkipListConfig) -> Self {
        Self::with_generator(GeometricalLevelGenerator::from_config(source, config))
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::with_generator(GeometricalLevelGenerator::from_config(
            RngSource::from_entropy(),
            SkipListConfig::default(),
        ))
    }
}

impl<K: Ord, V, G: LevelGenerator> SkipList<K, V, G> {
    pub fn with_generator(generator: G) -> Self {
        SkipList {
            head: vec![None],
            nodes: Vec::new(),
            max_level: 0,
            generator,
        }
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The highest level currently in use. Never decreases.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Inserts `key` with `value`.
    ///
    /// Duplicate keys are not detected. The new node is linked ahead of any
    /// entries with an equal key, so lookups see the most recent insertion.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, key: K, value: V) {
        let height = self.generator.random();

        if height > self.max_level {
            debug!(
                from = self.max_level,
                to = height,
                "growing skiplist header"
            );
            self.head.resize(height + 1, None);
            self.max_level = height;
        }

        // the last node before `key` at each level the new node joins
        let mut update = vec![Cursor::Head; height + 1];
        let mut cursor = Cursor::Head;
        for level in (0..=self.max_level).rev() {
            cursor = self.advance(cursor, level, &key);
            if level <= height {
                update[level] = cursor;
            }
        }

        let id = self.nodes.len();
        let forward = update
            .iter()
            .enumerate()
            .map(|(level, prev)| self.forward(*prev, level))
            .collect();
        self.nodes.push(Node::new(key, value, forward));

        for (level, prev) in update.into_iter().enumerate() {
            self.set_forward(prev, level, Some(id));
        }

        trace!(id, height, len = self.nodes.len(), "inserted node");
    }

    /// Finds the node stored under `key`, or `None` if no such key was
    /// inserted.
    #[instrument(level = "trace", skip_all)]
    pub fn search<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = Cursor::Head;
        for level in (0..=self.max_level).rev() {
            cursor = self.advance(cursor, level, key);
        }

        self.forward(cursor, 0)
            .map(|id| &self.nodes[id])
            .filter(|node| Borrow::<Q>::borrow(node.key()) == key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(Node::value)
    }

    /// Like [`SkipList::get`], but reports a missing key as
    /// [`SkipListError::KeyNotFound`].
    pub fn get_or_err<Q>(&self, key: &Q) -> Result<&V, SkipListError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(SkipListError::KeyNotFound)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// The entries reachable at every level, highest level first.
    pub fn levels(&self) -> Vec<Vec<(&K, &V)>> {
        (0..=self.max_level)
            .rev()
            .map(|level| {
                self.level_iter(level)
                    .map(|node| (node.key(), node.value()))
                    .collect()
            })
            .collect()
    }

    /// Walks `level` from `cursor` while the next key is strictly less than
    /// `key`, returning the last position visited.
    fn advance<Q>(&self, mut cursor: Cursor, level: usize, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        while let Some(next) = self.forward(cursor, level) {
            if Borrow::<Q>::borrow(self.nodes[next].key()) < key {
                cursor = Cursor::At(next);
            } else {
                break;
            }
        }
        cursor
    }

    fn level_iter(&self, level: usize) -> LevelIter<'_, K, V> {
        LevelIter {
            nodes: &self.nodes,
            next: self.head[level],
            level,
        }
    }

    #[inline]
    fn forward(&self, cursor: Cursor, level: usize) -> Link {
        match cursor {
            | Cursor::Head => self.head[level],
            | Cursor::At(id) => self.nodes[id].forward[level],
        }
    }

    #[inline]
    fn set_forward(&mut self, cursor: Cursor, level: usize, link: Link) {
        match cursor {
            | Cursor::Head => self.head[level] = link,
            | Cursor::At(id) => self.nodes[id].forward[level] = link,
        }
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug, G: LevelGenerator> SkipList<K, V, G> {
    /// Logs the contents of every level at debug level, highest level first.
    pub fn dump(&self) {
        for level in (0..=self.max_level).rev() {
            debug!(level, entries = %LevelLine(self, level), "skiplist level");
        }
    }
}

/// Renders one line per level, `Level N: |key|value| ...`, highest level
/// first.
impl<K: Ord + fmt::Debug, V: fmt::Debug, G: LevelGenerator> fmt::Display for SkipList<K, V, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (0..=self.max_level).rev() {
            writeln!(f, "Level {}: {}", level, LevelLine(self, level))?;
        }
        Ok(())
    }
}

impl<K, V, G> fmt::Debug for SkipList<K, V, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipList")
            .field("len", &self.nodes.len())
            .field("max_level", &self.max_level)
            .finish_non_exhaustive()
    }
}

struct LevelLine<'a, K, V, G>(&'a SkipList<K, V, G>, usize);

impl<K: Ord + fmt::Debug, V: fmt::Debug, G: LevelGenerator> fmt::Display for LevelLine<'_, K, V, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.0.level_iter(self.1) {
            write!(f, "|{:?}|{:?}| ", node.key(), node.value())?;
        }
        Ok(())
    }
}

/// Follows the forward links of a single level from the header.
struct LevelIter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    next: Link,
    level: usize,
}

impl<'a, K, V> Iterator for LevelIter<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.next?];
        self.next = node.forward[self.level];
        Some(node)
    }
}
