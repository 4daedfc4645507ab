// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

/// Index of a node inside the list's arena. Nodes are never removed, so an
/// index stays valid for the lifetime of the list.
pub(crate) type NodeId = usize;

/// A forward link at one level; `None` terminates the level.
pub(crate) type Link = Option<NodeId>;

/// A single stored entry. The node only carries forward links for the levels
/// it was sampled for, `0..=height`.
#[derive(Debug)]
pub struct Node<K, V> {
    key: K,
    value: V,
    pub(crate) forward: Vec<Link>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V, forward: Vec<Link>) -> Self {
        debug_assert!(!forward.is_empty(), "a node always joins level 0");
        Node {
            key,
            value,
            forward,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// The highest level this node participates in.
    pub fn height(&self) -> usize {
        self.forward.len() - 1
    }
}
