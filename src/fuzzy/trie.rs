// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate prefix matching over keywords, cached per query prefix.
//!
//! Based on Ji et al., "Efficient interactive fuzzy keyword search" (2009).
//! For a query prefix `p`, the *active node set* holds every trie node whose
//! path string is within edit distance `T` of `p`, each with its minimum
//! distance. The set for `p + c` derives from the set for `p` alone, so as the
//! user types, each keystroke costs one extension step instead of a full
//! recomputation.
//!
//! # Arena layout
//!
//! ```text
//! nodes: Vec<TrieNode>        NodeId(i) == nodes[i]
//!   [0] root ──'f'──▶ [1] ──'o'──▶ [2] ──'o'──▶ [3] {records: [1, 2]}
//!            ──'b'──▶ [4] ──'a'──▶ [5] ...
//! ```
//!
//! Nodes refer to each other only by `NodeId`. Nothing holds a reference into
//! `nodes` across a push, so growing the arena cannot strand an update on a
//! stale node.
//!
//! # Invariants
//!
//! 1. **CHILDREN_SORTED**: each node's edges are sorted by label, no duplicates
//! 2. **RECORDS_SORTED**: each node's record list is sorted and deduplicated
//! 3. **BOUNDS_EXACT**: `subtree_min`/`subtree_max` are exact over the subtree
//! 4. **CACHE_CONSISTENT**: a cached active node set equals the one computed
//!    from scratch for the same prefix. Inserting clears the cache.

use crate::record_set::{RecordId, RecordIdSet, MAX_RECORD_ID};
use lru::LruCache;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::trace;

// Errors in the prefix all cost the same.
pub const EDIT_DIST_FOR_DELETE_QUERY_CHAR: f64 = 1.0;
pub const EDIT_DIST_FOR_DELETE_PREFIX_CHAR: f64 = 1.0;
pub const EDIT_DIST_FOR_REPLACE_PREFIX_CHAR: f64 = 1.0;

const ROOT: NodeId = NodeId(0);

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(raw) => NodeId(raw),
            Err(_) => panic!("trie node count exceeds {}", u32::MAX),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Active nodes and the minimum edit distance at which each was reached.
pub type ActiveNodeSet = HashMap<NodeId, f64>;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Edge {
    pub(crate) label: char,
    pub(crate) node: NodeId,
}

#[derive(Debug, Clone)]
pub(crate) struct TrieNode {
    pub(crate) children: Vec<Edge>,
    pub(crate) records: Vec<RecordId>,
    /// Valid only when some record terminates in this subtree.
    pub(crate) subtree_min: RecordId,
    pub(crate) subtree_max: RecordId,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: Vec::new(),
            records: Vec::new(),
            subtree_min: RecordId::MAX,
            subtree_max: 0,
        }
    }

    fn child(&self, label: char) -> Option<NodeId> {
        self.children
            .binary_search_by(|edge| edge.label.cmp(&label))
            .ok()
            .map(|i| self.children[i].node)
    }

    fn insert_child(&mut self, label: char, node: NodeId) {
        match self.children.binary_search_by(|edge| edge.label.cmp(&label)) {
            Ok(_) => panic!("duplicate child edge for {label:?}"),
            Err(pos) => self.children.insert(pos, Edge { label, node }),
        }
    }

    /// Returns false when the record was already listed here.
    fn add_record(&mut self, record_id: RecordId) -> bool {
        match self.records.binary_search(&record_id) {
            Ok(_) => false,
            Err(pos) => {
                self.records.insert(pos, record_id);
                true
            }
        }
    }

    #[inline]
    fn widen_bounds(&mut self, record_id: RecordId) {
        self.subtree_min = self.subtree_min.min(record_id);
        self.subtree_max = self.subtree_max.max(record_id);
    }
}

/// Keyword trie with an LRU cache of active node sets keyed by query prefix.
pub struct FuzzyTrie {
    nodes: Vec<TrieNode>,
    num_pairs: usize,
    edit_dist_threshold: f64,
    cache: LruCache<String, Arc<ActiveNodeSet>>,
}

impl FuzzyTrie {
    /// Empty trie with threshold 2.0 and room for 1024 cached prefixes.
    pub fn new() -> Self {
        Self::with_threshold(
            crate::config::DEFAULT_EDIT_DIST_THRESHOLD,
            NonZeroUsize::new(crate::config::DEFAULT_PREFIX_CACHE_CAPACITY)
                .unwrap_or(NonZeroUsize::MIN),
        )
    }

    pub fn with_threshold(edit_dist_threshold: f64, cache_capacity: NonZeroUsize) -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            num_pairs: 0,
            edit_dist_threshold,
            cache: LruCache::new(cache_capacity),
        }
    }

    /// Associate `keyword` with `record_id`.
    ///
    /// Walks or creates one node per character and widens the subtree bounds
    /// of every node on the path, root and terminal included. Inserting the
    /// same pair twice is a no-op.
    pub fn insert(&mut self, keyword: &str, record_id: RecordId) {
        assert!(
            record_id <= MAX_RECORD_ID,
            "record id {record_id} is out of range"
        );

        // Cached sets describe the old tree.
        if !self.cache.is_empty() {
            self.cache.clear();
        }

        let mut current = ROOT;
        self.nodes[current.index()].widen_bounds(record_id);
        for label in keyword.chars() {
            current = match self.nodes[current.index()].child(label) {
                Some(child) => child,
                None => {
                    let child = NodeId::from_index(self.nodes.len());
                    self.nodes.push(TrieNode::new());
                    self.nodes[current.index()].insert_child(label, child);
                    child
                }
            };
            self.nodes[current.index()].widen_bounds(record_id);
        }

        if self.nodes[current.index()].add_record(record_id) {
            self.num_pairs += 1;
        }
    }

    /// Every record with a keyword whose prefix is within the edit distance
    /// threshold of `prefix`, restricted to `filter` when given.
    ///
    /// Uses and extends the prefix cache.
    pub fn record_ids_for_prefix(
        &mut self,
        prefix: &str,
        filter: Option<&RecordIdSet>,
    ) -> RecordIdSet {
        let active = self.active_nodes_for_prefix(prefix);
        self.collect_record_ids(&active, filter)
    }

    /// Same result as [`record_ids_for_prefix`](Self::record_ids_for_prefix),
    /// evaluated from the empty prefix without reading or writing the cache.
    pub fn record_ids_for_prefix_uncached(
        &self,
        prefix: &str,
        filter: Option<&RecordIdSet>,
    ) -> RecordIdSet {
        let active = prefix
            .chars()
            .fold(self.base_active_nodes(), |prev, label| {
                self.extend_active_nodes(&prev, label)
            });
        self.collect_record_ids(&active, filter)
    }

    /// Active node set for `prefix`, built from the longest cached prefix.
    ///
    /// Every intermediate prefix computed on the way is cached too, so the
    /// next keystroke (or backspace) is a cache hit or a single extension.
    pub fn active_nodes_for_prefix(&mut self, prefix: &str) -> Arc<ActiveNodeSet> {
        if let Some(hit) = self.cache.get(prefix) {
            trace!(prefix, "active node cache hit");
            return Arc::clone(hit);
        }

        // Byte offset just past each char: prefix[..ends[n - 1]] has n chars.
        let ends: Vec<usize> = prefix
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();

        let mut resume: Option<(usize, Arc<ActiveNodeSet>)> = None;
        for n in (1..ends.len()).rev() {
            if let Some(hit) = self.cache.get(&prefix[..ends[n - 1]]) {
                resume = Some((n, Arc::clone(hit)));
                break;
            }
        }

        let (covered, mut current) = match resume {
            Some(found) => found,
            None => {
                let base = match self.cache.get("") {
                    Some(hit) => Arc::clone(hit),
                    None => {
                        let base = Arc::new(self.base_active_nodes());
                        self.cache.put(String::new(), Arc::clone(&base));
                        base
                    }
                };
                (0, base)
            }
        };
        trace!(prefix, covered, "active node cache miss");

        for (n, label) in prefix.chars().enumerate().skip(covered) {
            let next = Arc::new(self.extend_active_nodes(&current, label));
            self.cache.put(prefix[..ends[n]].to_string(), Arc::clone(&next));
            current = next;
        }
        current
    }

    /// Drop every cached active node set.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cached_prefix_count(&self) -> usize {
        self.cache.len()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct (keyword, record) pairs.
    pub fn len(&self) -> usize {
        self.num_pairs
    }

    pub fn is_empty(&self) -> bool {
        self.num_pairs == 0
    }

    pub fn edit_dist_threshold(&self) -> f64 {
        self.edit_dist_threshold
    }

    pub(crate) fn nodes(&self) -> &[TrieNode] {
        &self.nodes
    }

    /// Empty prefix: every node reachable from the root within the threshold,
    /// each edge costing one deleted prefix character.
    fn base_active_nodes(&self) -> ActiveNodeSet {
        let mut active = ActiveNodeSet::new();
        self.add_descendants_within_threshold(&mut active, ROOT, 0.0);
        active
    }

    /// Active node set for `prefix + label` from the set for `prefix`.
    fn extend_active_nodes(&self, prev: &ActiveNodeSet, label: char) -> ActiveNodeSet {
        let threshold = self.edit_dist_threshold;
        let mut next = ActiveNodeSet::with_capacity(prev.len());

        for (&node_id, &edit_dist) in prev {
            // Delete the new query character: same node, higher distance.
            let delete_dist = edit_dist + EDIT_DIST_FOR_DELETE_QUERY_CHAR;
            if delete_dist <= threshold {
                insert_if_min_edit_dist(&mut next, node_id, delete_dist);
            }

            for edge in &self.nodes[node_id.index()].children {
                if edge.label == label {
                    // Real match: the child is active at the parent's distance,
                    // and so are its descendants within reach.
                    self.add_descendants_within_threshold(&mut next, edge.node, edit_dist);
                } else {
                    let replace_dist = edit_dist + EDIT_DIST_FOR_REPLACE_PREFIX_CHAR;
                    if replace_dist <= threshold {
                        insert_if_min_edit_dist(&mut next, edge.node, replace_dist);
                    }
                }
            }
        }

        next
    }

    fn add_descendants_within_threshold(
        &self,
        active: &mut ActiveNodeSet,
        root: NodeId,
        root_edit_dist: f64,
    ) {
        let mut stack = vec![(root, root_edit_dist)];
        while let Some((node_id, edit_dist)) = stack.pop() {
            if edit_dist > self.edit_dist_threshold {
                continue;
            }
            insert_if_min_edit_dist(active, node_id, edit_dist);
            let child_dist = edit_dist + EDIT_DIST_FOR_DELETE_PREFIX_CHAR;
            stack.extend(
                self.nodes[node_id.index()]
                    .children
                    .iter()
                    .map(|edge| (edge.node, child_dist)),
            );
        }
    }

    /// Gather records terminating at or below any active node.
    ///
    /// Subtrees whose bounds cannot intersect the filter's bounds are skipped.
    /// Membership is still checked per record, so the skip only saves work.
    fn collect_record_ids(
        &self,
        active: &ActiveNodeSet,
        filter: Option<&RecordIdSet>,
    ) -> RecordIdSet {
        let mut found = RecordIdSet::new();
        if filter.is_some_and(RecordIdSet::is_empty) {
            return found;
        }

        // Active nodes are often ancestors of other active nodes.
        let mut visited: HashSet<NodeId> = HashSet::with_capacity(active.len());
        let mut stack: Vec<NodeId> = Vec::new();
        for &start in active.keys() {
            stack.push(start);
            while let Some(node_id) = stack.pop() {
                if !visited.insert(node_id) {
                    continue;
                }

                let node = &self.nodes[node_id.index()];
                if let Some(filter) = filter {
                    if !filter.may_intersect(node.subtree_min, node.subtree_max) {
                        continue;
                    }
                }

                for &record_id in &node.records {
                    if filter.map_or(true, |f| f.contains(record_id)) {
                        found.insert(record_id);
                    }
                }
                stack.extend(node.children.iter().map(|edge| edge.node));
            }
        }

        found
    }
}

fn insert_if_min_edit_dist(active: &mut ActiveNodeSet, node_id: NodeId, edit_dist: f64) {
    active
        .entry(node_id)
        .and_modify(|current| {
            if edit_dist < *current {
                *current = edit_dist;
            }
        })
        .or_insert(edit_dist);
}

impl Default for FuzzyTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FuzzyTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyTrie")
            .field("nodes", &self.nodes.len())
            .field("pairs", &self.num_pairs)
            .field("edit_dist_threshold", &self.edit_dist_threshold)
            .field("cached_prefixes", &self.cache.len())
            .finish()
    }
}
