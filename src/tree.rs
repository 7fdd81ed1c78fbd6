use std::cmp::Ordering;

use crate::{
    interval::Interval,
    iter::{OwnedIter, RefIter},
    node::{rebalance_all, remove_recurse, Node},
};

/// The order in which [`TemporalTree::select`] visits tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Visit a node before either of its children.
    Pre,
    /// Visit a node between its left and right children, yielding entries in
    /// ascending (start, end) order.
    #[default]
    In,
    /// Visit a node after both of its children.
    Post,
}

/// A self-balancing binary search tree mapping [`Interval`] keys over a
/// totally-ordered point type `T` to payloads of `V`.
///
/// Entries are keyed by the interval (start, end) total order. Lookup and
/// removal match exact endpoints only; overlap queries are expressed as
/// predicates over a full traversal ([`TemporalTree::select`],
/// [`TemporalTree::overlaps`]).
///
/// Two mutation flavours are provided: [`TemporalTree::set`] upserts
/// (at most one entry per exact interval), while [`TemporalTree::insert`]
/// always adds an entry, permitting duplicate keys.
#[derive(Debug, Clone)]
pub struct TemporalTree<T, V> {
    root: Option<Box<Node<T, V>>>,

    /// The number of entries reachable from `root`, maintained across
    /// inserts and removals.
    size: usize,
}

impl<T, V> Default for TemporalTree<T, V> {
    fn default() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }
}

impl<T, V> TemporalTree<T, V>
where
    T: Ord,
{
    /// Initialise an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the payload stored for exactly `interval` (both endpoints
    /// equal).
    ///
    /// With duplicate keys present, the first match on the descent is
    /// returned.
    pub fn get(&self, interval: &Interval<T>) -> Option<&V> {
        let mut curr = self.root.as_deref();

        while let Some(node) = curr {
            curr = match interval.cmp(node.interval()) {
                Ordering::Equal => return Some(node.value()),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Look up a mutable reference to the payload stored for exactly
    /// `interval`.
    pub fn get_mut(&mut self, interval: &Interval<T>) -> Option<&mut V> {
        let mut slot = &mut self.root;

        while let Some(node) = slot {
            slot = match interval.cmp(node.interval()) {
                Ordering::Equal => return Some(node.value_mut()),
                Ordering::Less => node.left_slot(),
                Ordering::Greater => node.right_slot(),
            };
        }

        None
    }

    /// Returns true if the tree holds an entry for exactly `interval`.
    pub fn contains(&self, interval: &Interval<T>) -> bool {
        self.get(interval).is_some()
    }

    /// Upsert: bind `value` to `interval`, replacing and returning the
    /// payload of the existing entry with that exact key, if any.
    ///
    /// Replacing a payload in place is not a structural change: no
    /// rebalancing happens and the size is unchanged. When no entry matches,
    /// a new node is attached and the whole tree rebalanced bottom-up, in
    /// contrast to the path-local rebalance of [`TemporalTree::insert`].
    pub fn set(&mut self, interval: Interval<T>, value: V) -> Option<V> {
        if self.root.is_none() {
            self.insert(interval, value);
            return None;
        }

        let mut slot = &mut self.root;
        loop {
            match slot {
                Some(node) => {
                    slot = match interval.cmp(node.interval()) {
                        Ordering::Equal => return Some(node.replace_value(value)),
                        Ordering::Less => node.left_slot(),
                        Ordering::Greater => node.right_slot(),
                    };
                }
                None => {
                    *slot = Some(Box::new(Node::new(interval, value)));
                    break;
                }
            }
        }

        rebalance_all(self.root.as_mut().expect("tree is non-empty"));
        self.size += 1;

        None
    }

    /// Add an entry binding `value` to `interval`, keeping any existing
    /// entries with the same key.
    ///
    /// Unlike [`TemporalTree::set`] this always grows the tree by one node;
    /// duplicate keys descend right of their twin and remain individually
    /// reachable through traversal.
    pub fn insert(&mut self, interval: Interval<T>, value: V) {
        let node = Box::new(Node::new(interval, value));

        match self.root {
            Some(ref mut root) => root.insert(node),
            None => self.root = Some(node),
        }

        self.size += 1;
    }

    /// Remove the entry stored for exactly `interval`, returning its
    /// payload.
    ///
    /// Returns [`None`], leaving the tree untouched, when no entry matches.
    /// With duplicate keys present, one entry is removed per call.
    pub fn remove(&mut self, interval: &Interval<T>) -> Option<V>
    where
        T: Clone,
    {
        // Exact-match lookup first: a missing key must not perturb the tree.
        self.get(interval)?;

        let (_, value) = remove_recurse(&mut self.root, interval)
            .expect("interval was found by exact-match lookup");

        self.size -= 1;
        Some(value)
    }

    /// Visit every entry in the given traversal order, collecting
    /// `mapper(interval, value)` for each entry accepted by `predicate`,
    /// preserving visit order.
    ///
    /// The traversal is exhaustive: no subtree is pruned and no early
    /// termination happens, so the predicate is applied to every entry in
    /// the tree.
    pub fn select<F, M, O>(&self, order: Traversal, mut predicate: F, mut mapper: M) -> Vec<O>
    where
        F: FnMut(&Interval<T>, &V) -> bool,
        M: FnMut(&Interval<T>, &V) -> O,
    {
        let mut results = Vec::new();
        select_recurse(
            self.root.as_deref(),
            order,
            &mut predicate,
            &mut mapper,
            &mut results,
        );
        results
    }

    /// Iterate over all `(interval, value)` entries in ascending (start,
    /// end) order.
    pub fn iter(&self) -> impl Iterator<Item = (&Interval<T>, &V)> {
        self.root
            .iter()
            .flat_map(|v| RefIter::new(v))
            .map(|v| (v.interval(), v.value()))
    }

    /// Iterate over all entries whose interval strictly overlaps `query`, in
    /// ascending (start, end) order.
    pub fn overlaps<'a>(
        &'a self,
        query: &'a Interval<T>,
    ) -> impl Iterator<Item = (&'a Interval<T>, &'a V)> + 'a {
        self.iter()
            .filter(move |(interval, _)| interval.overlaps(query))
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<T, V> IntoIterator for TemporalTree<T, V> {
    type Item = (Interval<T>, V);
    type IntoIter = OwnedIter<T, V>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.root)
    }
}

fn select_recurse<T, V, O>(
    node: Option<&Node<T, V>>,
    order: Traversal,
    predicate: &mut impl FnMut(&Interval<T>, &V) -> bool,
    mapper: &mut impl FnMut(&Interval<T>, &V) -> O,
    results: &mut Vec<O>,
) {
    let Some(node) = node else {
        return;
    };

    if order == Traversal::Pre && predicate(node.interval(), node.value()) {
        results.push(mapper(node.interval(), node.value()));
    }

    select_recurse(node.left(), order, predicate, mapper, results);

    if order == Traversal::In && predicate(node.interval(), node.value()) {
        results.push(mapper(node.interval(), node.value()));
    }

    select_recurse(node.right(), order, predicate, mapper, results);

    if order == Traversal::Post && predicate(node.interval(), node.value()) {
        results.push(mapper(node.interval(), node.value()));
    }
}
