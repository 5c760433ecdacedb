use std::cell::OnceCell;

use crate::interval::Interval;
use crate::node::Node;

#[derive(Clone, Copy, Debug)]
enum Visiting {
    Left,
    Own,
    Right,
}

/// A lazy, restartable view over the intervals matching one query.
///
/// Returned by [`IntervalTree::search_lazy`](crate::IntervalTree::search_lazy).
/// The view holds a reference to the tree's root and owns the query; it is
/// never consumed by iteration. Every call to [`iter`](Search::iter) (or
/// iterating `&view` directly) re-runs the pruned traversal from scratch and
/// yields the same intervals in the same in-order sequence as the
/// materialized [`search`](crate::IntervalTree::search).
///
/// [`count`](Search::count) is memoized through an interior [`OnceCell`],
/// which makes the view `!Sync`: share the tree across threads, not the view.
#[derive(Debug)]
pub struct Search<'a, K> {
    root: Option<&'a Node<K>>,
    query: Interval<K>,
    cached_count: OnceCell<usize>,
}

impl<'a, K: Ord + Clone> Search<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, query: Interval<K>) -> Search<'a, K> {
        Search {
            root,
            query,
            cached_count: OnceCell::new(),
        }
    }

    /// The query interval this view was created with.
    pub fn query(&self) -> &Interval<K> {
        &self.query
    }

    /// Starts a fresh traversal.
    ///
    /// The returned iterator borrows the tree, not the view, so its items
    /// outlive `self`. Dropping it part-way through does no further work.
    pub fn iter(&self) -> SearchIter<'a, K> {
        SearchIter::new(self.root, self.query.clone())
    }

    /// Number of matching intervals.
    ///
    /// The first call runs a full traversal; the result is memoized, so
    /// subsequent calls are O(1).
    pub fn count(&self) -> usize {
        *self.cached_count.get_or_init(|| self.iter().count())
    }

    /// True if the traversal produces no interval.
    ///
    /// Stops at the first match rather than counting them all.
    pub fn is_empty(&self) -> bool {
        match self.cached_count.get() {
            Some(count) => *count == 0,
            None => self.iter().next().is_none(),
        }
    }

    /// Materializes the view into a vector, in traversal order.
    pub fn to_vec(&self) -> Vec<&'a Interval<K>> {
        self.iter().collect()
    }
}

impl<'a, K: Ord + Clone> IntoIterator for &'_ Search<'a, K> {
    type Item = &'a Interval<K>;
    type IntoIter = SearchIter<'a, K>;

    fn into_iter(self) -> SearchIter<'a, K> {
        self.iter()
    }
}

impl<K: Ord + Clone> PartialEq<[Interval<K>]> for Search<'_, K> {
    /// Element-wise, order-sensitive comparison against a concrete sequence.
    fn eq(&self, other: &[Interval<K>]) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<K: Ord + Clone> PartialEq<Vec<Interval<K>>> for Search<'_, K> {
    fn eq(&self, other: &Vec<Interval<K>>) -> bool {
        *self == **other
    }
}

/// In-order iterator over the intervals matching one query.
///
/// Runs the same pruned traversal as the materialized search, one step per
/// pull: a subtree is descended into only when `query.lo` does not exceed its
/// cached subtree max. Pruning is one-sided; subtrees entirely above
/// `query.hi` are still visited and filtered by the overlap test.
#[derive(Debug)]
pub struct SearchIter<'a, K> {
    query: Interval<K>,
    stack: Vec<(&'a Node<K>, Visiting)>,
}

impl<'a, K: Ord> SearchIter<'a, K> {
    fn new(root: Option<&'a Node<K>>, query: Interval<K>) -> SearchIter<'a, K> {
        let mut stack = Vec::new();
        if let Some(root) = root {
            stack.push((root, Visiting::Left));
        }
        SearchIter { query, stack }
    }

    fn visit_left(&mut self, node: &'a Node<K>) {
        self.stack.push((node, Visiting::Own));
        if let Some(left) = node.left() {
            if self.query.lo() <= left.subtree_max() {
                self.stack.push((left, Visiting::Left));
            }
        }
    }

    fn visit_right(&mut self, node: &'a Node<K>) {
        if let Some(right) = node.right() {
            if self.query.lo() <= right.subtree_max() {
                self.stack.push((right, Visiting::Left));
            }
        }
    }
}

impl<'a, K: Ord> Iterator for SearchIter<'a, K> {
    type Item = &'a Interval<K>;

    fn next(&mut self) -> Option<&'a Interval<K>> {
        while let Some((node, state)) = self.stack.pop() {
            match state {
                Visiting::Left => self.visit_left(node),
                Visiting::Own => {
                    self.stack.push((node, Visiting::Right));
                    if node.interval().overlaps(&self.query) {
                        return Some(node.interval());
                    }
                }
                Visiting::Right => self.visit_right(node),
            }
        }
        None
    }
}

impl<K: Clone> Clone for SearchIter<'_, K> {
    fn clone(&self) -> Self {
        SearchIter {
            query: self.query.clone(),
            stack: self.stack.clone(),
        }
    }
}
