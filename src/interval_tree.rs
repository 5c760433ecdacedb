use crate::interval::Interval;
use crate::iter::Search;
use crate::node::Node;

/// A static interval tree: a balanced binary search tree over closed
/// intervals ordered by `(lo, hi)`, where each node caches the maximum upper
/// endpoint of its subtree so searches can skip subtrees that cannot contain
/// an overlap.
///
/// The tree is built once from a collection of intervals and never changes
/// afterwards: there is no insertion, deletion, or rebalancing, and changing
/// the interval set means building a new tree. Immutability is also what
/// makes a tree freely shareable across threads.
///
/// # Examples
/// ```
/// use static_interval_tree::{Interval, IntervalTree};
///
/// let tree = IntervalTree::from_intervals(vec![
///     Interval::new(1, 5).unwrap(),
///     Interval::new(4, 8).unwrap(),
///     Interval::new(9, 12).unwrap(),
/// ]);
///
/// let hits = tree.search(&Interval::new(5, 6).unwrap());
/// assert_eq!(hits, vec![&Interval::new(1, 5).unwrap(), &Interval::new(4, 8).unwrap()]);
/// ```
#[derive(Clone, Debug)]
pub struct IntervalTree<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for IntervalTree<K> {
    fn default() -> Self {
        IntervalTree { root: None, len: 0 }
    }
}

impl<K> IntervalTree<K> {
    /// The root node, or `None` if the tree was built from an empty
    /// collection.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// True if the tree stores no interval.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of stored intervals, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The height of the tree: 0 when empty, 1 for a single node. Always
    /// ⌈log₂(n + 1)⌉ for n stored intervals, by construction.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }
}

impl<K: Ord + Clone> IntervalTree<K> {
    /// Builds a tree from a collection of intervals in any order.
    ///
    /// The intervals are sorted by `(lo, hi)` and then partitioned by
    /// recursive median splits, so the result is height-balanced and its
    /// in-order traversal is the sorted sequence. Duplicate and overlapping
    /// intervals are stored as-is, never merged.
    pub fn from_intervals(mut intervals: Vec<Interval<K>>) -> IntervalTree<K> {
        intervals.sort();
        IntervalTree::from_sorted_intervals(intervals)
    }

    /// Builds a tree from intervals already sorted by `(lo, hi)` ascending,
    /// skipping the sort.
    ///
    /// # Precondition
    ///
    /// The sort order is **not verified**. Passing an unsorted collection
    /// produces a structurally valid tree whose subtree-max pruning is
    /// unsound: searches will silently miss matches. Use
    /// [`from_intervals`](IntervalTree::from_intervals) unless the input
    /// order is guaranteed.
    pub fn from_sorted_intervals(intervals: Vec<Interval<K>>) -> IntervalTree<K> {
        IntervalTree {
            root: Node::from_sorted(&intervals),
            len: intervals.len(),
        }
    }

    /// Returns every stored interval overlapping `query`, fully materialized
    /// in in-order (ascending `(lo, hi)`) sequence.
    ///
    /// Overlap is inclusive on both ends; see [`Interval::overlaps`].
    pub fn search(&self, query: &Interval<K>) -> Vec<&Interval<K>> {
        let mut results = Vec::new();
        if let Some(ref root) = self.root {
            search_nodes(root, query, &mut results);
        }
        results
    }

    /// [`search`](IntervalTree::search) for the single point `p`, i.e. the
    /// query `[p, p]`.
    pub fn search_point(&self, p: K) -> Vec<&Interval<K>> {
        self.search(&Interval::point(p))
    }

    /// Returns a lazy [`Search`] view over the same traversal as
    /// [`search`](IntervalTree::search): same matches, same order, produced
    /// on demand with no intermediate vector. The view is restartable and
    /// supports early termination and a memoized count.
    pub fn search_lazy(&self, query: Interval<K>) -> Search<'_, K> {
        Search::new(self.root(), query)
    }
}

/// Recursive pruned in-order traversal.
///
/// A subtree is entered only when `query.lo <= subtree_max`; otherwise every
/// interval below has `hi < query.lo` and cannot overlap. Pruning is
/// one-sided: subtrees lying entirely above `query.hi` are still walked and
/// rejected node-by-node by the overlap test.
fn search_nodes<'a, K: Ord>(
    node: &'a Node<K>,
    query: &Interval<K>,
    results: &mut Vec<&'a Interval<K>>,
) {
    if let Some(left) = node.left() {
        if query.lo() <= left.subtree_max() {
            search_nodes(left, query, results);
        }
    }

    if node.interval().overlaps(query) {
        results.push(node.interval());
    }

    if let Some(right) = node.right() {
        if query.lo() <= right.subtree_max() {
            search_nodes(right, query, results);
        }
    }
}
