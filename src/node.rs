use std::cmp;

use crate::interval::Interval;

/// A node of the static tree: one stored interval, the cached maximum upper
/// endpoint of its subtree, and up to two exclusively-owned children.
///
/// Nodes are created bottom-up in a single construction pass and never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<K> {
    interval: Interval<K>,
    max: K, // Max end-point anywhere in this subtree.
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,
}

impl<K> Node<K> {
    /// The interval stored at this node.
    pub fn interval(&self) -> &Interval<K> {
        &self.interval
    }

    /// The maximum upper endpoint across this node and both subtrees.
    pub fn subtree_max(&self) -> &K {
        &self.max
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height());
        let right = self.right.as_ref().map_or(0, |n| n.height());
        1 + cmp::max(left, right)
    }
}

impl<K: Ord + Clone> Node<K> {
    /// Builds a balanced subtree from a slice sorted by `(lo, hi)`.
    ///
    /// The middle element becomes this node's interval, the halves on either
    /// side become the children, and the subtree max is the largest upper
    /// endpoint among the node and the children. In-order traversal of the
    /// result reproduces the slice order.
    pub(crate) fn from_sorted(intervals: &[Interval<K>]) -> Option<Box<Node<K>>> {
        if intervals.is_empty() {
            return None;
        }

        let mid = intervals.len() / 2;
        let interval = intervals[mid].clone();
        let left = Node::from_sorted(&intervals[..mid]);
        let right = Node::from_sorted(&intervals[mid + 1..]);

        let mut max = interval.hi().clone();
        if let Some(ref left) = left {
            max = cmp::max(max, left.max.clone());
        }
        if let Some(ref right) = right {
            max = cmp::max(max, right.max.clone());
        }

        Some(Box::new(Node {
            interval,
            max,
            left,
            right,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(lo: i64, hi: i64) -> Interval<i64> {
        Interval::new(lo, hi).unwrap()
    }

    #[test]
    fn from_sorted_empty_is_none() {
        assert!(Node::<i64>::from_sorted(&[]).is_none());
    }

    #[test]
    fn from_sorted_single_is_leaf() {
        let node = Node::from_sorted(&[iv(1, 10)]).unwrap();
        assert_eq!(*node.interval(), iv(1, 10));
        assert!(node.is_leaf());
        assert_eq!(*node.subtree_max(), 10);
    }

    #[test]
    fn subtree_max_covers_children() {
        // Sorted by (lo, hi); a child interval carries the largest hi.
        let node = Node::from_sorted(&[iv(1, 3), iv(2, 12), iv(5, 6)]).unwrap();
        assert_eq!(*node.interval(), iv(2, 12));
        assert_eq!(*node.subtree_max(), 12);
        assert_eq!(*node.left().unwrap().subtree_max(), 3);
        assert_eq!(*node.right().unwrap().subtree_max(), 6);

        let node = Node::from_sorted(&[iv(1, 20), iv(2, 3), iv(5, 6)]).unwrap();
        assert_eq!(*node.interval(), iv(2, 3));
        assert_eq!(*node.subtree_max(), 20);
    }

    #[test]
    fn height_counts_levels() {
        assert_eq!(Node::from_sorted(&[iv(1, 2)]).unwrap().height(), 1);
        let node = Node::from_sorted(&[iv(1, 2), iv(3, 4), iv(5, 6), iv(7, 8)]).unwrap();
        assert_eq!(node.height(), 3);
    }
}
