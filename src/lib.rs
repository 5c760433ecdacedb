//! Implementation of a static interval tree ([`interval_tree::IntervalTree`])
//! over closed intervals with inclusive endpoints. It is based on the
//! augmented-tree data structure described in Cormen et al.
//! (2009, Section 14.3: Interval trees, pp. 348–354), specialized to an
//! immutable index: the tree is built once from a collection of intervals by
//! recursive median splitting, then answers "stabbing queries" (as in "which
//! stored intervals overlap point `p` or interval `i`?") through a traversal
//! that prunes subtrees via a cached per-subtree maximum endpoint.
//!
//! Search results come in two shapes over the identical in-order traversal: a
//! materialized `Vec`, or a lazy, restartable [`Search`] view supporting
//! early termination and a memoized count.
//!
//! Note that any type satisfying the [`Ord`] trait can be used as the
//! interval endpoint in this tree.

/// An interval tree implemented with a balanced binary search tree.
pub mod interval_tree;

mod interval;
mod iter;
mod node;

pub use interval::{Interval, InvalidInterval};
pub use interval_tree::IntervalTree;
pub use iter::{Search, SearchIter};
pub use node::Node;
