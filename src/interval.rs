use std::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an interval is constructed with `lo > hi`.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("interval lower bound exceeds upper bound")]
pub struct InvalidInterval;

/// A closed interval `[lo, hi]` over an ordered scalar type.
///
/// Both endpoints are inclusive, so intervals that merely touch at an
/// endpoint (`[1, 5]` and `[5, 8]`) count as overlapping. A single point `p`
/// is represented as the degenerate interval `[p, p]`.
///
/// The invariant `lo <= hi` is enforced at construction: [`Interval::new`]
/// rejects reversed bounds with [`InvalidInterval`], so every `Interval` the
/// rest of the crate sees is well-formed.
///
/// The derived [`Ord`] compares `(lo, hi)` lexicographically, which is the
/// ordering the tree is built on.
///
/// With the `serde` feature, an interval serializes as the `(lo, hi)` tuple
/// and deserialization routes through [`Interval::new`], so reversed bounds
/// are rejected on the wire as well.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "(K, K)",
        into = "(K, K)",
        bound(serialize = "K: Serialize + Clone", deserialize = "K: Deserialize<'de> + Ord")
    )
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<K> {
    lo: K,
    hi: K,
}

impl<K: Ord> TryFrom<(K, K)> for Interval<K> {
    type Error = InvalidInterval;

    fn try_from((lo, hi): (K, K)) -> Result<Interval<K>, InvalidInterval> {
        Interval::new(lo, hi)
    }
}

impl<K> From<Interval<K>> for (K, K) {
    fn from(interval: Interval<K>) -> (K, K) {
        (interval.lo, interval.hi)
    }
}

impl<K: Ord> Interval<K> {
    /// Creates the closed interval `[lo, hi]`.
    ///
    /// # Examples
    /// ```
    /// use static_interval_tree::Interval;
    ///
    /// let interval = Interval::new(1, 5).unwrap();
    /// assert_eq!(*interval.lo(), 1);
    /// assert_eq!(*interval.hi(), 5);
    /// assert!(Interval::new(5, 1).is_err());
    /// ```
    pub fn new(lo: K, hi: K) -> Result<Interval<K>, InvalidInterval> {
        if lo <= hi {
            Ok(Interval { lo, hi })
        } else {
            Err(InvalidInterval)
        }
    }

    /// Creates the degenerate single-point interval `[p, p]`.
    pub fn point(p: K) -> Interval<K>
    where
        K: Clone,
    {
        Interval {
            lo: p.clone(),
            hi: p,
        }
    }

    /// The lower (inclusive) endpoint.
    pub fn lo(&self) -> &K {
        &self.lo
    }

    /// The upper (inclusive) endpoint.
    pub fn hi(&self) -> &K {
        &self.hi
    }

    /// Whether `self` and `other` intersect.
    ///
    /// Inclusive on both ends: touching endpoints overlap.
    ///
    /// # Examples
    /// ```
    /// use static_interval_tree::Interval;
    ///
    /// let interval = Interval::new(1, 5).unwrap();
    /// assert!(interval.overlaps(&Interval::new(5, 8).unwrap()));
    /// assert!(!interval.overlaps(&Interval::new(6, 9).unwrap()));
    /// ```
    pub fn overlaps(&self, other: &Interval<K>) -> bool {
        self.lo <= other.hi && self.hi >= other.lo
    }
}

impl<K> fmt::Display for Interval<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
