//! Associative combination.
//!
//! For the set kinds, `combine` is union. Union is associative, and since it
//! is also commutative and idempotent, the result as a set does not depend on
//! how a sequence of sets is grouped or ordered. The list kind still keeps
//! the insertion order of whatever arrives first.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use setwise::persistent::PersistentHashSet;
//! use setwise::typeclass::Semigroup;
//!
//! let morning: PersistentHashSet<&str> = ["ann", "bo"].into_iter().collect();
//! let evening: PersistentHashSet<&str> = ["bo", "cy"].into_iter().collect();
//!
//! let everyone = morning.combine_ref(&evening);
//! assert_eq!(everyone.len(), 3);
//! assert_eq!(morning.len(), 2);
//! ```

/// Values with an associative binary operation.
pub trait Semigroup {
    /// Combines `self` with `other`.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines without consuming either operand.
    ///
    /// The default clones both sides. Set kinds override it, since union
    /// reads its right operand and only copies `self` when something is
    /// actually added.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines every value of `values` in order, or `None` when there are
    /// none.
    ///
    /// ```rust
    /// use setwise::persistent::PersistentTreeSet;
    /// use setwise::typeclass::Semigroup;
    ///
    /// let shifts = vec![
    ///     [1, 2].into_iter().collect::<PersistentTreeSet<u8>>(),
    ///     [2, 5].into_iter().collect(),
    /// ];
    /// let covered = PersistentTreeSet::reduce_all(shifts).map(|set| set.len());
    /// assert_eq!(covered, Some(3));
    /// assert_eq!(PersistentTreeSet::<u8>::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        let mut values = values.into_iter();
        let first = values.next()?;
        Some(values.fold(first, Self::combine))
    }
}

/// Concatenation, so that `fold_map` can gather set elements into a `Vec`.
impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        [self.as_slice(), other.as_slice()].concat()
    }
}
