//! A [disjoint-sets/union-find] implementation keyed by value.
//!
//! See [`DisjointSet<T>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet<T>`]: struct.DisjointSet.html

use {
    std::{
        borrow::Borrow,
        fmt,
        hash::{Hash, BuildHasher},
        iter::{
            FromIterator,
            FusedIterator,
        },
        ops,
        collections::{
            HashSet,
            hash_map::{self, HashMap, RandomState},
        },
    },
    tracing::trace,
    crate::disjoint_sets::{
        metadata::Metadata,
        error::DisjointSetError,
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] structure that partitions a collection of values in sets.
///
/// Values are added with the `add` method and each value starts out in its own set.
/// These sets can be joined with the `union` method and you can check if two values
/// share a set with the `same_set` method.
/// Both run in amortized `O(α(n))` time thanks to union by size and path compression.
///
/// In addition to the tree of each set we store a linked list of its members, the member
/// chain, that starts at the root of the set.
/// This allows iterating over a single set with the `set` method in `O(m)` time where `m`
/// is the size of that set, independent of the amount of values stored.
///
/// The representative returned by `find` is an implementation detail that only changes
/// when sets are joined.
/// Two values are in the same set exactly when `find` returns the same representative.
///
/// # Examples
///
/// ```
/// use partition_graphs::DisjointSet;
///
/// let mut disjoint_set: DisjointSet<char> = "abcd".chars().collect();
/// disjoint_set.union(&'b', &'c')?;
/// disjoint_set.union(&'c', &'d')?;
///
/// assert!(disjoint_set.same_set(&'b', &'d')?);
/// assert!(!disjoint_set.same_set(&'a', &'d')?);
///
/// for &value in disjoint_set.set(&'b')? {
///     assert!(value != 'a');
/// }
/// # Ok::<(), partition_graphs::DisjointSetError<char>>(())
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone)]
pub struct DisjointSet<T, S = RandomState> {
    /// Maps each value to its index in `data` and `meta`.
    indices: HashMap<T, usize, S>,
    /// Each index has a value, in the order they were added.
    data: Vec<T>,
    /// The metadata for each value, this vec will always have the same size as `data`.
    meta: Vec<Metadata>,
}

/// Creates a [`DisjointSet`] containing the arguments.
///
/// There are two forms of the `disjoint_set!` macro:
///
/// - Create a [`DisjointSet`] containing a given list of values all in distinct sets:
///
/// ```
/// use partition_graphs::disjoint_set;
///
/// let disjoint_set = disjoint_set!['a', 'b', 'c', 'a'];
///
/// assert!(disjoint_set.len() == 3);
/// assert!(disjoint_set.amount_of_sets() == 3);
/// ```
///
/// - Create a [`DisjointSet`] containing a given list of values in the sets specified:
///
/// ```
/// use partition_graphs::disjoint_set;
///
/// let disjoint_set = disjoint_set![
///     'a' => 0,
///     'b' => 1,
///     'c' => 2,
///     'd' => 1,
///     'e' => 0,
/// ];
///
/// assert!(disjoint_set.same_set(&'a', &'e').unwrap());
/// assert!(disjoint_set.same_set(&'b', &'d').unwrap());
/// assert!(disjoint_set.is_singleton(&'c').unwrap());
/// ```
///
/// You can use any labels that implement `Hash` and `Eq`.
/// Values with the same label will be placed in the same set.
/// The labels are only used while constructing the [`DisjointSet`] and are not stored.
///
/// [`DisjointSet`]: disjoint_sets/disjoint_set/struct.DisjointSet.html
#[macro_export]
macro_rules! disjoint_set {
    ($($elem: expr),* $(,)?) => {
        {
            let len = $crate::count_exprs![$($elem),*];
            let mut disjoint_set = $crate::DisjointSet::with_capacity(len);

            $(
                disjoint_set.add($elem);
            )*

            disjoint_set
        }
    };
    ($($elem: expr => $set: expr),* $(,)?) => {
        {
            let len = $crate::count_exprs![$($elem),*];
            let mut disjoint_set = $crate::DisjointSet::with_capacity(len);
            let mut map = ::std::collections::HashMap::new();

            $(
                let index = disjoint_set.insert_full($elem);

                if let Some(&first) = map.get(&$set) {
                    disjoint_set.union_indices(first, index);
                } else {
                    map.insert($set, index);
                }
            )*

            disjoint_set
        }
    };
}

impl<T> DisjointSet<T, RandomState> {
    /// Constructs a new, empty `DisjointSet<T>`.
    ///
    /// The `DisjointSet<T>` will not allocate until values are added to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::DisjointSet;
    ///
    /// let disjoint_set: DisjointSet<u32> = DisjointSet::new();
    /// assert!(disjoint_set.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            indices: HashMap::new(),
            data: Vec::new(),
            meta: Vec::new(),
        }
    }

    /// Constructs a new, empty `DisjointSet<T>` with the specified capacity.
    ///
    /// The `DisjointSet<T>` will be able to hold at least `capacity` values without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::with_capacity(10);
    /// assert!(disjoint_set.capacity() >= 10);
    ///
    /// for i in 0 .. 10 {
    ///     disjoint_set.add(i);
    /// }
    /// assert!(disjoint_set.len() == 10);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: HashMap::with_capacity(capacity),
            data: Vec::with_capacity(capacity),
            meta: Vec::with_capacity(capacity),
        }
    }
}

impl<T, S> DisjointSet<T, S> {
    /// Constructs a new, empty `DisjointSet<T, S>` which will use the given hash builder
    /// to hash its values.
    #[inline]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            indices: HashMap::with_hasher(hash_builder),
            data: Vec::new(),
            meta: Vec::new(),
        }
    }

    /// Constructs a new, empty `DisjointSet<T, S>` with the specified capacity which will
    /// use the given hash builder to hash its values.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            indices: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            data: Vec::with_capacity(capacity),
            meta: Vec::with_capacity(capacity),
        }
    }

    /// Returns a reference to the hash builder of the `DisjointSet<T, S>`.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.indices.hasher()
    }

    /// Returns the number of values the `DisjointSet<T, S>` can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        usize::min(self.indices.capacity(), self.data.capacity())
    }

    /// Returns the amount of distinct values in the `DisjointSet<T, S>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::new();
    /// disjoint_set.add("first");
    /// disjoint_set.add("second");
    /// disjoint_set.add("first");
    ///
    /// assert!(disjoint_set.len() == 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the `DisjointSet<T, S>` contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the amount of sets in the `DisjointSet<T, S>`.
    ///
    /// This method will be executed in `O(n)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::disjoint_set;
    ///
    /// let disjoint_set = disjoint_set![
    ///     8 => 0,
    ///     3 => 1,
    ///     4 => 0,
    ///     5 => 1,
    ///     7 => 2,
    /// ];
    ///
    /// assert!(disjoint_set.amount_of_sets() == 3);
    /// ```
    pub fn amount_of_sets(&self) -> usize {
        (0 .. self.len()).filter(|&index| self.meta[index].is_root(index)).count()
    }

    /// Returns an iterator over all values in the order they were added.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.data.iter()
    }

    /// Returns an iterator over all sets of the `DisjointSet<T, S>`.
    ///
    /// The iterator returned yields `Set` iterators which in turn yield references
    /// to the values of that set.
    /// Together the sets contain every value exactly once.
    ///
    /// The order of the sets and the order of the values in a set are not specified.
    /// This method will be executed in `O(n)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::disjoint_set;
    ///
    /// let disjoint_set = disjoint_set![
    ///     0 => 'a',
    ///     1 => 'a',
    ///     2 => 'b',
    ///     3 => 'b',
    ///     4 => 'c',
    ///     5 => 'c',
    /// ];
    ///
    /// for set in disjoint_set.sets() {
    ///     let values: Vec<_> = set.collect();
    ///     assert!(values.len() == 2);
    ///     assert!(values[0] / 2 == values[1] / 2);
    /// }
    /// ```
    #[inline]
    pub fn sets(&self) -> Sets<T, S> {
        Sets {
            disjoint_set: self,
            range: 0 .. self.len(),
        }
    }

    /// Gives the root of the set that `index` belongs to.
    ///
    /// Every index on the path to the root is pointed directly at the root afterwards.
    /// The path is walked twice instead of recursing so long chains can not exhaust
    /// the stack.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub(crate) fn find_index(&self, index: usize) -> usize {
        let mut root = index;
        while !self.meta[root].is_root(root) {
            root = self.meta[root].parent();
        }

        let mut current = index;
        while current != root {
            let parent = self.meta[current].parent();
            self.meta[current].set_parent(root);
            current = parent;
        }

        root
    }

    /// Returns an iterator over the member chain of `root`.
    #[inline]
    fn chain(&self, root: usize) -> Set<T, S> {
        Set {
            disjoint_set: self,
            current: Some(root),
            root,
            remaining: self.meta[root].size(),
        }
    }

    /// Joins the sets of the `first_index` and the `second_index`.
    ///
    /// The root of the smaller set is placed under the root of the larger set, on a tie
    /// the root of `first_index` stays the root.
    /// This method is used by the `disjoint_set!` macro.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    #[doc(hidden)]
    pub fn union_indices(&mut self, first_index: usize, second_index: usize) {
        let first = self.find_index(first_index);
        let second = self.find_index(second_index);

        if first == second {
            return
        }

        let (winner, loser) = if self.meta[first].size() >= self.meta[second].size() {
            (first, second)
        } else {
            (second, first)
        };

        // The chain of the loser is appended to the chain of the winner.
        // The tail and size of the loser have to be read before it stops being a root.
        let winner_tail = self.meta[winner].tail();
        self.meta[winner_tail].set_next(Some(loser));
        self.meta[winner].set_tail(self.meta[loser].tail());
        self.meta[winner].set_size(self.meta[winner].size() + self.meta[loser].size());
        self.meta[loser].set_parent(winner);

        trace!(size = self.meta[winner].size(), "joined two sets");
    }
}

impl<T, S> DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Adds `value` to the `DisjointSet<T, S>` in a set of its own.
    ///
    /// Returns `true` if the value was added and `false` if it was already present,
    /// in which case its set is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::new();
    ///
    /// assert!(disjoint_set.add(Some(1)));
    /// assert!(disjoint_set.add(None));
    /// assert!(!disjoint_set.add(Some(1)));
    ///
    /// assert!(disjoint_set.find(&None)? == &None);
    /// # Ok::<(), partition_graphs::DisjointSetError<Option<i32>>>(())
    /// ```
    #[inline]
    pub fn add(&mut self, value: T) -> bool where
        T: Clone,
    {
        let len = self.len();
        self.insert_full(value) == len
    }

    /// Adds `value` if it is not present yet and returns its index.
    ///
    /// This method is used by the `disjoint_set!` macro.
    #[doc(hidden)]
    pub fn insert_full(&mut self, value: T) -> usize where
        T: Clone,
    {
        match self.indices.entry(value) {
            hash_map::Entry::Occupied(occupied) => *occupied.get(),
            hash_map::Entry::Vacant(vacant) => {
                let index = self.data.len();

                self.data.push(vacant.key().clone());
                self.meta.push(Metadata::new(index));
                vacant.insert(index);

                index
            },
        }
    }

    /// Returns `true` if `value` was added to the `DisjointSet<T, S>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::disjoint_set;
    ///
    /// let disjoint_set = disjoint_set![String::from("a"), String::from("b")];
    ///
    /// assert!(disjoint_set.contains("a"));
    /// assert!(!disjoint_set.contains("c"));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.indices.contains_key(value)
    }

    /// Gives the index of `value` or a `NotAMember` error.
    #[inline]
    fn index_of<Q>(&self, value: &Q) -> Result<usize, DisjointSetError<T>> where
        T: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        match self.indices.get(value) {
            Some(&index) => Ok(index),
            None => Err(DisjointSetError::NotAMember { value: value.to_owned() }),
        }
    }

    /// Gives the representative of the set that `value` belongs to.
    ///
    /// This method will be executed in `O(α(n))` time where `α` is the inverse
    /// Ackermann function. Each value of a set gives the same representative,
    /// which value that is can change when sets are joined.
    ///
    /// # Errors
    ///
    /// Returns `NotAMember` if `value` was never added.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::disjoint_set;
    ///
    /// let mut disjoint_set = disjoint_set![1, 2, 3];
    /// assert!(disjoint_set.find(&2)? == &2);
    ///
    /// disjoint_set.union(&1, &2)?;
    /// assert!(disjoint_set.find(&1)? == disjoint_set.find(&2)?);
    /// assert!(disjoint_set.find(&4).is_err());
    /// # Ok::<(), partition_graphs::DisjointSetError<i32>>(())
    /// ```
    #[inline]
    pub fn find<Q>(&self, value: &Q) -> Result<&T, DisjointSetError<T>> where
        T: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        let index = self.index_of(value)?;

        Ok(&self.data[self.find_index(index)])
    }

    /// Returns `true` if `first` and `second` are in the same set.
    ///
    /// This method will be executed in `O(α(n))` time where `α` is the inverse
    /// Ackermann function.
    ///
    /// # Errors
    ///
    /// Returns `NotAMember` if either value was never added.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::disjoint_set;
    ///
    /// let mut disjoint_set = disjoint_set![0, 1, 2, 3];
    ///
    /// disjoint_set.union(&1, &3)?;
    /// disjoint_set.union(&0, &1)?;
    ///
    /// assert!(disjoint_set.same_set(&0, &1)?);
    /// assert!(!disjoint_set.same_set(&0, &2)?);
    /// assert!(disjoint_set.same_set(&0, &3)?);
    /// assert!(!disjoint_set.same_set(&1, &2)?);
    /// assert!(disjoint_set.same_set(&1, &3)?);
    /// assert!(!disjoint_set.same_set(&2, &3)?);
    /// # Ok::<(), partition_graphs::DisjointSetError<i32>>(())
    /// ```
    #[inline]
    pub fn same_set<Q>(&self, first: &Q, second: &Q) -> Result<bool, DisjointSetError<T>> where
        T: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        let first_index = self.index_of(first)?;
        let second_index = self.index_of(second)?;

        Ok(self.find_index(first_index) == self.find_index(second_index))
    }

    /// Returns `true` if `first` and `second` are in different sets.
    ///
    /// # Errors
    ///
    /// Returns `NotAMember` if either value was never added.
    #[inline]
    pub fn other_sets<Q>(&self, first: &Q, second: &Q) -> Result<bool, DisjointSetError<T>> where
        T: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        self.same_set(first, second).map(|same| !same)
    }

    /// Joins the sets of `first` and `second`.
    ///
    /// The smaller set is joined into the larger one.
    /// Nothing happens if the values already share a set.
    /// This method will be executed in `O(α(n))` time where `α` is the inverse
    /// Ackermann function.
    ///
    /// # Errors
    ///
    /// Returns `NotAMember` if either value was never added.
    /// The `DisjointSet<T, S>` is not changed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::disjoint_set;
    ///
    /// let mut disjoint_set = disjoint_set!['a', 'b', 'c', 'd'];
    ///
    /// disjoint_set.union(&'b', &'c')?;
    ///
    /// assert!(disjoint_set.len_of_set(&'a')? == 1);
    /// assert!(disjoint_set.len_of_set(&'b')? == 2);
    /// assert!(disjoint_set.len_of_set(&'c')? == 2);
    ///
    /// disjoint_set.union(&'c', &'d')?;
    ///
    /// assert!(disjoint_set.len_of_set(&'b')? == 3);
    /// assert!(disjoint_set.union(&'d', &'e').is_err());
    /// # Ok::<(), partition_graphs::DisjointSetError<char>>(())
    /// ```
    pub fn union<Q>(&mut self, first: &Q, second: &Q) -> Result<(), DisjointSetError<T>> where
        T: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        let first_index = self.index_of(first)?;
        let second_index = self.index_of(second)?;

        self.union_indices(first_index, second_index);

        Ok(())
    }

    /// Returns an iterator over the values of the set that `value` belongs to.
    ///
    /// The iterator walks the member chain of the set so the next value is found in
    /// `O(1)` time. The order the values are returned in is not specified.
    ///
    /// # Errors
    ///
    /// Returns `NotAMember` if `value` was never added.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::disjoint_set;
    ///
    /// let disjoint_set = disjoint_set![
    ///     'a' => "first set",
    ///     'b' => "first set",
    ///     'c' => "second set",
    ///     'd' => "second set",
    /// ];
    ///
    /// let set = disjoint_set.set(&'c')?;
    /// assert!(set.len() == 2);
    ///
    /// for &value in set {
    ///     assert!(value == 'c' || value == 'd');
    /// }
    /// # Ok::<(), partition_graphs::DisjointSetError<char>>(())
    /// ```
    #[inline]
    pub fn set<Q>(&self, value: &Q) -> Result<Set<T, S>, DisjointSetError<T>> where
        T: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        let index = self.index_of(value)?;

        Ok(self.chain(self.find_index(index)))
    }

    /// Returns the values of the set that `value` belongs to.
    ///
    /// This will be done in `O(m)` time where `m` is the size of the set.
    ///
    /// # Errors
    ///
    /// Returns `NotAMember` if `value` was never added.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::disjoint_set;
    /// use std::collections::HashSet;
    ///
    /// let mut disjoint_set = disjoint_set![1, 2, 3, 4, 5, 6];
    /// disjoint_set.union(&1, &6)?;
    /// disjoint_set.union(&6, &5)?;
    ///
    /// assert!(disjoint_set.members(&5)? == HashSet::from([1, 5, 6]));
    /// assert!(disjoint_set.members(&2)? == HashSet::from([2]));
    /// # Ok::<(), partition_graphs::DisjointSetError<i32>>(())
    /// ```
    pub fn members<Q>(&self, value: &Q) -> Result<HashSet<T>, DisjointSetError<T>> where
        T: Borrow<Q> + Clone,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        Ok(self.set(value)?.cloned().collect())
    }

    /// Returns the amount of values in the set that `value` belongs to.
    ///
    /// This will be done in `O(α(n))` time since the root keeps track of the size.
    ///
    /// # Errors
    ///
    /// Returns `NotAMember` if `value` was never added.
    #[inline]
    pub fn len_of_set<Q>(&self, value: &Q) -> Result<usize, DisjointSetError<T>> where
        T: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        let index = self.index_of(value)?;

        Ok(self.meta[self.find_index(index)].size())
    }

    /// Returns `true` if `value` is the only value of its set.
    ///
    /// # Errors
    ///
    /// Returns `NotAMember` if `value` was never added.
    #[inline]
    pub fn is_singleton<Q>(&self, value: &Q) -> Result<bool, DisjointSetError<T>> where
        T: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = T> + ?Sized,
    {
        self.len_of_set(value).map(|len| len == 1)
    }

    /// Reserves capacity for at least `additional` more values.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.indices.reserve(additional);
        self.data.reserve(additional);
        self.meta.reserve(additional);
    }

    /// Shrinks the capacity of the `DisjointSet<T, S>` as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.indices.shrink_to_fit();
        self.data.shrink_to_fit();
        self.meta.shrink_to_fit();
    }

    /// Checks the internal structure and panics if it is inconsistent.
    ///
    /// Every parent path has to end in a root, every member chain has to visit each value
    /// of its set once and end at the tail of its root, and the size of every root
    /// has to match its chain.
    /// This takes `O(n)` time and does not compress any paths.
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        let len = self.len();
        assert_eq!(self.meta.len(), len, "metadata and data lengths differ");
        assert_eq!(self.indices.len(), len, "index map and data lengths differ");

        for (value, &index) in &self.indices {
            assert!(self.data[index] == *value, "index map points at the wrong value");
        }

        let root_of = |index: usize| {
            let mut current = index;
            let mut steps = 0;
            while !self.meta[current].is_root(current) {
                current = self.meta[current].parent();
                steps += 1;
                assert!(steps <= len, "parent cycle through index {}", index);
            }
            current
        };

        let mut visited = bit_vec![false; len];

        for root in (0 .. len).filter(|&index| self.meta[index].is_root(index)) {
            let mut count = 0;
            let mut last = root;
            let mut current = Some(root);

            while let Some(index) = current {
                assert!(!visited[index], "index {} is in more than one member chain", index);
                assert_eq!(root_of(index), root, "member chain crosses into another set");
                visited.set(index, true);

                count += 1;
                last = index;
                current = self.meta[index].next();
            }

            assert_eq!(count, self.meta[root].size(), "size of root {} is wrong", root);
            assert_eq!(last, self.meta[root].tail(), "tail of root {} is wrong", root);
        }

        assert!(visited.all(), "some values are not in any member chain");
    }
}

impl<T> Default for DisjointSet<T, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> fmt::Debug for DisjointSet<T, S> where T: fmt::Debug {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // We map the roots to `usize` names.
        let mut map = HashMap::with_capacity(self.len());
        let mut builder = formatter.debug_list();

        for index in 0 .. self.len() {
            let root = self.find_index(index);

            let next_name = map.len();
            let name = *map.entry(root).or_insert(next_name);

            builder.entry(&format_args!("{:?} => {}", self.data[index], name));
        }

        builder.finish()
    }
}

impl<T, S> PartialEq for DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Two `DisjointSet`s are equal when they hold the same values divided in the same sets.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false
        }

        for root in (0 .. self.len()).filter(|&index| self.meta[index].is_root(index)) {
            let other_root = match other.indices.get(&self.data[root]) {
                Some(&index) => other.find_index(index),
                None => return false,
            };

            if other.meta[other_root].size() != self.meta[root].size() {
                return false
            }

            // A set of the same size that contains all our values is the same set.
            for value in self.chain(root) {
                match other.indices.get(value) {
                    Some(&index) if other.find_index(index) == other_root => {},
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T, S> Eq for DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{}

impl<T, S> ops::Index<usize> for DisjointSet<T, S> {
    type Output = T;

    /// Returns the value that was added as the `index`th distinct value.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> From<Vec<T>> for DisjointSet<T, RandomState> where
    T: Eq + Hash + Clone,
{
    fn from(vec: Vec<T>) -> Self {
        let mut disjoint_set = Self::with_capacity(vec.len());
        disjoint_set.extend(vec);

        disjoint_set
    }
}

impl<T, S> FromIterator<T> for DisjointSet<T, S> where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = T> {
        let mut disjoint_set = Self::with_hasher(S::default());
        disjoint_set.extend(iter);

        disjoint_set
    }
}

impl<'a, T, S> FromIterator<&'a T> for DisjointSet<T, S> where
    T: Eq + Hash + Copy + 'a,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = &'a T> {
        Self::from_iter(iter.into_iter().cloned())
    }
}

impl<T, S> Extend<T> for DisjointSet<T, S> where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = T> {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for value in iter {
            self.insert_full(value);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for DisjointSet<T, S> where
    T: Eq + Hash + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = &'a T> {
        self.extend(iter.into_iter().cloned())
    }
}

impl<'a, T, S> IntoIterator for &'a DisjointSet<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }
}

#[cfg(feature = "rayon")]
impl<T, S> FromParallelIterator<T> for DisjointSet<T, S> where
    T: Eq + Hash + Clone + Send,
    S: BuildHasher + Default + Send,
{
    fn from_par_iter<I>(par_iter: I) -> Self where I: IntoParallelIterator<Item = T> {
        let mut disjoint_set = Self::with_hasher(S::default());
        disjoint_set.par_extend(par_iter);

        disjoint_set
    }
}

#[cfg(feature = "rayon")]
impl<T, S> ParallelExtend<T> for DisjointSet<T, S> where
    T: Eq + Hash + Clone + Send,
    S: BuildHasher + Send,
{
    /// The values are gathered in parallel and added in order afterwards,
    /// adding itself is sequential.
    fn par_extend<I>(&mut self, par_iter: I) where I: IntoParallelIterator<Item = T> {
        let values: Vec<T> = par_iter.into_par_iter().collect();

        self.extend(values);
    }
}

#[cfg(feature = "rayon")]
impl<'a, T, S> IntoParallelIterator for &'a DisjointSet<T, S> where T: Sync {
    type Item = &'a T;
    type Iter = rayon::slice::Iter<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        self.data.par_iter()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for DisjointSet<T, RandomState> where
    T: Arbitrary + Eq + Hash + Clone + 'static,
    T::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (size_range, params) = params;
        let params = (size_range, (params, ()));

        (Vec::<(T, usize)>::arbitrary_with(params)).prop_map(|vec| {
            let mut disjoint_set = Self::with_capacity(vec.len());

            // We map a `set_number` to an `index` of that set.
            let mut map = HashMap::with_capacity(vec.len());

            for (value, set_number) in vec {
                let index = disjoint_set.insert_full(value);

                // Few distinct set numbers so the sets are not all singletons.
                let set_number = set_number.trailing_zeros();

                match map.entry(set_number) {
                    hash_map::Entry::Occupied(occupied) => {
                        disjoint_set.union_indices(index, *occupied.get());
                    },
                    hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(index);
                    }
                }
            }

            disjoint_set
        }).boxed()
    }
}

/// An iterator over a set in a `DisjointSet<T, S>`.
///
/// This struct is created by the [`set`] method on [`DisjointSet<T, S>`] and by the
/// [`Sets`] iterator.
/// See its documentation for more.
///
/// [`set`]: struct.DisjointSet.html#method.set
/// [`DisjointSet<T, S>`]: struct.DisjointSet.html
/// [`Sets`]: struct.Sets.html
#[derive(Clone, Debug)]
pub struct Set<'a, T: 'a, S: 'a = RandomState> {
    disjoint_set: &'a DisjointSet<T, S>,
    current: Option<usize>,
    root: usize,
    remaining: usize,
}

impl<'a, T, S> Iterator for Set<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let current = self.current?;

        // We know the root so we might as well shorten the path.
        self.disjoint_set.meta[current].set_parent(self.root);

        self.current = self.disjoint_set.meta[current].next();
        self.remaining -= 1;

        Some(&self.disjoint_set.data[current])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, S> ExactSizeIterator for Set<'a, T, S> {}

impl<'a, T, S> FusedIterator for Set<'a, T, S> {}

/// An iterator over all sets in a `DisjointSet<T, S>`.
///
/// This struct is created by the [`sets`] method on [`DisjointSet<T, S>`].
/// See its documentation for more information.
///
/// [`sets`]: struct.DisjointSet.html#method.sets
/// [`DisjointSet<T, S>`]: struct.DisjointSet.html
#[derive(Clone, Debug)]
pub struct Sets<'a, T: 'a, S: 'a = RandomState> {
    disjoint_set: &'a DisjointSet<T, S>,
    range: ops::Range<usize>,
}

impl<'a, T, S> Iterator for Sets<'a, T, S> {
    type Item = Set<'a, T, S>;

    fn next(&mut self) -> Option<Set<'a, T, S>> {
        // We keep going until we find a root.
        loop {
            let index = self.range.next()?;

            if self.disjoint_set.meta[index].is_root(index) {
                return Some(self.disjoint_set.chain(index))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.range.len()))
    }
}

impl<'a, T, S> DoubleEndedIterator for Sets<'a, T, S> {
    fn next_back(&mut self) -> Option<Set<'a, T, S>> {
        loop {
            let index = self.range.next_back()?;

            if self.disjoint_set.meta[index].is_root(index) {
                return Some(self.disjoint_set.chain(index))
            }
        }
    }
}

impl<'a, T, S> FusedIterator for Sets<'a, T, S> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_without_unions() {
        let disjoint_set: DisjointSet<i32> = (-100 .. 100).collect();

        for i in -100 .. 100 {
            assert_eq!(disjoint_set.find(&i), Ok(&i));
            assert_eq!(disjoint_set.same_set(&i, &i), Ok(true));
            if i > -100 {
                assert_eq!(disjoint_set.same_set(&i, &(i - 1)), Ok(false));
            }
        }

        assert_eq!(disjoint_set.amount_of_sets(), 200);
        disjoint_set.assert_invariants();
    }

    #[test]
    fn chain_of_unions_ends_in_one_set() {
        let mut disjoint_set = DisjointSet::new();

        for (count, i) in (-100 .. 100).enumerate() {
            assert_eq!(disjoint_set.len(), count);
            disjoint_set.add(i);
            assert_eq!(disjoint_set.len(), count + 1);
        }

        for i in -99 .. 100 {
            disjoint_set.union(&(i - 1), &i).unwrap();
            assert_eq!(disjoint_set.same_set(&-100, &i), Ok(true));
            if i < 99 {
                assert_eq!(disjoint_set.same_set(&-100, &(i + 1)), Ok(false));
            }
        }

        for i in -100 .. 100 {
            assert_eq!(disjoint_set.same_set(&0, &i), Ok(true));
        }

        assert_eq!(disjoint_set.sets().count(), 1);
        assert_eq!(disjoint_set.len_of_set(&42), Ok(200));
        disjoint_set.assert_invariants();
    }

    #[test]
    fn branches_join_under_the_first_root() {
        let mut disjoint_set = DisjointSet::from(vec![1, 2, 3, 4, 5, 6]);

        disjoint_set.union(&1, &2).unwrap();
        disjoint_set.union(&3, &4).unwrap();
        disjoint_set.union(&5, &6).unwrap();
        disjoint_set.union(&2, &3).unwrap();
        disjoint_set.union(&4, &5).unwrap();

        assert_eq!(disjoint_set.find(&2), disjoint_set.find(&5));
        // Ties keep the root of the first argument.
        assert_eq!(disjoint_set.find(&6), Ok(&1));
        assert_eq!(disjoint_set.members(&3).unwrap(), HashSet::from([1, 2, 3, 4, 5, 6]));
        disjoint_set.assert_invariants();
    }

    #[test]
    fn member_chain_follows_the_joins() {
        let mut disjoint_set = disjoint_set![1, 2, 3, 4, 5, 6];

        for i in 1 ..= 6 {
            assert_eq!(disjoint_set.set(&i).unwrap().collect::<Vec<_>>(), [&i]);
        }

        disjoint_set.union(&1, &6).unwrap();
        disjoint_set.union(&6, &6).unwrap();
        assert_eq!(disjoint_set.set(&6).unwrap().collect::<Vec<_>>(), [&1, &6]);

        disjoint_set.union(&6, &5).unwrap();
        disjoint_set.union(&4, &6).unwrap();
        assert_eq!(disjoint_set.set(&4).unwrap().collect::<Vec<_>>(), [&1, &6, &5, &4]);

        disjoint_set.union(&3, &2).unwrap();
        assert_eq!(disjoint_set.set(&2).unwrap().collect::<Vec<_>>(), [&3, &2]);

        disjoint_set.union(&3, &6).unwrap();
        assert_eq!(
            disjoint_set.set(&3).unwrap().collect::<Vec<_>>(),
            [&1, &6, &5, &4, &3, &2],
        );
        disjoint_set.assert_invariants();
    }

    #[test]
    fn missing_values_are_reported() {
        let mut disjoint_set = disjoint_set![1];
        let missing = DisjointSetError::NotAMember { value: 2 };

        assert_eq!(disjoint_set.find(&2), Err(missing.clone()));
        assert_eq!(disjoint_set.same_set(&1, &2), Err(missing.clone()));
        assert_eq!(disjoint_set.union(&1, &2), Err(missing.clone()));
        assert_eq!(disjoint_set.members(&2), Err(missing.clone()));
        assert_eq!(disjoint_set.len_of_set(&2), Err(missing));
        assert_eq!(disjoint_set.len(), 1);
    }

    #[test]
    fn failed_union_leaves_sets_untouched() {
        let mut disjoint_set = disjoint_set![1 => 'a', 2 => 'a', 3 => 'b'];
        let before = disjoint_set.clone();

        assert!(disjoint_set.union(&3, &4).is_err());
        assert!(disjoint_set.union(&4, &1).is_err());

        assert_eq!(disjoint_set, before);
        disjoint_set.assert_invariants();
    }

    #[test]
    fn none_takes_part_like_any_value() {
        let mut disjoint_set = DisjointSet::new();
        disjoint_set.add(Some(1));
        disjoint_set.add(None);

        assert_eq!(disjoint_set.find(&None), Ok(&None));
        disjoint_set.union(&None, &Some(1)).unwrap();
        assert_eq!(disjoint_set.same_set(&None, &Some(1)), Ok(true));
    }

    #[test]
    fn borrowed_lookups() {
        let mut disjoint_set: DisjointSet<String> =
            vec!["x".to_owned(), "y".to_owned(), "z".to_owned()].into();

        disjoint_set.union("x", "z").unwrap();

        assert_eq!(disjoint_set.same_set("z", "x"), Ok(true));
        assert_eq!(disjoint_set.other_sets("y", "x"), Ok(true));
        assert_eq!(
            disjoint_set.find("w"),
            Err(DisjointSetError::NotAMember { value: "w".to_owned() }),
        );
    }

    #[test]
    fn duplicate_values_collapse() {
        let disjoint_set: DisjointSet<u8> = [3, 1, 3, 2, 1].iter().collect();

        assert_eq!(disjoint_set.len(), 3);
        assert_eq!(disjoint_set.iter().collect::<Vec<_>>(), [&3, &1, &2]);
        assert_eq!(disjoint_set[2], 2);
    }

    #[test]
    fn adding_again_keeps_the_set() {
        let mut disjoint_set = disjoint_set!['a' => 0, 'b' => 0];

        assert!(!disjoint_set.add('a'));
        assert_eq!(disjoint_set.same_set(&'a', &'b'), Ok(true));
        assert_eq!(disjoint_set.len(), 2);
    }

    #[test]
    fn equality_ignores_order_and_representatives() {
        let first = disjoint_set![1 => 0, 2 => 0, 3 => 1, 4 => 1];
        let second = disjoint_set![4 => 'x', 3 => 'x', 2 => 'y', 1 => 'y'];
        let third = disjoint_set![1 => 0, 3 => 0, 2 => 1, 4 => 1];

        assert_eq!(first, second);
        assert_ne!(first, third);
        assert_ne!(first, disjoint_set![1, 2, 3, 4]);
    }

    #[test]
    fn sets_partition_the_values() {
        let disjoint_set = disjoint_set![1 => 0, 2 => 1, 3 => 0, 4 => 2, 5 => 1];

        let mut sets: Vec<Vec<i32>> = disjoint_set.sets().map(|set| {
            let mut values: Vec<i32> = set.cloned().collect();
            values.sort();
            values
        }).collect();
        sets.sort();

        assert_eq!(sets, [vec![1, 3], vec![2, 5], vec![4]]);
        assert_eq!(disjoint_set.sets().rev().count(), 3);
    }

    #[test]
    fn debug_names_sets_in_order() {
        let disjoint_set = disjoint_set!['a' => 1, 'b' => 0, 'c' => 1];

        assert_eq!(format!("{:?}", disjoint_set), "['a' => 0, 'b' => 1, 'c' => 0]");
    }

    #[test]
    fn set_iterator_knows_its_length() {
        let disjoint_set = disjoint_set![1 => 0, 2 => 0, 3 => 0, 4 => 1];
        let mut set = disjoint_set.set(&2).unwrap();

        assert_eq!(set.len(), 3);
        set.next();
        assert_eq!(set.len(), 2);
        assert_eq!(set.by_ref().count(), 2);
        assert_eq!(set.next(), None);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn collects_from_a_parallel_iterator() {
        let disjoint_set: DisjointSet<u32> = (0 .. 1000u32).into_par_iter().map(|i| i % 300).collect();

        assert_eq!(disjoint_set.len(), 300);
        assert_eq!(disjoint_set.amount_of_sets(), 300);
        assert_eq!(disjoint_set.par_iter().filter(|&&value| value < 10).count(), 10);
    }
}
