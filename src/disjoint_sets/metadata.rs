use std::cell::Cell;

/// This provides additional information about a given value in the `DisjointSet`.
///
/// For each value in the `DisjointSet` we store a `Metadata`.
/// The `size` and `tail` fields are only meaningful while the value is the
/// representative of its set, they go stale once it is grafted under another root.
#[derive(Clone, Debug)]
pub(crate) struct Metadata {
    /// The parent of the value in its sets tree.
    /// These form an upside down tree where each child has the index of its parent.
    parent: Cell<usize>,
    /// The amount of elements in the set of this root.
    size: Cell<usize>,
    /// The last index of the member chain starting at this root.
    tail: Cell<usize>,
    /// The next index in the member chain.
    /// The chain starts at the root and ends at the `tail` of the root.
    next: Cell<Option<usize>>,
}

impl Metadata {
    /// Create a new `Metadata` for an element with the given index.
    ///
    /// The element starts out as the root of a singleton set.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            size: Cell::new(1),
            tail: Cell::new(index),
            next: Cell::new(None),
        }
    }

    /// Return the `parent` variable.
    #[inline]
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    #[inline]
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `size` variable.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size.get()
    }

    /// Set the `size` variable.
    #[inline]
    pub(crate) fn set_size(&self, value: usize) {
        self.size.set(value);
    }

    /// Return the `tail` variable.
    #[inline]
    pub(crate) fn tail(&self) -> usize {
        self.tail.get()
    }

    /// Set the `tail` variable.
    #[inline]
    pub(crate) fn set_tail(&self, value: usize) {
        self.tail.set(value);
    }

    /// Return the `next` variable.
    #[inline]
    pub(crate) fn next(&self) -> Option<usize> {
        self.next.get()
    }

    /// Set the `next` variable.
    #[inline]
    pub(crate) fn set_next(&self, value: Option<usize>) {
        self.next.set(value);
    }

    /// Returns `true` if this is the metadata of the root at `index`.
    #[inline]
    pub(crate) fn is_root(&self, index: usize) -> bool {
        self.parent.get() == index
    }
}
