/// Errors returned by the lookups of a [`DisjointSet`].
///
/// [`DisjointSet`]: struct.DisjointSet.html
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DisjointSetError<T> {
    /// The value was never added to the `DisjointSet`.
    ///
    /// The lookup had no effect, the value can be added and the lookup retried.
    #[error("{value:?} is not a member of this disjoint set")]
    NotAMember {
        /// The value that was looked up.
        value: T,
    },
}

impl<T> DisjointSetError<T> {
    /// Returns the value that caused the error.
    pub fn value(&self) -> &T {
        match self {
            DisjointSetError::NotAMember { value } => value,
        }
    }

    /// Consumes the error and returns the value that caused it.
    pub fn into_value(self) -> T {
        match self {
            DisjointSetError::NotAMember { value } => value,
        }
    }
}
