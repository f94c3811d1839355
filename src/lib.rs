//! A [disjoint-sets/union-find] implementation keyed by value that allows for efficient
//! iteration over the elements of a set, together with [Kruskal's algorithm] built on top of it.
//!
//! The main struct of this crate is [`DisjointSet<T>`] which stores distinct values and
//! divides them in sets.
//! The values each start in their own set and these sets can be joined with the `union` method.
//! You can check if values share a set with the `same_set` method and iterate on the values
//! in a set with the `set` method.
//! The `union` and `same_set` methods are extremely fast and have an amortized complexity of
//! `O(α(n))` where 'α' is the inverse Ackermann function and length `n`.
//! The `α(n)` has value below 5 for any `n` that can be written in the observable universe.
//! The next element of the iterator returned by `set` is found in `O(1)` time.
//!
//! This can be used for example to keep track of the connected components of an undirected graph.
//! The [`mst`] module does exactly that to find a minimum spanning forest of any graph
//! implementing the traits of the [`graph`] module, such as [`ValueGraph`].
//!
//! ```
//! use partition_graphs::{ValueGraph, minimum_spanning_forest};
//!
//! let mut graph = ValueGraph::new();
//! graph.put_edge_value('a', 'b', 3)?;
//! graph.put_edge_value('b', 'c', 1)?;
//! graph.put_edge_value('a', 'c', 2)?;
//!
//! let forest = minimum_spanning_forest(&graph)?;
//!
//! assert!(forest.edge_count() == 2);
//! assert!(forest.total_weight() == 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [Kruskal's algorithm]: https://en.wikipedia.org/wiki/Kruskal%27s_algorithm
//! [`DisjointSet<T>`]: struct.DisjointSet.html
//! [`mst`]: mst/index.html
//! [`graph`]: graph/index.html
//! [`ValueGraph`]: struct.ValueGraph.html

/// We count the amount of expresions given to this macro.
#[doc(hidden)]
#[macro_export]
macro_rules! count_exprs {
    () => { 0usize };
    ($_single: expr) => { 1usize };
    // Even amount of expresions.
    ($($first: expr, $_second: expr),*) => {
        ($crate::count_exprs![$($first),*] << 1usize)
    };
    // Odd amount of expresions.
    ($_single: expr, $($first: expr, $_second: expr),*) => {
        ($crate::count_exprs![$($first),*] << 1usize) | 1
    };
}

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        bit_vec::BitVec::from_elem($len, $element)
    };
}

pub mod disjoint_sets;
pub mod graph;
pub mod mst;
pub mod gcd;

pub use {
    disjoint_sets::{DisjointSet, DisjointSetError},
    graph::{GraphBuilder, GraphError, UndirectedGraph, ValueGraph},
    mst::{ForestError, connected_components, minimum_spanning_forest},
    gcd::gcd,
};
