//! Undirected edge-weighted graphs.
//!
//! The algorithms of this crate only rely on the [`UndirectedGraph`] and [`GraphBuilder`]
//! traits so any graph representation can be used with them.
//! [`ValueGraph`] is a simple adjacency map implementation of both.
//!
//! [`UndirectedGraph`]: trait.UndirectedGraph.html
//! [`GraphBuilder`]: trait.GraphBuilder.html
//! [`ValueGraph`]: value_graph/struct.ValueGraph.html

pub mod value_graph;

pub use self::value_graph::ValueGraph;

/// An undirected graph with a value, its weight, on every edge.
pub trait UndirectedGraph {
    /// The type of the nodes.
    type Node;
    /// The type of the edge weights.
    type Weight;

    /// Returns the amount of nodes.
    fn node_count(&self) -> usize;

    /// Returns the amount of undirected edges.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all nodes.
    fn nodes(&self) -> impl Iterator<Item = &Self::Node> + '_;

    /// Returns an iterator over all edges as `(first, second, weight)`.
    ///
    /// Every undirected edge is returned once, in one of its two directions.
    fn edges(&self) -> impl Iterator<Item = (&Self::Node, &Self::Node, &Self::Weight)> + '_;
}

/// A graph that can be built up node by node and edge by edge.
pub trait GraphBuilder: UndirectedGraph + Sized {
    /// The error returned when an edge is rejected.
    type Error;

    /// Creates a graph with the given nodes and no edges.
    fn with_nodes<I>(nodes: I) -> Self where I: IntoIterator<Item = Self::Node>;

    /// Adds an undirected edge between `first` and `second` with the given weight.
    fn put_edge(
        &mut self,
        first: Self::Node,
        second: Self::Node,
        weight: Self::Weight,
    ) -> Result<(), Self::Error>;
}

/// Errors returned while building a [`ValueGraph`].
///
/// [`ValueGraph`]: value_graph/struct.ValueGraph.html
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError<N> {
    /// An edge from a node to itself was added.
    #[error("self-loop on node {node:?} is not allowed")]
    SelfLoop {
        /// The node on both ends of the edge.
        node: N,
    },
}
