//! Minimum spanning forests with [Kruskal's algorithm].
//!
//! The edges are visited from light to heavy and every edge that joins two different
//! components of the forest built so far is kept.
//! The components are tracked with a [`DisjointSet`].
//!
//! [Kruskal's algorithm]: https://en.wikipedia.org/wiki/Kruskal%27s_algorithm
//! [`DisjointSet`]: ../struct.DisjointSet.html

use {
    std::{
        cmp::Ordering,
        hash::Hash,
    },
    tracing::{debug, instrument},
    crate::{
        disjoint_sets::{DisjointSet, DisjointSetError},
        graph::{GraphBuilder, UndirectedGraph},
    },
};

/// Errors returned while computing a minimum spanning forest.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ForestError<N, E> {
    /// An edge of the input graph names a node that is not one of its nodes.
    #[error("an edge of the graph ends in a node outside of the graph")]
    UnknownEndpoint(#[from] DisjointSetError<N>),
    /// The output graph rejected an edge.
    #[error("the spanning forest rejected an edge")]
    Builder(#[source] E),
}

/// Computes a minimum spanning forest of `graph` using Kruskal's algorithm.
///
/// The result has every node of `graph` and, for each connected component, the edges of a
/// spanning tree of minimum total weight, with the same weights as in `graph`.
/// When `graph` is connected this is a minimum spanning tree.
///
/// Edges of equal weight are visited in the order `edges` returns them.
/// Weights that can not be compared, such as `NaN`, are treated as equal to everything
/// and give an unspecified forest.
/// Self-loops never join two components so they are never kept.
///
/// This will take `O(E log E)` time for sorting the edges and `O(E α(V))` for the rest.
///
/// # Errors
///
/// Returns `UnknownEndpoint` if an edge names a node that `nodes` does not return and
/// `Builder` if the output graph rejects an edge.
///
/// # Examples
///
/// ```
/// use partition_graphs::{ValueGraph, minimum_spanning_forest};
///
/// let mut graph = ValueGraph::new();
/// for &(first, second, weight) in &[(1, 2, 8), (1, 3, 5), (2, 3, 10), (2, 4, 2), (3, 4, 3)] {
///     graph.put_edge_value(first, second, weight)?;
/// }
/// graph.add_node(5);
///
/// let forest = minimum_spanning_forest(&graph)?;
///
/// assert!(forest.node_count() == 5);
/// assert!(forest.edge_count() == 3);
/// assert!(forest.total_weight() == 10);
/// assert!(forest.degree(&5) == Some(0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(level = "debug", skip_all)]
pub fn minimum_spanning_forest<G>(graph: &G) -> Result<G, ForestError<G::Node, G::Error>> where
    G: GraphBuilder,
    G::Node: Eq + Hash + Clone,
    G::Weight: PartialOrd + Clone,
{
    let mut components: DisjointSet<G::Node> = DisjointSet::with_capacity(graph.node_count());
    components.extend(graph.nodes().cloned());

    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_by(|first, second| first.2.partial_cmp(second.2).unwrap_or(Ordering::Equal));

    let mut forest = G::with_nodes(graph.nodes().cloned());
    // A forest on `n` nodes has at most `n - 1` edges.
    let limit = graph.node_count().saturating_sub(1);
    let mut accepted = 0;

    for (first, second, weight) in edges {
        if accepted == limit {
            break
        }

        if components.same_set(first, second)? {
            continue
        }

        components.union(first, second)?;
        forest.put_edge(first.clone(), second.clone(), weight.clone()).map_err(ForestError::Builder)?;
        accepted += 1;
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        accepted,
        trees = components.amount_of_sets(),
        "built minimum spanning forest"
    );

    Ok(forest)
}

/// Divides the nodes of `graph` in its connected components.
///
/// The returned `DisjointSet` has a set for every component, use `amount_of_sets` to
/// count them or `sets` to list them.
///
/// # Errors
///
/// Returns `NotAMember` if an edge names a node that `nodes` does not return.
///
/// # Examples
///
/// ```
/// use partition_graphs::{ValueGraph, connected_components};
///
/// let mut graph = ValueGraph::new();
/// graph.put_edge_value("a", "b", 1)?;
/// graph.put_edge_value("c", "d", 1)?;
/// graph.put_edge_value("d", "e", 1)?;
///
/// let components = connected_components(&graph)?;
///
/// assert!(components.amount_of_sets() == 2);
/// assert!(components.same_set(&"c", &"e")?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(level = "debug", skip_all)]
pub fn connected_components<G>(graph: &G) -> Result<DisjointSet<G::Node>, DisjointSetError<G::Node>> where
    G: UndirectedGraph,
    G::Node: Eq + Hash + Clone,
{
    let mut components: DisjointSet<G::Node> = DisjointSet::with_capacity(graph.node_count());
    components.extend(graph.nodes().cloned());

    for (first, second, _) in graph.edges() {
        components.union(first, second)?;
    }

    debug!(
        nodes = graph.node_count(),
        components = components.amount_of_sets(),
        "found connected components"
    );

    Ok(components)
}

#[cfg(test)]
mod tests {
    use {
        std::convert::Infallible,
        crate::graph::{GraphError, ValueGraph},
        super::*,
    };

    /// A bare edge list, unlike `ValueGraph` it keeps parallel edges and self-loops.
    #[derive(Debug, Default)]
    struct EdgeList {
        nodes: Vec<u32>,
        edges: Vec<(u32, u32, u64)>,
    }

    impl UndirectedGraph for EdgeList {
        type Node = u32;
        type Weight = u64;

        fn node_count(&self) -> usize {
            self.nodes.len()
        }

        fn edge_count(&self) -> usize {
            self.edges.len()
        }

        fn nodes(&self) -> impl Iterator<Item = &u32> + '_ {
            self.nodes.iter()
        }

        fn edges(&self) -> impl Iterator<Item = (&u32, &u32, &u64)> + '_ {
            self.edges.iter().map(|(first, second, weight)| (first, second, weight))
        }
    }

    impl GraphBuilder for EdgeList {
        type Error = Infallible;

        fn with_nodes<I>(nodes: I) -> Self where I: IntoIterator<Item = u32> {
            Self {
                nodes: nodes.into_iter().collect(),
                edges: Vec::new(),
            }
        }

        fn put_edge(&mut self, first: u32, second: u32, weight: u64) -> Result<(), Infallible> {
            self.edges.push((first, second, weight));
            Ok(())
        }
    }

    fn graph(nodes: impl IntoIterator<Item = u32>, edges: &[(u32, u32, u64)]) -> ValueGraph<u32, u64> {
        let mut graph = ValueGraph::with_nodes(nodes);
        for &(first, second, weight) in edges {
            graph.put_edge_value(first, second, weight).unwrap();
        }
        graph
    }

    #[test]
    fn star_with_a_separate_pair() {
        let mut edges = Vec::new();
        for i in 1 .. 10 {
            edges.push((0, i, 10));
        }
        for i in 2 .. 10 {
            edges.push((1, i, 20));
        }
        for i in 3 .. 10 {
            edges.push((2, i, 30));
        }
        for i in 4 .. 10 {
            edges.push((3, i, 100));
        }
        edges.push((10, 11, 100));

        let forest = minimum_spanning_forest(&graph(0 .. 12, &edges)).unwrap();

        assert_eq!(forest.node_count(), 12);
        assert_eq!(forest.edge_count(), 10);
        assert_eq!(forest.degree(&0), Some(9));
        assert_eq!(forest.degree(&1), Some(1));
        assert_eq!(forest.degree(&10), Some(1));
        assert_eq!(forest.edge_value(&10, &11), Some(&100));
        assert_eq!(forest.total_weight(), 190);
    }

    #[test]
    fn classic_seven_nodes() {
        let edges = [
            (1, 2, 8), (1, 3, 5), (2, 3, 10), (2, 4, 2), (2, 5, 18), (3, 4, 3),
            (3, 6, 16), (4, 5, 12), (4, 6, 30), (4, 7, 14), (5, 7, 4), (6, 7, 26),
        ];

        let forest = minimum_spanning_forest(&graph(1 ..= 7, &edges)).unwrap();

        let mut kept: Vec<_> = forest.edges().map(|(&a, &b, &w)| (a.min(b), a.max(b), w)).collect();
        kept.sort();
        assert_eq!(kept, [(1, 3, 5), (2, 4, 2), (3, 4, 3), (3, 6, 16), (4, 5, 12), (5, 7, 4)]);
        assert_eq!(forest.total_weight(), 42);

        let degrees: Vec<_> = (1 ..= 7).map(|node| forest.degree(&node).unwrap()).collect();
        assert_eq!(degrees, [1, 1, 3, 3, 2, 1, 1]);
    }

    #[test]
    fn empty_graph_gives_empty_forest() {
        let forest = minimum_spanning_forest(&ValueGraph::<u32, u64>::new()).unwrap();

        assert_eq!(forest.node_count(), 0);
        assert_eq!(forest.edge_count(), 0);
    }

    #[test]
    fn isolated_nodes_stay_isolated() {
        let forest = minimum_spanning_forest(&graph(0 .. 4, &[(1, 2, 1)])).unwrap();

        assert_eq!(forest.node_count(), 4);
        assert_eq!(forest.edge_count(), 1);
        assert_eq!(forest.degree(&0), Some(0));
        assert_eq!(forest.degree(&3), Some(0));
    }

    #[test]
    fn cheapest_parallel_edge_wins_and_loops_are_skipped() {
        let graph = EdgeList {
            nodes: vec![0, 1, 2],
            edges: vec![(0, 0, 0), (0, 1, 9), (1, 0, 4), (1, 1, 1), (1, 2, 6), (2, 1, 7)],
        };

        let forest = minimum_spanning_forest(&graph).unwrap();

        assert_eq!(forest.nodes, [0, 1, 2]);
        assert_eq!(forest.edges, [(1, 0, 4), (1, 2, 6)]);
    }

    #[test]
    fn unknown_endpoints_are_reported() {
        let graph = EdgeList {
            nodes: vec![0, 1, 2],
            edges: vec![(0, 1, 1), (1, 5, 2), (1, 2, 3)],
        };

        match minimum_spanning_forest(&graph) {
            Err(ForestError::UnknownEndpoint(error)) => assert_eq!(error.value(), &5),
            other => panic!("expected an unknown endpoint, got {:?}", other),
        }
    }

    #[test]
    fn float_weights() {
        let mut graph = ValueGraph::new();
        graph.put_edge_value("a", "b", 0.5).unwrap();
        graph.put_edge_value("b", "c", 0.25).unwrap();
        graph.put_edge_value("a", "c", 0.75).unwrap();

        let forest = minimum_spanning_forest(&graph).unwrap();

        assert_eq!(forest.total_weight(), 0.75);
        assert_eq!(forest.edge_value("a", "c"), None);
    }

    #[test]
    fn builder_errors_are_wrapped() {
        let error: ForestError<u8, GraphError<u8>> =
            ForestError::Builder(GraphError::SelfLoop { node: 1 });

        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn components_of_a_forest() {
        let graph = graph(0 .. 6, &[(0, 1, 1), (1, 2, 1), (3, 4, 1)]);
        let components = connected_components(&graph).unwrap();

        assert_eq!(components.amount_of_sets(), 3);
        assert_eq!(components.same_set(&0, &2), Ok(true));
        assert_eq!(components.same_set(&2, &3), Ok(false));
        assert_eq!(components.is_singleton(&5), Ok(true));
    }
}
