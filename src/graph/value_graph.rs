//! An undirected graph storing one value per pair of adjacent nodes.
//!
//! See [`ValueGraph<N, W>`] for more information.
//!
//! [`ValueGraph<N, W>`]: struct.ValueGraph.html

use {
    std::{
        borrow::Borrow,
        collections::{BTreeMap, HashMap},
        fmt,
        hash::Hash,
        iter::Sum,
    },
    crate::graph::{GraphBuilder, GraphError, UndirectedGraph},
};

/// An undirected graph where every edge carries a value, its weight.
///
/// Nodes are stored in the order they were added and every node keeps a map of its
/// neighbours to the weight of the connecting edge.
/// Between two nodes there is at most one edge and self-loops are rejected.
///
/// # Examples
///
/// ```
/// use partition_graphs::ValueGraph;
///
/// let mut graph = ValueGraph::new();
/// graph.put_edge_value(1, 2, 8)?;
/// graph.put_edge_value(2, 3, 5)?;
///
/// assert!(graph.node_count() == 3);
/// assert!(graph.edge_value(&3, &2) == Some(&5));
/// assert!(graph.degree(&2) == Some(2));
/// assert!(graph.put_edge_value(3, 3, 1).is_err());
/// # Ok::<(), partition_graphs::GraphError<i32>>(())
/// ```
#[derive(Clone)]
pub struct ValueGraph<N, W> {
    /// Maps each node to its index in `nodes` and `adjacency`.
    indices: HashMap<N, usize>,
    /// The nodes in the order they were added.
    nodes: Vec<N>,
    /// For each node the indices of its neighbours and the weights of the edges.
    adjacency: Vec<BTreeMap<usize, W>>,
    edge_count: usize,
}

impl<N, W> ValueGraph<N, W> {
    /// Constructs a new, empty `ValueGraph<N, W>`.
    #[inline]
    pub fn new() -> Self {
        Self {
            indices: HashMap::new(),
            nodes: Vec::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Constructs a new, empty `ValueGraph<N, W>` with room for `expected_nodes` nodes.
    #[inline]
    pub fn with_expected_node_count(expected_nodes: usize) -> Self {
        Self {
            indices: HashMap::with_capacity(expected_nodes),
            nodes: Vec::with_capacity(expected_nodes),
            adjacency: Vec::with_capacity(expected_nodes),
            edge_count: 0,
        }
    }

    /// Returns the amount of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the amount of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the sum of the weights of all edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_graphs::ValueGraph;
    ///
    /// let mut graph = ValueGraph::new();
    /// graph.put_edge_value("a", "b", 1.5)?;
    /// graph.put_edge_value("b", "c", 2.0)?;
    ///
    /// assert!(graph.total_weight() == 3.5);
    /// # Ok::<(), partition_graphs::GraphError<&str>>(())
    /// ```
    pub fn total_weight(&self) -> W where
        W: Clone + Sum,
    {
        self.edge_triples().map(|(_, _, weight)| weight.clone()).sum()
    }

    /// Iterates every edge once, from the node added first to the node added last.
    fn edge_triples(&self) -> impl Iterator<Item = (&N, &N, &W)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(index, neighbours)| {
            neighbours.range(index + 1 ..).map(move |(&other, weight)| {
                (&self.nodes[index], &self.nodes[other], weight)
            })
        })
    }
}

impl<N, W> ValueGraph<N, W> where
    N: Eq + Hash + Clone,
{
    /// Adds `node` without any edges.
    ///
    /// Returns `false` if the node was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        let len = self.nodes.len();
        self.node_index(node) == len
    }

    /// Gives the index of `node`, adding it first if needed.
    fn node_index(&mut self, node: N) -> usize {
        if let Some(&index) = self.indices.get(&node) {
            return index
        }

        let index = self.nodes.len();
        self.indices.insert(node.clone(), index);
        self.nodes.push(node);
        self.adjacency.push(BTreeMap::new());

        index
    }

    /// Sets the weight of the edge between `first` and `second`, adding the nodes if needed.
    ///
    /// Returns the previous weight of the edge if there was one.
    ///
    /// # Errors
    ///
    /// Returns `SelfLoop` if `first` and `second` are equal, the graph is not changed
    /// in that case.
    pub fn put_edge_value(
        &mut self,
        first: N,
        second: N,
        weight: W,
    ) -> Result<Option<W>, GraphError<N>> where
        W: Clone,
    {
        if first == second {
            return Err(GraphError::SelfLoop { node: first })
        }

        let first = self.node_index(first);
        let second = self.node_index(second);

        self.adjacency[second].insert(first, weight.clone());
        let previous = self.adjacency[first].insert(second, weight);

        if previous.is_none() {
            self.edge_count += 1;
        }

        Ok(previous)
    }

    /// Returns `true` if `node` is in the graph.
    #[inline]
    pub fn contains_node<Q>(&self, node: &Q) -> bool where
        N: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.indices.contains_key(node)
    }

    /// Returns the weight of the edge between `first` and `second` if they are adjacent.
    pub fn edge_value<Q>(&self, first: &Q, second: &Q) -> Option<&W> where
        N: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let first = *self.indices.get(first)?;
        let second = *self.indices.get(second)?;

        self.adjacency[first].get(&second)
    }

    /// Returns an iterator over the neighbours of `node`, or `None` if it is not in the graph.
    pub fn adjacent_nodes<Q>(&self, node: &Q) -> Option<impl Iterator<Item = &N> + '_> where
        N: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let index = *self.indices.get(node)?;

        Some(self.adjacency[index].keys().map(move |&other| &self.nodes[other]))
    }

    /// Returns the amount of edges at `node`, or `None` if it is not in the graph.
    #[inline]
    pub fn degree<Q>(&self, node: &Q) -> Option<usize> where
        N: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let index = *self.indices.get(node)?;

        Some(self.adjacency[index].len())
    }
}

impl<N, W> Default for ValueGraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> fmt::Debug for ValueGraph<N, W> where
    N: fmt::Debug,
    W: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let mut builder = formatter.debug_struct("ValueGraph");
        builder.field("nodes", &self.nodes);
        builder.field("edges", &self.edge_triples().map(|(first, second, weight)| {
            format!("{:?} -- {:?}: {:?}", first, second, weight)
        }).collect::<Vec<_>>());

        builder.finish()
    }
}

impl<N, W> UndirectedGraph for ValueGraph<N, W> {
    type Node = N;
    type Weight = W;

    #[inline]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = (&N, &N, &W)> + '_ {
        self.edge_triples()
    }
}

impl<N, W> GraphBuilder for ValueGraph<N, W> where
    N: Eq + Hash + Clone,
    W: Clone,
{
    type Error = GraphError<N>;

    fn with_nodes<I>(nodes: I) -> Self where I: IntoIterator<Item = N> {
        let nodes = nodes.into_iter();
        let mut graph = Self::with_expected_node_count(nodes.size_hint().0);

        for node in nodes {
            graph.add_node(node);
        }

        graph
    }

    #[inline]
    fn put_edge(&mut self, first: N, second: N, weight: W) -> Result<(), GraphError<N>> {
        self.put_edge_value(first, second, weight).map(|_| ())
    }
}
