use petgraph::visit::{GraphProp, IntoNeighbors, NodeCompactIndexable};
use petgraph::Undirected;

use crate::{Error, NodeIndex};

/// A symmetric boolean adjacency relation over a fixed node set.
///
/// Nodes are indexed `0..n`. The relation holds no self-loops and is kept symmetric by
/// construction: `contains_edge(u, v) == contains_edge(v, u)` for all pairs. After construction
/// the only permitted mutation is [AdjacencyMatrix::remove_edge]; edges are never added back.
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix {
    n: usize,
    adjacent: Vec<bool>,
    m: usize,
}

impl AdjacencyMatrix {
    fn with_node_count(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::NullGraph);
        }
        let mut adjacent = Vec::new();
        adjacent.try_reserve_exact(n * n)?;
        adjacent.resize(n * n, false);
        Ok(Self { n, adjacent, m: 0 })
    }

    /// Build the adjacency relation for a `petgraph` undirected graph.
    ///
    /// Parallel edges collapse and self-loops are dropped.
    ///
    /// # Errors
    ///
    /// Returns [Error::NullGraph] if the graph does not contain any nodes.
    pub fn from_graph<G>(graph: G) -> Result<Self, Error>
    where
        G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    {
        let mut matrix = Self::with_node_count(graph.node_bound())?;
        for u in 0..matrix.n {
            for v in graph.neighbors(graph.from_index(u)) {
                matrix.insert_edge(u, graph.to_index(v));
            }
        }
        Ok(matrix)
    }

    /// Build the adjacency relation from a node count and a list of unordered pairs.
    ///
    /// Every pair `(u, v)` must satisfy `u, v < n`. Duplicate pairs and self-loops are tolerated
    /// and have no effect.
    ///
    /// # Errors
    ///
    /// Returns [Error::NullGraph] for `n == 0` and [Error::InvalidGraph] for an out-of-range
    /// endpoint.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut matrix = Self::with_node_count(n)?;
        for (u, v) in edges {
            if u >= n || v >= n {
                return Err(Error::InvalidGraph { u, v, n });
            }
            matrix.insert_edge(u, v);
        }
        Ok(matrix)
    }

    fn insert_edge(&mut self, u: usize, v: usize) {
        if u == v || self.adjacent[u * self.n + v] {
            return;
        }
        self.adjacent[u * self.n + v] = true;
        self.adjacent[v * self.n + u] = true;
        self.m += 1;
    }

    /// Return the number of nodes.
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Return the number of edges.
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.m
    }

    /// Return whether the edge `(u, v)` is present.
    ///
    /// Panics if `u` or `v` is out of range.
    #[inline(always)]
    pub fn contains_edge(&self, u: NodeIndex, v: NodeIndex) -> bool {
        assert!(u.index() < self.n && v.index() < self.n);
        self.adjacent[u.index() * self.n + v.index()]
    }

    /// Remove the edge `(u, v)` and its mirror `(v, u)`. Returns whether the edge was present.
    ///
    /// Panics if `u` or `v` is out of range.
    pub fn remove_edge(&mut self, u: NodeIndex, v: NodeIndex) -> bool {
        if !self.contains_edge(u, v) {
            return false;
        }
        self.adjacent[u.index() * self.n + v.index()] = false;
        self.adjacent[v.index() * self.n + u.index()] = false;
        self.m -= 1;
        true
    }

    /// Return an iterator over all nodes in index order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.n).map(NodeIndex::new)
    }

    /// Return an iterator over the neighbors of `u` in ascending index order.
    ///
    /// Panics if `u` is out of range.
    pub fn neighbors(&self, u: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let row = &self.adjacent[u.index() * self.n..(u.index() + 1) * self.n];
        row.iter().enumerate().filter(|(_, present)| **present).map(|(v, _)| NodeIndex::new(v))
    }

    /// Return an iterator over all edges as pairs `(u, v)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        (0..self.n).flat_map(move |u| {
            (u + 1..self.n)
                .filter(move |v| self.adjacent[u * self.n + v])
                .map(move |v| (NodeIndex::new(u), NodeIndex::new(v)))
        })
    }
}
