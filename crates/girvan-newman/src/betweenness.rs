use tracing::{debug, instrument, trace};

use crate::components::Component;
use crate::graph::AdjacencyMatrix;
use crate::paths::shortest_paths;
use crate::{Error, NodeIndex};

/// Symmetric matrix of per-edge shortest-path traversal counts.
///
/// One outer partitioner iteration owns one matrix; it is built fresh by [edge_betweenness] and
/// discarded with the iteration. Both orderings of every node pair are enumerated, so a
/// [raw count](BetweennessMatrix::count) is twice the edge betweenness centrality and
/// [BetweennessMatrix::centrality] divides the double counting back out. Each increment lands on
/// `(u, v)` and `(v, u)` alike, keeping the matrix symmetric.
#[derive(Clone, Debug)]
pub struct BetweennessMatrix {
    n: usize,
    counts: Vec<u64>,
}

impl BetweennessMatrix {
    fn zeroed(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::NullGraph);
        }
        let mut counts = Vec::new();
        counts.try_reserve_exact(n * n)?;
        counts.resize(n * n, 0);
        Ok(Self { n, counts })
    }

    fn increment(&mut self, u: NodeIndex, v: NodeIndex) {
        self.counts[u.index() * self.n + v.index()] += 1;
        self.counts[v.index() * self.n + u.index()] += 1;
    }

    /// Return the accumulated traversal count of the edge `(u, v)`.
    ///
    /// Panics if `u` or `v` is out of range.
    #[inline(always)]
    pub fn count(&self, u: NodeIndex, v: NodeIndex) -> u64 {
        assert!(u.index() < self.n && v.index() < self.n);
        self.counts[u.index() * self.n + v.index()]
    }

    /// Return the edge betweenness centrality of `(u, v)`: the traversal count with the
    /// source/destination double counting divided out.
    pub fn centrality(&self, u: NodeIndex, v: NodeIndex) -> f64 {
        self.count(u, v) as f64 / 2.0
    }

    /// Return the maximum count over all pairs `u < v`.
    pub fn max_count(&self) -> u64 {
        self.entries().map(|(_, _, count)| count).max().unwrap_or(0)
    }

    /// Return an iterator over `(u, v, count)` for all pairs `u < v`, in lexicographic order.
    pub fn entries(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, u64)> + '_ {
        (0..self.n).flat_map(move |u| {
            (u + 1..self.n).map(move |v| (NodeIndex::new(u), NodeIndex::new(v), self.counts[u * self.n + v]))
        })
    }
}

/// Accumulate shortest-path traversal counts for every edge of the graph.
///
/// For every ordered pair of distinct nodes within one component, all minimum-length paths
/// between the pair are enumerated and every edge on every path is counted. Pairs in different
/// components have no connecting path and contribute nothing. Edge betweenness compares edges
/// across the whole graph, so this is inherently an all-pairs computation: O(n²) pair
/// enumerations, each a bounded breadth-first expansion.
///
/// # Errors
///
/// Returns [Error::Allocation] if the matrix cannot be allocated and propagates
/// [Error::Unreachable] if `components` does not match `graph`.
#[instrument(skip_all)]
pub fn edge_betweenness(graph: &AdjacencyMatrix, components: &[Component]) -> Result<BetweennessMatrix, Error> {
    let n = graph.node_count();
    let mut matrix = BetweennessMatrix::zeroed(n)?;
    let mut reachable_pairs = 0usize;
    for component in components {
        for &src in component.nodes() {
            for &dest in component.nodes() {
                if src == dest {
                    continue;
                }
                reachable_pairs += 1;
                let paths = shortest_paths(graph, src, dest)?;
                trace!(src = %src, dest = %dest, paths = paths.len(), "enumerated shortest paths");
                for path in paths {
                    for edge in path.windows(2) {
                        matrix.increment(edge[0], edge[1]);
                    }
                }
            }
        }
    }
    let unreachable_pairs = n * (n - 1) - reachable_pairs;
    if unreachable_pairs > 0 {
        trace!(unreachable_pairs, "cross-component pairs have no connecting path");
    }
    debug!(reachable_pairs, unreachable_pairs, max_count = matrix.max_count());
    Ok(matrix)
}
