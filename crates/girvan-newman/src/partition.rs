use tracing::{info, instrument};

use petgraph::visit::{GraphProp, IntoNeighbors, NodeCompactIndexable};
use petgraph::Undirected;

use crate::betweenness::edge_betweenness;
use crate::components::{connected_components, minimum_population, Component};
use crate::graph::AdjacencyMatrix;
use crate::{Error, NodeIndex};

/// Stopping parameters for [girvan_newman].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Params {
    /// Target population `T`: the loop converges once the smallest component has at most this
    /// many nodes.
    pub target_population: usize,
    /// Stall budget `K`: the loop gives up after this many consecutive iterations in which the
    /// minimum population did not change. `K == 0` performs no iterations at all.
    pub max_stalls: usize,
}

/// Loop state threaded through the partitioner.
#[derive(Copy, Clone, Debug)]
struct RunState {
    minimum_population: usize,
    repetition_count: usize,
}

/// A cut edge together with the traversal count that selected it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RemovedEdge {
    /// First endpoint, `u < v`.
    pub u: NodeIndex,
    /// Second endpoint.
    pub v: NodeIndex,
    /// The edge's traversal count in the iteration that cut it; always the iteration maximum.
    pub count: u64,
}

impl RemovedEdge {
    /// Return the edge betweenness centrality at the time of removal: the count with the
    /// source/destination double counting divided out.
    pub fn centrality(&self) -> f64 {
        self.count as f64 / 2.0
    }
}

/// The result of a partitioning run.
#[derive(Clone, Debug)]
pub struct CommunityStructure {
    graph: AdjacencyMatrix,
    communities: Vec<Component>,
    removed_edges: Vec<RemovedEdge>,
    iterations: usize,
}

impl CommunityStructure {
    /// Return the graph with all cut edges removed.
    pub fn graph(&self) -> &AdjacencyMatrix {
        &self.graph
    }

    /// Return the final communities, ordered by their smallest member.
    pub fn communities(&self) -> &[Component] {
        &self.communities
    }

    /// Return the population of the smallest community.
    pub fn minimum_population(&self) -> usize {
        minimum_population(&self.communities)
    }

    /// Return the removed edges in removal order, each with the count that selected it.
    /// Within one iteration the edges are listed in lexicographic order with `u < v`.
    pub fn removed_edges(&self) -> &[RemovedEdge] {
        &self.removed_edges
    }

    /// Return the number of outer iterations that ran.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Consume the structure and return the final graph.
    pub fn into_graph(self) -> AdjacencyMatrix {
        self.graph
    }
}

/// Partition a `petgraph` undirected graph into communities.
///
/// This is the convenience entry point: it builds the [AdjacencyMatrix] for the graph and runs
/// [partition].
///
/// # Errors
///
/// Returns [Error::NullGraph] if the graph does not contain any nodes and [Error::Allocation] if
/// a matrix cannot be allocated.
#[instrument(skip_all)]
pub fn girvan_newman<G>(graph: G, params: Params) -> Result<CommunityStructure, Error>
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    partition(AdjacencyMatrix::from_graph(graph)?, params)
}

/// Partition the graph by repeatedly cutting the edges with the highest betweenness.
///
/// Each iteration accumulates a fresh betweenness matrix over the current graph and removes
/// *every* edge whose count equals the maximum. Ties are cut simultaneously on purpose: a tied
/// edge is exactly as central as the chosen one, and removing the whole tier keeps the run
/// independent of edge enumeration order. The loop stops once the smallest component has at most
/// [Params::target_population] nodes, or once the minimum population has been unchanged for
/// [Params::max_stalls] consecutive iterations.
///
/// The minimum population never increases across iterations: edges are only removed, so
/// components only ever split.
///
/// # Errors
///
/// Returns [Error::Allocation] if a betweenness matrix cannot be allocated.
#[instrument(skip_all)]
pub fn partition(mut graph: AdjacencyMatrix, params: Params) -> Result<CommunityStructure, Error> {
    info!(
        n = graph.node_count(),
        m = graph.edge_count(),
        target_population = params.target_population,
        max_stalls = params.max_stalls
    );

    let mut state = RunState {
        minimum_population: minimum_population(&connected_components(&graph)),
        repetition_count: 0,
    };
    let mut removed_edges = Vec::new();
    let mut iterations = 0;

    while state.minimum_population > params.target_population && state.repetition_count < params.max_stalls {
        let components = connected_components(&graph);
        let scores = edge_betweenness(&graph, &components)?;
        let max_count = scores.max_count();

        let removed_before = removed_edges.len();
        for (u, v, count) in scores.entries() {
            // A zero maximum means the graph is edgeless; only actual edges are cut.
            if count == max_count && graph.remove_edge(u, v) {
                removed_edges.push(RemovedEdge { u, v, count });
            }
        }

        let population = minimum_population(&connected_components(&graph));
        if population == state.minimum_population {
            state.repetition_count += 1;
        } else {
            state.repetition_count = 0;
        }
        state.minimum_population = population;
        iterations += 1;

        info!(
            iteration = iterations,
            max_count,
            removed = removed_edges.len() - removed_before,
            minimum_population = state.minimum_population,
            repetition_count = state.repetition_count
        );
    }

    let communities = connected_components(&graph);
    Ok(CommunityStructure { graph, communities, removed_edges, iterations })
}

#[cfg(test)]
mod test {
    use super::{girvan_newman, partition, Params, RemovedEdge};
    use crate::graph::AdjacencyMatrix;

    fn pairs(edges: &[RemovedEdge]) -> Vec<(usize, usize)> {
        edges.iter().map(|edge| (edge.u.index(), edge.v.index())).collect()
    }

    #[test]
    fn zero_stall_budget_removes_nothing() {
        let graph = AdjacencyMatrix::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let result = partition(graph, Params { target_population: 1, max_stalls: 0 }).unwrap();
        assert_eq!(result.iterations(), 0);
        assert!(result.removed_edges().is_empty());
        assert_eq!(result.graph().edge_count(), 4);
    }

    #[test]
    fn already_converged_graph_is_untouched() {
        let graph = AdjacencyMatrix::from_edges(6, [(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)]).unwrap();
        let result = partition(graph, Params { target_population: 3, max_stalls: 10 }).unwrap();
        assert_eq!(result.iterations(), 0);
        assert!(result.removed_edges().is_empty());
        assert_eq!(result.minimum_population(), 3);
    }

    #[test]
    fn tied_cycle_edges_are_cut_simultaneously() {
        let graph = AdjacencyMatrix::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let result = partition(graph, Params { target_population: 1, max_stalls: 5 }).unwrap();
        assert_eq!(result.iterations(), 1);
        assert_eq!(pairs(result.removed_edges()), [(0, 1), (0, 3), (1, 2), (2, 3)]);
        assert_eq!(result.minimum_population(), 1);
        assert_eq!(result.communities().len(), 4);
    }

    #[test]
    fn bridge_between_triangles_is_cut_first() {
        let graph = AdjacencyMatrix::from_edges(6, [(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (3, 5), (4, 5)]).unwrap();
        let result = partition(graph, Params { target_population: 3, max_stalls: 5 }).unwrap();
        assert_eq!(pairs(result.removed_edges()), [(2, 3)]);
        assert_eq!(result.communities().len(), 2);
        assert_eq!(result.minimum_population(), 3);
    }

    #[test]
    fn removed_edges_carry_their_selecting_count() {
        // Bridge between two triangles: 2 for its own pair plus 2 for each of the 9 cross pairs.
        let graph = AdjacencyMatrix::from_edges(6, [(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (3, 5), (4, 5)]).unwrap();
        let result = partition(graph, Params { target_population: 3, max_stalls: 5 }).unwrap();
        let [bridge] = result.removed_edges() else { panic!("exactly one edge is cut") };
        assert_eq!(bridge.count, 20);
        assert_eq!(bridge.centrality(), 10.0);
    }

    #[test]
    fn stalls_when_the_target_is_unreachable() {
        // A triangle splinters into singletons in one cut; below that there is nothing left to
        // remove, so a target of zero can never be met.
        let graph = AdjacencyMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let result = partition(graph, Params { target_population: 0, max_stalls: 3 }).unwrap();
        assert_eq!(pairs(result.removed_edges()), [(0, 1), (0, 2), (1, 2)]);
        assert_eq!(result.minimum_population(), 1);
        assert_eq!(result.iterations(), 4);
        assert_eq!(result.graph().edge_count(), 0);
    }

    #[test]
    fn minimum_population_is_monotone() {
        let edges = [(0, 1), (0, 3), (1, 4), (3, 4), (1, 2), (4, 5), (2, 5)];
        for max_stalls in 1..4 {
            let mut graph = AdjacencyMatrix::from_edges(6, edges).unwrap();
            let mut populations = Vec::new();
            loop {
                let result = partition(graph, Params { target_population: 1, max_stalls }).unwrap();
                populations.push(result.minimum_population());
                if result.iterations() == 0 || result.removed_edges().is_empty() {
                    break;
                }
                graph = result.into_graph();
            }
            assert!(populations.windows(2).all(|w| w[1] <= w[0]), "{populations:?}");
        }
    }

    #[test]
    fn identical_runs_remove_identical_edges() {
        let edges = [(0, 1), (0, 3), (1, 4), (3, 4), (1, 2), (4, 5), (2, 5), (5, 6), (6, 2)];
        let params = Params { target_population: 2, max_stalls: 4 };
        let first = partition(AdjacencyMatrix::from_edges(7, edges).unwrap(), params).unwrap();
        let second = partition(AdjacencyMatrix::from_edges(7, edges).unwrap(), params).unwrap();
        assert_eq!(first.removed_edges(), second.removed_edges());
        assert_eq!(first.iterations(), second.iterations());
        let first_edges: Vec<_> = first.graph().edges().collect();
        let second_edges: Vec<_> = second.graph().edges().collect();
        assert_eq!(first_edges, second_edges);
    }

    #[test]
    fn petgraph_entry_point() {
        let graph = petgraph::graph::UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
        let result = girvan_newman(&graph, Params { target_population: 1, max_stalls: 1 }).unwrap();
        assert_eq!(result.communities().len(), 4);
    }
}
