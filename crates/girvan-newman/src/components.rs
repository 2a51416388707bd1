use std::collections::VecDeque;

use crate::graph::AdjacencyMatrix;
use crate::NodeIndex;

/// A maximal connected set of nodes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Component {
    nodes: Vec<NodeIndex>,
}

impl Component {
    /// Return the number of nodes in the component.
    #[inline(always)]
    pub fn population(&self) -> usize {
        self.nodes.len()
    }

    /// Return the member nodes in ascending index order.
    #[inline(always)]
    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    /// Return whether `u` is a member.
    pub fn contains(&self, u: NodeIndex) -> bool {
        self.nodes.binary_search(&u).is_ok()
    }
}

/// Partition the graph into its connected components.
///
/// Nodes are scanned in index order and each unvisited node seeds a breadth-first traversal, so
/// the components are ordered by their smallest member and together cover every node exactly
/// once. The graph is not modified.
pub fn connected_components(graph: &AdjacencyMatrix) -> Vec<Component> {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();
    for start in graph.nodes() {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;
        queue.push_back(start);
        let mut nodes = Vec::new();
        while let Some(u) = queue.pop_front() {
            nodes.push(u);
            for v in graph.neighbors(u) {
                if !visited[v.index()] {
                    visited[v.index()] = true;
                    queue.push_back(v);
                }
            }
        }
        nodes.sort_unstable();
        components.push(Component { nodes });
    }
    components
}

/// Return the population of the smallest component.
///
/// # Panics
///
/// Panics if `components` is empty. The partition of a non-null graph always has at least one
/// component, so passing the output of [connected_components] never panics.
pub fn minimum_population(components: &[Component]) -> usize {
    components.iter().map(Component::population).min().expect("a non-null graph has at least one component")
}
