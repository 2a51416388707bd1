use petgraph::graph::UnGraph;

pub fn empty_graph(n: usize) -> UnGraph<(), ()> {
    let mut graph = UnGraph::with_capacity(n, 0);
    for _ in 0..n {
        graph.add_node(());
    }
    graph
}

pub fn complete_graph(n: usize) -> UnGraph<(), ()> {
    let mut graph = empty_graph(n);
    for u in 0..n {
        for v in u + 1..n {
            graph.add_edge((u as u32).into(), (v as u32).into(), ());
        }
    }
    graph
}

pub fn path_graph(n: usize) -> UnGraph<(), ()> {
    let mut graph = empty_graph(n);
    for u in 1..n {
        graph.add_edge(((u - 1) as u32).into(), (u as u32).into(), ());
    }
    graph
}

pub fn cycle_graph(n: usize) -> UnGraph<(), ()> {
    let mut graph = path_graph(n);
    if n > 2 {
        graph.add_edge((n as u32 - 1).into(), 0u32.into(), ());
    }
    graph
}

/// Two disjoint triangles on the nodes `{0, 1, 2}` and `{3, 4, 5}`.
pub fn two_triangles() -> UnGraph<(), ()> {
    let mut graph = empty_graph(6);
    for (u, v) in [(0u32, 1u32), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)] {
        graph.add_edge(u.into(), v.into(), ());
    }
    graph
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn instance_sizes() {
        assert_eq!(empty_graph(4).edge_count(), 0);
        assert_eq!(complete_graph(4).edge_count(), 6);
        assert_eq!(path_graph(4).edge_count(), 3);
        assert_eq!(cycle_graph(4).edge_count(), 4);
        assert_eq!(two_triangles().edge_count(), 6);
        assert_eq!(two_triangles().node_count(), 6);
    }
}
