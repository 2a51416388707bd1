use std::io::Write;

use girvan_newman::{AdjacencyMatrix, Component, RemovedEdge};

/// Writes the adjacency matrix with row and column indices.
pub(crate) fn write_graph<W: Write>(out: &mut W, graph: &AdjacencyMatrix) -> std::io::Result<()> {
    writeln!(out, "Graph:")?;
    write!(out, "    ")?;
    for v in graph.nodes() {
        write!(out, "{:2} ", v.index())?;
    }
    writeln!(out)?;
    write!(out, "    ")?;
    for _ in graph.nodes() {
        write!(out, "-- ")?;
    }
    writeln!(out)?;
    for u in graph.nodes() {
        write!(out, "{:2}: ", u.index())?;
        for v in graph.nodes() {
            write!(out, "{:2} ", u32::from(graph.contains_edge(u, v)))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes one line per group with its members.
pub(crate) fn write_groups<W: Write>(out: &mut W, groups: &[Component]) -> std::io::Result<()> {
    writeln!(out, "Groups count is : {}", groups.len())?;
    for (i, group) in groups.iter().enumerate() {
        let members: Vec<String> = group.nodes().iter().map(|u| u.index().to_string()).collect();
        writeln!(out, "Group {}: {}", i + 1, members.join(", "))?;
    }
    Ok(())
}

/// Writes the cut edges in removal order with the centrality that selected each one.
pub(crate) fn write_removed_edges<W: Write>(out: &mut W, removed: &[RemovedEdge]) -> std::io::Result<()> {
    writeln!(out, "Removed edges count is : {}", removed.len())?;
    for edge in removed {
        writeln!(out, "Edge ({}, {}) : {:.2} is deleted", edge.u, edge.v, edge.centrality())?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{write_graph, write_groups, write_removed_edges};
    use girvan_newman::{connected_components, partition, AdjacencyMatrix, Params};

    #[test]
    fn renders_a_small_graph() {
        let graph = AdjacencyMatrix::from_edges(3, [(0, 1)]).unwrap();
        let mut out = Vec::new();
        write_graph(&mut out, &graph).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Graph:\n     0  1  2 \n    -- -- -- \n 0:  0  1  0 \n 1:  1  0  0 \n 2:  0  0  0 \n"
        );
    }

    #[test]
    fn renders_groups() {
        let graph = AdjacencyMatrix::from_edges(4, [(0, 2)]).unwrap();
        let mut out = Vec::new();
        write_groups(&mut out, &connected_components(&graph)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Groups count is : 3\nGroup 1: 0, 2\nGroup 2: 1\nGroup 3: 3\n");
    }

    #[test]
    fn renders_removed_edges() {
        // Path 0 - 1 - 2 - 3: the middle edge serves four node pairs and is cut alone.
        let graph = AdjacencyMatrix::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let communities = partition(graph, Params { target_population: 2, max_stalls: 5 }).unwrap();
        let mut out = Vec::new();
        write_removed_edges(&mut out, communities.removed_edges()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Removed edges count is : 1\nEdge (1, 2) : 4.00 is deleted\n");
    }
}
