use petgraph::graph::UnGraph;
use std::fs::File;
use std::io::{BufReader, Read};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadEdgeListError {
    #[error("expected {expected} whitespace-separated integers (got {got})")]
    MissingToken { expected: usize, got: usize },
    #[error("trailing input after {0} edges")]
    TrailingInput(usize),
    #[error("edge ({u}, {v}) is out of range for a graph with {n} nodes")]
    EdgeOutOfRange { u: u32, v: u32, n: u32 },
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads a graph in the positional edge-list format: the node count `n` and edge count `m`,
/// followed by `m` unordered pairs, all whitespace separated.
///
/// Endpoints must be smaller than `n`. Duplicate pairs and self-loops are accepted; they are
/// meaningless to an adjacency relation and collapse downstream.
pub fn read_edge_list<P>(path: P) -> Result<UnGraph<(), ()>, ReadEdgeListError>
where
    P: AsRef<Path>,
{
    let mut content = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut content)?;

    let values: Vec<u32> = content.split_ascii_whitespace().map(str::parse).collect::<Result<_, _>>()?;
    let (&[n, m], edges) = values.split_at(2.min(values.len())) else {
        return Err(ReadEdgeListError::MissingToken { expected: 2, got: values.len() });
    };
    let expected = 2 + 2 * m as usize;
    if edges.len() < 2 * m as usize {
        return Err(ReadEdgeListError::MissingToken { expected, got: values.len() });
    }
    if edges.len() > 2 * m as usize {
        return Err(ReadEdgeListError::TrailingInput(m as usize));
    }

    let mut graph = UnGraph::with_capacity(n as usize, m as usize);
    for _ in 0..n {
        graph.add_node(());
    }
    for pair in edges.chunks_exact(2) {
        let (u, v) = (pair[0], pair[1]);
        if u >= n || v >= n {
            return Err(ReadEdgeListError::EdgeOutOfRange { u, v, n });
        }
        graph.add_edge(u.into(), v.into(), ());
    }
    Ok(graph)
}
