use crate::graph::AdjacencyMatrix;
use crate::{Error, NodeIndex};

/// An ordered sequence of distinct nodes with consecutive members adjacent in the graph.
///
/// The first element is the source and the last is the destination; the length in edges is one
/// less than the element count.
pub type Path = Vec<NodeIndex>;

/// Enumerate every minimum-length path from `src` to `dest`.
///
/// The enumeration expands a queue of partial paths in rounds over a working copy of the graph,
/// one edge per path per round. After each round every edge traversed during that round is
/// deleted from the working copy. An edge consumed at distance *d* can never reappear on a path
/// at distance *d + 1* or deeper, so no queued path re-traverses an edge of a shallower layer and
/// every surviving path that reaches `dest` has exactly the graph-theoretic distance as its
/// length. All returned paths share that length; their order follows the ascending neighbor
/// expansion and is deterministic.
///
/// `src == dest` yields the single zero-length path `[src]`.
///
/// # Errors
///
/// Callers are expected to request pairs within one connected component. If `dest` is
/// unreachable the frontier runs dry or the round bound is exhausted (a simple path cannot have
/// more than `n − 1` edges) and [Error::Unreachable] is returned.
///
/// Panics if `src` or `dest` is out of range.
pub fn shortest_paths(graph: &AdjacencyMatrix, src: NodeIndex, dest: NodeIndex) -> Result<Vec<Path>, Error> {
    let n = graph.node_count();
    assert!(src.index() < n && dest.index() < n);

    let mut working = graph.clone();
    let mut queue: Vec<Path> = vec![vec![src]];
    for _ in 0..n {
        if queue.iter().any(|path| last_node(path) == dest) {
            queue.retain(|path| last_node(path) == dest);
            return Ok(queue);
        }

        let mut candidates = Vec::new();
        let mut traversed = Vec::new();
        for path in &queue {
            let last = last_node(path);
            for next in working.neighbors(last) {
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(path);
                extended.push(next);
                candidates.push(extended);
                traversed.push((last, next));
            }
        }
        // The prune that makes the expansion correct: edges consumed in this round are gone for
        // all deeper rounds, across every candidate.
        for (u, v) in traversed {
            working.remove_edge(u, v);
        }
        if candidates.is_empty() {
            break;
        }
        queue = candidates;
    }
    Err(Error::Unreachable { src, dest })
}

#[inline(always)]
fn last_node(path: &[NodeIndex]) -> NodeIndex {
    *path.last().expect("queued paths are never empty")
}
