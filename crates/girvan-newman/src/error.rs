use std::collections::TryReserveError;

use thiserror::Error;

use crate::NodeIndex;

/// Errors produced by the algorithmic core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The graph does not contain any nodes.
    #[error("graph does not contain any nodes")]
    NullGraph,
    /// An edge refers to a node outside the declared node set.
    #[error("edge ({u}, {v}) is out of range for a graph with {n} nodes")]
    InvalidGraph {
        /// First endpoint of the offending edge.
        u: usize,
        /// Second endpoint of the offending edge.
        v: usize,
        /// Declared node count.
        n: usize,
    },
    /// No path exists between the requested pair.
    ///
    /// Callers guard pair selection with component membership, so hitting this variant means the
    /// contract was violated. The enumerator returns it after exhausting its round bound instead
    /// of looping.
    #[error("no path from {src} to {dest}")]
    Unreachable {
        /// Source node.
        src: NodeIndex,
        /// Destination node.
        dest: NodeIndex,
    },
    /// An `n × n` matrix allocation failed.
    #[error("matrix allocation failed")]
    Allocation(#[from] TryReserveError),
}
