//! This is a library to partition a simple, undirected graph into communities with the
//! [Girvan–Newman method](https://en.wikipedia.org/wiki/Girvan%E2%80%93Newman_algorithm).
//!
//! The method scores every edge by its *betweenness*: the number of all-pairs shortest paths
//! that traverse it. Edges between communities carry the traffic of many pairs and score high;
//! edges inside a community do not. Repeatedly cutting the highest-scoring edges therefore
//! splits the graph along its community boundaries.
//!
//! # Examples
//!
//! Two triangles joined by a single bridge fall apart at the bridge.
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use petgraph::graph::UnGraph;
//! use girvan_newman::{girvan_newman, Params};
//!
//! let graph = UnGraph::<(), ()>::from_edges([(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (3, 5), (4, 5)]);
//! let communities = girvan_newman(&graph, Params { target_population: 3, max_stalls: 5 })?;
//!
//! assert_eq!(communities.communities().len(), 2);
//! assert_eq!(communities.removed_edges().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! A stall budget of zero performs no cuts at all.
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use petgraph::graph::UnGraph;
//! use girvan_newman::{girvan_newman, Params};
//!
//! let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0)]);
//! let communities = girvan_newman(&graph, Params { target_population: 0, max_stalls: 0 })?;
//!
//! assert!(communities.removed_edges().is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Generics
//!
//! The entry point is implemented for structs that implement the `petgraph` traits
//! `NodeCompactIndexable`, `IntoNeighbors`, and `GraphProp<EdgeType = Undirected>`.
//!
//! # Complexity
//!
//! Edge betweenness is an all-pairs property, so every iteration enumerates shortest paths for
//! O(n²) node pairs. This exact, exhaustive formulation is intended for small and medium graphs.
//!
//! # References
//! + \[GN02\]: Michelle Girvan and Mark Newman. “Community structure in social and biological
//!   networks”. <https://doi.org/10.1073/pnas.122653799>.

#![forbid(unsafe_code)]
#![doc(test(attr(deny(warnings, rust_2018_idioms), allow(dead_code))))]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

/// Edge betweenness accumulation.
pub mod betweenness;
/// Connected components.
pub mod components;
/// The adjacency structure.
pub mod graph;
/// Shortest path enumeration.
pub mod paths;

mod error;
mod index;
mod partition;

pub use betweenness::{edge_betweenness, BetweennessMatrix};
pub use components::{connected_components, minimum_population, Component};
pub use error::Error;
pub use graph::AdjacencyMatrix;
pub use index::NodeIndex;
pub use partition::{girvan_newman, partition, CommunityStructure, Params, RemovedEdge};
pub use paths::{shortest_paths, Path};
