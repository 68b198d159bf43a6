//! trueno-graphgen: stochastic sparse graph generators
//!
//! # Overview
//!
//! trueno-graphgen produces synthetic sparse networks for algorithm testing and
//! benchmarking. Every generator takes an explicit random source and returns a
//! [`CsrGraph`] owned by the caller.
//!
//! # Quick Start
//!
//! ```
//! use trueno_graphgen::{havel_hakimi, preferential_attachment, seeded_rng, NodeId};
//!
//! let mut rng = seeded_rng(42);
//!
//! // Scale-free growth from a 3-clique, 2 links per new vertex
//! let graph = preferential_attachment(1_000, 2, 3, &mut rng)?;
//! assert_eq!(graph.num_nodes(), 1_000);
//!
//! // Exact realization of a degree sequence
//! let matching = havel_hakimi(&[1, 1, 1, 1])?;
//! assert_eq!(matching.outgoing_neighbors(NodeId(0))?.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Architecture
//!
//! - **Generators**: Erdős–Rényi, degree-weighted (Chung–Lu style) rejection
//!   sampling, Havel–Hakimi realization, preferential attachment, partial
//!   duplication
//! - **Storage**: CSR (Compressed Sparse Row) format for graphs
//! - **I/O**: Matrix Market seed graphs, Parquet persistence (`storage` feature)
//! - **Errors**: [`GenError`] separates domain errors from argument errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod generators;
pub mod heap;
pub mod rng;
pub mod storage;

// Re-export core types
pub use error::{GenError, GenResult};
pub use generators::{
    chung_lu, chung_lu_signed, erdos_renyi, erdos_renyi_average_degree,
    generalized_preferential_attachment, havel_hakimi, is_graphical, partial_duplication,
    preferential_attachment, GeneralizedAttachment, SelfLoops,
};
pub use heap::IndexedMaxHeap;
pub use rng::{seeded_rng, GraphRng};
pub use storage::{read_matrix_market, CsrGraph, Direction, NodeId};

// Error type
pub use anyhow::{Error, Result};
