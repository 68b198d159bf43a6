//! Graph storage layer
//!
//! Provides the CSR (Compressed Sparse Row) graph every generator returns,
//! a Matrix Market reader for seed graphs, and Parquet persistence.

pub mod csr;
pub mod mtx;
#[cfg(feature = "storage")]
pub mod parquet;

pub use csr::{CsrGraph, Direction, NodeId};
pub use mtx::read_matrix_market;
