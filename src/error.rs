//! Generator error taxonomy
//!
//! Every generator validates its inputs before sampling and reports failures
//! through [`GenError`]. Two families exist:
//!
//! - **Domain** errors: a numeric parameter lies outside its valid range
//!   (negative probability, probability above the vertex count, negative degree).
//! - **Argument** errors: a structural precondition fails (non-graphical degree
//!   sequence, seed without arcs, directed graph where an undirected one is
//!   required, edge count above the simple-graph maximum).
//!
//! No partial graph is ever returned alongside an error.

use thiserror::Error;

/// Errors raised by the graph generators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    /// Numeric parameter outside its valid range
    #[error("domain error: {parameter} = {value} (expected {expected})")]
    Domain {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Offending value, rendered for diagnostics
        value: String,
        /// Human readable description of the valid range
        expected: &'static str,
    },

    /// Structural precondition violated
    #[error("argument error: {0}")]
    Argument(String),
}

impl GenError {
    /// Build a domain error for `parameter`
    pub fn domain(
        parameter: &'static str,
        value: impl std::fmt::Display,
        expected: &'static str,
    ) -> Self {
        Self::Domain {
            parameter,
            value: value.to_string(),
            expected,
        }
    }

    /// Build an argument error from a message
    pub fn argument(reason: impl Into<String>) -> Self {
        Self::Argument(reason.into())
    }

    /// True for [`GenError::Domain`]
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    /// True for [`GenError::Argument`]
    #[must_use]
    pub const fn is_argument(&self) -> bool {
        matches!(self, Self::Argument(_))
    }
}

/// Result alias used by every generator
pub type GenResult<T> = std::result::Result<T, GenError>;

/// Check that a probability is a number in `[0, 1]`
pub(crate) fn check_probability(parameter: &'static str, p: f64) -> GenResult<()> {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return Err(GenError::domain(parameter, p, "a probability in [0, 1]"));
    }
    Ok(())
}

/// Convert a vertex count into the `u32` index space used by [`crate::CsrGraph`]
pub(crate) fn vertex_limit(num_nodes: usize) -> GenResult<u32> {
    u32::try_from(num_nodes).map_err(|_| {
        GenError::argument(format!(
            "vertex count {num_nodes} exceeds the u32 index space"
        ))
    })
}
