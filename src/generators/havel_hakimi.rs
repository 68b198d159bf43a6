//! Degree-sequence realizer (Havel–Hakimi)
//!
//! Repeatedly removes the vertex with the largest residual degree `d` and
//! connects it to the `d` vertices with the next largest residual degrees.
//! A sequence is graphical exactly when this never runs out of partners.
//!
//! Cost is O(sum(d) · log n): every pairing is one extract-max and at most one
//! reinsertion on an [`IndexedMaxHeap`].

use tracing::debug;

use crate::error::{vertex_limit, GenError, GenResult};
use crate::heap::IndexedMaxHeap;
use crate::storage::csr::mirror;
use crate::storage::{CsrGraph, Direction};

/// True if `degrees` is realizable by a simple undirected graph
///
/// # Example
///
/// ```
/// use trueno_graphgen::is_graphical;
///
/// assert!(is_graphical(&[1, 1, 1, 1]));
/// assert!(!is_graphical(&[1, 1, 1]));    // odd sum
/// assert!(!is_graphical(&[3, 3, 1, 1])); // even sum, still impossible
/// ```
#[must_use]
pub fn is_graphical(degrees: &[usize]) -> bool {
    realize(degrees, |_, _| {}).is_ok()
}

/// Construct a simple undirected graph whose degree sequence is exactly `degrees`
///
/// The result has `degrees.len()` vertices and `sum(degrees) / 2` edges.
///
/// # Errors
///
/// Argument error if the sequence is not graphical; the message names the
/// first contradiction found.
///
/// # Example
///
/// ```
/// use trueno_graphgen::havel_hakimi;
///
/// let graph = havel_hakimi(&[1, 1, 1, 1]).unwrap();
/// assert_eq!(graph.degrees(), vec![1, 1, 1, 1]);
/// assert_eq!(graph.num_edges(), 4); // a perfect matching, stored both ways
/// ```
pub fn havel_hakimi(degrees: &[usize]) -> GenResult<CsrGraph> {
    let n = degrees.len();
    debug!(n, "realizing degree sequence");

    let mut edges = Vec::with_capacity(degrees.iter().sum::<usize>() / 2);
    realize(degrees, |v, u| edges.push((v, u)))?;

    let (sources, targets) = mirror(&edges);
    debug!(edges = edges.len(), "degree sequence realized");
    Ok(CsrGraph::assemble(n, &sources, &targets, None, Direction::Undirected))
}

/// Shared engine: reports every pairing to `on_edge`, fails on the first contradiction
fn realize<F>(degrees: &[usize], mut on_edge: F) -> GenResult<()>
where
    F: FnMut(u32, u32),
{
    let n = degrees.len();
    vertex_limit(n)?;

    let total: u128 = degrees.iter().map(|&d| d as u128).sum();
    if total % 2 != 0 {
        return Err(GenError::argument(format!(
            "degree sum {total} is odd, so the sequence is not graphical"
        )));
    }
    if let Some((v, &d)) = degrees.iter().enumerate().find(|&(_, &d)| d >= n) {
        return Err(GenError::argument(format!(
            "vertex {v} has degree {d} but only {} other vertices exist",
            n.saturating_sub(1)
        )));
    }

    let mut heap = IndexedMaxHeap::from_priorities(degrees);
    let mut partners: Vec<(u32, usize)> = Vec::new();

    while let Some((v, d)) = heap.pop_max() {
        if d == 0 {
            // Everything left has residual degree zero
            return Ok(());
        }

        partners.clear();
        for _ in 0..d {
            let Some(partner) = heap.pop_max() else {
                return Err(GenError::argument(format!(
                    "vertex {v} needs {d} partners but only {} remain",
                    partners.len()
                )));
            };
            partners.push(partner);
        }

        for &(u, r) in &partners {
            if r == 0 {
                return Err(GenError::argument(format!(
                    "vertex {v} needs {d} partners but vertex {u} has no residual degree left"
                )));
            }
            on_edge(v, u);
            if r > 1 {
                heap.push(u, r - 1);
            }
        }
    }

    Ok(())
}
