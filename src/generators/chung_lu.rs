//! Degree-weighted unique-edge rejection sampler (Chung–Lu style)
//!
//! Vertex `i` appears `d[i]` times in a candidate pool. Pairs of pool entries are
//! drawn uniformly; self-loops and pairs already accepted are discarded, and the
//! process stops once `m` distinct edges exist.
//!
//! This is an approximation of the configuration model: collisions are dropped
//! rather than re-weighted, so realized degrees match `d` only in expectation.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{vertex_limit, GenError, GenResult};
use crate::storage::csr::mirror;
use crate::storage::{CsrGraph, Direction};

/// Sample a simple undirected graph with `edges` distinct edges, degree-weighted by `degrees`
///
/// `edges` defaults to `⌊sum(degrees) / 2⌋`.
///
/// # Termination
///
/// Termination is probabilistic. Requests that are impossible outright (more
/// edges than pairs of positive-degree vertices) are rejected up front, but
/// sequences concentrated on a few vertices relative to `edges` can still take
/// arbitrarily long. Callers needing bounded latency must impose their own
/// timeout.
///
/// # Errors
///
/// Argument error if `edges > n(n−1)/2`, or if `edges` exceeds the number of
/// distinct pairs among vertices with positive degree.
///
/// # Example
///
/// ```
/// use trueno_graphgen::{chung_lu, seeded_rng};
///
/// let mut rng = seeded_rng(4);
/// let graph = chung_lu(&[3, 2, 2, 2, 1], None, &mut rng).unwrap();
/// assert_eq!(graph.num_edges(), 2 * 5); // five undirected edges
/// ```
pub fn chung_lu<R>(degrees: &[usize], edges: Option<usize>, rng: &mut R) -> GenResult<CsrGraph>
where
    R: Rng + ?Sized,
{
    let n = degrees.len();
    vertex_limit(n)?;

    let total: u64 = degrees.iter().map(|&d| d as u64).sum();
    #[allow(clippy::cast_possible_truncation)] // total / 2 <= pool length, which fits in memory
    let m = edges.unwrap_or((total / 2) as usize);

    let max_edges = pair_count(n as u64);
    if m as u64 > max_edges {
        return Err(GenError::argument(format!(
            "requested {m} edges but a simple graph on {n} vertices has at most {max_edges}"
        )));
    }

    let support = degrees.iter().filter(|&&d| d > 0).count();
    let reachable = pair_count(support as u64);
    if m as u64 > reachable {
        return Err(GenError::argument(format!(
            "requested {m} edges but only {support} vertices have positive degree \
             ({reachable} distinct pairs)"
        )));
    }

    debug!(n, m, total, "sampling degree-weighted graph");

    let pool: Vec<u32> = degrees
        .iter()
        .enumerate()
        .flat_map(|(v, &d)| {
            #[allow(clippy::cast_possible_truncation)] // n checked above
            let v = v as u32;
            std::iter::repeat(v).take(d)
        })
        .collect();

    let mut accepted: HashSet<(u32, u32)> = HashSet::with_capacity(m);
    let mut chosen: Vec<(u32, u32)> = Vec::with_capacity(m);
    let mut rejected = 0_u64;

    while chosen.len() < m {
        let u = pool[rng.gen_range(0..pool.len())];
        let v = pool[rng.gen_range(0..pool.len())];

        if u == v {
            rejected += 1;
            continue;
        }

        let key = (u.min(v), u.max(v));
        if accepted.insert(key) {
            chosen.push(key);
        } else {
            rejected += 1;
        }
    }

    trace!(rejected, "rejection sampling finished");

    let (sources, targets) = mirror(&chosen);
    Ok(CsrGraph::assemble(n, &sources, &targets, None, Direction::Undirected))
}

/// [`chung_lu`] over signed degrees
///
/// # Errors
///
/// Domain error if any degree is negative; otherwise as [`chung_lu`].
pub fn chung_lu_signed<R>(degrees: &[i64], edges: Option<usize>, rng: &mut R) -> GenResult<CsrGraph>
where
    R: Rng + ?Sized,
{
    let degrees = degrees
        .iter()
        .map(|&d| {
            usize::try_from(d).map_err(|_| GenError::domain("degree", d, "a degree >= 0"))
        })
        .collect::<GenResult<Vec<usize>>>()?;

    chung_lu(&degrees, edges, rng)
}

/// `k(k−1)/2`
fn pair_count(k: u64) -> u64 {
    k * k.saturating_sub(1) / 2
}
