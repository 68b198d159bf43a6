//! Bernoulli edge sampler (Erdős–Rényi `G(n, p)`)
//!
//! Every candidate pair is included independently with probability `p`. The
//! directed variant visits the `n² − n` off-diagonal arcs; the undirected one
//! samples the upper triangle and mirrors each hit.

use rand::Rng;
use tracing::debug;

use crate::error::{vertex_limit, GenError, GenResult};
use crate::storage::{CsrGraph, Direction};

/// Sample an Erdős–Rényi random graph
///
/// A `p >= 1` is read as an *average degree* and rescaled to `p / n` before
/// sampling, so `erdos_renyi(10, 1.0, ..)` includes each edge with probability
/// `0.1`, not certainty. With `n == 0` the rescaled probability is undefined
/// and the empty graph is returned.
///
/// # Errors
///
/// Domain error if `p` is NaN, negative, or larger than `n`.
///
/// # Example
///
/// ```
/// use trueno_graphgen::{erdos_renyi, seeded_rng, Direction};
///
/// let mut rng = seeded_rng(1);
/// let graph = erdos_renyi(50, 0.1, Direction::Undirected, &mut rng).unwrap();
/// assert_eq!(graph.num_nodes(), 50);
/// ```
pub fn erdos_renyi<R>(n: usize, p: f64, direction: Direction, rng: &mut R) -> GenResult<CsrGraph>
where
    R: Rng + ?Sized,
{
    if p.is_nan() || p < 0.0 {
        return Err(GenError::domain("p", p, "a probability or average degree >= 0"));
    }
    if n == 0 {
        return Ok(CsrGraph::empty(0, direction));
    }

    #[allow(clippy::cast_precision_loss)] // n is bounded by the u32 index space
    let n_f = n as f64;
    if p > n_f {
        return Err(GenError::domain("p", p, "a probability or average degree <= n"));
    }

    let p = if p >= 1.0 { p / n_f } else { p };
    sample(n, p, direction, rng)
}

/// Sample an Erdős–Rényi random graph with expected average degree `d`
///
/// Uses `p = d / n` directly, without the `p >= 1` reinterpretation of
/// [`erdos_renyi`]; `d == n` therefore yields the complete graph.
///
/// # Errors
///
/// Domain error if `d` is NaN, negative, or larger than `n`.
pub fn erdos_renyi_average_degree<R>(
    n: usize,
    d: f64,
    direction: Direction,
    rng: &mut R,
) -> GenResult<CsrGraph>
where
    R: Rng + ?Sized,
{
    #[allow(clippy::cast_precision_loss)]
    let n_f = n as f64;
    if d.is_nan() || d < 0.0 || d > n_f {
        return Err(GenError::domain("d", d, "an average degree in [0, n]"));
    }
    if n == 0 {
        return Ok(CsrGraph::empty(0, direction));
    }

    sample(n, d / n_f, direction, rng)
}

fn sample<R>(n: usize, p: f64, direction: Direction, rng: &mut R) -> GenResult<CsrGraph>
where
    R: Rng + ?Sized,
{
    let limit = vertex_limit(n)?;
    debug!(n, p, ?direction, "sampling Bernoulli graph");

    let mut sources = Vec::new();
    let mut targets = Vec::new();

    if p > 0.0 {
        match direction {
            Direction::Directed => {
                for u in 0..limit {
                    for v in (0..limit).filter(|&v| v != u) {
                        if rng.gen_bool(p) {
                            sources.push(u);
                            targets.push(v);
                        }
                    }
                }
            }
            Direction::Undirected => {
                for u in 0..limit {
                    for v in (u + 1)..limit {
                        if rng.gen_bool(p) {
                            sources.extend([u, v]);
                            targets.extend([v, u]);
                        }
                    }
                }
            }
        }
    }

    debug!(arcs = sources.len(), "Bernoulli graph sampled");
    Ok(CsrGraph::assemble(n, &sources, &targets, None, direction))
}
