//! Partial-duplication growth
//!
//! Each round copies a random vertex: the copy inherits every edge of the
//! original independently with probability `p`, weights included. Used to
//! model gene-duplication style network evolution.

use rand::Rng;
use tracing::debug;

use crate::error::{check_probability, vertex_limit, GenError, GenResult};
use crate::storage::{CsrGraph, Direction, NodeId};

/// Grow `seed` by `steps` rounds of partial duplication with retention `p`
///
/// Each round picks a vertex uniformly among all current vertices (including
/// copies made in earlier rounds), appends a new vertex, and for every
/// `(neighbor, weight)` edge of the picked vertex adds the edge
/// `{new, neighbor}` with the same weight with probability `p`. The result has
/// `seed.num_nodes() + steps` vertices.
///
/// A self-loop on the picked vertex counts as one edge: the copy gains at most
/// one edge back to the picked vertex from it, never a loop of its own.
///
/// # Errors
///
/// - Argument error if `seed` is directed or asymmetric, or if `steps > 0`
///   and the seed has no vertices to copy.
/// - Domain error if `p` is not in `[0, 1]`.
///
/// # Example
///
/// ```
/// use trueno_graphgen::{partial_duplication, seeded_rng, CsrGraph};
///
/// let seed = CsrGraph::from_undirected_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// let mut rng = seeded_rng(9);
/// let graph = partial_duplication(&seed, 10, 0.5, &mut rng).unwrap();
/// assert_eq!(graph.num_nodes(), 13);
/// ```
pub fn partial_duplication<R>(
    seed: &CsrGraph,
    steps: usize,
    p: f64,
    rng: &mut R,
) -> GenResult<CsrGraph>
where
    R: Rng + ?Sized,
{
    if seed.is_directed() || !seed.is_symmetric() {
        return Err(GenError::argument(
            "partial duplication requires an undirected seed graph with every arc \
             matched by its reverse",
        ));
    }
    check_probability("p", p)?;

    let start = seed.num_nodes();
    if steps > 0 && start == 0 {
        return Err(GenError::argument("cannot duplicate vertices of an empty seed graph"));
    }
    let total = start
        .checked_add(steps)
        .ok_or_else(|| GenError::argument("seed size plus steps overflows usize"))?;
    vertex_limit(total)?;

    debug!(start, steps, p, "growing partial duplication graph");

    let mut adjacency: Vec<Vec<(u32, f32)>> = Vec::with_capacity(total);
    for node in 0..start {
        #[allow(clippy::cast_possible_truncation)] // seed ids fit in u32
        let id = NodeId(node as u32);
        let neighbors = seed
            .neighbors_with_weights(id)
            .map_err(|e| GenError::argument(e.to_string()))?;
        adjacency.push(neighbors.collect());
    }

    let mut copied = 0_usize;
    let mut template: Vec<(u32, f32)> = Vec::new();

    for _ in 0..steps {
        let picked = rng.gen_range(0..adjacency.len());
        #[allow(clippy::cast_possible_truncation)] // total checked against u32 above
        let new = adjacency.len() as u32;

        template.clear();
        template.extend_from_slice(&adjacency[picked]);
        adjacency.push(Vec::new());

        // A self-loop is stored as two arcs but is copied as one edge
        let mut loop_arcs = 0_usize;
        for &(neighbor, weight) in &template {
            if neighbor as usize == picked {
                loop_arcs += 1;
                if loop_arcs % 2 == 0 {
                    continue;
                }
            }
            if p > 0.0 && rng.gen_bool(p) {
                adjacency[new as usize].push((neighbor, weight));
                adjacency[neighbor as usize].push((new, weight));
                copied += 1;
            }
        }
    }

    debug!(vertices = total, copied, "partial duplication finished");
    Ok(CsrGraph::from_adjacency(adjacency, Direction::Undirected))
}
