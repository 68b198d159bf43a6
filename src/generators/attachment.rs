//! Preferential attachment processes
//!
//! Both variants grow an *arc multiset*: an append-only list of directed
//! half-edges in which a vertex of degree `d` appears `d` times as a source.
//! Drawing a uniform arc and taking its source therefore samples a vertex with
//! probability proportional to its current degree.
//!
//! - [`preferential_attachment`]: each new vertex links to up to `k` existing
//!   vertices (Barabási–Albert style, duplicates collapsed).
//! - [`GeneralizedAttachment`]: a three-event process mixing node arrivals,
//!   edges between existing vertices, and new two-vertex components.

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{check_probability, vertex_limit, GenError, GenResult};
use crate::storage::{CsrGraph, Direction};

/// Whether edge events in [`GeneralizedAttachment`] may join a vertex to itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelfLoops {
    /// Edge events keep whatever pair they draw
    Allowed,
    /// Edge events redraw the second endpoint until it differs from the first
    #[default]
    Forbidden,
}

/// Arc multiset with parallel source / target / weight columns
#[derive(Debug, Default)]
struct ArcList {
    sources: Vec<u32>,
    targets: Vec<u32>,
    weights: Vec<f32>,
}

impl ArcList {
    /// All `k0 (k0 − 1)` arcs of the complete graph on `0..k0`
    fn clique(k0: u32) -> Self {
        let mut arcs = Self::default();
        for u in 0..k0 {
            for v in (0..k0).filter(|&v| v != u) {
                arcs.push_arc(u, v, 1.0);
            }
        }
        arcs
    }

    fn from_graph(seed: &CsrGraph) -> Self {
        let mut arcs = Self::default();
        for (u, v, w) in seed.arcs() {
            arcs.push_arc(u, v, w);
        }
        arcs
    }

    fn len(&self) -> usize {
        self.sources.len()
    }

    fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// True if at least two distinct vertices can be drawn by [`Self::sample_endpoint`]
    fn spans_two_vertices(&self) -> bool {
        self.sources
            .first()
            .is_some_and(|&first| self.sources.iter().any(|&v| v != first))
    }

    fn push_arc(&mut self, u: u32, v: u32, weight: f32) {
        self.sources.push(u);
        self.targets.push(v);
        self.weights.push(weight);
    }

    /// Record an undirected unit-weight edge as two arcs
    fn push_edge(&mut self, u: u32, v: u32) {
        self.push_arc(u, v, 1.0);
        self.push_arc(v, u, 1.0);
    }

    /// Degree-proportional vertex draw
    fn sample_endpoint<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.sources[rng.gen_range(0..self.sources.len())]
    }

    fn into_graph(self, num_nodes: usize) -> CsrGraph {
        CsrGraph::assemble(
            num_nodes,
            &self.sources,
            &self.targets,
            Some(&self.weights),
            Direction::Undirected,
        )
    }
}

/// Grow a graph by degree-proportional attachment from a `k0`-clique
///
/// Each of the `n − k0` new vertices draws `k` arcs uniformly from the current
/// arc multiset, collapses repeated endpoints, and links to every distinct
/// endpoint, so its degree is between 1 and `k`. The result is undirected with
/// exactly `n` vertices, `k0 (k0 − 1)` seed arcs and at most `2k (n − k0)`
/// further arcs.
///
/// # Errors
///
/// - Argument error if `n < k0`, or if `k0 < 2` (the clique has no arcs to
///   sample from).
/// - Domain error if `k == 0` while vertices remain to be added.
///
/// # Example
///
/// ```
/// use trueno_graphgen::{preferential_attachment, seeded_rng};
///
/// let mut rng = seeded_rng(2);
/// let graph = preferential_attachment(100, 3, 4, &mut rng).unwrap();
/// assert_eq!(graph.num_nodes(), 100);
/// assert!(graph.num_edges() <= 4 * 3 + 2 * 3 * 96);
/// ```
pub fn preferential_attachment<R>(n: usize, k: usize, k0: usize, rng: &mut R) -> GenResult<CsrGraph>
where
    R: Rng + ?Sized,
{
    let limit = vertex_limit(n)?;
    if n < k0 {
        return Err(GenError::argument(format!(
            "seed clique of {k0} vertices does not fit in {n} vertices"
        )));
    }
    if k0 < 2 {
        return Err(GenError::argument(format!(
            "seed clique of {k0} vertices has no arcs to attach to"
        )));
    }
    if k == 0 && n > k0 {
        return Err(GenError::domain("k", k, "at least one link per new vertex"));
    }

    debug!(n, k, k0, "growing preferential attachment graph");

    #[allow(clippy::cast_possible_truncation)] // k0 <= n, which fits in u32
    let seed_size = k0 as u32;
    let mut arcs = ArcList::clique(seed_size);
    let mut targets = Vec::with_capacity(k);

    for new in seed_size..limit {
        targets.clear();
        targets.extend((0..k).map(|_| arcs.sample_endpoint(rng)));
        targets.sort_unstable();
        targets.dedup();

        for &target in &targets {
            arcs.push_edge(new, target);
        }
    }

    debug!(arcs = arcs.len(), "preferential attachment finished");
    Ok(arcs.into_graph(n))
}

/// Three-event generalized preferential attachment
///
/// Starting from a seed, the process repeatedly draws `x` uniform in `[0, 1)`:
///
/// - `x < p` (**node event**): a new vertex links to one degree-sampled vertex;
/// - `p <= x < p + r` (**edge event**): two degree-sampled vertices are joined;
///   with [`SelfLoops::Forbidden`] the second endpoint is redrawn until it
///   differs from the first;
/// - otherwise (**component event**): two new vertices joined to each other are
///   added. When only one vertex slot remains this falls back to a node event.
///
/// The process stops exactly when the vertex count reaches `vertices`. Edge
/// events may create parallel edges; new arcs carry weight `1.0`.
///
/// # Example
///
/// ```
/// use trueno_graphgen::{seeded_rng, GeneralizedAttachment, SelfLoops};
///
/// let mut rng = seeded_rng(5);
/// let graph = GeneralizedAttachment::new(200, 0.6, 0.3)
///     .with_self_loops(SelfLoops::Forbidden)
///     .generate_from_clique(3, &mut rng)
///     .unwrap();
/// assert_eq!(graph.num_nodes(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralizedAttachment {
    /// Final vertex count
    pub vertices: usize,
    /// Probability `p` of a node event
    pub node_probability: f64,
    /// Probability `r` of an edge event
    pub edge_probability: f64,
    /// Self-loop policy for edge events
    pub self_loops: SelfLoops,
}

/// Outcome of one uniform draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Node,
    Edge,
    Component,
}

impl GeneralizedAttachment {
    /// Process with `vertices` final vertices, node-event probability `p` and
    /// edge-event probability `r`; self-loops forbidden
    #[must_use]
    pub fn new(vertices: usize, node_probability: f64, edge_probability: f64) -> Self {
        Self {
            vertices,
            node_probability,
            edge_probability,
            self_loops: SelfLoops::default(),
        }
    }

    /// Set the self-loop policy
    #[must_use]
    pub fn with_self_loops(mut self, self_loops: SelfLoops) -> Self {
        self.self_loops = self_loops;
        self
    }

    /// Run the process from the complete graph on `k0` vertices
    ///
    /// # Errors
    ///
    /// As [`GeneralizedAttachment::generate_from_seed`]; additionally an
    /// argument error if `k0 > vertices`.
    pub fn generate_from_clique<R>(&self, k0: usize, rng: &mut R) -> GenResult<CsrGraph>
    where
        R: Rng + ?Sized,
    {
        self.validate()?;
        vertex_limit(self.vertices)?;
        if k0 > self.vertices {
            return Err(GenError::argument(format!(
                "seed clique of {k0} vertices does not fit in {} vertices",
                self.vertices
            )));
        }

        #[allow(clippy::cast_possible_truncation)] // k0 <= vertices, which fits in u32
        let arcs = ArcList::clique(k0 as u32);
        self.grow(arcs, k0, rng)
    }

    /// Run the process from an undirected seed graph
    ///
    /// Seed vertices keep their ids and seed arcs keep their weights.
    ///
    /// # Errors
    ///
    /// - Domain error if `p` or `r` is outside `[0, 1]` or `p + r > 1`.
    /// - Argument error if the seed is directed or asymmetric, has more
    ///   vertices than `vertices`, has no arcs, or (with
    ///   [`SelfLoops::Forbidden`]) touches fewer than two distinct vertices.
    /// - Argument error if `p == 0` and `r == 1` while vertices remain to be
    ///   added, since the process could never grow.
    pub fn generate_from_seed<R>(&self, seed: &CsrGraph, rng: &mut R) -> GenResult<CsrGraph>
    where
        R: Rng + ?Sized,
    {
        self.validate()?;
        vertex_limit(self.vertices)?;
        if seed.is_directed() || !seed.is_symmetric() {
            return Err(GenError::argument(
                "attachment seed must be an undirected graph with every arc \
                 matched by its reverse",
            ));
        }
        if seed.num_nodes() > self.vertices {
            return Err(GenError::argument(format!(
                "seed has {} vertices but the process stops at {}",
                seed.num_nodes(),
                self.vertices
            )));
        }

        self.grow(ArcList::from_graph(seed), seed.num_nodes(), rng)
    }

    fn validate(&self) -> GenResult<()> {
        check_probability("p", self.node_probability)?;
        check_probability("r", self.edge_probability)?;

        let sum = self.node_probability + self.edge_probability;
        if sum > 1.0 + f64::EPSILON {
            return Err(GenError::domain("p + r", sum, "p + r <= 1"));
        }
        Ok(())
    }

    fn draw_event<R: Rng + ?Sized>(&self, rng: &mut R) -> Event {
        let x: f64 = rng.gen();
        if x < self.node_probability {
            Event::Node
        } else if x < self.node_probability + self.edge_probability {
            Event::Edge
        } else {
            Event::Component
        }
    }

    fn grow<R>(&self, mut arcs: ArcList, start: usize, rng: &mut R) -> GenResult<CsrGraph>
    where
        R: Rng + ?Sized,
    {
        let n = self.vertices;

        if arcs.is_empty() {
            return Err(GenError::argument("attachment seed has no arcs to sample from"));
        }
        if self.self_loops == SelfLoops::Forbidden && !arcs.spans_two_vertices() {
            return Err(GenError::argument(
                "without self-loops the seed must touch at least two distinct vertices",
            ));
        }
        if start < n && self.node_probability <= 0.0 && self.edge_probability >= 1.0 {
            return Err(GenError::argument(format!(
                "p = 0 and r = 1 only add edges, so the process cannot grow \
                 from {start} to {n} vertices"
            )));
        }

        debug!(
            n,
            start,
            p = self.node_probability,
            r = self.edge_probability,
            self_loops = ?self.self_loops,
            "growing generalized attachment graph"
        );

        // start and n both fit in u32 (checked by callers)
        #[allow(clippy::cast_possible_truncation)]
        let mut count = start as u32;
        #[allow(clippy::cast_possible_truncation)]
        let limit = n as u32;
        let mut events = [0_u64; 3];

        while count < limit {
            let event = match self.draw_event(rng) {
                Event::Component if limit - count < 2 => Event::Node,
                event => event,
            };

            match event {
                Event::Node => {
                    let target = arcs.sample_endpoint(rng);
                    arcs.push_edge(count, target);
                    count += 1;
                }
                Event::Edge => {
                    let u = arcs.sample_endpoint(rng);
                    let mut v = arcs.sample_endpoint(rng);
                    if self.self_loops == SelfLoops::Forbidden {
                        while v == u {
                            v = arcs.sample_endpoint(rng);
                        }
                    }
                    arcs.push_edge(u, v);
                }
                Event::Component => {
                    arcs.push_edge(count, count + 1);
                    count += 2;
                }
            }
            events[event as usize] += 1;
        }

        trace!(
            node_events = events[Event::Node as usize],
            edge_events = events[Event::Edge as usize],
            component_events = events[Event::Component as usize],
            "generalized attachment events"
        );
        debug!(arcs = arcs.len(), "generalized attachment finished");
        Ok(arcs.into_graph(n))
    }
}

/// Convenience wrapper for [`GeneralizedAttachment::generate_from_clique`]
///
/// # Errors
///
/// See [`GeneralizedAttachment::generate_from_clique`].
pub fn generalized_preferential_attachment<R>(
    n: usize,
    p: f64,
    r: f64,
    k0: usize,
    self_loops: SelfLoops,
    rng: &mut R,
) -> GenResult<CsrGraph>
where
    R: Rng + ?Sized,
{
    GeneralizedAttachment::new(n, p, r)
        .with_self_loops(self_loops)
        .generate_from_clique(k0, rng)
}
