//! CSR (Compressed Sparse Row) graph representation
//!
//! The canonical output of every generator. Based on `GraphBLAST` (Yang et al.,
//! ACM `ToMS` 2022) compressed adjacency layout.
//!
//! # CSR Format
//!
//! ```text
//! Graph: 0 → 1, 0 → 2, 1 → 2
//!
//! CSR:
//!   row_offsets: [0, 2, 3, 3]  // Node 0: arcs [0..2), Node 1: [2..3), Node 2: [3..3)
//!   col_indices: [1, 2, 2]      // Arc 0 → node 1, arc 1 → node 2, arc 2 → node 2
//!   edge_weights: [1.0, 1.0, 1.0]
//! ```
//!
//! Undirected graphs store every edge `{u, v}` as the two arcs `u → v` and
//! `v → u`, so `num_edges()` counts each undirected edge twice.

use anyhow::{anyhow, ensure, Result};

/// Node identifier (zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Directed / undirected tag carried by every [`CsrGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Arcs are one-way
    #[default]
    Directed,
    /// Each edge is stored as two opposite arcs
    Undirected,
}

/// CSR (Compressed Sparse Row) graph
///
/// Optimized for:
/// - O(1) access to outgoing arcs (via forward CSR)
/// - O(1) access to incoming arcs (via reverse CSR)
/// - Cheap hand-off of generator output to analysis code
///
/// # Example
///
/// ```
/// use trueno_graphgen::{CsrGraph, Direction, NodeId};
///
/// let graph = CsrGraph::from_undirected_edges(3, &[(0, 1), (0, 2)]).unwrap();
///
/// assert_eq!(graph.direction(), Direction::Undirected);
/// assert_eq!(graph.outgoing_neighbors(NodeId(0)).unwrap(), &[1, 2]);
/// assert_eq!(graph.num_edges(), 4); // two undirected edges, four arcs
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    /// Forward CSR: Row offsets for outgoing arcs
    /// node i's arcs start at `row_offsets`[i]
    /// Length: `num_nodes` + 1
    row_offsets: Vec<u32>,

    /// Forward CSR: Column indices (arc targets)
    /// Length: `num_edges`
    col_indices: Vec<u32>,

    /// Forward CSR: Edge weights
    /// Length: `num_edges`
    edge_weights: Vec<f32>,

    /// Reverse CSR: Row offsets for incoming arcs
    /// Length: `num_nodes` + 1
    rev_row_offsets: Vec<u32>,

    /// Reverse CSR: Column indices (arc sources)
    /// Length: `num_edges`
    rev_col_indices: Vec<u32>,

    /// Directed / undirected tag
    direction: Direction,

    /// Number of nodes
    num_nodes: usize,
}

impl CsrGraph {
    /// Create new empty directed graph
    #[must_use]
    pub fn new() -> Self {
        Self::empty(0, Direction::Directed)
    }

    /// Create a graph with `num_nodes` isolated vertices
    #[must_use]
    pub fn empty(num_nodes: usize, direction: Direction) -> Self {
        Self {
            row_offsets: vec![0; num_nodes + 1],
            col_indices: Vec::new(),
            edge_weights: Vec::new(),
            rev_row_offsets: vec![0; num_nodes + 1],
            rev_col_indices: Vec::new(),
            direction,
            num_nodes,
        }
    }

    /// Create directed graph from edge list
    ///
    /// The vertex count is one more than the largest id mentioned.
    ///
    /// # Arguments
    ///
    /// * `edges` - List of (source, target, weight) tuples
    ///
    /// # Errors
    ///
    /// Returns error if the largest node id cannot be indexed
    pub fn from_edge_list(edges: &[(NodeId, NodeId, f32)]) -> Result<Self> {
        let Some(max_node) = edges.iter().flat_map(|(src, dst, _)| [src.0, dst.0]).max() else {
            return Ok(Self::new());
        };

        let num_nodes = max_node as usize + 1;
        let sources: Vec<u32> = edges.iter().map(|(src, _, _)| src.0).collect();
        let targets: Vec<u32> = edges.iter().map(|(_, dst, _)| dst.0).collect();
        let weights: Vec<f32> = edges.iter().map(|(_, _, w)| *w).collect();

        Self::from_arcs(num_nodes, &sources, &targets, Some(&weights), Direction::Directed)
    }

    /// Assemble a graph from parallel source / target lists
    ///
    /// Arcs are stored exactly as given; an undirected graph must list both
    /// orientations (see [`CsrGraph::from_undirected_edges`] for the mirroring
    /// variant). Missing weights default to `1.0`. Within each row, arcs keep
    /// their input order.
    ///
    /// # Errors
    ///
    /// Returns error if the lists differ in length, an index is `>= num_nodes`,
    /// or an undirected graph has an arc `u → v` without a matching `v → u`
    pub fn from_arcs(
        num_nodes: usize,
        sources: &[u32],
        targets: &[u32],
        weights: Option<&[f32]>,
        direction: Direction,
    ) -> Result<Self> {
        ensure!(
            sources.len() == targets.len(),
            "source list has {} entries but target list has {}",
            sources.len(),
            targets.len()
        );
        if let Some(weights) = weights {
            ensure!(
                weights.len() == sources.len(),
                "weight list has {} entries but arc list has {}",
                weights.len(),
                sources.len()
            );
        }
        ensure!(
            u32::try_from(num_nodes).is_ok(),
            "vertex count {num_nodes} exceeds the u32 index space"
        );
        if let Some(bad) = sources.iter().chain(targets).find(|&&v| v as usize >= num_nodes) {
            return Err(anyhow!("Node ID {bad} out of bounds for {num_nodes} nodes"));
        }

        let graph = Self::assemble(num_nodes, sources, targets, weights, direction);
        graph.ensure_symmetric()?;
        Ok(graph)
    }

    /// Assemble an undirected graph, mirroring each `(u, v)` pair into two arcs
    ///
    /// A self-loop `(u, u)` is stored as two `u → u` arcs, so it contributes
    /// two to the degree of `u`.
    ///
    /// # Errors
    ///
    /// Returns error if an index is `>= num_nodes`
    pub fn from_undirected_edges(num_nodes: usize, edges: &[(u32, u32)]) -> Result<Self> {
        let (sources, targets) = mirror(edges);
        Self::from_arcs(num_nodes, &sources, &targets, None, Direction::Undirected)
    }

    /// Wrap already-compressed adjacency arrays
    ///
    /// # Errors
    ///
    /// Returns error unless `row_offsets` has `num_nodes + 1` non-decreasing
    /// entries starting at 0 and ending at `col_indices.len()`, `edge_weights`
    /// matches `col_indices` in length, every column index is in range, and
    /// (for undirected graphs) every arc has its reverse.
    pub fn from_csr_parts(
        num_nodes: usize,
        row_offsets: Vec<u32>,
        col_indices: Vec<u32>,
        edge_weights: Vec<f32>,
        direction: Direction,
    ) -> Result<Self> {
        ensure!(
            row_offsets.len() == num_nodes + 1,
            "expected {} row offsets, got {}",
            num_nodes + 1,
            row_offsets.len()
        );
        ensure!(row_offsets.first() == Some(&0), "row offsets must start at 0");
        ensure!(
            row_offsets.windows(2).all(|w| w[0] <= w[1]),
            "row offsets must be non-decreasing"
        );
        ensure!(
            row_offsets.last().map(|&o| o as usize) == Some(col_indices.len()),
            "last row offset must equal the number of column indices ({})",
            col_indices.len()
        );
        ensure!(
            edge_weights.len() == col_indices.len(),
            "weight array has {} entries but column array has {}",
            edge_weights.len(),
            col_indices.len()
        );
        if let Some(bad) = col_indices.iter().find(|&&v| v as usize >= num_nodes) {
            return Err(anyhow!("Node ID {bad} out of bounds for {num_nodes} nodes"));
        }

        let (rev_row_offsets, rev_col_indices) = transpose(num_nodes, &row_offsets, &col_indices);

        let graph = Self {
            row_offsets,
            col_indices,
            edge_weights,
            rev_row_offsets,
            rev_col_indices,
            direction,
            num_nodes,
        };
        graph.ensure_symmetric()?;
        Ok(graph)
    }

    /// Build from trusted arc lists (indices already known to be in range)
    pub(crate) fn assemble(
        num_nodes: usize,
        sources: &[u32],
        targets: &[u32],
        weights: Option<&[f32]>,
        direction: Direction,
    ) -> Self {
        debug_assert_eq!(sources.len(), targets.len());

        let mut adj_list: Vec<Vec<(u32, f32)>> = vec![Vec::new(); num_nodes];
        for (i, (&src, &dst)) in sources.iter().zip(targets).enumerate() {
            let weight = weights.map_or(1.0, |w| w[i]);
            adj_list[src as usize].push((dst, weight));
        }

        Self::from_adjacency(adj_list, direction)
    }

    /// Build from a per-vertex `(neighbor, weight)` adjacency list
    pub(crate) fn from_adjacency(adj_list: Vec<Vec<(u32, f32)>>, direction: Direction) -> Self {
        let num_nodes = adj_list.len();
        let total: usize = adj_list.iter().map(Vec::len).sum();

        // Build forward CSR
        let mut row_offsets = Vec::with_capacity(num_nodes + 1);
        let mut col_indices = Vec::with_capacity(total);
        let mut edge_weights = Vec::with_capacity(total);

        let mut offset = 0_u32;
        row_offsets.push(offset);

        for neighbors in &adj_list {
            #[allow(clippy::cast_possible_truncation)] // Graphs >4B arcs not supported yet
            let len_u32 = neighbors.len() as u32;
            offset += len_u32;
            row_offsets.push(offset);

            for &(target, weight) in neighbors {
                col_indices.push(target);
                edge_weights.push(weight);
            }
        }

        let (rev_row_offsets, rev_col_indices) = transpose(num_nodes, &row_offsets, &col_indices);

        Self {
            row_offsets,
            col_indices,
            edge_weights,
            rev_row_offsets,
            rev_col_indices,
            direction,
            num_nodes,
        }
    }

    /// Get outgoing neighbors of a node
    ///
    /// For undirected graphs this is the full neighbor list.
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn outgoing_neighbors(&self, node: NodeId) -> Result<&[u32]> {
        let (start, end) = self.row_range(node)?;
        Ok(&self.col_indices[start..end])
    }

    /// Get incoming neighbors of a node
    ///
    /// Returns O(1) access to incoming arcs via reverse CSR.
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn incoming_neighbors(&self, target: NodeId) -> Result<&[u32]> {
        if (target.0 as usize) >= self.num_nodes {
            return Err(anyhow!("Node ID {} out of bounds", target.0));
        }

        let idx = target.0 as usize;
        let start = self.rev_row_offsets[idx] as usize;
        let end = self.rev_row_offsets[idx + 1] as usize;

        Ok(&self.rev_col_indices[start..end])
    }

    /// Outgoing `(neighbor, weight)` pairs of a node
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn neighbors_with_weights(
        &self,
        node: NodeId,
    ) -> Result<impl Iterator<Item = (u32, f32)> + '_> {
        let (start, end) = self.row_range(node)?;
        Ok(self.col_indices[start..end]
            .iter()
            .copied()
            .zip(self.edge_weights[start..end].iter().copied()))
    }

    /// Out-degree of a node (degree, for undirected graphs)
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        let (start, end) = self.row_range(node)?;
        Ok(end - start)
    }

    /// Out-degree of every node, in id order
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.row_offsets
            .windows(2)
            .map(|w| (w[1] - w[0]) as usize)
            .collect()
    }

    /// Get number of nodes
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Get number of stored arcs
    ///
    /// Undirected edges are stored twice and therefore counted twice.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.col_indices.len()
    }

    /// Directed / undirected tag
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// True for [`Direction::Directed`] graphs
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.direction == Direction::Directed
    }

    /// Iterate over every stored arc as `(source, target, weight)`
    pub fn arcs(&self) -> impl Iterator<Item = (u32, u32, f32)> + '_ {
        (0..self.num_nodes).flat_map(move |node_id| {
            let start = self.row_offsets[node_id] as usize;
            let end = self.row_offsets[node_id + 1] as usize;

            #[allow(clippy::cast_possible_truncation)] // num_nodes checked against u32 on build
            let src = node_id as u32;
            self.col_indices[start..end]
                .iter()
                .zip(&self.edge_weights[start..end])
                .map(move |(&dst, &w)| (src, dst, w))
        })
    }

    /// Iterate over edges: every arc for directed graphs, arcs with
    /// `source <= target` for undirected graphs
    ///
    /// A self-loop in an undirected graph is stored as two arcs and is
    /// reported twice.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32, f32)> + '_ {
        let directed = self.is_directed();
        self.arcs().filter(move |(src, dst, _)| directed || src <= dst)
    }

    /// True if every arc `u → v` is matched by an arc `v → u`
    ///
    /// Parallel arcs must be matched one for one. Undirected graphs built
    /// through the public constructors always satisfy this.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let mut outgoing: Vec<u32> = Vec::new();
        let mut incoming: Vec<u32> = Vec::new();

        for node in 0..self.num_nodes {
            let out = &self.col_indices
                [self.row_offsets[node] as usize..self.row_offsets[node + 1] as usize];
            let inc = &self.rev_col_indices
                [self.rev_row_offsets[node] as usize..self.rev_row_offsets[node + 1] as usize];
            if out.len() != inc.len() {
                return false;
            }

            outgoing.clear();
            outgoing.extend_from_slice(out);
            outgoing.sort_unstable();
            incoming.clear();
            incoming.extend_from_slice(inc);
            incoming.sort_unstable();
            if outgoing != incoming {
                return false;
            }
        }
        true
    }

    fn ensure_symmetric(&self) -> Result<()> {
        ensure!(
            self.is_directed() || self.is_symmetric(),
            "undirected graph has an arc without its reverse; list both orientations \
             or build it as directed"
        );
        Ok(())
    }

    /// Get CSR components (row offsets, column indices, weights)
    #[must_use]
    pub fn csr_components(&self) -> (&[u32], &[u32], &[f32]) {
        (&self.row_offsets, &self.col_indices, &self.edge_weights)
    }

    fn row_range(&self, node: NodeId) -> Result<(usize, usize)> {
        if (node.0 as usize) >= self.num_nodes {
            return Err(anyhow!("Node ID {} out of bounds", node.0));
        }

        let idx = node.0 as usize;
        Ok((self.row_offsets[idx] as usize, self.row_offsets[idx + 1] as usize))
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand undirected pairs into both arc orientations
pub(crate) fn mirror(edges: &[(u32, u32)]) -> (Vec<u32>, Vec<u32>) {
    let mut sources = Vec::with_capacity(edges.len() * 2);
    let mut targets = Vec::with_capacity(edges.len() * 2);
    for &(u, v) in edges {
        sources.extend([u, v]);
        targets.extend([v, u]);
    }
    (sources, targets)
}

/// Reverse CSR (offsets, sources) via counting sort over targets
fn transpose(num_nodes: usize, row_offsets: &[u32], col_indices: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let mut rev_row_offsets = vec![0_u32; num_nodes + 1];
    for &dst in col_indices {
        rev_row_offsets[dst as usize + 1] += 1;
    }
    for i in 0..num_nodes {
        rev_row_offsets[i + 1] += rev_row_offsets[i];
    }

    let mut cursor: Vec<u32> = rev_row_offsets[..num_nodes].to_vec();
    let mut rev_col_indices = vec![0_u32; col_indices.len()];
    for src in 0..num_nodes {
        let start = row_offsets[src] as usize;
        let end = row_offsets[src + 1] as usize;
        #[allow(clippy::cast_possible_truncation)] // num_nodes checked against u32 on build
        let src_u32 = src as u32;
        for &dst in &col_indices[start..end] {
            let slot = &mut cursor[dst as usize];
            rev_col_indices[*slot as usize] = src_u32;
            *slot += 1;
        }
    }

    (rev_row_offsets, rev_col_indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::new();
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.is_directed());
    }

    #[test]
    fn test_empty_with_isolated_nodes() {
        let graph = CsrGraph::empty(4, Direction::Undirected);
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.degrees(), vec![0, 0, 0, 0]);
        assert_eq!(graph.csr_components().0, &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_from_edge_list_simple() {
        let edges = vec![
            (NodeId(0), NodeId(1), 1.0),
            (NodeId(0), NodeId(2), 1.0),
            (NodeId(1), NodeId(2), 1.0),
        ];

        let graph = CsrGraph::from_edge_list(&edges).unwrap();

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 3);

        // Check CSR structure
        assert_eq!(graph.row_offsets, vec![0, 2, 3, 3]);
        assert_eq!(graph.col_indices, vec![1, 2, 2]);
        assert_eq!(graph.edge_weights, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_from_edge_list_empty() {
        let graph = CsrGraph::from_edge_list(&[]).unwrap();
        assert_eq!(graph.num_nodes(), 0);
    }

    #[test]
    fn test_outgoing_neighbors() {
        let edges = vec![(NodeId(0), NodeId(1), 1.0), (NodeId(0), NodeId(2), 2.0)];

        let graph = CsrGraph::from_edge_list(&edges).unwrap();

        let neighbors = graph.outgoing_neighbors(NodeId(0)).unwrap();
        assert_eq!(neighbors, &[1, 2]);

        let neighbors = graph.outgoing_neighbors(NodeId(1)).unwrap();
        let empty: &[u32] = &[];
        assert_eq!(neighbors, empty);

        assert!(graph.outgoing_neighbors(NodeId(3)).is_err());
    }

    #[test]
    fn test_reverse_csr_structure() {
        let edges = vec![
            (NodeId(0), NodeId(1), 1.0), // 0 → 1
            (NodeId(0), NodeId(2), 2.0), // 0 → 2
            (NodeId(1), NodeId(2), 3.0), // 1 → 2
        ];

        let graph = CsrGraph::from_edge_list(&edges).unwrap();

        // Node 0: no incoming arcs
        let empty: &[u32] = &[];
        assert_eq!(graph.incoming_neighbors(NodeId(0)).unwrap(), empty);

        // Node 1: incoming from 0
        assert_eq!(graph.incoming_neighbors(NodeId(1)).unwrap(), &[0]);

        // Node 2: incoming from 0 and 1, in source order
        assert_eq!(graph.incoming_neighbors(NodeId(2)).unwrap(), &[0, 1]);
    }

    #[test]
    fn test_reverse_csr_multi_edges() {
        let edges = vec![
            (NodeId(0), NodeId(1), 1.0),
            (NodeId(0), NodeId(1), 2.0), // Duplicate arc with different weight
            (NodeId(2), NodeId(1), 3.0),
        ];

        let graph = CsrGraph::from_edge_list(&edges).unwrap();

        let incoming = graph.incoming_neighbors(NodeId(1)).unwrap();
        assert_eq!(incoming.len(), 3);
        assert_eq!(incoming.iter().filter(|&&x| x == 0).count(), 2);
        assert_eq!(incoming.iter().filter(|&&x| x == 2).count(), 1);
    }

    #[test]
    fn test_from_arcs_keeps_isolated_tail() {
        let graph =
            CsrGraph::from_arcs(5, &[0, 1], &[1, 0], None, Direction::Undirected).unwrap();
        assert_eq!(graph.num_nodes(), 5);
        assert_eq!(graph.degrees(), vec![1, 1, 0, 0, 0]);
        assert_eq!(graph.edge_weights, vec![1.0, 1.0]);
    }

    #[test]
    fn test_from_arcs_rejects_bad_input() {
        assert!(CsrGraph::from_arcs(2, &[0], &[], None, Direction::Directed).is_err());
        assert!(CsrGraph::from_arcs(2, &[0], &[2], None, Direction::Directed).is_err());
        assert!(CsrGraph::from_arcs(2, &[0], &[1], Some(&[]), Direction::Directed).is_err());
    }

    #[test]
    fn test_undirected_requires_reverse_arcs() {
        // 0 → 1 alone is a directed arc, not an undirected edge
        let one_sided = CsrGraph::from_arcs(2, &[0], &[1], None, Direction::Undirected);
        assert!(one_sided.is_err());

        let directed = CsrGraph::from_arcs(2, &[0], &[1], None, Direction::Directed).unwrap();
        assert!(!directed.is_symmetric());

        // Parallel arcs are matched one for one
        let unbalanced =
            CsrGraph::from_arcs(2, &[0, 0, 1], &[1, 1, 0], None, Direction::Undirected);
        assert!(unbalanced.is_err());

        let parts = CsrGraph::from_csr_parts(
            3,
            vec![0, 1, 1, 1],
            vec![2],
            vec![1.0],
            Direction::Undirected,
        );
        assert!(parts.is_err());
    }

    #[test]
    fn test_self_loops_are_symmetric() {
        let graph = CsrGraph::from_undirected_edges(2, &[(0, 0), (0, 1)]).unwrap();
        assert!(graph.is_symmetric());
        assert_eq!(graph.degrees(), vec![3, 1]);

        let single = CsrGraph::from_arcs(1, &[0], &[0], None, Direction::Undirected).unwrap();
        assert!(single.is_symmetric());
    }

    #[test]
    fn test_from_undirected_edges_mirrors() {
        let graph = CsrGraph::from_undirected_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.outgoing_neighbors(NodeId(1)).unwrap(), &[0, 2]);
        assert_eq!(graph.degrees(), vec![1, 2, 1]);

        let edges: Vec<_> = graph.edges().map(|(u, v, _)| (u, v)).collect();
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_from_csr_parts_roundtrip() {
        let graph = CsrGraph::from_csr_parts(
            3,
            vec![0, 2, 3, 3],
            vec![1, 2, 2],
            vec![1.0, 2.0, 3.0],
            Direction::Directed,
        )
        .unwrap();

        let expected = CsrGraph::from_edge_list(&[
            (NodeId(0), NodeId(1), 1.0),
            (NodeId(0), NodeId(2), 2.0),
            (NodeId(1), NodeId(2), 3.0),
        ])
        .unwrap();

        assert_eq!(graph, expected);
        assert_eq!(graph.incoming_neighbors(NodeId(2)).unwrap(), &[0, 1]);
    }

    #[test]
    fn test_from_csr_parts_validation() {
        let dir = Direction::Directed;
        // wrong offset count
        assert!(CsrGraph::from_csr_parts(2, vec![0, 1], vec![1], vec![1.0], dir).is_err());
        // decreasing offsets
        assert!(CsrGraph::from_csr_parts(2, vec![0, 1, 0], vec![1], vec![1.0], dir).is_err());
        // last offset mismatch
        assert!(CsrGraph::from_csr_parts(2, vec![0, 1, 2], vec![1], vec![1.0], dir).is_err());
        // weight length mismatch
        assert!(CsrGraph::from_csr_parts(2, vec![0, 1, 1], vec![1], vec![], dir).is_err());
        // column out of range
        assert!(CsrGraph::from_csr_parts(2, vec![0, 1, 1], vec![7], vec![1.0], dir).is_err());
    }

    #[test]
    fn test_neighbors_with_weights() {
        let edges = vec![(NodeId(0), NodeId(1), 0.5), (NodeId(0), NodeId(2), 2.5)];
        let graph = CsrGraph::from_edge_list(&edges).unwrap();

        let pairs: Vec<_> = graph.neighbors_with_weights(NodeId(0)).unwrap().collect();
        assert_eq!(pairs, vec![(1, 0.5), (2, 2.5)]);
        assert_eq!(graph.degree(NodeId(0)).unwrap(), 2);
        assert!(graph.degree(NodeId(9)).is_err());
    }

    #[test]
    fn test_arcs_iterates_every_entry() {
        let edges = vec![(NodeId(2), NodeId(0), 1.0), (NodeId(0), NodeId(1), 4.0)];
        let graph = CsrGraph::from_edge_list(&edges).unwrap();

        let arcs: Vec<_> = graph.arcs().collect();
        assert_eq!(arcs, vec![(0, 1, 4.0), (2, 0, 1.0)]);
    }

    #[test]
    fn test_csr_components() {
        let edges = vec![(NodeId(0), NodeId(1), 1.0), (NodeId(0), NodeId(2), 2.0)];

        let graph = CsrGraph::from_edge_list(&edges).unwrap();
        let (row_offsets, col_indices, weights) = graph.csr_components();

        assert_eq!(row_offsets, &[0, 2, 2, 2]);
        assert_eq!(col_indices, &[1, 2]);
        assert_eq!(weights, &[1.0, 2.0]);
    }
}
