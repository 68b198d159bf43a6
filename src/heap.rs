//! Indexed binary max-heap over dense vertex ids
//!
//! Priority structure used by the degree-sequence realizer: each vertex
//! `0..capacity` is either absent or present with a `usize` priority (its
//! residual degree). Supports extract-max, arbitrary-key decrease and membership
//! checks in O(log n) / O(1).
//!
//! Ties are broken by heap position, which depends only on the sequence of
//! operations, so a run is deterministic.

/// Indexed binary max-heap keyed by vertex id
#[derive(Debug, Clone)]
pub struct IndexedMaxHeap {
    /// Heap-ordered vertex ids
    heap: Vec<u32>,
    /// `position[v]` is the index of `v` in `heap`, if present
    position: Vec<Option<usize>>,
    /// Current priority of each vertex (meaningful only when present)
    priority: Vec<usize>,
}

impl IndexedMaxHeap {
    /// Create an empty heap able to hold vertices `0..capacity`
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
            priority: vec![0; capacity],
        }
    }

    /// Build a heap holding every vertex `i` with priority `priorities[i]`
    ///
    /// Uses bottom-up heapify (O(n)).
    #[must_use]
    pub fn from_priorities(priorities: &[usize]) -> Self {
        #[allow(clippy::cast_possible_truncation)] // callers bound n by the u32 index space
        let heap: Vec<u32> = (0..priorities.len()).map(|v| v as u32).collect();
        let position = (0..priorities.len()).map(Some).collect();

        let mut result = Self {
            heap,
            position,
            priority: priorities.to_vec(),
        };

        for idx in (0..result.heap.len() / 2).rev() {
            result.sift_down(idx);
        }

        result
    }

    /// Number of vertices currently in the heap
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when no vertex is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// True if `vertex` is currently in the heap
    #[must_use]
    pub fn contains(&self, vertex: u32) -> bool {
        self.position
            .get(vertex as usize)
            .is_some_and(Option::is_some)
    }

    /// Priority of `vertex`, if present
    #[must_use]
    pub fn priority(&self, vertex: u32) -> Option<usize> {
        if self.contains(vertex) {
            Some(self.priority[vertex as usize])
        } else {
            None
        }
    }

    /// Highest-priority vertex without removing it
    #[must_use]
    pub fn peek_max(&self) -> Option<(u32, usize)> {
        self.heap
            .first()
            .map(|&v| (v, self.priority[v as usize]))
    }

    /// Insert `vertex` with `priority`
    ///
    /// Returns `false` (and changes nothing) if the vertex is out of range or
    /// already present.
    pub fn push(&mut self, vertex: u32, priority: usize) -> bool {
        let idx = vertex as usize;
        if idx >= self.position.len() || self.position[idx].is_some() {
            return false;
        }

        self.priority[idx] = priority;
        self.heap.push(vertex);
        let last = self.heap.len() - 1;
        self.position[idx] = Some(last);
        self.sift_up(last);
        true
    }

    /// Remove and return the highest-priority vertex
    pub fn pop_max(&mut self) -> Option<(u32, usize)> {
        let top = *self.heap.first()?;
        let last = self.heap.len() - 1;
        self.swap(0, last);
        self.heap.pop();
        self.position[top as usize] = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((top, self.priority[top as usize]))
    }

    /// Lower the priority of a present vertex
    ///
    /// Returns `false` if the vertex is absent or `priority` is larger than
    /// its current priority.
    pub fn decrease_key(&mut self, vertex: u32, priority: usize) -> bool {
        let Some(pos) = self.position.get(vertex as usize).copied().flatten() else {
            return false;
        };
        if priority > self.priority[vertex as usize] {
            return false;
        }

        self.priority[vertex as usize] = priority;
        self.sift_down(pos);
        true
    }

    fn key(&self, pos: usize) -> usize {
        self.priority[self.heap[pos] as usize]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a] as usize] = Some(a);
        self.position[self.heap[b] as usize] = Some(b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.key(pos) <= self.key(parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut largest = pos;

            if left < len && self.key(left) > self.key(largest) {
                largest = left;
            }
            if right < len && self.key(right) > self.key(largest) {
                largest = right;
            }
            if largest == pos {
                break;
            }

            self.swap(pos, largest);
            pos = largest;
        }
    }
}
