//! Undirected simple graph keyed by arbitrary hashable vertex identifiers.
//!
//! Vertices are mapped to dense indices in first-insertion order. Adjacency is stored per
//! index as an ordered neighbor set, so iteration over neighbors is deterministic and
//! parallel edges collapse into a single logical edge.

use rand::Rng;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

// ============================================================================
// Vertex keys
// ============================================================================

/// Bound satisfied by every type usable as a vertex identifier.
///
/// Identity is by equality; the position of a vertex in the graph is an internal detail.
pub trait VertexKey: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> VertexKey for T {}

// ============================================================================
// Graph
// ============================================================================

/// An undirected graph without self-loops or parallel edges.
///
/// Representation:
/// - `vertices[i]` is the vertex with index `i`, in first-insertion order.
/// - `index[v]` is the index of vertex `v`.
/// - `adj[i]` is the set of neighbor indices of vertex `i`.
/// - `edge_count` always equals half the sum of `adj[i].len()`.
#[derive(Clone, Debug)]
pub struct Graph<V: VertexKey> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adj: Vec<BTreeSet<usize>>,
    edge_count: usize,
}

impl<V: VertexKey> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey> Graph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            adj: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from a batch of edges, inserting vertices in first-occurrence order.
    ///
    /// Self-loops are skipped and repeated edges collapse, exactly as with [`Graph::add_edge`].
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Inserts `v` with an empty neighbor set if it is not present yet.
    ///
    /// Returns the dense index of `v`.
    pub fn add_vertex(&mut self, v: V) -> usize {
        if let Some(&i) = self.index.get(&v) {
            return i;
        }
        let i = self.vertices.len();
        self.index.insert(v.clone(), i);
        self.vertices.push(v);
        self.adj.push(BTreeSet::new());
        i
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// A self-loop (`u == v`) is silently dropped and does not insert the vertex either.
    /// Both endpoints are inserted if missing. Returns `true` if a new edge was stored.
    pub fn add_edge(&mut self, u: V, v: V) -> bool {
        if u == v {
            return false;
        }
        let i = self.add_vertex(u);
        let j = self.add_vertex(v);
        let inserted = self.adj[i].insert(j);
        self.adj[j].insert(i);
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    /// Returns all vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns the neighbors of `v` in insertion order; empty if `v` is unknown.
    pub fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.index
            .get(v)
            .into_iter()
            .flat_map(move |&i| self.adj[i].iter().map(move |&j| &self.vertices[j]))
    }

    /// Returns the number of neighbors of `v` (0 if `v` is unknown).
    #[inline]
    pub fn degree(&self, v: &V) -> usize {
        self.index.get(v).map_or(0, |&i| self.adj[i].len())
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns whether `v` is a vertex of the graph.
    #[inline]
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Returns whether the edge `{u, v}` exists.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        match (self.index.get(u), self.index.get(v)) {
            (Some(&i), Some(&j)) => self.adj[i].contains(&j),
            _ => false,
        }
    }

    /// Iterates over every edge exactly once, as `(earlier, later)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adj.iter().enumerate().flat_map(move |(i, nbrs)| {
            nbrs.range((i + 1)..)
                .map(move |&j| (&self.vertices[i], &self.vertices[j]))
        })
    }

    /// Returns the subgraph induced by `subset`.
    ///
    /// The result contains exactly the given vertices, in the given order (vertices unknown
    /// to `self` become isolated), and every edge of `self` whose endpoints both lie in the
    /// subset. `self` is left untouched.
    pub fn induced_subgraph<'a, I>(&self, subset: I) -> Graph<V>
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut sub = Graph::new();
        for v in subset {
            sub.add_vertex(v.clone());
        }

        for si in 0..sub.vertex_count() {
            let Some(&i) = self.index.get(&sub.vertices[si]) else {
                continue;
            };
            for &j in &self.adj[i] {
                if let Some(&sj) = sub.index.get(&self.vertices[j]) {
                    if sj > si {
                        sub.link(si, sj);
                    }
                }
            }
        }
        sub
    }

    // ------------------------------------------------------------------------
    // Index-level access
    // ------------------------------------------------------------------------

    /// Returns the dense index of `v`, if present.
    #[inline]
    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    /// Returns the vertex with dense index `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.vertex_count()`.
    #[inline]
    pub fn vertex(&self, i: usize) -> &V {
        &self.vertices[i]
    }

    /// Returns the neighbor indices of the vertex with index `i`, ascending.
    ///
    /// # Panics
    /// Panics if `i >= self.vertex_count()`.
    #[inline]
    pub fn neighbor_indices(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[i].iter().copied()
    }

    /// Returns the degree of the vertex with index `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.vertex_count()`.
    #[inline]
    pub fn degree_at(&self, i: usize) -> usize {
        self.adj[i].len()
    }

    /// Returns the maximum degree \(\Delta(G)\), or 0 for the empty graph.
    pub fn max_degree(&self) -> usize {
        self.adj.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    fn link(&mut self, i: usize, j: usize) {
        debug_assert!(i != j, "self-loop at index {i}");
        if self.adj[i].insert(j) {
            self.adj[j].insert(i);
            self.edge_count += 1;
        }
    }
}

impl Graph<usize> {
    /// Generates an Erdős–Rényi \(G(n, p)\) graph on vertices `0..n`.
    ///
    /// # Panics
    /// Panics if `p` is not in `[0, 1]`.
    pub fn random<R: Rng>(rng: &mut R, n: usize, p: f64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0, 1], got {p}");

        let mut graph = Self::with_capacity(n);
        for v in 0..n {
            graph.add_vertex(v);
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.random_bool(p) {
                    graph.link(i, j);
                }
            }
        }
        graph
    }
}

impl<V: VertexKey> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use std::collections::HashSet;

    fn triangle() -> Graph<i32> {
        Graph::from_edges([(1, 2), (2, 3), (1, 3)])
    }

    // -------------------------------------------------------------------------
    // Basic queries
    // -------------------------------------------------------------------------

    #[test]
    fn triangle_counts() {
        let g = triangle();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.max_degree(), 2);
    }

    #[test]
    fn triangle_neighbors() {
        let g = triangle();
        let nbrs: HashSet<i32> = g.neighbors(&1).copied().collect();
        assert_eq!(nbrs, HashSet::from([2, 3]));
    }

    #[test]
    fn unknown_vertex_has_no_neighbors() {
        let g = triangle();
        assert_eq!(g.neighbors(&42).count(), 0);
        assert_eq!(g.degree(&42), 0);
        assert!(!g.contains_vertex(&42));
        assert!(!g.has_edge(&1, &42));
    }

    #[test]
    fn vertices_keep_insertion_order() {
        let g = Graph::from_edges([(5, 3), (9, 5), (1, 3)]);
        assert_eq!(g.vertices(), &[5, 3, 9, 1]);
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g = Graph::new();
        assert_eq!(g.add_vertex("a"), 0);
        assert_eq!(g.add_vertex("b"), 1);
        assert_eq!(g.add_vertex("a"), 0);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.degree(&"a"), 0);
    }

    // -------------------------------------------------------------------------
    // Simple-graph invariants
    // -------------------------------------------------------------------------

    #[test]
    fn self_loop_is_a_no_op() {
        let mut g = triangle();
        let before: Vec<i32> = g.neighbors(&1).copied().collect();
        assert!(!g.add_edge(1, 1));
        let after: Vec<i32> = g.neighbors(&1).copied().collect();
        assert_eq!(before, after);
        assert_eq!(g.degree(&1), 2);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn self_loop_does_not_insert_vertex() {
        let mut g: Graph<i32> = Graph::new();
        g.add_edge(7, 7);
        assert!(g.is_empty());
    }

    #[test]
    fn parallel_edges_collapse() {
        let mut g = Graph::new();
        assert!(g.add_edge('a', 'b'));
        assert!(!g.add_edge('a', 'b'));
        assert!(!g.add_edge('b', 'a'));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(&'a'), 1);
        assert_eq!(g.degree(&'b'), 1);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let mut rng = XorShiftRng::seed_from_u64(0xA11CE);
        let g = Graph::random(&mut rng, 40, 0.2);
        for &u in g.vertices() {
            for &v in g.neighbors(&u) {
                assert!(g.has_edge(&v, &u), "edge ({u}, {v}) is not symmetric");
                assert_ne!(u, v, "self-loop at {u}");
            }
        }
    }

    #[test]
    fn handshaking_lemma_holds() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        for _ in 0..10 {
            let g = Graph::random(&mut rng, 32, 0.25);
            let sum_deg: usize = g.vertices().iter().map(|v| g.degree(v)).sum();
            assert_eq!(sum_deg, 2 * g.edge_count());
            assert_eq!(g.edges().count(), g.edge_count());
        }
    }

    #[test]
    fn edges_lists_each_edge_once() {
        let g = triangle();
        let edges: Vec<(i32, i32)> = g.edges().map(|(&u, &v)| (u, v)).collect();
        assert_eq!(edges, vec![(1, 2), (1, 3), (2, 3)]);
    }

    // -------------------------------------------------------------------------
    // Induced subgraphs
    // -------------------------------------------------------------------------

    #[test]
    fn induced_subgraph_of_triangle() {
        let g = triangle();
        let sub = g.induced_subgraph(&[1, 2]);
        assert_eq!(sub.vertex_count(), 2);
        assert_eq!(sub.edge_count(), 1);
        assert!(sub.neighbors(&1).any(|&v| v == 2));
        // The source is untouched.
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn induced_subgraph_keeps_subset_order_and_isolated_vertices() {
        let g = Graph::from_edges([(1, 2), (2, 3), (3, 4)]);
        let sub = g.induced_subgraph(&[4, 1, 3, 99]);
        assert_eq!(sub.vertices(), &[4, 1, 3, 99]);
        assert_eq!(sub.edge_count(), 1);
        assert!(sub.has_edge(&3, &4));
        assert_eq!(sub.degree(&1), 0);
        assert_eq!(sub.degree(&99), 0);
    }

    #[test]
    fn induced_subgraph_matches_edge_filter() {
        let mut rng = XorShiftRng::seed_from_u64(0x5EB);
        let g = Graph::random(&mut rng, 30, 0.3);
        let subset: Vec<usize> = (0..30).filter(|v| v % 3 != 0).collect();
        let sub = g.induced_subgraph(&subset);

        let expected = g
            .edges()
            .filter(|(u, v)| subset.contains(u) && subset.contains(v))
            .count();
        assert_eq!(sub.edge_count(), expected);
        for (u, v) in sub.edges() {
            assert!(g.has_edge(u, v));
        }
    }

    #[test]
    fn random_graph_extremes() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        assert_eq!(Graph::random(&mut rng, 10, 0.0).edge_count(), 0);
        assert_eq!(Graph::random(&mut rng, 10, 1.0).edge_count(), 45);
    }

    #[test]
    #[should_panic(expected = "p must be in [0, 1]")]
    fn random_rejects_probability_above_one() {
        let mut rng = XorShiftRng::seed_from_u64(1);
        let _ = Graph::random(&mut rng, 4, 1.5);
    }
}
