//! First-fit greedy coloring with a configurable vertex visitation order.

use crate::coloring::{Color, Coloring, ColoringOutcome, FirstFit};
use crate::error::Error;
use crate::graph::{Graph, VertexKey};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

// ============================================================================
// Vertex order
// ============================================================================

/// Order in which the greedy colorer visits vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VertexOrder {
    /// Highest degree first; equal degrees keep insertion order.
    #[default]
    DegreeDescending,
    /// A uniformly random permutation.
    Random,
    /// The graph's insertion order, unchanged.
    Insertion,
}

impl VertexOrder {
    /// Returns all available orders.
    pub const fn all() -> &'static [VertexOrder] {
        &[
            VertexOrder::DegreeDescending,
            VertexOrder::Random,
            VertexOrder::Insertion,
        ]
    }

    /// Short label used in reports and on the command line.
    pub const fn label(self) -> &'static str {
        match self {
            VertexOrder::DegreeDescending => "degree_desc",
            VertexOrder::Random => "random",
            VertexOrder::Insertion => "as_loaded",
        }
    }
}

impl fmt::Display for VertexOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VertexOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degree_desc" | "degree-desc" => Ok(VertexOrder::DegreeDescending),
            "random" => Ok(VertexOrder::Random),
            "as_loaded" | "as-loaded" | "insertion" => Ok(VertexOrder::Insertion),
            _ => Err(Error::UnknownVertexOrder(s.to_owned())),
        }
    }
}

// ============================================================================
// Greedy colorer
// ============================================================================

/// Computes the visitation order as a list of vertex indices.
///
/// `rng` is only consulted for [`VertexOrder::Random`].
pub fn visitation_order<V: VertexKey, R: Rng>(
    graph: &Graph<V>,
    order: VertexOrder,
    rng: &mut R,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..graph.vertex_count()).collect();
    match order {
        // `sort_by_key` is stable, so ties keep insertion order.
        VertexOrder::DegreeDescending => indices.sort_by_key(|&i| Reverse(graph.degree_at(i))),
        VertexOrder::Random => indices.shuffle(rng),
        VertexOrder::Insertion => {}
    }
    indices
}

/// Colors `graph` greedily: each vertex, in the chosen order, receives the smallest color
/// not already used by one of its colored neighbors.
///
/// Every vertex is colored in a single pass without backtracking.
pub fn color_greedy<V: VertexKey, R: Rng>(
    graph: &Graph<V>,
    order: VertexOrder,
    rng: &mut R,
) -> ColoringOutcome<V> {
    let start = Instant::now();
    let n = graph.vertex_count();
    if n == 0 {
        return ColoringOutcome::empty();
    }

    let visit = visitation_order(graph, order, rng);
    let mut colors: Vec<Color> = vec![0; n];
    let mut first_fit = FirstFit::new(graph.max_degree());

    for &v in &visit {
        let c = first_fit.pick(graph.neighbor_indices(v).map(|u| colors[u]));
        colors[v] = c;
    }

    let coloring = Coloring::from_assignment(graph, &visit, &colors);
    ColoringOutcome::new(coloring, start.elapsed())
}

// ============================================================================
// Tests
// ============================================================================
