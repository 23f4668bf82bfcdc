//! DSATUR: colors the most saturated vertex next.
//!
//! The saturation degree of an uncolored vertex is the number of *distinct* colors already
//! present among its neighbors. Bookkeeping is updated incrementally as each vertex is
//! colored; selection is a linear scan over the uncolored vertices, which keeps ties in
//! insertion order and gives \(O(n^2 + m)\) overall.

use crate::coloring::{Color, Coloring, ColoringOutcome, FirstFit};
use crate::error::Error;
use crate::graph::{Graph, VertexKey};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

// ============================================================================
// Tie-break rule
// ============================================================================

/// How DSATUR chooses among uncolored vertices sharing the maximum saturation degree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Highest static degree wins; remaining ties go to the earliest inserted vertex.
    #[default]
    HighestDegree,
    /// Uniformly random among the tied candidates.
    Random,
}

impl TieBreak {
    /// Returns all available rules.
    pub const fn all() -> &'static [TieBreak] {
        &[TieBreak::HighestDegree, TieBreak::Random]
    }

    /// Short label used in reports and on the command line.
    pub const fn label(self) -> &'static str {
        match self {
            TieBreak::HighestDegree => "degree_desc",
            TieBreak::Random => "random",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degree_desc" | "degree-desc" | "degree" => Ok(TieBreak::HighestDegree),
            "random" => Ok(TieBreak::Random),
            _ => Err(Error::UnknownTieBreak(s.to_owned())),
        }
    }
}

// ============================================================================
// Saturation bookkeeping
// ============================================================================

/// Per-run state. Index `i` refers to the graph's `i`-th vertex.
struct Saturation {
    /// Assigned color, 0 while uncolored.
    color: Vec<Color>,
    /// Distinct colors among the colored neighbors of each vertex.
    neighbor_colors: Vec<HashSet<Color>>,
    /// Static degree, fixed for the whole run.
    degree: Vec<usize>,
    /// Vertices still uncolored.
    remaining: usize,
}

impl Saturation {
    fn new<V: VertexKey>(graph: &Graph<V>) -> Self {
        let n = graph.vertex_count();
        Self {
            color: vec![0; n],
            neighbor_colors: vec![HashSet::new(); n],
            degree: (0..n).map(|i| graph.degree_at(i)).collect(),
            remaining: n,
        }
    }

    #[inline]
    fn saturation(&self, v: usize) -> usize {
        self.neighbor_colors[v].len()
    }

    #[inline]
    fn is_colored(&self, v: usize) -> bool {
        self.color[v] != 0
    }

    /// Colors `v` with `c` and propagates `c` to its uncolored neighbors.
    fn assign<V: VertexKey>(&mut self, graph: &Graph<V>, v: usize, c: Color) {
        debug_assert!(!self.is_colored(v), "vertex index {v} colored twice");
        self.color[v] = c;
        self.remaining -= 1;
        for u in graph.neighbor_indices(v) {
            if !self.is_colored(u) {
                // A set insert ignores colors the neighbor has already seen.
                self.neighbor_colors[u].insert(c);
            }
        }
    }

    /// Vertex of maximum static degree; the earliest one on ties.
    fn seed_vertex(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for v in 0..self.degree.len() {
            if best.map_or(true, |b| self.degree[v] > self.degree[b]) {
                best = Some(v);
            }
        }
        best
    }

    /// Picks the next vertex to color, or `None` once everything is colored.
    fn select<R: Rng>(&self, tie_break: TieBreak, rng: &mut R) -> Option<usize> {
        match tie_break {
            TieBreak::HighestDegree => {
                let mut best: Option<(usize, usize, usize)> = None;
                for v in (0..self.color.len()).filter(|&v| !self.is_colored(v)) {
                    let key = (self.saturation(v), self.degree[v]);
                    if best.map_or(true, |(s, d, _)| key > (s, d)) {
                        best = Some((key.0, key.1, v));
                    }
                }
                best.map(|(_, _, v)| v)
            }
            TieBreak::Random => {
                let mut max_sat = 0;
                let mut candidates: Vec<usize> = Vec::new();
                for v in (0..self.color.len()).filter(|&v| !self.is_colored(v)) {
                    let s = self.saturation(v);
                    if candidates.is_empty() || s > max_sat {
                        max_sat = s;
                        candidates.clear();
                        candidates.push(v);
                    } else if s == max_sat {
                        candidates.push(v);
                    }
                }
                match candidates.len() {
                    0 => None,
                    1 => Some(candidates[0]),
                    len => Some(candidates[rng.random_range(0..len)]),
                }
            }
        }
    }
}

// ============================================================================
// DSATUR colorer
// ============================================================================

/// Colors `graph` with DSATUR.
///
/// The first vertex is the one of maximum degree and receives color 1. Afterwards the
/// uncolored vertex with the most distinct neighbor colors is colored next, with ties
/// resolved by `tie_break`, always taking the smallest color its neighbors do not use.
/// `rng` is only consulted for [`TieBreak::Random`].
pub fn color_dsatur<V: VertexKey, R: Rng>(
    graph: &Graph<V>,
    tie_break: TieBreak,
    rng: &mut R,
) -> ColoringOutcome<V> {
    let start = Instant::now();
    let mut state = Saturation::new(graph);
    let Some(seed) = state.seed_vertex() else {
        return ColoringOutcome::empty();
    };

    let mut order = Vec::with_capacity(graph.vertex_count());
    state.assign(graph, seed, 1);
    order.push(seed);

    let mut first_fit = FirstFit::new(graph.max_degree());
    while state.remaining > 0 {
        let Some(v) = state.select(tie_break, rng) else {
            break;
        };
        let c = first_fit.pick(state.neighbor_colors[v].iter().copied());
        state.assign(graph, v, c);
        order.push(v);
    }

    let coloring = Coloring::from_assignment(graph, &order, &state.color);
    ColoringOutcome::new(coloring, start.elapsed())
}

// ============================================================================
// Tests
// ============================================================================
