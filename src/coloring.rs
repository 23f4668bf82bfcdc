//! Coloring result types and the first-fit color picker shared by both heuristics.

use crate::graph::{Graph, VertexKey};
use std::collections::HashMap;
use std::fmt::Display;
use std::time::Duration;

/// A color label. Valid colors start at 1; 0 marks "uncolored" in index-level buffers.
pub type Color = u32;

// ============================================================================
// Coloring
// ============================================================================

/// A mapping from vertex to color.
///
/// Entries are kept in the order in which vertices were colored.
#[derive(Clone, Debug)]
pub struct Coloring<V: VertexKey> {
    entries: Vec<(V, Color)>,
    index: HashMap<V, usize>,
}

impl<V: VertexKey> Default for Coloring<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey> PartialEq for Coloring<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: VertexKey> Eq for Coloring<V> {}

impl<V: VertexKey> Coloring<V> {
    /// Creates an empty coloring.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a coloring of `graph` from index-level buffers.
    ///
    /// `order` lists vertex indices in assignment order; `colors[i]` is the color of index `i`.
    pub(crate) fn from_assignment(graph: &Graph<V>, order: &[usize], colors: &[Color]) -> Self {
        let mut coloring = Self {
            entries: Vec::with_capacity(order.len()),
            index: HashMap::with_capacity(order.len()),
        };
        for &i in order {
            debug_assert!(colors[i] > 0, "vertex index {i} left uncolored");
            coloring.insert(graph.vertex(i).clone(), colors[i]);
        }
        coloring
    }

    /// Assigns `color` to `v`, replacing any previous color.
    ///
    /// # Panics
    /// Panics if `color` is 0.
    pub fn insert(&mut self, v: V, color: Color) {
        assert!(color > 0, "colors are positive, got 0");
        if let Some(&pos) = self.index.get(&v) {
            self.entries[pos].1 = color;
            return;
        }
        self.index.insert(v.clone(), self.entries.len());
        self.entries.push((v, color));
    }

    /// Returns the color of `v`, if assigned.
    #[inline]
    pub fn get(&self, v: &V) -> Option<Color> {
        self.index.get(v).map(|&pos| self.entries[pos].1)
    }

    /// Returns whether `v` has a color.
    #[inline]
    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Returns the number of colored vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no vertex is colored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(vertex, color)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Color)> + '_ {
        self.entries.iter().map(|(v, c)| (v, *c))
    }

    /// Returns the largest color present, or 0 for an empty coloring.
    pub fn colors_used(&self) -> Color {
        self.entries.iter().map(|&(_, c)| c).max().unwrap_or(0)
    }

    /// Groups vertices by color: element `c - 1` holds the vertices colored `c`.
    pub fn color_classes(&self) -> Vec<Vec<&V>> {
        let mut classes = vec![Vec::new(); self.colors_used() as usize];
        for (v, c) in &self.entries {
            classes[(*c - 1) as usize].push(v);
        }
        classes
    }

    /// Returns the entries sorted by the textual representation of the vertex.
    pub fn sorted_by_label(&self) -> Vec<(&V, Color)>
    where
        V: Display,
    {
        let mut rows: Vec<(String, &V, Color)> = self
            .entries
            .iter()
            .map(|(v, c)| (v.to_string(), v, *c))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows.into_iter().map(|(_, v, c)| (v, c)).collect()
    }
}

// ============================================================================
// ColoringOutcome
// ============================================================================

/// The value returned by every coloring run.
#[derive(Clone, Debug)]
pub struct ColoringOutcome<V: VertexKey> {
    /// Vertex to color mapping.
    pub coloring: Coloring<V>,
    /// Largest color assigned (0 for the empty graph).
    pub colors_used: Color,
    /// Wall-clock time spent in the algorithm. Diagnostic only.
    pub elapsed: Duration,
}

impl<V: VertexKey> ColoringOutcome<V> {
    pub(crate) fn new(coloring: Coloring<V>, elapsed: Duration) -> Self {
        let colors_used = coloring.colors_used();
        Self {
            coloring,
            colors_used,
            elapsed,
        }
    }

    /// Outcome of coloring a graph without vertices.
    pub(crate) fn empty() -> Self {
        Self::new(Coloring::new(), Duration::ZERO)
    }
}

// ============================================================================
// First-fit
// ============================================================================

/// Scratch buffer for "smallest positive color not used by any neighbor".
///
/// Marks are stamped with a generation counter, so the buffer never needs clearing between
/// vertices. A vertex of degree `d` always receives a color `<= d + 1`.
#[derive(Clone, Debug)]
pub(crate) struct FirstFit {
    marks: Vec<u32>,
    stamp: u32,
}

impl FirstFit {
    /// Creates a picker able to handle vertices of degree up to `max_degree`.
    pub(crate) fn new(max_degree: usize) -> Self {
        Self {
            marks: vec![0; max_degree + 2],
            stamp: 0,
        }
    }

    /// Returns the smallest color in `1..` absent from `used`. Zeros in `used` are ignored.
    pub(crate) fn pick<I>(&mut self, used: I) -> Color
    where
        I: IntoIterator<Item = Color>,
    {
        self.stamp = self.stamp.wrapping_add(1);
        if self.stamp == 0 {
            self.marks.iter_mut().for_each(|m| *m = 0);
            self.stamp = 1;
        }

        for c in used {
            let slot = c as usize;
            if c != 0 && slot < self.marks.len() {
                self.marks[slot] = self.stamp;
            }
        }

        let mut c = 1;
        while (c as usize) < self.marks.len() && self.marks[c as usize] == self.stamp {
            c += 1;
        }
        c
    }
}

// ============================================================================
// Tests
// ============================================================================
