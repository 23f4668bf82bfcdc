//! Checks that a coloring is total and proper for a graph.

use crate::coloring::{Color, Coloring};
use crate::graph::{Graph, VertexKey};
use std::fmt::Debug;
use thiserror::Error;

// ============================================================================
// Public API
// ============================================================================

/// The first problem found in a coloring.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColoringViolation<V: Debug> {
    /// A vertex of the graph has no color.
    #[error("vertex {vertex:?} is uncolored")]
    Uncolored {
        /// The uncolored vertex.
        vertex: V,
    },
    /// Two adjacent vertices share a color.
    #[error("adjacent vertices {u:?} and {v:?} share color {color}")]
    Conflict {
        /// First endpoint.
        u: V,
        /// Second endpoint.
        v: V,
        /// The shared color.
        color: Color,
    },
    /// The coloring mentions a vertex that is not in the graph.
    #[error("vertex {vertex:?} is not part of the graph")]
    UnknownVertex {
        /// The stray vertex.
        vertex: V,
    },
}

/// Validates that `coloring` colors every vertex of `graph`, mentions no other vertex, and
/// gives adjacent vertices different colors.
///
/// Vertices are checked in insertion order and edges in [`Graph::edges`] order, so the
/// reported violation is deterministic.
///
/// # Errors
/// Returns the first violation found.
pub fn validate_coloring<V>(
    graph: &Graph<V>,
    coloring: &Coloring<V>,
) -> Result<(), ColoringViolation<V>>
where
    V: VertexKey + Debug,
{
    for v in graph.vertices() {
        if !coloring.contains(v) {
            return Err(ColoringViolation::Uncolored { vertex: v.clone() });
        }
    }

    for (v, _) in coloring.iter() {
        if !graph.contains_vertex(v) {
            return Err(ColoringViolation::UnknownVertex { vertex: v.clone() });
        }
    }

    for (u, v) in graph.edges() {
        let cu = coloring.get(u);
        if cu.is_some() && cu == coloring.get(v) {
            return Err(ColoringViolation::Conflict {
                u: u.clone(),
                v: v.clone(),
                color: cu.unwrap_or_default(),
            });
        }
    }

    Ok(())
}

/// Returns `true` if no edge joins two vertices of the same color.
///
/// Unlike [`validate_coloring`], a partial coloring is accepted.
pub fn is_proper<V: VertexKey>(graph: &Graph<V>, coloring: &Coloring<V>) -> bool {
    graph.edges().all(|(u, v)| match (coloring.get(u), coloring.get(v)) {
        (Some(a), Some(b)) => a != b,
        _ => true,
    })
}

// ============================================================================
// Tests
// ============================================================================
