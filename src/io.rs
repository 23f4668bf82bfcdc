//! Edge-list loading, CSV export and plain-text reports.
//!
//! These collaborators sit outside the coloring core: they only build a [`Graph`] or consume
//! a [`Coloring`].

use crate::coloring::{Color, Coloring};
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexKey};
use std::fmt::{self, Display};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Vertex identifiers
// ============================================================================

/// A vertex token read from an edge list: an integer when it parses as one, text otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexId {
    /// Integer token.
    Int(i64),
    /// Any other token, verbatim.
    Text(String),
}

impl VertexId {
    /// Classifies a single token.
    pub fn parse_token(token: &str) -> Self {
        token
            .parse::<i64>()
            .map_or_else(|_| VertexId::Text(token.to_owned()), VertexId::Int)
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexId::Int(n) => write!(f, "{n}"),
            VertexId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for VertexId {
    fn from(n: i64) -> Self {
        VertexId::Int(n)
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        VertexId::Text(s.to_owned())
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Parses an edge list: one edge per line, endpoints separated by whitespace.
///
/// Rules:
/// - Lines with fewer than two tokens are skipped.
/// - Tokens after the second are ignored.
/// - Self-loops are dropped by the graph.
/// - Vertices are inserted in order of first occurrence.
pub fn parse_edge_list(text: &str) -> Graph<VertexId> {
    let mut graph = Graph::new();
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        if let (Some(u), Some(v)) = (tokens.next(), tokens.next()) {
            graph.add_edge(VertexId::parse_token(u), VertexId::parse_token(v));
        }
    }
    graph
}

/// Loads an edge list from a file.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read.
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<Graph<VertexId>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(parse_edge_list(&text))
}

// ============================================================================
// CSV export
// ============================================================================

/// Writes `coloring` as CSV with a `vertex,color` header, in assignment order.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_coloring_csv<V, W>(writer: W, coloring: &Coloring<V>) -> Result<()>
where
    V: VertexKey + Display,
    W: Write,
{
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["vertex", "color"])?;
    for (v, c) in coloring.iter() {
        out.write_record([v.to_string(), c.to_string()])?;
    }
    out.flush()?;
    Ok(())
}

/// Saves `coloring` as a CSV file.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn export_coloring<V>(path: impl AsRef<Path>, coloring: &Coloring<V>) -> Result<()>
where
    V: VertexKey + Display,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_coloring_csv(BufWriter::new(file), coloring)
}

// ============================================================================
// Text report
// ============================================================================

/// Everything printed in a coloring report.
#[derive(Clone, Debug)]
pub struct Report<'a, V: VertexKey> {
    /// Algorithm display name.
    pub algorithm: &'a str,
    /// Visitation order or tie-break label.
    pub setting: &'a str,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Largest color used.
    pub colors_used: Color,
    /// Time spent coloring.
    pub elapsed: Duration,
    /// The coloring itself.
    pub coloring: &'a Coloring<V>,
}

impl<V: VertexKey + Display> Report<'_, V> {
    /// Writes the report. The coloring is listed sorted by the vertex's text form.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<()> {
        writeln!(w, "Graph coloring report")?;
        writeln!(w, "=====================")?;
        writeln!(w)?;
        writeln!(w, "Algorithm: {}", self.algorithm)?;
        writeln!(w, "Strategy: {}", self.setting)?;
        writeln!(w, "Vertices: {}", self.vertex_count)?;
        writeln!(w, "Edges: {}", self.edge_count)?;
        writeln!(w, "Colors used: {}", self.colors_used)?;
        writeln!(w, "Elapsed (s): {:.6}", self.elapsed.as_secs_f64())?;
        writeln!(w)?;
        writeln!(w, "Coloring (vertex -> color):")?;
        for (v, c) in self.coloring.sorted_by_label() {
            writeln!(w, "{v}\t{c}")?;
        }
        w.flush()?;
        Ok(())
    }

    /// Saves the report to a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        self.write_to(BufWriter::new(file))
    }
}

// ============================================================================
// Tests
// ============================================================================
