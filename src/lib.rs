//! # Chromatic
//!
//! Fast heuristic vertex coloring for undirected graphs.
//!
//! This crate provides:
//! - A simple-graph adjacency structure keyed by any hashable vertex type, with stable
//!   insertion order and induced subgraphs.
//! - A **first-fit greedy** colorer with degree-descending, random or insertion visitation order.
//! - A **DSATUR** colorer with incremental saturation bookkeeping and configurable tie-breaking.
//! - Validation of colorings, a parallel portfolio comparison, and edge-list / CSV / report I/O.
//!
//! Colorings are proper but not necessarily minimum.
//!
//! ## Quick Start
//!
//! ```
//! use chromatic::prelude::*;
//!
//! let graph = Graph::from_edges([(1, 2), (2, 3), (1, 3)]);
//! let config = ColoringConfig::new(Algorithm::Dsatur(TieBreak::HighestDegree));
//! let outcome = color(&graph, &config);
//!
//! assert_eq!(outcome.colors_used, 3);
//! assert!(validate_coloring(&graph, &outcome.coloring).is_ok());
//! ```
//!
//! ## Reproducible randomized runs
//!
//! ```
//! use chromatic::prelude::*;
//!
//! let graph = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]);
//! let config = ColoringConfig::new(Algorithm::Greedy(VertexOrder::Random)).with_seed(7);
//!
//! assert_eq!(color(&graph, &config).coloring, color(&graph, &config).coloring);
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Graph structure and queries.
//! - [`coloring`]: Coloring result types.
//! - [`greedy`]: First-fit greedy colorer.
//! - [`dsatur`]: DSATUR colorer.
//! - [`strategy`]: Algorithm selection and the `color` entry point.
//! - [`validate`]: Proper/total coloring checks.
//! - [`portfolio`]: Parallel comparison of several configurations.
//! - [`io`]: Edge-list loader, CSV exporter and text report writer.
//!
//! ## Performance Notes
//!
//! - Greedy runs in \(O(n \log n + m)\).
//! - DSATUR scans the uncolored vertices on every step, \(O(n^2 + m)\) overall.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)] // LaTeX-style notation in docs
#![allow(clippy::multiple_crate_versions)] // Cargo.lock management is external

pub mod coloring;
pub mod dsatur;
pub mod error;
pub mod graph;
pub mod greedy;
pub mod io;
pub mod portfolio;
pub mod strategy;
pub mod validate;

pub use error::{Error, Result};

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::coloring::{Color, Coloring, ColoringOutcome};
    pub use crate::dsatur::TieBreak;
    pub use crate::graph::{Graph, VertexKey};
    pub use crate::greedy::VertexOrder;
    pub use crate::io::{load_edge_list, parse_edge_list, VertexId};
    pub use crate::portfolio::{default_portfolio, run_portfolio};
    pub use crate::strategy::{color, Algorithm, ColoringConfig};
    pub use crate::validate::{validate_coloring, ColoringViolation};
}
