//! Algorithm selection and the single `color` entry point.

use crate::coloring::ColoringOutcome;
use crate::dsatur::{color_dsatur, TieBreak};
use crate::error::Error;
use crate::graph::{Graph, VertexKey};
use crate::greedy::{color_greedy, VertexOrder};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// ============================================================================
// Algorithm
// ============================================================================

/// A coloring heuristic together with its setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-fit greedy over the given visitation order.
    Greedy(VertexOrder),
    /// Saturation-degree ordering with the given tie-break rule.
    Dsatur(TieBreak),
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Greedy(VertexOrder::default())
    }
}

impl Algorithm {
    /// Every algorithm/setting combination.
    pub fn all() -> Vec<Algorithm> {
        VertexOrder::all()
            .iter()
            .map(|&o| Algorithm::Greedy(o))
            .chain(TieBreak::all().iter().map(|&t| Algorithm::Dsatur(t)))
            .collect()
    }

    /// Display name of the heuristic.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Greedy(_) => "Greedy",
            Algorithm::Dsatur(_) => "DSATUR",
        }
    }

    /// Label of the visitation order or tie-break rule.
    pub const fn setting(self) -> &'static str {
        match self {
            Algorithm::Greedy(order) => order.label(),
            Algorithm::Dsatur(tie_break) => tie_break.label(),
        }
    }

    /// Whether the outcome depends on the random source.
    pub const fn is_randomized(self) -> bool {
        matches!(
            self,
            Algorithm::Greedy(VertexOrder::Random) | Algorithm::Dsatur(TieBreak::Random)
        )
    }

    /// Runs the heuristic with a caller-provided random source.
    pub fn run<V: VertexKey, R: Rng>(self, graph: &Graph<V>, rng: &mut R) -> ColoringOutcome<V> {
        match self {
            Algorithm::Greedy(order) => color_greedy(graph, order, rng),
            Algorithm::Dsatur(tie_break) => color_dsatur(graph, tie_break, rng),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.setting())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parses `greedy`, `dsatur`, or `name:setting` such as `greedy:random`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, setting) = match s.split_once(':') {
            Some((name, setting)) => (name, Some(setting)),
            None => (s, None),
        };
        match name.to_ascii_lowercase().as_str() {
            "greedy" => Ok(Algorithm::Greedy(
                setting.map(str::parse).transpose()?.unwrap_or_default(),
            )),
            "dsatur" => Ok(Algorithm::Dsatur(
                setting.map(str::parse).transpose()?.unwrap_or_default(),
            )),
            _ => Err(Error::UnknownAlgorithm(name.to_owned())),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one coloring run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColoringConfig {
    /// Heuristic and setting.
    pub algorithm: Algorithm,
    /// Optional deterministic seed for the randomized settings.
    ///
    /// `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl ColoringConfig {
    /// Creates an unseeded configuration.
    pub const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            seed: None,
        }
    }

    /// Returns a copy with the given seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Colors `graph` according to `config`.
///
/// Never fails: every graph, including the empty one, yields an outcome.
pub fn color<V: VertexKey>(graph: &Graph<V>, config: &ColoringConfig) -> ColoringOutcome<V> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = SmallRng::seed_from_u64(seed);
    let outcome = config.algorithm.run(graph, &mut rng);
    debug!(
        algorithm = %config.algorithm,
        seed,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        colors_used = outcome.colors_used,
        elapsed_us = outcome.elapsed.as_micros() as u64,
        "coloring finished"
    );
    outcome
}

// ============================================================================
// Tests
// ============================================================================
