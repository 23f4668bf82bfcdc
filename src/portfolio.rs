//! Portfolio comparison: run several configurations on one graph and rank them.
//!
//! Each configuration is an independent, sequential coloring run. The runs share the graph
//! read-only and are spread over the rayon thread pool; nothing is shared between them.

use crate::coloring::ColoringOutcome;
use crate::graph::{Graph, VertexKey};
use crate::strategy::{color, Algorithm, ColoringConfig};
use rayon::prelude::*;
use tracing::info;

// ============================================================================
// Portfolio configuration
// ============================================================================

/// Builds one configuration per algorithm/setting combination.
///
/// With a base seed, each configuration receives its own seed derived from it so the whole
/// portfolio is reproducible.
pub fn default_portfolio(base_seed: Option<u64>) -> Vec<ColoringConfig> {
    Algorithm::all()
        .into_iter()
        .enumerate()
        .map(|(i, algorithm)| ColoringConfig {
            algorithm,
            seed: base_seed.map(|s| splitmix64(s ^ i as u64)),
        })
        .collect()
}

// ============================================================================
// Running
// ============================================================================

/// One ranked result of a portfolio run.
#[derive(Clone, Debug)]
pub struct PortfolioEntry<V: VertexKey> {
    /// The configuration that produced this result.
    pub config: ColoringConfig,
    /// The coloring outcome.
    pub outcome: ColoringOutcome<V>,
}

/// Runs every configuration on `graph` in parallel.
///
/// Results are sorted by `colors_used`, ascending; equal counts keep the order of `configs`.
pub fn run_portfolio<V>(graph: &Graph<V>, configs: &[ColoringConfig]) -> Vec<PortfolioEntry<V>>
where
    V: VertexKey + Send + Sync,
{
    info!(
        configurations = configs.len(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "running portfolio"
    );

    let mut entries: Vec<PortfolioEntry<V>> = configs
        .par_iter()
        .map(|config| PortfolioEntry {
            config: *config,
            outcome: color(graph, config),
        })
        .collect();

    // `sort_by_key` is stable, so equal color counts keep the configuration order.
    entries.sort_by_key(|e| e.outcome.colors_used);
    entries
}

/// Returns the entry using the fewest colors, if any configuration ran.
pub fn best<V: VertexKey>(entries: &[PortfolioEntry<V>]) -> Option<&PortfolioEntry<V>> {
    entries.iter().min_by_key(|e| e.outcome.colors_used)
}

/// SplitMix64 mixer for deriving per-configuration seeds from a base seed.
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_coloring;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn splitmix64_is_deterministic() {
        assert_eq!(splitmix64(0), splitmix64(0));
        assert_ne!(splitmix64(0), splitmix64(1));
    }

    #[test]
    fn default_portfolio_covers_every_algorithm() {
        let configs = default_portfolio(None);
        assert_eq!(configs.len(), Algorithm::all().len());
        assert!(configs.iter().all(|c| c.seed.is_none()));

        let seeded = default_portfolio(Some(7));
        let mut seeds: Vec<u64> = seeded.iter().filter_map(|c| c.seed).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), seeded.len(), "per-configuration seeds should differ");
    }

    #[test]
    fn portfolio_results_are_sorted_and_valid() {
        let mut rng = XorShiftRng::seed_from_u64(0x1507);
        let g = Graph::random(&mut rng, 80, 0.1);
        let entries = run_portfolio(&g, &default_portfolio(Some(11)));

        assert_eq!(entries.len(), Algorithm::all().len());
        for pair in entries.windows(2) {
            assert!(pair[0].outcome.colors_used <= pair[1].outcome.colors_used);
        }
        for e in &entries {
            validate_coloring(&g, &e.outcome.coloring).unwrap();
        }
        let winner = best(&entries).unwrap();
        assert_eq!(winner.outcome.colors_used, entries[0].outcome.colors_used);
    }

    #[test]
    fn seeded_portfolio_is_reproducible() {
        let mut rng = XorShiftRng::seed_from_u64(0xBEEF);
        let g = Graph::random(&mut rng, 50, 0.2);
        let configs = default_portfolio(Some(99));
        let a = run_portfolio(&g, &configs);
        let b = run_portfolio(&g, &configs);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.config, y.config);
            assert_eq!(x.outcome.coloring, y.outcome.coloring);
        }
    }

    #[test]
    fn empty_portfolio_has_no_best() {
        let g: Graph<u8> = Graph::new();
        let entries = run_portfolio(&g, &[]);
        assert!(entries.is_empty());
        assert!(best(&entries).is_none());
    }
}
