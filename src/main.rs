use std::path::PathBuf;

use anyhow::{Context, Result};
use chromatic::dsatur::TieBreak;
use chromatic::greedy::VertexOrder;
use chromatic::io::{export_coloring, load_edge_list, Report};
use chromatic::portfolio::{best, default_portfolio, run_portfolio};
use chromatic::strategy::{color, Algorithm, ColoringConfig};
use chromatic::validate::validate_coloring;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chromatic")]
#[command(about = "Heuristic vertex coloring of edge-list graphs", long_about = None)]
struct Cli {
    /// Edge-list file: one `u v` pair per line
    graph: PathBuf,

    /// Coloring heuristic
    #[arg(value_enum, default_value_t = AlgorithmArg::Greedy)]
    algorithm: AlgorithmArg,

    /// Visitation order for the greedy colorer
    #[arg(long, value_enum, default_value_t = OrderArg::DegreeDesc)]
    order: OrderArg,

    /// Tie-break rule for DSATUR
    #[arg(long, value_enum, default_value_t = TieBreakArg::Degree)]
    tie_break: TieBreakArg,

    /// Deterministic seed for the random order / random tie-break settings
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the `vertex,color` CSV
    #[arg(short, long, default_value = "coloring.csv")]
    output: PathBuf,

    /// Also write a plain-text report to this path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Run every algorithm/setting in parallel and print a ranking instead
    #[arg(long)]
    compare: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Greedy,
    Dsatur,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    DegreeDesc,
    Random,
    AsLoaded,
}

#[derive(Clone, Copy, ValueEnum)]
enum TieBreakArg {
    Degree,
    Random,
}

impl Cli {
    fn algorithm(&self) -> Algorithm {
        match self.algorithm {
            AlgorithmArg::Greedy => Algorithm::Greedy(match self.order {
                OrderArg::DegreeDesc => VertexOrder::DegreeDescending,
                OrderArg::Random => VertexOrder::Random,
                OrderArg::AsLoaded => VertexOrder::Insertion,
            }),
            AlgorithmArg::Dsatur => Algorithm::Dsatur(match self.tie_break {
                TieBreakArg::Degree => TieBreak::HighestDegree,
                TieBreakArg::Random => TieBreak::Random,
            }),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    info!("Loading graph from {}", cli.graph.display());
    let graph = load_edge_list(&cli.graph)?;

    if cli.compare {
        let entries = run_portfolio(&graph, &default_portfolio(cli.seed));
        println!("n={}, m={}", graph.vertex_count(), graph.edge_count());
        println!("{:<8} {:<12} {:>7} {:>12}", "algo", "setting", "colors", "time (s)");
        for e in &entries {
            println!(
                "{:<8} {:<12} {:>7} {:>12.6}",
                e.config.algorithm.name(),
                e.config.algorithm.setting(),
                e.outcome.colors_used,
                e.outcome.elapsed.as_secs_f64()
            );
        }
        if let Some(winner) = best(&entries) {
            println!(
                "Best: {} with {} colors",
                winner.config.algorithm, winner.outcome.colors_used
            );
        }
        return Ok(());
    }

    let mut config = ColoringConfig::new(cli.algorithm());
    config.seed = cli.seed;
    let outcome = color(&graph, &config);
    validate_coloring(&graph, &outcome.coloring).context("heuristic produced an invalid coloring")?;

    println!(
        "n={}, m={}, colors={}, time={:.6}s",
        graph.vertex_count(),
        graph.edge_count(),
        outcome.colors_used,
        outcome.elapsed.as_secs_f64()
    );

    export_coloring(&cli.output, &outcome.coloring)?;
    println!("Saved to {}", cli.output.display());

    if let Some(path) = &cli.report {
        Report {
            algorithm: config.algorithm.name(),
            setting: config.algorithm.setting(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            colors_used: outcome.colors_used,
            elapsed: outcome.elapsed,
            coloring: &outcome.coloring,
        }
        .save(path)?;
        info!("Report written to {}", path.display());
    }

    Ok(())
}
