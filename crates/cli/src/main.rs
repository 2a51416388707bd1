use std::error::Error;
use std::io::{stdout, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use girvan_newman::{partition, AdjacencyMatrix, Params};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

mod render;

#[derive(Debug, Parser)]
struct Cli {
    /// Edge-list input: node count, edge count, then one pair per edge.
    #[arg(long)]
    input: PathBuf,
    /// Stop once the smallest group has at most this many members.
    #[arg(long)]
    target_population: usize,
    /// Give up after this many iterations without progress.
    #[arg(long)]
    max_stalls: usize,
    #[arg(long)]
    log_level: Option<Level>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(level) = cli.log_level {
        let subscriber = FmtSubscriber::builder().with_max_level(level).with_span_events(FmtSpan::CLOSE).finish();
        subscriber.init();
    }

    let graph = common::io::read_edge_list(&cli.input)?;
    let matrix = AdjacencyMatrix::from_graph(&graph)?;

    let mut out = BufWriter::new(stdout().lock());
    render::write_graph(&mut out, &matrix)?;

    let params = Params { target_population: cli.target_population, max_stalls: cli.max_stalls };
    let communities = partition(matrix, params)?;

    render::write_removed_edges(&mut out, communities.removed_edges())?;
    render::write_groups(&mut out, communities.communities())?;
    render::write_graph(&mut out, communities.graph())?;
    Ok(())
}
