use std::{path::PathBuf, time::Instant};

use clap::Parser;
use indicatif::ParallelProgressIterator;
use pareto_paths::{
    bi_criteria::{boa_star::BOAStar, ordering::QueueOrdering},
    graphs::{adjacency_list_graph::AdjacencyListGraph, graph_factory::GraphFactory},
    heuristics::shortest_path_heuristic::{ShortestPathHeuristic, DEFAULT_RELAXATION_FACTOR},
    read_graph_data,
    utility::get_progressbar_long_jobs,
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Times a batch of queries, answered in parallel without logging.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in .gr format carrying the first cost metric
    #[arg(long, requires = "second_gr")]
    first_gr: Option<PathBuf>,

    /// Infile in .gr format carrying the second cost metric
    #[arg(long, requires = "first_gr")]
    second_gr: Option<PathBuf>,

    /// Infile in .bincode format, written by gr_to_bincode
    #[arg(short = 'b', long)]
    graph_bincode: Option<PathBuf>,

    /// Infile with one source target pair per line
    #[arg(short, long)]
    queries: PathBuf,

    /// Epsilon applied to both criteria
    #[arg(short, long, default_value_t = 0.0)]
    eps: f64,

    /// Cost bound applied to both criteria
    #[arg(long)]
    bound: u32,

    /// Overrides the bound of the second criterion
    #[arg(long)]
    second_bound: Option<u32>,

    /// Order in which open labels are expanded
    #[arg(short, long, value_enum, default_value = "lexicographic")]
    ordering: QueueOrdering,

    /// Scaling applied to the heuristic lower bounds
    #[arg(long, default_value_t = DEFAULT_RELAXATION_FACTOR)]
    relaxation_factor: f64,
}

fn main() {
    let args = Args::parse();

    let data = match read_graph_data(
        args.first_gr.as_deref(),
        args.second_gr.as_deref(),
        args.graph_bincode.as_deref(),
    ) {
        Ok(data) => data,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };
    let queries = match GraphFactory::load_queries(&args.queries) {
        Ok(queries) => queries,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };
    if queries.is_empty() {
        println!("Nothing to benchmark, the query file is empty");
        return;
    }

    let graph = AdjacencyListGraph::new(data.number_of_vertices, &data.edges);
    let inverted_graph = AdjacencyListGraph::inverted(data.number_of_vertices, &data.edges);

    let eps = [args.eps, args.eps];
    let bounds = [args.bound, args.second_bound.unwrap_or(args.bound)];
    let boa_star = BOAStar::new(&graph, eps, bounds, args.ordering);

    let bar = get_progressbar_long_jobs("Benchmarking queries", queries.len() as u64);
    let (durations, solutions): (Vec<_>, Vec<_>) = queries
        .par_iter()
        .progress_with(bar)
        .map(|&(source, target)| {
            let heuristic = ShortestPathHeuristic::with_relaxation_factor(
                target,
                &inverted_graph,
                args.relaxation_factor,
            );

            let start = Instant::now();
            let outcome = boa_star.search(source, target, &heuristic);
            (start.elapsed(), outcome.solutions.len())
        })
        .unzip();

    let total: std::time::Duration = durations.iter().sum();
    let with_solution = solutions.iter().filter(|&&amount| amount > 0).count();

    println!("Answered {} queries, {} within the bounds", queries.len(), with_solution);
    println!("Average search duration was {:?}", total / queries.len() as u32);
    println!("Slowest search took {:?}", durations.iter().max().unwrap());
}
