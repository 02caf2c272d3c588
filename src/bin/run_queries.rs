use std::path::PathBuf;

use clap::Parser;
use indicatif::ProgressIterator;
use pareto_paths::{
    bi_criteria::{boa_star::BOAStar, ordering::QueueOrdering},
    graphs::{adjacency_list_graph::AdjacencyListGraph, graph_factory::GraphFactory, Vertex},
    heuristics::shortest_path_heuristic::{ShortestPathHeuristic, DEFAULT_RELAXATION_FACTOR},
    logging::{JsonLogger, NoOpLogger, SearchLogger},
    read_graph_data,
    utility::get_progressbar_long_jobs,
};

/// Answers a batch of queries and writes one pair of log events per query.
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

    /// Outfile for the JSON search events
    #[arg(short, long)]
    log: Option<PathBuf>,
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

    let graph = AdjacencyListGraph::new(data.number_of_vertices, &data.edges);
    let inverted_graph = AdjacencyListGraph::inverted(data.number_of_vertices, &data.edges);

    let mut json_logger = match args.log.as_ref() {
        Some(path) => match JsonLogger::create(path) {
            Ok(logger) => Some(logger),
            Err(error) => {
                eprintln!("failed to create {}: {}", path.display(), error);
                std::process::exit(1);
            }
        },
        None => None,
    };
    let mut noop_logger = NoOpLogger {};

    let eps = [args.eps, args.eps];
    let bounds = [args.bound, args.second_bound.unwrap_or(args.bound)];
    let boa_star = BOAStar::new(&graph, eps, bounds, args.ordering);

    let mut answered_with_solution = 0;
    let mut total_expanded = 0;
    let mut total_generated = 0;

    // Queries for one target share the heuristic, it only depends on the
    // target.
    let mut cached_heuristic: Option<(Vertex, ShortestPathHeuristic)> = None;

    let bar = get_progressbar_long_jobs("Answering queries", queries.len() as u64);
    for &(source, target) in queries.iter().progress_with(bar) {
        let stale = cached_heuristic
            .as_ref()
            .map_or(true, |&(cached_target, _)| cached_target != target);
        if stale {
            cached_heuristic = Some((
                target,
                ShortestPathHeuristic::with_relaxation_factor(
                    target,
                    &inverted_graph,
                    args.relaxation_factor,
                ),
            ));
        }
        let heuristic = &cached_heuristic.as_ref().unwrap().1;

        let logger: &mut dyn SearchLogger = match json_logger.as_mut() {
            Some(json_logger) => json_logger,
            None => &mut noop_logger,
        };

        let outcome = boa_star.search_with_logger(source, target, heuristic, logger);
        if !outcome.solutions.is_empty() {
            answered_with_solution += 1;
        }
        total_expanded += outcome.expanded;
        total_generated += outcome.generated;
    }

    println!("Answered {} queries, {} within the bounds", queries.len(), answered_with_solution);
    println!("Expanded {} labels, generated {}", total_expanded, total_generated);

    if let Some(json_logger) = json_logger {
        if let Err(error) = json_logger.finish() {
            eprintln!("failed to write log: {}", error);
            std::process::exit(1);
        }
    }
}
