use std::path::PathBuf;

use clap::Parser;
use pareto_paths::{
    bi_criteria::{boa_star::BOAStar, ordering::QueueOrdering},
    graphs::adjacency_list_graph::AdjacencyListGraph,
    heuristics::shortest_path_heuristic::{ShortestPathHeuristic, DEFAULT_RELAXATION_FACTOR},
    logging::{JsonLogger, NoOpLogger, SearchLogger},
    read_graph_data,
    utility::get_progressspinner,
};

/// Answers one query and prints the solution path.
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

    /// Source vertex
    #[arg(short, long)]
    source: u32,

    /// Target vertex
    #[arg(short, long)]
    target: u32,

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

    let graph = AdjacencyListGraph::new(data.number_of_vertices, &data.edges);
    let inverted_graph = AdjacencyListGraph::inverted(data.number_of_vertices, &data.edges);

    let spinner = get_progressspinner("Computing heuristic");
    let heuristic = ShortestPathHeuristic::with_relaxation_factor(
        args.target,
        &inverted_graph,
        args.relaxation_factor,
    );
    spinner.finish_and_clear();

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
    let logger: &mut dyn SearchLogger = match json_logger.as_mut() {
        Some(json_logger) => json_logger,
        None => &mut noop_logger,
    };

    let eps = [args.eps, args.eps];
    let bounds = [args.bound, args.second_bound.unwrap_or(args.bound)];
    let boa_star = BOAStar::new(&graph, eps, bounds, args.ordering);

    let outcome = boa_star.search_with_logger(args.source, args.target, &heuristic, logger);

    println!("Expanded {} labels, generated {}", outcome.expanded, outcome.generated);
    match outcome.solutions.first() {
        Some(solution) => {
            println!("Solution costs [{}, {}]", solution.g[0], solution.g[1]);
            let path = solution.path();
            println!("Path over {} vertices:", path.len());
            println!("{:?}", path);
        }
        None => println!("No path within the bounds"),
    }

    if let Some(json_logger) = json_logger {
        if let Err(error) = json_logger.finish() {
            eprintln!("failed to write log: {}", error);
            std::process::exit(1);
        }
    }
}
