use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use ahash::{HashSet, HashSetExt};
use clap::Parser;
use pareto_paths::{graphs::Vertex, read_graph_data};
use rand::Rng;

/// Writes random source target pairs for use with run_queries.
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

    /// Number of distinct queries to generate
    #[arg(short, long)]
    number_of_queries: usize,

    /// Outfile for the queries
    #[arg(short, long)]
    queries: PathBuf,
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

    let number_of_vertices = data.number_of_vertices;
    let distinct_pairs = number_of_vertices.saturating_mul(number_of_vertices.saturating_sub(1));
    if args.number_of_queries > distinct_pairs {
        eprintln!(
            "cannot draw {} distinct queries from {} vertices",
            args.number_of_queries,
            number_of_vertices
        );
        std::process::exit(1);
    }

    let mut rng = rand::thread_rng();
    let mut pairs: HashSet<(Vertex, Vertex)> = HashSet::new();
    while pairs.len() < args.number_of_queries {
        let source = rng.gen_range(0..number_of_vertices as Vertex);
        let target = rng.gen_range(0..number_of_vertices as Vertex);
        if source != target {
            pairs.insert((source, target));
        }
    }

    let written = File::create(&args.queries).and_then(|file| {
        let mut writer = BufWriter::new(file);
        for (source, target) in &pairs {
            writeln!(writer, "{} {}", source, target)?;
        }
        writer.flush()
    });
    if let Err(error) = written {
        eprintln!("failed to write {}: {}", args.queries.display(), error);
        std::process::exit(1);
    }

    println!("Wrote {} queries to {}", pairs.len(), args.queries.display());
}
