use std::path::PathBuf;

use clap::Parser;
use pareto_paths::graphs::graph_factory::GraphFactory;

/// Reading a .bincode graph back is much faster than parsing a .gr file pair.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in .gr format carrying the first cost metric
    #[arg(long)]
    first_gr: PathBuf,

    /// Infile in .gr format carrying the second cost metric
    #[arg(long)]
    second_gr: PathBuf,

    /// Outfile in .bincode format
    #[arg(short = 'b', long)]
    graph_bincode: PathBuf,
}

fn main() {
    let args = Args::parse();

    let data = match GraphFactory::from_gr_files(&args.first_gr, &args.second_gr) {
        Ok(data) => data,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    if let Err(error) = GraphFactory::write_bincode_file(&args.graph_bincode, &data) {
        eprintln!("{}", error);
        std::process::exit(1);
    }

    println!(
        "Wrote {} vertices and {} edges to {}",
        data.number_of_vertices,
        data.edges.len(),
        args.graph_bincode.display()
    );
}
