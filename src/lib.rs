use std::path::Path;

use graphs::graph_factory::{GraphData, GraphFactory, LoadError};
use utility::get_progressspinner;

pub mod bi_criteria;
pub mod graphs;
pub mod heuristics;
pub mod logging;
pub mod queue;
pub mod utility;

/// Loads graph data from whichever source was given: a pair of `.gr` files
/// carrying the two cost metrics, or a bincode file written by
/// `gr_to_bincode`. The `.gr` pair wins when both sources are present.
pub fn read_graph_data(
    first_gr: Option<&Path>,
    second_gr: Option<&Path>,
    graph_bincode: Option<&Path>,
) -> Result<GraphData, LoadError> {
    match (first_gr, second_gr, graph_bincode) {
        (Some(first), Some(second), _) => {
            let spinner = get_progressspinner("Reading gr file pair");
            let data = GraphFactory::from_gr_files(first, second);
            // Clear before propagating so a load error is not printed into
            // the spinner line.
            spinner.finish_and_clear();
            data
        }
        (_, _, Some(path)) => {
            let spinner = get_progressspinner("Reading bincode graph");
            let data = GraphFactory::from_bincode_file(path);
            spinner.finish_and_clear();
            data
        }
        _ => Err(LoadError::NoGraphSource),
    }
}
