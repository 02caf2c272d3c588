use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BiWeightedEdge, Cost, Vertex};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{}: malformed line {:?}", .path.display(), .line_number, .line)]
    MalformedLine {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error("{} holds {} arcs but {} holds {}", .first.display(), .first_arcs, .second.display(), .second_arcs)]
    ArcCountMismatch {
        first: PathBuf,
        first_arcs: usize,
        second: PathBuf,
        second_arcs: usize,
    },

    #[error("arc {} of {} and {} connects different vertices", .index, .first.display(), .second.display())]
    ArcEndpointMismatch {
        index: usize,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("failed to decode {}: {}", .path.display(), .source)]
    Bincode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    #[error("no graph input was given, pass either two .gr files or a bincode graph")]
    NoGraphSource,
}

/// Edge list of a bi-criteria graph plus its vertex count, as read from disk.
/// This is the unit the bincode files store; adjacency lists are built from it
/// after loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub number_of_vertices: usize,
    pub edges: Vec<BiWeightedEdge>,
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Reads a pair of DIMACS `.gr` files describing the same arcs under two
    /// different cost metrics and zips them into bi-weighted edges. The files
    /// must list their arcs in the same order with the same endpoints.
    pub fn from_gr_files(first: &Path, second: &Path) -> Result<GraphData, LoadError> {
        let first_arcs = Self::arcs_from_gr_file(first)?;
        let second_arcs = Self::arcs_from_gr_file(second)?;

        if first_arcs.len() != second_arcs.len() {
            return Err(LoadError::ArcCountMismatch {
                first: first.to_owned(),
                first_arcs: first_arcs.len(),
                second: second.to_owned(),
                second_arcs: second_arcs.len(),
            });
        }

        let mut number_of_vertices = 0;
        let mut edges = Vec::with_capacity(first_arcs.len());
        for (index, (&(tail, head, first_cost), &(second_tail, second_head, second_cost))) in
            first_arcs.iter().zip(second_arcs.iter()).enumerate()
        {
            if tail != second_tail || head != second_head {
                return Err(LoadError::ArcEndpointMismatch {
                    index,
                    first: first.to_owned(),
                    second: second.to_owned(),
                });
            }
            number_of_vertices = number_of_vertices
                .max(tail as usize + 1)
                .max(head as usize + 1);
            edges.push(BiWeightedEdge::new(tail, head, [first_cost, second_cost]));
        }

        Ok(GraphData {
            number_of_vertices,
            edges,
        })
    }

    pub fn from_bincode_file(path: &Path) -> Result<GraphData, LoadError> {
        let reader = BufReader::new(File::open(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?);
        bincode::deserialize_from(reader).map_err(|source| LoadError::Bincode {
            path: path.to_owned(),
            source,
        })
    }

    pub fn write_bincode_file(path: &Path, data: &GraphData) -> Result<(), LoadError> {
        let writer = BufWriter::new(File::create(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?);
        bincode::serialize_into(writer, data).map_err(|source| LoadError::Bincode {
            path: path.to_owned(),
            source,
        })
    }

    /// Reads a query file of whitespace-separated `source target` pairs.
    /// Blank lines and lines starting with `#` or `c` are skipped.
    pub fn load_queries(path: &Path) -> Result<Vec<(Vertex, Vertex)>, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut queries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io {
                path: path.to_owned(),
                source,
            })?;
            if line.trim().is_empty() || line.starts_with('#') || line.starts_with('c') {
                continue;
            }

            let mut values = line.split_whitespace();
            let source = Self::parse_number(values.next(), path, index, &line)?;
            let target = Self::parse_number(values.next(), path, index, &line)?;
            queries.push((source, target));
        }

        Ok(queries)
    }

    fn arcs_from_gr_file(path: &Path) -> Result<Vec<(Vertex, Vertex, Cost)>, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut arcs = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io {
                path: path.to_owned(),
                source,
            })?;
            let mut values = line.split_whitespace();

            match values.next() {
                // comment and problem-descriptor lines carry no arc
                None | Some("c") | Some("p") => continue,
                Some("a") => {}
                Some(_) => {
                    return Err(LoadError::MalformedLine {
                        path: path.to_owned(),
                        line_number: index + 1,
                        line,
                    })
                }
            }

            let tail = Self::parse_number(values.next(), path, index, &line)?;
            let head = Self::parse_number(values.next(), path, index, &line)?;
            let cost = Self::parse_number(values.next(), path, index, &line)?;
            arcs.push((tail, head, cost));
        }

        Ok(arcs)
    }

    fn parse_number(
        value: Option<&str>,
        path: &Path,
        index: usize,
        line: &str,
    ) -> Result<u32, LoadError> {
        value
            .and_then(|value| value.parse().ok())
            .ok_or_else(|| LoadError::MalformedLine {
                path: path.to_owned(),
                line_number: index + 1,
                line: line.to_owned(),
            })
    }
}
