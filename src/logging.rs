use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::json;

use crate::{
    bi_criteria::EpsPair,
    graphs::{CostPair, Vertex},
};

/// Search parameters reported when a run starts.
#[derive(Clone, Debug, Serialize)]
pub struct SearchStartRecord {
    pub name: &'static str,
    pub eps: EpsPair,
    pub bounds: CostPair,
}

/// One solution in a finish event, reduced to its cost vector.
#[derive(Clone, Debug, Serialize)]
pub struct SolutionRecord {
    pub g: CostPair,
}

/// Counters and solutions of a completed run.
#[derive(Clone, Debug, Serialize)]
pub struct SearchFinishRecord {
    pub expanded_count: usize,
    pub generated_count: usize,
    pub solutions: Vec<SolutionRecord>,
    pub amount_of_solutions: usize,
}

/// Receives exactly one start and one finish event per search call. A logger
/// must absorb its own failures; the search does not stop for logging.
pub trait SearchLogger {
    fn start_search(&mut self, source: Vertex, target: Vertex, record: &SearchStartRecord);
    fn finish_search(&mut self, record: &SearchFinishRecord);
}

/// Discards all events.
pub struct NoOpLogger {}

impl SearchLogger for NoOpLogger {
    fn start_search(&mut self, _source: Vertex, _target: Vertex, _record: &SearchStartRecord) {}

    fn finish_search(&mut self, _record: &SearchFinishRecord) {}
}

/// Writes every event as one line of JSON, tagged with an `event` field. Write
/// errors are held back until [`JsonLogger::finish`] so a full log file is the
/// only place a run can fail.
pub struct JsonLogger<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl JsonLogger<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<JsonLogger<BufWriter<File>>> {
        Ok(JsonLogger::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> JsonLogger<W> {
    pub fn new(writer: W) -> JsonLogger<W> {
        JsonLogger {
            writer,
            error: None,
        }
    }

    /// Flushes and hands the writer back, or surfaces the first error any
    /// event ran into.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_line<T: Serialize>(&mut self, line: &T) {
        if self.error.is_some() {
            return;
        }

        let written = serde_json::to_writer(&mut self.writer, line)
            .map_err(io::Error::from)
            .and_then(|_| writeln!(self.writer));
        if let Err(error) = written {
            self.error = Some(error);
        }
    }
}

impl<W: Write> SearchLogger for JsonLogger<W> {
    fn start_search(&mut self, source: Vertex, target: Vertex, record: &SearchStartRecord) {
        self.write_line(&json!({
            "event": "start_search",
            "source": source,
            "target": target,
            "name": record.name,
            "eps": record.eps,
            "bounds": record.bounds,
        }));
    }

    fn finish_search(&mut self, record: &SearchFinishRecord) {
        self.write_line(&json!({
            "event": "finish_search",
            "expanded_count": record.expanded_count,
            "generated_count": record.generated_count,
            "solutions": record.solutions,
            "amount_of_solutions": record.amount_of_solutions,
        }));
    }
}
