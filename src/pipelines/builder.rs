/*! Record stream to co-occurrence graph.

Records are consumed in chunks. Inside a chunk, parsing, text resolution and language identification
are done in parallel, while the graph is updated sequentially, in stream order, once the chunk is processed.
The resulting graph is then identical to the one obtained by processing records one by one.

Malformed records (invalid JSON, invalid UTF-8, no text at all) are logged, counted and skipped.
Any other error coming from the record source stops the construction.
!*/
use itertools::Itertools;
use log::{debug, error, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::EdgeWeights;
use crate::error::Error;
use crate::filtering::{Filter, Language};
use crate::graph::CooccurrenceGraph;
use crate::identifiers::Predict;
use crate::record::{Record, RecordKind};
use crate::tags::TagSet;

pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Result of the processing of a single record.
#[derive(Debug)]
enum Outcome {
    Accepted(RecordKind, TagSet),
    Rejected(RecordKind),
    Malformed(Error),
}

/// Counters over the consumed records.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RecordStats {
    /// every line read from the source, malformed ones included.
    pub records: usize,
    pub malformed: usize,
    /// well-formed records that are not in the target language.
    pub rejected: usize,
    pub accepted: usize,
    /// accepted records that had no tags at all.
    pub untagged: usize,
    pub original_extended: usize,
    pub original_plain: usize,
    pub boost_extended: usize,
    pub boost_plain: usize,
}

impl RecordStats {
    fn count_kind(&mut self, kind: RecordKind) {
        let counter = match kind {
            RecordKind::OriginalExtended => &mut self.original_extended,
            RecordKind::OriginalPlain => &mut self.original_plain,
            RecordKind::BoostExtended => &mut self.boost_extended,
            RecordKind::BoostPlain => &mut self.boost_plain,
        };
        *counter += 1;
    }
}

/// Incrementally builds a [CooccurrenceGraph] from raw JSON lines.
pub struct GraphBuilder<'a, P: Predict> {
    filter: Language<'a, P>,
    graph: CooccurrenceGraph,
    stats: RecordStats,
    chunk_size: usize,
}

impl<'a, P: Predict> GraphBuilder<'a, P> {
    pub fn new(filter: Language<'a, P>, weights: EdgeWeights) -> Self {
        Self {
            filter,
            graph: CooccurrenceGraph::new(weights),
            stats: RecordStats::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Number of records processed in parallel before being merged into the graph.
    /// `0` is treated as `1`.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// parse, resolve and filter a line.
    fn process_record(filter: &Language<'a, P>, line: &str) -> Outcome {
        let record = match Record::from_line(line) {
            Ok(r) => r,
            Err(e) => return Outcome::Malformed(e),
        };
        let resolved = record.resolve();
        let kind = resolved.kind();

        if filter.detect(resolved.text()) {
            Outcome::Accepted(kind, TagSet::new(resolved.into_tags()))
        } else {
            Outcome::Rejected(kind)
        }
    }

    fn merge(&mut self, outcome: Outcome) {
        self.stats.records += 1;
        match outcome {
            Outcome::Accepted(kind, tags) => {
                self.stats.accepted += 1;
                self.stats.count_kind(kind);
                if tags.is_empty() {
                    self.stats.untagged += 1;
                }
                self.graph.add_record(&tags);
            }
            Outcome::Rejected(kind) => {
                self.stats.rejected += 1;
                self.stats.count_kind(kind);
            }
            Outcome::Malformed(e) => {
                warn!("skipping record #{}: {:?}", self.stats.records, e);
                self.stats.malformed += 1;
            }
        }
    }

    /// Consume every record of the source.
    ///
    /// Stops at the first non recoverable source error, leaving the graph
    /// with the records that were merged before the failing chunk.
    pub fn consume<I>(&mut self, records: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Result<String, Error>>,
    {
        let chunks = records.into_iter().chunks(self.chunk_size);
        for (chunk_id, chunk) in chunks.into_iter().enumerate() {
            let lines: Vec<Result<String, Error>> = chunk.collect();
            debug!("chunk {}: {} records", chunk_id, lines.len());

            let filter = &self.filter;
            let outcomes: Vec<Result<Outcome, Error>> = lines
                .into_par_iter()
                .map(|line| match line {
                    Ok(line) => Ok(Self::process_record(filter, &line)),
                    Err(e) if e.is_recoverable() => Ok(Outcome::Malformed(e)),
                    Err(e) => Err(e),
                })
                .collect();

            for outcome in outcomes {
                match outcome {
                    Ok(outcome) => self.merge(outcome),
                    Err(e) => {
                        error!("record source failure: {:?}", e);
                        return Err(e);
                    }
                }
            }
        }

        info!(
            "{} records: {} accepted, {} rejected, {} malformed",
            self.stats.records, self.stats.accepted, self.stats.rejected, self.stats.malformed
        );
        Ok(())
    }

    pub fn graph(&self) -> &CooccurrenceGraph {
        &self.graph
    }

    pub fn stats(&self) -> &RecordStats {
        &self.stats
    }

    pub fn finish(self) -> (CooccurrenceGraph, RecordStats) {
        (self.graph, self.stats)
    }
}
