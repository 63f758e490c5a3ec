/*! Sparse adjacency matrix writer.

The matrix is written in the Matrix Market exchange format (`coordinate real symmetric`),
readable by `scipy.io.mmread` among others:

```text
%%MatrixMarket matrix coordinate real symmetric
% <comments>
<n> <n> <number of stored entries>
<row> <col> <weight>
...
```

Indices are 1-based, and only the lower triangle (`row > col`) is stored.
Row/column `i` is the node at position `i - 1` of the subgraph,
whose label is given by a companion CSV file (`index,label`, 0-based).
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::graph::Subgraph;

use super::WriterTrait;

pub(crate) const MATRIX_MARKET_HEADER: &str = "%%MatrixMarket matrix coordinate real symmetric";

/// A stored matrix cell (1-based indices).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct MatrixEntry {
    pub row: usize,
    pub col: usize,
    pub weight: f64,
}

pub struct AdjacencyWriter {
    dst: PathBuf,
    labels: PathBuf,
}

impl AdjacencyWriter {
    /// default label file location: `graph.mtx` -> `graph.labels.csv`
    pub fn default_labels_path(dst: &Path) -> PathBuf {
        dst.with_extension("labels.csv")
    }

    pub fn with_labels_path(mut self, labels: PathBuf) -> Self {
        self.labels = labels;
        self
    }

    pub fn labels_path(&self) -> &Path {
        &self.labels
    }

    fn write_matrix(&self, subgraph: &Subgraph) -> Result<(), Error> {
        let mut file = BufWriter::new(File::create(&self.dst)?);
        writeln!(file, "{MATRIX_MARKET_HEADER}")?;
        writeln!(
            file,
            "% tag co-occurrence matrix, {} nodes, {} edges",
            subgraph.node_count(),
            subgraph.edge_count()
        )?;

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .from_writer(file);

        let n = subgraph.node_count();
        wtr.serialize((n, n, subgraph.edge_count()))?;
        for edge in subgraph.edges() {
            // lower triangle: target > source
            wtr.serialize(MatrixEntry {
                row: edge.target() + 1,
                col: edge.source() + 1,
                weight: edge.weight(),
            })?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_labels(&self, subgraph: &Subgraph) -> Result<(), Error> {
        let mut wtr = csv::Writer::from_path(&self.labels)?;
        wtr.write_record(["index", "label"])?;
        for (index, label) in subgraph.labels().iter().enumerate() {
            wtr.serialize((index, label))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl WriterTrait for AdjacencyWriter {
    fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
            labels: Self::default_labels_path(dst),
        }
    }

    fn write(&mut self, subgraph: &Subgraph) -> Result<(), Error> {
        debug!(
            "writing {}x{} adjacency matrix to {:?}",
            subgraph.node_count(),
            subgraph.node_count(),
            self.dst
        );
        self.write_matrix(subgraph)?;
        self.write_labels(subgraph)
    }
}
