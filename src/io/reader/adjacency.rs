//! Reads back an adjacency matrix written by [crate::io::writer::AdjacencyWriter].
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::graph::{Subgraph, SubgraphEdge};
use crate::io::writer::{MatrixEntry, MATRIX_MARKET_HEADER};

#[derive(Debug, Deserialize)]
struct NodeLabel {
    index: usize,
    label: String,
}

/// Decoded matrix dimension and stored (lower triangle, 1-based) entries.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    dim: usize,
    entries: Vec<(usize, usize, f64)>,
}

impl AdjacencyMatrix {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let mut reader = BufReader::new(File::open(src)?);

        let mut header = String::new();
        reader.read_line(&mut header)?;
        if header.trim_end() != MATRIX_MARKET_HEADER {
            return Err(Error::Custom(format!(
                "{:?} is not a symmetric coordinate Matrix Market file",
                src
            )));
        }

        // remaining comment lines are skipped by the csv reader
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .comment(Some(b'%'))
            .from_reader(reader);
        let mut records = rdr.records();

        let (rows, cols, nnz): (usize, usize, usize) = match records.next() {
            Some(size) => size?.deserialize(None)?,
            None => return Err(Error::Custom("missing matrix size line".to_string())),
        };
        if rows != cols {
            return Err(Error::Custom(format!(
                "adjacency matrix is not square ({rows}x{cols})"
            )));
        }

        let mut entries = Vec::with_capacity(nnz);
        for record in records {
            let entry: MatrixEntry = record?.deserialize(None)?;
            if entry.row == 0 || entry.col == 0 || entry.row > rows || entry.col > cols {
                return Err(Error::Custom(format!(
                    "entry ({}, {}) out of bounds",
                    entry.row, entry.col
                )));
            }
            // only the strict lower triangle is stored
            if entry.row <= entry.col {
                return Err(Error::Custom(format!(
                    "entry ({}, {}) is not below the diagonal",
                    entry.row, entry.col
                )));
            }
            entries.push((entry.row, entry.col, entry.weight));
        }
        if entries.len() != nnz {
            return Err(Error::Custom(format!(
                "expected {nnz} entries, found {}",
                entries.len()
            )));
        }

        Ok(Self { dim: rows, entries })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// value of cell (i, j), 0-based. Absent cells are 0.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let (row, col) = if i >= j { (i + 1, j + 1) } else { (j + 1, i + 1) };
        self.entries
            .iter()
            .find(|(r, c, _)| *r == row && *c == col)
            .map(|(_, _, w)| *w)
            .unwrap_or(0.0)
    }

    /// Rebuilds the subgraph, node labels being read from the label file.
    pub fn into_subgraph(self, labels: &Path) -> Result<Subgraph, Error> {
        let mut rdr = csv::Reader::from_path(labels)?;
        let mut names = Vec::with_capacity(self.dim);
        for (expected, label) in rdr.deserialize::<NodeLabel>().enumerate() {
            let label = label?;
            if label.index != expected {
                return Err(Error::Custom(format!(
                    "label file is not ordered: expected index {expected}, got {}",
                    label.index
                )));
            }
            names.push(label.label);
        }
        if names.len() != self.dim {
            return Err(Error::Custom(format!(
                "{} labels for a matrix of dimension {}",
                names.len(),
                self.dim
            )));
        }

        let edges = self
            .entries
            .into_iter()
            .map(|(row, col, weight)| SubgraphEdge::new(row - 1, col - 1, weight))
            .collect();
        Ok(Subgraph::new(names, edges))
    }

    /// Convenience function reading both files.
    pub fn read_subgraph(matrix: &Path, labels: &Path) -> Result<Subgraph, Error> {
        Self::from_path(matrix)?.into_subgraph(labels)
    }
}
