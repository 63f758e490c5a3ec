/*! Reads back GEXF files written by [crate::io::writer::GexfWriter].

This is not a general XML parser: it relies on the one-element-per-line layout of the writer,
and only looks at `<node>` and `<edge>` elements.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;
use crate::graph::{Subgraph, SubgraphEdge};

pub struct GexfReader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
}

impl GexfReader<File> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        Ok(Self::new(File::open(src)?))
    }
}

/// Reverts [crate::io::writer::GexfWriter] attribute escaping.
fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Value of attribute `name` in an element line.
fn attribute(line: &str, name: &str) -> Result<String, Error> {
    let pattern = format!(" {name}=\"");
    let start = line
        .find(&pattern)
        .map(|idx| idx + pattern.len())
        .ok_or_else(|| Error::Custom(format!("missing attribute {name} in {line:?}")))?;
    let len = line[start..]
        .find('"')
        .ok_or_else(|| Error::Custom(format!("unterminated attribute {name} in {line:?}")))?;
    Ok(unescape(&line[start..start + len]))
}

fn parsed_attribute<F: FromStr>(line: &str, name: &str) -> Result<F, Error> {
    let value = attribute(line, name)?;
    value
        .parse()
        .map_err(|_| Error::Custom(format!("invalid value {value:?} for attribute {name}")))
}

impl<T: Read> GexfReader<T> {
    pub fn new(reader: T) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }

    /// Reads the whole document.
    ///
    /// Node ids must be the positions `0..n`, in order.
    pub fn read_subgraph(self) -> Result<Subgraph, Error> {
        let mut labels = Vec::new();
        let mut edges = Vec::new();

        for line in self.lines {
            let line = line?;
            let line = line.trim();
            if line.starts_with("<node ") {
                let id: usize = parsed_attribute(line, "id")?;
                if id != labels.len() {
                    return Err(Error::Custom(format!(
                        "unexpected node id {id}, expected {}",
                        labels.len()
                    )));
                }
                labels.push(attribute(line, "label")?);
            } else if line.starts_with("<edge ") {
                edges.push((
                    parsed_attribute::<usize>(line, "source")?,
                    parsed_attribute::<usize>(line, "target")?,
                    parsed_attribute::<f64>(line, "weight")?,
                ));
            }
        }

        let edges = edges
            .into_iter()
            .map(|(source, target, weight)| {
                if source >= labels.len() || target >= labels.len() {
                    Err(Error::Custom(format!(
                        "edge ({source}, {target}) refers to an unknown node"
                    )))
                } else {
                    Ok(SubgraphEdge::new(source, target, weight))
                }
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Subgraph::new(labels, edges))
    }
}
