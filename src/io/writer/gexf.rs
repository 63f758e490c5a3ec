/*! GEXF 1.2 writer (Gephi, networkx...).

Node ids are subgraph positions, tags are stored as node labels.
One element per line, see [crate::io::reader::GexfReader] for the matching reader.
!*/
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;
use crate::graph::Subgraph;

use super::WriterTrait;

const CREATOR: &str = concat!("tagnet ", env!("CARGO_PKG_VERSION"));

pub struct GexfWriter {
    dst: PathBuf,
}

/// Escapes XML special characters in attribute values.
pub(crate) fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

impl GexfWriter {
    /// Writes the GEXF document of `subgraph` into `out`.
    pub fn render<W: Write>(subgraph: &Subgraph, out: &mut W) -> std::io::Result<()> {
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<gexf xmlns="http://www.gexf.net/1.2draft" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://www.gexf.net/1.2draft http://www.gexf.net/1.2draft/gexf.xsd" version="1.2">"#
        )?;
        writeln!(out, "  <meta>")?;
        writeln!(out, "    <creator>{CREATOR}</creator>")?;
        writeln!(out, "  </meta>")?;
        writeln!(out, r#"  <graph defaultedgetype="undirected" mode="static">"#)?;

        writeln!(out, "    <nodes>")?;
        for (id, label) in subgraph.labels().iter().enumerate() {
            writeln!(out, r#"      <node id="{id}" label="{}" />"#, escape(label))?;
        }
        writeln!(out, "    </nodes>")?;

        writeln!(out, "    <edges>")?;
        for (id, edge) in subgraph.edges().iter().enumerate() {
            writeln!(
                out,
                r#"      <edge id="{id}" source="{}" target="{}" weight="{}" />"#,
                edge.source(),
                edge.target(),
                edge.weight()
            )?;
        }
        writeln!(out, "    </edges>")?;

        writeln!(out, "  </graph>")?;
        writeln!(out, "</gexf>")?;
        Ok(())
    }
}

impl WriterTrait for GexfWriter {
    fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
        }
    }

    fn write(&mut self, subgraph: &Subgraph) -> Result<(), Error> {
        debug!("writing gexf file to {:?}", self.dst);
        let mut file = BufWriter::new(File::create(&self.dst)?);
        Self::render(subgraph, &mut file)?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SubgraphEdge;

    #[test]
    fn test_escape() {
        assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
        assert_eq!(escape(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
    }

    #[test]
    fn render() {
        let s = Subgraph::new(
            vec!["café".into(), "r&d".into()],
            vec![SubgraphEdge::new(1, 0, 2.5)],
        );
        let mut out = Vec::new();
        GexfWriter::render(&s, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains(r#"defaultedgetype="undirected""#));
        assert!(out.contains(r#"<node id="0" label="café" />"#));
        assert!(out.contains(r#"<node id="1" label="r&amp;d" />"#));
        assert!(out.contains(r#"<edge id="0" source="0" target="1" weight="2.5" />"#));
        assert!(out.trim_end().ends_with("</gexf>"));
    }

    #[test]
    fn write() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("graph.gexf");
        let s = Subgraph::new(vec!["a".into()], vec![]);
        GexfWriter::new(&path).write(&s).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("<edges>\n    </edges>"));
    }
}
