use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use oxilangtag::LanguageTag;
use serde_json::{json, Value};
use tagnet::config::{EdgeWeights, GraphConfig};
use tagnet::error::Error;
use tagnet::identifiers::{Identification, Predict};
use tagnet::io::reader::{read_node_link, AdjacencyMatrix, GexfReader};
use tagnet::pipelines::{Check, Cooccurrence, Outputs, Pipeline};

/// identifies text containing "english" as english, anything else as italian.
struct Keyword;

impl Predict for Keyword {
    fn predict_one(&self, line: &str) -> Result<Option<Identification>, Error> {
        let lang = if line.contains("english") { "en" } else { "it" };
        Ok(Some(Identification::new(
            LanguageTag::parse_and_normalize(lang)?,
            0.99,
        )))
    }
}

fn hashtags(tags: &[&str]) -> Value {
    let hashtags: Vec<Value> = tags.iter().map(|t| json!({ "text": t })).collect();
    json!({ "hashtags": hashtags })
}

fn plain(text: &str, tags: &[&str]) -> Value {
    json!({ "text": text, "entities": hashtags(tags) })
}

fn write_jsonl(path: &Path, records: &[Value]) {
    let mut f = std::fs::File::create(path).unwrap();
    for r in records {
        writeln!(f, "{}", r).unwrap();
    }
}

fn outputs(dst: &Path) -> Outputs {
    Outputs::new(dst.join("graph.mtx"), dst.join("graph.gexf"))
        .with_node_link(Some(dst.join("graph.json")))
}

fn pipeline(src: PathBuf, outputs: Outputs) -> Cooccurrence<Keyword> {
    let config = GraphConfig::from_code("it").unwrap();
    Cooccurrence::new(src, outputs, config, Keyword).with_chunk_size(2)
}

#[test_log::test]
fn scenario() {
    let dst = tempfile::tempdir().unwrap();
    let src = dst.path().join("records.jsonl");
    write_jsonl(
        &src,
        &[
            plain("ciao", &["a", "b"]),
            plain("ciao", &["b", "c"]),
            plain("ciao", &["a", "b"]),
            plain("ciao", &["d"]),
        ],
    );

    let outputs = outputs(dst.path());
    let summary = pipeline(src, outputs.clone()).run().unwrap();
    assert_eq!(summary.nodes, 4);
    assert_eq!(summary.edges, 2);
    assert_eq!(summary.components, 2);
    assert_eq!(summary.component_nodes, 3);
    assert_eq!(summary.component_weight, 3.0);

    let matrix = AdjacencyMatrix::from_path(&outputs.adjacency).unwrap();
    assert_eq!(matrix.dim(), 3);
    assert_eq!(matrix.get(0, 1), 2.0);
    assert_eq!(matrix.get(1, 0), 2.0);
    assert_eq!(matrix.get(1, 2), 1.0);
    assert_eq!(matrix.get(0, 2), 0.0);

    let labels = std::fs::read_to_string(outputs.labels_path()).unwrap();
    assert_eq!(labels, "index,label\n0,a\n1,b\n2,c\n");

    let gexf = GexfReader::from_path(&outputs.gexf)
        .unwrap()
        .read_subgraph()
        .unwrap();
    assert_eq!(gexf.labels(), ["a", "b", "c"]);
    assert_eq!(gexf.weight("a", "b"), Some(2.0));
    assert_eq!(gexf.weight("b", "c"), Some(1.0));
    assert_eq!(gexf.position("d"), None);
}

#[test]
fn outputs_agree() {
    let dst = tempfile::tempdir().unwrap();
    let src = dst.path().join("records.jsonl");
    write_jsonl(
        &src,
        &[
            plain("ciao", &["Roma", "Lazio", "calcio"]),
            plain("ciao", &["roma", "derby"]),
            plain("ciao", &["lazio", "derby", "roma"]),
            plain("english text", &["roma", "london"]),
            plain("ciao", &["pizza", "pasta"]),
        ],
    );

    let outputs = outputs(dst.path());
    pipeline(src, outputs.clone()).run().unwrap();

    let adjacency =
        AdjacencyMatrix::read_subgraph(&outputs.adjacency, &outputs.labels_path()).unwrap();
    let gexf = GexfReader::from_path(&outputs.gexf)
        .unwrap()
        .read_subgraph()
        .unwrap();
    let node_link = read_node_link(outputs.node_link.as_ref().unwrap()).unwrap();

    assert_eq!(adjacency.labels(), ["roma", "lazio", "calcio", "derby"]);
    assert_eq!(adjacency.weight("roma", "lazio"), Some(2.0));
    assert_eq!(adjacency.weight("roma", "derby"), Some(2.0));
    assert_eq!(adjacency.position("london"), None);
    assert!(adjacency.is_equivalent(&gexf));
    assert!(adjacency.is_equivalent(&node_link));

    let report = Check::new(outputs).run().unwrap();
    assert_eq!(report.nodes, 4);
    assert_eq!(report.edges, 5);
}

#[test]
fn boost_fallbacks() {
    let dst = tempfile::tempdir().unwrap();
    let src = dst.path().join("records.jsonl");
    write_jsonl(
        &src,
        &[
            // boosted post without extended body: its own tags are used
            json!({
                "text": "RT english",
                "entities": hashtags(&["ignored", "outer"]),
                "retweeted_status": plain("ciao", &["x", "y"]),
            }),
            // extended body takes precedence over the truncated one
            json!({
                "text": "english truncated",
                "entities": hashtags(&["truncated"]),
                "extended_tweet": {
                    "full_text": "ciao completo",
                    "entities": hashtags(&["y", "z"]),
                },
            }),
        ],
    );

    let outputs = outputs(dst.path());
    let summary = pipeline(src, outputs.clone()).run().unwrap();
    assert_eq!(summary.records.boost_plain, 1);
    assert_eq!(summary.records.original_extended, 1);

    let s = read_node_link(outputs.node_link.as_ref().unwrap()).unwrap();
    assert_eq!(s.labels(), ["x", "y", "z"]);
    assert_eq!(s.weight("x", "y"), Some(1.0));
    assert_eq!(s.weight("y", "z"), Some(1.0));
}

#[test]
fn custom_weights() {
    let dst = tempfile::tempdir().unwrap();
    let src = dst.path().join("records.jsonl");
    write_jsonl(
        &src,
        &[plain("ciao", &["a", "b"]), plain("ciao", &["b", "a", "b"])],
    );

    let config = GraphConfig::from_code("it")
        .unwrap()
        .with_weights(EdgeWeights::new(0.5, 0.25).unwrap());
    let outputs = outputs(dst.path());
    Cooccurrence::new(src, outputs.clone(), config, Keyword)
        .run()
        .unwrap();

    let s = read_node_link(outputs.node_link.as_ref().unwrap()).unwrap();
    assert_eq!(s.weight("a", "b"), Some(0.75));
}

#[test]
fn gzipped_records_with_noise() {
    let dst = tempfile::tempdir().unwrap();
    let src = dst.path().join("records.jsonl.gz");
    {
        let mut gz = GzEncoder::new(std::fs::File::create(&src).unwrap(), Compression::default());
        writeln!(gz, "{}", plain("ciao", &["a", "b"])).unwrap();
        writeln!(gz, "{{\"truncated").unwrap();
        writeln!(gz).unwrap();
        gz.write_all(b"\xff\xfe not utf-8\n").unwrap();
        writeln!(gz, "{}", json!({ "entities": hashtags(&["notext"]) })).unwrap();
        writeln!(gz, "{}", plain("ciao", &["b", "c"])).unwrap();
        gz.finish().unwrap();
    }

    let outputs = outputs(dst.path());
    let summary = pipeline(src, outputs).run().unwrap();
    assert_eq!(summary.records.records, 5);
    assert_eq!(summary.records.malformed, 3);
    assert_eq!(summary.records.accepted, 2);
    assert_eq!(summary.component_nodes, 3);
}

#[test]
fn empty_graph_writes_nothing() {
    let dst = tempfile::tempdir().unwrap();
    let src = dst.path().join("records.jsonl");
    write_jsonl(
        &src,
        &[
            plain("english only", &["a", "b"]),
            plain("ciao", &[]),
        ],
    );

    let outputs = outputs(dst.path());
    let result = pipeline(src, outputs.clone()).run();
    assert!(matches!(result, Err(Error::EmptyGraph)));
    assert!(!outputs.any_exists());
}

#[test]
fn empty_stream_writes_nothing() {
    let dst = tempfile::tempdir().unwrap();
    let src = dst.path().join("records.jsonl");
    std::fs::File::create(&src).unwrap();

    let outputs = outputs(dst.path());
    let result = pipeline(src, outputs.clone()).run();
    assert!(matches!(result, Err(Error::EmptyGraph)));
    assert!(!outputs.any_exists());
}

#[test]
fn missing_source() {
    let dst = tempfile::tempdir().unwrap();
    let outputs = outputs(dst.path());
    let result = pipeline(dst.path().join("nope.jsonl"), outputs.clone()).run();
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!outputs.any_exists());
}
