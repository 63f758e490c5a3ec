//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use oxilangtag::LanguageTag;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "tagnet", about = "hashtag co-occurrence graph builder.")]
/// Holds every command that is callable by the `tagnet` command.
pub enum Tagnet {
    #[structopt(about = "Build the co-occurrence graph of a record file")]
    Build(Build),
    #[structopt(about = "Check that written outputs describe the same graph")]
    Check(Check),
}

#[derive(Debug, StructOpt)]
/// Graph building command and parameters.
///
/// ```sh
/// USAGE:
///     tagnet build [OPTIONS] <data-path> <adj-path> <gephi-path> --lang <lang>
///
/// ARGS:
///     <data-path>     JSON lines record file (may be gzipped)
///     <adj-path>      adjacency matrix destination
///     <gephi-path>    GEXF destination
/// ```
pub struct Build {
    #[structopt(parse(from_os_str), help = "JSON lines record file (may be gzipped)")]
    pub data_path: PathBuf,
    #[structopt(parse(from_os_str), help = "adjacency matrix destination")]
    pub adj_path: PathBuf,
    #[structopt(parse(from_os_str), help = "GEXF destination")]
    pub gephi_path: PathBuf,
    #[structopt(
        long = "lang",
        short = "l",
        parse(try_from_str = LanguageTag::parse_and_normalize),
        help = "target language code (e.g. it, en, pt-BR)"
    )]
    pub lang: LanguageTag<String>,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "Path to lid.176.bin",
        default_value = "lid.176.bin"
    )]
    pub lid_path: PathBuf,
    #[structopt(
        long = "threshold",
        help = "minimum identification confidence",
        default_value = "0.0"
    )]
    pub threshold: f32,
    #[structopt(
        long = "default-weight",
        help = "weight of a newly created edge",
        default_value = "1.0"
    )]
    pub default_weight: f64,
    #[structopt(
        long = "weight-increment",
        help = "weight added on each further co-occurrence",
        default_value = "1.0"
    )]
    pub weight_increment: f64,
    #[structopt(
        help = "number of records identified in parallel before being added to the graph.",
        long = "chunk-size",
        default_value = "500",
        short = "s"
    )]
    pub chunk_size: usize,
    #[structopt(
        parse(from_os_str),
        long = "labels-path",
        help = "node label CSV destination (defaults to <adj-path>.labels.csv)"
    )]
    pub labels_path: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "json-path",
        help = "optional node-link JSON destination"
    )]
    pub json_path: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Output check command and parameters.
pub struct Check {
    #[structopt(parse(from_os_str), help = "adjacency matrix location")]
    pub adj_path: PathBuf,
    #[structopt(parse(from_os_str), help = "GEXF location")]
    pub gephi_path: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "labels-path",
        help = "node label CSV location (defaults to <adj-path>.labels.csv)"
    )]
    pub labels_path: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "json-path",
        help = "node-link JSON location"
    )]
    pub json_path: Option<PathBuf>,
}
