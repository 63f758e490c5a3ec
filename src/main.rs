//! # tagnet
//!
//! Builds hashtag co-occurrence graphs out of social media records.
//!
//! Records written in a target language contribute their hashtags to an undirected weighted graph,
//! whose largest connected component is saved as a sparse adjacency matrix and as a GEXF file.
//!
//! ## Getting started
//!
//! ```sh
//! tagnet 0.1.0
//! hashtag co-occurrence graph builder.
//!
//! USAGE:
//!     tagnet <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     build    Build the co-occurrence graph of a record file
//!     check    Check that written outputs describe the same graph
//!     help     Prints this message or the help of the given subcommand(s)
//! ```
//!
//! Language identification needs a fasttext model, `lid.176.bin` being looked up in the working directory by default.
use structopt::StructOpt;

use tagnet::config::{EdgeWeights, GraphConfig};
use tagnet::error::Error;
use tagnet::identifiers::FastTextBuilder;
use tagnet::pipelines::{Check, Cooccurrence, Outputs, Pipeline};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Tagnet::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Tagnet::Build(b) => {
            let weights = EdgeWeights::new(b.default_weight, b.weight_increment)?;
            let config = GraphConfig::new(b.lang).with_weights(weights);
            let identifier = FastTextBuilder::default()
                .path(&b.lid_path)
                .threshold(b.threshold)
                .build()?;
            let outputs = Outputs::new(b.adj_path, b.gephi_path)
                .with_labels(b.labels_path)
                .with_node_link(b.json_path);

            let p = Cooccurrence::new(b.data_path, outputs, config, identifier)
                .with_chunk_size(b.chunk_size);
            let summary = p.run()?;
            info!(
                "done: kept {} tags and {} edges out of {} accepted records",
                summary.component_nodes, summary.component_edges, summary.records.accepted
            );
        }

        cli::Tagnet::Check(c) => {
            let outputs = Outputs::new(c.adj_path, c.gephi_path)
                .with_labels(c.labels_path)
                .with_node_link(c.json_path);
            let report = Check::new(outputs).run()?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    };
    Ok(())
}
