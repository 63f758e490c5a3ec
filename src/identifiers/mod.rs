/*! Language identification models

Holds a [Predict] trait for implementing other ones.

The current identifier used is [fasttext](https://fasttext.cc) !*/
pub(crate) mod identification;
pub(crate) mod model;

pub use identification::{label_to_tag, Identification};
pub use model::{FastText, FastTextBuilder, Predict};
