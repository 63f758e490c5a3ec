//! Tag extraction.
//!
//! A [TagSet] is the contribution of a single accepted record to the graph.
use itertools::Itertools;

/// Lower-cased tags of a record.
///
/// Keeps both the extraction order (used for node insertion)
/// and the distinct tags in first-occurrence order (used for pair generation).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet {
    tags: Vec<String>,
    distinct: Vec<String>,
}

impl TagSet {
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags: Vec<String> = raw
            .into_iter()
            .map(|tag| tag.as_ref().to_lowercase())
            .collect();
        let distinct = tags.iter().unique().cloned().collect();
        Self { tags, distinct }
    }

    /// tags in extraction order, duplicates included.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn distinct(&self) -> &[String] {
        &self.distinct
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// every unordered pair of distinct tags, each exactly once.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.distinct
            .iter()
            .tuple_combinations()
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }
}
