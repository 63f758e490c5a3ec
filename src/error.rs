//! Error enum
use oxilangtag::LanguageTagParseError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    LanguageTag(LanguageTagParseError),
    /// record has none of the expected text shapes, or is not valid JSON.
    /// Recoverable: the record is dropped.
    MalformedRecord(String),
    /// largest component of an empty graph.
    EmptyGraph,
    Custom(String),
}

impl Error {
    /// true for errors that only concern a single record.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::MalformedRecord(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<LanguageTagParseError> for Error {
    fn from(e: LanguageTagParseError) -> Error {
        Error::LanguageTag(e)
    }
}

/// fasttext reports its errors as plain strings.
impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
