/*! Record shape resolution.

A raw [Status] is resolved into one of four closed shapes,
with boosts taking precedence over originals and extended bodies over plain ones:

| boost? | `extended_tweet.full_text`? | shape                          |
|--------|-----------------------------|--------------------------------|
| yes    | yes                         | [Record::BoostExtended]        |
| yes    | no                          | [Record::BoostPlain]           |
| no     | yes                         | [Record::OriginalExtended]     |
| no     | no                          | [Record::OriginalPlain]        |

Only the extended body carries the complete hashtag list,
plain bodies may have been truncated.
!*/
use std::fmt;

use serde::Serialize;

use crate::error::Error;

use super::status::{Entities, ExtendedTweet, Status};

/// Text and hashtags of one post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Body {
    text: String,
    tags: Vec<String>,
}

impl Body {
    pub fn new(text: String, tags: Vec<String>) -> Self {
        Self { text, tags }
    }

    fn from_parts(text: String, entities: Option<Entities>) -> Self {
        let tags = entities.map(Entities::hashtag_texts).unwrap_or_default();
        Self { text, tags }
    }

    fn from_extended(extended: ExtendedTweet) -> Option<Self> {
        let ExtendedTweet {
            full_text,
            entities,
        } = extended;
        full_text.map(|text| Self::from_parts(text, entities))
    }

    /// returns (extended, plain) bodies of a status, discarding any boosted post.
    fn split(status: Status) -> (Option<Self>, Option<Self>) {
        let Status {
            text,
            entities,
            extended_tweet,
            ..
        } = status;
        let extended = extended_tweet.and_then(Self::from_extended);
        let plain = text.map(|text| Self::from_parts(text, entities));
        (extended, plain)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    OriginalExtended,
    OriginalPlain,
    BoostExtended,
    BoostPlain,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordKind::OriginalExtended => "original/extended",
            RecordKind::OriginalPlain => "original/plain",
            RecordKind::BoostExtended => "boost/extended",
            RecordKind::BoostPlain => "boost/plain",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    OriginalExtended(Body),
    OriginalPlain(Body),
    BoostExtended(Body),
    BoostPlain(Body),
}

impl Record {
    /// Parse a single JSON line.
    ///
    /// Invalid JSON is reported as [Error::MalformedRecord] since it only concerns this line.
    pub fn from_line(line: &str) -> Result<Self, Error> {
        let status: Status = serde_json::from_str(line)
            .map_err(|e| Error::MalformedRecord(format!("invalid JSON: {e}")))?;
        Self::try_from(status)
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::OriginalExtended(_) => RecordKind::OriginalExtended,
            Record::OriginalPlain(_) => RecordKind::OriginalPlain,
            Record::BoostExtended(_) => RecordKind::BoostExtended,
            Record::BoostPlain(_) => RecordKind::BoostPlain,
        }
    }

    pub fn resolve(self) -> ResolvedText {
        let kind = self.kind();
        let body = match self {
            Record::OriginalExtended(b)
            | Record::OriginalPlain(b)
            | Record::BoostExtended(b)
            | Record::BoostPlain(b) => b,
        };
        ResolvedText {
            text: body.text,
            tags: body.tags,
            kind,
        }
    }
}

impl TryFrom<Status> for Record {
    type Error = Error;

    fn try_from(status: Status) -> Result<Self, Self::Error> {
        match status.retweeted_status {
            Some(boosted) => {
                let (extended, plain) = Body::split(*boosted);
                extended
                    .map(Record::BoostExtended)
                    .or_else(|| plain.map(Record::BoostPlain))
                    .ok_or_else(|| {
                        Error::MalformedRecord("boosted post has no text".to_string())
                    })
            }
            None => {
                let (extended, plain) = Body::split(status);
                extended
                    .map(Record::OriginalExtended)
                    .or_else(|| plain.map(Record::OriginalPlain))
                    .ok_or_else(|| Error::MalformedRecord("post has no text".to_string()))
            }
        }
    }
}

/// Text and raw hashtags selected for a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedText {
    text: String,
    tags: Vec<String>,
    kind: RecordKind,
}

impl ResolvedText {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}
