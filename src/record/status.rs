/*! Wire shape of a status object, as found in a JSONL dump.

Only the fields used for tag extraction are modelled, every other field is ignored.
Everything is optional here: shape validation happens in [super::Record].
!*/
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Status {
    /// plain (possibly truncated) text
    pub text: Option<String>,
    /// entities of the plain text
    pub entities: Option<Entities>,
    /// untruncated text and its entities
    pub extended_tweet: Option<ExtendedTweet>,
    /// boosted post, if this status is a boost
    pub retweeted_status: Option<Box<Status>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtendedTweet {
    pub full_text: Option<String>,
    pub entities: Option<Entities>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Entities {
    #[serde(default)]
    pub hashtags: Vec<Hashtag>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hashtag {
    pub text: String,
}

impl Entities {
    /// raw hashtag values, in order of appearance.
    pub fn hashtag_texts(self) -> Vec<String> {
        self.hashtags.into_iter().map(|h| h.text).collect()
    }
}
