//! Tool record entity as received from the collection endpoint.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::ScoreBand;
use crate::utils::link_target::strip_query;

/// A single catalog entry.
///
/// Records are immutable once decoded. Optional fields the source may omit
/// (`tagline`, `topics`, `thumbnailUrl`, `website`, `score`) decode to their
/// empty value instead of failing the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,

    pub name: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub tagline: String,

    /// Topic names, already normalized from either bare strings or `{ "name": .. }` objects.
    #[serde(default, deserialize_with = "deserialize_topics")]
    pub topics: Vec<String>,

    #[serde(default)]
    pub thumbnail_url: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    /// ISO-8601 creation timestamp, kept verbatim.
    pub created_at: String,

    #[serde(default)]
    pub score: Option<f64>,
}

impl ToolRecord {
    /// Creates a record with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tagline: String::new(),
            topics: Vec::new(),
            thumbnail_url: None,
            website: None,
            created_at: created_at.into(),
            score: None,
        }
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_score(mut self, score: Option<f64>) -> Self {
        self.score = score;
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Returns the `YYYY-MM-DD` prefix of `created_at`, if the value is long enough.
    pub fn created_day(&self) -> Option<&str> {
        self.created_at.get(..10)
    }

    /// Returns the website with its query string removed, ready to be used as a link.
    ///
    /// `None` when there is no website or it uses a scheme other than HTTP(S).
    pub fn link_target(&self) -> Option<String> {
        self.website.as_deref().and_then(strip_query)
    }

    /// Returns the display tier for this record's score.
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Wire representation of a topic: either a bare string or a labeled object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TopicRepr {
    Plain(String),
    Labeled { name: String },
}

impl From<TopicRepr> for String {
    fn from(topic: TopicRepr) -> Self {
        match topic {
            TopicRepr::Plain(name) | TopicRepr::Labeled { name } => name,
        }
    }
}

fn deserialize_topics<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let topics: Option<Vec<TopicRepr>> = Option::deserialize(deserializer)?;
    Ok(topics
        .unwrap_or_default()
        .into_iter()
        .map(String::from)
        .collect())
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(id) => id,
        IdRepr::Number(id) => id.to_string(),
    })
}
