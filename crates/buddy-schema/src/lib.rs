use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod request;
pub mod text;

pub use request::{TurnRequest, ValidationError, MAX_MESSAGE_LEN, MAX_SESSION_ID_LEN};
pub use text::normalize;

/// Psychological-support category a message is classified into.
///
/// The declaration order is significant: it is the order the classifier
/// walks the keyword table, so on equal scores the earlier variant wins.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Stress,
    Anxiety,
    Motivation,
    Focus,
    Sleep,
    Loneliness,
    SelfEsteem,
    Depression,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Stress,
        Category::Anxiety,
        Category::Motivation,
        Category::Focus,
        Category::Sleep,
        Category::Loneliness,
        Category::SelfEsteem,
        Category::Depression,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stress => "stress",
            Self::Anxiety => "anxiety",
            Self::Motivation => "motivation",
            Self::Focus => "focus",
            Self::Sleep => "sleep",
            Self::Loneliness => "loneliness",
            Self::SelfEsteem => "self-esteem",
            Self::Depression => "depression",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_owned()))
    }
}

/// Author of a chat log entry.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}

/// A curated scenario row. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychScenario {
    pub id: i64,
    pub category: Category,
    /// Display text; also the secondary substring-match key for keyword lookups.
    pub trigger: String,
    pub response: String,
    pub tips: String,
}

/// A scenario that has not been stored yet (seed input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScenario {
    pub category: Category,
    pub trigger: String,
    pub response: String,
    pub tips: String,
}

/// One persisted turn half in a session's chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub session_id: String,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
