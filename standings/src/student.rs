use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier issued by the scores API. Some deployments send numbers,
/// others strings, so both are accepted verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    Number(i64),
    Text(String),
}

impl From<i64> for StudentId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// A student record as returned by `GET /students/withTotalScores`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Total score; the only ranking key.
    pub points: i64,
    /// Avatar URL.
    pub image: String,
}

impl Student {
    pub fn new(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        points: i64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
            image: image.into(),
        }
    }
}
