use serde::{Deserialize, Serialize};
use std::fmt;

/// A named collection exposed through uniform REST endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Posts,
    Comments,
}

impl Resource {
    /// Path segment under the API base url.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Posts => "posts",
            Resource::Comments => "comments",
        }
    }

    /// Human readable singular name.
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Posts => "Post",
            Resource::Comments => "Comment",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub views: i64,
    #[serde(rename = "isDeleted", default, deserialize_with = "lenient::flag")]
    pub is_deleted: bool,
}

impl Post {
    /// A fresh post is always active.
    pub fn new(id: String, title: String, views: i64) -> Self {
        Self {
            id,
            title,
            views,
            is_deleted: false,
        }
    }

    pub fn status(&self) -> PostStatus {
        if self.is_deleted {
            PostStatus::Deleted
        } else {
            PostStatus::Active
        }
    }
}

/// Soft-delete state of a post. Both transitions are always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostStatus {
    Active,
    Deleted,
}

impl PostStatus {
    pub fn is_deleted(&self) -> bool {
        matches!(self, PostStatus::Deleted)
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostStatus::Active => f.write_str("Active"),
            PostStatus::Deleted => f.write_str("Deleted"),
        }
    }
}

/// Body of the partial update that toggles a post's soft-delete flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeletionPatch {
    #[serde(rename = "isDeleted")]
    pub is_deleted: bool,
}

impl From<PostStatus> for DeletionPatch {
    fn from(status: PostStatus) -> Self {
        Self {
            is_deleted: status.is_deleted(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(rename = "postId", default, deserialize_with = "lenient::string")]
    pub post_id: String,
}

impl Comment {
    pub fn new(id: String, text: String, post_id: String) -> Self {
        Self { id, text, post_id }
    }
}

/// Parses the leading integer of `input` the way a form field is read:
/// leading whitespace and an optional sign are accepted, parsing stops at
/// the first non-digit, and input without leading digits yields `None`.
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Deserializers that accept whatever a loosely typed JSON store hands back.
mod lenient {
    use super::parse_int;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        })
    }

    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                .unwrap_or_default(),
            Some(Value::String(s)) => parse_int(&s).unwrap_or_default(),
            _ => 0,
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Bool(b)) => b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
            None | Some(Value::Null) => false,
        })
    }
}
