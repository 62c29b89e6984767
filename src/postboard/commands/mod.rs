use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::model::{Comment, Post};
use serde::Serialize;
use tracing::warn;

pub mod allocate;
pub mod comments;
pub mod config;
pub mod deletion;
pub mod list;
pub mod posts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of a command.
///
/// Mutating commands reload the affected table and return it in
/// `listed_posts` / `listed_comments`, even when the write itself was
/// rejected. A rejection is reported in `rejections` and as an error message.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_posts: Vec<Post>,
    pub affected_comments: Vec<Comment>,
    pub listed_posts: Option<Vec<Post>>,
    pub listed_comments: Option<Vec<Comment>>,
    pub config: Option<BoardConfig>,
    pub rejections: Vec<BoardError>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_posts(mut self, posts: Vec<Post>) -> Self {
        self.listed_posts = Some(posts);
        self
    }

    pub fn with_listed_comments(mut self, comments: Vec<Comment>) -> Self {
        self.listed_comments = Some(comments);
        self
    }

    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Records a write the server refused. Anything that is not a rejection
    /// is handed back so the caller can propagate it.
    pub fn record_rejection(
        &mut self,
        error: BoardError,
        what: &str,
    ) -> std::result::Result<(), BoardError> {
        if !error.is_rejection() {
            return Err(error);
        }
        warn!(%error, "{} failed", what);
        self.add_message(CmdMessage::error(format!("{} failed: {}", what, error)));
        self.rejections.push(error);
        Ok(())
    }

    pub fn is_rejected(&self) -> bool {
        !self.rejections.is_empty()
    }
}

/// Input for creating (no id) or updating (id given) a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub id: Option<String>,
    pub title: String,
    pub views: i64,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, views: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            views,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Input for creating (no id) or updating (id given) a comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub id: Option<String>,
    pub text: String,
    pub post_id: String,
}

impl CommentDraft {
    pub fn new(text: impl Into<String>, post_id: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            post_id: post_id.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn messages_serialize_with_their_level() {
        let messages = vec![
            CmdMessage::success("Post created (1): A"),
            CmdMessage::error("Soft delete failed"),
        ];
        assert_eq!(
            serde_json::to_value(&messages).unwrap(),
            json!([
                {"level": "success", "content": "Post created (1): A"},
                {"level": "error", "content": "Soft delete failed"}
            ])
        );
    }

    #[test]
    fn rejection_is_recorded_as_error_message() {
        let mut result = CmdResult::default();
        result
            .record_rejection(
                BoardError::Rejected {
                    method: "DELETE".into(),
                    path: "/comments/2".into(),
                    status: 500,
                },
                "Deleting comment",
            )
            .unwrap();
        assert!(result.is_rejected());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }

    #[test]
    fn non_rejections_propagate() {
        let mut result = CmdResult::default();
        let err = result
            .record_rejection(BoardError::Config("bad".into()), "Saving")
            .unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
        assert!(!result.is_rejected());
    }
}
