use crate::commands::list::reload_comments;
use crate::commands::{allocate, CmdMessage, CmdResult, CommentDraft};
use crate::error::{BoardError, Result};
use crate::model::{Comment, Post, Resource};
use crate::store::RecordStore;

/// Creates (no id) or replaces a comment after checking its post exists.
///
/// The post probe runs immediately before the write; nothing keeps the post
/// from disappearing in between.
pub fn save<S: RecordStore>(store: &mut S, draft: CommentDraft) -> Result<CmdResult> {
    ensure_post_exists(store, &draft.post_id)?;
    let mut result = CmdResult::default();

    match draft.id {
        None => {
            let id = allocate::next_id(store, Resource::Comments)?;
            let comment = Comment::new(id, draft.text, draft.post_id);
            match store.create(Resource::Comments, &comment) {
                Ok(()) => {
                    result.add_message(CmdMessage::success(format!(
                        "Comment created ({}) on post {}",
                        comment.id, comment.post_id
                    )));
                    result.affected_comments.push(comment);
                }
                Err(e) => result.record_rejection(e, "Creating comment")?,
            }
        }
        Some(id) => {
            if store.get::<Comment>(Resource::Comments, &id)?.is_none() {
                return Err(BoardError::NotFound {
                    resource: Resource::Comments,
                    id,
                });
            }
            let comment = Comment::new(id.clone(), draft.text, draft.post_id);
            match store.replace(Resource::Comments, &id, &comment) {
                Ok(()) => {
                    result.add_message(CmdMessage::success(format!(
                        "Comment updated ({}) on post {}",
                        comment.id, comment.post_id
                    )));
                    result.affected_comments.push(comment);
                }
                Err(e) => result.record_rejection(e, "Updating comment")?,
            }
        }
    }

    reload_comments(store, result)
}

/// Loads one comment, e.g. to prefill an edit.
pub fn get<S: RecordStore>(store: &S, id: &str) -> Result<CmdResult> {
    let comment: Comment = store
        .get(Resource::Comments, id)?
        .ok_or_else(|| BoardError::NotFound {
            resource: Resource::Comments,
            id: id.to_string(),
        })?;
    let mut result = CmdResult::default();
    result.affected_comments.push(comment);
    Ok(result)
}

/// Removes a comment permanently.
pub fn delete<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.delete(Resource::Comments, id) {
        Ok(()) => result.add_message(CmdMessage::success(format!("Comment deleted: {}", id))),
        Err(e) => result.record_rejection(e, "Deleting comment")?,
    }
    reload_comments(store, result)
}

fn ensure_post_exists<S: RecordStore>(store: &S, post_id: &str) -> Result<()> {
    if post_id.is_empty() {
        return Err(BoardError::MissingReference(
            "A post id is required for a comment".to_string(),
        ));
    }
    match store.get::<Post>(Resource::Posts, post_id)? {
        Some(_) => Ok(()),
        None => Err(BoardError::MissingReference(format!(
            "Post {} does not exist",
            post_id
        ))),
    }
}
