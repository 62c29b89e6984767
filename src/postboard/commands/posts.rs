use crate::commands::list::reload_posts;
use crate::commands::{allocate, CmdMessage, CmdResult, PostDraft};
use crate::error::{BoardError, Result};
use crate::model::{Post, Resource};
use crate::store::RecordStore;

/// Creates the post when the draft carries no id, otherwise replaces the
/// stored one. Updates never touch the soft-delete flag.
pub fn save<S: RecordStore>(store: &mut S, draft: PostDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match draft.id {
        None => {
            let id = allocate::next_id(store, Resource::Posts)?;
            let post = Post::new(id, draft.title, draft.views);
            match store.create(Resource::Posts, &post) {
                Ok(()) => {
                    result.add_message(CmdMessage::success(format!(
                        "Post created ({}): {}",
                        post.id, post.title
                    )));
                    result.affected_posts.push(post);
                }
                Err(e) => result.record_rejection(e, "Creating post")?,
            }
        }
        Some(id) => {
            let existing: Post = store
                .get(Resource::Posts, &id)?
                .ok_or_else(|| BoardError::NotFound {
                    resource: Resource::Posts,
                    id: id.clone(),
                })?;
            let post = Post {
                id: existing.id,
                title: draft.title,
                views: draft.views,
                is_deleted: existing.is_deleted,
            };
            match store.replace(Resource::Posts, &id, &post) {
                Ok(()) => {
                    result.add_message(CmdMessage::success(format!(
                        "Post updated ({}): {}",
                        post.id, post.title
                    )));
                    result.affected_posts.push(post);
                }
                Err(e) => result.record_rejection(e, "Updating post")?,
            }
        }
    }

    reload_posts(store, result)
}

pub fn get<S: RecordStore>(store: &S, id: &str) -> Result<CmdResult> {
    let post: Post = store
        .get(Resource::Posts, id)?
        .ok_or_else(|| BoardError::NotFound {
            resource: Resource::Posts,
            id: id.to_string(),
        })?;
    let mut result = CmdResult::default();
    result.affected_posts.push(post);
    Ok(result)
}
