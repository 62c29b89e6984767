use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Comment, Post, Resource};
use crate::store::RecordStore;

pub fn posts<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let posts: Vec<Post> = store.list(Resource::Posts)?;
    Ok(CmdResult::default().with_listed_posts(posts))
}

pub fn comments<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let comments: Vec<Comment> = store.list(Resource::Comments)?;
    Ok(CmdResult::default().with_listed_comments(comments))
}

/// Both tables, as shown when the dashboard opens.
pub fn board<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let posts: Vec<Post> = store.list(Resource::Posts)?;
    let comments: Vec<Comment> = store.list(Resource::Comments)?;
    Ok(CmdResult::default()
        .with_listed_posts(posts)
        .with_listed_comments(comments))
}

/// Replaces the posts table of `result` with a fresh read.
pub(crate) fn reload_posts<S: RecordStore>(store: &S, result: CmdResult) -> Result<CmdResult> {
    let posts: Vec<Post> = store.list(Resource::Posts)?;
    Ok(result.with_listed_posts(posts))
}

/// Replaces the comments table of `result` with a fresh read.
pub(crate) fn reload_comments<S: RecordStore>(store: &S, result: CmdResult) -> Result<CmdResult> {
    let comments: Vec<Comment> = store.list(Resource::Comments)?;
    Ok(result.with_listed_comments(comments))
}
