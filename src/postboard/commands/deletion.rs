use crate::commands::list::reload_posts;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{DeletionPatch, PostStatus, Resource};
use crate::store::RecordStore;

pub fn soft_delete<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    set_status(store, id, PostStatus::Deleted)
}

pub fn restore<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    set_status(store, id, PostStatus::Active)
}

/// Patches only `isDeleted`; applying the current status again is harmless.
fn set_status<S: RecordStore>(store: &mut S, id: &str, status: PostStatus) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let verb = if status.is_deleted() {
        "deleted"
    } else {
        "restored"
    };

    match store.patch(Resource::Posts, id, &DeletionPatch::from(status)) {
        Ok(()) => result.add_message(CmdMessage::success(format!("Post {}: {}", verb, id))),
        Err(e) => {
            let what = if status.is_deleted() {
                "Soft delete"
            } else {
                "Restore"
            };
            result.record_rejection(e, what)?
        }
    }

    reload_posts(store, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Post;
    use crate::store::memory::fixtures::StoreFixture;

    fn status_of(posts: &[Post], id: &str) -> PostStatus {
        posts.iter().find(|p| p.id == id).unwrap().status()
    }

    #[test]
    fn soft_delete_marks_post_deleted() {
        let mut store = StoreFixture::new().with_post("1", "Title", 4).store;

        let result = soft_delete(&mut store, "1").unwrap();

        let listed = result.listed_posts.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(status_of(&listed, "1"), PostStatus::Deleted);
        assert_eq!(listed[0].title, "Title");
        assert!(result.messages[0].content.contains("Post deleted: 1"));
    }

    #[test]
    fn soft_delete_twice_stays_deleted() {
        let mut store = StoreFixture::new().with_post("1", "Title", 0).store;

        soft_delete(&mut store, "1").unwrap();
        let result = soft_delete(&mut store, "1").unwrap();

        assert!(!result.is_rejected());
        assert_eq!(
            status_of(&result.listed_posts.unwrap(), "1"),
            PostStatus::Deleted
        );
    }

    #[test]
    fn restore_brings_post_back() {
        let mut store = StoreFixture::new().with_deleted_post("3", "Back").store;

        let result = restore(&mut store, "3").unwrap();

        assert_eq!(
            status_of(&result.listed_posts.unwrap(), "3"),
            PostStatus::Active
        );
        assert!(result.messages[0].content.contains("Post restored: 3"));
    }

    #[test]
    fn restoring_active_post_is_noop() {
        let mut store = StoreFixture::new().with_post("2", "Never deleted", 0).store;

        let result = restore(&mut store, "2").unwrap();

        assert_eq!(
            status_of(&result.listed_posts.unwrap(), "2"),
            PostStatus::Active
        );
    }

    #[test]
    fn sends_partial_update_only() {
        let mut store = StoreFixture::new().with_post("1", "Title", 0).store;
        store.clear_requests();

        soft_delete(&mut store, "1").unwrap();

        assert_eq!(
            store.requests(),
            vec!["PATCH /posts/1".to_string(), "GET /posts".to_string()]
        );
    }

    #[test]
    fn missing_post_is_reported_and_table_reloaded() {
        let mut store = StoreFixture::new().with_post("1", "Title", 0).store;

        let result = soft_delete(&mut store, "42").unwrap();

        assert!(result.is_rejected());
        assert!(result.messages[0].content.contains("Soft delete failed"));
        assert_eq!(
            status_of(&result.listed_posts.unwrap(), "1"),
            PostStatus::Active
        );
    }
}
