//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all postboard operations, whatever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: raw form fields are trimmed, an empty id means
//!   "create", views are read leniently (`"12abc"` is 12, junk is 0)
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own and holds no state besides the store, so every
//! call reflects the remote store as it is now.
//!
//! ## Generic Over RecordStore
//!
//! `BoardApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `BoardApi<HttpStore>`
//! - Testing: `BoardApi<InMemoryStore>`

use crate::commands::{self, CommentDraft, PostDraft};
use crate::error::Result;
use crate::model::parse_int;
use crate::store::RecordStore;

/// Raw post form fields, as typed by a user.
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub id: String,
    pub title: String,
    pub views: String,
}

impl PostForm {
    pub fn into_draft(self) -> PostDraft {
        PostDraft {
            id: non_empty(&self.id),
            title: self.title.trim().to_string(),
            views: parse_int(self.views.trim()).unwrap_or(0),
        }
    }
}

/// Raw comment form fields, as typed by a user.
#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    pub id: String,
    pub text: String,
    pub post_id: String,
}

impl CommentForm {
    pub fn into_draft(self) -> CommentDraft {
        CommentDraft {
            id: non_empty(&self.id),
            text: self.text.trim().to_string(),
            post_id: self.post_id.trim().to_string(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// The main API facade for postboard operations.
pub struct BoardApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> BoardApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn board(&self) -> Result<commands::CmdResult> {
        commands::list::board(&self.store)
    }

    pub fn list_posts(&self) -> Result<commands::CmdResult> {
        commands::list::posts(&self.store)
    }

    pub fn get_post(&self, id: &str) -> Result<commands::CmdResult> {
        commands::posts::get(&self.store, id.trim())
    }

    pub fn save_post(&mut self, form: PostForm) -> Result<commands::CmdResult> {
        commands::posts::save(&mut self.store, form.into_draft())
    }

    pub fn soft_delete_post(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::deletion::soft_delete(&mut self.store, id.trim())
    }

    pub fn restore_post(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::deletion::restore(&mut self.store, id.trim())
    }

    pub fn list_comments(&self) -> Result<commands::CmdResult> {
        commands::list::comments(&self.store)
    }

    pub fn get_comment(&self, id: &str) -> Result<commands::CmdResult> {
        commands::comments::get(&self.store, id.trim())
    }

    pub fn save_comment(&mut self, form: CommentForm) -> Result<commands::CmdResult> {
        commands::comments::save(&mut self.store, form.into_draft())
    }

    pub fn delete_comment(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::comments::delete(&mut self.store, id.trim())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
