//! # CLI Behavior
//!
//! This is **one possible UI client** for postboard, not the application itself.
//! For the overall architecture, see the library documentation.
//!
//! ### Naked Execution (`postboard`)
//!
//! Running `postboard` with no command shows the whole dashboard: the posts
//! table followed by the comments table.
//!
//! ### Save Means Create Or Update
//!
//! `posts save` and `comments save` mirror a form: without `--id` a new record
//! is created with the next free id, with `--id` the existing record is
//! replaced. Updating an id that does not exist is an error, never a create.
//!
//! ### Deleting
//!
//! `posts delete` is a soft delete: the post stays listed, tagged `Deleted`,
//! until `posts restore`. `comments delete` removes the comment for good.
//!
//! ### API Location
//!
//! `--api` wins over the `api-url` config key, which defaults to
//! `http://localhost:3000`. The config file lives in `--config-dir`,
//! `$POSTBOARD_CONFIG_DIR`, or the platform config directory, in that order.

mod commands;
mod render;
mod setup;

pub use commands::run;
