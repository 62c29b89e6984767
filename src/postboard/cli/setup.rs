use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "postboard", bin_name = "postboard", version)]
#[command(about = "Dashboard for posts and comments served by a REST API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base url of the REST API (overrides the configured one)
    #[arg(long, global = true, value_name = "URL")]
    pub api: Option<String>,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Verbose logging to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage posts
    #[command(subcommand, alias = "p")]
    Posts(PostCommands),

    /// Manage comments
    #[command(subcommand, alias = "c")]
    Comments(CommentCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (api-url, timeout)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// List all posts, deleted ones included
    #[command(alias = "ls")]
    List,

    /// Show one post
    Show { id: String },

    /// Create a post, or update it when --id is given
    Save {
        /// Id of the post to update; leave empty to create
        #[arg(long, default_value = "")]
        id: String,

        #[arg(long, default_value = "")]
        title: String,

        /// View count; non-numeric input counts as 0
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        views: String,
    },

    /// Soft delete a post (it stays listed and can be restored)
    #[command(alias = "rm")]
    Delete { id: String },

    /// Restore a soft-deleted post
    Restore { id: String },
}

#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// List all comments
    #[command(alias = "ls")]
    List,

    /// Show one comment
    Show { id: String },

    /// Create a comment, or update it when --id is given
    Save {
        /// Id of the comment to update; leave empty to create
        #[arg(long, default_value = "")]
        id: String,

        #[arg(long, default_value = "")]
        text: String,

        /// Id of the post this comment belongs to
        #[arg(long, default_value = "")]
        post_id: String,
    },

    /// Permanently delete a comment
    #[command(alias = "rm")]
    Delete { id: String },
}
