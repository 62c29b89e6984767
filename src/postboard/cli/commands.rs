//! # CLI Layer
//!
//! This module is **one possible UI client** for postboard, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Failure Handling
//!
//! - Aborted operations (unknown update target, missing post reference) come
//!   back as `Err` and end the process with the error message and exit code 1.
//! - Writes the server refused come back as `Ok` with error messages; the
//!   reloaded table is printed anyway and the process exits normally.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and print output

use super::render::{
    render_board, render_comment_detail, render_messages, render_post_detail, BoardView,
};
use super::setup::{Cli, CommentCommands, Commands, OutputFormat, PostCommands};
use clap::Parser;
use directories::ProjectDirs;
use postboard::api::{BoardApi, CmdResult, CommentForm, ConfigAction, PostForm};
use postboard::commands;
use postboard::config::BoardConfig;
use postboard::error::{BoardError, Result};
use postboard::store::http::HttpStore;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "POSTBOARD_CONFIG_DIR";

struct AppContext {
    api: BoardApi<HttpStore>,
    output: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = resolve_config_dir(cli.config_dir.clone())?;
    debug!(config_dir = %config_dir.display(), "resolved config dir");

    // Config must stay reachable even when the stored api url is unusable
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &config_dir)?;

    match cli.command {
        Some(Commands::Posts(cmd)) => match cmd {
            PostCommands::List => handle_list_posts(&ctx),
            PostCommands::Show { id } => handle_show_post(&ctx, &id),
            PostCommands::Save { id, title, views } => {
                handle_save_post(&mut ctx, PostForm { id, title, views })
            }
            PostCommands::Delete { id } => handle_soft_delete(&mut ctx, &id),
            PostCommands::Restore { id } => handle_restore(&mut ctx, &id),
        },
        Some(Commands::Comments(cmd)) => match cmd {
            CommentCommands::List => handle_list_comments(&ctx),
            CommentCommands::Show { id } => handle_show_comment(&ctx, &id),
            CommentCommands::Save { id, text, post_id } => {
                handle_save_comment(&mut ctx, CommentForm { id, text, post_id })
            }
            CommentCommands::Delete { id } => handle_delete_comment(&mut ctx, &id),
        },
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_board(&ctx),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "postboard", "postboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BoardError::Config("Could not determine config dir".into()))
}

fn init_context(cli: &Cli, config_dir: &Path) -> Result<AppContext> {
    let config = BoardConfig::load(config_dir)?;
    let api_url = cli
        .api
        .clone()
        .unwrap_or_else(|| config.api_url.clone());
    info!(%api_url, "using API");

    let store = HttpStore::new(&api_url, config.timeout())?;
    Ok(AppContext {
        api: BoardApi::new(store),
        output: cli.output,
    })
}

fn handle_board(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.board()?;
    print_result(ctx, &result)
}

fn handle_list_posts(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_posts()?;
    print_result(ctx, &result)
}

fn handle_list_comments(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_comments()?;
    print_result(ctx, &result)
}

fn handle_show_post(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.get_post(id)?;
    match ctx.output {
        OutputFormat::Json => print_json(&json!(result.affected_posts.first())),
        OutputFormat::Text => {
            for post in &result.affected_posts {
                print!("{}", render_post_detail(post));
            }
            Ok(())
        }
    }
}

fn handle_show_comment(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.get_comment(id)?;
    match ctx.output {
        OutputFormat::Json => print_json(&json!(result.affected_comments.first())),
        OutputFormat::Text => {
            for comment in &result.affected_comments {
                print!("{}", render_comment_detail(comment));
            }
            Ok(())
        }
    }
}

fn handle_save_post(ctx: &mut AppContext, form: PostForm) -> Result<()> {
    let result = ctx.api.save_post(form)?;
    print_result(ctx, &result)
}

fn handle_soft_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.soft_delete_post(id)?;
    print_result(ctx, &result)
}

fn handle_restore(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.restore_post(id)?;
    print_result(ctx, &result)
}

fn handle_save_comment(ctx: &mut AppContext, form: CommentForm) -> Result<()> {
    let result = ctx.api.save_comment(form)?;
    print_result(ctx, &result)
}

fn handle_delete_comment(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_comment(id)?;
    print_result(ctx, &result)
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let is_show_all = matches!(action, ConfigAction::ShowAll);
    let result = commands::config::run(config_dir, action)?;
    if is_show_all {
        if let Some(config) = &result.config {
            for key in BoardConfig::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}

/// Prints messages, then whatever tables the command reloaded.
fn print_result(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    match ctx.output {
        OutputFormat::Json => {
            let mut body = serde_json::Map::new();
            if let Some(posts) = &result.listed_posts {
                body.insert("posts".into(), serde_json::to_value(posts)?);
            }
            if let Some(comments) = &result.listed_comments {
                body.insert("comments".into(), serde_json::to_value(comments)?);
            }
            if !result.messages.is_empty() {
                body.insert("messages".into(), serde_json::to_value(&result.messages)?);
            }
            body.insert("rejected".into(), json!(result.is_rejected()));
            print_json(&serde_json::Value::Object(body))
        }
        OutputFormat::Text => {
            print!("{}", render_messages(&result.messages));
            print!("{}", render_board(&BoardView::from_result(result)));
            Ok(())
        }
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
