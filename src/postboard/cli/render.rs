//! # Rendering Module
//!
//! Turns command results into terminal text. Everything here takes its state
//! as arguments and returns strings; printing happens in `commands.rs`.
//!
//! Layout math (column widths, truncation) uses display width so wide
//! characters line up. Styling is applied after padding, so escape codes never
//! count towards a column's width.

use colored::{ColoredString, Colorize};
use postboard::api::{CmdMessage, CmdResult, MessageLevel};
use postboard::model::{Comment, Post, PostStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 48;
const COLUMN_GAP: &str = "  ";

/// What the dashboard currently shows: either table may be absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoardView<'a> {
    pub posts: Option<&'a [Post]>,
    pub comments: Option<&'a [Comment]>,
}

impl<'a> BoardView<'a> {
    pub fn from_result(result: &'a CmdResult) -> Self {
        Self {
            posts: result.listed_posts.as_deref(),
            comments: result.listed_comments.as_deref(),
        }
    }
}

struct Cell {
    text: String,
    style: fn(&str) -> ColoredString,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: |s| s.normal(),
        }
    }

    fn styled(text: impl Into<String>, style: fn(&str) -> ColoredString) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

pub fn render_board(view: &BoardView) -> String {
    let mut sections = Vec::new();
    if let Some(posts) = view.posts {
        sections.push(format!("{}\n{}", "Posts".bold(), render_posts(posts)));
    }
    if let Some(comments) = view.comments {
        sections.push(format!("{}\n{}", "Comments".bold(), render_comments(comments)));
    }
    sections.join("\n")
}

pub fn render_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return format!("{}\n", "No posts found.".dimmed());
    }
    let rows = posts
        .iter()
        .map(|post| {
            let deleted = post.status().is_deleted();
            vec![
                Cell::plain(post.id.clone()),
                if deleted {
                    Cell::styled(post.title.clone(), |s| s.dimmed().strikethrough())
                } else {
                    Cell::plain(post.title.clone())
                },
                Cell::plain(post.views.to_string()),
                status_cell(post.status()),
            ]
        })
        .collect();
    render_table(&["ID", "Title", "Views", "Status"], rows)
}

pub fn render_comments(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return format!("{}\n", "No comments found.".dimmed());
    }
    let rows = comments
        .iter()
        .map(|comment| {
            vec![
                Cell::plain(comment.id.clone()),
                Cell::plain(comment.text.clone()),
                Cell::plain(comment.post_id.clone()),
            ]
        })
        .collect();
    render_table(&["ID", "Text", "Post"], rows)
}

pub fn render_post_detail(post: &Post) -> String {
    format!(
        "{} {}\n{} {}\n{} {}\n{} {}\n",
        "id:".dimmed(),
        post.id,
        "title:".dimmed(),
        post.title,
        "views:".dimmed(),
        post.views,
        "status:".dimmed(),
        (status_cell(post.status()).style)(&post.status().to_string()),
    )
}

pub fn render_comment_detail(comment: &Comment) -> String {
    format!(
        "{} {}\n{} {}\n{} {}\n",
        "id:".dimmed(),
        comment.id,
        "text:".dimmed(),
        comment.text,
        "post:".dimmed(),
        comment.post_id,
    )
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let line = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", line)
        })
        .collect()
}

fn status_cell(status: PostStatus) -> Cell {
    match status {
        PostStatus::Active => Cell::styled(status.to_string(), |s| s.green()),
        PostStatus::Deleted => Cell::styled(status.to_string(), |s| s.red()),
    }
}

fn render_table(headers: &[&str], rows: Vec<Vec<Cell>>) -> String {
    let rows: Vec<Vec<Cell>> = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| Cell {
                    text: truncate_to_width(&cell.text.replace('\n', " "), MAX_CELL_WIDTH),
                    style: cell.style,
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.text.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width).bold().to_string())
        .collect();
    push_line(&mut out, &header_line);

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let styled = (cell.style)(&cell.text).to_string();
                format!("{}{}", styled, " ".repeat(width - cell.text.width()))
            })
            .collect();
        push_line(&mut out, &line);
    }
    out
}

fn push_line(out: &mut String, cells: &[String]) {
    out.push_str(cells.join(COLUMN_GAP).trim_end());
    out.push('\n');
}

fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn posts_table_tags_deleted_rows() {
        plain();
        let mut gone = Post::new("2".into(), "Gone".into(), 0);
        gone.is_deleted = true;
        let posts = vec![Post::new("1".into(), "Hello".into(), 10), gone];

        let out = render_posts(&posts);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID  Title  Views  Status");
        assert_eq!(lines[1], "1   Hello  10     Active");
        assert_eq!(lines[2], "2   Gone   0      Deleted");
    }

    #[test]
    fn comments_table_lists_post_reference() {
        plain();
        let comments = vec![Comment::new("1".into(), "Nice post".into(), "3".into())];

        let out = render_comments(&comments);
        assert_eq!(out, "ID  Text       Post\n1   Nice post  3\n");
    }

    #[test]
    fn empty_tables_say_so() {
        plain();
        assert_eq!(render_posts(&[]), "No posts found.\n");
        assert_eq!(render_comments(&[]), "No comments found.\n");
    }

    #[test]
    fn board_renders_only_present_tables() {
        plain();
        let posts = vec![Post::new("1".into(), "Hello".into(), 1)];
        let view = BoardView {
            posts: Some(&posts),
            comments: None,
        };
        let out = render_board(&view);
        assert!(out.starts_with("Posts\n"));
        assert!(!out.contains("Comments"));
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(60);
        let cut = truncate_to_width(&long, MAX_CELL_WIDTH);
        assert_eq!(cut.width(), MAX_CELL_WIDTH);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("short", MAX_CELL_WIDTH), "short");
    }

    #[test]
    fn wide_characters_align() {
        plain();
        let comments = vec![
            Comment::new("1".into(), "日本".into(), "1".into()),
            Comment::new("2".into(), "abcd".into(), "1".into()),
        ];
        let out = render_comments(&comments);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "1   日本  1");
        assert_eq!(lines[2], "2   abcd  1");
    }

    #[test]
    fn messages_render_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::success("Saved"), CmdMessage::error("Oops")]);
        assert_eq!(out, "Saved\nOops\n");
    }
}
