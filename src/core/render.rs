//! Presentation of the derived view: body previews, the per-session
//! [`CommentView`] snapshot, and its text / JSON renderings.

use crate::core::expansion::ExpansionState;
use crate::core::view::{domains_of, filter_by, group_by_domain};
use crate::domain::model::{Comment, FetchState, FetchStatus, FilterCriteria};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

/// Characters of a body shown while the comment is collapsed.
pub const PREVIEW_CHARS: usize = 120;
pub const ELLIPSIS: &str = "…";
pub const MORE_AFFORDANCE: &str = "[+ more]";

const BODY_INDENT: &str = "      ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum BodyView {
    Collapsed { preview: String, truncated: bool },
    Expanded { text: String },
}

impl BodyView {
    pub fn collapsed(body: &str) -> Self {
        if body.chars().count() > PREVIEW_CHARS {
            let head: String = body.chars().take(PREVIEW_CHARS).collect();
            BodyView::Collapsed {
                preview: format!("{}{}", head, ELLIPSIS),
                truncated: true,
            }
        } else {
            BodyView::Collapsed {
                preview: body.to_string(),
                truncated: false,
            }
        }
    }

    pub fn expanded(body: &str) -> Self {
        BodyView::Expanded {
            text: body.to_string(),
        }
    }

    pub fn of(body: &str, expanded: bool) -> Self {
        if expanded {
            Self::expanded(body)
        } else {
            Self::collapsed(body)
        }
    }

    /// The body as displayed, without indentation or affordance.
    pub fn text(&self) -> &str {
        match self {
            BodyView::Collapsed { preview, .. } => preview,
            BodyView::Expanded { text } => text,
        }
    }

    pub fn has_more(&self) -> bool {
        matches!(self, BodyView::Collapsed { truncated: true, .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentEntry {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub expanded: bool,
    pub body: BodyView,
}

impl CommentEntry {
    fn new(comment: &Comment, expansion: &ExpansionState) -> Self {
        let expanded = expansion.is_comment_expanded(comment.id);
        Self {
            id: comment.id,
            post_id: comment.post_id,
            name: comment.name.clone(),
            email: comment.email.clone(),
            expanded,
            body: BodyView::of(&comment.body, expanded),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainGroup {
    pub domain: String,
    pub expanded: bool,
    pub comments: Vec<CommentEntry>,
}

/// Everything the viewer shows at one moment, derived from the store, the
/// filter criteria and the expansion flags.
#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    pub status: FetchStatus,
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub query: String,
    pub domain_filter: String,
    pub total: usize,
    pub shown: usize,
    pub domains: Vec<String>,
    pub groups: Vec<DomainGroup>,
}

impl CommentView {
    pub fn build(state: &FetchState, criteria: &FilterCriteria, expansion: &ExpansionState) -> Self {
        let items = state.items();
        let filtered = filter_by(items, criteria);
        let shown = filtered.len();

        let groups = group_by_domain(filtered)
            .into_iter()
            .map(|(domain, comments)| DomainGroup {
                expanded: expansion.is_domain_expanded(&domain),
                comments: comments
                    .into_iter()
                    .map(|c| CommentEntry::new(c, expansion))
                    .collect(),
                domain,
            })
            .collect();

        Self {
            status: state.status(),
            error: state.error().map(str::to_string),
            loaded_at: state.loaded_at(),
            query: criteria.query.clone(),
            domain_filter: criteria.domain_filter.clone(),
            total: items.len(),
            shown,
            domains: domains_of(items),
            groups,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();

        // 寫入 String 不會失敗，忽略 fmt::Result
        match self.status {
            FetchStatus::Idle | FetchStatus::Loading => {
                let _ = writeln!(out, "Loading…");
            }
            FetchStatus::Failed => {
                let _ = writeln!(out, "Error: {}", self.error.as_deref().unwrap_or_default());
            }
            FetchStatus::Succeeded => {
                if let Some(loaded_at) = self.loaded_at {
                    let _ = writeln!(
                        out,
                        "Loaded {} comments at {}",
                        self.total,
                        loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
                    );
                }
            }
        }

        let _ = writeln!(
            out,
            "Search: \"{}\"  Domain: {}",
            self.query, self.domain_filter
        );
        let _ = writeln!(out, "Showing {} of {} comments", self.shown, self.total);

        if self.status == FetchStatus::Succeeded && self.shown == 0 {
            let _ = writeln!(out, "No comments match the current filters.");
        }

        for group in &self.groups {
            let marker = if group.expanded { "▾" } else { "▸" };
            let _ = writeln!(out, "{} {} ({})", marker, group.domain, group.comments.len());
            if !group.expanded {
                continue;
            }

            for entry in &group.comments {
                let _ = writeln!(
                    out,
                    "    #{} {} <{}> (post {})",
                    entry.id, entry.name, entry.email, entry.post_id
                );
                // 只依 '\n' 切行，保留原文的 '\r' 與其他空白
                let text = entry.body.text();
                let text = text.strip_suffix('\n').unwrap_or(text);
                let mut lines = text.split('\n').peekable();
                while let Some(line) = lines.next() {
                    if lines.peek().is_none() && entry.body.has_more() {
                        let _ = writeln!(out, "{}{} {}", BODY_INDENT, line, MORE_AFFORDANCE);
                    } else {
                        let _ = writeln!(out, "{}{}", BODY_INDENT, line);
                    }
                }
            }
        }

        out
    }
}
