use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain filter value that keeps every domain.
pub const ALL_DOMAINS: &str = "all";

/// Grouping key for emails without a usable `@` part.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// One record of the public comments feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Fetch lifecycle, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Succeeded => "succeeded",
            FetchStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Fetch lifecycle together with whatever the lifecycle has produced.
///
/// Items only exist in `Succeeded` and an error message only in `Failed`,
/// so neither can leak into the wrong status.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Succeeded {
        items: Vec<Comment>,
        loaded_at: DateTime<Utc>,
    },
    Failed {
        error: String,
    },
}

impl FetchState {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Idle => FetchStatus::Idle,
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Succeeded { .. } => FetchStatus::Succeeded,
            FetchState::Failed { .. } => FetchStatus::Failed,
        }
    }

    pub fn items(&self) -> &[Comment] {
        match self {
            FetchState::Succeeded { items, .. } => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        match self {
            FetchState::Succeeded { loaded_at, .. } => Some(*loaded_at),
            _ => None,
        }
    }
}

/// User-controlled search text and domain selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    pub domain_filter: String,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, domain_filter: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            domain_filter: domain_filter.into(),
        }
    }

    pub fn is_all_domains(&self) -> bool {
        self.domain_filter == ALL_DOMAINS
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new("", ALL_DOMAINS)
    }
}
