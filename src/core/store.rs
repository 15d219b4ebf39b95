use crate::core::{CommentSource, FetchState, FetchStatus};
use crate::domain::model::Comment;
use crate::utils::error::FetchFailure;
use chrono::Utc;

/// Owns the fetched comment collection and its fetch lifecycle.
///
/// Transitions only ever run `idle -> loading -> succeeded | failed`. There is
/// no way back to `loading`, so a session loads at most once.
#[derive(Debug, Default)]
pub struct CommentStore {
    state: FetchState,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn status(&self) -> FetchStatus {
        self.state.status()
    }

    pub fn items(&self) -> &[Comment] {
        self.state.items()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Moves `idle` to `loading`. Returns `false` when a fetch was already
    /// dispatched, in which case the caller must not issue another request.
    pub fn begin(&mut self) -> bool {
        if !matches!(self.state, FetchState::Idle) {
            tracing::debug!("Fetch already dispatched (status: {})", self.status());
            return false;
        }

        tracing::debug!("Fetch status: idle -> loading");
        self.state = FetchState::Loading;
        true
    }

    /// Settles a `loading` store with the outcome of the request.
    pub fn complete(&mut self, outcome: Result<Vec<Comment>, FetchFailure>) {
        if !matches!(self.state, FetchState::Loading) {
            tracing::warn!(
                "Ignoring fetch outcome while status is {}, expected loading",
                self.status()
            );
            return;
        }

        self.state = match outcome {
            Ok(items) => {
                tracing::info!("Fetch status: loading -> succeeded ({} comments)", items.len());
                FetchState::Succeeded {
                    items,
                    loaded_at: Utc::now(),
                }
            }
            Err(failure) => {
                tracing::error!("Fetch status: loading -> failed ({})", failure);
                FetchState::Failed {
                    error: failure.to_string(),
                }
            }
        };
    }

    /// Loads the collection from `source` if nothing was dispatched yet.
    pub async fn fetch<S>(&mut self, source: &S)
    where
        S: CommentSource + ?Sized,
    {
        if !self.begin() {
            return;
        }

        let outcome = source.fetch_comments().await;
        self.complete(outcome);
    }
}
