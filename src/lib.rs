pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::HttpCommentSource;
pub use app::Session;
pub use config::{OutputFormat, ViewerConfig};
pub use crate::core::{render::CommentView, store::CommentStore};
pub use domain::model::{Comment, FetchState, FetchStatus, FilterCriteria};
pub use utils::error::{FetchFailure, Result, ViewerError};
