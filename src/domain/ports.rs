use crate::domain::model::Comment;
use crate::utils::error::FetchFailure;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Anything that can hand over the full comment collection in one read.
#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch_comments(&self) -> Result<Vec<Comment>, FetchFailure>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn headers(&self) -> &BTreeMap<String, String>;
}
