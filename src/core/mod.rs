pub mod expansion;
pub mod render;
pub mod store;
pub mod view;

pub use crate::domain::model::{Comment, FetchState, FetchStatus, FilterCriteria};
pub use crate::domain::ports::{CommentSource, ConfigProvider};
pub use crate::utils::error::Result;
