pub mod etl;
pub mod fetcher;
pub mod normalizer;
pub mod pipeline;
pub mod presenter;
pub mod transform;

pub use crate::domain::model::{Record, TodoItem, TodoStatus};
pub use crate::domain::ports::{ConfigProvider, Fetcher, Pipeline};
pub use crate::utils::error::Result;
