pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use crate::core::{
    etl::{EtlEngine, RunOutcome},
    fetcher::HttpFetcher,
    normalizer::{normalize, DropReason},
    pipeline::TodoPipeline,
    transform::uppercase_field,
};
pub use domain::model::{Record, TodoItem};
pub use utils::error::{Result, TodoError};
