use crate::domain::model::{Record, TodoItem};
use crate::utils::error::{Result, TodoError};
use async_trait::async_trait;
use std::io::Write;
use url::Url;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn limit(&self) -> u32;

    /// `<base>/todos?_limit=<limit>`
    fn todos_url(&self) -> Result<String> {
        let invalid = |reason: String| TodoError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: self.base_url().to_string(),
            reason,
        };

        let mut url = Url::parse(self.base_url()).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot be used as a base".to_string()))?
            .pop_if_empty()
            .push("todos");
        url.query_pairs_mut()
            .clear()
            .append_pair("_limit", &self.limit().to_string());

        Ok(url.into())
    }
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<Record>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Number of items the source is asked for.
    fn requested(&self) -> u32;
    async fn extract(&self) -> Result<Vec<Record>>;
    fn transform(&self, data: &[Record]) -> Result<Vec<TodoItem>>;
    fn load(&self, items: &[TodoItem], out: &mut dyn Write) -> Result<()>;
}
