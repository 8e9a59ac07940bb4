use crate::core::normalizer::normalize_with_report;
use crate::core::presenter::present;
use crate::core::{ConfigProvider, Fetcher, Pipeline, Record, TodoItem};
use crate::utils::error::Result;
use std::io::Write;

/// Fetches todos from the configured source, normalizes them and prints them.
pub struct TodoPipeline<F: Fetcher, C: ConfigProvider> {
    fetcher: F,
    config: C,
}

impl<F: Fetcher, C: ConfigProvider> TodoPipeline<F, C> {
    pub fn new(fetcher: F, config: C) -> Self {
        Self { fetcher, config }
    }
}

#[async_trait::async_trait]
impl<F: Fetcher, C: ConfigProvider> Pipeline for TodoPipeline<F, C> {
    fn requested(&self) -> u32 {
        self.config.limit()
    }

    async fn extract(&self) -> Result<Vec<Record>> {
        let url = self.config.todos_url()?;
        self.fetcher.fetch(&url).await
    }

    fn transform(&self, data: &[Record]) -> Result<Vec<TodoItem>> {
        let report = normalize_with_report(data);
        if !report.dropped.is_empty() {
            tracing::debug!(
                "Dropped {} of {} records during normalization",
                report.dropped.len(),
                data.len()
            );
        }
        Ok(report.items)
    }

    fn load(&self, items: &[TodoItem], out: &mut dyn Write) -> Result<()> {
        present(items, out)?;
        Ok(())
    }
}
