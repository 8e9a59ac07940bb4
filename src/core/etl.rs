use crate::core::Pipeline;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The source returned no records.
    NoData,
    Displayed { fetched: usize, displayed: usize },
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunOutcome> {
        writeln!(
            out,
            "Starting data fetching process for {} items...",
            self.pipeline.requested()
        )?;

        // Extract
        let raw_data = self.pipeline.extract().await?;
        if raw_data.is_empty() {
            tracing::info!("Source returned no records");
            writeln!(out, "No data fetched. Exiting.")?;
            return Ok(RunOutcome::NoData);
        }
        writeln!(out, "Successfully fetched {} items.", raw_data.len())?;

        // Transform
        let items = self.pipeline.transform(&raw_data)?;
        writeln!(out, "Data processed successfully.")?;
        tracing::debug!("Normalized {} of {} records", items.len(), raw_data.len());

        // Load
        self.pipeline.load(&items, &mut *out)?;
        out.flush()?;

        Ok(RunOutcome::Displayed {
            fetched: raw_data.len(),
            displayed: items.len(),
        })
    }
}
