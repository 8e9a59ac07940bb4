use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_LIMIT: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "todo-fetch")]
#[command(about = "Fetch and process todo items from JSONPlaceholder.")]
pub struct CliConfig {
    #[arg(
        long,
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Number of todo items to fetch"
    )]
    pub limit: u32,

    #[arg(long, default_value = DEFAULT_BASE_URL, hide = true)]
    pub base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            base_url: DEFAULT_BASE_URL.to_string(),
            verbose: false,
            log_format: LogFormat::Compact,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn limit(&self) -> u32 {
        self.limit
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("limit", u64::from(self.limit), 1)?;
        validate_url("base_url", &self.base_url)?;
        Ok(())
    }
}
