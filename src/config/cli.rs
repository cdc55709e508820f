use crate::core::directory::CityFilter;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "onetap-doctor")]
#[command(about = "Healthcare directory: find, compare and consult doctors in Uttarakhand")]
pub struct CliConfig {
    /// Hosted AI text-generation endpoint
    #[arg(long, default_value = "https://api.blink.new/ai/generate")]
    pub ai_endpoint: String,

    /// Model identifier passed to the AI endpoint
    #[arg(long, default_value = "gpt-4o-mini")]
    pub ai_model: String,

    /// Maximum completion length
    #[arg(long, default_value = "500")]
    pub ai_max_tokens: u32,

    /// Directory holding the persisted photo cache
    #[arg(long, default_value = "./cache")]
    pub cache_dir: String,

    /// Simulated latency of the photo lookup, in milliseconds
    #[arg(long, default_value = "500")]
    pub photo_lookup_delay_ms: u64,

    /// City filter: All, Dehradun or Haldwani
    #[arg(long, default_value = "All")]
    pub city: CityFilter,

    /// Two doctor ids to compare, e.g. --compare 2,4
    #[arg(long, value_delimiter = ',')]
    pub compare: Vec<String>,

    /// Symptoms to run through the AI symptom checker
    #[arg(long)]
    pub symptoms: Option<String>,

    /// Drop the persisted photo cache before resolving
    #[arg(long)]
    pub clear_cache: bool,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn ai_endpoint(&self) -> &str {
        &self.ai_endpoint
    }

    fn ai_model(&self) -> &str {
        &self.ai_model
    }

    fn ai_max_tokens(&self) -> u32 {
        self.ai_max_tokens
    }

    fn cache_dir(&self) -> &str {
        &self.cache_dir
    }

    fn photo_lookup_delay_ms(&self) -> u64 {
        self.photo_lookup_delay_ms
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("ai_endpoint", &self.ai_endpoint)?;
        validate_positive_number("ai_max_tokens", self.ai_max_tokens, 1)?;
        validate_path("cache_dir", &self.cache_dir)?;
        Ok(())
    }
}
