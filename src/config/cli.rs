use crate::config::{DEFAULT_KEYWORD, MAX_KEYWORD_CHARS};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_max_length, validate_non_empty_string, validate_printable, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "standings-view")]
#[command(about = "Debug view of division standings filtered by keyword")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_KEYWORD, help = "Substring a division name must contain")]
    pub keyword: String,

    #[arg(long, help = "Also print percentages without the leading zero (.500)")]
    pub show_fixed: bool,

    #[arg(long, help = "Also print the filtered view as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit log events as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Print trace lines to stdout instead of the log")]
    pub stdout: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn show_fixed(&self) -> bool {
        self.show_fixed
    }

    fn emit_json(&self) -> bool {
        self.json
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("keyword", &self.keyword)?;
        validate_printable("keyword", &self.keyword)?;
        validate_max_length("keyword", &self.keyword, MAX_KEYWORD_CHARS)
    }
}
