#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_max_length, validate_printable, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_KEYWORD: &str = "American";
pub const MAX_KEYWORD_CHARS: usize = 64;

/// Render settings for library callers that don't go through the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub keyword: String,
    pub show_fixed: bool,
    pub emit_json: bool,
}

impl RenderOptions {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            show_fixed: false,
            emit_json: false,
        }
    }

    pub fn with_fixed(mut self, show_fixed: bool) -> Self {
        self.show_fixed = show_fixed;
        self
    }

    pub fn with_json(mut self, emit_json: bool) -> Self {
        self.emit_json = emit_json;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORD)
    }
}

impl ConfigProvider for RenderOptions {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn show_fixed(&self) -> bool {
        self.show_fixed
    }

    fn emit_json(&self) -> bool {
        self.emit_json
    }
}

/// Empty keywords are legal for the library and match every named division.
impl Validate for RenderOptions {
    fn validate(&self) -> Result<()> {
        validate_printable("keyword", &self.keyword)?;
        validate_max_length("keyword", &self.keyword, MAX_KEYWORD_CHARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.keyword(), "American");
        assert!(!options.show_fixed());
        assert!(!options.emit_json());
    }

    #[test]
    fn test_builder_flags() {
        let options = RenderOptions::new("League").with_fixed(true).with_json(true);
        assert!(options.show_fixed());
        assert!(options.emit_json());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(RenderOptions::new("").validate().is_ok());
        assert!(RenderOptions::new("West\t").validate().is_err());
        assert!(RenderOptions::new("x".repeat(MAX_KEYWORD_CHARS + 1))
            .validate()
            .is_err());
    }
}
