//! Template-family configuration from refdoc.toml
//!
//! The converter targets one known documentation template family; the
//! profile captures the knobs that vary between template versions.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration describing the documentation template family
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateProfile {
    /// CSS selector resolving the page's main content region
    pub content_selector: String,

    /// Selector for the summary table, resolved inside its container's id
    pub summary_table_selector: String,

    /// Number of columns in the summary table
    pub summary_columns: usize,

    /// Spaces per indentation step in the rendered markup
    pub indent_step: usize,

    /// Language tag applied to signature code blocks
    pub code_language: String,

    /// HTTP timeout for the page fetch, in seconds
    pub timeout_seconds: u64,

    /// User agent presented to the documentation host
    pub user_agent: String,
}

impl Default for TemplateProfile {
    fn default() -> Self {
        Self {
            content_selector: "main".to_string(),
            summary_table_selector: ".summary-table".to_string(),
            summary_columns: 3,
            indent_step: 3,
            code_language: "java".to_string(),
            timeout_seconds: 30,
            user_agent: concat!("refdoc/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TemplateProfile {
    /// Load a profile from a refdoc.toml file.
    ///
    /// # Parameters
    /// * `path` - Path to the refdoc.toml configuration file
    ///
    /// # Returns
    /// * `Ok(TemplateProfile)` - Successfully loaded and validated profile
    /// * `Err(ProfileError)` - Error reading, parsing, or validating the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(&path)?;
        let profile: TemplateProfile = toml::from_str(&content)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Save the profile to a refdoc.toml file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ProfileError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Check the profile's invariants.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.summary_columns == 0 {
            return Err(ProfileError::InvalidColumnCount);
        }
        Ok(())
    }
}

/// Errors that can occur when loading or saving a template profile
#[derive(Error, Debug)]
pub enum ProfileError {
    /// IO error when reading or writing the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing TOML
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Error serializing to TOML
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The summary table cannot have zero columns
    #[error("summary_columns must be at least 1")]
    InvalidColumnCount,
}
