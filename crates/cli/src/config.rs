//! Optional TOML configuration
//!
//! ```toml
//! index = 20
//! strategy = "iterative"
//! ```
//!
//! Both keys are optional; values given on the command line win.

use fib_core::Strategy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FibConfig {
    /// Sequence position; validated later so negative values get a proper error
    pub index: Option<i64>,
    pub strategy: Option<Strategy>,
}

impl FibConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_toml(&content)
    }
}
