//! Configuration types for the name normalization pipeline.
//!
//! [`NormalizeConfig`] toggles the optional stages of
//! [`normalize_name`](crate::normalize_name). Punctuation normalization,
//! tokenization and charset normalization always run; script repair and
//! title-casing can be switched off, which the dictionary builder relies on
//! to key terms exactly as they were labeled.
//!
//! # Examples
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert!(config.repair_scripts);
//! assert!(config.title_case);
//!
//! let charset_only = NormalizeConfig::charset_only();
//! assert!(!charset_only.repair_scripts);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the name normalization pipeline.
///
/// Serializes as:
///
/// ```json
/// {
///   "repair_scripts": true,
///   "title_case": true
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Run the script repair cascade on every token.
    ///
    /// When disabled, tokens containing digits or mixed scripts are passed
    /// through after charset normalization.
    pub repair_scripts: bool,

    /// Title-case every token (`ІВАН` → `Іван`).
    pub title_case: bool,
}

impl NormalizeConfig {
    /// Only charset normalization: no repair, no re-casing.
    pub fn charset_only() -> Self {
        Self {
            repair_scripts: false,
            title_case: false,
        }
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            repair_scripts: true,
            title_case: true,
        }
    }
}
