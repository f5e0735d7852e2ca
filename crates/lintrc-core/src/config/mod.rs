//! Configuration files for lintrc
//!
//! This module provides:
//! - JSON/JSONC, YAML and TOML configuration file support
//! - Auto-discovery by traversing up directories
//! - Cascading into parent directory configurations until `root: true`
//! - File presets (`extends: ["./base.json"]`)
//! - Strong typing with serde and JSON Schema generation via schemars
//!
//! ## Example Configuration
//!
//! ```jsonc
//! {
//!   "env": { "node": true, "browser": true },
//!   "plugins": ["vue", "prettier"],
//!   "extends": [
//!     "eslint:recommended",
//!     "plugin:vue/vue3-essential",
//!     // Make sure this is the last element in the array
//!     "plugin:prettier/recommended"
//!   ],
//!   "rules": {
//!     "linebreak-style": ["error", "windows"],
//!     "prettier/prettier": ["error", { "endOfLine": "auto" }]
//!   },
//!   "formatting": { "lineEnding": "auto" }
//! }
//! ```

mod lintrc_config;
mod loader;
mod merge;

pub use lintrc_config::{Extends, FormattingOptions, LineEnding, LintrcConfiguration};
pub use loader::{
    CONFIG_FILE_NAMES, ConfigFormat, ConfigLoader, FILE_PRESET_PREFIX, is_file_reference,
};
