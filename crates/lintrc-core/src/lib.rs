//! lintrc core
//!
//! Resolves layered lint configurations: named presets, plugins, environments
//! and per-rule overrides are combined into one effective configuration.
//! This crate provides the configuration model, the preset registry with the
//! built-in presets, configuration file loading and the resolver.

pub mod builtin;
pub mod config;
pub mod environment;
pub mod error;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod result;
pub mod rules;
pub mod severity;

// Re-export commonly used types
pub use config::{
    CONFIG_FILE_NAMES, ConfigFormat, ConfigLoader, Extends, FormattingOptions, LineEnding,
    LintrcConfiguration,
};
pub use environment::{EnvironmentDefinition, EnvironmentFlags, GlobalAccess};
pub use error::{ErrorKind, LintrcError};
pub use parser::{ParserDeclaration, ParserOptions, ParserSelection, SourceMode};
pub use registry::{PluginDefinition, PresetBundle, PresetRegistry, normalize_plugin_name};
pub use resolver::{
    ConfigResolver, ResolvedConfig, ResolverOptions, UnknownEnvironmentPolicy, resolve,
};
pub use result::Result;
pub use rules::{RuleEntry, RuleSetting};
pub use severity::Severity;

/// Initialize the tracing subscriber for logging
///
/// `RUST_LOG` takes precedence over `default_filter`. Logs go to stderr so
/// they never mix with command output.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
