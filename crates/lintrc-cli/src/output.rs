//! Output formatting for resolved configurations

use anyhow::Result;
use colored::*;
use lintrc_core::{GlobalAccess, LineEnding, ResolvedConfig, RuleSetting, Severity};
use serde::Serialize;

use crate::OutputFormat;

/// Render any serializable value in one of the machine-readable formats
pub fn to_string<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json | OutputFormat::Human => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Toml => toml::to_string_pretty(value)?,
    })
}

/// Output formatter for resolved configurations
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print the whole resolved configuration
    pub fn print_resolved(&self, resolved: &ResolvedConfig) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                self.print_human(resolved);
                Ok(())
            }
            format => {
                println!("{}", to_string(resolved, format)?.trim_end());
                Ok(())
            }
        }
    }

    /// Print the effective setting of one rule
    pub fn print_rule(&self, rule: &str, setting: Option<&RuleSetting>) -> Result<()> {
        match (self.format, setting) {
            (OutputFormat::Human, Some(setting)) => {
                println!("{rule}: {}", format_setting(setting));
            }
            (OutputFormat::Human, None) => {
                println!("{rule}: {}", "not configured".dimmed());
            }
            (OutputFormat::Json, setting) => {
                println!("{}", serde_json::to_string_pretty(&setting)?);
            }
            // TOML has no null; an unset rule is an empty document
            (OutputFormat::Toml, None) => {}
            (format, setting) => {
                let wrapped = serde_json::json!({ rule: setting });
                println!("{}", to_string(&wrapped, format)?.trim_end());
            }
        }
        Ok(())
    }

    fn print_human(&self, resolved: &ResolvedConfig) {
        println!("{}", "Presets (applied in order):".bold());
        if resolved.applied_presets().is_empty() {
            println!("  (none)");
        }
        for (index, preset) in resolved.applied_presets().iter().enumerate() {
            println!("  {}. {}", index + 1, preset);
        }

        println!();
        println!("{} {}", "Plugins:".bold(), join_or_none(resolved.plugins()));
        println!(
            "{} {}",
            "Environments:".bold(),
            join_or_none(resolved.environments())
        );
        let writable = resolved
            .globals()
            .values()
            .filter(|access| **access == GlobalAccess::Writable)
            .count();
        println!(
            "{} {} ({} writable)",
            "Globals:".bold(),
            resolved.globals().len(),
            writable
        );
        match resolved.parser() {
            Some(parser) => println!("{} {}", "Parser:".bold(), parser.name.cyan()),
            None => println!("{} default", "Parser:".bold()),
        }
        let line_ending = resolved
            .formatting()
            .line_ending
            .unwrap_or(LineEnding::Auto);
        match line_ending.sequence() {
            Some(sequence) => println!("{} {:?}", "Line ending:".bold(), sequence),
            None => println!("{} auto", "Line ending:".bold()),
        }

        let enabled = resolved.enabled_rules().count();
        println!();
        println!(
            "{} {} enabled, {} off",
            "Rules:".bold(),
            enabled.to_string().green(),
            resolved.rules().len() - enabled
        );
        for (rule, setting) in resolved.rules() {
            println!("  {:<45} {}", rule, format_setting(setting));
        }
    }
}

fn format_setting(setting: &RuleSetting) -> String {
    let severity = match setting.severity() {
        Severity::Error => "error".red().to_string(),
        Severity::Warn => "warn".yellow().to_string(),
        Severity::Off => "off".dimmed().to_string(),
    };
    if setting.options().is_empty() {
        severity
    } else {
        let options = serde_json::Value::Array(setting.options().to_vec());
        format!("{severity} {options}")
    }
}

fn join_or_none<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let joined = items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}
