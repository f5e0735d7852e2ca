//! CLI command implementations

use anyhow::{Context, Result, bail};
use colored::*;
use lintrc_core::{
    ConfigLoader, ConfigResolver, FormattingOptions, LineEnding, LintrcConfiguration, LintrcError,
    PresetRegistry, ResolvedConfig, ResolverOptions, UnknownEnvironmentPolicy,
};
use rayon::prelude::*;
use schemars::schema_for;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::output::{self, OutputFormatter};
use crate::{ConfigFileFormat, OutputFormat};

/// Resolve command implementation
pub fn resolve_command(
    format: OutputFormat,
    rule: Option<String>,
    ignore_unknown_env: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    debug!("Resolving configuration (config: {:?})", config_path);

    let mut registry = PresetRegistry::builtin();
    let config = ConfigLoader::load_project(config_path.as_deref(), None, &mut registry)?;

    let policy = if ignore_unknown_env {
        UnknownEnvironmentPolicy::Ignore
    } else {
        UnknownEnvironmentPolicy::Reject
    };
    let resolved = ConfigResolver::new(&registry)
        .with_options(ResolverOptions {
            unknown_environments: policy,
        })
        .resolve(&config)?;

    let formatter = OutputFormatter::new(format);
    match rule {
        Some(rule) => formatter.print_rule(&rule, resolved.rule(&rule)),
        None => formatter.print_resolved(&resolved),
    }
}

/// Validate command implementation
///
/// Every path is loaded and resolved on the rayon pool; results are reported
/// in argument order.
pub fn validate_command(paths: Vec<PathBuf>) -> Result<()> {
    debug!("Validating configurations: {:?}", paths);

    let targets: Vec<Option<PathBuf>> = if paths.is_empty() {
        vec![None]
    } else {
        paths.into_iter().map(Some).collect()
    };

    let results: Vec<(String, lintrc_core::Result<ResolvedConfig>)> = targets
        .par_iter()
        .map(|target| {
            let label = target
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| ".".to_string());
            (label, validate_target(target.as_deref()))
        })
        .collect();

    let mut failures = 0;
    for (label, result) in &results {
        match result {
            Ok(resolved) => println!(
                "{} {} ({} presets, {} rules enabled)",
                "✓".green(),
                label,
                resolved.applied_presets().len(),
                resolved.enabled_rules().count()
            ),
            Err(e) => {
                failures += 1;
                println!("{} {}: {}", "✗".red(), label, e);
            }
        }
    }

    if failures > 0 {
        bail!(
            "{} of {} configurations failed validation",
            failures,
            results.len()
        );
    }
    Ok(())
}

fn validate_target(target: Option<&Path>) -> lintrc_core::Result<ResolvedConfig> {
    let mut registry = PresetRegistry::builtin();
    let config = match target {
        Some(path) if path.is_dir() => ConfigLoader::load_project(None, Some(path), &mut registry)?,
        Some(path) => ConfigLoader::load_project(Some(path), None, &mut registry)?,
        None => ConfigLoader::load_project(None, None, &mut registry)?,
    };
    ConfigResolver::new(&registry).resolve(&config)
}

/// Presets list command implementation
pub fn presets_list_command(detailed: bool) -> Result<()> {
    let registry = PresetRegistry::builtin();
    let presets = registry.presets();

    println!("Available presets:");
    for (id, bundle) in &presets {
        if detailed {
            println!("\n{}", id.bold());
            if let Some(description) = &bundle.description {
                println!("  Description: {description}");
            }
            if !bundle.extends.is_empty() {
                println!("  Extends: {}", bundle.extends.join(", "));
            }
            println!("  Rules: {}", bundle.rules.len());
        } else {
            println!(
                "  {} - {}",
                id,
                bundle.description.as_deref().unwrap_or_default()
            );
        }
    }
    println!("\nTotal: {} presets", presets.len());

    if detailed {
        println!("\n{}", "Plugins:".bold());
        for plugin in registry.plugins() {
            println!(
                "  {} - {} ({} rules, {} presets)",
                plugin.name,
                plugin.description,
                plugin.rules.len(),
                plugin.presets.len()
            );
        }
    }

    Ok(())
}

/// Presets show command implementation
pub fn presets_show_command(preset_id: &str) -> Result<()> {
    let registry = PresetRegistry::builtin();
    let bundle = registry
        .preset(preset_id)
        .ok_or_else(|| LintrcError::unresolved_preset(preset_id))?;

    println!("{}", serde_json::to_string_pretty(bundle)?);
    Ok(())
}

/// Environments command implementation
pub fn envs_command(globals: bool) -> Result<()> {
    let registry = PresetRegistry::builtin();
    let environments = registry.environments();

    for environment in &environments {
        println!(
            "  {:<28} {}",
            environment.name,
            environment.description.dimmed()
        );
        if globals {
            for (name, access) in &environment.globals {
                let access = match access {
                    lintrc_core::GlobalAccess::Readonly => "readonly",
                    lintrc_core::GlobalAccess::Writable => "writable",
                };
                println!("      {name} ({access})");
            }
        }
    }
    println!("\nTotal: {} environments", environments.len());

    Ok(())
}

/// Config init command implementation
pub fn config_init_command(format: ConfigFileFormat, force: bool) -> Result<()> {
    debug!("Initializing configuration file with format: {:?}", format);

    let filename = match format {
        ConfigFileFormat::Json => ".lintrc.json",
        ConfigFileFormat::Yaml => ".lintrc.yaml",
        ConfigFileFormat::Toml => ".lintrc.toml",
    };
    let config_path = PathBuf::from(filename);

    if config_path.exists() && !force {
        bail!("Configuration file '{filename}' already exists. Use --force to overwrite.");
    }

    let config = create_starter_config();
    let content = match format {
        ConfigFileFormat::Json => output::to_string(&config, OutputFormat::Json)?,
        ConfigFileFormat::Yaml => output::to_string(&config, OutputFormat::Yaml)?,
        ConfigFileFormat::Toml => output::to_string(&config, OutputFormat::Toml)?,
    };

    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("✅ Created configuration file: {filename}");
    println!("   Edit the file to customize presets and rule overrides.");

    Ok(())
}

/// Config schema command implementation
pub fn config_schema_command(output_path: Option<PathBuf>) -> Result<()> {
    let schema = schema_for!(LintrcConfiguration);
    let mut schema_json = serde_json::to_value(schema)?;
    schema_json["title"] = json!("lintrc configuration");
    schema_json["description"] =
        json!("Configuration file schema for lintrc (.lintrc.json, .lintrc.yaml, .lintrc.toml)");

    let rendered = serde_json::to_string_pretty(&schema_json)?;
    match output_path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Schema written to {}", path.display());
            println!("✓ Generated JSON Schema: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Starter configuration for a Vue 3 project formatted by Prettier
fn create_starter_config() -> LintrcConfiguration {
    let config = LintrcConfiguration::new()
        .with_env("browser", true)
        .with_env("node", true)
        .with_plugin("vue")
        .with_plugin("prettier")
        .with_extends("eslint:recommended")
        .with_extends("plugin:vue/vue3-essential")
        .with_extends("plugin:prettier/recommended")
        .with_rule(
            "prettier/prettier",
            json!(["error", { "endOfLine": "auto" }]),
        )
        .with_formatting(FormattingOptions {
            line_ending: Some(LineEnding::Auto),
            print_width: None,
            tab_width: None,
            use_tabs: None,
            single_quote: None,
            semi: None,
        });
    LintrcConfiguration {
        root: Some(true),
        ..config
    }
}
