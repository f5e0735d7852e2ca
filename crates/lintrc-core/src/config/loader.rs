//! Configuration file discovery and loading

use super::lintrc_config::{Extends, LintrcConfiguration};
use crate::error::LintrcError;
use crate::registry::PresetRegistry;
use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names in discovery priority order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".lintrc.json",
    ".lintrc.jsonc",
    ".lintrc.yaml",
    ".lintrc.yml",
    ".lintrc.toml",
    "lintrc.json",
];

/// Prefix of preset identifiers that stand for configuration files
pub const FILE_PRESET_PREFIX: &str = "file:";

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON, with comments and trailing commas allowed
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") | Some("jsonc") | Some("json5") => Some(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Some(ConfigFormat::Yaml),
            Some("toml") => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover config file by traversing upward from start_path
    ///
    /// Checks [`CONFIG_FILE_NAMES`] in order in each directory, moving up
    /// until a config is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| LintrcError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Parse configuration text in the given format
    pub fn parse_str(content: &str, format: ConfigFormat) -> Result<LintrcConfiguration> {
        let parsed = match format {
            ConfigFormat::Json => json5::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(LintrcError::config_error)
    }

    /// Load configuration from a specific file
    ///
    /// Supports JSON/JSONC (.json, .jsonc), YAML (.yaml, .yml) and TOML (.toml)
    pub fn load_from_file(path: &Path) -> Result<LintrcConfiguration> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            LintrcError::config_error(format!(
                "Unsupported config file '{}' (expected .json, .jsonc, .yaml, .yml or .toml)",
                path.display()
            ))
        })?;
        let content = fs::read_to_string(path).map_err(|e| LintrcError::io_error(path, e))?;

        Self::parse_str(&content, format).map_err(|e| {
            LintrcError::config_error(format!(
                "Failed to load config from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Find the config file to use: the explicit path, or auto-discovery
    pub fn locate(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(LintrcError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Ok(path.to_path_buf());
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        Self::auto_discover(search_dir)?.ok_or_else(|| {
            LintrcError::config_error(format!(
                "No config file found ({}). Run 'lintrc config init' to create one",
                CONFIG_FILE_NAMES.join(", ")
            ))
        })
    }

    /// Load config from path or auto-discover
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<LintrcConfiguration> {
        let config_path = Self::locate(custom_path, start_dir)?;
        Self::load_from_file(&config_path)
    }

    /// Load a configuration together with everything it builds on
    ///
    /// File references in `extends` (`./base.json`, `../shared.yaml`,
    /// absolute paths) are loaded relative to the referencing file and
    /// registered in `registry` as `file:<canonical path>` presets. Unless the
    /// file sets `root: true`, the nearest configuration in a parent directory
    /// is prepended as the lowest-priority preset, recursively; files reached
    /// through `extends` do not cascade. Plugins
    /// declared by those files are added to the returned configuration.
    pub fn load_project(
        custom_path: Option<&Path>,
        start_dir: Option<&Path>,
        registry: &mut PresetRegistry,
    ) -> Result<LintrcConfiguration> {
        let config_path = Self::locate(custom_path, start_dir)?;
        let mut stack = Vec::new();
        let (_, config) = Self::load_layer(&config_path, true, registry, &mut stack)?;
        Ok(config)
    }

    fn load_layer(
        path: &Path,
        cascade: bool,
        registry: &mut PresetRegistry,
        stack: &mut Vec<PathBuf>,
    ) -> Result<(PathBuf, LintrcConfiguration)> {
        let canonical = path
            .canonicalize()
            .map_err(|e| LintrcError::io_error(path, e))?;

        if stack.contains(&canonical) {
            let mut chain: Vec<String> = stack.iter().map(|p| p.display().to_string()).collect();
            chain.push(canonical.display().to_string());
            return Err(LintrcError::circular_preset(&chain));
        }

        tracing::debug!("Loading config layer: {}", canonical.display());
        let mut config = Self::load_from_file(&canonical)?;
        let base_dir = canonical
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        stack.push(canonical.clone());

        let mut extends = Vec::new();
        for id in config.preset_ids() {
            if !is_file_reference(&id) {
                extends.push(id);
                continue;
            }
            let (layer_path, layer) = Self::load_layer(&base_dir.join(&id), false, registry, stack)?;
            extends.push(Self::register_layer(&layer_path, layer, &mut config, registry));
        }

        if cascade
            && !config.is_root()
            && let Some(parent_dir) = base_dir.parent()
            && let Some(parent_path) = Self::auto_discover(parent_dir)?
        {
            tracing::debug!(
                "Cascading {} onto {}",
                parent_path.display(),
                canonical.display()
            );
            let (layer_path, layer) = Self::load_layer(&parent_path, true, registry, stack)?;
            extends.insert(0, Self::register_layer(&layer_path, layer, &mut config, registry));
        }

        stack.pop();

        config.extends = if extends.is_empty() {
            None
        } else {
            Some(Extends::List(extends))
        };

        Ok((canonical, config))
    }

    /// Register a loaded file as a preset and fold its file-level settings
    /// into `config`; returns the preset identifier
    fn register_layer(
        path: &Path,
        mut layer: LintrcConfiguration,
        config: &mut LintrcConfiguration,
        registry: &mut PresetRegistry,
    ) -> String {
        let id = format!("{FILE_PRESET_PREFIX}{}", path.display());
        config.merge_plugins(layer.plugins.take().unwrap_or_default());
        config.merge_formatting(layer.formatting.take());
        registry.register_preset(id.clone(), layer.into_preset());
        id
    }
}

/// Whether an `extends` entry names a configuration file
pub fn is_file_reference(id: &str) -> bool {
    id.starts_with("./") || id.starts_with("../") || Path::new(id).is_absolute()
}
