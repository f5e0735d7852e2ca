//! Registry of presets, plugins and environments
//!
//! Resolution never looks anything up implicitly: every preset, plugin and
//! environment identifier is resolved against a [`PresetRegistry`] handed to
//! the resolver. [`PresetRegistry::builtin`] provides the standard set.

use crate::environment::{EnvironmentDefinition, EnvironmentFlags};
use crate::parser::ParserSelection;
use crate::rules::RuleEntry;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Prefix of presets contributed by a plugin (`plugin:vue/vue3-essential`)
pub const PLUGIN_PRESET_PREFIX: &str = "plugin:";

/// A named bundle of rule settings, optionally layered on other presets
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Presets applied before this one, lowest priority first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<EnvironmentFlags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParserSelection>,

    pub rules: IndexMap<String, RuleEntry>,
}

impl PresetBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn extend(mut self, preset: impl Into<String>) -> Self {
        self.extends.push(preset.into());
        self
    }

    pub fn env(mut self, name: impl Into<String>, enabled: bool) -> Self {
        let mut flags: IndexMap<String, bool> = self
            .env
            .take()
            .map(|flags| {
                flags
                    .iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect()
            })
            .unwrap_or_default();
        flags.insert(name.into(), enabled);
        self.env = Some(EnvironmentFlags::Map(flags));
        self
    }

    pub fn parser(mut self, parser: ParserSelection) -> Self {
        self.parser = Some(parser);
        self
    }

    pub fn rule(mut self, rule: impl Into<String>, entry: impl Into<RuleEntry>) -> Self {
        self.rules.insert(rule.into(), entry.into());
        self
    }

    /// Set every rule in `rules` to the same entry
    pub fn rules(mut self, rules: &[&str], entry: impl Into<RuleEntry>) -> Self {
        let entry = entry.into();
        for rule in rules {
            self.rules.insert((*rule).to_string(), entry.clone());
        }
        self
    }
}

/// A rule-providing extension
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PluginDefinition {
    pub name: String,
    pub description: String,
    /// Rule names without the plugin prefix
    pub rules: BTreeSet<String>,
    /// Presets, registered as `plugin:<name>/<preset>`
    pub presets: IndexMap<String, PresetBundle>,
    /// Environments, registered as `<name>/<environment>`
    pub environments: Vec<EnvironmentDefinition>,
}

impl PluginDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: normalize_plugin_name(&name.into()),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_rules(mut self, rules: &[&str]) -> Self {
        self.rules.extend(rules.iter().map(|r| (*r).to_string()));
        self
    }

    pub fn with_preset(mut self, name: impl Into<String>, bundle: PresetBundle) -> Self {
        self.presets.insert(name.into(), bundle);
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentDefinition) -> Self {
        self.environments.push(environment);
        self
    }

    /// Fully qualified rule identifiers (`vue/html-indent`)
    pub fn qualified_rules(&self) -> impl Iterator<Item = String> + '_ {
        self.rules.iter().map(|rule| format!("{}/{}", self.name, rule))
    }
}

/// Injected identifier → definition store used by the resolver
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: HashMap<String, PresetBundle>,
    plugins: HashMap<String, PluginDefinition>,
    environments: HashMap<String, EnvironmentDefinition>,
}

impl PresetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in presets, plugins and environments
    pub fn builtin() -> Self {
        crate::builtin::builtin_registry()
    }

    /// Register (or replace) a preset
    pub fn register_preset(&mut self, id: impl Into<String>, bundle: PresetBundle) {
        let id = id.into();
        tracing::trace!("Registering preset '{}'", id);
        self.presets.insert(id, bundle);
    }

    /// Register a plugin together with its presets and environments
    pub fn register_plugin(&mut self, plugin: PluginDefinition) {
        tracing::trace!("Registering plugin '{}'", plugin.name);

        for (preset, bundle) in &plugin.presets {
            self.presets.insert(
                format!("{PLUGIN_PRESET_PREFIX}{}/{preset}", plugin.name),
                bundle.clone(),
            );
        }
        for environment in &plugin.environments {
            let name = format!("{}/{}", plugin.name, environment.name);
            let mut environment = environment.clone();
            environment.name = name.clone();
            self.environments.insert(name, environment);
        }

        self.plugins.insert(plugin.name.clone(), plugin);
    }

    /// Register (or replace) an environment
    pub fn register_environment(&mut self, environment: EnvironmentDefinition) {
        self.environments
            .insert(environment.name.clone(), environment);
    }

    /// Look up a preset; `eslint-config-<name>` also finds `<name>`
    pub fn preset(&self, id: &str) -> Option<&PresetBundle> {
        self.presets.get(id).or_else(|| {
            id.strip_prefix("eslint-config-")
                .and_then(|short| self.presets.get(short))
        })
    }

    pub fn plugin(&self, name: &str) -> Option<&PluginDefinition> {
        self.plugins.get(&normalize_plugin_name(name))
    }

    pub fn environment(&self, name: &str) -> Option<&EnvironmentDefinition> {
        self.environments.get(name)
    }

    pub fn contains_preset(&self, id: &str) -> bool {
        self.preset(id).is_some()
    }

    /// All presets sorted by identifier
    pub fn presets(&self) -> Vec<(&str, &PresetBundle)> {
        let mut presets: Vec<_> = self
            .presets
            .iter()
            .map(|(id, bundle)| (id.as_str(), bundle))
            .collect();
        presets.sort_by(|a, b| a.0.cmp(b.0));
        presets
    }

    /// All plugins sorted by name
    pub fn plugins(&self) -> Vec<&PluginDefinition> {
        let mut plugins: Vec<_> = self.plugins.values().collect();
        plugins.sort_by(|a, b| a.name.cmp(&b.name));
        plugins
    }

    /// All environments sorted by name
    pub fn environments(&self) -> Vec<&EnvironmentDefinition> {
        let mut environments: Vec<_> = self.environments.values().collect();
        environments.sort_by(|a, b| a.name.cmp(&b.name));
        environments
    }
}

/// Plugin a preset identifier belongs to (`plugin:vue/base` → `vue`)
pub fn preset_plugin(id: &str) -> Option<&str> {
    id.strip_prefix(PLUGIN_PRESET_PREFIX)
        .and_then(|rest| rest.rsplit_once('/'))
        .map(|(plugin, _)| plugin)
        .filter(|plugin| !plugin.is_empty())
}

/// Normalize a plugin package name to its short form
///
/// `eslint-plugin-vue` → `vue`, `@scope/eslint-plugin` → `@scope`,
/// `@scope/eslint-plugin-foo` → `@scope/foo`. Short names pass through.
pub fn normalize_plugin_name(name: &str) -> String {
    if let Some((scope, rest)) = name.split_once('/')
        && scope.starts_with('@')
    {
        return match rest {
            "eslint-plugin" => scope.to_string(),
            _ => match rest.strip_prefix("eslint-plugin-") {
                Some(short) => format!("{scope}/{short}"),
                None => name.to_string(),
            },
        };
    }

    name.strip_prefix("eslint-plugin-")
        .unwrap_or(name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    #[test]
    fn test_normalize_plugin_name() {
        assert_eq!(normalize_plugin_name("vue"), "vue");
        assert_eq!(normalize_plugin_name("eslint-plugin-vue"), "vue");
        assert_eq!(normalize_plugin_name("@scope/eslint-plugin"), "@scope");
        assert_eq!(normalize_plugin_name("@scope/eslint-plugin-foo"), "@scope/foo");
        assert_eq!(normalize_plugin_name("@scope/foo"), "@scope/foo");
    }

    #[test]
    fn test_preset_plugin() {
        assert_eq!(preset_plugin("plugin:vue/vue3-essential"), Some("vue"));
        assert_eq!(preset_plugin("plugin:@scope/name/base"), Some("@scope/name"));
        assert_eq!(preset_plugin("eslint:recommended"), None);
        assert_eq!(preset_plugin("prettier"), None);
    }

    #[test]
    fn test_register_plugin_exposes_presets_and_environments() {
        let mut registry = PresetRegistry::new();
        registry.register_plugin(
            PluginDefinition::new("eslint-plugin-demo", "Demo")
                .with_rules(&["no-foo"])
                .with_preset(
                    "recommended",
                    PresetBundle::new().rule("demo/no-foo", Severity::Error),
                )
                .with_environment(EnvironmentDefinition::new("globals", "").readonly(&["foo"])),
        );

        assert!(registry.plugin("demo").is_some());
        assert!(registry.plugin("eslint-plugin-demo").is_some());
        assert!(registry.contains_preset("plugin:demo/recommended"));
        let env = registry.environment("demo/globals").unwrap();
        assert_eq!(env.name, "demo/globals");
        assert_eq!(
            registry
                .plugin("demo")
                .unwrap()
                .qualified_rules()
                .collect::<Vec<_>>(),
            vec!["demo/no-foo"]
        );
    }

    #[test]
    fn test_preset_lookup_accepts_package_name() {
        let mut registry = PresetRegistry::new();
        registry.register_preset("standard", PresetBundle::new());

        assert!(registry.contains_preset("standard"));
        assert!(registry.contains_preset("eslint-config-standard"));
        assert!(!registry.contains_preset("airbnb"));
    }

    #[test]
    fn test_bundle_env_builder_keeps_order() {
        let bundle = PresetBundle::new().env("browser", true).env("es6", true);
        let env = bundle.env.unwrap();
        assert_eq!(env.enabled(), vec!["browser", "es6"]);
    }
}
