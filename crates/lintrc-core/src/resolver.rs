//! Configuration resolution
//!
//! Turns a [`LintrcConfiguration`] into one effective [`ResolvedConfig`]:
//!
//! 1. declared plugins are checked against the registry,
//! 2. `extends` is expanded depth-first (a preset's own `extends` first),
//! 3. every namespaced rule and environment must belong to a declared plugin,
//! 4. preset rules are applied in order (last preset wins),
//! 5. the configuration's own rules are applied last (overrides always win),
//! 6. environment flags are layered the same way and their globals collected,
//! 7. parser selections from presets and the configuration are reconciled.
//!
//! Resolution is pure: the same input and registry always give the same
//! output, and any error aborts it without a partial result.

use crate::config::{FormattingOptions, LintrcConfiguration};
use crate::environment::{EnvironmentFlags, GlobalAccess};
use crate::error::LintrcError;
use crate::parser::ParserSelection;
use crate::registry::{PresetBundle, PresetRegistry, normalize_plugin_name, preset_plugin};
use crate::result::Result;
use crate::rules::{RuleEntry, RuleSetting, rule_namespace};
use crate::severity::Severity;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// What to do with environment names the registry does not know
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownEnvironmentPolicy {
    /// Fail with [`LintrcError::UnknownEnvironment`]
    #[default]
    Reject,
    /// Drop the flag and log a warning
    Ignore,
}

/// Resolver settings
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    pub unknown_environments: UnknownEnvironmentPolicy,
}

/// The effective configuration
///
/// Immutable once built; read it through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    rules: BTreeMap<String, RuleSetting>,
    environments: BTreeSet<String>,
    globals: BTreeMap<String, GlobalAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parser: Option<ParserSelection>,
    plugins: BTreeSet<String>,
    formatting: FormattingOptions,
    presets: Vec<String>,
}

impl ResolvedConfig {
    /// Effective rule mapping
    pub fn rules(&self) -> &BTreeMap<String, RuleSetting> {
        &self.rules
    }

    pub fn rule(&self, rule: &str) -> Option<&RuleSetting> {
        self.rules.get(rule)
    }

    /// Severity of `rule`; `None` when no layer set it
    pub fn severity(&self, rule: &str) -> Option<Severity> {
        self.rules.get(rule).map(RuleSetting::severity)
    }

    /// Rules that are set to `warn` or `error`
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.rules
            .iter()
            .filter(|(_, setting)| setting.is_enabled())
            .map(|(rule, setting)| (rule.as_str(), setting))
    }

    /// Enabled environment names
    pub fn environments(&self) -> &BTreeSet<String> {
        &self.environments
    }

    pub fn has_environment(&self, name: &str) -> bool {
        self.environments.contains(name)
    }

    /// Globals predefined by the enabled environments
    pub fn globals(&self) -> &BTreeMap<String, GlobalAccess> {
        &self.globals
    }

    pub fn parser(&self) -> Option<&ParserSelection> {
        self.parser.as_ref()
    }

    /// Declared plugins, normalized
    pub fn plugins(&self) -> &BTreeSet<String> {
        &self.plugins
    }

    /// Formatting options with defaults filled in
    pub fn formatting(&self) -> &FormattingOptions {
        &self.formatting
    }

    /// Presets in the order they were applied
    pub fn applied_presets(&self) -> &[String] {
        &self.presets
    }

    /// Express this configuration as a single preset
    ///
    /// Resolving `extends = [as_preset()]` with no overrides (and the same
    /// plugins) reproduces the same rules, environments and parser.
    pub fn as_preset(&self) -> PresetBundle {
        PresetBundle {
            description: Some("Resolved configuration".to_string()),
            extends: Vec::new(),
            env: Some(EnvironmentFlags::Map(
                self.environments
                    .iter()
                    .map(|name| (name.clone(), true))
                    .collect(),
            )),
            parser: self.parser.clone(),
            rules: self
                .rules
                .iter()
                .map(|(rule, setting)| (rule.clone(), setting.to_entry()))
                .collect(),
        }
    }
}

/// Resolves configurations against a registry
pub struct ConfigResolver<'r> {
    registry: &'r PresetRegistry,
    options: ResolverOptions,
}

impl<'r> ConfigResolver<'r> {
    pub fn new(registry: &'r PresetRegistry) -> Self {
        Self {
            registry,
            options: ResolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve `config` into its effective configuration
    pub fn resolve(&self, config: &LintrcConfiguration) -> Result<ResolvedConfig> {
        let plugins = self.declared_plugins(config)?;

        let mut order = Vec::new();
        let mut stack = Vec::new();
        for id in config.preset_ids() {
            self.expand_preset(&id, &plugins, &mut stack, &mut order)?;
        }

        for (id, bundle) in &order {
            check_plugin_references(bundle.rules.keys().map(String::as_str), &plugins, id)?;
            if let Some(env) = &bundle.env {
                check_plugin_references(env.iter().map(|(name, _)| name), &plugins, id)?;
            }
        }
        if let Some(rules) = &config.rules {
            check_plugin_references(rules.keys().map(String::as_str), &plugins, "rules")?;
        }
        if let Some(env) = &config.env {
            check_plugin_references(env.iter().map(|(name, _)| name), &plugins, "env")?;
        }

        let mut rules = BTreeMap::new();
        for (id, bundle) in &order {
            tracing::debug!("Applying preset '{}' ({} rules)", id, bundle.rules.len());
            apply_rules(&mut rules, &bundle.rules)?;
        }
        if let Some(overrides) = &config.rules {
            tracing::debug!("Applying {} rule overrides", overrides.len());
            apply_rules(&mut rules, overrides)?;
        }

        let mut flags = IndexMap::new();
        for env in order
            .iter()
            .filter_map(|(_, bundle)| bundle.env.as_ref())
            .chain(config.env.as_ref())
        {
            for (name, enabled) in env.iter() {
                flags.insert(name.to_string(), enabled);
            }
        }
        let (environments, globals) = self.resolve_environments(flags)?;

        let mut parser = None;
        for selection in order
            .iter()
            .filter_map(|(_, bundle)| bundle.parser.clone())
            .chain(config.parser.as_ref().map(|decl| decl.to_selection()))
        {
            select_parser(&mut parser, selection)?;
        }

        let formatting = match config.formatting.clone() {
            Some(mut formatting) => {
                formatting.merge_with(FormattingOptions::default());
                formatting
            }
            None => FormattingOptions::default(),
        };

        Ok(ResolvedConfig {
            rules,
            environments,
            globals,
            parser,
            plugins,
            formatting,
            presets: order.into_iter().map(|(id, _)| id).collect(),
        })
    }

    fn declared_plugins(&self, config: &LintrcConfiguration) -> Result<BTreeSet<String>> {
        let mut plugins = BTreeSet::new();
        for plugin in config.declared_plugins() {
            let name = normalize_plugin_name(plugin);
            if self.registry.plugin(&name).is_none() {
                return Err(LintrcError::unknown_plugin(name, "plugins"));
            }
            plugins.insert(name);
        }
        Ok(plugins)
    }

    fn expand_preset(
        &self,
        id: &str,
        plugins: &BTreeSet<String>,
        stack: &mut Vec<String>,
        order: &mut Vec<(String, &'r PresetBundle)>,
    ) -> Result<()> {
        if stack.iter().any(|entry| entry == id) {
            let mut chain = stack.clone();
            chain.push(id.to_string());
            return Err(LintrcError::circular_preset(&chain));
        }

        if let Some(plugin) = preset_plugin(id) {
            let plugin = normalize_plugin_name(plugin);
            if !plugins.contains(&plugin) {
                return Err(LintrcError::unknown_plugin(plugin, id));
            }
        }

        let registry = self.registry;
        let bundle = registry
            .preset(id)
            .ok_or_else(|| LintrcError::unresolved_preset(id))?;

        stack.push(id.to_string());
        for parent in &bundle.extends {
            self.expand_preset(parent, plugins, stack, order)?;
        }
        stack.pop();

        order.push((id.to_string(), bundle));
        Ok(())
    }

    fn resolve_environments(
        &self,
        flags: IndexMap<String, bool>,
    ) -> Result<(BTreeSet<String>, BTreeMap<String, GlobalAccess>)> {
        let mut environments = BTreeSet::new();
        let mut globals = BTreeMap::new();

        for (name, enabled) in flags {
            let Some(definition) = self.registry.environment(&name) else {
                match self.options.unknown_environments {
                    UnknownEnvironmentPolicy::Reject => {
                        return Err(LintrcError::unknown_environment(name));
                    }
                    UnknownEnvironmentPolicy::Ignore => {
                        tracing::warn!("Ignoring unknown environment '{}'", name);
                        continue;
                    }
                }
            };
            if !enabled {
                continue;
            }
            for (global, access) in &definition.globals {
                globals
                    .entry(global.clone())
                    .and_modify(|existing| {
                        if *access == GlobalAccess::Writable {
                            *existing = GlobalAccess::Writable;
                        }
                    })
                    .or_insert(*access);
            }
            environments.insert(name);
        }

        Ok((environments, globals))
    }
}

/// Resolve `config` against `registry` with default options
pub fn resolve(config: &LintrcConfiguration, registry: &PresetRegistry) -> Result<ResolvedConfig> {
    ConfigResolver::new(registry).resolve(config)
}

fn check_plugin_references<'a>(
    identifiers: impl IntoIterator<Item = &'a str>,
    plugins: &BTreeSet<String>,
    referenced_by: &str,
) -> Result<()> {
    for identifier in identifiers {
        if let Some(namespace) = rule_namespace(identifier) {
            let plugin = normalize_plugin_name(namespace);
            if !plugins.contains(&plugin) {
                return Err(LintrcError::unknown_plugin(plugin, referenced_by));
            }
        }
    }
    Ok(())
}

fn apply_rules(
    effective: &mut BTreeMap<String, RuleSetting>,
    layer: &IndexMap<String, RuleEntry>,
) -> Result<()> {
    for (rule, entry) in layer {
        effective.insert(rule.clone(), entry.parse(rule)?);
    }
    Ok(())
}

fn select_parser(current: &mut Option<ParserSelection>, next: ParserSelection) -> Result<()> {
    match current {
        Some(active) if active.name != next.name => {
            Err(LintrcError::conflicting_parser(&active.name, next.name))
        }
        Some(active) => {
            active.options.overlay(next.options);
            Ok(())
        }
        None => {
            *current = Some(next);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> PresetRegistry {
        let mut registry = PresetRegistry::new();
        registry.register_preset(
            "a",
            PresetBundle::new()
                .rule("r", Severity::Warn)
                .rule("only-a", Severity::Error),
        );
        registry.register_preset("b", PresetBundle::new().rule("r", Severity::Error));
        registry
    }

    #[test]
    fn test_empty_configuration_resolves_to_empty_rules() {
        let resolved = resolve(&LintrcConfiguration::new(), &registry()).unwrap();
        assert!(resolved.rules().is_empty());
        assert!(resolved.environments().is_empty());
        assert!(resolved.parser().is_none());
        assert_eq!(resolved.formatting(), &FormattingOptions::default());
    }

    #[test]
    fn test_later_preset_wins() {
        let config = LintrcConfiguration::new().with_extends("a").with_extends("b");
        let resolved = resolve(&config, &registry()).unwrap();
        assert_eq!(resolved.severity("r"), Some(Severity::Error));
        assert_eq!(resolved.severity("only-a"), Some(Severity::Error));
        assert_eq!(resolved.applied_presets(), ["a", "b"]);
    }

    #[test]
    fn test_override_wins() {
        let config = LintrcConfiguration::new()
            .with_extends("a")
            .with_extends("b")
            .with_rule("r", Severity::Off);
        let resolved = resolve(&config, &registry()).unwrap();
        assert_eq!(resolved.severity("r"), Some(Severity::Off));
        assert_eq!(resolved.enabled_rules().count(), 1);
    }

    #[test]
    fn test_override_replaces_options() {
        let mut registry = registry();
        registry.register_preset(
            "quotes",
            PresetBundle::new().rule(
                "quotes",
                RuleEntry::with_options(Severity::Error, [json!("double")]),
            ),
        );
        let config = LintrcConfiguration::new()
            .with_extends("quotes")
            .with_rule("quotes", Severity::Warn);

        let resolved = resolve(&config, &registry).unwrap();
        assert_eq!(resolved.rule("quotes"), Some(&RuleSetting::new(Severity::Warn)));
    }

    #[test]
    fn test_unset_is_distinct_from_off() {
        let config = LintrcConfiguration::new().with_rule("semi", json!(0));
        let resolved = resolve(&config, &registry()).unwrap();
        assert_eq!(resolved.severity("semi"), Some(Severity::Off));
        assert_eq!(resolved.severity("quotes"), None);
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let mut registry = registry();
        registry.register_preset("left", PresetBundle::new().extend("a"));
        registry.register_preset("right", PresetBundle::new().extend("a"));
        let config = LintrcConfiguration::new()
            .with_extends("left")
            .with_extends("right");

        let resolved = resolve(&config, &registry).unwrap();
        assert_eq!(resolved.applied_presets(), ["a", "left", "a", "right"]);
    }

    #[test]
    fn test_select_parser_merges_same_name() {
        let mut current = Some(ParserSelection::new("espree").with_language_version(2015));
        select_parser(
            &mut current,
            ParserSelection::new("espree").with_language_version(2022),
        )
        .unwrap();
        assert_eq!(current.unwrap().options.language_version, Some(2022));
    }
}
