//! Built-in presets, plugins and environments
//!
//! Mirrors the rule sets of the common front-end stack: the core
//! `eslint:recommended` preset, the Vue 3 plugin presets and the Prettier
//! integration. Rule names and default severities follow the upstream
//! packages; rule implementations are out of scope.

mod environments;
mod eslint;
mod prettier;
mod vue;

use crate::registry::PresetRegistry;

pub use eslint::ESLINT_RECOMMENDED;

/// Build the registry with every built-in definition
pub fn builtin_registry() -> PresetRegistry {
    let mut registry = PresetRegistry::new();

    for environment in environments::builtin_environments() {
        registry.register_environment(environment);
    }

    registry.register_preset(ESLINT_RECOMMENDED, eslint::recommended());
    registry.register_preset(prettier::CONFIG_PRESET, prettier::config_preset());
    registry.register_preset(prettier::VUE_CONFIG_PRESET, prettier::vue_config_preset());

    registry.register_plugin(vue::plugin());
    registry.register_plugin(prettier::plugin());

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::preset_plugin;
    use crate::rules::rule_namespace;

    #[test]
    fn test_builtin_presets_registered() {
        let registry = builtin_registry();
        for id in [
            "eslint:recommended",
            "prettier",
            "prettier/vue",
            "plugin:vue/base",
            "plugin:vue/vue3-essential",
            "plugin:vue/vue3-strongly-recommended",
            "plugin:vue/vue3-recommended",
            "plugin:prettier/recommended",
        ] {
            assert!(registry.contains_preset(id), "missing preset {id}");
        }
    }

    #[test]
    fn test_builtin_presets_extend_known_presets() {
        let registry = builtin_registry();
        for (id, bundle) in registry.presets() {
            for parent in &bundle.extends {
                assert!(
                    registry.contains_preset(parent),
                    "{id} extends unknown preset {parent}"
                );
            }
        }
    }

    #[test]
    fn test_builtin_presets_parse() {
        let registry = builtin_registry();
        for (id, bundle) in registry.presets() {
            for (rule, entry) in &bundle.rules {
                assert!(entry.parse(rule).is_ok(), "{id}: bad entry for {rule}");
            }
        }
    }

    #[test]
    fn test_plugin_rules_are_defined_by_their_plugin() {
        let registry = builtin_registry();
        for (id, bundle) in registry.presets() {
            for rule in bundle.rules.keys() {
                let Some(namespace) = rule_namespace(rule) else {
                    continue;
                };
                let plugin = registry
                    .plugin(namespace)
                    .unwrap_or_else(|| panic!("{id}: no plugin for {rule}"));
                let short = &rule[namespace.len() + 1..];
                assert!(plugin.rules.contains(short), "{id}: {rule} not defined");
            }
        }
    }

    #[test]
    fn test_plugin_presets_belong_to_registered_plugins() {
        let registry = builtin_registry();
        for (id, _) in registry.presets() {
            if let Some(plugin) = preset_plugin(id) {
                assert!(registry.plugin(plugin).is_some(), "{id}");
            }
        }
    }

    #[test]
    fn test_builtin_environments_registered() {
        let registry = builtin_registry();
        for name in ["browser", "node", "es6", "es2021", "commonjs", "vue/setup-compiler-macros"] {
            assert!(registry.environment(name).is_some(), "missing env {name}");
        }
    }
}
