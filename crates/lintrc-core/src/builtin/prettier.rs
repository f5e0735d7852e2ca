//! Prettier integration
//!
//! Two pieces: the `prettier` preset, which switches off stylistic rules
//! that conflict with the formatter, and the `prettier` plugin whose
//! `recommended` preset enables `prettier/prettier` on top of it.

use super::vue;
use crate::registry::{PluginDefinition, PresetBundle};
use crate::severity::Severity;

pub const CONFIG_PRESET: &str = "prettier";
pub const VUE_CONFIG_PRESET: &str = "prettier/vue";
pub const PLUGIN: &str = "prettier";

const CONFLICTING_CORE_RULES: &[&str] = &[
    "array-bracket-newline",
    "array-bracket-spacing",
    "array-element-newline",
    "arrow-parens",
    "arrow-spacing",
    "block-spacing",
    "brace-style",
    "comma-dangle",
    "comma-spacing",
    "comma-style",
    "computed-property-spacing",
    "curly",
    "dot-location",
    "eol-last",
    "func-call-spacing",
    "function-call-argument-newline",
    "function-paren-newline",
    "generator-star-spacing",
    "implicit-arrow-linebreak",
    "indent",
    "jsx-quotes",
    "key-spacing",
    "keyword-spacing",
    "linebreak-style",
    "lines-around-comment",
    "max-len",
    "multiline-ternary",
    "new-parens",
    "newline-per-chained-call",
    "no-confusing-arrow",
    "no-extra-parens",
    "no-extra-semi",
    "no-floating-decimal",
    "no-mixed-operators",
    "no-mixed-spaces-and-tabs",
    "no-multi-spaces",
    "no-multiple-empty-lines",
    "no-tabs",
    "no-trailing-spaces",
    "no-unexpected-multiline",
    "no-whitespace-before-property",
    "nonblock-statement-body-position",
    "object-curly-newline",
    "object-curly-spacing",
    "object-property-newline",
    "one-var-declaration-per-line",
    "operator-linebreak",
    "padded-blocks",
    "quote-props",
    "quotes",
    "rest-spread-spacing",
    "semi",
    "semi-spacing",
    "semi-style",
    "space-before-blocks",
    "space-before-function-paren",
    "space-in-parens",
    "space-infix-ops",
    "space-unary-ops",
    "switch-colon-spacing",
    "template-curly-spacing",
    "template-tag-spacing",
    "unicode-bom",
    "wrap-iife",
    "wrap-regex",
    "yield-star-spacing",
];

const CONFLICTING_VUE_TEMPLATE_RULES: &[&str] = &[
    "html-closing-bracket-newline",
    "html-closing-bracket-spacing",
    "html-end-tags",
    "html-indent",
    "html-quotes",
    "html-self-closing",
    "max-attributes-per-line",
    "multiline-html-element-content-newline",
    "mustache-interpolation-spacing",
    "no-multi-spaces",
    "no-spaces-around-equal-signs-in-attribute",
    "singleline-html-element-content-newline",
];

pub(super) fn config_preset() -> PresetBundle {
    PresetBundle::new()
        .describe("Turns off core rules that conflict with Prettier")
        .rules(CONFLICTING_CORE_RULES, Severity::Off)
}

/// Vue rules only; requires the `vue` plugin to be declared
pub(super) fn vue_config_preset() -> PresetBundle {
    let mut bundle =
        PresetBundle::new().describe("Turns off Vue template rules that conflict with Prettier");
    for rule in CONFLICTING_VUE_TEMPLATE_RULES
        .iter()
        .chain(vue::EXTENSION_RULES)
    {
        bundle = bundle.rule(format!("{}/{rule}", vue::PLUGIN), Severity::Off);
    }
    bundle
}

fn recommended() -> PresetBundle {
    PresetBundle::new()
        .describe("Runs Prettier as a rule and disables conflicting rules")
        .extend(CONFIG_PRESET)
        .rule("prettier/prettier", Severity::Error)
        .rule("arrow-body-style", Severity::Off)
        .rule("prefer-arrow-callback", Severity::Off)
}

pub(super) fn plugin() -> PluginDefinition {
    PluginDefinition::new(PLUGIN, "Runs Prettier as a lint rule")
        .with_rules(&["prettier"])
        .with_preset("recommended", recommended())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_preset_turns_rules_off() {
        let bundle = config_preset();
        for (rule, entry) in &bundle.rules {
            assert_eq!(entry.parse(rule).unwrap().severity(), Severity::Off);
        }
        assert!(bundle.rules.contains_key("linebreak-style"));
    }

    #[test]
    fn test_vue_config_preset_is_namespaced() {
        let bundle = vue_config_preset();
        assert!(bundle.rules.keys().all(|rule| rule.starts_with("vue/")));
        assert!(bundle.rules.contains_key("vue/html-indent"));
    }

    #[test]
    fn test_recommended_extends_config() {
        let bundle = recommended();
        assert_eq!(bundle.extends, vec![CONFIG_PRESET]);
        assert!(bundle.rules.contains_key("prettier/prettier"));
    }
}
