//! Vue plugin (`eslint-plugin-vue`) with its Vue 3 presets

use crate::environment::EnvironmentDefinition;
use crate::parser::{ParserSelection, SourceMode};
use crate::registry::{PLUGIN_PRESET_PREFIX, PluginDefinition, PresetBundle};
use crate::severity::Severity;

pub const PLUGIN: &str = "vue";

const BASE_RULES: &[&str] = &["comment-directive", "jsx-uses-vars"];

const ESSENTIAL_RULES: &[&str] = &[
    "multi-word-component-names",
    "no-arrow-functions-in-watch",
    "no-async-in-computed-properties",
    "no-child-content",
    "no-computed-properties-in-data",
    "no-deprecated-data-object-declaration",
    "no-deprecated-destroyed-lifecycle",
    "no-deprecated-dollar-listeners-api",
    "no-deprecated-dollar-scopedslots-api",
    "no-deprecated-events-api",
    "no-deprecated-filter",
    "no-deprecated-functional-template",
    "no-deprecated-html-element-is",
    "no-deprecated-inline-template",
    "no-deprecated-props-default-this",
    "no-deprecated-router-link-tag-prop",
    "no-deprecated-scope-attribute",
    "no-deprecated-slot-attribute",
    "no-deprecated-slot-scope-attribute",
    "no-deprecated-v-bind-sync",
    "no-deprecated-v-is",
    "no-deprecated-v-on-native-modifier",
    "no-deprecated-v-on-number-modifiers",
    "no-deprecated-vue-config-keycodes",
    "no-dupe-keys",
    "no-dupe-v-else-if",
    "no-duplicate-attributes",
    "no-export-in-script-setup",
    "no-expose-after-await",
    "no-lifecycle-after-await",
    "no-mutating-props",
    "no-parsing-error",
    "no-ref-as-operand",
    "no-reserved-component-names",
    "no-reserved-keys",
    "no-reserved-props",
    "no-setup-props-destructure",
    "no-shared-component-data",
    "no-side-effects-in-computed-properties",
    "no-template-key",
    "no-textarea-mustache",
    "no-unused-components",
    "no-unused-vars",
    "no-use-computed-property-like-method",
    "no-use-v-if-with-v-for",
    "no-useless-template-attributes",
    "no-v-for-template-key-on-child",
    "no-v-text-v-html-on-component",
    "no-watch-after-await",
    "prefer-import-from-vue",
    "require-component-is",
    "require-prop-type-constructor",
    "require-render-return",
    "require-slots-as-functions",
    "require-toggle-inside-transition",
    "require-v-for-key",
    "require-valid-default-prop",
    "return-in-computed-property",
    "return-in-emits-validator",
    "use-v-on-exact",
    "valid-attribute-name",
    "valid-define-emits",
    "valid-define-props",
    "valid-next-tick",
    "valid-template-root",
    "valid-v-bind",
    "valid-v-cloak",
    "valid-v-else-if",
    "valid-v-else",
    "valid-v-for",
    "valid-v-html",
    "valid-v-if",
    "valid-v-is",
    "valid-v-memo",
    "valid-v-model",
    "valid-v-on",
    "valid-v-once",
    "valid-v-pre",
    "valid-v-show",
    "valid-v-slot",
    "valid-v-text",
];

const STRONGLY_RECOMMENDED_RULES: &[&str] = &[
    "attribute-hyphenation",
    "component-definition-name-casing",
    "first-attribute-linebreak",
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
    "no-template-shadow",
    "one-component-per-file",
    "prop-name-casing",
    "require-default-prop",
    "require-explicit-emits",
    "require-prop-types",
    "singleline-html-element-content-newline",
    "v-bind-style",
    "v-on-event-hyphenation",
    "v-on-style",
    "v-slot-style",
];

const RECOMMENDED_RULES: &[&str] = &[
    "attributes-order",
    "component-tags-order",
    "no-lone-template",
    "no-multiple-slot-args",
    "no-v-html",
    "order-in-components",
    "this-in-template",
];

/// Template counterparts of core stylistic rules; not enabled by any preset
pub(super) const EXTENSION_RULES: &[&str] = &[
    "array-bracket-newline",
    "array-bracket-spacing",
    "arrow-spacing",
    "block-spacing",
    "brace-style",
    "comma-dangle",
    "comma-spacing",
    "comma-style",
    "dot-location",
    "func-call-spacing",
    "key-spacing",
    "keyword-spacing",
    "max-len",
    "no-extra-parens",
    "object-curly-newline",
    "object-curly-spacing",
    "operator-linebreak",
    "quote-props",
    "script-indent",
    "space-in-parens",
    "space-infix-ops",
    "space-unary-ops",
    "template-curly-spacing",
];

fn with_vue_rules(mut bundle: PresetBundle, rules: &[&str], severity: Severity) -> PresetBundle {
    for rule in rules {
        bundle = bundle.rule(format!("{PLUGIN}/{rule}"), severity);
    }
    bundle
}

fn preset_id(name: &str) -> String {
    format!("{PLUGIN_PRESET_PREFIX}{PLUGIN}/{name}")
}

fn base() -> PresetBundle {
    let bundle = PresetBundle::new()
        .describe("Parser and environment setup for .vue files")
        .env("browser", true)
        .env("es6", true)
        .parser(
            ParserSelection::new("vue-eslint-parser")
                .with_language_version(2020)
                .with_source_mode(SourceMode::Module),
        );
    with_vue_rules(bundle, BASE_RULES, Severity::Error)
}

fn vue3_essential() -> PresetBundle {
    let bundle = PresetBundle::new()
        .describe("Rules that prevent errors or unintended behavior in Vue 3")
        .extend(preset_id("base"));
    with_vue_rules(bundle, ESSENTIAL_RULES, Severity::Error)
}

fn vue3_strongly_recommended() -> PresetBundle {
    let bundle = PresetBundle::new()
        .describe("Essential rules plus rules that improve readability")
        .extend(preset_id("vue3-essential"));
    with_vue_rules(bundle, STRONGLY_RECOMMENDED_RULES, Severity::Warn)
}

fn vue3_recommended() -> PresetBundle {
    let bundle = PresetBundle::new()
        .describe("Strongly recommended rules plus community conventions")
        .extend(preset_id("vue3-strongly-recommended"));
    with_vue_rules(bundle, RECOMMENDED_RULES, Severity::Warn)
}

pub(super) fn plugin() -> PluginDefinition {
    PluginDefinition::new(PLUGIN, "Rules for Vue single-file components")
        .with_rules(BASE_RULES)
        .with_rules(ESSENTIAL_RULES)
        .with_rules(STRONGLY_RECOMMENDED_RULES)
        .with_rules(RECOMMENDED_RULES)
        .with_rules(EXTENSION_RULES)
        .with_preset("base", base())
        .with_preset("vue3-essential", vue3_essential())
        .with_preset("vue3-strongly-recommended", vue3_strongly_recommended())
        .with_preset("vue3-recommended", vue3_recommended())
        .with_environment(
            EnvironmentDefinition::new("setup-compiler-macros", "<script setup> compiler macros")
                .readonly(&["defineProps", "defineEmits", "defineExpose", "withDefaults"]),
        )
}
