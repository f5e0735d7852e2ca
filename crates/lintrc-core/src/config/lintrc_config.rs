//! Configuration file types
//!
//! `LintrcConfiguration` is both the on-disk format and the resolver input.

use crate::environment::EnvironmentFlags;
use crate::parser::ParserDeclaration;
use crate::registry::PresetBundle;
use crate::rules::RuleEntry;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LintrcConfiguration {
    /// JSON Schema reference for editor support
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "JSON Schema reference")]
    pub schema: Option<String>,

    /// Stop looking for configurations in parent directories
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Stop cascading into parent directory configurations")]
    pub root: Option<bool>,

    /// Environment flags
    #[serde(alias = "environments", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Environments whose globals are predefined")]
    pub env: Option<EnvironmentFlags>,

    /// Parser selection
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Alternate parser and its options")]
    pub parser: Option<ParserDeclaration>,

    /// Declared plugins
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Plugins providing additional rules, presets and environments")]
    pub plugins: Option<Vec<String>>,

    /// Presets to layer, lowest priority first
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Presets applied in order; later presets override earlier ones")]
    pub extends: Option<Extends>,

    /// Rule overrides, applied after all presets
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Rule severity overrides: \"off\"|\"warn\"|\"error\"|0|1|2, or [severity, ...options]")]
    pub rules: Option<IndexMap<String, RuleEntry>>,

    /// Formatter preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Formatting preferences")]
    pub formatting: Option<FormattingOptions>,
}

/// `extends` accepts a single preset or a list
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum Extends {
    Single(String),
    List(Vec<String>),
}

impl Extends {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Extends::Single(id) => std::slice::from_ref(id),
            Extends::List(ids) => ids,
        };
        items.iter().map(String::as_str)
    }
}

/// Line ending enforced by the formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Keep whatever each file already uses
    Auto,
    /// `\n`
    #[serde(alias = "lf")]
    Unix,
    /// `\r\n`
    #[serde(alias = "crlf")]
    Windows,
}

impl LineEnding {
    /// Concrete sequence, `None` for `auto`
    pub fn sequence(self) -> Option<&'static str> {
        match self {
            LineEnding::Auto => None,
            LineEnding::Unix => Some("\n"),
            LineEnding::Windows => Some("\r\n"),
        }
    }
}

/// Formatting preferences
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormattingOptions {
    /// Line ending style
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Line ending: 'auto', 'unix' or 'windows'")]
    pub line_ending: Option<LineEnding>,

    /// Maximum line width
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum line width before wrapping")]
    pub print_width: Option<usize>,

    /// Spaces per indentation level
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Number of spaces per indentation level")]
    pub tab_width: Option<usize>,

    /// Indent with tabs
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Indent with tabs instead of spaces")]
    pub use_tabs: Option<bool>,

    /// Prefer single quotes
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Prefer single quotes over double quotes")]
    pub single_quote: Option<bool>,

    /// Terminate statements with semicolons
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Print semicolons at the ends of statements")]
    pub semi: Option<bool>,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            line_ending: Some(LineEnding::Auto),
            print_width: Some(80),
            tab_width: Some(2),
            use_tabs: Some(false),
            single_quote: Some(false),
            semi: Some(true),
        }
    }
}

impl LintrcConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, name: impl Into<String>, enabled: bool) -> Self {
        let mut flags: IndexMap<String, bool> = self
            .env
            .take()
            .map(|env| env.iter().map(|(k, v)| (k.to_string(), v)).collect())
            .unwrap_or_default();
        flags.insert(name.into(), enabled);
        self.env = Some(EnvironmentFlags::Map(flags));
        self
    }

    pub fn with_parser(mut self, parser: impl Into<ParserDeclaration>) -> Self {
        self.parser = Some(parser.into());
        self
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugins.get_or_insert_with(Vec::new).push(plugin.into());
        self
    }

    pub fn with_extends(mut self, preset: impl Into<String>) -> Self {
        let mut ids = self.preset_ids();
        ids.push(preset.into());
        self.extends = Some(Extends::List(ids));
        self
    }

    pub fn with_rule(mut self, rule: impl Into<String>, entry: impl Into<RuleEntry>) -> Self {
        self.rules
            .get_or_insert_with(IndexMap::new)
            .insert(rule.into(), entry.into());
        self
    }

    pub fn with_formatting(mut self, formatting: FormattingOptions) -> Self {
        self.formatting = Some(formatting);
        self
    }

    /// Whether cascading stops at this file
    pub fn is_root(&self) -> bool {
        self.root.unwrap_or(false)
    }

    /// Preset identifiers in application order
    pub fn preset_ids(&self) -> Vec<String> {
        self.extends
            .as_ref()
            .map(|extends| extends.iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Declared plugin names as written
    pub fn declared_plugins(&self) -> &[String] {
        self.plugins.as_deref().unwrap_or_default()
    }

    /// Layer-able part of this file, used when another configuration extends it
    pub fn into_preset(self) -> PresetBundle {
        PresetBundle {
            description: None,
            extends: self.preset_ids(),
            env: self.env,
            parser: self.parser.map(|parser| parser.to_selection()),
            rules: self.rules.unwrap_or_default(),
        }
    }
}
