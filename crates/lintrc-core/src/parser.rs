//! Parser selection
//!
//! Which syntax parser interprets sources before rules run. Only the
//! selection is modelled here; parsers themselves are external.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How sources are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    Script,
    Module,
}

/// Options handed to the selected parser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    /// Language version (e.g. 2022)
    #[serde(alias = "ecmaVersion", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Language version the parser should accept")]
    pub language_version: Option<u32>,

    /// Script or module
    #[serde(alias = "sourceType", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Source mode: 'script' or 'module'")]
    pub source_mode: Option<SourceMode>,

    /// Parser-specific options passed through untouched
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ParserOptions {
    /// Overlay options from a later layer; fields it sets win
    pub fn overlay(&mut self, later: ParserOptions) {
        if later.language_version.is_some() {
            self.language_version = later.language_version;
        }
        if later.source_mode.is_some() {
            self.source_mode = later.source_mode;
        }
        self.extra.extend(later.extra);
    }
}

/// The active parser and its options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParserSelection {
    /// Parser identifier (e.g. `vue-eslint-parser`)
    pub name: String,

    #[serde(default)]
    pub options: ParserOptions,
}

impl ParserSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: ParserOptions::default(),
        }
    }

    pub fn with_language_version(mut self, version: u32) -> Self {
        self.options.language_version = Some(version);
        self
    }

    pub fn with_source_mode(mut self, mode: SourceMode) -> Self {
        self.options.source_mode = Some(mode);
        self
    }
}

/// Parser as written in a configuration: a bare name or a full selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ParserDeclaration {
    Name(String),
    Selection(ParserSelection),
}

impl ParserDeclaration {
    pub fn to_selection(&self) -> ParserSelection {
        match self {
            ParserDeclaration::Name(name) => ParserSelection::new(name.clone()),
            ParserDeclaration::Selection(selection) => selection.clone(),
        }
    }
}

impl From<ParserSelection> for ParserDeclaration {
    fn from(selection: ParserSelection) -> Self {
        ParserDeclaration::Selection(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_selection() {
        let decl: ParserDeclaration = serde_json::from_value(json!({
            "name": "@babel/eslint-parser",
            "options": {"languageVersion": 2022, "sourceMode": "module", "requireConfigFile": false}
        }))
        .unwrap();

        let selection = decl.to_selection();
        assert_eq!(selection.name, "@babel/eslint-parser");
        assert_eq!(selection.options.language_version, Some(2022));
        assert_eq!(selection.options.source_mode, Some(SourceMode::Module));
        assert_eq!(
            selection.options.extra.get("requireConfigFile"),
            Some(&json!(false))
        );
    }

    #[test]
    fn test_parse_bare_name() {
        let decl: ParserDeclaration = serde_json::from_value(json!("espree")).unwrap();
        let selection = decl.to_selection();
        assert_eq!(selection.name, "espree");
        assert_eq!(selection.options, ParserOptions::default());
    }

    #[test]
    fn test_eslint_option_names() {
        let options: ParserOptions =
            serde_json::from_value(json!({"ecmaVersion": 2020, "sourceType": "script"})).unwrap();
        assert_eq!(options.language_version, Some(2020));
        assert_eq!(options.source_mode, Some(SourceMode::Script));
        assert!(options.extra.is_empty());
    }

    #[test]
    fn test_overlay_later_wins() {
        let mut base = ParserSelection::new("espree")
            .with_language_version(2015)
            .with_source_mode(SourceMode::Script)
            .options;
        base.overlay(ParserOptions {
            language_version: Some(2022),
            ..Default::default()
        });

        assert_eq!(base.language_version, Some(2022));
        assert_eq!(base.source_mode, Some(SourceMode::Script));
    }
}
