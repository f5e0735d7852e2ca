//! Configuration merging logic
//!
//! Rules, environments and parsers are layered by the resolver through
//! presets. What remains here is the file-level merging used when one file
//! builds on another (cascading and file `extends`).

use super::lintrc_config::{FormattingOptions, LintrcConfiguration};
use crate::registry::normalize_plugin_name;

impl LintrcConfiguration {
    /// Add plugins declared by a configuration this one builds on
    ///
    /// Keeps declaration order and skips plugins that are already present
    /// under any spelling (`vue` / `eslint-plugin-vue`).
    pub fn merge_plugins<I, S>(&mut self, plugins: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for plugin in plugins {
            let plugin = plugin.into();
            let normalized = normalize_plugin_name(&plugin);
            let declared = self.plugins.get_or_insert_with(Vec::new);
            if !declared
                .iter()
                .any(|existing| normalize_plugin_name(existing) == normalized)
            {
                declared.push(plugin);
            }
        }
    }

    /// Merge formatting preferences of a parent configuration (current takes precedence)
    pub fn merge_formatting(&mut self, other: Option<FormattingOptions>) {
        if let Some(other_formatting) = other {
            if let Some(ref mut formatting) = self.formatting {
                formatting.merge_with(other_formatting);
            } else {
                self.formatting = Some(other_formatting);
            }
        }
    }
}

impl FormattingOptions {
    /// Merge formatting options (current takes precedence)
    pub fn merge_with(&mut self, other: FormattingOptions) {
        if self.line_ending.is_none() {
            self.line_ending = other.line_ending;
        }
        if self.print_width.is_none() {
            self.print_width = other.print_width;
        }
        if self.tab_width.is_none() {
            self.tab_width = other.tab_width;
        }
        if self.use_tabs.is_none() {
            self.use_tabs = other.use_tabs;
        }
        if self.single_quote.is_none() {
            self.single_quote = other.single_quote;
        }
        if self.semi.is_none() {
            self.semi = other.semi;
        }
    }
}
