// Copyright 2024-2026 TW-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! Filter configuration.
//!
//! `FilterSettings` is the raw, user-facing form: comma-separated strings and
//! a boolean, exactly as a settings panel stores them. `FilterConfig` is the
//! compiled snapshot the classifier reads.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::pattern_rules::{build_word_rules, split_list, SubstringList, WordRule};
use super::SPOILER_MARKER;

/// Raw filter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Words in messages that should be spoilered. Comma separated.
    #[serde(alias = "spoilerWords")]
    pub spoiler_words: String,
    /// Strings in filenames that should be spoilered. Comma separated.
    #[serde(alias = "spoilerFilenames")]
    pub spoiler_filenames: String,
    /// Strings in link attachments that should be spoilered. Comma separated.
    #[serde(alias = "spoilerLinks")]
    pub spoiler_links: String,
    /// Only spoiler matching links when they are animated GIFs.
    #[serde(alias = "gifSpoilersOnly", alias = "gifOnlyLinks")]
    pub gif_spoilers_only: bool,
    /// Channels excluded from all filtering. Comma separated.
    #[serde(alias = "ignoredChannelIds")]
    pub ignored_channel_ids: String,
    /// Guilds excluded from all filtering. Comma separated.
    #[serde(alias = "ignoredGuildIds")]
    pub ignored_guild_ids: String,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            spoiler_words: String::new(),
            spoiler_filenames: String::new(),
            spoiler_links: String::new(),
            gif_spoilers_only: true,
            ignored_channel_ids: String::new(),
            ignored_guild_ids: String::new(),
        }
    }
}

/// Non-fatal problems found in raw settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// List contains blank entries (e.g. `"a,,b"`). They are ignored.
    EmptyEntry { field: &'static str },
    /// Same entry listed more than once.
    DuplicateEntry { field: &'static str, entry: String },
    /// Word contains the spoiler marker itself.
    MarkerInWord(String),
    /// Word has no alphanumeric characters, so no word boundary can surround it.
    NoWordCharacters(String),
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyEntry { field } => write!(f, "{}: contains empty entries (ignored)", field),
            Self::DuplicateEntry { field, entry } => {
                write!(f, "{}: '{}' is listed more than once", field, entry)
            }
            Self::MarkerInWord(w) => {
                write!(f, "spoiler_words: '{}' contains the '{}' marker", w, SPOILER_MARKER)
            }
            Self::NoWordCharacters(w) => {
                write!(f, "spoiler_words: '{}' has no word characters and will never match", w)
            }
        }
    }
}

impl FilterSettings {
    /// Check raw settings for entries that will be ignored or behave oddly.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let lists: [(&'static str, &str); 5] = [
            ("spoiler_words", &self.spoiler_words),
            ("spoiler_filenames", &self.spoiler_filenames),
            ("spoiler_links", &self.spoiler_links),
            ("ignored_channel_ids", &self.ignored_channel_ids),
            ("ignored_guild_ids", &self.ignored_guild_ids),
        ];

        for (field, raw) in lists {
            if raw.trim().is_empty() {
                continue;
            }
            if raw.split(',').any(|s| s.trim().is_empty()) {
                warnings.push(ConfigWarning::EmptyEntry { field });
            }
            let mut seen = HashSet::new();
            for entry in split_list(raw) {
                if !seen.insert(entry.clone()) {
                    warnings.push(ConfigWarning::DuplicateEntry { field, entry });
                }
            }
        }

        for word in split_list(&self.spoiler_words) {
            if word.contains(SPOILER_MARKER) {
                warnings.push(ConfigWarning::MarkerInWord(word));
            } else if !word.chars().any(|c| c.is_alphanumeric() || c == '_') {
                warnings.push(ConfigWarning::NoWordCharacters(word));
            }
        }

        warnings
    }
}

/// Compiled, immutable filter configuration.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    words: Vec<WordRule>,
    filenames: SubstringList,
    links: SubstringList,
    gif_only_links: bool,
    ignored_channel_ids: HashSet<String>,
    ignored_guild_ids: HashSet<String>,
}

impl FilterConfig {
    pub fn from_settings(settings: &FilterSettings) -> Self {
        let words = build_word_rules(&split_list(&settings.spoiler_words));
        let config = Self {
            words,
            filenames: SubstringList::new(split_list(&settings.spoiler_filenames)),
            links: SubstringList::new(split_list(&settings.spoiler_links)),
            gif_only_links: settings.gif_spoilers_only,
            ignored_channel_ids: split_list(&settings.ignored_channel_ids).into_iter().collect(),
            ignored_guild_ids: split_list(&settings.ignored_guild_ids).into_iter().collect(),
        };
        tracing::debug!(
            words = config.words.len(),
            filenames = config.filenames.patterns().len(),
            links = config.links.patterns().len(),
            gif_only_links = config.gif_only_links,
            ignored_channels = config.ignored_channel_ids.len(),
            ignored_guilds = config.ignored_guild_ids.len(),
            "filter config compiled"
        );
        config
    }

    pub fn word_rules(&self) -> &[WordRule] {
        &self.words
    }

    pub fn spoiler_words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(WordRule::word)
    }

    pub fn filenames(&self) -> &SubstringList {
        &self.filenames
    }

    pub fn links(&self) -> &SubstringList {
        &self.links
    }

    pub fn gif_only_links(&self) -> bool {
        self.gif_only_links
    }

    pub fn is_channel_ignored(&self, channel_id: Option<&str>) -> bool {
        channel_id.is_some_and(|id| self.ignored_channel_ids.contains(id))
    }

    pub fn is_guild_ignored(&self, guild_id: Option<&str>) -> bool {
        guild_id.is_some_and(|id| self.ignored_guild_ids.contains(id))
    }
}

impl From<&FilterSettings> for FilterConfig {
    fn from(settings: &FilterSettings) -> Self {
        Self::from_settings(settings)
    }
}

#[cfg(test)]
#[path = "filter_config_tests.rs"]
mod tests;
