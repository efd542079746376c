// Copyright 2024-2026 TW-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! Matching rules for the spoiler filter.
//!
//! Filenames and links use literal, case-sensitive substring containment where
//! the earliest configured pattern wins. Message text uses case-insensitive
//! whole-word rules that are applied one word at a time.

use aho_corasick::AhoCorasick;
use regex::Regex;

use super::SPOILER_MARKER;

/// Split a raw comma-separated setting into trimmed, non-empty entries.
///
/// Order is preserved. Empty entries are dropped so they can never match.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ordered list of literal substrings with a precompiled automaton.
#[derive(Debug, Clone, Default)]
pub struct SubstringList {
    patterns: Vec<String>,
    matcher: Option<AhoCorasick>,
}

impl SubstringList {
    pub fn new(patterns: Vec<String>) -> Self {
        let matcher = if patterns.is_empty() {
            None
        } else {
            match AhoCorasick::new(&patterns) {
                Ok(ac) => Some(ac),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "substring automaton build failed, using linear scan"
                    );
                    None
                }
            }
        };
        Self { patterns, matcher }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// First pattern in list order that `haystack` contains.
    ///
    /// List position decides precedence, not position in the haystack.
    pub fn first_match(&self, haystack: &str) -> Option<&str> {
        if haystack.is_empty() || self.patterns.is_empty() {
            return None;
        }
        let index = match &self.matcher {
            Some(ac) => ac
                .find_overlapping_iter(haystack)
                .map(|m| m.pattern().as_usize())
                .min(),
            None => self.patterns.iter().position(|p| haystack.contains(p.as_str())),
        };
        index.map(|i| self.patterns[i].as_str())
    }
}

/// Compiled rule for a single spoiler word.
#[derive(Debug, Clone)]
pub struct WordRule {
    word: String,
    occurrence: Regex,
    wrapped: Regex,
    replacement: String,
}

impl WordRule {
    /// Build the whole-word matcher and the already-wrapped guard for `word`.
    pub fn new(word: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(word);
        let marker = regex::escape(SPOILER_MARKER);
        Ok(Self {
            word: word.to_string(),
            occurrence: Regex::new(&format!(r"(?i)\b{}\b", escaped))?,
            wrapped: Regex::new(&format!(r"(?i){marker}{escaped}{marker}"))?,
            replacement: format!("{SPOILER_MARKER}{word}{SPOILER_MARKER}"),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Whether `text` already carries this word inside spoiler markers.
    pub fn is_wrapped_in(&self, text: &str) -> bool {
        self.wrapped.is_match(text)
    }

    /// Wrap every whole-word occurrence. Returns `None` when nothing matched.
    pub fn wrap_occurrences(&self, text: &str) -> Option<String> {
        if !self.occurrence.is_match(text) {
            return None;
        }
        Some(
            self.occurrence
                .replace_all(text, regex::NoExpand(&self.replacement))
                .into_owned(),
        )
    }
}

/// Compile word rules, dropping any that fail to build.
pub fn build_word_rules(words: &[String]) -> Vec<WordRule> {
    words
        .iter()
        .filter_map(|w| match WordRule::new(w) {
            Ok(rule) => Some(rule),
            Err(e) => {
                tracing::warn!(
                    word = %w,
                    error = %e,
                    "dropping spoiler word that failed to compile"
                );
                None
            }
        })
        .collect()
}
