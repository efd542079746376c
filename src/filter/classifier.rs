// Copyright 2024-2026 TW-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! Spoiler Classifier
//!
//! Decides whether attachments, link embeds and message text should be
//! spoilered. Every entry point is a pure function of the target and the
//! configuration snapshot; nothing here fails or panics on odd input, it
//! falls back to leaving the content visible.

use std::sync::Arc;

use super::classifier_types::{
    ClassificationOutcome, ClassificationResult, ClassificationTarget, FilenameTarget,
    LinkTarget, TextRewrite, TextTarget,
};
use super::filter_config::{FilterConfig, FilterSettings};
use super::resolver::{GuildResolver, NoResolver};

const METRIC_CLASSIFICATIONS: &str = "tw_core_classifications_total";

/// Spoiler classifier over a compiled configuration snapshot.
#[derive(Clone)]
pub struct SpoilerClassifier {
    config: Arc<FilterConfig>,
    resolver: Arc<dyn GuildResolver>,
}

impl std::fmt::Debug for SpoilerClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpoilerClassifier")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SpoilerClassifier {
    /// Create a classifier without a guild resolver.
    pub fn new(config: FilterConfig) -> Self {
        Self { config: Arc::new(config), resolver: Arc::new(NoResolver) }
    }

    /// Compile raw settings and create a classifier.
    pub fn from_settings(settings: &FilterSettings) -> Self {
        Self::new(FilterConfig::from_settings(settings))
    }

    /// Attach the channel to guild lookup used for message text.
    pub fn with_resolver(mut self, resolver: Arc<dyn GuildResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    fn is_excluded(&self, channel_id: Option<&str>, guild_id: Option<&str>) -> bool {
        self.config.is_channel_ignored(channel_id) || self.config.is_guild_ignored(guild_id)
    }

    /// Decide whether an attachment should be spoilered by its filename.
    ///
    /// The reason is the first configured substring (in list order) that the
    /// filename contains.
    pub fn classify_filename(&self, target: &FilenameTarget) -> ClassificationResult {
        let filenames = self.config.filenames();
        if target.filename.is_empty() || filenames.is_empty() {
            return ClassificationResult::pass();
        }
        if self.is_excluded(target.channel_id.as_deref(), target.guild_id.as_deref()) {
            tracing::trace!(
                filename = %target.filename,
                "filename skipped: ignored channel or guild"
            );
            record("filename", "ignored");
            return ClassificationResult::pass();
        }

        match filenames.first_match(&target.filename) {
            Some(reason) => {
                tracing::debug!(filename = %target.filename, reason, "filename spoilered");
                record("filename", "spoiler");
                ClassificationResult::spoiler(reason)
            }
            None => {
                record("filename", "pass");
                ClassificationResult::pass()
            }
        }
    }

    /// Decide whether a link attachment or embed should be spoilered.
    ///
    /// `already_spoilered` is the upstream decision for the same item (usually
    /// its filename). When it carries a reason it wins and is returned as is.
    ///
    /// In gif-only mode a matching non-GIF link still gets the reason recorded,
    /// but is not spoilered.
    pub fn classify_link(
        &self,
        target: &LinkTarget,
        already_spoilered: &ClassificationResult,
    ) -> ClassificationResult {
        if already_spoilered.is_tagged() {
            return already_spoilered.clone();
        }

        let links = self.config.links();
        if target.url.is_empty() || links.is_empty() {
            return ClassificationResult::pass();
        }
        if self.is_excluded(target.channel_id.as_deref(), target.guild_id.as_deref()) {
            tracing::trace!(url = %target.url, "link skipped: ignored channel or guild");
            record("link", "ignored");
            return ClassificationResult::pass();
        }

        let Some(reason) = links.first_match(&target.url) else {
            record("link", "pass");
            return ClassificationResult::pass();
        };

        if self.config.gif_only_links() && !target.media_type.is_animated_gif() {
            tracing::debug!(
                url = %target.url,
                media_type = %target.media_type,
                reason,
                "link matched but is not a gif, tagging only"
            );
            record("link", "tagged");
            return ClassificationResult::tagged_only(reason);
        }

        tracing::debug!(url = %target.url, reason, "link spoilered");
        record("link", "spoiler");
        ClassificationResult::spoiler(reason)
    }

    /// Run the filename check, then the link check with its result.
    ///
    /// Mirrors the render order for an embed that carries both a file and a URL.
    pub fn classify_embed(
        &self,
        file: Option<&FilenameTarget>,
        link: &LinkTarget,
    ) -> ClassificationResult {
        let upstream = file
            .map(|f| self.classify_filename(f))
            .unwrap_or_default();
        self.classify_link(link, &upstream)
    }

    /// Wrap configured words in spoiler markers.
    ///
    /// Words are applied one after another, each against the output of the
    /// previous one. A word that already appears wrapped anywhere in the
    /// current text is skipped entirely, which makes the rewrite idempotent.
    pub fn rewrite_words(&self, target: &TextTarget) -> TextRewrite {
        let rules = self.config.word_rules();
        if target.body.is_empty() || rules.is_empty() {
            return TextRewrite::unchanged(&target.body);
        }

        let channel_id = target.channel_id.as_deref();
        if self.config.is_channel_ignored(channel_id) {
            tracing::trace!(channel_id = ?channel_id, "text skipped: ignored channel");
            record("text", "ignored");
            return TextRewrite::unchanged(&target.body);
        }
        let guild_id = channel_id.and_then(|c| self.resolver.guild_for_channel(c));
        if self.config.is_guild_ignored(guild_id.as_deref()) {
            tracing::trace!(
                channel_id = ?channel_id,
                guild_id = ?guild_id,
                "text skipped: ignored guild"
            );
            record("text", "ignored");
            return TextRewrite::unchanged(&target.body);
        }

        let mut wrapped_words = Vec::new();
        let rewritten_body = rules.iter().fold(target.body.clone(), |acc, rule| {
            if rule.is_wrapped_in(&acc) {
                return acc;
            }
            match rule.wrap_occurrences(&acc) {
                Some(next) => {
                    wrapped_words.push(rule.word().to_string());
                    next
                }
                None => acc,
            }
        });

        if wrapped_words.is_empty() {
            record("text", "pass");
        } else {
            tracing::debug!(
                channel_id = ?channel_id,
                words = ?wrapped_words,
                "message text spoilered"
            );
            record("text", "spoiler");
        }
        TextRewrite { rewritten_body, wrapped_words }
    }

    /// Dispatch on the target kind. Links are classified without an upstream decision.
    pub fn classify(&self, target: &ClassificationTarget) -> ClassificationOutcome {
        match target {
            ClassificationTarget::Filename(t) => {
                ClassificationOutcome::Attachment(self.classify_filename(t))
            }
            ClassificationTarget::Link(t) => {
                let result = self.classify_link(t, &ClassificationResult::pass());
                ClassificationOutcome::Attachment(result)
            }
            ClassificationTarget::Text(t) => ClassificationOutcome::Text(self.rewrite_words(t)),
        }
    }
}

fn record(kind: &'static str, outcome: &'static str) {
    metrics::counter!(METRIC_CLASSIFICATIONS, "kind" => kind, "outcome" => outcome).increment(1);
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
