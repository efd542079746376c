// Copyright 2024-2026 TW-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! Spoiler filtering.
//!
//! Pure classification over filenames, link embeds and message bodies.

pub mod classifier;
pub mod classifier_types;
pub mod filter_config;
pub mod pattern_rules;
pub mod resolver;

pub use classifier::SpoilerClassifier;
pub use classifier_types::{
    ClassificationOutcome, ClassificationResult, ClassificationTarget, FilenameTarget,
    LinkTarget, MediaType, TextRewrite, TextTarget,
};
pub use filter_config::{ConfigWarning, FilterConfig, FilterSettings};
pub use resolver::{ChannelDirectory, GuildResolver, NoResolver};

/// Delimiter wrapped around spoilered text.
pub const SPOILER_MARKER: &str = "||";
