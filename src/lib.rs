// Copyright 2024-2026 TW-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! TW-CORE - Trigger Warning content classifier.
//!
//! Decides whether chat attachments, link embeds and message text should be
//! hidden behind a spoiler veil, based on user-configured substring lists.

pub mod cli;
pub mod config;
pub mod filter;

pub use config::{ConfigError, Settings};
pub use filter::{
    ClassificationOutcome, ClassificationResult, ClassificationTarget, FilterConfig,
    FilterSettings, GuildResolver, SpoilerClassifier, TextRewrite,
};
