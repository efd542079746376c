// Copyright 2024-2026 TW-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! Targets and results for the spoiler classifier.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Embed media type as reported by the host.
///
/// Deserialization goes through the same lenient parse as `FromStr`, so
/// `"GIFV"` and `" gifv "` both read as `Gifv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MediaType {
    /// Animated GIF equivalent (host transcodes GIFs to short videos).
    Gifv,
    Image,
    Video,
    Rich,
    Article,
    Link,
    #[default]
    Other,
}

impl MediaType {
    pub fn is_animated_gif(&self) -> bool {
        matches!(self, MediaType::Gifv)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Gifv => "gifv",
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Rich => "rich",
            MediaType::Article => "article",
            MediaType::Link => "link",
            MediaType::Other => "other",
        }
    }

    /// Case-insensitive parse of the host's type string. Unknown types map to `Other`.
    pub fn from_host(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "gifv" => MediaType::Gifv,
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            "rich" => MediaType::Rich,
            "article" => MediaType::Article,
            "link" => MediaType::Link,
            _ => MediaType::Other,
        }
    }
}

impl FromStr for MediaType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_host(s))
    }
}

impl From<String> for MediaType {
    fn from(s: String) -> Self {
        Self::from_host(&s)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attachment identified by its filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilenameTarget {
    pub filename: String,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub guild_id: Option<String>,
}

impl FilenameTarget {
    pub fn new(filename: impl Into<String>) -> Self {
        Self { filename: filename.into(), ..Default::default() }
    }

    pub fn in_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    pub fn in_guild(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }
}

/// Link attachment or embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTarget {
    pub url: String,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub guild_id: Option<String>,
}

impl LinkTarget {
    pub fn new(url: impl Into<String>, media_type: MediaType) -> Self {
        Self { url: url.into(), media_type, ..Default::default() }
    }

    pub fn in_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    pub fn in_guild(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }
}

/// Message body. The owning guild is looked up from the channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTarget {
    pub body: String,
    #[serde(default)]
    pub channel_id: Option<String>,
}

impl TextTarget {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into(), channel_id: None }
    }

    pub fn in_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }
}

/// Any content the classifier accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClassificationTarget {
    Filename(FilenameTarget),
    Link(LinkTarget),
    Text(TextTarget),
}

/// Decision for an attachment or link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub spoiler: bool,
    pub reason: Option<String>,
}

impl ClassificationResult {
    pub fn pass() -> Self {
        Self::default()
    }

    pub fn spoiler(reason: impl Into<String>) -> Self {
        Self { spoiler: true, reason: Some(reason.into()) }
    }

    /// A reason was recorded but the content stays visible.
    pub fn tagged_only(reason: impl Into<String>) -> Self {
        Self { spoiler: false, reason: Some(reason.into()) }
    }

    /// Whether an upstream stage already assigned a reason.
    pub fn is_tagged(&self) -> bool {
        self.reason.as_deref().is_some_and(|r| !r.is_empty())
    }

    /// Write the reason into a caller-owned slot. Later calls overwrite earlier ones.
    pub fn tag(&self, slot: &mut Option<String>) {
        *slot = self.reason.clone();
    }
}

/// Rewritten message body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRewrite {
    pub rewritten_body: String,
    /// Words that produced a rewrite, in configured order.
    pub wrapped_words: Vec<String>,
}

impl TextRewrite {
    pub fn unchanged(body: &str) -> Self {
        Self { rewritten_body: body.to_string(), wrapped_words: Vec::new() }
    }

    pub fn modified(&self) -> bool {
        !self.wrapped_words.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClassificationOutcome {
    Attachment(ClassificationResult),
    Text(TextRewrite),
}

impl ClassificationOutcome {
    /// Whether the content should be hidden or was rewritten.
    pub fn is_spoilered(&self) -> bool {
        match self {
            ClassificationOutcome::Attachment(r) => r.spoiler,
            ClassificationOutcome::Text(t) => t.modified(),
        }
    }
}
