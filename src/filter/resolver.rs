// Copyright 2024-2026 TW-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! Channel to guild lookup used by the message text filter.

use dashmap::DashMap;

/// Resolves the guild that owns a channel.
///
/// Returning `None` means the owner is unknown; callers then skip the
/// ignored-guild check instead of failing.
pub trait GuildResolver: Send + Sync {
    fn guild_for_channel(&self, channel_id: &str) -> Option<String>;
}

/// Resolver that never knows any channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl GuildResolver for NoResolver {
    fn guild_for_channel(&self, _channel_id: &str) -> Option<String> {
        None
    }
}

/// In-memory channel directory, safe to update while classifying.
#[derive(Debug, Default)]
pub struct ChannelDirectory {
    channels: DashMap<String, String>,
}

impl ChannelDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or move) a channel under a guild.
    pub fn register(&self, channel_id: impl Into<String>, guild_id: impl Into<String>) {
        self.channels.insert(channel_id.into(), guild_id.into());
    }

    pub fn forget(&self, channel_id: &str) -> Option<String> {
        self.channels.remove(channel_id).map(|(_, guild)| guild)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ChannelDirectory
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let directory = Self::new();
        for (channel, guild) in iter {
            directory.register(channel, guild);
        }
        directory
    }
}

impl GuildResolver for ChannelDirectory {
    fn guild_for_channel(&self, channel_id: &str) -> Option<String> {
        self.channels.get(channel_id).map(|g| g.value().clone())
    }
}
