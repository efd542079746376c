// Copyright 2024-2026 TW-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! Settings loading for TW-CORE.
//!
//! Settings come from a TOML file and are then overridden by environment
//! variables. A missing default file is not an error; defaults are used.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::filter::{ChannelDirectory, FilterSettings};

/// Env var naming the settings file.
pub const CONFIG_PATH_ENV: &str = "TW_CORE_CONFIG";

/// Settings file used when neither `--config` nor the env var is set.
pub const DEFAULT_CONFIG_FILE: &str = "tw-core.toml";

const ENV_SPOILER_WORDS: &str = "TW_CORE_SPOILER_WORDS";
const ENV_SPOILER_FILENAMES: &str = "TW_CORE_SPOILER_FILENAMES";
const ENV_SPOILER_LINKS: &str = "TW_CORE_SPOILER_LINKS";
const ENV_GIF_SPOILERS_ONLY: &str = "TW_CORE_GIF_SPOILERS_ONLY";
const ENV_IGNORED_CHANNEL_IDS: &str = "TW_CORE_IGNORED_CHANNEL_IDS";
const ENV_IGNORED_GUILD_IDS: &str = "TW_CORE_IGNORED_GUILD_IDS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Full settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub filter: FilterSettings,
    /// Known channels: channel id -> owning guild id.
    pub channels: BTreeMap<String, String>,
}

impl Settings {
    /// Build the channel directory used to resolve guilds for message text.
    pub fn channel_directory(&self) -> ChannelDirectory {
        self.channels.iter().map(|(c, g)| (c.clone(), g.clone())).collect()
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Pick the settings file: explicit flag, then env var, then the default name.
///
/// The flag returns `true` when the path was chosen explicitly.
pub fn resolve_path(explicit: Option<&Path>) -> (PathBuf, bool) {
    if let Some(p) = explicit {
        return (p.to_path_buf(), true);
    }
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(p) if !p.trim().is_empty() => (PathBuf::from(p), true),
        _ => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    }
}

/// Parse settings from a TOML file.
pub fn load_file(path: &Path) -> Result<Settings, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply `TW_CORE_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(settings: &mut Settings, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let filter = &mut settings.filter;
    let strings: [(&str, &mut String); 5] = [
        (ENV_SPOILER_WORDS, &mut filter.spoiler_words),
        (ENV_SPOILER_FILENAMES, &mut filter.spoiler_filenames),
        (ENV_SPOILER_LINKS, &mut filter.spoiler_links),
        (ENV_IGNORED_CHANNEL_IDS, &mut filter.ignored_channel_ids),
        (ENV_IGNORED_GUILD_IDS, &mut filter.ignored_guild_ids),
    ];
    for (var, field) in strings {
        if let Some(value) = lookup(var) {
            tracing::debug!(var, "settings override from environment");
            *field = value;
        }
    }

    if let Some(value) = lookup(ENV_GIF_SPOILERS_ONLY) {
        filter.gif_spoilers_only = parse_bool(&value).ok_or(ConfigError::InvalidEnv {
            var: ENV_GIF_SPOILERS_ONLY,
            value,
        })?;
    }
    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Load settings from file and process environment.
pub fn load(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let (path, required) = resolve_path(explicit);
    let mut settings = if required || path.exists() {
        let settings = load_file(&path)?;
        tracing::info!(path = %path.display(), "settings loaded");
        settings
    } else {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        Settings::default()
    };
    apply_env_overrides(&mut settings, |k| std::env::var(k).ok())?;
    Ok(settings)
}
