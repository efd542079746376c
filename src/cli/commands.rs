// Copyright 2024-2026 TW-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! Single-target commands and configuration management.

use std::io::Write;
use std::sync::Arc;

use super::{CliError, CommandArgs, EXIT_CONFIG_ERROR, EXIT_OK, EXIT_SPOILERED};
use crate::config::{self, Settings};
use crate::filter::{
    ClassificationResult, FilenameTarget, LinkTarget, MediaType, SpoilerClassifier, TextTarget,
};

/// Build a classifier from loaded settings, wiring the channel directory if any.
pub fn build_classifier(settings: &Settings) -> SpoilerClassifier {
    let classifier = SpoilerClassifier::from_settings(&settings.filter);
    if settings.channels.is_empty() {
        classifier
    } else {
        classifier.with_resolver(Arc::new(settings.channel_directory()))
    }
}

/// Load settings honoring `--config`.
pub fn load_settings(args: &CommandArgs) -> Result<Settings, CliError> {
    let path = args.config_path();
    Ok(config::load(path.as_deref())?)
}

fn print_attachment<W: Write>(
    out: &mut W,
    result: &ClassificationResult,
    json: bool,
) -> Result<u8, CliError> {
    if json {
        let line = serde_json::to_string(result)
            .map_err(|source| CliError::Json { line: 0, source })?;
        writeln!(out, "{}", line)?;
    } else {
        match (&result.reason, result.spoiler) {
            (Some(reason), true) => writeln!(out, "spoiler: {}", reason)?,
            (Some(reason), false) => writeln!(out, "tagged: {} (not spoilered)", reason)?,
            (None, _) => writeln!(out, "pass")?,
        }
    }
    Ok(if result.spoiler { EXIT_SPOILERED } else { EXIT_OK })
}

/// `check-file <FILENAME> [--channel ID] [--guild ID] [--json]`
pub fn run_check_file<W: Write>(
    args: &CommandArgs,
    classifier: &SpoilerClassifier,
    out: &mut W,
) -> Result<u8, CliError> {
    let mut target = FilenameTarget::new(args.required("FILENAME")?);
    target.channel_id = args.option("--channel").map(str::to_string);
    target.guild_id = args.option("--guild").map(str::to_string);

    let result = classifier.classify_filename(&target);
    print_attachment(out, &result, args.switch("--json"))
}

/// `check-link <URL> [--type MEDIA] [--channel ID] [--guild ID] [--after-file NAME] [--json]`
pub fn run_check_link<W: Write>(
    args: &CommandArgs,
    classifier: &SpoilerClassifier,
    out: &mut W,
) -> Result<u8, CliError> {
    let media_type: MediaType = args
        .option("--type")
        .map(|t| t.parse().unwrap_or_default())
        .unwrap_or_default();
    let channel = args.option("--channel").map(str::to_string);
    let guild = args.option("--guild").map(str::to_string);

    let mut link = LinkTarget::new(args.required("URL")?, media_type);
    link.channel_id = channel.clone();
    link.guild_id = guild.clone();

    let file = args.option("--after-file").map(|name| FilenameTarget {
        filename: name.to_string(),
        channel_id: channel,
        guild_id: guild,
    });

    let result = classifier.classify_embed(file.as_ref(), &link);
    print_attachment(out, &result, args.switch("--json"))
}

/// `rewrite <TEXT...> [--channel ID] [--json]`
pub fn run_rewrite<W: Write>(
    args: &CommandArgs,
    classifier: &SpoilerClassifier,
    out: &mut W,
) -> Result<u8, CliError> {
    args.required("TEXT")?;
    let mut target = TextTarget::new(args.positionals.join(" "));
    target.channel_id = args.option("--channel").map(str::to_string);

    let rewrite = classifier.rewrite_words(&target);
    if args.switch("--json") {
        let line = serde_json::to_string(&rewrite)
            .map_err(|source| CliError::Json { line: 0, source })?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", rewrite.rewritten_body)?;
    }
    Ok(if rewrite.modified() { EXIT_SPOILERED } else { EXIT_OK })
}

/// `config show`: effective settings after file and environment.
pub fn run_config_show<W: Write>(args: &CommandArgs, out: &mut W) -> Result<u8, CliError> {
    let settings = load_settings(args)?;
    write_toml(out, &settings)
}

/// `config defaults`
pub fn run_config_defaults<W: Write>(out: &mut W) -> Result<u8, CliError> {
    write_toml(out, &Settings::default())
}

/// `config validate`: exit 0 when clean, 2 when warnings or load errors exist.
pub fn run_config_validate<W: Write>(args: &CommandArgs, out: &mut W) -> Result<u8, CliError> {
    let settings = load_settings(args)?;
    let warnings = settings.filter.validate();
    if warnings.is_empty() {
        writeln!(out, "Configuration OK")?;
        return Ok(EXIT_OK);
    }
    for w in &warnings {
        tracing::warn!(warning = %w, "configuration warning");
        writeln!(out, "warning: {}", w)?;
    }
    Ok(EXIT_CONFIG_ERROR)
}

fn write_toml<W: Write>(out: &mut W, settings: &Settings) -> Result<u8, CliError> {
    match settings.to_toml() {
        Ok(text) => {
            write!(out, "{}", text)?;
            Ok(EXIT_OK)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to render settings");
            Ok(EXIT_CONFIG_ERROR)
        }
    }
}
