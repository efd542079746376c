// Copyright 2024-2026 TW-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! JSON-lines batch classification.
//!
//! Each input line is one `ClassificationTarget`; each output line is the
//! matching `ClassificationOutcome`. Blank lines are skipped.

use std::io::{BufRead, Write};

use super::CliError;
use crate::filter::{ClassificationTarget, SpoilerClassifier};

/// Counters for a finished batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub processed: usize,
    pub spoilered: usize,
}

pub fn run_batch<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    classifier: &SpoilerClassifier,
    pretty: bool,
) -> Result<BatchStats, CliError> {
    let mut stats = BatchStats::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        let target: ClassificationTarget = serde_json::from_str(&line)
            .map_err(|source| CliError::Json { line: line_no, source })?;

        let outcome = classifier.classify(&target);
        stats.processed += 1;
        if outcome.is_spoilered() {
            stats.spoilered += 1;
        }

        let rendered = if pretty {
            serde_json::to_string_pretty(&outcome)
        } else {
            serde_json::to_string(&outcome)
        }
        .map_err(|source| CliError::Json { line: line_no, source })?;
        writeln!(output, "{}", rendered)?;
    }

    output.flush()?;
    tracing::info!(processed = stats.processed, spoilered = stats.spoilered, "batch complete");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ClassificationOutcome, ClassificationResult, FilterSettings};

    fn classifier() -> SpoilerClassifier {
        SpoilerClassifier::from_settings(&FilterSettings {
            spoiler_words: "cat".into(),
            spoiler_filenames: "nsfw".into(),
            spoiler_links: "tenor".into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_batch_mixed_targets() {
        let input = r#"{"kind":"filename","filename":"nsfw.png"}

{"kind":"link","url":"https://tenor.com/x","media_type":"image"}
{"kind":"text","body":"a cat","channel_id":"1"}
"#;
        let mut out = Vec::new();
        let stats = run_batch(input.as_bytes(), &mut out, &classifier(), false).unwrap();
        assert_eq!(stats, BatchStats { processed: 3, spoilered: 2 });

        let lines: Vec<ClassificationOutcome> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].is_spoilered());
        match &lines[1] {
            ClassificationOutcome::Attachment(r) => {
                assert!(!r.spoiler);
                assert_eq!(r.reason.as_deref(), Some("tenor"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        match &lines[2] {
            ClassificationOutcome::Text(t) => assert_eq!(t.rewritten_body, "a ||cat||"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_batch_unknown_media_type_is_other() {
        let input = r#"{"kind":"link","url":"https://tenor.com/x","media_type":"hologram"}"#;
        let mut out = Vec::new();
        let stats = run_batch(input.as_bytes(), &mut out, &classifier(), false).unwrap();
        assert_eq!(stats.spoilered, 0);
    }

    #[test]
    fn test_batch_media_type_is_case_insensitive() {
        let input = r#"{"kind":"link","url":"https://tenor.com/x","media_type":"GIFV"}
{"kind":"link","url":"https://tenor.com/y","media_type":" Gifv "}
"#;
        let mut out = Vec::new();
        let stats = run_batch(input.as_bytes(), &mut out, &classifier(), false).unwrap();
        assert_eq!(stats, BatchStats { processed: 2, spoilered: 2 });

        let first = String::from_utf8(out).unwrap().lines().next().unwrap().to_string();
        let outcome: ClassificationOutcome = serde_json::from_str(&first).unwrap();
        assert_eq!(
            outcome,
            ClassificationOutcome::Attachment(ClassificationResult::spoiler("tenor"))
        );
    }

    #[test]
    fn test_batch_reports_bad_line() {
        let input = "{\"kind\":\"filename\",\"filename\":\"a\"}\nnot json\n";
        let mut out = Vec::new();
        let err = run_batch(input.as_bytes(), &mut out, &classifier(), false).unwrap_err();
        assert!(matches!(err, CliError::Json { line: 2, .. }));
    }
}
