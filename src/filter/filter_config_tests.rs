//! Tests for filter configuration parsing and validation.

use super::*;

fn settings(words: &str, filenames: &str, links: &str) -> FilterSettings {
    FilterSettings {
        spoiler_words: words.into(),
        spoiler_filenames: filenames.into(),
        spoiler_links: links.into(),
        ..Default::default()
    }
}

#[test]
fn test_defaults() {
    let s = FilterSettings::default();
    assert!(s.gif_spoilers_only);
    assert!(s.spoiler_words.is_empty());
    let config = FilterConfig::from_settings(&s);
    assert!(config.word_rules().is_empty());
    assert!(config.filenames().is_empty());
    assert!(config.links().is_empty());
    assert!(config.gif_only_links());
}

#[test]
fn test_lists_are_trimmed_in_order() {
    let config = FilterConfig::from_settings(&settings(" cat ,dog", "a , b", "x.com ,  y.com"));
    let words: Vec<&str> = config.spoiler_words().collect();
    assert_eq!(words, vec!["cat", "dog"]);
    assert_eq!(config.filenames().patterns(), ["a", "b"]);
    assert_eq!(config.links().patterns(), ["x.com", "y.com"]);
}

#[test]
fn test_empty_entries_never_match() {
    let config = FilterConfig::from_settings(&settings("", ",, ,", ","));
    assert!(config.filenames().is_empty());
    assert_eq!(config.filenames().first_match("anything.png"), None);
    assert_eq!(config.links().first_match("https://example.com"), None);
}

#[test]
fn test_ignore_lists() {
    let s = FilterSettings {
        ignored_channel_ids: "111, 222".into(),
        ignored_guild_ids: "999".into(),
        ..Default::default()
    };
    let config = FilterConfig::from(&s);
    assert!(config.is_channel_ignored(Some("111")));
    assert!(config.is_channel_ignored(Some("222")));
    assert!(!config.is_channel_ignored(Some("333")));
    assert!(!config.is_channel_ignored(None));
    assert!(config.is_guild_ignored(Some("999")));
    assert!(!config.is_guild_ignored(None));
}

#[test]
fn test_deserialize_camel_case_aliases() {
    let raw = r#"
        spoilerWords = "cat"
        spoilerFilenames = "nsfw"
        spoilerLinks = "tenor.com"
        gifSpoilersOnly = false
        ignoredChannelIds = "1"
        ignoredGuildIds = "2"
    "#;
    let s: FilterSettings = toml::from_str(raw).unwrap();
    assert_eq!(s.spoiler_words, "cat");
    assert_eq!(s.spoiler_filenames, "nsfw");
    assert_eq!(s.spoiler_links, "tenor.com");
    assert!(!s.gif_spoilers_only);
    assert_eq!(s.ignored_channel_ids, "1");
    assert_eq!(s.ignored_guild_ids, "2");
}

#[test]
fn test_deserialize_partial_uses_defaults() {
    let s: FilterSettings = toml::from_str(r#"spoiler_words = "dog""#).unwrap();
    assert_eq!(s.spoiler_words, "dog");
    assert!(s.gif_spoilers_only);
}

#[test]
fn test_validate_clean_settings() {
    assert!(settings("cat,dog", "nsfw", "tenor.com").validate().is_empty());
    assert!(FilterSettings::default().validate().is_empty());
}

#[test]
fn test_validate_reports_problems() {
    let warnings = settings("cat,,cat,a||b,!!", "", "").validate();
    assert!(warnings.contains(&ConfigWarning::EmptyEntry { field: "spoiler_words" }));
    assert!(warnings.contains(&ConfigWarning::DuplicateEntry {
        field: "spoiler_words",
        entry: "cat".into()
    }));
    assert!(warnings.contains(&ConfigWarning::MarkerInWord("a||b".into())));
    assert!(warnings.contains(&ConfigWarning::NoWordCharacters("!!".into())));
}

#[test]
fn test_warning_display() {
    let w = ConfigWarning::DuplicateEntry { field: "spoiler_links", entry: "x".into() };
    assert_eq!(w.to_string(), "spoiler_links: 'x' is listed more than once");
}
