//! CLI help text for TW-CORE.

/// Print general usage information.
pub fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "TW-CORE - Trigger Warning content classifier v{}

USAGE:
    tw-core-cli <COMMAND> [OPTIONS]

COMMANDS:
    check-file   Check an attachment filename
    check-link   Check a link attachment or embed URL
    rewrite      Wrap spoiler words in message text
    batch        Classify JSON-lines targets from stdin
    config       Manage configuration (show, defaults, validate)
    version      Show version information
    help         Show this help message

OPTIONS:
    -h, --help       Show help for command
    -V, --version    Show version information
    --config FILE    Load settings from FILE

EXAMPLES:
    tw-core-cli check-file spider_pic.png
    tw-core-cli check-link https://tenor.com/view/x --type gifv
    tw-core-cli rewrite \"I have a cat and a dog\"
    tw-core-cli batch < targets.jsonl
    tw-core-cli config validate --config tw-core.toml

ENVIRONMENT:
    TW_CORE_CONFIG               Settings file path (default: tw-core.toml)
    TW_CORE_SPOILER_WORDS        Override spoiler words (comma separated)
    TW_CORE_SPOILER_FILENAMES    Override filename substrings
    TW_CORE_SPOILER_LINKS        Override link substrings
    TW_CORE_GIF_SPOILERS_ONLY    Only spoiler gif links (true/false)
    TW_CORE_IGNORED_CHANNEL_IDS  Channels excluded from filtering
    TW_CORE_IGNORED_GUILD_IDS    Guilds excluded from filtering
    TW_CORE_LOG_FORMAT           Set to 'json' for JSON logs
    RUST_LOG                     Log level (debug, info, warn, error)

EXIT CODES:
    0   Passed / success
    1   Content spoilered
    2   Configuration error or warnings
    3   Batch input error
    64  Usage error
",
        version
    );
}

/// Print detailed help for a specific command.
pub fn print_command_help(command: &str) {
    match command {
        "check-file" => print_check_file_help(),
        "check-link" => print_check_link_help(),
        "rewrite" => print_rewrite_help(),
        "batch" => print_batch_help(),
        "config" => print_config_help(),
        _ => {
            eprintln!(
                "No detailed help available for '{}'. Use 'tw-core-cli help' for general usage.",
                command
            );
        }
    }
}

fn print_check_file_help() {
    eprintln!(
        "tw-core-cli check-file - Check an attachment filename

USAGE:
    tw-core-cli check-file <FILENAME> [OPTIONS]

OPTIONS:
    --channel ID   Channel the attachment was posted in
    --guild ID     Guild the attachment was posted in
    --json         Output the decision as JSON

DESCRIPTION:
    Spoilers the file when it contains any configured filename substring.
    The first matching substring (in configured order) is reported as reason.
"
    );
}

fn print_check_link_help() {
    eprintln!(
        "tw-core-cli check-link - Check a link attachment or embed

USAGE:
    tw-core-cli check-link <URL> [OPTIONS]

OPTIONS:
    --type MEDIA         Embed media type (gifv, image, video, rich, article, link)
    --channel ID         Channel the link was posted in
    --guild ID           Guild the link was posted in
    --after-file NAME    Check this filename first; a file match wins
    --json               Output the decision as JSON

DESCRIPTION:
    With gif_spoilers_only enabled, a matching non-gifv link is tagged with
    its reason but not spoilered.
"
    );
}

fn print_rewrite_help() {
    eprintln!(
        "tw-core-cli rewrite - Wrap spoiler words in message text

USAGE:
    tw-core-cli rewrite <TEXT...> [OPTIONS]

OPTIONS:
    --channel ID   Channel the message belongs to
    --json         Output the rewrite as JSON
"
    );
}

fn print_batch_help() {
    eprintln!(
        "tw-core-cli batch - Classify JSON-lines targets

USAGE:
    tw-core-cli batch [--pretty] < targets.jsonl

INPUT (one per line):
    {{\"kind\":\"filename\",\"filename\":\"a.png\",\"channel_id\":\"1\",\"guild_id\":\"2\"}}
    {{\"kind\":\"link\",\"url\":\"https://...\",\"media_type\":\"gifv\"}}
    {{\"kind\":\"text\",\"body\":\"hello\",\"channel_id\":\"1\"}}
"
    );
}

fn print_config_help() {
    eprintln!(
        "tw-core-cli config - Manage configuration

USAGE:
    tw-core-cli config <SUBCOMMAND> [--config FILE]

SUBCOMMANDS:
    show           Show effective settings (file + environment)
    defaults       Show default settings
    validate       Report empty, duplicate or unmatchable entries
"
    );
}
