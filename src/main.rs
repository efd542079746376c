//! TW-CORE entry point.
//!
//! Sets up logging, loads settings and dispatches the classification and
//! configuration commands.

mod cli_parser;

use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use tw_core::cli::batch::run_batch;
use tw_core::cli::commands::{self, build_classifier, load_settings};
use tw_core::cli::{CliError, CommandArgs, EXIT_USAGE};

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    let rest = args.get(2..).unwrap_or_default();

    let result = match command {
        "check-file" => classify_cmd(rest, &["--channel", "--guild"], |a, c, o| {
            commands::run_check_file(a, c, o)
        }),
        "check-link" => classify_cmd(
            rest,
            &["--type", "--channel", "--guild", "--after-file"],
            |a, c, o| commands::run_check_link(a, c, o),
        ),
        "rewrite" => classify_cmd(rest, &["--channel"], |a, c, o| commands::run_rewrite(a, c, o)),
        "batch" => run_batch_cmd(rest),
        "config" => run_config_cmd(rest),
        "help" | "--help" | "-h" => {
            match rest.first() {
                Some(sub) => cli_parser::print_command_help(sub),
                None => cli_parser::print_usage(),
            }
            Ok(0)
        }
        "version" | "--version" | "-V" => {
            println!("TW-CORE {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            cli_parser::print_usage();
            Ok(EXIT_USAGE)
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.exit_code() == EXIT_USAGE {
                cli_parser::print_command_help(command);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var("TW_CORE_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

type Command = fn(
    &CommandArgs,
    &tw_core::SpoilerClassifier,
    &mut io::StdoutLock<'static>,
) -> Result<u8, CliError>;

fn classify_cmd(rest: &[String], value_options: &[&str], run: Command) -> Result<u8, CliError> {
    let args = CommandArgs::parse(rest, value_options, &["--json"])?;
    let settings = load_settings(&args)?;
    let classifier = build_classifier(&settings);
    let mut out = io::stdout().lock();
    let code = run(&args, &classifier, &mut out)?;
    out.flush()?;
    Ok(code)
}

fn run_batch_cmd(rest: &[String]) -> Result<u8, CliError> {
    let args = CommandArgs::parse(rest, &[], &["--pretty"])?;
    let settings = load_settings(&args)?;
    let classifier = build_classifier(&settings);
    let stdin = io::stdin().lock();
    let mut out = io::stdout().lock();
    run_batch(stdin, &mut out, &classifier, args.switch("--pretty"))?;
    Ok(0)
}

fn run_config_cmd(rest: &[String]) -> Result<u8, CliError> {
    let args = CommandArgs::parse(rest, &[], &[])?;
    let sub = args.positionals.first().map(String::as_str).unwrap_or("show");
    let mut out = io::stdout().lock();
    match sub {
        "show" => commands::run_config_show(&args, &mut out),
        "defaults" => commands::run_config_defaults(&mut out),
        "validate" => commands::run_config_validate(&args, &mut out),
        _ => {
            eprintln!("Unknown config subcommand: {}", sub);
            cli_parser::print_command_help("config");
            Ok(EXIT_USAGE)
        }
    }
}
