mod debug_report;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use verbalize::{Context, Kind, Options, Target, pronounce_verbose_with, pronounce_with};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = match &config.names {
        Some(path) => match load_names(path) {
            Ok(names) => Context::from_source(&names),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        None => Context::default(),
    };
    let opts = Options { target: config.target };

    if config.verbose {
        match pronounce_verbose_with(&config.input, &ctx, &opts) {
            Ok(res) => debug_report::print_run(&config.input, &res, config.color),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    } else {
        match pronounce_with(&config.input, &ctx, &opts) {
            Ok(output) => println!("{output}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}

struct CliConfig {
    input: String,
    names: Option<PathBuf>,
    target: Target,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut names: Option<PathBuf> = None;
    let mut target = Target::All;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("verbalize {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--names" => {
                let value = args.next().ok_or_else(|| "error: --names expects a value".to_string())?;
                names = Some(PathBuf::from(value));
            }
            "--target" => {
                let value = args.next().ok_or_else(|| "error: --target expects a value".to_string())?;
                target = parse_target(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--names=") => {
                names = Some(PathBuf::from(arg.trim_start_matches("--names=")));
            }
            _ if arg.starts_with("--target=") => {
                target = parse_target(arg.trim_start_matches("--target="))?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') && arg.len() > 1 && !is_number(&arg) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, names, target, verbose, color })
}

/// `-42` and `-1,000.5` are input, not options.
fn is_number(arg: &str) -> bool {
    arg[1..].starts_with(|c: char| c.is_ascii_digit())
}

fn parse_target(value: &str) -> Result<Target, String> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(Target::All);
    }
    value.parse::<Kind>().map(Target::Kind).map_err(|err| format!("error: invalid --target: {err}"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

/// One name per line; blank lines and `#` comments are skipped.
fn load_names(path: &PathBuf) -> Result<Vec<String>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| format!("error: failed to read names file '{}': {err}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    let kinds: Vec<&str> = Kind::ALL.iter().map(|k| k.name()).collect();
    format!(
        "verbalize {version}

Rewrites English text the way it is read aloud.

Usage:
  verbalize [OPTIONS] [--] <input...>
  verbalize [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text. If omitted, reads remaining args
                             or stdin when no args are provided.
  --names <file>             Given names to recognize, one per line.
                             Default: a built-in list of common names.
  --target <kind>            Run only <kind> and its prerequisites.
                             One of: all, {kinds}.
  --verbose                  Print a per-round pass report.
  --color                    Force ANSI color output (with --verbose).
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  VERBALIZE_DEBUG_PASSES     Trace scheduling rounds and passes to stderr.

Exit codes:
  0  Success.
  1  Pipeline error or unreadable names file.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        kinds = kinds.join(", ")
    )
}
