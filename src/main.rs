mod debug_report;

use cudacoach::{ChatResponse, Tutor};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let tutor = match config.seed {
        Some(seed) => Tutor::seeded(seed),
        None => Tutor::new(),
    };

    if config.json {
        let reply = tutor.resolve(&config.input);
        match serde_json::to_string(&ChatResponse { response: reply.text }) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                eprintln!("error: failed to encode reply: {err}");
                std::process::exit(1);
            }
        }
    } else {
        let reply = tutor.resolve_verbose(&config.input);
        debug_report::print_run(&config.input, &reply, config.color);
    }
}

struct CliConfig {
    input: String,
    seed: Option<u64>,
    json: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("cudacoach {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--seed" => {
                let value = args.next().ok_or_else(|| "error: --seed expects a value".to_string())?;
                seed = Some(parse_seed(&value)?);
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
            _ if arg.starts_with("--seed=") => {
                let value = arg.trim_start_matches("--seed=");
                seed = Some(parse_seed(value)?);
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
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

    // An empty message is valid input: dispatch is total, and the reply is a
    // fallback template with the (empty) message substituted.
    Ok(CliConfig { input, seed, json, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_seed(value: &str) -> Result<u64, String> {
    value.parse::<u64>().map_err(|_| format!("error: invalid --seed '{value}' (expected an unsigned integer)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "cudacoach {version}

Rule-based CUDA tutoring responder CLI.

Usage:
  cudacoach [OPTIONS] [--] <message...>
  cudacoach [OPTIONS] --input <text>

Options:
  -i, --input <text>   Learner message to resolve. If omitted, reads remaining
                       args or stdin when no args are provided. An empty
                       message is accepted and draws a fallback reply.
  --seed <u64>         Seed the fallback selector so unmatched messages get
                       reproducible replies.
  --json               Print only the reply, as a {{\"response\": ...}} object.
  --color              Force ANSI color output.
  --no-color           Disable ANSI color output.
  -h, --help           Show this help message.
  -V, --version        Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
