//! Command-line front end for left rotation.
//!
//! Arguments arrive as text, so they are decoded through [`rotator::input`]
//! before reaching the typed rotation. Failures exit with the codes in
//! [`rotator::exit_codes`].

use std::io::Read;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rotator::input::{rotate_by, rotate_value, sequence_from_strs, shift_from_str};
use rotator::{exit_codes, logging};
use serde_json::Value;
use tracing::debug;

#[derive(Parser)]
#[command(name = "rotator", version, about = "Rotate integer sequences to the left")]
struct Cli {
    /// Raise diagnostic verbosity (`-v` info, `-vv` debug). `RUST_LOG` still applies.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rotate ELEMENTS left by SHIFT positions.
    #[command(allow_negative_numbers = true)]
    Left {
        /// Number of positions (non-negative integer).
        shift: String,
        /// Sequence elements (integers). May be empty.
        elements: Vec<String>,
        /// Print the result as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Rotate a JSON document of the form `{"sequence": [..], "shift": N}`.
    Eval {
        /// Inline document. Read from stdin when omitted or `-`.
        document: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Left {
            shift,
            elements,
            json,
        } => cmd_left(&shift, &elements, json),
        Command::Eval { document } => cmd_eval(document.as_deref()),
    }
}

fn cmd_left(shift: &str, elements: &[String], json: bool) -> Result<()> {
    let sequence = sequence_from_strs(elements).context("decode elements")?;
    let shift = shift_from_str(shift).context("decode shift")?;
    debug!(len = sequence.len(), %shift, "rotating");
    let rotated = rotate_by(&sequence, &shift);
    if json {
        println!("{}", serde_json::to_string(&rotated).context("serialize json")?);
    } else {
        println!("{}", render_plain(&rotated));
    }
    Ok(())
}

fn cmd_eval(document: Option<&str>) -> Result<()> {
    let raw = match document {
        Some(raw) if raw != "-" => raw.to_string(),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read document from stdin")?;
            buf
        }
    };
    let parsed: Value = serde_json::from_str(&raw).context("parse json document")?;
    let Value::Object(fields) = parsed else {
        bail!("document must be a json object with `sequence` and `shift`");
    };
    debug!(fields = fields.len(), "document parsed");
    let rotated = rotate_value(fields.get("sequence"), fields.get("shift")).context("rotate")?;
    println!("{}", serde_json::to_string(&rotated).context("serialize json")?);
    Ok(())
}

fn render_plain(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_left_with_negative_shift() {
        let cli = Cli::parse_from(["rotator", "left", "-1", "1", "2", "3"]);
        match cli.command {
            Command::Left {
                shift,
                elements,
                json,
            } => {
                assert_eq!(shift, "-1");
                assert_eq!(elements, vec!["1", "2", "3"]);
                assert!(!json);
            }
            Command::Eval { .. } => panic!("expected left"),
        }
    }

    #[test]
    fn parse_left_json_without_elements() {
        let cli = Cli::parse_from(["rotator", "left", "--json", "3"]);
        assert!(matches!(
            cli.command,
            Command::Left { ref elements, json: true, .. } if elements.is_empty()
        ));
    }

    #[test]
    fn parse_counts_verbosity() {
        let cli = Cli::parse_from(["rotator", "-vv", "left", "2", "1"]);
        assert_eq!(cli.verbose, 2);
        let cli = Cli::parse_from(["rotator", "left", "2"]);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_eval_inline() {
        let cli = Cli::parse_from(["rotator", "eval", r#"{"sequence":[1],"shift":5}"#]);
        assert!(matches!(cli.command, Command::Eval { document: Some(_) }));
    }

    #[test]
    fn render_plain_joins_with_spaces() {
        assert_eq!(render_plain(&[3, 4, 1, 2]), "3 4 1 2");
        assert_eq!(render_plain(&[]), "");
    }
}
