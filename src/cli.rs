//! Command-line argument handling for the `huffman-codes` binary.
//!
//! Exactly one of `-s <TEXT>` or `-f <PATH>` selects the input.

use std::path::PathBuf;

use crate::error::{HuffmanError, Result};
use crate::input::InputSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Encode(CliArgs),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub source: InputSource,
    /// Optional JSON config file
    pub config_path: Option<PathBuf>,
    /// Print a JSON report instead of text
    pub json: bool,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn from_args(args: &[String]) -> Result<Command> {
        let mut source: Option<InputSource> = None;
        let mut config_path: Option<PathBuf> = None;
        let mut json = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-s" | "-f" => {
                    let flag = args[i].as_str();
                    i += 1;
                    let value = args.get(i).ok_or_else(|| {
                        HuffmanError::InvalidArguments(format!("{} requires a value", flag))
                    })?;
                    if source.is_some() {
                        return Err(HuffmanError::InvalidArguments(
                            "only one of -s or -f may be given".into(),
                        ));
                    }
                    source = Some(if flag == "-s" {
                        InputSource::Literal(value.clone())
                    } else {
                        InputSource::File(PathBuf::from(value))
                    });
                }
                "--config" => {
                    i += 1;
                    let value = args.get(i).ok_or_else(|| {
                        HuffmanError::InvalidArguments("--config requires a path".into())
                    })?;
                    config_path = Some(PathBuf::from(value));
                }
                "--json" => {
                    json = true;
                }
                "--help" | "-h" => {
                    return Ok(Command::Help);
                }
                other => {
                    return Err(HuffmanError::InvalidArguments(format!(
                        "unknown argument: {}",
                        other
                    )));
                }
            }
            i += 1;
        }

        let source = source.ok_or_else(|| {
            HuffmanError::InvalidArguments("an input is required: -s <TEXT> or -f <PATH>".into())
        })?;

        Ok(Command::Encode(CliArgs {
            source,
            config_path,
            json,
        }))
    }
}

pub fn usage() -> &'static str {
    "huffman-codes: build Huffman codes for a string and encode it

USAGE:
    huffman-codes -s <TEXT> [OPTIONS]
    huffman-codes -f <PATH> [OPTIONS]

OPTIONS:
    -s <TEXT>          Encode TEXT
    -f <PATH>          Encode the lines of PATH joined with spaces
    --config <PATH>    JSON configuration file
    --json             Print a JSON report
    --help, -h         Print this help

EXAMPLES:
    huffman-codes -s \"aaabbc\"
    huffman-codes -f notes.txt --json
"
}
