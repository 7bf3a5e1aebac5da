use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sensedec_core::DecodeError;

#[derive(Parser, Debug)]
#[command(name = "sensedec")]
#[command(version)]
#[command(
    about = "Decoder for binary sensor uplink payloads (FPort-dispatched frames).",
    long_about = None,
    after_help = "Examples:\n  sensedec decode AgMP --fport 2\n  sensedec decode AA9CQAAHoSASNA== --fport 3 --pretty\n  sensedec decode qrvM3e7/4CM= --fport 4 -o record.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one base64 payload and emit the JSON record.
    #[command(
        after_help = "Examples:\n  sensedec decode AgMP --fport 2\n  sensedec decode 3q2+7w== --fport 42"
    )]
    Decode {
        /// Base64-encoded payload (standard alphabet, padded)
        payload: String,

        /// FPort the uplink arrived on, as reported by the network server
        #[arg(long)]
        fport: Option<u8>,

        /// Output record path (JSON); defaults to stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            payload,
            fport,
            output,
            pretty,
            compact,
            quiet,
        } => cmd_decode(&payload, fport, output, pretty, compact, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_decode(
    payload: &str,
    fport: Option<u8>,
    output: Option<PathBuf>,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let record = sensedec_core::decode_base64(payload, fport).map_err(decode_error)?;
    let json = serialize_record(&record, pretty, compact)?;

    let Some(path) = output else {
        println!("{}", json);
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&path, json)
        .with_context(|| format!("Failed to write record: {}", path.display()))?;

    if !quiet {
        eprintln!("OK: record written -> {}", path.display());
    }
    Ok(())
}

fn decode_error(err: DecodeError) -> CliError {
    let hint = match &err {
        DecodeError::MissingPort => Some("pass --fport with the uplink's port".to_string()),
        DecodeError::TooShort { .. } => {
            Some("check the payload against the port's frame format".to_string())
        }
        DecodeError::Base64(_) => Some("supply a standard, padded base64 string".to_string()),
    };
    CliError::new(err.to_string(), hint)
}

fn serialize_record(
    record: &sensedec_core::DecodedUplink,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    let json = if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    };
    Ok(json.context("Failed to serialize record")?)
}
