//! derhex2bin library crate
//!
//! This crate provides the core functionality for the `derhex2bin` CLI, which
//! takes a hex-encoded DER key from the `GROUP_ID` environment variable and
//! writes the raw bytes to `key.der`. It is organized into small modules:
//! `config` (reading the input), `decode` (hex decoding), `output` (the
//! confirmation line and the key file) and `error`. The binary `src/main.rs`
//! calls `derhex2bin_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `convert()` — the whole conversion for an explicit `Config`.

pub mod config;
pub mod decode;
pub mod error;
pub mod output;

use std::error::Error as _;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use crate::config::{Config, GROUP_ID_VAR};
use crate::decode::decode_hex;
use crate::error::Error;
use crate::output::{confirmation_line, write_key};

/// Top-level CLI. The input comes from the environment, so there are no
/// arguments beyond `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Environment:\n  GROUP_ID  hex-encoded DER key (required, even length)\n\nOutput:\n  key.der   decoded bytes, written to the current directory"
)]
struct Cli {}

/// Result of a successful [`convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub bytes: Vec<u8>,
    pub path: PathBuf,
}

/// Decode the configured value, print the confirmation line to `out`, then
/// write the bytes to the configured output path.
///
/// The input is fully validated before anything is printed or opened, so an
/// invalid value leaves both `out` and the filesystem untouched.
pub fn convert<W: Write>(config: &Config, out: &mut W) -> Result<Conversion, Error> {
    let bytes = decode_hex(GROUP_ID_VAR, config.group_id())?;
    debug!(
        "decoded {} bytes, writing to {}",
        bytes.len(),
        config.output().display()
    );

    writeln!(out, "{}", confirmation_line(config.group_id())).map_err(Error::Stdout)?;
    out.flush().map_err(Error::Stdout)?;

    write_key(config.output(), &bytes)?;
    info!("wrote {} bytes to {}", bytes.len(), config.output().display());

    Ok(Conversion {
        bytes,
        path: config.output().to_path_buf(),
    })
}

/// Run the derhex2bin CLI.
///
/// Reads `GROUP_ID`, decodes it and writes `key.der` in the current
/// directory. Any failure is printed to stderr, together with its causes, and
/// the process exits with status 1.
///
/// Example:
///
/// ```no_run
/// derhex2bin_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = Config::from_env().and_then(|config| convert(&config, &mut io::stdout().lock()));
    if let Err(e) = result {
        eprintln!("error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}
