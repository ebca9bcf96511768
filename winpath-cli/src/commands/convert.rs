//! Convert command implementation.
//!
//! Normalizes every argument through the process-wide cache and prints it
//! in the requested dialect, one line per accepted path.

use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::utils::{finish, init_engine, report_rejection, GlobalOptions};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use winpath::PathFormat;

/// Convert paths to another dialect.
#[derive(Args)]
pub struct ConvertCommand {
    /// Target dialect
    #[arg(long, value_enum, default_value = "dos", ignore_case = true)]
    pub to: Target,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: OutputFormat,

    /// Print cache statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Paths to convert
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

/// Conversion target.
///
/// Every dialect, plus `win32`: the DOS form with a long-path prefix added
/// only when the path is too long for legacy APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Target {
    /// `C:\Users\x`
    Dos,
    /// `/c/Users/x`
    Unix,
    /// `/mnt/c/Users/x`
    Wsl,
    /// `/cygdrive/c/Users/x`
    Cygwin,
    /// `\\?\C:\Users\x`
    Unc,
    /// `\\server\share\x`
    NetworkShare,
    /// DOS, or long-path UNC past `MAX_PATH`
    Win32,
}

impl Target {
    /// The dialect rendered, or `None` for `win32`.
    pub fn dialect(self) -> Option<PathFormat> {
        match self {
            Self::Dos => Some(PathFormat::Dos),
            Self::Unix => Some(PathFormat::Unix),
            Self::Wsl => Some(PathFormat::Wsl),
            Self::Cygwin => Some(PathFormat::Cygwin),
            Self::Unc => Some(PathFormat::Unc),
            Self::NetworkShare => Some(PathFormat::NetworkShare),
            Self::Win32 => None,
        }
    }

    /// Name used in JSON output.
    pub fn name(self) -> &'static str {
        self.dialect().map_or("win32", PathFormat::as_str)
    }

    /// Normalize `raw` and render it for this target.
    pub fn convert(self, raw: &str) -> winpath::Result<String> {
        match self.dialect() {
            Some(format) => winpath::to_format(raw, format),
            None => winpath::to_win32(raw),
        }
    }
}

#[derive(Serialize)]
struct ConvertRecord<'a> {
    input: &'a str,
    format: &'static str,
    output: &'a str,
}

impl ConvertCommand {
    /// Execute the convert command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Configure the engine before the first path is normalized
        init_engine(global)?;

        // 2. Convert each argument, reporting rejections as we go
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut rejected = 0;
        for raw in &self.paths {
            match self.to.convert(raw) {
                Ok(output) => match self.format {
                    OutputFormat::Plain => writeln!(out, "{output}")?,
                    OutputFormat::Json => {
                        let record = ConvertRecord {
                            input: raw,
                            format: self.to.name(),
                            output: &output,
                        };
                        serde_json::to_writer(&mut out, &record).map_err(io::Error::from)?;
                        writeln!(out)?;
                    }
                },
                Err(e) => {
                    rejected += 1;
                    report_rejection(raw, e);
                }
            }
        }
        out.flush()?;

        // 3. Statistics go to stderr so stdout stays parseable
        if self.stats {
            let stats = winpath::cache_stats();
            match self.format {
                OutputFormat::Plain => eprintln!("{stats}"),
                OutputFormat::Json => eprintln!(
                    "{}",
                    serde_json::to_string(&stats).map_err(io::Error::from)?
                ),
            }
        }

        finish(rejected, self.paths.len())
    }
}
