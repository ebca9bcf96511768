//! Classify command implementation.

use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::utils::{finish, init_engine, report_rejection, GlobalOptions};
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use winpath::PathFormat;

/// Report the dialect of each path.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: OutputFormat,

    /// Paths to classify
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

#[derive(Serialize)]
struct ClassifyRecord<'a> {
    input: &'a str,
    format: PathFormat,
}

/// Classify a path that also normalizes cleanly.
///
/// Classification alone only looks at the prefix; a path with a reserved
/// character in a later component is still rejected here.
pub fn classify_valid(raw: &str) -> winpath::Result<PathFormat> {
    winpath::normalize(raw)?;
    winpath::classify(raw)
}

impl ClassifyCommand {
    /// Execute the classify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        init_engine(global)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut rejected = 0;
        for raw in &self.paths {
            match classify_valid(raw) {
                Ok(format) => match self.format {
                    OutputFormat::Plain => writeln!(out, "{format}")?,
                    OutputFormat::Json => {
                        let record = ClassifyRecord { input: raw, format };
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

        finish(rejected, self.paths.len())
    }
}
