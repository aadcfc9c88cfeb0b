use std::{io, path::PathBuf};

use clap::ValueHint;
use time::macros::format_description;
use tracing_subscriber::fmt::time::OffsetTime;

/// How log events are laid out on stderr.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event, span fields appended
    Compact,
    /// One line per event, with the span context up front
    Full,
    /// Multi-line events
    Pretty,
    /// Newline-delimited JSON objects
    Json,
}

/// Normalize Wavefront OBJ files
#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,objtext=info,objfmt=info",
        env = "OBJFMT_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub log_format: LogFormat,
    /// Reject files with malformed lines instead of dropping those lines
    #[arg(short, long, env = "OBJFMT_STRICT")]
    pub strict: bool,
    /// Only report what each file contains; don't write anything
    #[arg(short, long)]
    pub check: bool,
    /// Directory in which to write normalized files; if unset, normalized files are written to
    /// stdout
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub output: Option<PathBuf>,
    /// Files to normalize
    #[arg(num_args = 1.., required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Install the global log subscriber.
    ///
    /// Events go to stderr; stdout is reserved for normalized OBJ text.
    pub(crate) fn init_logging(&self) {
        let offset = time::UtcOffset::current_local_offset();
        let timer = OffsetTime::new(
            offset.unwrap_or(time::UtcOffset::UTC),
            format_description!("[hour]:[minute]:[second].[subsecond digits:3]"),
        );
        let builder = tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_timer(timer)
            .with_env_filter(self.log_filter.as_str());

        match self.log_format {
            LogFormat::Compact => builder.compact().init(),
            LogFormat::Full => builder.init(),
            LogFormat::Pretty => builder.pretty().init(),
            LogFormat::Json => builder.json().init(),
        }

        // reported once a subscriber exists to receive it
        if let Err(error) = offset {
            tracing::warn!(%error, "couldn't get local time offset; logging in UTC");
        }
    }
}
