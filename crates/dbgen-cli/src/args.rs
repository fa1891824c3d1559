use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

///
/// Args
///

/// Generate index-key accessors for the annotated structs in a Rust source file.
#[derive(Debug, Parser)]
#[command(name = "dbgen", version, about)]
pub struct Args {
    /// Rust source file holding the annotated structs.
    pub source: PathBuf,

    /// Output root; files are written under `<root>/<output.dir>`.
    #[arg(long, env = "DBGEN_ROOT", required_unless_present_any = ["check", "dump"])]
    pub root: Option<PathBuf>,

    /// Config file; defaults to `dbgen.toml` in the working directory if present.
    #[arg(long, env = "DBGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Validate and render without writing anything.
    #[arg(long, conflicts_with = "dump")]
    pub check: bool,

    /// Print the extracted models as JSON instead of writing files.
    #[arg(long)]
    pub dump: bool,

    /// More log output (repeatable).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Default log level; `RUST_LOG` still takes precedence.
    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }

        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

///
/// TESTS
///
