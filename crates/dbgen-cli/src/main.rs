//! `dbgen`: validate the key schema of annotated structs and write their
//! accessor files.
//!
//! Everything is generated in memory first; if any type in the source fails
//! validation nothing is written.

mod args;
mod error;
mod logging;

use crate::{args::Args, error::Error};
use clap::Parser;
use dbgen_build::{Generator, config::Config, write_files};
use std::{fs, path::Path, process::ExitCode};
use tracing::info;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.level());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let config = Config::discover(args.config.as_deref(), Path::new("."))?;
    let generator = Generator::new(config);

    if args.dump {
        let models = generator.extract_path(&args.source)?;
        println!("{}", serde_json::to_string_pretty(&models)?);

        return Ok(());
    }

    let files = generator.generate_path(&args.source)?;
    if args.check {
        println!("{}: {} type(s) ok", args.source.display(), files.len());

        return Ok(());
    }

    let root = args.root.as_deref().ok_or(Error::MissingRoot)?;
    let dir = root.join(&generator.config().output.dir);
    fs::create_dir_all(&dir).map_err(|source| Error::CreateDir {
        path: dir.clone(),
        source,
    })?;

    for path in write_files(&dir, &files)? {
        info!(path = %path.display(), "generated");
    }

    Ok(())
}
