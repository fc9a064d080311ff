//! renwc - shared plumbing for the nwc encoder and decoder binaries
//!
//! Both tools have the same surface: no arguments streams stdin to stdout,
//! two arguments name an input and an output file, anything else is a
//! usage error. The codec itself lives in `libnwc_codec`; this crate only
//! opens the right byte streams and reports results.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

/// positional input/output pair shared by both binaries
#[derive(Debug, clap::Args)]
pub struct StreamArgs {
    /// input file (stdin when omitted)
    #[arg(requires = "output")]
    pub input: Option<PathBuf>,

    /// output file (stdout when omitted)
    pub output: Option<PathBuf>,
}

impl StreamArgs {
    /// file mode gets a summary printed; stdio mode owns stdout and stays quiet
    pub fn is_file_mode(&self) -> bool {
        self.output.is_some()
    }
}

/// parse argv; malformed invocations print usage and exit with code 1
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

/// input stream: the named file, or locked stdin
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    Ok(match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    })
}

/// output stream: the named file, or locked stdout
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
