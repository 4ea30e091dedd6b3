use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use senknow_romtool::{setup_logging, Transcoder};

/// Combine the original Sen-Know ROM dumps into one file per ROM region.
#[derive(Parser)]
#[command(name = "convert-senknow-roms")]
#[command(version, about, long_about = None)]
struct Args {
    /// Log more detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Directory holding the original ROMs
    source: PathBuf,

    /// Directory to write the converted ROMs to (must already exist)
    destination: PathBuf,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let result = Transcoder::new(&args.source, &args.destination)
        .convert()
        .with_context(|| format!("failed to convert ROMs from {}", args.source.display()));

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_and_destination() {
        let args = Args::try_parse_from(["convert-senknow-roms", "roms", "out"]).unwrap();
        assert_eq!(args.source, PathBuf::from("roms"));
        assert_eq!(args.destination, PathBuf::from("out"));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn usage_errors() {
        assert!(Args::try_parse_from(["convert-senknow-roms"]).is_err());
        assert!(Args::try_parse_from(["convert-senknow-roms", "roms"]).is_err());
        assert!(Args::try_parse_from(["convert-senknow-roms", "a", "b", "c"]).is_err());
    }
}
