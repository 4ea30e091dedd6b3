use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};

use senknow_romtool::{setup_logging, Transcoder, LICENSE};

#[derive(Parser)]
#[command(name = "senknow-romtool")]
#[command(version, about = "Sen-Know arcade ROM combine/split tool", long_about = None)]
#[command(after_help = "This tool cannot create directories, the directories passed in must already exist.")]
struct Cli {
    /// Log more detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename and combine original ROMs to singular binary files
    #[command(long_flag = "combine")]
    Combine {
        /// Directory holding the split (original) ROMs
        source: PathBuf,

        /// Directory to write the combined ROMs to
        destination: PathBuf,
    },

    /// Rename and split apart combined ROMs to the original format
    #[command(long_flag = "split")]
    Split {
        /// Directory holding the combined ROMs
        source: PathBuf,

        /// Directory to write the split ROMs to
        destination: PathBuf,
    },

    /// Show this software's license
    #[command(long_flag = "license")]
    License,
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Combine { source, destination } => {
            Transcoder::new(source, destination)
                .combine()
                .context("failed to combine ROMs")?;
            println!("Successfully wrote all combined/renamed ROMs");
        }
        Commands::Split { source, destination } => {
            Transcoder::new(source, destination)
                .split()
                .context("failed to split ROMs")?;
            println!("Successfully wrote all split/renamed ROMs");
        }
        Commands::License => print!("{}", LICENSE),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn flag_and_word_spellings_parse() {
        let cli = parse(&["senknow-romtool", "--combine", "a", "b"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Combine { ref source, ref destination }
                if source.as_path() == Path::new("a") && destination.as_path() == Path::new("b")
        ));

        let cli = parse(&["senknow-romtool", "combine", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Commands::Combine { .. }));

        let cli = parse(&["senknow-romtool", "split", "a", "b"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Split { ref source, ref destination }
                if source.as_path() == Path::new("a") && destination.as_path() == Path::new("b")
        ));

        let cli = parse(&["senknow-romtool", "--split", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Commands::Split { .. }));

        let cli = parse(&["senknow-romtool", "--license"]).unwrap();
        assert!(matches!(cli.command, Commands::License));
    }

    #[test]
    fn verbosity_counts() {
        let cli = parse(&["senknow-romtool", "combine", "-vv", "a", "b"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn usage_errors() {
        assert!(parse(&["senknow-romtool"]).is_err());
        assert!(parse(&["senknow-romtool", "combine", "a"]).is_err());
        assert!(parse(&["senknow-romtool", "split"]).is_err());
        assert!(parse(&["senknow-romtool", "bogus", "a", "b"]).is_err());
        assert!(parse(&["senknow-romtool", "combine", "a", "b", "c"]).is_err());
    }
}
