//! Sen-Know ROM tool - shared library code
//!
//! This crate converts between the two on-disk layouts of the Sen-Know ROM set:
//! - split: the vendor chip dumps with their original filenames
//! - combined: one file per logical ROM, already in program byte order
//!
//! The binaries built from this package are:
//! - senknow-romtool: combine, split and license
//! - convert-senknow-roms: legacy one-shot combine

pub mod error;
pub mod layout;
pub mod rom_set;
pub mod transcode;

pub use error::RomError;
pub use layout::Arrangement;
pub use rom_set::{RomGroup, RomSet};
pub use transcode::Transcoder;

use tracing::Level;
use tracing_subscriber::util::SubscriberInitExt;

pub const LICENSE: &str = "\
MIT License

Copyright (c) 2022 Brandon McGriff

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
";

/// Map a `-v` count onto a log level. Warnings are always shown.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr logger used by both binaries.
pub fn setup_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(level_for_verbosity(verbose))
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(9), Level::TRACE);
    }
}
