use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a combine, split or convert can fail.
///
/// None of these are retried. Files already written for earlier groups stay on disk.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("failed to allocate {size:#x} bytes for {group}")]
    Allocation {
        group: &'static str,
        size: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("failed to open {} ({group}) for {access}", .path.display())]
    Open {
        group: &'static str,
        path: PathBuf,
        access: Access,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {} ({group})", .path.display())]
    Read {
        group: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {} ({group})", .path.display())]
    Write {
        group: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Reading,
    Writing,
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => f.write_str("reading"),
            Self::Writing => f.write_str("writing"),
        }
    }
}

impl RomError {
    /// Name of the ROM group that was being processed.
    pub fn group(&self) -> &'static str {
        match self {
            Self::Allocation { group, .. }
            | Self::Open { group, .. }
            | Self::Read { group, .. }
            | Self::Write { group, .. } => group,
        }
    }
}
