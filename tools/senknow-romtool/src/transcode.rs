//! Moving ROM groups between the split and combined layouts on disk.
//!
//! Groups are handled one at a time, in set order. Each group owns its files and buffers
//! for the duration of its own step, so they are closed and freed on every exit path.
//! The first failure stops the run; files written for earlier groups are left in place.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Access, RomError};
use crate::layout::{self, Arrangement};
use crate::rom_set::{RomGroup, RomSet};

/// A single combine/split/convert run between two directories.
#[derive(Debug, Clone)]
pub struct Transcoder {
    source: PathBuf,
    destination: PathBuf,
    set: RomSet,
}

impl Transcoder {
    /// Transcode the Sen-Know set from `source` into `destination`.
    ///
    /// Neither directory is created; both must already exist.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            set: RomSet::senknow(),
        }
    }

    /// Use a different group table.
    pub fn with_set(mut self, set: RomSet) -> Self {
        self.set = set;
        self
    }

    /// Chip dumps in `source` -> combined ROMs in `destination`.
    pub fn combine(&self) -> Result<(), RomError> {
        for group in self.set.groups() {
            self.combine_group(group)?;
        }
        Ok(())
    }

    /// Combined ROMs in `source` -> chip dumps in `destination`.
    pub fn split(&self) -> Result<(), RomError> {
        for group in self.set.groups() {
            self.split_group(group)?;
        }
        Ok(())
    }

    /// Legacy one-shot combine.
    ///
    /// Every source chip of every group is opened before anything is written, so a missing
    /// dump never leaves a partial set of combined ROMs behind.
    pub fn convert(&self) -> Result<(), RomError> {
        for group in self.set.groups() {
            for chip in group.chips {
                open_for_reading(group, &self.source.join(chip))?;
            }
        }
        self.combine()
    }

    /// Combine one group, returning the path of the written file.
    pub fn combine_group(&self, group: &RomGroup) -> Result<PathBuf, RomError> {
        let chip_paths: Vec<PathBuf> = group.chips.iter().map(|c| self.source.join(c)).collect();

        // all chips must open before any of them is read
        let mut files = chip_paths
            .iter()
            .map(|path| open_for_reading(group, path))
            .collect::<Result<Vec<_>, _>>()?;

        let mut chips = Vec::with_capacity(files.len());
        for (file, path) in files.iter_mut().zip(&chip_paths) {
            let mut chip = allocate(group, group.chip_size)?;
            read_exact(group, path, file, &mut chip)?;
            chips.push(chip);
        }
        drop(files);

        let mut combined = allocate(group, group.combined_size())?;
        layout::arrange(group.arrangement, &chips, &mut combined);
        drop(chips);

        let output = self.destination.join(group.combined);
        let mut file = create_for_writing(group, &output)?;
        write_all(group, &output, &mut file, &combined)?;

        info!(
            "{:<10} {} x {:#x} ({}) -> {}",
            group.name,
            group.chip_count(),
            group.chip_size,
            describe(group),
            output.display()
        );
        Ok(output)
    }

    /// Split one group, returning the paths of the written chip files.
    pub fn split_group(&self, group: &RomGroup) -> Result<Vec<PathBuf>, RomError> {
        let input = self.source.join(group.combined);
        let mut file = open_for_reading(group, &input)?;

        let expected = group.combined_size();
        if let Ok(metadata) = file.metadata() {
            if metadata.len() > expected as u64 {
                warn!(
                    "{} is {:#x} bytes, only the first {:#x} are used",
                    input.display(),
                    metadata.len(),
                    expected
                );
            }
        }

        let mut combined = allocate(group, expected)?;
        read_exact(group, &input, &mut file, &mut combined)?;
        drop(file);

        let mut chips = Vec::with_capacity(group.chip_count());
        for _ in group.chips {
            chips.push(allocate(group, group.chip_size)?);
        }
        layout::disarrange(group.arrangement, &combined, &mut chips);
        drop(combined);

        let mut written = Vec::with_capacity(chips.len());
        for (chip, name) in chips.iter().zip(group.chips) {
            let output = self.destination.join(name);
            let mut file = create_for_writing(group, &output)?;
            write_all(group, &output, &mut file, chip)?;
            written.push(output);
        }

        info!(
            "{:<10} {} ({}) -> {} chip(s) in {}",
            group.name,
            group.combined,
            describe(group),
            written.len(),
            self.destination.display()
        );
        Ok(written)
    }
}

fn describe(group: &RomGroup) -> &'static str {
    match (group.arrangement, group.chip_count()) {
        (Arrangement::Concatenate, 1) => "identity",
        (Arrangement::Interleave, _) => "interleave",
        (Arrangement::Concatenate, _) => "concatenate",
    }
}

fn allocate(group: &RomGroup, size: usize) -> Result<Vec<u8>, RomError> {
    layout::zeroed(size).map_err(|source| RomError::Allocation {
        group: group.name,
        size,
        source,
    })
}

fn open_for_reading(group: &RomGroup, path: &Path) -> Result<File, RomError> {
    debug!("opening {} for reading", path.display());
    File::open(path).map_err(|source| RomError::Open {
        group: group.name,
        path: path.to_path_buf(),
        access: Access::Reading,
        source,
    })
}

fn create_for_writing(group: &RomGroup, path: &Path) -> Result<File, RomError> {
    debug!("opening {} for writing", path.display());
    File::create(path).map_err(|source| RomError::Open {
        group: group.name,
        path: path.to_path_buf(),
        access: Access::Writing,
        source,
    })
}

/// Fill `buffer` completely. A short file is a read error.
fn read_exact(group: &RomGroup, path: &Path, file: &mut File, buffer: &mut [u8]) -> Result<(), RomError> {
    file.read_exact(buffer).map_err(|source| RomError::Read {
        group: group.name,
        path: path.to_path_buf(),
        source,
    })
}

fn write_all(group: &RomGroup, path: &Path, file: &mut File, buffer: &[u8]) -> Result<(), RomError> {
    file.write_all(buffer)
        .and_then(|_| file.flush())
        .map_err(|source| RomError::Write {
            group: group.name,
            path: path.to_path_buf(),
            source,
        })
}
