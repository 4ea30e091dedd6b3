//! Byte arrangement between chip images and combined ROMs.
//!
//! These functions only shuffle bytes between buffers. Sizes are checked by the caller:
//! every chip buffer must be the same length and the combined buffer must hold all of them.

use std::collections::TryReserveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Chips alternate byte by byte: combined[i * n + k] = chips[k][i].
    Interleave,
    /// Chips are laid end to end in chip order. A single chip is copied unchanged.
    Concatenate,
}

/// Allocate a zero-filled buffer, reporting failure instead of aborting.
pub fn zeroed(len: usize) -> Result<Vec<u8>, TryReserveError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    buffer.resize(len, 0);
    Ok(buffer)
}

/// Weave or append `chips` into `combined`.
///
/// # Panics
///
/// Panics if `combined` is not exactly `chips.len()` times the length of every chip.
pub fn arrange<C: AsRef<[u8]>>(arrangement: Arrangement, chips: &[C], combined: &mut [u8]) {
    let count = chips.len();
    if count == 0 || combined.is_empty() {
        return;
    }
    let chip_size = combined.len() / count;
    assert_eq!(chip_size * count, combined.len(), "combined size is not a multiple of the chip count");

    match arrangement {
        Arrangement::Interleave => {
            for (k, chip) in chips.iter().enumerate() {
                let chip = chip.as_ref();
                assert_eq!(chip.len(), chip_size, "chip {} has the wrong size", k);
                for (i, byte) in chip.iter().enumerate() {
                    combined[i * count + k] = *byte;
                }
            }
        }
        Arrangement::Concatenate => {
            for (k, (slot, chip)) in combined.chunks_exact_mut(chip_size).zip(chips).enumerate() {
                let chip = chip.as_ref();
                assert_eq!(chip.len(), chip_size, "chip {} has the wrong size", k);
                slot.copy_from_slice(chip);
            }
        }
    }
}

/// Undo [`arrange`]: pull each chip's bytes back out of `combined`.
///
/// # Panics
///
/// Panics under the same size mismatch as [`arrange`].
pub fn disarrange<C: AsMut<[u8]>>(arrangement: Arrangement, combined: &[u8], chips: &mut [C]) {
    let count = chips.len();
    if count == 0 || combined.is_empty() {
        return;
    }
    let chip_size = combined.len() / count;
    assert_eq!(chip_size * count, combined.len(), "combined size is not a multiple of the chip count");

    match arrangement {
        Arrangement::Interleave => {
            for (k, chip) in chips.iter_mut().enumerate() {
                let chip = chip.as_mut();
                assert_eq!(chip.len(), chip_size, "chip {} has the wrong size", k);
                for (i, byte) in chip.iter_mut().enumerate() {
                    *byte = combined[i * count + k];
                }
            }
        }
        Arrangement::Concatenate => {
            for (k, (slot, chip)) in combined.chunks_exact(chip_size).zip(chips.iter_mut()).enumerate() {
                let chip = chip.as_mut();
                assert_eq!(chip.len(), chip_size, "chip {} has the wrong size", k);
                chip.copy_from_slice(slot);
            }
        }
    }
}
