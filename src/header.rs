//! Snapshot header codec.
//!
//! The header record starts with a fixed 80-byte prefix:
//!
//! ```text
//! Int32[6]   particle counts per species
//! Float64[6] mass table (0.0 = masses stored per particle)
//! Float64    simulation time / scale factor
//! ```
//!
//! followed by reserved padding whose width varies by format revision (see
//! [`FormatConfig::header_pad`]). The padding is consumed and ignored.

use serde::Serialize;

use crate::config::FormatConfig;
use crate::error::GsrError;
use crate::NUM_SPECIES;

/// Byte length of the decoded header prefix: 6 counts, 6 mass entries, time.
pub const HEADER_PREFIX_LEN: usize = NUM_SPECIES * 4 + NUM_SPECIES * 8 + 8;

/// Decoded snapshot header. Immutable once built; the total particle count
/// is always recomputed from the per-species counts rather than stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotHeader {
    /// Particle count per species slot 0..5.
    pub counts: [u32; NUM_SPECIES],
    /// Uniform particle mass per species; exactly 0.0 means the masses of
    /// that species are stored individually in the mass block.
    pub mass_table: [f64; NUM_SPECIES],
    /// Simulation time or scale factor.
    pub time: f64,
}

impl SnapshotHeader {
    /// Total number of particles across all species.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Number of particles whose masses must be read from the mass block:
    /// the sum of counts over species with a zero mass-table entry. This
    /// determines the exact length of the mass record before it is read.
    pub fn missing_mass_count(&self) -> usize {
        self.counts
            .iter()
            .zip(&self.mass_table)
            .filter(|&(_, &m)| m == 0.0)
            .map(|(&n, _)| n as usize)
            .sum()
    }
}

/// Decode the header record body into a [`SnapshotHeader`].
pub fn decode_header(body: &[u8], cfg: &FormatConfig) -> Result<SnapshotHeader, GsrError> {
    if body.len() < HEADER_PREFIX_LEN {
        return Err(GsrError::Format(format!(
            "header record too short: {} bytes, need at least {HEADER_PREFIX_LEN}",
            body.len()
        )));
    }
    let expected = HEADER_PREFIX_LEN + cfg.header_pad;
    if body.len() != expected {
        return Err(GsrError::Format(format!(
            "header record is {} bytes but this format variant expects {expected} \
             ({HEADER_PREFIX_LEN} known + {} reserved)",
            body.len(),
            cfg.header_pad
        )));
    }

    let mut counts = [0u32; NUM_SPECIES];
    for (i, slot) in counts.iter_mut().enumerate() {
        let raw = cfg.endian.read_i32(&body[i * 4..]);
        if raw < 0 {
            return Err(GsrError::Format(format!(
                "negative particle count {raw} for species {i}"
            )));
        }
        *slot = raw as u32;
    }

    let mut mass_table = [0.0f64; NUM_SPECIES];
    let mass_base = NUM_SPECIES * 4;
    for (i, slot) in mass_table.iter_mut().enumerate() {
        *slot = cfg.endian.read_f64(&body[mass_base + i * 8..]);
    }

    let time = cfg.endian.read_f64(&body[mass_base + NUM_SPECIES * 8..]);

    Ok(SnapshotHeader {
        counts,
        mass_table,
        time,
    })
}
