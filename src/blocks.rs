//! Flat-buffer decoding for the particle data blocks.
//!
//! Positions, velocities and identifiers are each stored as one contiguous
//! run of fixed-width elements spanning all species in species order. The
//! header's per-species counts say exactly where each species' sub-run
//! starts and ends; element order inside a sub-run is the particle order
//! and is never changed.

use crate::config::FormatConfig;
use crate::error::GsrError;
use crate::NUM_SPECIES;

/// Decode `expected` real values from `body`, rejecting any length
/// mismatch. Shared by the vector blocks and the mass block.
pub(crate) fn decode_reals(
    body: &[u8],
    expected: usize,
    cfg: &FormatConfig,
    what: &str,
) -> Result<Vec<f64>, GsrError> {
    let width = cfg.real_width.size();
    if body.len() != expected * width {
        return Err(GsrError::Format(format!(
            "{what} block is {} bytes but header implies {} ({expected} values of {width} bytes)",
            body.len(),
            expected * width
        )));
    }
    Ok(body
        .chunks_exact(width)
        .map(|chunk| cfg.real_width.read(cfg.endian, chunk))
        .collect())
}

/// Decode a 3-component vector block (positions or velocities) and split it
/// into per-species arrays of length `counts[i]`.
pub fn split_vectors(
    body: &[u8],
    counts: &[u32; NUM_SPECIES],
    cfg: &FormatConfig,
    what: &str,
) -> Result<[Vec<[f64; 3]>; NUM_SPECIES], GsrError> {
    let total: usize = counts.iter().map(|&c| c as usize).sum();
    let flat = decode_reals(body, total * 3, cfg, what)?;

    let mut out: [Vec<[f64; 3]>; NUM_SPECIES] = Default::default();
    let mut offset = 0usize;
    for (slot, &n) in out.iter_mut().zip(counts) {
        let n = n as usize;
        *slot = flat[offset * 3..(offset + n) * 3]
            .chunks_exact(3)
            .map(|v| [v[0], v[1], v[2]])
            .collect();
        offset += n;
    }
    Ok(out)
}

/// Decode the identifier block and split it into per-species arrays.
pub fn split_ids(
    body: &[u8],
    counts: &[u32; NUM_SPECIES],
    cfg: &FormatConfig,
) -> Result<[Vec<i64>; NUM_SPECIES], GsrError> {
    let total: usize = counts.iter().map(|&c| c as usize).sum();
    let width = cfg.id_width.size();
    if body.len() != total * width {
        return Err(GsrError::Format(format!(
            "id block is {} bytes but header implies {} ({total} ids of {width} bytes)",
            body.len(),
            total * width
        )));
    }
    let flat: Vec<i64> = body
        .chunks_exact(width)
        .map(|chunk| cfg.id_width.read(cfg.endian, chunk))
        .collect();

    let mut out: [Vec<i64>; NUM_SPECIES] = Default::default();
    let mut offset = 0usize;
    for (slot, &n) in out.iter_mut().zip(counts) {
        let n = n as usize;
        *slot = flat[offset..offset + n].to_vec();
        offset += n;
    }
    Ok(out)
}
