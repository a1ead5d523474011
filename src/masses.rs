//! Two-tier mass resolution.
//!
//! Per species, masses come from one of two places: a nonzero mass-table
//! entry in the header gives every particle of that species the same mass
//! and consumes nothing from the mass block, while a zero entry means the
//! block carries one value per particle, in species then particle order.
//! The block length therefore depends on the header, so the expected value
//! count is computed from the header alone before a single byte of the
//! block is interpreted. Changing a table entry without rewriting the
//! block desynchronizes every later species, which is exactly what the
//! strict length check here catches.

use crate::blocks::decode_reals;
use crate::config::FormatConfig;
use crate::error::GsrError;
use crate::header::SnapshotHeader;
use crate::NUM_SPECIES;

/// Resolve the per-species mass arrays from the mass record body and the
/// header's mass table.
pub fn resolve_masses(
    body: &[u8],
    header: &SnapshotHeader,
    cfg: &FormatConfig,
) -> Result<[Vec<f64>; NUM_SPECIES], GsrError> {
    let missing = header.missing_mass_count();
    let stored = decode_reals(body, missing, cfg, "mass")?;

    let mut out: [Vec<f64>; NUM_SPECIES] = Default::default();
    let mut offset = 0usize;
    for ((slot, &n), &table_mass) in out.iter_mut().zip(&header.counts).zip(&header.mass_table) {
        let n = n as usize;
        if n == 0 {
            continue;
        }
        if table_mass != 0.0 {
            *slot = vec![table_mass; n];
        } else {
            *slot = stored[offset..offset + n].to_vec();
            offset += n;
        }
    }
    Ok(out)
}
