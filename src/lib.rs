//! Reader for Gadget-style N-body snapshot files.
//!
//! A snapshot is a sequence of length-framed binary records: a fixed-layout
//! header followed by position, velocity, identifier and mass blocks for up
//! to six particle species. The header's mass table decides, per species,
//! whether masses come from a header constant or from the mass block, and
//! the mass block's length depends on that decision. [`Snapshot::open`]
//! decodes a whole file in one pass; [`FormatConfig`] selects the format
//! revision (byte order, element widths, header padding).

pub mod analysis;
pub mod blocks;
pub mod config;
pub mod error;
pub mod export;
pub mod header;
pub mod masses;
pub mod record;
pub mod snapshot;

pub use config::{Endian, FormatConfig, IdWidth, RealWidth};
pub use error::GsrError;
pub use header::SnapshotHeader;
pub use snapshot::{Particle, Snapshot, SpeciesView};

/// Number of particle species slots in every snapshot file.
pub const NUM_SPECIES: usize = 6;

/// Conventional display names for the six species slots. The decoder
/// itself treats the slots as opaque.
pub const SPECIES_NAMES: [&str; NUM_SPECIES] =
    ["gas", "halo", "disk", "bulge", "stars", "boundary"];
