//! Snapshot assembly and the read-only view consumers get.
//!
//! Records are decoded in the fixed file order: header, positions,
//! velocities, identifiers, masses. Each stage feeds the next through its
//! returned value only; any failure aborts the whole assembly and nothing
//! partial escapes. The file handle lives inside [`Snapshot::open`] and is
//! dropped on every exit path.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::blocks::{split_ids, split_vectors};
use crate::config::FormatConfig;
use crate::error::GsrError;
use crate::header::{decode_header, SnapshotHeader};
use crate::masses::resolve_masses;
use crate::record::read_record;
use crate::NUM_SPECIES;

/// Fully decoded snapshot. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    header: SnapshotHeader,
    positions: [Vec<[f64; 3]>; NUM_SPECIES],
    velocities: [Vec<[f64; 3]>; NUM_SPECIES],
    ids: [Vec<i64>; NUM_SPECIES],
    masses: [Vec<f64>; NUM_SPECIES],
}

impl Snapshot {
    /// Open and decode a snapshot file.
    ///
    /// A file that cannot be opened is [`GsrError::FileUnavailable`];
    /// everything after a successful open follows [`Snapshot::read_from`].
    pub fn open<P: AsRef<Path>>(path: P, cfg: &FormatConfig) -> Result<Self, GsrError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GsrError::FileUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read_from(BufReader::new(file), cfg)
    }

    /// Decode a snapshot from a forward-only byte stream.
    pub fn read_from<R: Read>(mut reader: R, cfg: &FormatConfig) -> Result<Self, GsrError> {
        let header = decode_header(&read_record(&mut reader, cfg.endian)?, cfg)?;
        debug!(
            total = header.total(),
            time = header.time,
            "decoded snapshot header"
        );

        let positions = split_vectors(
            &read_record(&mut reader, cfg.endian)?,
            &header.counts,
            cfg,
            "position",
        )?;
        let velocities = split_vectors(
            &read_record(&mut reader, cfg.endian)?,
            &header.counts,
            cfg,
            "velocity",
        )?;
        let ids = split_ids(&read_record(&mut reader, cfg.endian)?, &header.counts, cfg)?;
        let masses = resolve_masses(&read_record(&mut reader, cfg.endian)?, &header, cfg)?;
        debug!(missing = header.missing_mass_count(), "decoded all blocks");

        Ok(Self {
            header,
            positions,
            velocities,
            ids,
            masses,
        })
    }

    pub fn header(&self) -> &SnapshotHeader {
        &self.header
    }

    /// Parallel per-particle arrays for one species slot.
    ///
    /// # Panics
    /// Panics if `species >= NUM_SPECIES`.
    pub fn species(&self, species: usize) -> SpeciesView<'_> {
        SpeciesView {
            ids: &self.ids[species],
            masses: &self.masses[species],
            positions: &self.positions[species],
            velocities: &self.velocities[species],
        }
    }

    /// All particles of all species, in species then particle order.
    pub fn all_particles(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..NUM_SPECIES).flat_map(move |i| self.species(i).particles())
    }
}

/// Borrowed view of one species' arrays. Index j refers to the same
/// physical particle in every array.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesView<'a> {
    pub ids: &'a [i64],
    pub masses: &'a [f64],
    pub positions: &'a [[f64; 3]],
    pub velocities: &'a [[f64; 3]],
}

impl<'a> SpeciesView<'a> {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate the species' particles in stored order.
    pub fn particles(&self) -> impl Iterator<Item = Particle> + 'a {
        let view = *self;
        (0..view.len()).map(move |j| Particle {
            id: view.ids[j],
            mass: view.masses[j],
            position: view.positions[j],
            velocity: view.velocities[j],
        })
    }
}

/// One particle's fields, assembled from the parallel arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: i64,
    pub mass: f64,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}
