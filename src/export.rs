//! Text output for decoded snapshots: ASCII table export and per-species
//! console printing. Both go through the read-only snapshot views only.

use std::io::{self, Write};

use crate::snapshot::{Particle, Snapshot};

fn write_row<W: Write>(w: &mut W, p: &Particle) -> io::Result<()> {
    writeln!(
        w,
        "{:8} {:.5e} {:>12.5e} {:>12.5e} {:>12.5e} {:>12.5e} {:>12.5e} {:>12.5e}",
        p.id,
        p.mass,
        p.position[0],
        p.position[1],
        p.position[2],
        p.velocity[0],
        p.velocity[1],
        p.velocity[2],
    )
}

/// Write every particle of every species as one text row: id, mass,
/// position xyz, velocity xyz. Species order then particle order.
pub fn write_ascii<W: Write>(snapshot: &Snapshot, w: &mut W) -> io::Result<()> {
    for p in snapshot.all_particles() {
        write_row(w, &p)?;
    }
    Ok(())
}

/// Print one species' particles in the same row format.
pub fn print_species<W: Write>(snapshot: &Snapshot, species: usize, w: &mut W) -> io::Result<()> {
    for p in snapshot.species(species).particles() {
        write_row(w, &p)?;
    }
    Ok(())
}
