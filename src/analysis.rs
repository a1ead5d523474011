//! Reductions over a decoded snapshot.

use crate::error::GsrError;
use crate::snapshot::Snapshot;
use crate::NUM_SPECIES;

/// Mass-weighted mean position over the given species slots.
///
/// Returns [`GsrError::ZeroTotalMass`] when the selected particles carry
/// no mass at all (including an empty selection).
pub fn center_of_mass<I>(snapshot: &Snapshot, species: I) -> Result<[f64; 3], GsrError>
where
    I: IntoIterator<Item = usize>,
{
    let mut com = [0.0f64; 3];
    let mut total_mass = 0.0f64;
    for i in species {
        for p in snapshot.species(i).particles() {
            for axis in 0..3 {
                com[axis] += p.position[axis] * p.mass;
            }
            total_mass += p.mass;
        }
    }
    if total_mass == 0.0 {
        return Err(GsrError::ZeroTotalMass);
    }
    Ok(com.map(|c| c / total_mass))
}

/// [`center_of_mass`] over all six species.
pub fn center_of_mass_all(snapshot: &Snapshot) -> Result<[f64; 3], GsrError> {
    center_of_mass(snapshot, 0..NUM_SPECIES)
}
