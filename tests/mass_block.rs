//! The mass block's length is derived from the header, so header and block
//! must agree exactly. These tests cover the desynchronization cases the
//! two-tier resolution is prone to.

mod common;

use common::{sample_image, Image};
use gsr::{FormatConfig, GsrError, Snapshot};

#[test]
fn table_entry_change_without_block_rewrite_is_rejected() {
    let cfg = FormatConfig::default();
    let mut image = sample_image();
    // flip species 0 from block-stored to table mass without dropping its
    // two values from the block: every later species would desync.
    image.mass_table[0] = 1.5;
    let data = image.encode(&cfg);
    let err = Snapshot::read_from(&data[..], &cfg).unwrap_err();
    assert!(matches!(err, GsrError::Format(ref m) if m.contains("mass block")));
}

#[test]
fn block_sized_by_missing_mass_count_only() {
    let cfg = FormatConfig::default();
    let image = sample_image();
    // species 2 carries 3 particles at a table mass of 0.5; the block holds
    // values for the 2 species-0 particles only.
    let data = image.encode(&cfg);
    let snap = Snapshot::read_from(&data[..], &cfg).unwrap();
    assert_eq!(snap.species(2).masses, &[0.5, 0.5, 0.5]);
    assert_eq!(snap.species(0).masses, &[4.0, 5.0]);
}

#[test]
fn fully_tabulated_image_has_empty_mass_record() {
    let cfg = FormatConfig::default();
    let image = Image {
        counts: [1, 2, 0, 0, 0, 0],
        mass_table: [2.0, 3.0, 0.0, 0.0, 0.0, 0.0],
        time: 0.0,
        positions: vec![[0.0; 3]; 3],
        velocities: vec![[0.0; 3]; 3],
        ids: vec![1, 2, 3],
        stored_masses: vec![],
    };
    let snap = Snapshot::read_from(&image.encode(&cfg)[..], &cfg).unwrap();
    assert_eq!(snap.species(0).masses, &[2.0]);
    assert_eq!(snap.species(1).masses, &[3.0, 3.0]);
}

#[test]
fn extra_mass_values_are_rejected() {
    let cfg = FormatConfig::default();
    let mut image = sample_image();
    image.stored_masses.push(6.0);
    assert!(Snapshot::read_from(&image.encode(&cfg)[..], &cfg).is_err());
}

#[test]
fn missing_mass_values_are_rejected() {
    let cfg = FormatConfig::default();
    let mut image = sample_image();
    image.stored_masses.pop();
    assert!(Snapshot::read_from(&image.encode(&cfg)[..], &cfg).is_err());
}
