//! Test-only encoder for snapshot images. The library deliberately has no
//! write path, so the tests build byte images by hand here.
#![allow(dead_code)]

use gsr::{Endian, FormatConfig, IdWidth, RealWidth};

pub fn i32_bytes(cfg: &FormatConfig, v: i32) -> Vec<u8> {
    match cfg.endian {
        Endian::Little => v.to_le_bytes().to_vec(),
        Endian::Big => v.to_be_bytes().to_vec(),
    }
}

pub fn f64_bytes(cfg: &FormatConfig, v: f64) -> Vec<u8> {
    match cfg.endian {
        Endian::Little => v.to_le_bytes().to_vec(),
        Endian::Big => v.to_be_bytes().to_vec(),
    }
}

pub fn real_bytes(cfg: &FormatConfig, v: f64) -> Vec<u8> {
    match (cfg.real_width, cfg.endian) {
        (RealWidth::F32, Endian::Little) => (v as f32).to_le_bytes().to_vec(),
        (RealWidth::F32, Endian::Big) => (v as f32).to_be_bytes().to_vec(),
        (RealWidth::F64, Endian::Little) => v.to_le_bytes().to_vec(),
        (RealWidth::F64, Endian::Big) => v.to_be_bytes().to_vec(),
    }
}

pub fn id_bytes(cfg: &FormatConfig, v: i64) -> Vec<u8> {
    match (cfg.id_width, cfg.endian) {
        (IdWidth::I32, Endian::Little) => (v as i32).to_le_bytes().to_vec(),
        (IdWidth::I32, Endian::Big) => (v as i32).to_be_bytes().to_vec(),
        (IdWidth::I64, Endian::Little) => v.to_le_bytes().to_vec(),
        (IdWidth::I64, Endian::Big) => v.to_be_bytes().to_vec(),
    }
}

/// Wrap a record body in matching leading/trailing length fields.
pub fn frame(cfg: &FormatConfig, body: &[u8]) -> Vec<u8> {
    let mut out = i32_bytes(cfg, body.len() as i32);
    out.extend_from_slice(body);
    out.extend_from_slice(&i32_bytes(cfg, body.len() as i32));
    out
}

pub fn header_body(
    cfg: &FormatConfig,
    counts: [u32; 6],
    mass_table: [f64; 6],
    time: f64,
) -> Vec<u8> {
    let mut body = Vec::new();
    for c in counts {
        body.extend_from_slice(&i32_bytes(cfg, c as i32));
    }
    for m in mass_table {
        body.extend_from_slice(&f64_bytes(cfg, m));
    }
    body.extend_from_slice(&f64_bytes(cfg, time));
    body.extend(std::iter::repeat(0u8).take(cfg.header_pad));
    body
}

/// Everything needed to encode one well-formed snapshot image.
#[derive(Debug, Clone)]
pub struct Image {
    pub counts: [u32; 6],
    pub mass_table: [f64; 6],
    pub time: f64,
    /// Flat across species, length = total.
    pub positions: Vec<[f64; 3]>,
    pub velocities: Vec<[f64; 3]>,
    pub ids: Vec<i64>,
    /// One value per particle of each zero-table species, in file order.
    pub stored_masses: Vec<f64>,
}

impl Image {
    pub fn encode(&self, cfg: &FormatConfig) -> Vec<u8> {
        let mut out = frame(
            cfg,
            &header_body(cfg, self.counts, self.mass_table, self.time),
        );

        let mut pos = Vec::new();
        for v in &self.positions {
            for c in v {
                pos.extend_from_slice(&real_bytes(cfg, *c));
            }
        }
        out.extend_from_slice(&frame(cfg, &pos));

        let mut vel = Vec::new();
        for v in &self.velocities {
            for c in v {
                vel.extend_from_slice(&real_bytes(cfg, *c));
            }
        }
        out.extend_from_slice(&frame(cfg, &vel));

        let mut ids = Vec::new();
        for id in &self.ids {
            ids.extend_from_slice(&id_bytes(cfg, *id));
        }
        out.extend_from_slice(&frame(cfg, &ids));

        let mut masses = Vec::new();
        for m in &self.stored_masses {
            masses.extend_from_slice(&real_bytes(cfg, *m));
        }
        out.extend_from_slice(&frame(cfg, &masses));

        out
    }
}

/// A small mixed image: species 0 reads masses from the block, species 2
/// takes a uniform table mass, other slots are empty.
pub fn sample_image() -> Image {
    Image {
        counts: [2, 0, 3, 0, 0, 0],
        mass_table: [0.0, 0.0, 0.5, 0.0, 0.0, 0.0],
        time: 0.25,
        positions: vec![
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [9.0, 9.0, 9.0],
            [8.0, 8.0, 8.0],
            [7.0, 7.0, 7.0],
        ],
        velocities: vec![
            [0.1, 0.0, 0.0],
            [0.2, 0.0, 0.0],
            [-1.0, 0.0, 1.0],
            [-2.0, 0.0, 2.0],
            [-3.0, 0.0, 3.0],
        ],
        ids: vec![10, 11, 30, 31, 32],
        stored_masses: vec![4.0, 5.0],
    }
}
