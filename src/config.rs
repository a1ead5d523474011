//! Format-variant parameters for the snapshot decoder.
//!
//! Observed snapshot files differ in byte order, in the width of the block
//! elements and in how many reserved bytes pad the header record. All of
//! these are fixed per file and are collected here so that a single decoder
//! handles every revision; none of them is ever derived from the host.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte order of every field in a snapshot file, record framing included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

impl Endian {
    pub(crate) fn read_i32(self, buf: &[u8]) -> i32 {
        match self {
            Endian::Little => LittleEndian::read_i32(buf),
            Endian::Big => BigEndian::read_i32(buf),
        }
    }

    pub(crate) fn read_i64(self, buf: &[u8]) -> i64 {
        match self {
            Endian::Little => LittleEndian::read_i64(buf),
            Endian::Big => BigEndian::read_i64(buf),
        }
    }

    pub(crate) fn read_f32(self, buf: &[u8]) -> f32 {
        match self {
            Endian::Little => LittleEndian::read_f32(buf),
            Endian::Big => BigEndian::read_f32(buf),
        }
    }

    pub(crate) fn read_f64(self, buf: &[u8]) -> f64 {
        match self {
            Endian::Little => LittleEndian::read_f64(buf),
            Endian::Big => BigEndian::read_f64(buf),
        }
    }
}

/// On-disk width of real-valued block elements (positions, velocities,
/// masses). Values are widened to `f64` in memory either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RealWidth {
    #[default]
    F32,
    F64,
}

impl RealWidth {
    pub(crate) fn size(self) -> usize {
        match self {
            RealWidth::F32 => 4,
            RealWidth::F64 => 8,
        }
    }

    pub(crate) fn read(self, endian: Endian, buf: &[u8]) -> f64 {
        match self {
            RealWidth::F32 => f64::from(endian.read_f32(buf)),
            RealWidth::F64 => endian.read_f64(buf),
        }
    }
}

/// On-disk width of particle identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdWidth {
    #[default]
    I32,
    I64,
}

impl IdWidth {
    pub(crate) fn size(self) -> usize {
        match self {
            IdWidth::I32 => 4,
            IdWidth::I64 => 8,
        }
    }

    pub(crate) fn read(self, endian: Endian, buf: &[u8]) -> i64 {
        match self {
            IdWidth::I32 => i64::from(endian.read_i32(buf)),
            IdWidth::I64 => endian.read_i64(buf),
        }
    }
}

/// Reserved padding that extends the classic header record to 256 bytes.
///
/// The original format keeps a redshift field plus a run of simulation
/// flags after the three fields we decode; their meaning varies by
/// revision and the reader treats them as opaque.
pub const CLASSIC_HEADER_PAD: usize = 176;

/// Per-file format parameters. This is a description of the file variant,
/// not a behavioral switch: the decode path is identical for every
/// combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    pub endian: Endian,
    pub real_width: RealWidth,
    pub id_width: IdWidth,
    /// Number of reserved bytes after the known header fields. The header
    /// record must be exactly this much longer than the decoded prefix.
    pub header_pad: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            endian: Endian::Little,
            real_width: RealWidth::F32,
            id_width: IdWidth::I32,
            header_pad: CLASSIC_HEADER_PAD,
        }
    }
}
