//! Record framing for snapshot files.
//!
//! Every block in a snapshot is stored as
//!
//! ```text
//! Int32(L) Bytes[L] Int32(L)
//! ```
//!
//! with the same length on both sides. The trailing field exists only as a
//! consistency check; a mismatch means the stream is corrupt and the whole
//! file is rejected.

use std::io::Read;

use tracing::trace;

use crate::config::Endian;
use crate::error::GsrError;

/// Width in bytes of the two length fields framing every record.
pub const LENGTH_FIELD: usize = 4;

/// Read one length-delimited record from `reader`, returning its payload.
///
/// Advances the stream past the trailing length field. Fails with
/// [`GsrError::Format`] if the stream ends before the payload or the
/// trailing field is complete, or if the two length fields disagree.
pub fn read_record<R: Read>(reader: &mut R, endian: Endian) -> Result<Vec<u8>, GsrError> {
    let lead = read_length(reader, endian, "record length prefix")?;
    if lead < 0 {
        return Err(GsrError::Format(format!("negative record length {lead}")));
    }
    let len = lead as usize;

    // Grow with the actual data instead of trusting the prefix for the
    // allocation size; a truncated file then fails cheaply.
    let mut body = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut body)?;
    if body.len() != len {
        return Err(GsrError::Format(format!(
            "record truncated: expected {len} payload bytes, got {}",
            body.len()
        )));
    }

    let tail = read_length(reader, endian, "record length suffix")?;
    if tail != lead {
        return Err(GsrError::Format(format!(
            "record framing mismatch: length prefix {lead} but suffix {tail}"
        )));
    }

    trace!(len, "read record");
    Ok(body)
}

fn read_length<R: Read>(reader: &mut R, endian: Endian, what: &str) -> Result<i32, GsrError> {
    let mut buf = [0u8; LENGTH_FIELD];
    reader.read_exact(&mut buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            GsrError::Format(format!("stream ended before {what}"))
        } else {
            GsrError::Io(e)
        }
    })?;
    Ok(endian.read_i32(&buf))
}
