//! Transaction frame decoding
//!
//! One frame is one addressed file holding a batch of change records for
//! one client at one sequence index. On disk: a JSON header line declaring
//! content byte length (`s`), content checksum (`c`, base64url-unpadded),
//! and a numeric timestamp (`t`); a line-feed byte; then `s` bytes of
//! newline-delimited JSON change-record lines.
//!
//! Decoding is all-or-nothing: a frame failing any integrity check yields
//! no change records.

use crate::digest;
use crate::error::FrameError;
use crate::merge::ChangeRecord;
use serde::Deserialize;

/// Frame header line, structured text before the first line feed
#[derive(Debug, Clone, Deserialize)]
pub struct FrameHeader {
    /// Declared content byte length
    pub s: u64,
    /// Declared content checksum, base64url without padding
    pub c: String,
    /// Frame timestamp
    pub t: f64,
}

/// A decoded transaction frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Change records in their declared order
    pub changes: Vec<ChangeRecord>,
    /// Frame timestamp from the header
    pub timestamp: f64,
}

/// Decode one frame using the production SHA-256 digest
pub fn decode_frame(data: &[u8]) -> Result<Frame, FrameError> {
    decode_frame_with(data, digest::sha256)
}

/// Decode one frame with an injected digest function
///
/// The digest output is compared against the declared checksum after
/// base64url encoding. Injection keeps decoder tests free of any ambient
/// crypto setup.
pub fn decode_frame_with<D>(data: &[u8], digest_fn: D) -> Result<Frame, FrameError>
where
    D: Fn(&[u8]) -> Vec<u8>,
{
    let delimiter = data
        .iter()
        .position(|&b| b == b'\n')
        .ok_or_else(|| FrameError::HeaderMalformed("no header delimiter".to_string()))?;
    let header: FrameHeader = serde_json::from_slice(&data[..delimiter])
        .map_err(|e| FrameError::HeaderMalformed(e.to_string()))?;

    let content = &data[delimiter + 1..];
    if content.len() as u64 != header.s {
        return Err(FrameError::SizeMismatch {
            declared: header.s,
            actual: content.len() as u64,
        });
    }

    let computed = digest::encode_checksum(&digest_fn(content));
    if computed != header.c {
        return Err(FrameError::ChecksumMismatch {
            declared: header.c,
            computed,
        });
    }

    // Valid empty frame
    if header.s == 0 {
        return Ok(Frame {
            changes: Vec::new(),
            timestamp: header.t,
        });
    }

    let text = std::str::from_utf8(content)
        .map_err(|e| FrameError::ContentNotText(e.to_string()))?;

    let mut changes = Vec::new();
    for (line_no, line) in text.split('\n').enumerate() {
        let record =
            ChangeRecord::from_line(line).map_err(|reason| FrameError::ContentMalformed {
                line: line_no,
                reason,
            })?;
        changes.push(record);
    }

    Ok(Frame {
        changes,
        timestamp: header.t,
    })
}
