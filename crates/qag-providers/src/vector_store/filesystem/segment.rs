//! Segment file framing
//!
//! ```text
//! ┌──────────────┬─────────────────────────────┬──────────────────────┐
//! │ u32 LE       │ JSON header                 │ dimensions × f32 LE  │
//! │ header bytes │ {"id", "text", "metadata"}  │ vector               │
//! └──────────────┴─────────────────────────────┴──────────────────────┘
//! ```

use crate::constants::FILESYSTEM_BYTES_PER_DIMENSION;
use crate::vector_store::scan::StoredRecord;
use qag_domain::error::{Error, Result};
use qag_domain::value_objects::{ChunkMetadata, DistanceMetric};
use serde::{Deserialize, Serialize};

const LENGTH_PREFIX_BYTES: usize = 4;

/// Store-wide facts fixed at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct Manifest {
    pub version: u32,
    pub dimensions: usize,
    pub metric: DistanceMetric,
}

#[derive(Serialize)]
struct FrameHeaderRef<'a> {
    id: &'a str,
    text: &'a str,
    metadata: &'a ChunkMetadata,
}

#[derive(Deserialize)]
struct FrameHeader {
    id: String,
    text: String,
    metadata: ChunkMetadata,
}

/// Append the frame of one record to `out`
pub(super) fn encode_frame(record: &StoredRecord, out: &mut Vec<u8>) -> Result<()> {
    let header = serde_json::to_vec(&FrameHeaderRef {
        id: &record.id,
        text: &record.text,
        metadata: &record.metadata,
    })?;
    let header_len = u32::try_from(header.len())
        .map_err(|_| Error::store_write(format!("record '{}' header too large", record.id)))?;

    out.reserve(LENGTH_PREFIX_BYTES + header.len() + record.vector.len() * FILESYSTEM_BYTES_PER_DIMENSION);
    out.extend_from_slice(&header_len.to_le_bytes());
    out.extend_from_slice(&header);
    for value in &record.vector {
        out.extend_from_slice(&value.to_le_bytes());
    }
    Ok(())
}

/// Encode every record into one buffer
pub(super) fn encode_all<'a>(records: impl IntoIterator<Item = &'a StoredRecord>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for record in records {
        encode_frame(record, &mut out)?;
    }
    Ok(out)
}

/// Decoded segment contents
pub(super) struct DecodedSegment {
    pub records: Vec<StoredRecord>,
    /// Length of the prefix made of complete frames
    pub valid_len: usize,
}

/// Decode complete frames, stopping at a trailing partial frame
///
/// A complete frame whose header is not valid JSON is corruption, not a
/// torn write, and is reported as an error.
pub(super) fn decode_frames(bytes: &[u8], dimensions: usize) -> Result<DecodedSegment> {
    let vector_bytes = dimensions * FILESYSTEM_BYTES_PER_DIMENSION;
    let mut records = Vec::new();
    let mut offset = 0;

    while bytes.len() - offset >= LENGTH_PREFIX_BYTES {
        let mut prefix = [0_u8; LENGTH_PREFIX_BYTES];
        prefix.copy_from_slice(&bytes[offset..offset + LENGTH_PREFIX_BYTES]);
        let header_len = u32::from_le_bytes(prefix) as usize;

        let header_start = offset + LENGTH_PREFIX_BYTES;
        let vector_start = header_start + header_len;
        let frame_end = vector_start + vector_bytes;
        if frame_end > bytes.len() {
            break;
        }

        let header: FrameHeader = serde_json::from_slice(&bytes[header_start..vector_start])
            .map_err(|e| {
                Error::store_query(format!("corrupt segment frame at offset {offset}: {e}"))
            })?;
        let vector = bytes[vector_start..frame_end]
            .chunks_exact(FILESYSTEM_BYTES_PER_DIMENSION)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();

        records.push(StoredRecord {
            id: header.id,
            text: header.text,
            vector,
            metadata: header.metadata,
        });
        offset = frame_end;
    }

    Ok(DecodedSegment {
        records,
        valid_len: offset,
    })
}
