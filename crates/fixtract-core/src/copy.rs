//! Chunked accumulation of untrusted-length streams.
//!
//! Compressed-archive entry metadata does not reliably report uncompressed
//! size, so entries are drained in fixed-size chunks into a growable buffer
//! until exhausted instead of being preallocated from a declared size.

use std::io::Read;
use std::io::{self};

use crate::ExtractError;
use crate::Result;

/// Reads `reader` to completion in `chunk_size` pieces, accumulating into a
/// growable buffer.
///
/// Zero-length sources yield an empty buffer; sources larger than one chunk
/// are accumulated without truncation. Interrupted reads are retried.
///
/// # Errors
///
/// Returns an error if reading fails, or `ExtractError::EntryTooLarge`
/// (tagged with `entry_name`) once the accumulated size passes `limit`.
///
/// # Examples
///
/// ```
/// use fixtract_core::copy::read_to_vec;
/// use std::io::Cursor;
///
/// # fn main() -> fixtract_core::Result<()> {
/// let mut source = Cursor::new(vec![0x42u8; 5000]);
/// let bytes = read_to_vec(&mut source, 1024, u64::MAX, "blob.bin")?;
/// assert_eq!(bytes.len(), 5000);
/// # Ok(())
/// # }
/// ```
pub fn read_to_vec<R: Read>(
    reader: &mut R,
    chunk_size: usize,
    limit: u64,
    entry_name: &str,
) -> Result<Vec<u8>> {
    let mut sink = Vec::new();
    let mut chunk = vec![0u8; chunk_size.max(1)];

    loop {
        let bytes_read = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ExtractError::Io(e)),
        };

        let total = (sink.len() as u64)
            .checked_add(bytes_read as u64)
            .ok_or_else(|| ExtractError::EntryTooLarge {
                name: entry_name.to_string(),
                limit,
            })?;
        if total > limit {
            return Err(ExtractError::EntryTooLarge {
                name: entry_name.to_string(),
                limit,
            });
        }

        sink.extend_from_slice(&chunk[..bytes_read]);
    }

    Ok(sink)
}
