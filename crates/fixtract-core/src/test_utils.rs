//! Test utilities for building in-memory fixture archives.
//!
//! # Panics
//!
//! All builders in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Builder for in-memory zip fixtures with various entry types.
///
/// # Examples
///
/// ```
/// use fixtract_core::test_utils::ZipFixtureBuilder;
///
/// let data = ZipFixtureBuilder::new()
///     .add_file("data.csv", b"a,b\n1,2\n")
///     .add_directory("__MACOSX/")
///     .build();
/// assert!(!data.is_empty());
/// ```
pub struct ZipFixtureBuilder {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipFixtureBuilder {
    /// Creates a new fixture builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds an uncompressed file entry.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a deflate-compressed file entry.
    #[must_use]
    pub fn add_deflated_file(mut self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a directory marker entry.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    /// Builds and returns the archive bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

impl Default for ZipFixtureBuilder {
    fn default() -> Self {
        Self::new()
    }
}
