//! Zip entry extraction and dispatch.
//!
//! The extractor walks archive entries in on-disk order, skips metadata
//! entries and directory markers, and fully materializes each matching
//! entry's bytes before handing them to the caller.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use log::debug;

use crate::EntryData;
use crate::ExtractConfig;
use crate::ExtractError;
use crate::Result;
use crate::copy::read_to_vec;

/// Streams entries out of a zip archive fixture.
///
/// The byte source is injected by the caller: any `Read + Seek`
/// implementation works, most commonly a `Cursor<Vec<u8>>` in unit tests or
/// a buffered file via [`ZipExtractor::open`]. The source is consumed
/// together with the extractor; dropping the extractor releases it on every
/// exit path.
///
/// # Examples
///
/// ```
/// use fixtract_core::ZipExtractor;
/// use fixtract_core::test_utils::ZipFixtureBuilder;
/// use std::io::Cursor;
///
/// # fn main() -> fixtract_core::Result<()> {
/// let data = ZipFixtureBuilder::new()
///     .add_file("notes.txt", b"hello")
///     .build();
///
/// let mut extractor = ZipExtractor::new(Cursor::new(data))?;
/// let entry = extractor.extract_first(".txt")?.expect("entry present");
/// assert_eq!(entry.bytes(), b"hello");
/// # Ok(())
/// # }
/// ```
pub struct ZipExtractor<R> {
    archive: zip::ZipArchive<R>,
    config: ExtractConfig,
}

impl ZipExtractor<BufReader<File>> {
    /// Opens an archive fixture from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a valid zip
    /// container.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> ZipExtractor<R> {
    /// Wraps a byte source with the default [`ExtractConfig`].
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::InvalidArchive` if the container is malformed
    /// (bad header, truncated central directory), or `ExtractError::Io` if
    /// the source cannot be read.
    pub fn new(reader: R) -> Result<Self> {
        Self::with_config(reader, ExtractConfig::default())
    }

    /// Wraps a byte source with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ZipExtractor::new`].
    pub fn with_config(reader: R, config: ExtractConfig) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader)
            .map_err(|e| ExtractError::from_zip(e, "failed to open zip archive"))?;
        Ok(Self { archive, config })
    }

    /// Lists the entry names visible to callers, in archive order.
    ///
    /// Ignored-prefix entries and directory markers are filtered out, the
    /// same way the extraction operations filter them.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry header cannot be read.
    pub fn entry_names(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for index in 0..self.archive.len() {
            let entry = self
                .archive
                .by_index_raw(index)
                .map_err(|e| ExtractError::from_zip(e, "failed to read zip entry"))?;
            if entry.is_dir() || self.config.is_name_ignored(entry.name()) {
                continue;
            }
            names.push(entry.name().to_string());
        }
        Ok(names)
    }

    /// Extracts the first entry whose name ends with `suffix`.
    ///
    /// Suffix matching is case-sensitive. Returns `Ok(None)` when no entry
    /// matches; absence is an expected outcome for callers to assert on,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry cannot be read or decompressed, or if a
    /// matching entry exceeds the configured size quota.
    pub fn extract_first(&mut self, suffix: &str) -> Result<Option<EntryData>> {
        for index in 0..self.archive.len() {
            if let Some(entry) = self.read_matching(index, suffix)? {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }

    /// Extracts every entry whose name ends with `suffix`, in archive order.
    ///
    /// Returns an empty vector when no entry matches.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ZipExtractor::extract_first`].
    pub fn extract_all(&mut self, suffix: &str) -> Result<Vec<EntryData>> {
        let mut entries = Vec::new();
        self.for_each_matching(suffix, |entry| {
            entries.push(entry);
            Ok(())
        })?;
        Ok(entries)
    }

    /// Invokes `consumer` on every entry whose name ends with `suffix`,
    /// continuing iteration after each match.
    ///
    /// Returns the number of entries dispatched. A consumer error aborts
    /// iteration and propagates to the caller unchanged.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ZipExtractor::extract_first`], plus whatever the
    /// consumer returns.
    pub fn for_each_matching<F>(&mut self, suffix: &str, mut consumer: F) -> Result<usize>
    where
        F: FnMut(EntryData) -> Result<()>,
    {
        let mut dispatched = 0;
        for index in 0..self.archive.len() {
            if let Some(entry) = self.read_matching(index, suffix)? {
                consumer(entry)?;
                dispatched += 1;
            }
        }
        Ok(dispatched)
    }

    /// Reads the entry at `index` if it matches `suffix` and is not
    /// filtered. Non-matching entries are skipped without decompressing
    /// their content.
    fn read_matching(&mut self, index: usize, suffix: &str) -> Result<Option<EntryData>> {
        let name = {
            let entry = self
                .archive
                .by_index_raw(index)
                .map_err(|e| ExtractError::from_zip(e, "failed to read zip entry"))?;
            if entry.is_dir()
                || self.config.is_name_ignored(entry.name())
                || !entry.name().ends_with(suffix)
            {
                return Ok(None);
            }
            entry.name().to_string()
        };

        debug!("reading archive entry: {name}");

        let mut entry = self
            .archive
            .by_index(index)
            .map_err(|e| ExtractError::from_zip(e, "failed to decompress zip entry"))?;
        let bytes = read_to_vec(
            &mut entry,
            self.config.chunk_size,
            self.config.max_entry_size,
            &name,
        )?;

        Ok(Some(EntryData::new(name, bytes)))
    }
}
