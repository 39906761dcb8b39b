//! Extraction configuration.

/// Entry-name prefix written by the macOS Archive Utility for resource-fork
/// metadata. Entries under it are never meaningful application content.
const MACOS_METADATA_PREFIX: &str = "__MACOSX";

/// Configuration for fixture extraction.
///
/// # Examples
///
/// ```
/// use fixtract_core::ExtractConfig;
///
/// // Use the defaults
/// let config = ExtractConfig::default();
///
/// // Customize for specific needs
/// let custom = ExtractConfig {
///     max_entry_size: 4 * 1024 * 1024, // 4 MiB
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Size in bytes of the fixed read buffer used to drain an entry.
    ///
    /// Entry metadata in compressed containers does not reliably report the
    /// uncompressed size, so entries are accumulated chunk by chunk into a
    /// growable buffer rather than preallocated.
    pub chunk_size: usize,

    /// Entry-name prefixes that are never surfaced to callers.
    pub ignored_prefixes: Vec<String>,

    /// Maximum decompressed size for a single entry in bytes.
    pub max_entry_size: u64,
}

impl Default for ExtractConfig {
    /// Creates an `ExtractConfig` with default settings.
    ///
    /// Default values:
    /// - `chunk_size`: 1 KiB
    /// - `ignored_prefixes`: `["__MACOSX"]`
    /// - `max_entry_size`: 64 MiB
    fn default() -> Self {
        Self {
            chunk_size: 1024,
            ignored_prefixes: vec![MACOS_METADATA_PREFIX.to_string()],
            max_entry_size: 64 * 1024 * 1024,
        }
    }
}

impl ExtractConfig {
    /// Returns `true` if the entry name matches an ignored prefix.
    ///
    /// Matching is case-sensitive, as archive entry names are.
    #[must_use]
    pub fn is_name_ignored(&self, name: &str) -> bool {
        self.ignored_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
    }
}
