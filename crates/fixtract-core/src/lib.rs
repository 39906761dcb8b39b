//! Zip fixture extraction for parser-validation test suites.
//!
//! `fixtract-core` streams entries out of a zip archive fixture, fully
//! materializes each matching entry into an in-memory buffer, and hands the
//! buffer to the caller — typically a test that feeds it into an external
//! parser (CSV, spreadsheet, PDF, JSON). Parsers downstream are not required
//! to support incremental input, so buffers are always complete before they
//! are surfaced.
//!
//! Metadata entries produced by archiving tools (the `__MACOSX` resource-fork
//! prefix by default) are never surfaced to callers.
//!
//! # Examples
//!
//! ```no_run
//! use fixtract_core::ZipExtractor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut extractor = ZipExtractor::open("tests/fixtures/archive.zip")?;
//! if let Some(entry) = extractor.extract_first(".csv")? {
//!     println!("{}: {} bytes", entry.name(), entry.len());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod copy;
pub mod entry;
pub mod error;
pub mod extract;
pub mod test_utils;

// Re-export main API types
pub use config::ExtractConfig;
pub use entry::EntryData;
pub use error::ExtractError;
pub use error::Result;
pub use extract::ZipExtractor;
