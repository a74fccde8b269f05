//! Core data types for genome builds and SPDI identifiers.
//!
//! - [`genome`]: chromosome label to RefSeq accession resolution
//! - [`spdi`]: the SPDI identifier type

pub mod genome;
pub mod spdi;

pub use genome::{GenomeBuild, GenomeError};
pub use spdi::Spdi;
