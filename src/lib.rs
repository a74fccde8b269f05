//! # spdi-list
//!
//! A tool for converting user-supplied variant identifier strings into
//! SPDI identifiers.
//!
//! Variant call sheets often bundle chromosome, position, reference, and
//! alternate allele into a single ad-hoc string like `1_25253604_hg38_G_A`.
//! Downstream tooling (ClinVar, dbSNP, the NCBI Variation Services) wants
//! SPDI: `Sequence:Position:Deletion:Insertion` with a versioned RefSeq
//! accession, e.g. `NC_000001.11:25253604:G:A`.
//!
//! `spdi-list` reads a delimited table, derives a SPDI column from a chosen
//! composite-string column, writes the augmented table, and can hand the
//! SPDI column to the external `spdi_batch.py` canonicalization script,
//! scanning its output for warnings.
//!
//! Positions are passed through exactly as found in the input. SPDI
//! coordinates are 0-based; no 1-based adjustment is applied (see the
//! note on [`parsing::variant::spdi_from_composite`]).
//!
//! ## Example
//!
//! ```rust
//! use spdi_list::{spdi_from_composite, FieldIndices, GenomeBuild};
//!
//! let build = GenomeBuild::grch38();
//! let spdi = spdi_from_composite(
//!     "1_25253604_hg38_G_A",
//!     "_",
//!     FieldIndices::default(),
//!     &build,
//! )
//! .unwrap();
//! assert_eq!(spdi.to_string(), "NC_000001.11:25253604:G:A");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: genome builds and the SPDI identifier type
//! - [`parsing`]: composite variant string parsing
//! - [`table`]: delimited table reading, augmentation, and CSV writing
//! - [`batch`]: batch canonicalization pipeline and warning checking
//! - [`cli`]: command-line interface implementation

pub mod batch;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod table;

// Re-export commonly used types for convenience
pub use batch::{check_warnings, run_batch, BatchConfig, BatchError};
pub use core::genome::{GenomeBuild, GenomeError};
pub use core::spdi::Spdi;
pub use parsing::variant::{spdi_from_composite, FieldIndices, VariantError};
pub use table::{write_spdi_column, TableError, VariantTable};
