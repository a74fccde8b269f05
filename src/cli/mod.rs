//! Command-line interface for spdi-list.
//!
//! One command: read a delimited variant table, derive a SPDI column from a
//! composite variant string column, write the augmented table, and
//! optionally pipe the SPDI column through the external batch
//! canonicalization script.
//!
//! ## Usage
//!
//! ```text
//! # Convert, then batch-canonicalize with spdi_batch.py
//! spdi-list --input-file variants.csv --output-file variants_spdi.csv \
//!     --column-separator '\t' --string-separator _ \
//!     --column-name variant_string --indices 0,1,3,4
//!
//! # Conversion only
//! spdi-list --input-file variants.csv --output-file variants_spdi.csv \
//!     --column-name variant_string --call-spdi-batch false
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::parsing::variant::FieldIndices;

pub mod convert;

#[derive(Parser)]
#[command(name = "spdi-list")]
#[command(version)]
#[command(about = "Convert composite variant strings to SPDI identifiers")]
#[command(
    long_about = "spdi-list converts user-supplied variant identifier strings (like '1_25253604_hg38_G_A') into SPDI identifiers, appends them as a column to the input table, and can pipe the result through the spdi_batch.py canonicalization script, reporting any warnings it emits."
)]
pub struct Cli {
    /// Input table (delimited text with a header row)
    #[arg(long, value_name = "FILE")]
    pub input_file: PathBuf,

    /// Destination for the augmented table (comma-separated, no index column)
    #[arg(long, value_name = "FILE")]
    pub output_file: PathBuf,

    /// Character separating the input table's columns ('\t' accepted)
    #[arg(long, default_value = "-")]
    pub column_separator: String,

    /// Separator between the fields (chromosome, position, reference,
    /// alternate) inside the composite variant string
    #[arg(long, default_value = "\t")]
    pub string_separator: String,

    /// Name of the column holding the composite variant string
    #[arg(long)]
    pub column_name: String,

    /// Comma-separated positions of chromosome, position, ref, and alt
    /// within the split composite string
    #[arg(long, default_value = "0,1,3,4")]
    pub indices: FieldIndices,

    /// Canonicalize the SPDI column with spdi_batch.py (expects write
    /// permissions in the current directory)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, value_name = "BOOL")]
    pub call_spdi_batch: bool,

    /// Path to the spdi_batch.py script, invoked as
    /// `python <path> -i <file> -t SPDI`
    #[arg(long, default_value = "spdi_batch.py", value_name = "FILE")]
    pub spdi_batch_path: PathBuf,

    /// Where to write the SPDI column for batch processing
    #[arg(
        long,
        default_value = "test_data/spdi_for_batch_processing.txt",
        value_name = "FILE"
    )]
    pub spdi_batch_processing_output: PathBuf,

    /// Where to capture the batch script's filtered output
    #[arg(long, default_value = "test_data/spdi_batch_output.txt", value_name = "FILE")]
    pub spdi_batch_output: PathBuf,

    /// Tolerate non-zero exits from the batch pipeline instead of failing
    #[arg(long)]
    pub ignore_batch_exit_status: bool,

    /// JSON file mapping chromosome labels to accessions, overriding the
    /// embedded GRCh38 build
    #[arg(long, value_name = "FILE")]
    pub genome_build: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Turn the CLI's `\t` escape into a real tab.
pub(crate) fn unescape_separator(separator: &str) -> String {
    separator.replace("\\t", "\t")
}

/// Resolve a column separator option to the single-byte delimiter the CSV
/// reader needs.
pub(crate) fn delimiter_byte(separator: &str) -> anyhow::Result<u8> {
    let unescaped = unescape_separator(separator);
    match unescaped.as_bytes() {
        [byte] => Ok(*byte),
        _ => anyhow::bail!("column separator must be a single character, got '{separator}'"),
    }
}
