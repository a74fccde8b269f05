use std::path::Path;

use csv::ReaderBuilder;

use crate::batch::BatchError;

/// Marker substring the canonicalization script emits instead of a valid
/// identifier when an input SPDI is problematic.
const WARNING_MARKER: &str = "WARNING";

/// Where users can read up on the batch script and its warning output.
const BATCH_DOCS_URL: &str = "https://github.com/mikelove/igvf_spdi_demo";

/// Scan the captured batch output for warning rows.
///
/// The file is read as headerless tab-separated `given_SPDI`,
/// `canonical_SPDI` pairs. Rows whose canonical value contains `WARNING`
/// (case-sensitive substring) are printed together with a documentation
/// pointer. Returns `Ok(true)` when the output is clean, `Ok(false)` when
/// warnings were found; warnings are reported, not fatal.
///
/// # Errors
///
/// Returns an error when the file is missing, empty, or any row does not
/// have exactly two columns.
pub fn check_warnings(path: &Path) -> Result<bool, BatchError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut warnings = Vec::new();
    let mut rows = 0usize;
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        rows += 1;
        if record.len() != 2 {
            return Err(BatchError::MalformedOutput {
                row: i + 1,
                found: record.len(),
            });
        }
        let given = &record[0];
        let canonical = &record[1];
        if canonical.contains(WARNING_MARKER) {
            warnings.push((given.to_string(), canonical.to_string()));
        }
    }

    if rows == 0 {
        return Err(BatchError::EmptyOutput(path.to_path_buf()));
    }

    if warnings.is_empty() {
        return Ok(true);
    }

    println!("Warnings in SPDI batch processing:");
    for (given, canonical) in &warnings {
        println!("{given}\t{canonical}");
    }
    println!("Please check your input, additional information can be found here: {BATCH_DOCS_URL}");
    Ok(false)
}
