//! Delimited variant table reading, SPDI augmentation, and CSV writing.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use thiserror::Error;

use crate::core::genome::GenomeBuild;
use crate::parsing::variant::{spdi_from_composite, FieldIndices, VariantError};

/// Name of the column added by augmentation.
pub const SPDI_COLUMN: &str = "SPDI";

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{0}' not found in input table")]
    MissingColumn(String),

    #[error("Row {row}: {source}")]
    Row {
        /// 1-based data row number (header excluded)
        row: usize,
        source: VariantError,
    },
}

/// An in-memory delimited table: a header row plus string cells.
///
/// Column order and row order are preserved from the input file; extra
/// columns pass through untouched.
#[derive(Debug, Clone)]
pub struct VariantTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl VariantTable {
    /// Read a delimited table with a header row.
    ///
    /// # Errors
    ///
    /// Returns `TableError::Csv` if the file cannot be read or has ragged
    /// rows.
    pub fn read(path: &Path, delimiter: u8) -> Result<Self, TableError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .from_path(path)?;

        let headers = reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    /// Append a SPDI column derived from the composite strings in
    /// `column_name`.
    ///
    /// The apply is row-independent but all-or-nothing: the first malformed
    /// row aborts the whole augmentation with its row number in the error.
    ///
    /// # Errors
    ///
    /// Returns `TableError::MissingColumn` when `column_name` is absent and
    /// `TableError::Row` when any composite string fails to convert.
    pub fn augment(
        &mut self,
        column_name: &str,
        string_separator: &str,
        indices: FieldIndices,
        build: &GenomeBuild,
    ) -> Result<(), TableError> {
        let column = self.column_index(column_name)?;

        let mut spdi_values = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let raw = row.get(column).map(String::as_str).unwrap_or_default();
            let spdi = spdi_from_composite(raw, string_separator, indices, build)
                .map_err(|source| TableError::Row { row: i + 1, source })?;
            spdi_values.push(spdi.to_string());
        }

        self.headers.push(SPDI_COLUMN.to_string());
        for (row, spdi) in self.rows.iter_mut().zip(spdi_values) {
            row.push(spdi);
        }
        Ok(())
    }

    /// Values of the SPDI column, in row order.
    ///
    /// # Errors
    ///
    /// Returns `TableError::MissingColumn` if the table has not been
    /// augmented.
    pub fn spdi_values(&self) -> Result<Vec<String>, TableError> {
        let column = self.column_index(SPDI_COLUMN)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(column).cloned().unwrap_or_default())
            .collect())
    }

    /// Write the table as comma-separated CSV with a header row and no
    /// index column, regardless of the input delimiter.
    ///
    /// # Errors
    ///
    /// Returns `TableError::Csv` on write failure.
    pub fn write_csv(&self, path: &Path) -> Result<(), TableError> {
        let mut writer = WriterBuilder::new().from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush().map_err(TableError::Io)?;
        Ok(())
    }
}

/// Write the SPDI column alone to `path`: a `SPDI` header line followed by
/// one identifier per row. This is the input file for batch processing.
///
/// # Errors
///
/// Returns `TableError::Csv` on write failure.
pub fn write_spdi_column(values: &[String], path: &Path) -> Result<(), TableError> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record([SPDI_COLUMN])?;
    for value in values {
        writer.write_record([value.as_str()])?;
    }
    writer.flush().map_err(TableError::Io)?;
    Ok(())
}
