use std::path::Path;

use anyhow::{ensure, Context};
use tracing::{debug, info, warn};

use crate::batch::{check_warnings, run_batch, BatchConfig};
use crate::cli::{delimiter_byte, unescape_separator, Cli};
use crate::core::genome::GenomeBuild;
use crate::table::{write_spdi_column, VariantTable};

/// Execute the conversion pipeline end to end.
///
/// # Errors
///
/// Returns an error on any parsing, I/O, or subprocess failure; the
/// augmented output file is left on disk if it was already written.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    ensure!(
        cli.input_file.exists(),
        "Input file does not exist: {}",
        cli.input_file.display()
    );

    let column_delimiter = delimiter_byte(&cli.column_separator)?;
    let string_separator = unescape_separator(&cli.string_separator);

    let build = match &cli.genome_build {
        Some(path) => GenomeBuild::from_json_file(path)
            .with_context(|| format!("Failed to load genome build from {}", path.display()))?,
        None => GenomeBuild::grch38(),
    };
    debug!(chromosomes = build.len(), "genome build loaded");

    let mut table = VariantTable::read(&cli.input_file, column_delimiter)
        .with_context(|| format!("Failed to read {}", cli.input_file.display()))?;
    table.augment(&cli.column_name, &string_separator, cli.indices, &build)?;
    table.write_csv(&cli.output_file)?;
    info!(
        rows = table.rows.len(),
        output = %cli.output_file.display(),
        "wrote augmented table"
    );

    if cli.call_spdi_batch {
        let spdi_values = table.spdi_values()?;
        write_spdi_column(&spdi_values, &cli.spdi_batch_processing_output)?;

        let config = BatchConfig {
            script: cli.spdi_batch_path.clone(),
            processing_file: cli.spdi_batch_processing_output.clone(),
            output_file: cli.spdi_batch_output.clone(),
            ignore_exit_status: cli.ignore_batch_exit_status,
        };
        run_batch(&config)?;
        info!("spdi batch script was called, checking output");

        if check_warnings(&cli.spdi_batch_output)? {
            info!("no warnings detected in batch output");
        }

        // Fire-and-forget cleanup, runs whether or not warnings were found
        info!("removing temporary files");
        remove_temp_file(&cli.spdi_batch_output);
        remove_temp_file(&cli.spdi_batch_processing_output);
    }

    Ok(())
}

fn remove_temp_file(path: &Path) {
    if let Err(error) = std::fs::remove_file(path) {
        warn!(path = %path.display(), %error, "failed to remove temporary file");
    }
}
