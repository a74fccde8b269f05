//! Batch canonicalization: pipes the SPDI column through the external
//! `spdi_batch.py` script and a filter process, then scans the captured
//! output for warnings.

pub mod check;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, warn};

pub use check::check_warnings;

/// Substring marking usable canonicalization output lines; everything else
/// (progress chatter, blank lines) is dropped by the filter process.
const RESULT_MARKER: &str = "NC_";

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Batch script exited with {status}")]
    GeneratorFailed { status: ExitStatus },

    #[error("Output filter exited with {status} (no canonical results?)")]
    FilterFailed { status: ExitStatus },

    #[error("Batch output error: {0}")]
    Output(#[from] csv::Error),

    #[error("Batch output file '{0}' is empty")]
    EmptyOutput(PathBuf),

    #[error("Batch output line {row}: expected 2 tab-separated columns, got {found}")]
    MalformedOutput { row: usize, found: usize },
}

/// Configuration for one batch canonicalization run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Path to the `spdi_batch.py` script, invoked as
    /// `python <script> -i <processing_file> -t SPDI`
    pub script: PathBuf,

    /// File holding the SPDI column to canonicalize
    pub processing_file: PathBuf,

    /// Destination for the filtered canonicalization output
    pub output_file: PathBuf,

    /// When set, non-zero subprocess exits are logged and tolerated instead
    /// of surfaced as errors (the historical behavior of this pipeline).
    pub ignore_exit_status: bool,
}

/// Run the batch script and capture its filtered output.
///
/// Spawns `python <script> -i <processing_file> -t SPDI` and pipes its
/// stdout straight into a `grep NC_` filter whose stdout is redirected to
/// `output_file`. The pipe fd is moved into the filter's spawn, so the
/// parent keeps no copy and the generator cannot deadlock on a full pipe.
/// Lines reach the output file incrementally and in generator order; the
/// orchestrator itself buffers nothing. Blocks until both children exit;
/// no timeout is applied.
///
/// # Errors
///
/// Returns `BatchError::Spawn` if either child cannot be started and, unless
/// `ignore_exit_status` is set, `BatchError::GeneratorFailed` /
/// `BatchError::FilterFailed` for non-zero exits. Note that `grep` exits
/// non-zero when no line matched, so an output with no canonical results
/// surfaces as a filter failure.
pub fn run_batch(config: &BatchConfig) -> Result<(), BatchError> {
    let mut generator = Command::new("python");
    generator
        .arg(&config.script)
        .arg("-i")
        .arg(&config.processing_file)
        .args(["-t", "SPDI"]);

    let mut filter = Command::new("grep");
    filter.arg(RESULT_MARKER);

    debug!(
        script = %config.script.display(),
        output = %config.output_file.display(),
        "running batch canonicalization pipeline"
    );

    let (generator_status, filter_status) =
        run_pipeline(generator, filter, &config.output_file)?;

    if config.ignore_exit_status {
        if !generator_status.success() || !filter_status.success() {
            warn!(
                %generator_status,
                %filter_status,
                "batch pipeline exit status ignored"
            );
        }
        return Ok(());
    }

    if !generator_status.success() {
        return Err(BatchError::GeneratorFailed {
            status: generator_status,
        });
    }
    if !filter_status.success() {
        return Err(BatchError::FilterFailed {
            status: filter_status,
        });
    }
    Ok(())
}

/// Spawn `generator | filter > output` and wait for both children.
fn run_pipeline(
    mut generator: Command,
    mut filter: Command,
    output: &Path,
) -> Result<(ExitStatus, ExitStatus), BatchError> {
    let output_file = File::create(output)?;

    let mut generator_child = generator
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|source| BatchError::Spawn {
            command: command_name(&generator),
            source,
        })?;

    // Moving the stdout handle into the filter's stdin drops the parent's
    // only copy of the write end once the filter is spawned.
    let generator_stdout = generator_child
        .stdout
        .take()
        .ok_or_else(|| BatchError::Io(std::io::Error::other("generator stdout not captured")))?;

    let filter_result = filter
        .stdin(Stdio::from(generator_stdout))
        .stdout(Stdio::from(output_file))
        .spawn();

    let mut filter_child = match filter_result {
        Ok(child) => child,
        Err(source) => {
            // Don't leave the generator running if the filter never started
            let _ = generator_child.kill();
            let _ = generator_child.wait();
            return Err(BatchError::Spawn {
                command: command_name(&filter),
                source,
            });
        }
    };

    let generator_status = generator_child.wait()?;
    let filter_status = filter_child.wait()?;
    Ok((generator_status, filter_status))
}

fn command_name(command: &Command) -> String {
    command.get_program().to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_filters_and_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");

        let mut generator = Command::new("printf");
        generator.arg("NC_1 first\\nskip me\\nNC_2 second\\n");
        let mut filter = Command::new("grep");
        filter.arg(RESULT_MARKER);

        let (gen_status, filter_status) =
            run_pipeline(generator, filter, &output).unwrap();
        assert!(gen_status.success());
        assert!(filter_status.success());

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content, "NC_1 first\nNC_2 second\n");
    }

    #[test]
    fn test_pipeline_reports_filter_miss() {
        // grep exits 1 when nothing matches
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");

        let mut generator = Command::new("printf");
        generator.arg("nothing relevant\\n");
        let mut filter = Command::new("grep");
        filter.arg(RESULT_MARKER);

        let (gen_status, filter_status) =
            run_pipeline(generator, filter, &output).unwrap();
        assert!(gen_status.success());
        assert!(!filter_status.success());
    }

    fn python_available() -> bool {
        Command::new("python")
            .arg("--version")
            .output()
            .is_ok_and(|out| out.status.success())
    }

    #[test]
    fn test_run_batch_missing_script_fails() {
        // python exits non-zero on a nonexistent script; surfaced by default
        if !python_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig {
            script: dir.path().join("no_such_script.py"),
            processing_file: dir.path().join("spdi.txt"),
            output_file: dir.path().join("out.txt"),
            ignore_exit_status: false,
        };
        assert!(run_batch(&config).is_err());
    }

    #[test]
    fn test_run_batch_ignore_exit_status() {
        if !python_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig {
            script: dir.path().join("no_such_script.py"),
            processing_file: dir.path().join("spdi.txt"),
            output_file: dir.path().join("out.txt"),
            ignore_exit_status: true,
        };
        assert!(run_batch(&config).is_ok());
    }
}
