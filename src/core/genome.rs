use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenomeError {
    #[error("Unknown chromosome label: '{label}' (expected 1-22, X, or Y)")]
    UnknownChromosome { label: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid genome build file: {0}")]
    InvalidBuildFile(#[from] serde_json::Error),
}

/// Mapping from chromosome label to versioned RefSeq accession.
///
/// The embedded table is GRCh38 primary chromosomes only. Lookup is exact:
/// no case folding, no `chr` prefix stripping, no contigs or scaffolds.
/// Alternate builds can be loaded from a JSON object of `label -> accession`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeBuild {
    accessions: BTreeMap<String, String>,
}

/// GRCh38 chromosome accessions (NC_ RefSeq identifiers).
const GRCH38_ACCESSIONS: [(&str, &str); 24] = [
    ("1", "NC_000001.11"),
    ("2", "NC_000002.12"),
    ("3", "NC_000003.12"),
    ("4", "NC_000004.12"),
    ("5", "NC_000005.10"),
    ("6", "NC_000006.12"),
    ("7", "NC_000007.14"),
    ("8", "NC_000008.11"),
    ("9", "NC_000009.12"),
    ("10", "NC_000010.11"),
    ("11", "NC_000011.10"),
    ("12", "NC_000012.12"),
    ("13", "NC_000013.11"),
    ("14", "NC_000014.9"),
    ("15", "NC_000015.10"),
    ("16", "NC_000016.10"),
    ("17", "NC_000017.11"),
    ("18", "NC_000018.10"),
    ("19", "NC_000019.10"),
    ("20", "NC_000020.11"),
    ("21", "NC_000021.9"),
    ("22", "NC_000022.11"),
    ("X", "NC_000023.11"),
    ("Y", "NC_000024.10"),
];

impl GenomeBuild {
    /// The embedded GRCh38 build (24 primary chromosomes).
    #[must_use]
    pub fn grch38() -> Self {
        let accessions = GRCH38_ACCESSIONS
            .iter()
            .map(|(label, accession)| ((*label).to_string(), (*accession).to_string()))
            .collect();
        Self { accessions }
    }

    /// Load an alternate build from a JSON object of `label -> accession`.
    ///
    /// # Errors
    ///
    /// Returns `GenomeError::Io` if the file cannot be read or
    /// `GenomeError::InvalidBuildFile` if it is not a string-to-string object.
    pub fn from_json_file(path: &Path) -> Result<Self, GenomeError> {
        let content = std::fs::read_to_string(path)?;
        let accessions: BTreeMap<String, String> = serde_json::from_str(&content)?;
        Ok(Self { accessions })
    }

    /// Resolve a chromosome label to its accession.
    ///
    /// # Errors
    ///
    /// Returns `GenomeError::UnknownChromosome` for any label not in the build.
    pub fn accession(&self, label: &str) -> Result<&str, GenomeError> {
        self.accessions
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| GenomeError::UnknownChromosome {
                label: label.to_string(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accessions.is_empty()
    }
}
