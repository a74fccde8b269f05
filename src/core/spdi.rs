use serde::{Deserialize, Serialize};

/// A SPDI variant identifier: Sequence, Position, Deletion, Insertion.
///
/// Rendered as `accession:position:deletion:insertion`, e.g.
/// `NC_000001.11:25253604:G:A`. The deletion/insertion fields carry the
/// reference and alternate alleles of the source variant.
///
/// The position is stored exactly as parsed from the input. SPDI positions
/// are 0-based interbase offsets, so callers feeding 1-based coordinates
/// must adjust before constructing a `Spdi`; this type does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spdi {
    /// Versioned RefSeq accession (e.g. `NC_000001.11`)
    pub accession: String,

    /// Sequence offset, emitted verbatim
    pub position: i64,

    /// Deleted sequence (the reference allele)
    pub deletion: String,

    /// Inserted sequence (the alternate allele)
    pub insertion: String,
}

impl Spdi {
    pub fn new(
        accession: impl Into<String>,
        position: i64,
        deletion: impl Into<String>,
        insertion: impl Into<String>,
    ) -> Self {
        Self {
            accession: accession.into(),
            position,
            deletion: deletion.into(),
            insertion: insertion.into(),
        }
    }
}

impl std::fmt::Display for Spdi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.accession, self.position, self.deletion, self.insertion
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let spdi = Spdi::new("NC_000001.11", 25_253_604, "G", "A");
        assert_eq!(spdi.to_string(), "NC_000001.11:25253604:G:A");
    }

    #[test]
    fn test_display_multi_base_alleles() {
        let spdi = Spdi::new("NC_000017.11", 43_092_900, "TAC", "T");
        assert_eq!(spdi.to_string(), "NC_000017.11:43092900:TAC:T");
    }
}
