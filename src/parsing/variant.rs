use std::str::FromStr;

use thiserror::Error;

use crate::core::genome::{GenomeBuild, GenomeError};
use crate::core::spdi::Spdi;

#[derive(Error, Debug)]
pub enum VariantError {
    #[error("Not enough fields in variant string '{raw}': expected at least 4, got {found}")]
    NotEnoughFields { raw: String, found: usize },

    #[error("Field index {index} out of range for variant string '{raw}' ({found} fields)")]
    IndexOutOfRange {
        raw: String,
        index: usize,
        found: usize,
    },

    #[error("Invalid position '{value}' in variant string '{raw}': not an integer")]
    InvalidPosition { raw: String, value: String },

    #[error(transparent)]
    Genome(#[from] GenomeError),
}

/// Positions of the chromosome, position, reference, and alternate fields
/// within the split composite string.
///
/// Parsed from the CLI's comma-separated form, e.g. `0,1,3,4` for strings
/// like `1_25253604_hg38_G_A` where field 2 is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIndices {
    pub chrom: usize,
    pub pos: usize,
    pub reference: usize,
    pub alternate: usize,
}

impl Default for FieldIndices {
    fn default() -> Self {
        Self {
            chrom: 0,
            pos: 1,
            reference: 3,
            alternate: 4,
        }
    }
}

impl FromStr for FieldIndices {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: Result<Vec<usize>, _> =
            s.split(',').map(|part| part.trim().parse()).collect();
        let parsed = parsed.map_err(|_| format!("invalid index list '{s}'"))?;
        match parsed.as_slice() {
            &[chrom, pos, reference, alternate] => Ok(Self {
                chrom,
                pos,
                reference,
                alternate,
            }),
            other => Err(format!(
                "expected exactly 4 indices (chrom,pos,ref,alt), got {}",
                other.len()
            )),
        }
    }
}

/// Build a SPDI identifier from a composite variant string.
///
/// Splits `raw` on `separator` and picks the chromosome, position, reference,
/// and alternate fields at the positions given by `indices`. The chromosome
/// label is resolved to an accession through `build`.
///
/// NOTE on coordinates: the position field is passed through verbatim. SPDI
/// positions are 0-based, so a 1-based input position would need a `- 1`
/// here; none is applied, matching the established behavior of this pipeline
/// where inputs are treated as already adjusted. See DESIGN.md.
///
/// # Errors
///
/// Returns `VariantError::NotEnoughFields` when the split yields fewer than
/// 4 fields, `VariantError::IndexOutOfRange` when an index points past the
/// split, `VariantError::InvalidPosition` for a non-integer position field,
/// and propagates `GenomeError` for unknown chromosome labels.
pub fn spdi_from_composite(
    raw: &str,
    separator: &str,
    indices: FieldIndices,
    build: &GenomeBuild,
) -> Result<Spdi, VariantError> {
    let fields: Vec<&str> = raw.split(separator).collect();

    if fields.len() < 4 {
        return Err(VariantError::NotEnoughFields {
            raw: raw.to_string(),
            found: fields.len(),
        });
    }

    let field_at = |index: usize| -> Result<&str, VariantError> {
        fields
            .get(index)
            .copied()
            .ok_or_else(|| VariantError::IndexOutOfRange {
                raw: raw.to_string(),
                index,
                found: fields.len(),
            })
    };

    let chrom = field_at(indices.chrom)?;
    let pos_field = field_at(indices.pos)?;
    let reference = field_at(indices.reference)?;
    let alternate = field_at(indices.alternate)?;

    let position: i64 = pos_field
        .parse()
        .map_err(|_| VariantError::InvalidPosition {
            raw: raw.to_string(),
            value: pos_field.to_string(),
        })?;

    let accession = build.accession(chrom)?;

    Ok(Spdi::new(accession, position, reference, alternate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build() -> GenomeBuild {
        GenomeBuild::grch38()
    }

    #[test]
    fn test_composite_to_spdi() {
        let spdi = spdi_from_composite(
            "1_25253604_hg38_G_A",
            "_",
            FieldIndices::default(),
            &build(),
        )
        .unwrap();
        assert_eq!(spdi.to_string(), "NC_000001.11:25253604:G:A");
    }

    #[test]
    fn test_position_not_adjusted() {
        // The input position is emitted verbatim, no 1-based to 0-based shift
        let spdi =
            spdi_from_composite("X_1000_hg38_C_T", "_", FieldIndices::default(), &build())
                .unwrap();
        assert_eq!(spdi.position, 1000);
    }

    #[test]
    fn test_not_enough_fields() {
        let err = spdi_from_composite("1_25253604_G", "_", FieldIndices::default(), &build())
            .unwrap_err();
        assert!(matches!(
            err,
            VariantError::NotEnoughFields { found: 3, .. }
        ));
    }

    #[test]
    fn test_not_enough_fields_wrong_separator() {
        // Splitting on a separator that never occurs yields one field
        let err = spdi_from_composite(
            "1_25253604_hg38_G_A",
            "-",
            FieldIndices::default(),
            &build(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            VariantError::NotEnoughFields { found: 1, .. }
        ));
    }

    #[test]
    fn test_index_out_of_range() {
        // 4 fields but default indices reach field 4
        let err =
            spdi_from_composite("1_25253604_G_A", "_", FieldIndices::default(), &build())
                .unwrap_err();
        assert!(matches!(err, VariantError::IndexOutOfRange { index: 4, .. }));
    }

    #[test]
    fn test_custom_indices() {
        let indices = FieldIndices {
            chrom: 0,
            pos: 1,
            reference: 2,
            alternate: 3,
        };
        let spdi = spdi_from_composite("17_43092900_TAC_T", "_", indices, &build()).unwrap();
        assert_eq!(spdi.to_string(), "NC_000017.11:43092900:TAC:T");
    }

    #[test]
    fn test_non_numeric_position() {
        let err = spdi_from_composite(
            "1_abc_hg38_G_A",
            "_",
            FieldIndices::default(),
            &build(),
        )
        .unwrap_err();
        assert!(matches!(err, VariantError::InvalidPosition { .. }));
    }

    #[test]
    fn test_unknown_chromosome_propagates() {
        let err = spdi_from_composite(
            "MT_100_hg38_G_A",
            "_",
            FieldIndices::default(),
            &build(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            VariantError::Genome(GenomeError::UnknownChromosome { .. })
        ));
    }

    #[test]
    fn test_spdi_shape() {
        // Valid inputs produce accession:position:ref:alt with NC_ accessions
        for raw in ["1_100_hg38_G_A", "22_5_hg38_AT_A", "Y_123456_hg38_C_G"] {
            let spdi =
                spdi_from_composite(raw, "_", FieldIndices::default(), &build()).unwrap();
            let rendered = spdi.to_string();
            assert!(rendered.starts_with("NC_0000"));
            assert_eq!(rendered.split(':').count(), 4);
        }
    }

    #[test]
    fn test_indices_from_str() {
        let indices: FieldIndices = "0,1,3,4".parse().unwrap();
        assert_eq!(indices, FieldIndices::default());

        let indices: FieldIndices = "2, 0, 1, 3".parse().unwrap();
        assert_eq!(indices.chrom, 2);
        assert_eq!(indices.alternate, 3);
    }

    #[test]
    fn test_indices_from_str_rejects_wrong_arity() {
        assert!("0,1,3".parse::<FieldIndices>().is_err());
        assert!("0,1,3,4,5".parse::<FieldIndices>().is_err());
        assert!("0,1,x,4".parse::<FieldIndices>().is_err());
    }
}
