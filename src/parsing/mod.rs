//! Composite variant string parsing and SPDI formatting.

pub mod variant;

pub use variant::{spdi_from_composite, FieldIndices, VariantError};
