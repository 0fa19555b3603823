//! Delimited-text serializer for the register-citation registry.
//!
//! Produces the canonical tabular artifact: a header line naming the two
//! fixed columns (`Model`, `Name`) and the eleven catalog registers, then
//! one line per CPU model. Every line has exactly `2 + 11` fields; a
//! register no table documents for a model renders as the `None` sentinel.

use crate::model::{Register, Registry};

/// Field separator for the tabular output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Tab-separated values (the long-standing default).
    #[default]
    Tab,
    /// Comma-separated values.
    Comma,
}

impl Delimiter {
    /// Returns the separator character.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
        }
    }

    /// Returns the conventional file extension for this delimiter.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Delimiter::Tab => "tsv",
            Delimiter::Comma => "csv",
        }
    }
}

/// Serializes the registry to a delimited text table.
///
/// Output is deterministic: column order is the fixed catalog order and row
/// order is the registry's model order, so repeated calls are byte-identical.
#[must_use]
pub fn to_delimited(registry: &Registry, delimiter: Delimiter) -> String {
    let sep = delimiter.as_char();
    let mut out = String::with_capacity(4 * 1024);

    out.push_str("Model");
    out.push(sep);
    out.push_str("Name");
    for register in Register::CATALOG {
        out.push(sep);
        out.push_str(register.as_str());
    }
    out.push('\n');

    for model in &registry.models {
        out.push_str(&model.code());
        out.push(sep);
        out.push_str(model.name);
        for register in Register::CATALOG {
            out.push(sep);
            out.push_str(model.citation(register));
        }
        out.push('\n');
    }

    out
}
