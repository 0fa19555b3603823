//! Markdown serializer for the register-citation registry.
//!
//! Produces a GitHub-flavored Markdown table with the same column schema as
//! the delimited artifact, followed by a notes section surfacing the flagged
//! discrepancy annotations, table-level and model-level alike.

use crate::model::{Register, Registry};
use crate::tables;

/// Serializes the registry to a Markdown table plus notes section.
#[must_use]
pub fn to_markdown(registry: &Registry) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("| Model | Name |");
    for register in Register::CATALOG {
        out.push(' ');
        out.push_str(register.as_str());
        out.push_str(" |");
    }
    out.push('\n');

    out.push_str("|---|---|");
    for _ in Register::CATALOG {
        out.push_str("---|");
    }
    out.push('\n');

    for model in &registry.models {
        out.push_str("| ");
        out.push_str(&model.code());
        out.push_str(" | ");
        out.push_str(model.name);
        out.push_str(" |");
        for register in Register::CATALOG {
            out.push(' ');
            out.push_str(model.citation(register));
            out.push_str(" |");
        }
        out.push('\n');
    }

    let flagged_tables: Vec<_> = tables::ALL
        .iter()
        .filter(|t| !t.notes.is_empty())
        .collect();
    let flagged_models: Vec<_> = registry
        .models
        .iter()
        .filter(|m| !m.notes.is_empty())
        .collect();
    if !flagged_tables.is_empty() || !flagged_models.is_empty() {
        out.push_str("\n## Notes\n\n");
        for table in flagged_tables {
            for note in table.notes {
                out.push_str(&format!("- **{}**: {}\n", table.label, note));
            }
        }
        for model in flagged_models {
            for note in model.notes {
                out.push_str(&format!("- **{} ({})**: {}\n", model.name, model.code(), note));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_row_per_model() {
        let registry = Registry::full();
        let out = to_markdown(registry);
        let rows = out
            .lines()
            .filter(|l| l.starts_with("| 0x"))
            .count();
        assert_eq!(rows, registry.model_count());
    }

    #[test]
    fn header_and_separator_column_counts_match() {
        let out = to_markdown(Registry::full());
        let mut lines = out.lines();
        let header = lines.next().unwrap_or("");
        let separator = lines.next().unwrap_or("");
        assert_eq!(
            header.matches('|').count(),
            separator.matches('|').count()
        );
    }

    #[test]
    fn notes_section_lists_flagged_models() {
        let out = to_markdown(Registry::full());
        assert!(out.contains("## Notes"));
        assert!(out.contains("BROADWELL_X (0x4F)"));
        assert!(out.contains("SKYLAKE_X (0x55)"));
    }

    #[test]
    fn notes_section_lists_flagged_tables() {
        let out = to_markdown(Registry::full());
        assert!(out.contains("- **Table 2-38**:"));
        assert!(out.contains("appears to target model 0x45"));
        assert!(out.contains("- **Table 2-30**:"));
    }
}
