//! JSON serializer for the register-citation registry.
//!
//! Produces a single JSON document carrying the SDM edition, the register
//! catalog (name and MSR address, in catalog order), one object per CPU
//! model (including its source table stack), and the table-level
//! discrepancy notes. Undocumented registers serialize as `null` rather
//! than the textual sentinel so consumers can distinguish "absent" without
//! string matching.

use serde_json::{json, Map, Value};

use crate::model::{CpuModel, Register, Registry};
use crate::tables;

/// Serializes the registry to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(registry: &Registry) -> Value {
    let registers: Vec<Value> = Register::CATALOG
        .iter()
        .map(|r| {
            json!({
                "name": r.as_str(),
                "address": format!("{:#X}", r.address()),
            })
        })
        .collect();

    let models: Vec<Value> = registry.models.iter().map(model_node).collect();

    let table_notes: Vec<Value> = tables::ALL
        .iter()
        .filter(|t| !t.notes.is_empty())
        .map(|t| {
            json!({
                "table": t.label,
                "notes": t.notes,
            })
        })
        .collect();

    json!({
        "edition": registry.sdm_edition,
        "registers": registers,
        "models": models,
        "table_notes": table_notes,
    })
}

fn model_node(model: &CpuModel) -> Value {
    let mut citations = Map::new();
    for register in Register::CATALOG {
        let value = match model.lookup(register) {
            Some(citation) => json!(citation),
            None => Value::Null,
        };
        citations.insert(register.as_str().to_owned(), value);
    }
    json!({
        "model": model.code(),
        "name": model.name,
        "tables": model.sources(),
        "citations": citations,
        "notes": model.notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_full_data_set() {
        let registry = Registry::full();
        let doc = to_json(registry);
        assert_eq!(doc["edition"], json!(registry.sdm_edition));
        assert_eq!(
            doc["registers"].as_array().map(Vec::len),
            Some(Register::COUNT)
        );
        assert_eq!(
            doc["models"].as_array().map(Vec::len),
            Some(registry.model_count())
        );
    }

    #[test]
    fn absent_citation_is_null() {
        let doc = to_json(Registry::full());
        let models = doc["models"].as_array();
        let null = Value::Null;
        let node = models
            .and_then(|m| m.iter().find(|m| m["model"] == json!("0x5F")))
            .unwrap_or(&null);
        assert_eq!(node["name"], json!("ATOM_GOLDMONT_X"));
        assert_eq!(node["citations"]["MSR_RAPL_POWER_UNIT"], Value::Null);
    }

    #[test]
    fn addresses_render_in_hex() {
        let doc = to_json(Registry::full());
        assert_eq!(doc["registers"][0]["name"], json!("MSR_RAPL_POWER_UNIT"));
        assert_eq!(doc["registers"][0]["address"], json!("0x606"));
    }

    #[test]
    fn model_node_lists_its_table_stack() {
        let doc = to_json(Registry::full());
        let models = doc["models"].as_array();
        let null = Value::Null;
        let node = models
            .and_then(|m| m.iter().find(|m| m["model"] == json!("0x37")))
            .unwrap_or(&null);
        assert_eq!(
            node["tables"],
            json!(["Table 2-6", "Table 2-7", "Table 2-8", "Table 2-9"])
        );
    }

    #[test]
    fn table_notes_surface_orphaned_annotations() {
        // The Table 2-38 remark is attached to the table, not to any model,
        // and must still reach the artifact.
        let doc = to_json(Registry::full());
        let notes = doc["table_notes"].as_array();
        assert_eq!(notes.map(Vec::len), Some(3));
        let table_2_38 = notes
            .and_then(|n| n.iter().find(|n| n["table"] == json!("Table 2-38")));
        let text = table_2_38
            .and_then(|n| n["notes"][0].as_str())
            .unwrap_or("");
        assert!(text.contains("appears to target model 0x45"));
    }

    #[test]
    fn notes_survive_serialization() {
        let doc = to_json(Registry::full());
        let models = doc["models"].as_array();
        let skylake_x = models
            .and_then(|m| m.iter().find(|m| m["model"] == json!("0x55")));
        let notes = skylake_x.map(|n| n["notes"].as_array().map_or(0, Vec::len));
        assert_eq!(notes, Some(1));
    }
}
