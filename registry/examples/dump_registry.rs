//! Demonstrates loading the full registry and serializing it.
//!
//! Run with: `cargo run --example dump_registry -p rapl-sdm-registry`

use rapl_sdm_registry::serializer::{delimited, json};
use rapl_sdm_registry::{Register, Registry};

fn main() {
    let registry = Registry::full();

    println!("{}", registry.sdm_edition);
    println!("  Models:    {}", registry.model_count());
    println!("  Registers: {}", registry.register_count());
    println!();

    // List all models with their resolved coverage.
    for model in &registry.models {
        println!(
            "  {}  {:24} {:>2}/{} registers documented",
            model.code(),
            model.name,
            model.documented_count(),
            Register::COUNT,
        );
    }

    println!();

    // Serialize to JSON (show first 200 chars).
    let doc = json::to_json(registry);
    let json_str =
        serde_json::to_string_pretty(&doc).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON output ({} bytes):", json_str.len());
    let preview_end = json_str
        .char_indices()
        .nth(200)
        .map_or(json_str.len(), |(i, _)| i);
    println!("{}...", &json_str[..preview_end]);

    println!();

    // The canonical tabular artifact.
    print!(
        "{}",
        delimited::to_delimited(registry, delimited::Delimiter::Tab)
    );
}
