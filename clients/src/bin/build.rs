//! `rapl-sdm-build` — Assembles the register-citation registry and writes
//! the artifacts to the output directory.
//!
//! **Outputs:**
//! - `<out>/rapl-sdm.tsv` — tab-delimited table
//! - `<out>/rapl-sdm.csv` — comma-delimited table
//! - `<out>/rapl-sdm.json` — JSON document
//!
//! **Usage:**
//! ```
//! rapl-sdm-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rapl_sdm_registry::serializer::{delimited, json};
use rapl_sdm_registry::{verify, Registry};

/// Build the register-citation artifacts.
#[derive(Parser)]
#[command(name = "rapl-sdm-build", about = "Build RAPL register-citation artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let registry = Registry::full();
    verify::verify(registry).context("Registry data verification failed")?;

    // Print summary
    println!(
        "{}: {} models, {} registers",
        registry.sdm_edition,
        registry.model_count(),
        registry.register_count()
    );

    // Delimited tables
    for delimiter in [delimited::Delimiter::Tab, delimited::Delimiter::Comma] {
        let path = out.join(format!("rapl-sdm.{}", delimiter.extension()));
        let table = delimited::to_delimited(registry, delimiter);
        fs::write(&path, &table)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  Written: {}", path.display());
    }

    // JSON
    let json_path = out.join("rapl-sdm.json");
    let json_value = json::to_json(registry);
    let json_str = serde_json::to_string_pretty(&json_value)
        .context("Failed to serialize registry to JSON")?;
    fs::write(&json_path, &json_str)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    println!("  Written: {}", json_path.display());

    println!("Build complete.");
    Ok(())
}
