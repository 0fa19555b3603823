//! rapl-sdm documentation generator.
//!
//! Renders the register-citation registry to a human-readable Markdown
//! report and the machine-generated repository README. The registry's
//! verification pass runs before anything is written, so a data-entry
//! mistake fails the generation loudly instead of shipping a wrong table.
//!
//! # Entry Points
//!
//! ```no_run
//! use std::path::PathBuf;
//! use rapl_sdm_docs::generate;
//!
//! let out = PathBuf::from("public/docs");
//! let readme = PathBuf::from("README.md");
//! generate(&out, &readme).expect("Report generation failed");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod writer;

use std::path::Path;

use anyhow::{Context, Result};

use rapl_sdm_registry::serializer::markdown;
use rapl_sdm_registry::{verify, Register, Registry};

/// Generates all documentation artifacts.
///
/// Writes the Markdown report to `out_dir/rapl-sdm.md` and the
/// machine-generated README to `readme_path`.
///
/// # Errors
///
/// Returns an error if the registry data fails verification or any file
/// cannot be written.
pub fn generate(out_dir: &Path, readme_path: &Path) -> Result<()> {
    let registry = Registry::full();

    verify::verify(registry).context("Registry data verification failed")?;

    writer::write_text(&out_dir.join("rapl-sdm.md"), &report(registry))?;
    writer::write_text(readme_path, &readme(registry))?;

    Ok(())
}

/// Renders the full Markdown report for the registry.
#[must_use]
pub fn report(registry: &Registry) -> String {
    let mut out = String::with_capacity(16 * 1024);

    out.push_str("# RAPL MSR documentation citations\n\n");
    out.push_str(&format!(
        "Data set last reconciled against the {}.\n\n",
        registry.sdm_edition
    ));
    out.push_str(&format!(
        "{} CPU models × {} RAPL MSRs. Each cell names the SDM Volume 4 table \
         or the common RAPL section (Volume 3B) documenting that register for \
         that model; `None` marks a register no table in the model's stack \
         documents.\n\n",
        registry.model_count(),
        registry.register_count()
    ));

    out.push_str("## Register catalog\n\n");
    out.push_str("| MSR | Address |\n|---|---|\n");
    for register in Register::CATALOG {
        out.push_str(&format!(
            "| {} | {:#X} |\n",
            register.as_str(),
            register.address()
        ));
    }
    out.push('\n');

    out.push_str("## Citations by model\n\n");
    out.push_str(&markdown::to_markdown(registry));

    out
}

/// Renders the machine-generated README.md content.
#[must_use]
pub fn readme(registry: &Registry) -> String {
    format!(
        r#"# rapl-sdm

`rapl-sdm` records, for each Intel CPU model that supports RAPL (Running
Average Power Limit), which table or section of the Intel Software
Developer's Manual (SDM), Volume 4, documents each of the tracked RAPL MSRs.
Each model's record is resolved from the ordered stack of SDM tables its
section specifies — later tables override earlier ones — and the resulting
data set is emitted as delimited text, JSON, and Markdown artifacts.

## Data set

{edition}: {models} CPU models × {registers} RAPL MSRs

## Repository Structure

| Directory | Role |
|-----------|------|
| `registry/` | Rust library: citation data as typed static data + serializers |
| `docs/` | Rust library: Markdown report and README generator |
| `clients/` | Rust binaries: table, build, and docs generators |

## Building

```sh
# Print the tab-delimited citation table to stdout
cargo run --bin rapl-sdm-table

# Write TSV/CSV/JSON artifacts
cargo run --bin rapl-sdm-build

# Generate the Markdown report and this README
cargo run --bin rapl-sdm-docs
```

## CI

```sh
cargo fmt --check
cargo clippy -- -D warnings
cargo test
```

## License

Apache-2.0 — see [LICENSE](LICENSE).

---

*This README is machine-generated by `rapl-sdm-docs`. Do not edit by hand.*
"#,
        edition = registry.sdm_edition,
        models = registry.model_count(),
        registers = registry.register_count(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_every_model() {
        let registry = Registry::full();
        let report = report(registry);
        for model in &registry.models {
            assert!(report.contains(model.name), "missing {}", model.name);
        }
    }

    #[test]
    fn report_includes_register_catalog() {
        let report = report(Registry::full());
        assert!(report.contains("| MSR_RAPL_POWER_UNIT | 0x606 |"));
        assert!(report.contains("| MSR_PLATFORM_ENERGY_COUNTER | 0x64D |"));
    }

    #[test]
    fn report_surfaces_flagged_notes() {
        let report = report(Registry::full());
        assert!(report.contains("## Notes"));
        assert!(report.contains("Section 2.16.2"));
        // Table-level annotations must reach the report too, not just the
        // per-model ones.
        assert!(report.contains("**Table 2-38**"));
    }

    #[test]
    fn readme_counts_match_registry() {
        let registry = Registry::full();
        let readme = readme(registry);
        assert!(readme.contains("30 CPU models × 11 RAPL MSRs"));
        assert!(readme.contains(registry.sdm_edition));
    }
}
