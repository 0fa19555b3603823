//! `rapl-sdm-docs` — Generates the Markdown report and machine-generated
//! README from the register-citation registry.
//!
//! **Outputs:**
//! - `<out>/rapl-sdm.md` — Markdown citation report with flagged notes
//! - `<repo-root>/README.md` — Machine-generated repository README
//!
//! **Usage:**
//! ```
//! rapl-sdm-docs [--out <path>] [--readme <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rapl_sdm_docs::generate;

/// Generate rapl-sdm documentation artifacts.
#[derive(Parser)]
#[command(
    name = "rapl-sdm-docs",
    about = "Generate rapl-sdm documentation artifacts"
)]
struct Args {
    /// Output directory for the generated report.
    #[arg(long, default_value = "public/docs")]
    out: PathBuf,

    /// Path to write the machine-generated README.md (default: repo root).
    #[arg(long, default_value = "README.md")]
    readme: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    generate(&args.out, &args.readme)?;

    println!("Documentation generated successfully.");
    println!("  Report: {}", args.out.join("rapl-sdm.md").display());
    println!("  README: {}", args.readme.display());

    Ok(())
}
