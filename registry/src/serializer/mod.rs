//! Serializers for the register-citation registry.
//!
//! Three serialization formats are supported:
//! - **Delimited text** ([`delimited`]) — the canonical tabular artifact,
//!   tab- or comma-separated, output to `public/rapl-sdm.tsv`/`.csv`
//! - **JSON** ([`json`]) — for machine consumption, output to
//!   `public/rapl-sdm.json`
//! - **Markdown** ([`markdown`]) — for the generated report, embedded in
//!   `public/docs/rapl-sdm.md`

pub mod delimited;
pub mod json;
pub mod markdown;
