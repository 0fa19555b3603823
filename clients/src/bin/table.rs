//! `rapl-sdm-table` — Prints the register-citation table to stdout.
//!
//! **Output:** one header line (`Model`, `Name`, then the register catalog),
//! then one line per CPU model, delimited by the chosen separator.
//!
//! **Usage:**
//! ```
//! rapl-sdm-table [--delimiter <tab|comma>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use clap::{Parser, ValueEnum};
use rapl_sdm_registry::serializer::delimited::{to_delimited, Delimiter};
use rapl_sdm_registry::Registry;

/// Field separator choices exposed on the command line.
#[derive(Clone, Copy, Default, ValueEnum)]
enum DelimiterArg {
    /// Tab-separated output.
    #[default]
    Tab,
    /// Comma-separated output.
    Comma,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Delimiter {
        match arg {
            DelimiterArg::Tab => Delimiter::Tab,
            DelimiterArg::Comma => Delimiter::Comma,
        }
    }
}

/// Print the RAPL register-citation table.
#[derive(Parser)]
#[command(
    name = "rapl-sdm-table",
    about = "Print the RAPL register-citation table to stdout"
)]
struct Args {
    /// Field separator for the table.
    #[arg(long, value_enum, default_value_t = DelimiterArg::Tab)]
    delimiter: DelimiterArg,
}

fn main() {
    let args = Args::parse();
    print!(
        "{}",
        to_delimited(Registry::full(), args.delimiter.into())
    );
}
