//! Atom Goldmont, Goldmont Plus, and Tremont models.
//!
//! Goldmont introduces the full DRAM/PP1 register set for Atom via
//! Table 2-12; later Atom generations inherit it through empty follow-on
//! tables. Goldmont-X (Denverton, 0x5F) has no SDM table stack of its own.

use crate::model::CpuModel;
use crate::tables::*;

/// Returns the Goldmont/Tremont family records.
#[must_use]
pub fn models() -> Vec<CpuModel> {
    vec![
        CpuModel::resolve(0x5C, "ATOM_GOLDMONT", &[&TABLE_2_6, &TABLE_2_12], &[]),
        CpuModel::resolve(0x5F, "ATOM_GOLDMONT_X", &[], &[]),
        CpuModel::resolve(
            0x7A,
            "ATOM_GOLDMONT_PLUS",
            &[&TABLE_2_6, &TABLE_2_12, &TABLE_2_13],
            &[],
        ),
        CpuModel::resolve(
            0x86,
            "ATOM_TREMONT_X",
            &[&TABLE_2_6, &TABLE_2_12, &TABLE_2_13, &TABLE_2_14],
            &[],
        ),
    ]
}
