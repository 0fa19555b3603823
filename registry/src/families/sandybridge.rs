//! Sandy Bridge models — the first parts to support RAPL.
//!
//! Table 2-20 carries the core client register set; client parts add the
//! PP0/PP1 planes from Table 2-21, server parts (0x2D) add the DRAM plane
//! from Table 2-23.

use crate::model::CpuModel;
use crate::tables::*;

/// Returns the Sandy Bridge family records.
#[must_use]
pub fn models() -> Vec<CpuModel> {
    vec![
        CpuModel::resolve(
            0x2A,
            "SANDYBRIDGE",
            &[&TABLE_2_20, &TABLE_2_21, &TABLE_2_22],
            &[],
        ),
        CpuModel::resolve(
            0x2D,
            "SANDYBRIDGE_X",
            &[&TABLE_2_20, &TABLE_2_23, &TABLE_2_24],
            &[],
        ),
    ]
}
