//! Ivy Bridge models.

use crate::model::CpuModel;
use crate::tables::*;

/// Returns the Ivy Bridge family records.
#[must_use]
pub fn models() -> Vec<CpuModel> {
    vec![
        CpuModel::resolve(
            0x3A,
            "IVYBRIDGE",
            &[&TABLE_2_20, &TABLE_2_21, &TABLE_2_22, &TABLE_2_25],
            &[],
        ),
        CpuModel::resolve(
            0x3E,
            "IVYBRIDGE_X",
            &[&TABLE_2_20, &TABLE_2_24, &TABLE_2_26, &TABLE_2_27, &TABLE_2_28],
            &[],
        ),
    ]
}
