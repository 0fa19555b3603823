//! Xeon Phi (Knights Landing / Knights Mill) models.

use crate::model::CpuModel;
use crate::tables::*;

/// Returns the Xeon Phi family records.
#[must_use]
pub fn models() -> Vec<CpuModel> {
    vec![
        CpuModel::resolve(0x57, "XEON_PHI_KNL", &[&TABLE_2_46], &[]),
        CpuModel::resolve(0x85, "XEON_PHI_KNM", &[&TABLE_2_46, &TABLE_2_47], &[]),
    ]
}
