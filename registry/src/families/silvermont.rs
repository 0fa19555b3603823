//! Atom Silvermont and Airmont models.
//!
//! These parts share the common Atom tables (2-6, 2-7) and layer the
//! Silvermont RAPL table (2-8) or its variants on top. Silvermont server
//! parts (0x4D) take Table 2-10 instead; Airmont (0x4C) adds the PP0 power
//! limit from Table 2-11.

use crate::model::CpuModel;
use crate::tables::*;

/// Returns the Silvermont/Airmont family records.
#[must_use]
pub fn models() -> Vec<CpuModel> {
    vec![
        CpuModel::resolve(
            0x37,
            "ATOM_SILVERMONT",
            &[&TABLE_2_6, &TABLE_2_7, &TABLE_2_8, &TABLE_2_9],
            &[],
        ),
        CpuModel::resolve(
            0x4A,
            "ATOM_SILVERMONT_MID",
            &[&TABLE_2_6, &TABLE_2_7, &TABLE_2_8],
            &[],
        ),
        CpuModel::resolve(
            0x4D,
            "ATOM_SILVERMONT_X",
            &[&TABLE_2_6, &TABLE_2_7, &TABLE_2_10],
            &[],
        ),
        CpuModel::resolve(
            0x5A,
            "ATOM_AIRMONT_MID",
            &[&TABLE_2_6, &TABLE_2_7, &TABLE_2_8],
            &[],
        ),
        CpuModel::resolve(
            0x5D,
            "ATOM_SOFIA",
            &[&TABLE_2_6, &TABLE_2_7, &TABLE_2_8],
            &[],
        ),
        CpuModel::resolve(
            0x4C,
            "ATOM_AIRMONT",
            &[&TABLE_2_6, &TABLE_2_7, &TABLE_2_8, &TABLE_2_11],
            &[],
        ),
    ]
}
