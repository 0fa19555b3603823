//! Skylake, Kaby Lake, and Cannon Lake models.
//!
//! Table 2-39 introduces the platform (PSys) energy counter and power limit.
//! Kaby Lake and Cannon Lake inherit the Skylake client stack through empty
//! follow-on tables; Skylake-SP (0x55) takes the server DRAM plane from
//! Table 2-45.

use crate::model::CpuModel;
use crate::tables::*;

/// Returns the Skylake/Kaby Lake/Cannon Lake family records.
#[must_use]
pub fn models() -> Vec<CpuModel> {
    vec![
        CpuModel::resolve(
            0x4E,
            "SKYLAKE_MOBILE",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_25,
                &TABLE_2_29,
                &TABLE_2_35,
                &TABLE_2_39,
                &TABLE_2_40,
            ],
            &[],
        ),
        CpuModel::resolve(
            0x55,
            "SKYLAKE_X",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_25,
                &TABLE_2_29,
                &TABLE_2_35,
                &TABLE_2_39,
                &TABLE_2_45,
            ],
            &["The top of Section 2.17 says Table 2-40 (Uncore) covers 0x55, but \
               Table 2-40 does not mention it."],
        ),
        CpuModel::resolve(
            0x5E,
            "SKYLAKE_DESKTOP",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_25,
                &TABLE_2_29,
                &TABLE_2_35,
                &TABLE_2_39,
                &TABLE_2_40,
            ],
            &[],
        ),
        CpuModel::resolve(
            0x8E,
            "KABYLAKE_MOBILE",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_25,
                &TABLE_2_29,
                &TABLE_2_35,
                &TABLE_2_39,
                &TABLE_2_40,
                &TABLE_2_41,
            ],
            &[],
        ),
        CpuModel::resolve(
            0x9E,
            "KABYLAKE_DESKTOP",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_25,
                &TABLE_2_29,
                &TABLE_2_35,
                &TABLE_2_39,
                &TABLE_2_40,
                &TABLE_2_41,
            ],
            &[],
        ),
        CpuModel::resolve(
            0x66,
            "CANNONLAKE_MOBILE",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_25,
                &TABLE_2_29,
                &TABLE_2_35,
                &TABLE_2_39,
                &TABLE_2_40,
                &TABLE_2_42,
                &TABLE_2_43,
            ],
            &[],
        ),
    ]
}
