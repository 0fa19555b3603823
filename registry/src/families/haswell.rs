//! Haswell models.
//!
//! Client parts keep the Sandy Bridge layering and pick up the DRAM energy
//! counter (Table 2-29); Haswell-E (0x3F) takes the server DRAM plane from
//! Table 2-32 instead, where PP0 energy status is reserved and the DRAM
//! energy status unit is fixed at 15.3 uJ.

use crate::model::CpuModel;
use crate::tables::*;

/// Returns the Haswell family records.
#[must_use]
pub fn models() -> Vec<CpuModel> {
    vec![
        CpuModel::resolve(
            0x3C,
            "HASWELL_CORE",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_22,
                &TABLE_2_25,
                &TABLE_2_29,
                &TABLE_2_30,
            ],
            &["Table 2-25 applies per the re-specification at the end of Table 2-30."],
        ),
        CpuModel::resolve(
            0x3F,
            "HASWELL_X",
            &[&TABLE_2_20, &TABLE_2_29, &TABLE_2_32, &TABLE_2_33],
            &[],
        ),
        CpuModel::resolve(
            0x45,
            "HASWELL_ULT",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_22,
                &TABLE_2_29,
                &TABLE_2_30,
                &TABLE_2_31,
            ],
            &["Table 2-22 applies per the re-specification at the end of Table 2-31."],
        ),
        CpuModel::resolve(
            0x46,
            "HASWELL_GT3E",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_22,
                &TABLE_2_25,
                &TABLE_2_29,
                &TABLE_2_30,
            ],
            &["Table 2-25 applies per the re-specification at the end of Table 2-30."],
        ),
    ]
}
