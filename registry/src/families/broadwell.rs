//! Broadwell models.
//!
//! The server table attributions in this section are the murkiest in the
//! data set; the unresolved readings of Section 2.16 are carried as notes
//! on the affected models rather than resolved here.

use crate::model::CpuModel;
use crate::tables::*;

/// Returns the Broadwell family records.
#[must_use]
pub fn models() -> Vec<CpuModel> {
    vec![
        CpuModel::resolve(
            0x3D,
            "BROADWELL_CORE",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_22,
                &TABLE_2_25,
                &TABLE_2_29,
                &TABLE_2_30,
                &TABLE_2_34,
                &TABLE_2_35,
            ],
            &[],
        ),
        CpuModel::resolve(
            0x47,
            "BROADWELL_GT3E",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_22,
                &TABLE_2_25,
                &TABLE_2_29,
                &TABLE_2_30,
                &TABLE_2_34,
                &TABLE_2_35,
            ],
            &[],
        ),
        CpuModel::resolve(
            0x4F,
            "BROADWELL_X",
            &[
                &TABLE_2_20,
                &TABLE_2_21,
                &TABLE_2_29,
                &TABLE_2_34,
                &TABLE_2_36,
                &TABLE_2_38,
            ],
            &[
                "Section 2.16.2 specifies the prior tables for this architecture.",
                "Table 2-37 is mentioned at the start of Section 2.16.2 but missing \
                 from its explicit table list; not applied.",
            ],
        ),
        CpuModel::resolve(
            0x56,
            "BROADWELL_XEON_D",
            &[&TABLE_2_20, &TABLE_2_29, &TABLE_2_34, &TABLE_2_36, &TABLE_2_37],
            &["Section 2.16.1 also mentions Tables 2-19 and 2-28."],
        ),
    ]
}
