//! SDM Volume 4 documentation tables as static data.
//!
//! Each static below encodes one table from the Intel Software Developer's
//! Manual, Volume 4, as the set of catalog registers it documents and the
//! citation it gives for each. Empty tables exist in the manual's
//! inheritance chains and are kept so model stacks mirror the SDM's own
//! table listings. See [`crate::families`] for the per-model stacks.

use crate::model::citations::*;
use crate::model::{DocTable, Register};

/// SDM Vol. 4, Table 2-6.
pub static TABLE_2_6: DocTable = DocTable {
    label: "Table 2-6",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-7.
pub static TABLE_2_7: DocTable = DocTable {
    label: "Table 2-7",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-8.
pub static TABLE_2_8: DocTable = DocTable {
    label: "Table 2-8",
    entries: &[
        (Register::RaplPowerUnit, "Table 2-8"),
        (Register::PkgPowerLimit, "Table 2-8"),
        (Register::PkgEnergyStatus, PKG_SECTION),
        (Register::Pp0EnergyStatus, PP0_SECTION),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-9.
pub static TABLE_2_9: DocTable = DocTable {
    label: "Table 2-9",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-10.
pub static TABLE_2_10: DocTable = DocTable {
    label: "Table 2-10",
    entries: &[
        (Register::RaplPowerUnit, "Table 2-10 (Same as 2-8)"),
        (Register::PkgPowerLimit, PKG_SECTION),
        (Register::PkgEnergyStatus, PKG_SECTION),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-11.
pub static TABLE_2_11: DocTable = DocTable {
    label: "Table 2-11",
    entries: &[(Register::Pp0PowerLimit, "Table 2-11")],
    notes: &[],
};

/// SDM Vol. 4, Table 2-12.
pub static TABLE_2_12: DocTable = DocTable {
    label: "Table 2-12",
    entries: &[
        (Register::RaplPowerUnit, POWER_UNIT_SECTION),
        (Register::PkgPowerLimit, PKG_SECTION),
        (Register::PkgEnergyStatus, PKG_SECTION),
        (Register::DramPowerLimit, DRAM_SECTION),
        (Register::DramEnergyStatus, DRAM_SECTION),
        (Register::Pp0EnergyStatus, PP0_SECTION),
        (Register::Pp1EnergyStatus, PP1_SECTION),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-13.
pub static TABLE_2_13: DocTable = DocTable {
    label: "Table 2-13",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-14.
pub static TABLE_2_14: DocTable = DocTable {
    label: "Table 2-14",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-20.
pub static TABLE_2_20: DocTable = DocTable {
    label: "Table 2-20",
    entries: &[
        (Register::RaplPowerUnit, POWER_UNIT_SECTION),
        (Register::PkgPowerLimit, PKG_SECTION),
        (Register::PkgEnergyStatus, PKG_SECTION),
        (Register::Pp0PowerLimit, PP0_SECTION),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-21.
pub static TABLE_2_21: DocTable = DocTable {
    label: "Table 2-21",
    entries: &[
        (Register::Pp0EnergyStatus, PP0_SECTION),
        (Register::Pp1PowerLimit, PP1_SECTION),
        (Register::Pp1EnergyStatus, PP1_SECTION),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-22.
pub static TABLE_2_22: DocTable = DocTable {
    label: "Table 2-22",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-23.
pub static TABLE_2_23: DocTable = DocTable {
    label: "Table 2-23",
    entries: &[
        (Register::DramPowerLimit, DRAM_SECTION),
        (Register::DramEnergyStatus, DRAM_SECTION),
        (Register::Pp0EnergyStatus, PP0_SECTION),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-24.
pub static TABLE_2_24: DocTable = DocTable {
    label: "Table 2-24",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-25.
pub static TABLE_2_25: DocTable = DocTable {
    label: "Table 2-25",
    entries: &[(Register::Pp0EnergyStatus, PP0_SECTION)],
    notes: &[],
};

/// SDM Vol. 4, Table 2-26.
pub static TABLE_2_26: DocTable = DocTable {
    label: "Table 2-26",
    entries: &[
        (Register::DramPowerLimit, DRAM_SECTION),
        (Register::DramEnergyStatus, DRAM_SECTION),
        (Register::Pp0EnergyStatus, PP0_SECTION),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-27.
pub static TABLE_2_27: DocTable = DocTable {
    label: "Table 2-27",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-28.
pub static TABLE_2_28: DocTable = DocTable {
    label: "Table 2-28",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-29.
pub static TABLE_2_29: DocTable = DocTable {
    label: "Table 2-29",
    entries: &[(Register::DramEnergyStatus, DRAM_SECTION)],
    notes: &[],
};

/// SDM Vol. 4, Table 2-30.
pub static TABLE_2_30: DocTable = DocTable {
    label: "Table 2-30",
    entries: &[
        (Register::RaplPowerUnit, POWER_UNIT_SECTION),
        (Register::Pp0EnergyStatus, PP0_SECTION),
        (Register::Pp1PowerLimit, PP1_SECTION),
        (Register::Pp1EnergyStatus, PP1_SECTION),
    ],
    notes: &["Table 2-25 is re-specified at the end of this table for the models it covers."],
};

/// SDM Vol. 4, Table 2-31.
pub static TABLE_2_31: DocTable = DocTable {
    label: "Table 2-31",
    entries: &[],
    notes: &["Table 2-22 is re-specified at the end of this table for the models it covers."],
};

/// SDM Vol. 4, Table 2-32.
pub static TABLE_2_32: DocTable = DocTable {
    label: "Table 2-32",
    entries: &[
        (Register::RaplPowerUnit, POWER_UNIT_SECTION),
        (Register::DramPowerLimit, DRAM_SECTION),
        (Register::DramEnergyStatus, DRAM_ESU_15_3),
        (Register::Pp0EnergyStatus, RESERVED),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-33.
pub static TABLE_2_33: DocTable = DocTable {
    label: "Table 2-33",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-34.
pub static TABLE_2_34: DocTable = DocTable {
    label: "Table 2-34",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-35.
pub static TABLE_2_35: DocTable = DocTable {
    label: "Table 2-35",
    entries: &[(Register::Pp0EnergyStatus, PP0_SECTION)],
    notes: &[],
};

/// SDM Vol. 4, Table 2-36.
pub static TABLE_2_36: DocTable = DocTable {
    label: "Table 2-36",
    entries: &[
        (Register::RaplPowerUnit, POWER_UNIT_SECTION),
        (Register::DramPowerLimit, DRAM_SECTION),
        (Register::DramEnergyStatus, DRAM_ESU_15_3),
        (Register::Pp0EnergyStatus, RESERVED),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-37.
pub static TABLE_2_37: DocTable = DocTable {
    label: "Table 2-37",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-38.
pub static TABLE_2_38: DocTable = DocTable {
    label: "Table 2-38",
    entries: &[],
    notes: &["The comment at the end of this table appears to target model 0x45; \
              not applied (no effect on resolved citations)."],
};

/// SDM Vol. 4, Table 2-39.
pub static TABLE_2_39: DocTable = DocTable {
    label: "Table 2-39",
    entries: &[
        (Register::Pp0EnergyStatus, PP0_SECTION),
        (Register::PlatformEnergyCounter, PLATFORM_TABLE),
        (Register::PlatformPowerLimit, PLATFORM_TABLE),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-40.
pub static TABLE_2_40: DocTable = DocTable {
    label: "Table 2-40",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-41.
pub static TABLE_2_41: DocTable = DocTable {
    label: "Table 2-41",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-42.
pub static TABLE_2_42: DocTable = DocTable {
    label: "Table 2-42",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-43.
pub static TABLE_2_43: DocTable = DocTable {
    label: "Table 2-43",
    entries: &[],
    notes: &[],
};

/// SDM Vol. 4, Table 2-45.
pub static TABLE_2_45: DocTable = DocTable {
    label: "Table 2-45",
    entries: &[
        (Register::RaplPowerUnit, POWER_UNIT_SECTION),
        (Register::DramPowerLimit, DRAM_SECTION),
        (Register::DramEnergyStatus, DRAM_ESU_15_3),
        (Register::Pp0EnergyStatus, RESERVED),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-46.
pub static TABLE_2_46: DocTable = DocTable {
    label: "Table 2-46",
    entries: &[
        (Register::RaplPowerUnit, POWER_UNIT_SECTION),
        (Register::PkgPowerLimit, PKG_SECTION),
        (Register::PkgEnergyStatus, PKG_SECTION),
        (Register::DramPowerLimit, DRAM_SECTION),
        (Register::DramEnergyStatus, DRAM_SECTION),
        (Register::Pp0PowerLimit, PP0_SECTION),
        (Register::Pp0EnergyStatus, PP0_SECTION),
    ],
    notes: &[],
};

/// SDM Vol. 4, Table 2-47.
pub static TABLE_2_47: DocTable = DocTable {
    label: "Table 2-47",
    entries: &[],
    notes: &[],
};

/// All documentation tables, in SDM order.
pub static ALL: [&DocTable; 36] = [
    &TABLE_2_6,
    &TABLE_2_7,
    &TABLE_2_8,
    &TABLE_2_9,
    &TABLE_2_10,
    &TABLE_2_11,
    &TABLE_2_12,
    &TABLE_2_13,
    &TABLE_2_14,
    &TABLE_2_20,
    &TABLE_2_21,
    &TABLE_2_22,
    &TABLE_2_23,
    &TABLE_2_24,
    &TABLE_2_25,
    &TABLE_2_26,
    &TABLE_2_27,
    &TABLE_2_28,
    &TABLE_2_29,
    &TABLE_2_30,
    &TABLE_2_31,
    &TABLE_2_32,
    &TABLE_2_33,
    &TABLE_2_34,
    &TABLE_2_35,
    &TABLE_2_36,
    &TABLE_2_37,
    &TABLE_2_38,
    &TABLE_2_39,
    &TABLE_2_40,
    &TABLE_2_41,
    &TABLE_2_42,
    &TABLE_2_43,
    &TABLE_2_45,
    &TABLE_2_46,
    &TABLE_2_47,
];
