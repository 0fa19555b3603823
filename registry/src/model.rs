//! Core registry model types.
//!
//! These types represent the RAPL register-citation data set as typed Rust
//! data. Documentation tables and model records are built as static literals
//! in [`crate::tables`] and [`crate::families`]; the top-level entry point is
//! [`Registry::full()`](crate::Registry::full).

/// One of the RAPL MSRs whose documentation source is tracked.
///
/// Variant order is the fixed catalog order: it drives the column order of
/// every serialized artifact, so header and row emission can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Register {
    /// `MSR_RAPL_POWER_UNIT` (0x606) — power, energy, and time units.
    RaplPowerUnit,
    /// `MSR_PKG_POWER_LIMIT` (0x610) — package power limits.
    PkgPowerLimit,
    /// `MSR_PKG_ENERGY_STATUS` (0x611) — package energy counter.
    PkgEnergyStatus,
    /// `MSR_PP0_POWER_LIMIT` (0x638) — power plane 0 (core) power limit.
    Pp0PowerLimit,
    /// `MSR_PP0_ENERGY_STATUS` (0x639) — power plane 0 energy counter.
    Pp0EnergyStatus,
    /// `MSR_PP1_POWER_LIMIT` (0x640) — power plane 1 (graphics) power limit.
    Pp1PowerLimit,
    /// `MSR_PP1_ENERGY_STATUS` (0x641) — power plane 1 energy counter.
    Pp1EnergyStatus,
    /// `MSR_DRAM_POWER_LIMIT` (0x618) — DRAM power limit.
    DramPowerLimit,
    /// `MSR_DRAM_ENERGY_STATUS` (0x619) — DRAM energy counter.
    DramEnergyStatus,
    /// `MSR_PLATFORM_POWER_LIMIT` (0x65C) — platform (PSys) power limit.
    PlatformPowerLimit,
    /// `MSR_PLATFORM_ENERGY_COUNTER` (0x64D) — platform energy counter.
    PlatformEnergyCounter,
}

impl Register {
    /// The fixed, ordered register catalog.
    pub const CATALOG: [Register; 11] = [
        Register::RaplPowerUnit,
        Register::PkgPowerLimit,
        Register::PkgEnergyStatus,
        Register::Pp0PowerLimit,
        Register::Pp0EnergyStatus,
        Register::Pp1PowerLimit,
        Register::Pp1EnergyStatus,
        Register::DramPowerLimit,
        Register::DramEnergyStatus,
        Register::PlatformPowerLimit,
        Register::PlatformEnergyCounter,
    ];

    /// Number of registers in the catalog.
    pub const COUNT: usize = Self::CATALOG.len();

    /// Returns the MSR name as it appears in the SDM and the Linux kernel.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Register::RaplPowerUnit => "MSR_RAPL_POWER_UNIT",
            Register::PkgPowerLimit => "MSR_PKG_POWER_LIMIT",
            Register::PkgEnergyStatus => "MSR_PKG_ENERGY_STATUS",
            Register::Pp0PowerLimit => "MSR_PP0_POWER_LIMIT",
            Register::Pp0EnergyStatus => "MSR_PP0_ENERGY_STATUS",
            Register::Pp1PowerLimit => "MSR_PP1_POWER_LIMIT",
            Register::Pp1EnergyStatus => "MSR_PP1_ENERGY_STATUS",
            Register::DramPowerLimit => "MSR_DRAM_POWER_LIMIT",
            Register::DramEnergyStatus => "MSR_DRAM_ENERGY_STATUS",
            Register::PlatformPowerLimit => "MSR_PLATFORM_POWER_LIMIT",
            Register::PlatformEnergyCounter => "MSR_PLATFORM_ENERGY_COUNTER",
        }
    }

    /// Returns the MSR address.
    #[must_use]
    pub fn address(self) -> u32 {
        match self {
            Register::RaplPowerUnit => 0x606,
            Register::PkgPowerLimit => 0x610,
            Register::PkgEnergyStatus => 0x611,
            Register::Pp0PowerLimit => 0x638,
            Register::Pp0EnergyStatus => 0x639,
            Register::Pp1PowerLimit => 0x640,
            Register::Pp1EnergyStatus => 0x641,
            Register::DramPowerLimit => 0x618,
            Register::DramEnergyStatus => 0x619,
            Register::PlatformPowerLimit => 0x65C,
            Register::PlatformEnergyCounter => 0x64D,
        }
    }

    /// Position of this register in [`Register::CATALOG`].
    #[must_use]
    pub fn catalog_index(self) -> usize {
        // Variant order equals catalog order.
        self as usize
    }
}

/// One SDM documentation table's contribution of citations for a subset of
/// the register catalog.
///
/// Tables are layered per CPU model: a model's record is resolved by folding
/// its table stack in order, with later tables overriding earlier ones for
/// any register they both mention. Empty tables are legal and participate in
/// the stack without contributing entries.
#[derive(Debug, Clone)]
pub struct DocTable {
    /// The SDM table name (e.g., `"Table 2-8"`).
    pub label: &'static str,
    /// Register-to-citation entries, in no particular order.
    pub entries: &'static [(Register, &'static str)],
    /// Flagged discrepancy annotations recorded against this table.
    pub notes: &'static [&'static str],
}

/// One CPU model's fully-resolved citation record.
#[derive(Debug, Clone)]
pub struct CpuModel {
    /// CPUID model number (family 6), e.g. `0x3C` for Haswell.
    pub model: u32,
    /// Kernel-style microarchitecture name, e.g. `"HASWELL_CORE"`.
    pub name: &'static str,
    /// Resolved citations, indexed by catalog position.
    resolved: [Option<&'static str>; Register::COUNT],
    /// Labels of the tables in this model's stack, in fold order.
    sources: Vec<&'static str>,
    /// Flagged discrepancy annotations recorded against this model.
    pub notes: &'static [&'static str],
}

impl CpuModel {
    /// Resolves a model record from an ordered stack of documentation tables.
    ///
    /// Later tables override any register citations in earlier tables; a
    /// register absent from a table keeps its prior citation, if any.
    #[must_use]
    pub fn resolve(
        model: u32,
        name: &'static str,
        stack: &[&DocTable],
        notes: &'static [&'static str],
    ) -> CpuModel {
        let mut resolved = [None; Register::COUNT];
        let mut sources = Vec::with_capacity(stack.len());
        for table in stack {
            sources.push(table.label);
            for &(register, citation) in table.entries {
                resolved[register.catalog_index()] = Some(citation);
            }
        }
        CpuModel {
            model,
            name,
            resolved,
            sources,
            notes,
        }
    }

    /// Returns the labels of the SDM tables this record was resolved from,
    /// in fold order.
    #[must_use]
    pub fn sources(&self) -> &[&'static str] {
        &self.sources
    }

    /// Returns the resolved citation for `register`, if any table in this
    /// model's stack documented it.
    #[must_use]
    pub fn lookup(&self, register: Register) -> Option<&'static str> {
        self.resolved[register.catalog_index()]
    }

    /// Returns the display string for `register`: the resolved citation, or
    /// the [`citations::NONE`] sentinel when the register is undocumented
    /// for this model.
    #[must_use]
    pub fn citation(&self, register: Register) -> &'static str {
        self.lookup(register).unwrap_or(citations::NONE)
    }

    /// Returns the CPUID model number formatted as in the SDM listings,
    /// e.g. `"0x4A"`.
    #[must_use]
    pub fn code(&self) -> String {
        format!("0x{:02X}", self.model)
    }

    /// Number of catalog registers with a resolved citation.
    #[must_use]
    pub fn documented_count(&self) -> usize {
        self.resolved.iter().flatten().count()
    }
}

/// The complete register-citation registry.
#[derive(Debug)]
pub struct Registry {
    /// The SDM edition the data set was last reconciled against.
    pub sdm_edition: &'static str,
    /// All CPU model records, in SDM section order.
    pub models: Vec<CpuModel>,
}

impl Registry {
    /// Looks up a model record by CPUID model number. Returns `None` if the
    /// model is not in the data set.
    #[must_use]
    pub fn find_model(&self, model: u32) -> Option<&CpuModel> {
        self.models.iter().find(|m| m.model == model)
    }

    /// Number of CPU model records.
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Number of registers in the catalog.
    #[must_use]
    pub fn register_count(&self) -> usize {
        Register::COUNT
    }
}

/// Citation values shared across documentation tables.
///
/// The section numbers refer to the common RAPL chapter of SDM Volume 3B;
/// a table in Volume 4 cites them when a model follows the generic register
/// layout rather than re-specifying it.
pub mod citations {
    /// Sentinel for a register no table documents for a given model.
    pub const NONE: &str = "None";
    /// Section 14.9.1 — RAPL interfaces and unit definitions.
    pub const POWER_UNIT_SECTION: &str = "14.9.1";
    /// Section 14.9.3 — package RAPL domain.
    pub const PKG_SECTION: &str = "14.9.3";
    /// Section 14.9.4 — PP0 RAPL domain.
    pub const PP0_SECTION: &str = "14.9.4";
    /// Section 14.9.4 — PP1 RAPL domain (shares the PP0 section).
    pub const PP1_SECTION: &str = "14.9.4";
    /// Section 14.9.5 — DRAM RAPL domain.
    pub const DRAM_SECTION: &str = "14.9.5";
    /// Table 2-38 — platform (PSys) energy and power limit MSRs.
    pub const PLATFORM_TABLE: &str = "Table 2-38";
    /// Fixed 15.3 uJ DRAM energy status unit on server parts; assumed for
    /// now that this ESU is found in `MSR_RAPL_POWER_UNIT`.
    pub const DRAM_ESU_15_3: &str = "ESU: 15.3 uJ";
    /// Register documented as reserved; reads as a zero energy value.
    pub const RESERVED: &str = "Reserved (0)";
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOWER: DocTable = DocTable {
        label: "Table T-1",
        entries: &[
            (Register::RaplPowerUnit, "first"),
            (Register::PkgPowerLimit, "first"),
        ],
        notes: &[],
    };

    const UPPER: DocTable = DocTable {
        label: "Table T-2",
        entries: &[(Register::PkgPowerLimit, "second")],
        notes: &[],
    };

    const EMPTY: DocTable = DocTable {
        label: "Table T-3",
        entries: &[],
        notes: &[],
    };

    #[test]
    fn later_table_wins() {
        let model = CpuModel::resolve(0x01, "TEST", &[&LOWER, &UPPER], &[]);
        assert_eq!(model.citation(Register::PkgPowerLimit), "second");
        // Registers only the earlier table mentions are untouched.
        assert_eq!(model.citation(Register::RaplPowerUnit), "first");
    }

    #[test]
    fn reversed_stack_reverses_precedence() {
        let model = CpuModel::resolve(0x01, "TEST", &[&UPPER, &LOWER], &[]);
        assert_eq!(model.citation(Register::PkgPowerLimit), "first");
    }

    #[test]
    fn empty_table_leaves_prior_values() {
        let model = CpuModel::resolve(0x01, "TEST", &[&LOWER, &EMPTY], &[]);
        assert_eq!(model.citation(Register::PkgPowerLimit), "first");
    }

    #[test]
    fn absent_register_yields_sentinel() {
        let model = CpuModel::resolve(0x01, "TEST", &[&LOWER], &[]);
        assert_eq!(model.lookup(Register::DramPowerLimit), None);
        assert_eq!(model.citation(Register::DramPowerLimit), citations::NONE);
    }

    #[test]
    fn empty_stack_resolves_nothing() {
        let model = CpuModel::resolve(0x01, "TEST", &[], &[]);
        assert_eq!(model.documented_count(), 0);
        for register in Register::CATALOG {
            assert_eq!(model.citation(register), citations::NONE);
        }
    }

    #[test]
    fn sources_record_the_stack_in_fold_order() {
        let model = CpuModel::resolve(0x01, "TEST", &[&LOWER, &UPPER, &EMPTY], &[]);
        assert_eq!(model.sources(), &["Table T-1", "Table T-2", "Table T-3"]);
    }

    #[test]
    fn model_code_is_uppercase_hex() {
        let model = CpuModel::resolve(0x4A, "ATOM_SILVERMONT_MID", &[], &[]);
        assert_eq!(model.code(), "0x4A");
        let model = CpuModel::resolve(0x5, "LOW", &[], &[]);
        assert_eq!(model.code(), "0x05");
    }

    #[test]
    fn catalog_index_matches_catalog_order() {
        for (i, register) in Register::CATALOG.iter().enumerate() {
            assert_eq!(register.catalog_index(), i);
        }
    }

    #[test]
    fn register_names_and_addresses_unique() {
        let mut names = std::collections::HashSet::new();
        let mut addresses = std::collections::HashSet::new();
        for register in Register::CATALOG {
            assert!(names.insert(register.as_str()));
            assert!(addresses.insert(register.address()));
        }
    }
}
