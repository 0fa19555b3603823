//! RAPL register citations from the Intel SDM encoded as typed Rust data.
//!
//! The `rapl-sdm-registry` crate records, for each Intel CPU model that
//! supports RAPL, which table or section of the Intel Software Developer's
//! Manual (SDM), Volume 4, documents each of the eleven tracked RAPL MSRs.
//! Each model's record is resolved from the ordered stack of SDM tables its
//! section specifies, with later tables overriding earlier ones, and the
//! whole data set is serialized to delimited text, JSON, and Markdown.
//!
//! # Entry Point
//!
//! ```
//! let registry = rapl_sdm_registry::Registry::full();
//! assert_eq!(registry.model_count(), 30);
//! ```
//!
//! # Serialization
//!
//! ```
//! use rapl_sdm_registry::serializer::delimited::{to_delimited, Delimiter};
//!
//! let registry = rapl_sdm_registry::Registry::full();
//! let tsv = to_delimited(registry, Delimiter::Tab);
//! assert!(tsv.starts_with("Model\tName\tMSR_RAPL_POWER_UNIT"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod families;
pub mod model;
pub mod serializer;
pub mod tables;
pub mod verify;

pub use model::{citations, CpuModel, DocTable, Register, Registry};

impl Registry {
    /// Returns the complete registry: all 30 CPU model records resolved from
    /// their SDM table stacks, in SDM section order.
    ///
    /// Assembly order follows the family sections of SDM Volume 4:
    /// `silvermont → goldmont → sandybridge → ivybridge → haswell →
    ///  broadwell → skylake → xeon_phi`
    #[must_use]
    pub fn full() -> &'static Registry {
        static REGISTRY: std::sync::OnceLock<Registry> = std::sync::OnceLock::new();
        REGISTRY.get_or_init(|| Registry {
            sdm_edition: "Intel Software Developer's Manual, Volume 4 - May 2019",
            models: [
                families::silvermont::models(),
                families::goldmont::models(),
                families::sandybridge::models(),
                families::ivybridge::models(),
                families::haswell::models(),
                families::broadwell::models(),
                families::skylake::models(),
                families::xeon_phi::models(),
            ]
            .into_iter()
            .flatten()
            .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_count() {
        // 30 models: 6 Silvermont/Airmont + 4 Goldmont/Tremont + 2 Sandy
        // Bridge + 2 Ivy Bridge + 4 Haswell + 4 Broadwell + 6 Skylake/Kaby
        // Lake/Cannon Lake + 2 Xeon Phi.
        assert_eq!(Registry::full().model_count(), 30);
    }

    #[test]
    fn register_count() {
        assert_eq!(Registry::full().register_count(), 11);
    }

    #[test]
    fn all_model_numbers_unique() {
        let mut numbers = std::collections::HashSet::new();
        for model in &Registry::full().models {
            assert!(
                numbers.insert(model.model),
                "Duplicate model number: {:#04X}",
                model.model
            );
        }
    }

    #[test]
    fn all_model_names_unique() {
        let mut names = std::collections::HashSet::new();
        for model in &Registry::full().models {
            assert!(names.insert(model.name), "Duplicate name: {}", model.name);
        }
    }

    #[test]
    fn find_model_by_cpuid() {
        let registry = Registry::full();
        let haswell = registry.find_model(0x3C);
        assert_eq!(haswell.map(|m| m.name), Some("HASWELL_CORE"));
        assert!(registry.find_model(0xFF).is_none());
    }

    #[test]
    fn emission_order_matches_sdm_section_order() {
        let registry = Registry::full();
        assert_eq!(registry.models[0].name, "ATOM_SILVERMONT");
        let last = registry.models.last().map(|m| m.name);
        assert_eq!(last, Some("XEON_PHI_KNM"));
    }

    #[test]
    fn platform_registers_only_resolved_from_skylake_on() {
        // The PSys registers enter the data set with Table 2-39.
        for model in &Registry::full().models {
            let has_platform = model.lookup(Register::PlatformEnergyCounter).is_some();
            let skylake_era = matches!(
                model.model,
                0x4E | 0x55 | 0x5E | 0x8E | 0x9E | 0x66
            );
            assert_eq!(has_platform, skylake_era, "{}", model.name);
        }
    }

    #[test]
    fn server_dram_esu_overrides_generic_section() {
        // Tables 2-32/2-36/2-45 override the DRAM section with the fixed
        // 15.3 uJ energy status unit on server parts.
        for cpuid in [0x3F, 0x4F, 0x56, 0x55] {
            let model = Registry::full().find_model(cpuid);
            assert_eq!(
                model.map(|m| m.citation(Register::DramEnergyStatus)),
                Some(citations::DRAM_ESU_15_3),
                "{cpuid:#04X}"
            );
        }
    }

    #[test]
    fn reserved_pp0_on_server_parts() {
        for cpuid in [0x3F, 0x4F, 0x56, 0x55] {
            let model = Registry::full().find_model(cpuid);
            assert_eq!(
                model.map(|m| m.citation(Register::Pp0EnergyStatus)),
                Some(citations::RESERVED),
                "{cpuid:#04X}"
            );
        }
    }

    #[test]
    fn silvermont_x_takes_table_2_10_variant() {
        let model = Registry::full().find_model(0x4D);
        assert_eq!(
            model.map(|m| m.citation(Register::RaplPowerUnit)),
            Some("Table 2-10 (Same as 2-8)")
        );
    }
}
