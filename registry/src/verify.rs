//! Consistency checks over the assembled registry data.
//!
//! All registry inputs are compile-time literals, so the only failure mode
//! is a data-entry mistake. The checks here catch the mistakes the type
//! system cannot: duplicated CPUID model numbers or names, citation strings
//! that are present but empty, and a table listed more than once in one
//! model's stack.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Register, Registry};

/// A data-entry defect detected in the static registry data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// Two model records share a CPUID model number.
    #[error("duplicate CPUID model number 0x{0:02X}")]
    DuplicateModel(u32),
    /// Two model records share a microarchitecture name.
    #[error("duplicate model name {0}")]
    DuplicateName(&'static str),
    /// A resolved citation is the empty string.
    #[error("{name} (0x{model:02X}): empty citation for {register}")]
    EmptyCitation {
        /// Microarchitecture name of the offending record.
        name: &'static str,
        /// CPUID model number of the offending record.
        model: u32,
        /// MSR name of the register with the empty citation.
        register: &'static str,
    },
    /// A model's table stack lists the same SDM table more than once.
    #[error("{name} (0x{model:02X}): {label} appears more than once in the stack")]
    DuplicateTable {
        /// Microarchitecture name of the offending record.
        name: &'static str,
        /// CPUID model number of the offending record.
        model: u32,
        /// Label of the repeated table.
        label: &'static str,
    },
}

/// Verifies the registry's static data set.
///
/// # Errors
///
/// Returns the first [`VerifyError`] found, in model declaration order.
pub fn verify(registry: &Registry) -> Result<(), VerifyError> {
    let mut models = HashSet::new();
    let mut names = HashSet::new();

    for record in &registry.models {
        if !models.insert(record.model) {
            return Err(VerifyError::DuplicateModel(record.model));
        }
        if !names.insert(record.name) {
            return Err(VerifyError::DuplicateName(record.name));
        }
        for register in Register::CATALOG {
            if record.lookup(register) == Some("") {
                return Err(VerifyError::EmptyCitation {
                    name: record.name,
                    model: record.model,
                    register: register.as_str(),
                });
            }
        }
        let mut labels = HashSet::new();
        for &label in record.sources() {
            if !labels.insert(label) {
                return Err(VerifyError::DuplicateTable {
                    name: record.name,
                    model: record.model,
                    label,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CpuModel, DocTable};

    #[test]
    fn full_registry_verifies() {
        assert_eq!(verify(Registry::full()), Ok(()));
    }

    #[test]
    fn duplicate_model_number_is_rejected() {
        let registry = Registry {
            sdm_edition: "test",
            models: vec![
                CpuModel::resolve(0x3C, "A", &[], &[]),
                CpuModel::resolve(0x3C, "B", &[], &[]),
            ],
        };
        assert_eq!(verify(&registry), Err(VerifyError::DuplicateModel(0x3C)));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let registry = Registry {
            sdm_edition: "test",
            models: vec![
                CpuModel::resolve(0x01, "A", &[], &[]),
                CpuModel::resolve(0x02, "A", &[], &[]),
            ],
        };
        assert_eq!(verify(&registry), Err(VerifyError::DuplicateName("A")));
    }

    #[test]
    fn repeated_table_in_stack_is_rejected() {
        static TABLE: DocTable = DocTable {
            label: "Table T-1",
            entries: &[(Register::PkgPowerLimit, "x")],
            notes: &[],
        };
        let registry = Registry {
            sdm_edition: "test",
            models: vec![CpuModel::resolve(0x01, "A", &[&TABLE, &TABLE], &[])],
        };
        assert_eq!(
            verify(&registry),
            Err(VerifyError::DuplicateTable {
                name: "A",
                model: 0x01,
                label: "Table T-1",
            })
        );
    }

    #[test]
    fn empty_citation_is_rejected() {
        static BAD: DocTable = DocTable {
            label: "Table T-1",
            entries: &[(Register::PkgPowerLimit, "")],
            notes: &[],
        };
        let registry = Registry {
            sdm_edition: "test",
            models: vec![CpuModel::resolve(0x01, "A", &[&BAD], &[])],
        };
        assert_eq!(
            verify(&registry),
            Err(VerifyError::EmptyCitation {
                name: "A",
                model: 0x01,
                register: "MSR_PKG_POWER_LIMIT",
            })
        );
    }
}
