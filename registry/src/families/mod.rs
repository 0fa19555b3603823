//! Per-family CPU model records.
//!
//! Each sub-module encodes the models of one microarchitecture family,
//! resolved from the ordered SDM table stacks their sections specify.
//! Modules are listed in SDM section order; see
//! [`crate::Registry::full`] for the assembly sequence.

pub mod silvermont;
pub mod goldmont;
pub mod sandybridge;
pub mod ivybridge;
pub mod haswell;
pub mod broadwell;
pub mod skylake;
pub mod xeon_phi;
