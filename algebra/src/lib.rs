//! Concrete pairing-friendly curves over the generic models of
//! `pairing-algebra-core`:
//!
//! - BLS12-381, an M-type sextic twist with `Fq12` as target field;
//! - MNT4-298 and MNT6-298, the 298-bit MNT cycle, whose base and scalar
//!   fields are swapped with respect to each other.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_import_braces, trivial_casts, bare_trait_objects)]
#![deny(non_shorthand_field_patterns, unused_attributes, unused_extern_crates)]
#![deny(renamed_and_removed_lints, unused_allocation, unused_comparisons)]
#![deny(unused_must_use, unused_mut, unused_unsafe)]
#![forbid(unsafe_code)]

pub use pairing_algebra_core::*;

#[cfg(test)]
#[macro_use]
pub(crate) mod tests;

#[cfg(feature = "bls12_381")]
pub mod bls12_381;
#[cfg(feature = "bls12_381")]
pub use bls12_381::Bls12_381;

#[cfg(any(feature = "mnt4_298", feature = "mnt6_298"))]
pub mod mnt4_298;
#[cfg(feature = "mnt4_298")]
pub use mnt4_298::MNT4_298;

#[cfg(feature = "mnt6_298")]
pub mod mnt6_298;
#[cfg(feature = "mnt6_298")]
pub use mnt6_298::MNT6_298;
