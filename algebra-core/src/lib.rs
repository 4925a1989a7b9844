#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_import_braces, trivial_casts, bare_trait_objects)]
#![deny(non_shorthand_field_patterns, unused_attributes, unused_extern_crates)]
#![deny(renamed_and_removed_lints, unused_allocation, unused_comparisons)]
#![deny(unused_must_use, unused_mut, unused_unsafe)]
#![forbid(unsafe_code)]

#[cfg(all(test, not(feature = "std")))]
#[macro_use]
extern crate std;

#[cfg(not(feature = "std"))]
#[macro_use]
#[doc(hidden)]
pub extern crate alloc;

#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
#[doc(hidden)]
pub use alloc::{vec, vec::Vec};

#[cfg(feature = "std")]
#[allow(unused_imports)]
#[doc(hidden)]
pub use std::{vec, vec::Vec};

#[macro_use]
extern crate derivative;

#[macro_use]
pub mod fields;
pub use self::fields::*;

pub mod biginteger;
pub use self::biginteger::*;

pub mod curves;
pub use self::curves::*;

pub mod error;
pub use self::error::*;

pub mod msm;
pub use self::msm::*;

pub use ark_std::UniformRand;
pub use num_traits::{One, Zero};

pub mod prelude {
    pub use crate::biginteger::BigInteger;

    pub use crate::fields::{Endianness, Field, FpParameters, PrimeField, SquareRootField};

    pub use crate::curves::{AffineCurve, PairingEngine, PointEncoding, PointFormat, ProjectiveCurve};

    pub use ark_std::UniformRand;

    pub use num_traits::{One, Zero};

    pub use crate::error::*;
}

/// Returns `ceil(log2(x))`, and `0` for `x <= 1`.
pub fn log2(x: usize) -> u32 {
    if x <= 1 {
        return 0;
    }

    let n = (x - 1).leading_zeros();
    core::mem::size_of::<usize>() as u32 * 8 - n
}
