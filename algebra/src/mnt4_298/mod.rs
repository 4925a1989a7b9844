//! MNT4-298: embedding degree 4, G2 on a quadratic twist over `Fq2`.
//!
//! Its scalar field is the base field of MNT6-298 and vice versa; both
//! prime fields live here and `mnt6_298` re-exports them swapped.

#[cfg(feature = "mnt4_298")]
mod curves;
mod fields;

#[cfg(feature = "mnt4_298")]
pub use curves::*;
pub use fields::*;
