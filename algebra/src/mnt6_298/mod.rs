//! MNT6-298: embedding degree 6, G2 on a cubic twist over `Fq3`.

mod curves;
mod fields;

pub use curves::*;
pub use fields::*;
