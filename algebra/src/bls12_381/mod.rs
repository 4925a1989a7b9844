//! BLS12-381: `x = -0xd201000000010000`, G1 over `Fq`, G2 over `Fq2` on an
//! M-type twist, target group in `Fq12`.

mod curves;
mod fields;

pub use curves::*;
pub use fields::*;
