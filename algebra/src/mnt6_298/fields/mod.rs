pub use crate::mnt4_298::{
    Fq as Fr, FqParameters as FrParameters, Fr as Fq, FrParameters as FqParameters,
    FQ_ONE as FR_ONE, FQ_ZERO as FR_ZERO, FR_ONE as FQ_ONE, FR_ZERO as FQ_ZERO,
};

pub mod fq3;
pub use self::fq3::*;

pub mod fq6;
pub use self::fq6::*;
