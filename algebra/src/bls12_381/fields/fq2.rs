use crate::bls12_381::{Fq, FQ_ONE, FQ_ZERO};
use pairing_algebra_core::{
    biginteger::BigInt,
    fields::{Fp2, Fp2Parameters},
};

pub type Fq2 = Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// u^2 = -1
    const NONRESIDUE: Fq = Fq::new(BigInt([
        0x43f5fffffffcaaae,
        0x32b7fff2ed47fffd,
        0x7e83a49a2e99d69,
        0xeca8f3318332bb7a,
        0xef148d1ea0f4c069,
        0x40ab3263eff0206,
    ]));

    /// `NONRESIDUE^((p^i - 1) / 2)`.
    const FROBENIUS_COEFF_FP2_C1: &'static [Fq] = &[
        // (-1)^((p^0 - 1) / 2)
        FQ_ONE,
        // (-1)^((p^1 - 1) / 2)
        Fq::new(BigInt([
            0x43f5fffffffcaaae,
            0x32b7fff2ed47fffd,
            0x7e83a49a2e99d69,
            0xeca8f3318332bb7a,
            0xef148d1ea0f4c069,
            0x40ab3263eff0206,
        ])),
    ];

    #[inline(always)]
    fn mul_fp_by_nonresidue(fp: &Self::Fp) -> Self::Fp {
        -(*fp)
    }
}

pub const FQ2_ZERO: Fq2 = Fq2::new(FQ_ZERO, FQ_ZERO);
pub const FQ2_ONE: Fq2 = Fq2::new(FQ_ONE, FQ_ZERO);
