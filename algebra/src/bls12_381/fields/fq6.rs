use crate::bls12_381::{Fq, Fq2, Fq2Parameters, FQ2_ONE, FQ2_ZERO, FQ_ONE, FQ_ZERO};
use pairing_algebra_core::{
    biginteger::BigInt,
    fields::{Fp6, Fp6Parameters},
};

pub type Fq6 = Fp6<Fq6Parameters>;

#[derive(Clone, Copy)]
pub struct Fq6Parameters;

impl Fp6Parameters for Fq6Parameters {
    type Fp2Params = Fq2Parameters;

    /// ξ = u + 1
    const NONRESIDUE: Fq2 = Fq2::new(FQ_ONE, FQ_ONE);

    const FROBENIUS_COEFF_FP6_C1: &'static [Fq2] = &[
        // ξ^((p^0 - 1) / 3)
        FQ2_ONE,
        // ξ^((p^1 - 1) / 3)
        Fq2::new(
            FQ_ZERO,
            Fq::new(BigInt([
                0xcd03c9e48671f071,
                0x5dab22461fcda5d2,
                0x587042afd3851b95,
                0x8eb60ebe01bacb9e,
                0x3f97d6e83d050d2,
                0x18f0206554638741,
            ])),
        ),
        // ξ^((p^2 - 1) / 3)
        Fq2::new(
            Fq::new(BigInt([
                0x30f1361b798a64e8,
                0xf3b8ddab7ece5a2a,
                0x16a8ca3ac61577f7,
                0xc26a2ff874fd029b,
                0x3636b76660701c6e,
                0x51ba4ab241b6160,
            ])),
            FQ_ZERO,
        ),
        // ξ^((p^3 - 1) / 3)
        Fq2::new(FQ_ZERO, FQ_ONE),
        // ξ^((p^4 - 1) / 3)
        Fq2::new(
            Fq::new(BigInt([
                0xcd03c9e48671f071,
                0x5dab22461fcda5d2,
                0x587042afd3851b95,
                0x8eb60ebe01bacb9e,
                0x3f97d6e83d050d2,
                0x18f0206554638741,
            ])),
            FQ_ZERO,
        ),
        // ξ^((p^5 - 1) / 3)
        Fq2::new(
            FQ_ZERO,
            Fq::new(BigInt([
                0x30f1361b798a64e8,
                0xf3b8ddab7ece5a2a,
                0x16a8ca3ac61577f7,
                0xc26a2ff874fd029b,
                0x3636b76660701c6e,
                0x51ba4ab241b6160,
            ])),
        ),
    ];

    const FROBENIUS_COEFF_FP6_C2: &'static [Fq2] = &[
        // ξ^(2 (p^0 - 1) / 3)
        FQ2_ONE,
        // ξ^(2 (p^1 - 1) / 3)
        Fq2::new(
            Fq::new(BigInt([
                0x890dc9e4867545c3,
                0x2af322533285a5d5,
                0x50880866309b7e2c,
                0xa20d1b8c7e881024,
                0x14e4f04fe2db9068,
                0x14e56d3f1564853a,
            ])),
            FQ_ZERO,
        ),
        // ξ^(2 (p^2 - 1) / 3)
        Fq2::new(
            Fq::new(BigInt([
                0xcd03c9e48671f071,
                0x5dab22461fcda5d2,
                0x587042afd3851b95,
                0x8eb60ebe01bacb9e,
                0x3f97d6e83d050d2,
                0x18f0206554638741,
            ])),
            FQ_ZERO,
        ),
        // ξ^(2 (p^3 - 1) / 3)
        Fq2::new(
            Fq::new(BigInt([
                0x43f5fffffffcaaae,
                0x32b7fff2ed47fffd,
                0x7e83a49a2e99d69,
                0xeca8f3318332bb7a,
                0xef148d1ea0f4c069,
                0x40ab3263eff0206,
            ])),
            FQ_ZERO,
        ),
        // ξ^(2 (p^4 - 1) / 3)
        Fq2::new(
            Fq::new(BigInt([
                0x30f1361b798a64e8,
                0xf3b8ddab7ece5a2a,
                0x16a8ca3ac61577f7,
                0xc26a2ff874fd029b,
                0x3636b76660701c6e,
                0x51ba4ab241b6160,
            ])),
            FQ_ZERO,
        ),
        // ξ^(2 (p^5 - 1) / 3)
        Fq2::new(
            Fq::new(BigInt([
                0xecfb361b798dba3a,
                0xc100ddb891865a2c,
                0xec08ff1232bda8e,
                0xd5c13cc6f1ca4721,
                0x47222a47bf7b5c04,
                0x110f184e51c5f59,
            ])),
            FQ_ZERO,
        ),
    ];

    /// `(a + bu)(1 + u) = (a - b) + (a + b)u`.
    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fq2) -> Fq2 {
        Fq2::new(fe.c0 - &fe.c1, fe.c0 + &fe.c1)
    }
}

pub const FQ6_ZERO: Fq6 = Fq6::new(FQ2_ZERO, FQ2_ZERO, FQ2_ZERO);
pub const FQ6_ONE: Fq6 = Fq6::new(FQ2_ONE, FQ2_ZERO, FQ2_ZERO);
