use crate::mnt4_298::{Fq, FQ_ONE, FQ_ZERO};
use pairing_algebra_core::{
    biginteger::BigInt,
    fields::fp2::{Fp2, Fp2Parameters},
};

pub type Fq2 = Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// u^2 = 17
    const NONRESIDUE: Fq = Fq::new(BigInt([
        0x259ae5b7c4d1ca15,
        0xbc20e3dfe73f0ac3,
        0x97505c422d1f08e7,
        0x49d149cf165e1b2c,
        0x3a87fe6a0cc,
    ]));

    /// `1` and `p - 1`.
    const FROBENIUS_COEFF_FP2_C1: &'static [Fq] = &[
        FQ_ONE,
        Fq::new(BigInt([
            0xb049bbdf19027ba5,
            0x57cb69486d69801d,
            0x50f43dc341885a9,
            0x794de405433502f7,
            0x1fbd57fa0b0,
        ])),
    ];
}

pub const FQ2_ZERO: Fq2 = Fq2::new(FQ_ZERO, FQ_ZERO);
pub const FQ2_ONE: Fq2 = Fq2::new(FQ_ONE, FQ_ZERO);
