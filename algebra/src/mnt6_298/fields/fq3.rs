use crate::mnt6_298::{Fq, FQ_ONE, FQ_ZERO};
use pairing_algebra_core::{
    biginteger::BigInt,
    fields::fp3::{Fp3, Fp3Parameters},
};

pub type Fq3 = Fp3<Fq3Parameters>;

pub struct Fq3Parameters;

impl Fp3Parameters for Fq3Parameters {
    type Fp = Fq;

    /// v^3 = 5
    const NONRESIDUE: Fq = Fq::new(BigInt([
        0x58eefd67fea995ca,
        0x12f14affbb33a004,
        0x4780323da44ac69b,
        0x88acf9bea707eed9,
        0x14bbbb859e8,
    ]));

    const TWO_ADICITY: u32 = 34;

    const T_MINUS_ONE_DIV_TWO: &'static [u64] = &[
        0x69232b75663933bd,
        0xca650efcfc00ee0,
        0x77ca3963fe36f720,
        0xe4cb46632f9bcf7e,
        0xef510453f08f9f30,
        0x9dd5b8fc72f02d83,
        0x7f8d017ed86608ab,
        0xeb2219b3697c97a4,
        0xc8663846ab96996f,
        0x833cd532053eac7d,
        0x1d5b73dfb20bd3cc,
        0x6f5f6da606b59873,
        0x62e990f43dfc42d6,
        0x6878f58,
    ];

    /// `10^T` for `p^3 - 1 = 2^TWO_ADICITY * T`; 10 is a non-square in `Fq3`.
    const QUADRATIC_NONRESIDUE_TO_T: (Fq, Fq, Fq) = (
        Fq::new(BigInt([
            0x8e5ef9a8403697c3,
            0x226b7be667877aab,
            0x5f29ed0a0a60be78,
            0x95eb6bb6c8820109,
            0x1db15f82b5,
        ])),
        FQ_ZERO,
        FQ_ZERO,
    );

    const FROBENIUS_COEFF_FP3_C1: &'static [Fq] = &[
        FQ_ONE,
        Fq::new(BigInt([
            0x1c17bb7477085b6a,
            0x2621629c22e83dbb,
            0x21c062106d949dd8,
            0x9d5b981062164ba,
            0x84ad703207,
        ])),
        Fq::new(BigInt([
            0xdc13fe3f893c203b,
            0x39a7226875df158f,
            0xe34ed98542eefb62,
            0x6f782a843d139e3c,
            0x177280f6ea9,
        ])),
    ];

    const FROBENIUS_COEFF_FP3_C2: &'static [Fq] = &[
        FQ_ONE,
        Fq::new(BigInt([
            0xdc13fe3f893c203b,
            0x39a7226875df158f,
            0xe34ed98542eefb62,
            0x6f782a843d139e3c,
            0x177280f6ea9,
        ])),
        Fq::new(BigInt([
            0x1c17bb7477085b6a,
            0x2621629c22e83dbb,
            0x21c062106d949dd8,
            0x9d5b981062164ba,
            0x84ad703207,
        ])),
    ];
}

pub const FQ3_ZERO: Fq3 = Fq3::new(FQ_ZERO, FQ_ZERO, FQ_ZERO);
pub const FQ3_ONE: Fq3 = Fq3::new(FQ_ONE, FQ_ZERO, FQ_ZERO);
