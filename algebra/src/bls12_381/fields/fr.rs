use pairing_algebra_core::{
    biginteger::BigInt,
    fields::{Fp256, FpParameters},
};

pub type Fr = Fp256<FrParameters>;

pub struct FrParameters;

impl FpParameters for FrParameters {
    type BigInt = BigInt<4>;

    /// p = 52435875175126190479447740508185965837690552500527637822603658699938581184513
    const MODULUS: Self::BigInt = BigInt([
        0xffffffff00000001,
        0x53bda402fffe5bfe,
        0x3339d80809a1d805,
        0x73eda753299d7d48,
    ]);

    const MODULUS_BITS: u32 = 255;

    const R: Self::BigInt = BigInt([
        0x1fffffffe,
        0x5884b7fa00034802,
        0x998c4fefecbc4ff5,
        0x1824b159acc5056f,
    ]);

    const R2: Self::BigInt = BigInt([
        0xc999e990f3f29c6d,
        0x2b6cedcb87925c23,
        0x5d314967254398f,
        0x748d9d99f59ff11,
    ]);

    const INV: u64 = 0xfffffffeffffffff;

    /// The integer 7.
    const GENERATOR: Self::BigInt = BigInt([
        0xefffffff1,
        0x17e363d300189c0f,
        0xff9c57876f8457b0,
        0x351332208fc5a8c4,
    ]);

    const TWO_ADICITY: u32 = 32;

    const TWO_ADIC_ROOT_OF_UNITY: Self::BigInt = BigInt([
        0xb9b58d8c5f0e466a,
        0x5b1b4c801819d7ec,
        0xaf53ae352a31e64,
        0x5bf3adda19e9b27b,
    ]);

    const MODULUS_MINUS_ONE_DIV_TWO: Self::BigInt = BigInt([
        0x7fffffff80000000,
        0xa9ded2017fff2dff,
        0x199cec0404d0ec02,
        0x39f6d3a994cebea4,
    ]);

    /// `p - 1 = 2^TWO_ADICITY * T`.
    const T: Self::BigInt = BigInt([
        0xfffe5bfeffffffff,
        0x9a1d80553bda402,
        0x299d7d483339d808,
        0x73eda753,
    ]);

    const T_MINUS_ONE_DIV_TWO: Self::BigInt = BigInt([
        0x7fff2dff7fffffff,
        0x4d0ec02a9ded201,
        0x94cebea4199cec04,
        0x39f6d3a9,
    ]);
}

pub const FR_ONE: Fr = Fr::new(FrParameters::R);
pub const FR_ZERO: Fr = Fr::new(BigInt([0; 4]));
