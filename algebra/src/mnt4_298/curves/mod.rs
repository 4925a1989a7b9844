use pairing_algebra_core::{
    biginteger::BigInt,
    curves::models::mnt4::{MNT4Parameters, MNT4},
    fields::Fp2,
};

use crate::mnt4_298::{Fq, Fq2, Fq2Parameters, Fq4Parameters, Fr, FQ_ONE, FQ_ZERO};

pub mod g1;
pub mod g2;

#[cfg(test)]
mod tests;

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2Projective},
};

pub type MNT4_298 = MNT4<Parameters>;

pub struct Parameters;

impl MNT4Parameters for Parameters {
    const TWIST: Fp2<Self::Fp2Params> = Fq2::new(FQ_ZERO, FQ_ONE);
    /// `(a α, 0) = (34, 0)`.
    const TWIST_COEFF_A: Fp2<Self::Fp2Params> = Fq2::new(G1_COEFF_A_NON_RESIDUE, FQ_ZERO);

    /// `689871209842287392837045615510547309923794944`.
    const ATE_LOOP_COUNT: &'static [u64] = &[0xdc9a1b671660000, 0x46609756bec2a33f, 0x1eef55];
    const ATE_IS_LOOP_COUNT_NEG: bool = false;
    const FINAL_EXPONENT_LAST_CHUNK_1: &'static [u64] = &[0x1];
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool = false;
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: &'static [u64] = &[0xdc9a1b671660001, 0x46609756bec2a33f, 0x1eef55];
    type Fp = Fq;
    type Fr = Fr;
    type Fp2Params = Fq2Parameters;
    type Fp4Params = Fq4Parameters;
    type G1Parameters = self::g1::Parameters;
    type G2Parameters = self::g2::Parameters;
}

/// `a α = 2 * 17`.
pub const G1_COEFF_A_NON_RESIDUE: Fq = Fq::new(BigInt([
    0x8228f515183d9429,
    0x3697e4617d5e0773,
    0x63b1ef20fd2ae0e5,
    0xf13c6f00850be1ca,
    0x39408106d24,
]));
