use crate::mnt4_298::{self, Fq, Fq2, Fr, FQ_ZERO, G1_COEFF_A_NON_RESIDUE};
use pairing_algebra_core::{
    biginteger::BigInt,
    curves::{
        mnt4::{self, MNT4Parameters},
        models::{ModelParameters, SWModelParameters},
    },
};

pub type G2Affine = mnt4::G2Affine<mnt4_298::Parameters>;
pub type G2Projective = mnt4::G2Projective<mnt4_298::Parameters>;
pub type G2Prepared = mnt4::G2Prepared<mnt4_298::Parameters>;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Parameters;

impl ModelParameters for Parameters {
    type BaseField = Fq2;
    type ScalarField = Fr;
}

impl SWModelParameters for Parameters {
    const COEFF_A: Fq2 = mnt4_298::Parameters::TWIST_COEFF_A;

    /// `b * TWIST^3 = (0, b α)`.
    const COEFF_B: Fq2 = Fq2::new(
        FQ_ZERO,
        Fq::new(BigInt([
            0x83fe40c4d1567e3b,
            0xba02dace3054677d,
            0x1453aa2f8110c177,
            0x407cb271ddb823fa,
            0x196f5debb6c,
        ])),
    );

    const COFACTOR: &'static [u64] = &[
        0xd6d67810e2cc0001,
        0x880a7ab50fe2b151,
        0xcaeec9635d32203f,
        0xa266249da7b0548e,
        0x3bcf7bcd473,
    ];

    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) =
        (G2_GENERATOR_X, G2_GENERATOR_Y);

    // a' = (aα, 0) lies in Fq.
    #[inline(always)]
    fn mul_by_a(elt: &Fq2) -> Fq2 {
        Fq2::new(G1_COEFF_A_NON_RESIDUE * &elt.c0, G1_COEFF_A_NON_RESIDUE * &elt.c1)
    }
}

const G2_GENERATOR_X: Fq2 = Fq2::new(G2_GENERATOR_X_C0, G2_GENERATOR_X_C1);
const G2_GENERATOR_Y: Fq2 = Fq2::new(G2_GENERATOR_Y_C0, G2_GENERATOR_Y_C1);

pub const G2_GENERATOR_X_C0: Fq = Fq::new(BigInt([
    0x4a56b87bf6e3bbf2,
    0x2540055a02dbe484,
    0x40fdc053176b14fe,
    0x909fe4b201a779ae,
    0x178e1c4e680,
]));

pub const G2_GENERATOR_X_C1: Fq = Fq::new(BigInt([
    0x1d9e9b91f772f70,
    0xd5a6dac8c5ab51c2,
    0xfd90c8649f6452a5,
    0x7e38904fbe0dfae2,
    0x2186470a169,
]));

pub const G2_GENERATOR_Y_C0: Fq = Fq::new(BigInt([
    0xead181e1ccdfa094,
    0xd837d925c1014f34,
    0x3728254a46d08bd6,
    0x7206e4a3c7ca1455,
    0x26768c82920,
]));

pub const G2_GENERATOR_Y_C1: Fq = Fq::new(BigInt([
    0x1063f70c6460c54,
    0x783caeb87ed305ec,
    0xa0a5df3e419c22c6,
    0xf927cfd064735d73,
    0x1f8a707e350,
]));
