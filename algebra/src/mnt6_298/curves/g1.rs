use crate::mnt6_298::{self, Fq, Fr};
use pairing_algebra_core::{
    biginteger::BigInt,
    curves::{
        mnt6,
        models::{ModelParameters, SWModelParameters},
    },
};

pub type G1Affine = mnt6::G1Affine<mnt6_298::Parameters>;
pub type G1Projective = mnt6::G1Projective<mnt6_298::Parameters>;
pub type G1Prepared = mnt6::G1Prepared<mnt6_298::Parameters>;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Parameters;

impl ModelParameters for Parameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl SWModelParameters for Parameters {
    /// `11`.
    const COEFF_A: Fq = Fq::new(BigInt([
        0xb9b2411bfd0eafef,
        0xc61a10fadd9fecbd,
        0x89f128e59811f3fb,
        0x980c0f780adadabb,
        0x9ba1f11320,
    ]));

    /// `106700080510851735677967319632585352256454251201367587890185989362936000262606668469523074`.
    const COEFF_B: Fq = Fq::new(BigInt([
        0xa94cb16ed8e733b,
        0xe1ed15e8119bae6,
        0xae927592157c8121,
        0x990dbcbc6661cf95,
        0xecff0892ef,
    ]));

    const COFACTOR: &'static [u64] = &[1];

    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) =
        (G1_GENERATOR_X, G1_GENERATOR_Y);
}

/// 336685752883082228109289846353937104185698209371404178342968838739115829740084426881123453
pub const G1_GENERATOR_X: Fq = Fq::new(BigInt([
    0x1a663562f74e1d24,
    0xc1d1d583fccd1b79,
    0xda077538a9763df2,
    0x70c4a4ea36aa01d9,
    0x86537578a8,
]));

/// 402596290139780989709332707716568920777622032073762749862342374583908837063963736098549800
pub const G1_GENERATOR_Y: Fq = Fq::new(BigInt([
    0x7ad5bfd16dcfffb2,
    0x88dd739252215070,
    0x43f137a8b517b339,
    0x9a7fac709a8c463c,
    0x3140fbc3593,
]));
