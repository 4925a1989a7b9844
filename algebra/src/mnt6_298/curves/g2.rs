use crate::mnt6_298::{self, g1, Fq, Fq3, Fr, FQ_ZERO};
use pairing_algebra_core::{
    biginteger::BigInt,
    curves::{
        mnt6::{self, MNT6Parameters},
        models::{ModelParameters, SWModelParameters},
    },
};

pub type G2Affine = mnt6::G2Affine<mnt6_298::Parameters>;
pub type G2Projective = mnt6::G2Projective<mnt6_298::Parameters>;
pub type G2Prepared = mnt6::G2Prepared<mnt6_298::Parameters>;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Parameters;

impl ModelParameters for Parameters {
    type BaseField = Fq3;
    type ScalarField = Fr;
}

/// `a α`.
pub const MUL_BY_A_C0: Fq = Fq::new(BigInt([
    0xa07b458bf1496fab,
    0xde8254e6541f9fb4,
    0xb1b5cc7bf859c3ea,
    0xf83c4d58364645a9,
    0x30a29b55fa2,
]));


impl SWModelParameters for Parameters {
    const COEFF_A: Fq3 = mnt6_298::Parameters::TWIST_COEFF_A;

    /// `b * TWIST^3 = (b α, 0, 0)`.
    const COEFF_B: Fq3 = Fq3::new(
        Fq::new(BigInt([
            0x79a4c2cea3c84026,
            0x4b50cad0f3233baa,
            0x9ded82770e7a4410,
            0x5ade8b105838b95d,
            0xe4036e0a3a,
        ])),
        FQ_ZERO,
        FQ_ZERO,
    );

    const COFACTOR: &'static [u64] = &[
        0xd4719dec00000000,
        0x94104081d31771ef,
        0x3f4d65a5b22e7f61,
        0x33124e28403e0b41,
        0xf096e99fb6a637b9,
        0x95209870c0f7ffbb,
        0xf292d23620350240,
        0xe98b8b1cd454f1a1,
        0x3a10ace4c868d35e,
        0xdf94b,
    ];

    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) =
        (G2_GENERATOR_X, G2_GENERATOR_Y);

    /// `a u^2 (c0 + c1 u + c2 u^2) = (a α c1, a α c2, a c0)`.
    #[inline(always)]
    fn mul_by_a(elt: &Fq3) -> Fq3 {
        Fq3::new(
            MUL_BY_A_C0 * &elt.c1,
            MUL_BY_A_C0 * &elt.c2,
            g1::Parameters::COEFF_A * &elt.c0,
        )
    }
}

const G2_GENERATOR_X: Fq3 =
    Fq3::new(G2_GENERATOR_X_C0, G2_GENERATOR_X_C1, G2_GENERATOR_X_C2);
const G2_GENERATOR_Y: Fq3 =
    Fq3::new(G2_GENERATOR_Y_C0, G2_GENERATOR_Y_C1, G2_GENERATOR_Y_C2);

pub const G2_GENERATOR_X_C0: Fq = Fq::new(BigInt([
    0x15ca12fc5d551ea7,
    0x9e0b2b2b2bb8b979,
    0xe6e66283ad5a786a,
    0x46ba0aedcc383c07,
    0x243853463ed,
]));

pub const G2_GENERATOR_X_C1: Fq = Fq::new(BigInt([
    0x2c0e3dd7be176130,
    0x27a15d879495904b,
    0x6f1f0d2dd1502a82,
    0x9782ee3c70834da,
    0x2c28bb71862,
]));

pub const G2_GENERATOR_X_C2: Fq = Fq::new(BigInt([
    0xf3e5f4eb9631e1f1,
    0x657801e80c50778,
    0x2d2abb128fee90f3,
    0x72e58e4c3aa3598c,
    0x100b8026b9d,
]));

pub const G2_GENERATOR_Y_C0: Fq = Fq::new(BigInt([
    0xb1cddd6c64a67c5f,
    0xa01e90d89aa5d2ba,
    0x39e9a733be49ed1,
    0x9438f46f63d3264f,
    0x12cc928ef10,
]));

pub const G2_GENERATOR_Y_C1: Fq = Fq::new(BigInt([
    0xa1529b7265ad4be7,
    0x21c5e827cf309306,
    0x9b3d647bd8c70b22,
    0x42835bf373e4b213,
    0xd3c77c9ff9,
]));

pub const G2_GENERATOR_Y_C2: Fq = Fq::new(BigInt([
    0x610557ec4b58b8df,
    0x51a23865b52045f1,
    0x9dcfd915a09da608,
    0x6d65c95f69adb700,
    0x2d3c3d195a1,
]));
