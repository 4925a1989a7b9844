use crate::mnt4_298::{Fq, Fq2, Fq2Parameters, FQ_ONE, FQ_ZERO};
use pairing_algebra_core::{
    biginteger::BigInt,
    fields::fp4::{Fp4, Fp4Parameters},
};

pub type Fq4 = Fp4<Fq4Parameters>;

pub struct Fq4Parameters;

impl Fp4Parameters for Fq4Parameters {
    type Fp2Params = Fq2Parameters;

    const NONRESIDUE: Fq2 = Fq2::new(FQ_ZERO, FQ_ONE);

    /// `17^((p^i - 1) / 4)`: 1, then
    /// 7684163245453501615621351552473337069301082060976805004625011694147890954040864167002308,
    /// `p - 1` and
    /// 468238122923807824137727898100575114475823797181717920390930116882062371863914936316755773.
    const FROBENIUS_COEFF_FP4_C1: &'static [Fq] = &[
        FQ_ONE,
        Fq::new(BigInt([
            0xe426145080bf2ee7,
            0xcd02cc9816da8a8d,
            0xe07b85760f50a074,
            0x3fb62479f705d41e,
            0x3772430e00d,
        ])),
        Fq::new(BigInt([
            0xb049bbdf19027ba5,
            0x57cb69486d69801d,
            0x50f43dc341885a9,
            0x794de405433502f7,
            0x1fbd57fa0b0,
        ])),
        Fq::new(BigInt([
            0xe4e6c209f0a6d11a,
            0x74a716c63a458384,
            0xea7343ed4dc29075,
            0x62b00023b0aa806f,
            0x45d38bf466,
        ])),
    ];
}
