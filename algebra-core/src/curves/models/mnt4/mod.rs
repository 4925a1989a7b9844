//! Ate pairing on MNT curves of embedding degree 4.
//!
//! `G2` lives on a quadratic twist over `Fp2 = Fp[u] / (u^2 - α)` and the
//! pairing lands in `Fp4 = Fp2[w] / (w^2 - u)`. The Miller loop is the
//! flipped one from [`mnt_ate`](super::mnt_ate).

use crate::{
    curves::{
        models::{
            mnt_ate::{self, AteG2Prepared, TwistedG1},
            ModelParameters, SWModelParameters,
        },
        PairingEngine,
    },
    error::Error,
    fields::{
        fp4::{Fp4, Fp4Parameters},
        Field, Fp2, Fp2Parameters, PrimeField, SquareRootField,
    },
};
use ark_std::marker::PhantomData;
use num_traits::Zero;
use tracing::{debug_span, instrument, trace};

pub mod g1;
pub mod g2;

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2Projective},
};

pub trait MNT4Parameters: 'static {
    /// `|t - 1|` for the Frobenius trace `t` of `E`.
    const ATE_LOOP_COUNT: &'static [u64];
    const ATE_IS_LOOP_COUNT_NEG: bool;
    /// The twist is `y^2 = x^3 + a TWIST^2 x + b TWIST^3`.
    const TWIST: Fp2<Self::Fp2Params>;
    /// `a * TWIST^2`.
    const TWIST_COEFF_A: Fp2<Self::Fp2Params>;
    /// The hard part `(p^2 + 1) / r` written as `m_1 p + m_0`: this is `m_1`,
    const FINAL_EXPONENT_LAST_CHUNK_1: &'static [u64];
    /// this is `|m_0|`,
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: &'static [u64];
    /// and this is its sign.
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool;

    type Fp: PrimeField + SquareRootField;
    type Fr: PrimeField + SquareRootField;
    type Fp2Params: Fp2Parameters<Fp = Self::Fp>;
    type Fp4Params: Fp4Parameters<Fp2Params = Self::Fp2Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp, ScalarField = Self::Fr>;
    type G2Parameters: SWModelParameters<
        BaseField = Fp2<Self::Fp2Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;
}

#[derive(Derivative)]
#[derivative(Copy(bound = ""), Clone(bound = ""), Debug(bound = ""))]
pub struct MNT4<P: MNT4Parameters>(PhantomData<fn() -> P>);

impl<P: MNT4Parameters> PairingEngine for MNT4<P> {
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type G1Projective = G1Projective<P>;
    type G1Affine = G1Affine<P>;
    type G1Prepared = G1Prepared<P>;
    type G2Projective = G2Projective<P>;
    type G2Affine = G2Affine<P>;
    type G2Prepared = G2Prepared<P>;
    type Fq = P::Fp;
    type Fqe = Fp2<P::Fp2Params>;
    type Fqk = Fp4<P::Fp4Params>;

    fn precompute_g1(p: &Self::G1Affine) -> Self::G1Prepared {
        G1Prepared::from(*p)
    }

    #[instrument(name = "mnt4 precompute g2", skip_all, level = "debug")]
    fn precompute_g2(q: &Self::G2Affine) -> Result<Self::G2Prepared, Error> {
        if q.is_zero() {
            return Ok(AteG2Prepared::default());
        }
        let prepared = AteG2Prepared::compute(
            q.x,
            q.y,
            &P::TWIST,
            &P::TWIST_COEFF_A,
            P::ATE_LOOP_COUNT,
            P::ATE_IS_LOOP_COUNT_NEG,
        )?;
        trace!(
            doublings = prepared.double_coefficients.len(),
            additions = prepared.addition_coefficients.len()
        );
        Ok(prepared)
    }

    fn multi_miller_loop<'a, I>(pairs: I) -> Result<Self::Fqk, Error>
    where
        I: IntoIterator<Item = (&'a Self::G1Prepared, &'a Self::G2Prepared)>,
    {
        let _span = debug_span!("mnt4 miller loop").entered();
        let twisted = pairs.into_iter().map(|(p, q)| {
            let p = (!p.is_zero()).then(|| TwistedG1 {
                x_twist: &p.x_twist,
                y_twist: &p.y_twist,
                x: Fp2::new(p.p.x, P::Fp::zero()),
            });
            (p, q)
        });
        mnt_ate::multi_miller_loop(twisted, P::ATE_LOOP_COUNT, P::ATE_IS_LOOP_COUNT_NEG)
    }

    /// The easy part is `f^(p^2 - 1)`, a conjugation over an inversion.
    #[instrument(name = "mnt4 final exponentiation", skip_all, level = "debug")]
    fn final_exponentiation(f: &Self::Fqk) -> Result<Self::Fqk, Error> {
        let f_inv = f.inverse()?;
        let easy = f.unitary_inverse() * &f_inv;
        let easy_inv = f_inv.unitary_inverse() * f;
        Ok(mnt_ate::final_exponentiation_hard_part(
            &easy,
            &easy_inv,
            P::FINAL_EXPONENT_LAST_CHUNK_1,
            P::FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0,
            P::FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG,
        ))
    }
}
