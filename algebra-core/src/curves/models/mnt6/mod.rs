//! Ate pairing on MNT curves of embedding degree 6.
//!
//! `G2` lives on a quadratic twist over `Fp3 = Fp[u] / (u^3 - α)` and the
//! pairing lands in `Fp6 = Fp3[w] / (w^2 - u)`. The Miller loop is the
//! flipped one from [`mnt_ate`](super::mnt_ate), as for MNT4.

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
        fp6_2over3::{Fp6, Fp6Parameters},
        Field, Fp3, Fp3Parameters, PrimeField, SquareRootField,
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

pub trait MNT6Parameters: 'static {
    /// `|t - 1|` for the Frobenius trace `t` of `E`.
    const ATE_LOOP_COUNT: &'static [u64];
    const ATE_IS_LOOP_COUNT_NEG: bool;
    /// The twist is `y^2 = x^3 + a TWIST^2 x + b TWIST^3`.
    const TWIST: Fp3<Self::Fp3Params>;
    /// `a * TWIST^2`.
    const TWIST_COEFF_A: Fp3<Self::Fp3Params>;
    /// The hard part `(p^2 - p + 1) / r` written as `m_1 p + m_0`: this is
    /// `m_1`,
    const FINAL_EXPONENT_LAST_CHUNK_1: &'static [u64];
    /// this is `|m_0|`,
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: &'static [u64];
    /// and this is its sign.
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool;

    type Fp: PrimeField + SquareRootField;
    type Fr: PrimeField + SquareRootField;
    type Fp3Params: Fp3Parameters<Fp = Self::Fp>;
    type Fp6Params: Fp6Parameters<Fp3Params = Self::Fp3Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp, ScalarField = Self::Fr>;
    type G2Parameters: SWModelParameters<
        BaseField = Fp3<Self::Fp3Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;
}

#[derive(Derivative)]
#[derivative(Copy(bound = ""), Clone(bound = ""), Debug(bound = ""))]
pub struct MNT6<P: MNT6Parameters>(PhantomData<fn() -> P>);

impl<P: MNT6Parameters> MNT6<P> {
    /// `f^((p^3 - 1)(p + 1))`.
    fn easy_part(f: &Fp6<P::Fp6Params>, f_inv: &Fp6<P::Fp6Params>) -> Fp6<P::Fp6Params> {
        let g = f.unitary_inverse() * f_inv;
        let mut g_p = g;
        g_p.frobenius_map(1);
        g_p * &g
    }
}

impl<P: MNT6Parameters> PairingEngine for MNT6<P> {
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type G1Projective = G1Projective<P>;
    type G1Affine = G1Affine<P>;
    type G1Prepared = G1Prepared<P>;
    type G2Projective = G2Projective<P>;
    type G2Affine = G2Affine<P>;
    type G2Prepared = G2Prepared<P>;
    type Fq = P::Fp;
    type Fqe = Fp3<P::Fp3Params>;
    type Fqk = Fp6<P::Fp6Params>;

    fn precompute_g1(p: &Self::G1Affine) -> Self::G1Prepared {
        G1Prepared::from(*p)
    }

    #[instrument(name = "mnt6 precompute g2", skip_all, level = "debug")]
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
        let _span = debug_span!("mnt6 miller loop").entered();
        let zero = P::Fp::zero();
        let twisted = pairs.into_iter().map(move |(p, q)| {
            let p = (!p.is_zero()).then(|| TwistedG1 {
                x_twist: &p.x_twist,
                y_twist: &p.y_twist,
                x: Fp3::new(p.p.x, zero, zero),
            });
            (p, q)
        });
        mnt_ate::multi_miller_loop(twisted, P::ATE_LOOP_COUNT, P::ATE_IS_LOOP_COUNT_NEG)
    }

    #[instrument(name = "mnt6 final exponentiation", skip_all, level = "debug")]
    fn final_exponentiation(f: &Self::Fqk) -> Result<Self::Fqk, Error> {
        let f_inv = f.inverse()?;
        Ok(mnt_ate::final_exponentiation_hard_part(
            &Self::easy_part(f, &f_inv),
            &Self::easy_part(&f_inv, f),
            P::FINAL_EXPONENT_LAST_CHUNK_1,
            P::FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0,
            P::FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG,
        ))
    }
}
