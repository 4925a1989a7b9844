use crate::{
    curves::{
        models::{ModelParameters, SWModelParameters},
        PairingEngine,
    },
    error::Error,
    fields::{
        fp12_2over3over2::{Fp12, Fp12Parameters},
        fp2::Fp2Parameters,
        fp6_3over2::Fp6Parameters,
        BitIteratorBE, Field, Fp2, PrimeField, SquareRootField,
    },
};
use ark_std::{marker::PhantomData, vec::Vec};
use num_traits::One;
use tracing::{debug_span, instrument, trace};

pub mod g1;
pub mod g2;

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2Projective},
};
use self::g2::EllCoeff;

/// Which sextic twist carries G2, fixing where the line coefficients land
/// in `Fp12`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TwistType {
    M,
    D,
}

pub trait Bls12Parameters: 'static {
    /// `|x|`, the absolute value of the curve parameter.
    const X: &'static [u64];
    const X_IS_NEGATIVE: bool;
    const TWIST_TYPE: TwistType;

    type Fp: PrimeField + SquareRootField;
    type Fp2Params: Fp2Parameters<Fp = Self::Fp>;
    type Fp6Params: Fp6Parameters<Fp2Params = Self::Fp2Params>;
    type Fp12Params: Fp12Parameters<Fp6Params = Self::Fp6Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp>;
    type G2Parameters: SWModelParameters<
        BaseField = Fp2<Self::Fp2Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;
}

#[derive(Derivative)]
#[derivative(Copy(bound = ""), Clone(bound = ""), Debug(bound = ""))]
pub struct Bls12<P: Bls12Parameters>(PhantomData<fn() -> P>);

impl<P: Bls12Parameters> Bls12<P> {
    /// Multiplies `f` by the line with coefficients `coeffs` evaluated at
    /// `p`. Only three of the six `Fp2` slots of a line are non-zero; which
    /// ones depends on the twist.
    fn ell(f: &mut Fp12<P::Fp12Params>, coeffs: &EllCoeff<Fp2<P::Fp2Params>>, p: &G1Affine<P>) {
        let (mut c0, mut c1, mut c2) = *coeffs;
        c1.mul_assign_by_fp(&p.x);
        match P::TWIST_TYPE {
            TwistType::M => {
                c2.mul_assign_by_fp(&p.y);
                f.mul_by_014(&c0, &c1, &c2);
            },
            TwistType::D => {
                c0.mul_assign_by_fp(&p.y);
                f.mul_by_034(&c0, &c1, &c2);
            },
        }
    }

    /// `f^x`, `f` in the cyclotomic subgroup, where a conjugation inverts.
    fn exp_by_x(f: &Fp12<P::Fp12Params>) -> Fp12<P::Fp12Params> {
        let mut f = f.cyclotomic_exp(P::X);
        if P::X_IS_NEGATIVE {
            f.conjugate();
        }
        f
    }
}

impl<P: Bls12Parameters> PairingEngine for Bls12<P> {
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type Fq = P::Fp;
    type Fqe = Fp2<P::Fp2Params>;
    type Fqk = Fp12<P::Fp12Params>;
    type G1Projective = G1Projective<P>;
    type G1Affine = G1Affine<P>;
    type G1Prepared = G1Prepared<P>;
    type G2Projective = G2Projective<P>;
    type G2Affine = G2Affine<P>;
    type G2Prepared = G2Prepared<P>;

    fn precompute_g1(p: &Self::G1Affine) -> Self::G1Prepared {
        G1Prepared::from(*p)
    }

    #[instrument(name = "bls12 precompute g2", skip_all, level = "debug")]
    fn precompute_g2(q: &Self::G2Affine) -> Result<Self::G2Prepared, Error> {
        let prepared = G2Prepared::from_affine(*q)?;
        trace!(coefficients = prepared.ell_coeffs.len());
        Ok(prepared)
    }

    fn multi_miller_loop<'a, I>(pairs: I) -> Result<Self::Fqk, Error>
    where
        I: IntoIterator<Item = (&'a Self::G1Prepared, &'a Self::G2Prepared)>,
    {
        let expected = G2Prepared::<P>::coefficient_count();
        let mut active = Vec::new();
        for (p, q) in pairs {
            let found = q.ell_coeffs.len();
            if !q.is_zero() && found != expected {
                return Err(Error::InvalidPrecomputation { expected, found });
            }
            if !p.is_zero() && !q.is_zero() {
                active.push((p, q.ell_coeffs.iter()));
            }
        }

        let _span = debug_span!("bls12 miller loop", pairs = active.len()).entered();
        let mut f = Self::Fqk::one();

        for bit in BitIteratorBE::without_leading_zeros(P::X).skip(1) {
            f.square_in_place();
            // One doubling line, then an addition line on set bits.
            for _ in 0..=bit as usize {
                for (p, coeffs) in active.iter_mut() {
                    if let Some(c) = coeffs.next() {
                        Self::ell(&mut f, c, &p.0);
                    }
                }
            }
        }

        // Conjugation stands in for the inversion a negative x calls for;
        // the two differ by a factor the final exponentiation removes.
        if P::X_IS_NEGATIVE {
            f.conjugate();
        }
        Ok(f)
    }

    #[instrument(name = "bls12 final exponentiation", skip_all, level = "debug")]
    fn final_exponentiation(f: &Self::Fqk) -> Result<Self::Fqk, Error> {
        let frobenius = |mut a: Self::Fqk, power: usize| {
            a.frobenius_map(power);
            a
        };

        // Easy part, f^((p^6 - 1)(p^2 + 1)). Afterwards r is unitary and
        // conjugation inverts it.
        let r = f.unitary_inverse() * &f.inverse()?;
        let r = frobenius(r, 2) * &r;

        // Hard part, eprint 2016/130, table 1.
        let y0 = r.cyclotomic_square().unitary_inverse();
        let y5 = Self::exp_by_x(&r);
        let y1 = y5.cyclotomic_square();
        let y3 = y0 * &y5;
        let y0 = Self::exp_by_x(&y3);
        let y2 = Self::exp_by_x(&y0);
        let y4 = Self::exp_by_x(&y2) * &y1;
        let y1 = Self::exp_by_x(&y4) * &y3.unitary_inverse() * &r;

        let y0 = frobenius(y0 * &r, 3);
        let y4 = frobenius(y4 * &r.unitary_inverse(), 1);
        let y5 = frobenius(y5 * &y2, 2);
        Ok(y5 * &y0 * &y4 * &y1)
    }
}
