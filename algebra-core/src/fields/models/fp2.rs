use super::quadratic_extension::{QuadExtField, QuadExtParameters};
use crate::fields::{PrimeField, SquareRootField};
use core::marker::PhantomData;

/// `Fp2 = Fp[u] / (u^2 - NONRESIDUE)`.
pub trait Fp2Parameters: 'static + Send + Sync {
    type Fp: PrimeField + SquareRootField;

    const NONRESIDUE: Self::Fp;

    /// `NONRESIDUE^((p^i - 1) / 2)` for `i = 0, 1`.
    const FROBENIUS_COEFF_FP2_C1: &'static [Self::Fp];

    /// Towers with a small non-residue such as `-1` override this with
    /// additions.
    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        Self::NONRESIDUE * fe
    }
}

pub struct Fp2ParamsWrapper<P: Fp2Parameters>(PhantomData<P>);

impl<P: Fp2Parameters> QuadExtParameters for Fp2ParamsWrapper<P> {
    type BasePrimeField = P::Fp;
    type BaseField = P::Fp;
    type FrobCoeff = P::Fp;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 2;
    const NONRESIDUE: P::Fp = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [P::Fp] = P::FROBENIUS_COEFF_FP2_C1;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &P::Fp) -> P::Fp {
        P::mul_fp_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(fe: &mut P::Fp, power: usize) {
        *fe *= &P::FROBENIUS_COEFF_FP2_C1[power % 2];
    }
}

pub type Fp2<P> = QuadExtField<Fp2ParamsWrapper<P>>;

impl<P: Fp2Parameters> Fp2<P> {
    pub fn mul_assign_by_fp(&mut self, other: &P::Fp) {
        self.mul_assign_by_basefield(other);
    }
}
