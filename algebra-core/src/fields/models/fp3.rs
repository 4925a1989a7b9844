use super::cubic_extension::{CubicExtField, CubicExtParameters};
use crate::fields::{tonelli_shanks, LegendreSymbol, PrimeField, SquareRootField};
use core::marker::PhantomData;

/// `Fp3 = Fp[v] / (v^3 - NONRESIDUE)`, together with the constants its
/// Tonelli-Shanks square root needs.
pub trait Fp3Parameters: 'static + Send + Sync {
    type Fp: PrimeField + SquareRootField;

    const NONRESIDUE: Self::Fp;

    const FROBENIUS_COEFF_FP3_C1: &'static [Self::Fp];
    const FROBENIUS_COEFF_FP3_C2: &'static [Self::Fp];

    /// `s` in `p^3 - 1 = 2^s * t`, `t` odd.
    const TWO_ADICITY: u32;
    const T_MINUS_ONE_DIV_TWO: &'static [u64];
    /// A quadratic non-residue of `Fp3` raised to `t`.
    const QUADRATIC_NONRESIDUE_TO_T: (Self::Fp, Self::Fp, Self::Fp);

    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        Self::NONRESIDUE * fe
    }
}

pub struct Fp3ParamsWrapper<P: Fp3Parameters>(PhantomData<P>);

impl<P: Fp3Parameters> CubicExtParameters for Fp3ParamsWrapper<P> {
    type BasePrimeField = P::Fp;
    type BaseField = P::Fp;
    type FrobCoeff = P::Fp;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 3;
    const NONRESIDUE: P::Fp = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [P::Fp] = P::FROBENIUS_COEFF_FP3_C1;
    const FROBENIUS_COEFF_C2: &'static [P::Fp] = P::FROBENIUS_COEFF_FP3_C2;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &P::Fp) -> P::Fp {
        P::mul_fp_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(c1: &mut P::Fp, c2: &mut P::Fp, power: usize) {
        *c1 *= &P::FROBENIUS_COEFF_FP3_C1[power % 3];
        *c2 *= &P::FROBENIUS_COEFF_FP3_C2[power % 3];
    }
}

pub type Fp3<P> = CubicExtField<Fp3ParamsWrapper<P>>;

impl<P: Fp3Parameters> Fp3<P> {
    pub fn mul_assign_by_fp(&mut self, value: &P::Fp) {
        self.mul_assign_by_base_field(value);
    }

    pub fn qnr_to_t() -> Self {
        let (c0, c1, c2) = P::QUADRATIC_NONRESIDUE_TO_T;
        Self::new(c0, c1, c2)
    }
}

impl<P: Fp3Parameters> SquareRootField for Fp3<P> {
    /// The norm to `Fp` preserves squareness.
    fn legendre(&self) -> LegendreSymbol {
        self.norm().legendre()
    }

    fn sqrt(&self) -> Option<Self> {
        tonelli_shanks(self, Self::qnr_to_t(), P::TWO_ADICITY, P::T_MINUS_ONE_DIV_TWO)
    }
}
