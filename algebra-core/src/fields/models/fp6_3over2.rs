use super::cubic_extension::{CubicExtField, CubicExtParameters};
use crate::fields::{Fp2, Fp2Parameters};
use core::marker::PhantomData;

type BaseFp<P> = <<P as Fp6Parameters>::Fp2Params as Fp2Parameters>::Fp;

/// `Fp6 = Fp2[v] / (v^3 - NONRESIDUE)`, the middle layer of the BLS12 tower.
pub trait Fp6Parameters: 'static + Send + Sync + Copy {
    type Fp2Params: Fp2Parameters;

    const NONRESIDUE: Fp2<Self::Fp2Params>;

    const FROBENIUS_COEFF_FP6_C1: &'static [Fp2<Self::Fp2Params>];
    const FROBENIUS_COEFF_FP6_C2: &'static [Fp2<Self::Fp2Params>];

    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fp2<Self::Fp2Params>) -> Fp2<Self::Fp2Params> {
        Self::NONRESIDUE * fe
    }
}

pub struct Fp6ParamsWrapper<P: Fp6Parameters>(PhantomData<P>);

impl<P: Fp6Parameters> CubicExtParameters for Fp6ParamsWrapper<P> {
    type BasePrimeField = BaseFp<P>;
    type BaseField = Fp2<P::Fp2Params>;
    type FrobCoeff = Fp2<P::Fp2Params>;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 6;
    const NONRESIDUE: Fp2<P::Fp2Params> = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [Fp2<P::Fp2Params>] = P::FROBENIUS_COEFF_FP6_C1;
    const FROBENIUS_COEFF_C2: &'static [Fp2<P::Fp2Params>] = P::FROBENIUS_COEFF_FP6_C2;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Fp2<P::Fp2Params>) -> Fp2<P::Fp2Params> {
        P::mul_fp2_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(
        c1: &mut Fp2<P::Fp2Params>,
        c2: &mut Fp2<P::Fp2Params>,
        power: usize,
    ) {
        *c1 *= &P::FROBENIUS_COEFF_FP6_C1[power % 6];
        *c2 *= &P::FROBENIUS_COEFF_FP6_C2[power % 6];
    }
}

pub type Fp6<P> = CubicExtField<Fp6ParamsWrapper<P>>;

impl<P: Fp6Parameters> Fp6<P> {
    pub fn mul_assign_by_fp2(&mut self, other: Fp2<P::Fp2Params>) {
        self.mul_assign_by_base_field(&other);
    }

    /// Multiplication by `b1 * v`.
    pub fn mul_by_1(&mut self, b1: &Fp2<P::Fp2Params>) {
        let shifted = P::mul_fp2_by_nonresidue(&(self.c2 * b1));
        *self = Self::new(shifted, self.c0 * b1, self.c1 * b1);
    }

    /// Multiplication by `b0 + b1 * v`: Karatsuba with the `v^2`
    /// coefficient known to be zero, five products instead of six.
    pub fn mul_by_01(&mut self, b0: &Fp2<P::Fp2Params>, b1: &Fp2<P::Fp2Params>) {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let v0 = a0 * b0;
        let v1 = a1 * b1;

        let c0 = v0 + &P::mul_fp2_by_nonresidue(&((a1 + &a2) * b1 - &v1));
        let c1 = (a0 + &a1) * &(*b0 + b1) - &v0 - &v1;
        let c2 = (a0 + &a2) * b0 - &v0 + &v1;
        *self = Self::new(c0, c1, c2);
    }
}
