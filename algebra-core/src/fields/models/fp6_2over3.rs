use super::quadratic_extension::{QuadExtField, QuadExtParameters};
use crate::fields::{Fp3, Fp3Parameters};
use core::marker::PhantomData;

type BaseFp<P> = <<P as Fp6Parameters>::Fp3Params as Fp3Parameters>::Fp;

/// `Fp6 = Fp3[w] / (w^2 - v)`, the MNT6 target field.
pub trait Fp6Parameters: 'static + Send + Sync {
    type Fp3Params: Fp3Parameters;

    /// Always `v = (0, 1, 0)`.
    const NONRESIDUE: Fp3<Self::Fp3Params>;

    /// `NONRESIDUE_Fp^((p^i - 1) / 6)` for `i = 0..6`, in `Fp`.
    const FROBENIUS_COEFF_FP6_C1: &'static [BaseFp<Self>];

    /// `v * (a + b v + c v^2) = NONRESIDUE_Fp * c + a v + b v^2`.
    #[inline(always)]
    fn mul_fp3_by_nonresidue(fe: &Fp3<Self::Fp3Params>) -> Fp3<Self::Fp3Params> {
        Fp3::new(Self::Fp3Params::mul_fp_by_nonresidue(&fe.c2), fe.c0, fe.c1)
    }
}

pub struct Fp6ParamsWrapper<P: Fp6Parameters>(PhantomData<P>);

impl<P: Fp6Parameters> QuadExtParameters for Fp6ParamsWrapper<P> {
    type BasePrimeField = BaseFp<P>;
    type BaseField = Fp3<P::Fp3Params>;
    type FrobCoeff = BaseFp<P>;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 6;
    const NONRESIDUE: Fp3<P::Fp3Params> = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [BaseFp<P>] = P::FROBENIUS_COEFF_FP6_C1;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Fp3<P::Fp3Params>) -> Fp3<P::Fp3Params> {
        P::mul_fp3_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Fp3<P::Fp3Params>, power: usize) {
        fe.mul_assign_by_fp(&P::FROBENIUS_COEFF_FP6_C1[power % 6]);
    }
}

pub type Fp6<P> = QuadExtField<Fp6ParamsWrapper<P>>;

impl<P: Fp6Parameters> Fp6<P> {
    pub fn mul_by_fp3(&mut self, element: &Fp3<P::Fp3Params>) {
        self.mul_assign_by_basefield(element);
    }
}
