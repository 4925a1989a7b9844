use super::quadratic_extension::{QuadExtField, QuadExtParameters};
use crate::fields::{Fp2, Fp2Parameters};
use core::marker::PhantomData;

type BaseFp<P> = <<P as Fp4Parameters>::Fp2Params as Fp2Parameters>::Fp;

/// `Fp4 = Fp2[w] / (w^2 - u)`, the MNT4 target field.
pub trait Fp4Parameters: 'static + Send + Sync {
    type Fp2Params: Fp2Parameters;

    /// Always `u = (0, 1)`.
    const NONRESIDUE: Fp2<Self::Fp2Params>;

    /// `NONRESIDUE_Fp^((p^i - 1) / 4)` for `i = 0..4`, in `Fp`.
    const FROBENIUS_COEFF_FP4_C1: &'static [BaseFp<Self>];

    /// `u * (a + b u) = NONRESIDUE_Fp * b + a u`.
    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fp2<Self::Fp2Params>) -> Fp2<Self::Fp2Params> {
        Fp2::new(Self::Fp2Params::mul_fp_by_nonresidue(&fe.c1), fe.c0)
    }
}

pub struct Fp4ParamsWrapper<P: Fp4Parameters>(PhantomData<P>);

impl<P: Fp4Parameters> QuadExtParameters for Fp4ParamsWrapper<P> {
    type BasePrimeField = BaseFp<P>;
    type BaseField = Fp2<P::Fp2Params>;
    type FrobCoeff = BaseFp<P>;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 4;
    const NONRESIDUE: Fp2<P::Fp2Params> = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [BaseFp<P>] = P::FROBENIUS_COEFF_FP4_C1;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Fp2<P::Fp2Params>) -> Fp2<P::Fp2Params> {
        P::mul_fp2_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Fp2<P::Fp2Params>, power: usize) {
        fe.mul_assign_by_fp(&P::FROBENIUS_COEFF_FP4_C1[power % 4]);
    }
}

pub type Fp4<P> = QuadExtField<Fp4ParamsWrapper<P>>;

impl<P: Fp4Parameters> Fp4<P> {
    pub fn mul_by_fp(&mut self, element: &BaseFp<P>) {
        self.c0.mul_assign_by_fp(element);
        self.c1.mul_assign_by_fp(element);
    }

    pub fn mul_by_fp2(&mut self, element: &Fp2<P::Fp2Params>) {
        self.mul_assign_by_basefield(element);
    }
}
