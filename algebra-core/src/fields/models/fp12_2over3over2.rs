use super::quadratic_extension::{QuadExtField, QuadExtParameters};
use crate::fields::{Field, Fp2, Fp2Parameters, Fp6, Fp6Parameters};
use core::marker::PhantomData;

type Fp2Params<P> = <<P as Fp12Parameters>::Fp6Params as Fp6Parameters>::Fp2Params;
type BaseFp<P> = <Fp2Params<P> as Fp2Parameters>::Fp;

/// `Fp12 = Fp6[w] / (w^2 - v)`, the BLS12 target field.
pub trait Fp12Parameters: 'static + Send + Sync + Copy {
    type Fp6Params: Fp6Parameters;

    /// Always `v = (0, 1, 0)`.
    const NONRESIDUE: Fp6<Self::Fp6Params>;

    /// `NONRESIDUE_Fp2^((p^i - 1) / 6)` for `i = 0..12`.
    const FROBENIUS_COEFF_FP12_C1: &'static [Fp2<Fp2Params<Self>>];

    /// `v * (a + b v + c v^2) = ξ c + a v + b v^2`.
    #[inline(always)]
    fn mul_fp6_by_nonresidue(fe: &Fp6<Self::Fp6Params>) -> Fp6<Self::Fp6Params> {
        let wrapped = <Self::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue(&fe.c2);
        Fp6::new(wrapped, fe.c0, fe.c1)
    }
}

pub struct Fp12ParamsWrapper<P: Fp12Parameters>(PhantomData<P>);

/// `(a + b y)^2` in `Fp2[y] / (y^2 - ξ)`, as its two coefficients.
fn fp4_square<P: Fp12Parameters>(
    a: Fp2<Fp2Params<P>>,
    b: Fp2<Fp2Params<P>>,
) -> (Fp2<Fp2Params<P>>, Fp2<Fp2Params<P>>) {
    let b2 = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue(&b.square());
    (a.square() + &b2, (a * &b).double())
}

impl<P: Fp12Parameters> QuadExtParameters for Fp12ParamsWrapper<P> {
    type BasePrimeField = BaseFp<P>;
    type BaseField = Fp6<P::Fp6Params>;
    type FrobCoeff = Fp2<Fp2Params<P>>;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 12;
    const NONRESIDUE: Fp6<P::Fp6Params> = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [Fp2<Fp2Params<P>>] = P::FROBENIUS_COEFF_FP12_C1;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Fp6<P::Fp6Params>) -> Fp6<P::Fp6Params> {
        P::mul_fp6_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Fp6<P::Fp6Params>, power: usize) {
        fe.mul_assign_by_fp2(P::FROBENIUS_COEFF_FP12_C1[power % 12]);
    }

    /// Granger and Scott, "Faster Squaring in the Cyclotomic Subgroup of
    /// Sixth Degree Extensions" (eprint 2009/565). The element is viewed as
    /// three `Fp4` coefficients, each squared independently.
    fn cyclotomic_square(fe: &Fp12<P>) -> Fp12<P> {
        let nr = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue;
        let (z0, z4, z3) = (fe.c0.c0, fe.c0.c1, fe.c0.c2);
        let (z2, z1, z5) = (fe.c1.c0, fe.c1.c1, fe.c1.c2);

        let (t0, t1) = fp4_square::<P>(z0, z1);
        let (t2, t3) = fp4_square::<P>(z2, z3);
        let (t4, t5) = fp4_square::<P>(z4, z5);

        // 3t - 2z and 3t + 2z.
        let minus = |t: Fp2<Fp2Params<P>>, z: Fp2<Fp2Params<P>>| (t - &z).double() + &t;
        let plus = |t: Fp2<Fp2Params<P>>, z: Fp2<Fp2Params<P>>| (t + &z).double() + &t;

        Fp12::new(
            Fp6::new(minus(t0, z0), minus(t2, z4), minus(t4, z3)),
            Fp6::new(plus(nr(&t5), z2), plus(t1, z1), plus(t3, z5)),
        )
    }
}

pub type Fp12<P> = QuadExtField<Fp12ParamsWrapper<P>>;

impl<P: Fp12Parameters> Fp12<P> {
    /// Multiplication by a line `c0 + c1 v + c4 v w`, as produced by an
    /// M-type twist.
    pub fn mul_by_014(
        &mut self,
        c0: &Fp2<Fp2Params<P>>,
        c1: &Fp2<Fp2Params<P>>,
        c4: &Fp2<Fp2Params<P>>,
    ) {
        let mut lo = self.c0;
        lo.mul_by_01(c0, c1);
        let mut hi = self.c1;
        hi.mul_by_1(c4);

        let mut cross = self.c0 + &self.c1;
        cross.mul_by_01(c0, &(*c1 + c4));

        self.c1 = cross - &lo - &hi;
        self.c0 = lo + &P::mul_fp6_by_nonresidue(&hi);
    }

    /// Multiplication by a line `c0 + (c3 + c4 v) w`, as produced by a
    /// D-type twist.
    pub fn mul_by_034(
        &mut self,
        c0: &Fp2<Fp2Params<P>>,
        c3: &Fp2<Fp2Params<P>>,
        c4: &Fp2<Fp2Params<P>>,
    ) {
        let mut lo = self.c0;
        lo.mul_assign_by_fp2(*c0);
        let mut hi = self.c1;
        hi.mul_by_01(c3, c4);

        let mut cross = self.c0 + &self.c1;
        cross.mul_by_01(&(*c0 + c3), c4);

        self.c1 = cross - &lo - &hi;
        self.c0 = lo + &P::mul_fp6_by_nonresidue(&hi);
    }
}
