use ark_std::{
    fmt,
    marker::PhantomData,
    ops::{AddAssign, MulAssign, Neg, SubAssign},
    rand::{
        distributions::{Distribution, Standard},
        Rng,
    },
    vec::Vec,
    UniformRand,
};
use num_traits::{One, Zero};

use crate::{
    error::Error,
    fields::{Endianness, Field, PrimeField},
};

/// Describes `BaseField[v] / (v^3 - NONRESIDUE)`.
pub trait CubicExtParameters: 'static + Send + Sync + Sized {
    type BasePrimeField: PrimeField;
    type BaseField: Field<BasePrimeField = Self::BasePrimeField>;
    type FrobCoeff: Field;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize;

    const NONRESIDUE: Self::BaseField;

    /// Scalings of `c1` and `c2` under `x -> x^(p^i)`.
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff];
    const FROBENIUS_COEFF_C2: &'static [Self::FrobCoeff];

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        Self::NONRESIDUE * fe
    }

    fn mul_base_field_by_frob_coeff(
        c1: &mut Self::BaseField,
        c2: &mut Self::BaseField,
        power: usize,
    );
}

/// `c0 + c1 * v + c2 * v^2`.
#[derive(Derivative)]
#[derivative(
    Default(bound = "P: CubicExtParameters"),
    Hash(bound = "P: CubicExtParameters"),
    Clone(bound = "P: CubicExtParameters"),
    Copy(bound = "P: CubicExtParameters"),
    Debug(bound = "P: CubicExtParameters"),
    PartialEq(bound = "P: CubicExtParameters"),
    Eq(bound = "P: CubicExtParameters")
)]
pub struct CubicExtField<P: CubicExtParameters> {
    pub c0: P::BaseField,
    pub c1: P::BaseField,
    pub c2: P::BaseField,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub _parameters: PhantomData<P>,
}

impl<P: CubicExtParameters> CubicExtField<P> {
    pub const fn new(c0: P::BaseField, c1: P::BaseField, c2: P::BaseField) -> Self {
        CubicExtField {
            c0,
            c1,
            c2,
            _parameters: PhantomData,
        }
    }

    pub fn mul_assign_by_base_field(&mut self, value: &P::BaseField) {
        self.c0 *= value;
        self.c1 *= value;
        self.c2 *= value;
    }

    /// Product of the three conjugates,
    /// `c0^3 + β c1^3 + β^2 c2^3 - 3β c0 c1 c2`.
    pub fn norm(&self) -> P::BaseField {
        let cube = |x: &P::BaseField| x.square() * x;
        let prod = self.c0 * &self.c1 * &self.c2;
        let beta_part = P::mul_base_field_by_nonresidue(&cube(&self.c2)) + &cube(&self.c1)
            - &(prod.double() + &prod);
        cube(&self.c0) + &P::mul_base_field_by_nonresidue(&beta_part)
    }
}

impl<P: CubicExtParameters> Zero for CubicExtField<P> {
    fn zero() -> Self {
        Self::new(Zero::zero(), Zero::zero(), Zero::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }
}

impl<P: CubicExtParameters> One for CubicExtField<P> {
    fn one() -> Self {
        Self::new(One::one(), Zero::zero(), Zero::zero())
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }
}

impl<P: CubicExtParameters> Field for CubicExtField<P> {
    type BasePrimeField = P::BasePrimeField;

    fn extension_degree() -> u64 {
        P::DEGREE_OVER_BASE_PRIME_FIELD as u64
    }

    fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double(), self.c2.double())
    }

    fn double_in_place(&mut self) -> &mut Self {
        *self = self.double();
        self
    }

    /// CH-SQR2 from Devegili, Ó hÉigeartaigh, Scott and Dahab,
    /// "Multiplication and Squaring on Pairing-Friendly Fields".
    fn square(&self) -> Self {
        let (a, b, c) = (self.c0, self.c1, self.c2);
        let a2 = a.square();
        let ab2 = (a * &b).double();
        let bc2 = (b * &c).double();
        let c2 = c.square();
        let mid = (a - &b + &c).square();

        Self::new(
            a2 + &P::mul_base_field_by_nonresidue(&bc2),
            ab2 + &P::mul_base_field_by_nonresidue(&c2),
            ab2 + &mid + &bc2 - &a2 - &c2,
        )
    }

    fn square_in_place(&mut self) -> &mut Self {
        *self = self.square();
        self
    }

    /// Adjugate over the norm: the cofactors `(A, B, C)` satisfy
    /// `self * (A + Bv + Cv^2) = c0 A + β(c2 B + c1 C)`, a base field value.
    fn inverse(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::NonInvertible);
        }
        let (c0, c1, c2) = (self.c0, self.c1, self.c2);
        let nr = P::mul_base_field_by_nonresidue;

        let a = c0.square() - &nr(&(c1 * &c2));
        let b = nr(&c2.square()) - &(c0 * &c1);
        let c = c1.square() - &(c0 * &c2);

        let det = c0 * &a + &nr(&(c2 * &b + &(c1 * &c)));
        let det_inv = det.inverse()?;
        Ok(Self::new(a * &det_inv, b * &det_inv, c * &det_inv))
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        self.c2.frobenius_map(power);
        P::mul_base_field_by_frob_coeff(&mut self.c1, &mut self.c2, power);
    }

    fn sgn0(&self) -> bool {
        [&self.c0, &self.c1, &self.c2]
            .into_iter()
            .find(|c| !c.is_zero())
            .map_or(false, |c| c.sgn0())
    }

    fn write_bytes(&self, endianness: Endianness, out: &mut Vec<u8>) {
        for c in [&self.c0, &self.c1, &self.c2] {
            c.write_bytes(endianness, out);
        }
    }

    fn from_bytes(bytes: &[u8], endianness: Endianness) -> Result<Self, Error> {
        if bytes.len() != Self::encoded_size() {
            return Err(Error::DecodingError);
        }
        let size = bytes.len() / 3;
        let coeff = |i: usize| P::BaseField::from_bytes(&bytes[i * size..(i + 1) * size], endianness);
        Ok(Self::new(coeff(0)?, coeff(1)?, coeff(2)?))
    }
}

impl_from_ints_via_c0!(CubicExtField, CubicExtParameters);

impl<P: CubicExtParameters> Neg for CubicExtField<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1, -self.c2)
    }
}

impl<P: CubicExtParameters> Distribution<CubicExtField<P>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CubicExtField<P> {
        CubicExtField::new(
            UniformRand::rand(rng),
            UniformRand::rand(rng),
            UniformRand::rand(rng),
        )
    }
}

impl<'a, P: CubicExtParameters> AddAssign<&'a Self> for CubicExtField<P> {
    fn add_assign(&mut self, rhs: &Self) {
        self.c0 += &rhs.c0;
        self.c1 += &rhs.c1;
        self.c2 += &rhs.c2;
    }
}

impl<'a, P: CubicExtParameters> SubAssign<&'a Self> for CubicExtField<P> {
    fn sub_assign(&mut self, rhs: &Self) {
        self.c0 -= &rhs.c0;
        self.c1 -= &rhs.c1;
        self.c2 -= &rhs.c2;
    }
}

impl<'a, P: CubicExtParameters> MulAssign<&'a Self> for CubicExtField<P> {
    /// Karatsuba over three coefficients: six base field products.
    fn mul_assign(&mut self, rhs: &Self) {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let (b0, b1, b2) = (rhs.c0, rhs.c1, rhs.c2);

        let v0 = a0 * &b0;
        let v1 = a1 * &b1;
        let v2 = a2 * &b2;

        // The v^3 and v^4 terms fold back through v^3 = β.
        let v3 = (a1 + &a2) * &(b1 + &b2) - &v1 - &v2;

        self.c0 = v0 + &P::mul_base_field_by_nonresidue(&v3);
        self.c1 = (a0 + &a1) * &(b0 + &b1) - &v0 - &v1 + &P::mul_base_field_by_nonresidue(&v2);
        self.c2 = (a0 + &a2) * &(b0 + &b2) - &v0 - &v2 + &v1;
    }
}

impl_ops_from_ref!(additive [P: CubicExtParameters] CubicExtField<P>);
impl_ops_from_ref!(multiplicative [P: CubicExtParameters] CubicExtField<P>);

impl<P: CubicExtParameters> fmt::Display for CubicExtField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubicExtField({}, {}, {})", self.c0, self.c1, self.c2)
    }
}
