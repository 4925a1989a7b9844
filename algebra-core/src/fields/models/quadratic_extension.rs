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
    biginteger::arithmetic::find_wnaf,
    error::Error,
    fields::{Endianness, Field, LegendreSymbol, PrimeField, SquareRootField},
};

/// Describes `BaseField[u] / (u^2 - NONRESIDUE)`.
pub trait QuadExtParameters: 'static + Send + Sync + Sized {
    type BasePrimeField: PrimeField;
    type BaseField: Field<BasePrimeField = Self::BasePrimeField>;
    /// Field of the Frobenius coefficients; may be smaller than `BaseField`.
    type FrobCoeff: Field;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize;

    const NONRESIDUE: Self::BaseField;

    /// `FROBENIUS_COEFF_C1[i]` scales `c1` under `x -> x^(p^i)`.
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff];

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        Self::NONRESIDUE * fe
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Self::BaseField, power: usize);

    /// Squaring of a norm-one element. Plain squaring unless a tower knows
    /// a cheaper formula.
    fn cyclotomic_square(fe: &QuadExtField<Self>) -> QuadExtField<Self> {
        fe.square()
    }

    /// `fe^exponent` for a norm-one `fe`, walking the NAF of the exponent
    /// so that negative digits cost a conjugation instead of an inversion.
    fn cyclotomic_exp(fe: &QuadExtField<Self>, exponent: impl AsRef<[u64]>) -> QuadExtField<Self> {
        let fe_inv = fe.unitary_inverse();
        let naf = find_wnaf(exponent.as_ref());
        let mut digits = naf.iter().rev().skip_while(|d| **d == 0);

        let mut acc = match digits.next() {
            Some(d) if *d > 0 => *fe,
            Some(_) => fe_inv,
            None => return QuadExtField::one(),
        };
        for &d in digits {
            acc = Self::cyclotomic_square(&acc);
            if d > 0 {
                acc *= fe;
            } else if d < 0 {
                acc *= &fe_inv;
            }
        }
        acc
    }
}

/// `c0 + c1 * u`.
#[derive(Derivative)]
#[derivative(
    Default(bound = "P: QuadExtParameters"),
    Hash(bound = "P: QuadExtParameters"),
    Clone(bound = "P: QuadExtParameters"),
    Copy(bound = "P: QuadExtParameters"),
    Debug(bound = "P: QuadExtParameters"),
    PartialEq(bound = "P: QuadExtParameters"),
    Eq(bound = "P: QuadExtParameters")
)]
pub struct QuadExtField<P: QuadExtParameters> {
    pub c0: P::BaseField,
    pub c1: P::BaseField,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub _parameters: PhantomData<P>,
}

impl<P: QuadExtParameters> QuadExtField<P> {
    pub const fn new(c0: P::BaseField, c1: P::BaseField) -> Self {
        QuadExtField {
            c0,
            c1,
            _parameters: PhantomData,
        }
    }

    /// `c0 - c1 * u`, the image under the non-trivial automorphism over
    /// `BaseField`.
    pub fn conjugate(&mut self) {
        self.c1 = -self.c1;
    }

    /// The inverse of a norm-one element, which is its conjugate.
    pub fn unitary_inverse(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// See [`QuadExtParameters::cyclotomic_exp`].
    pub fn cyclotomic_exp(&self, exponent: impl AsRef<[u64]>) -> Self {
        P::cyclotomic_exp(self, exponent)
    }

    pub fn cyclotomic_square(&self) -> Self {
        P::cyclotomic_square(self)
    }

    /// `self * conj(self) = c0^2 - NONRESIDUE * c1^2`.
    pub fn norm(&self) -> P::BaseField {
        self.c0.square() - &P::mul_base_field_by_nonresidue(&self.c1.square())
    }

    pub fn mul_assign_by_basefield(&mut self, element: &P::BaseField) {
        self.c0 *= element;
        self.c1 *= element;
    }
}

impl<P: QuadExtParameters> Zero for QuadExtField<P> {
    fn zero() -> Self {
        Self::new(Zero::zero(), Zero::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }
}

impl<P: QuadExtParameters> One for QuadExtField<P> {
    fn one() -> Self {
        Self::new(One::one(), Zero::zero())
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }
}

impl<P: QuadExtParameters> Field for QuadExtField<P> {
    type BasePrimeField = P::BasePrimeField;

    fn extension_degree() -> u64 {
        P::DEGREE_OVER_BASE_PRIME_FIELD as u64
    }

    fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double())
    }

    fn double_in_place(&mut self) -> &mut Self {
        *self = self.double();
        self
    }

    /// Complex squaring: `(a + bu)^2 = (a - b)(a - βb) + ab + βab + 2abu`.
    fn square(&self) -> Self {
        let (a, b) = (self.c0, self.c1);
        let ab = a * &b;
        let beta_ab = P::mul_base_field_by_nonresidue(&ab);
        let mixed = (a - &b) * &(a - &P::mul_base_field_by_nonresidue(&b));
        Self::new(mixed + &ab + &beta_ab, ab.double())
    }

    fn square_in_place(&mut self) -> &mut Self {
        *self = self.square();
        self
    }

    /// `conj(self) / norm(self)`.
    fn inverse(&self) -> Result<Self, Error> {
        let norm_inv = self.norm().inverse()?;
        Ok(Self::new(self.c0 * &norm_inv, -(self.c1 * &norm_inv)))
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        P::mul_base_field_by_frob_coeff(&mut self.c1, power);
    }

    fn sgn0(&self) -> bool {
        if self.c0.is_zero() {
            self.c1.sgn0()
        } else {
            self.c0.sgn0()
        }
    }

    fn write_bytes(&self, endianness: Endianness, out: &mut Vec<u8>) {
        self.c0.write_bytes(endianness, out);
        self.c1.write_bytes(endianness, out);
    }

    fn from_bytes(bytes: &[u8], endianness: Endianness) -> Result<Self, Error> {
        if bytes.len() != Self::encoded_size() {
            return Err(Error::DecodingError);
        }
        let (lo, hi) = bytes.split_at(bytes.len() / 2);
        Ok(Self::new(
            P::BaseField::from_bytes(lo, endianness)?,
            P::BaseField::from_bytes(hi, endianness)?,
        ))
    }
}

impl<P: QuadExtParameters> SquareRootField for QuadExtField<P>
where
    P::BaseField: SquareRootField,
{
    /// An element is a square exactly when its norm is.
    fn legendre(&self) -> LegendreSymbol {
        self.norm().legendre()
    }

    fn sqrt(&self) -> Option<Self> {
        let zero = P::BaseField::zero();
        if self.c1.is_zero() {
            // A base field element is a square in the extension: if `c0`
            // has no root below, `c0 / NONRESIDUE` does, times `u`.
            if let Some(root) = self.c0.sqrt() {
                return Some(Self::new(root, zero));
            }
            let scaled = self.c0 * &P::NONRESIDUE.inverse().ok()?;
            return scaled.sqrt().map(|root| Self::new(zero, root));
        }
        if !self.legendre().is_qr() {
            return None;
        }

        // <https://eprint.iacr.org/2012/685.pdf>, algorithm 8: with
        // alpha = sqrt(norm), one of (c0 ± alpha) / 2 is a square x0^2 and
        // the root is x0 + c1 / (2 x0) u.
        let half = P::BaseField::one().double().inverse().ok()?;
        let alpha = self.norm().sqrt()?;
        let mut delta = (self.c0 + &alpha) * &half;
        if delta.legendre().is_qnr() {
            delta -= &alpha;
        }
        let x0 = delta.sqrt()?;
        let x1 = self.c1 * &half * &x0.inverse().ok()?;
        Some(Self::new(x0, x1))
    }
}

impl_from_ints_via_c0!(QuadExtField, QuadExtParameters);

impl<P: QuadExtParameters> Neg for QuadExtField<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl<P: QuadExtParameters> Distribution<QuadExtField<P>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> QuadExtField<P> {
        QuadExtField::new(UniformRand::rand(rng), UniformRand::rand(rng))
    }
}

impl<'a, P: QuadExtParameters> AddAssign<&'a Self> for QuadExtField<P> {
    fn add_assign(&mut self, rhs: &Self) {
        self.c0 += &rhs.c0;
        self.c1 += &rhs.c1;
    }
}

impl<'a, P: QuadExtParameters> SubAssign<&'a Self> for QuadExtField<P> {
    fn sub_assign(&mut self, rhs: &Self) {
        self.c0 -= &rhs.c0;
        self.c1 -= &rhs.c1;
    }
}

impl<'a, P: QuadExtParameters> MulAssign<&'a Self> for QuadExtField<P> {
    /// Karatsuba: three base field products.
    fn mul_assign(&mut self, rhs: &Self) {
        let a0b0 = self.c0 * &rhs.c0;
        let a1b1 = self.c1 * &rhs.c1;
        let cross = (self.c0 + &self.c1) * &(rhs.c0 + &rhs.c1);
        self.c0 = a0b0 + &P::mul_base_field_by_nonresidue(&a1b1);
        self.c1 = cross - &a0b0 - &a1b1;
    }
}

impl_ops_from_ref!(additive [P: QuadExtParameters] QuadExtField<P>);
impl_ops_from_ref!(multiplicative [P: QuadExtParameters] QuadExtField<P>);

impl<P: QuadExtParameters> fmt::Display for QuadExtField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuadExtField({} + {} * u)", self.c0, self.c1)
    }
}
