use crate::{biginteger::BigInteger, error::Error};
use ark_std::{
    fmt::{Debug, Display},
    hash::Hash,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
    vec::Vec,
    UniformRand,
};
use num_traits::{One, Zero};

/// Derives the by-value, `&mut` and iterator forms of the arithmetic
/// operators from `AddAssign<&Self>`, `SubAssign<&Self>` and
/// `MulAssign<&Self>`. The generics are passed in brackets, e.g.
/// `impl_ops_from_ref!(additive [P: Params] Point<P>)`.
macro_rules! impl_ops_from_ref {
    (@binary [$($gen:tt)*] $ty:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<$($gen)*> core::ops::$Op<$ty> for $ty {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: Self) -> Self {
                core::ops::$OpAssign::$op_assign(&mut self, &rhs);
                self
            }
        }

        impl<'r, $($gen)*> core::ops::$Op<&'r $ty> for $ty {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: &'r Self) -> Self {
                core::ops::$OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<'r, $($gen)*> core::ops::$Op<&'r mut $ty> for $ty {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: &'r mut Self) -> Self {
                core::ops::$OpAssign::$op_assign(&mut self, &*rhs);
                self
            }
        }

        impl<$($gen)*> core::ops::$OpAssign<$ty> for $ty {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                core::ops::$OpAssign::$op_assign(self, &rhs)
            }
        }

        impl<'r, $($gen)*> core::ops::$OpAssign<&'r mut $ty> for $ty {
            #[inline]
            fn $op_assign(&mut self, rhs: &'r mut Self) {
                core::ops::$OpAssign::$op_assign(self, &*rhs)
            }
        }
    };
    (additive [$($gen:tt)*] $ty:ty) => {
        impl_ops_from_ref!(@binary [$($gen)*] $ty, Add, add, AddAssign, add_assign);
        impl_ops_from_ref!(@binary [$($gen)*] $ty, Sub, sub, SubAssign, sub_assign);

        impl<$($gen)*> core::iter::Sum<$ty> for $ty {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<Self as $crate::Zero>::zero(), |acc, x| acc + &x)
            }
        }

        impl<'r, $($gen)*> core::iter::Sum<&'r $ty> for $ty {
            fn sum<I: Iterator<Item = &'r Self>>(iter: I) -> Self {
                iter.fold(<Self as $crate::Zero>::zero(), |acc, x| acc + x)
            }
        }
    };
    (multiplicative [$($gen:tt)*] $ty:ty) => {
        impl_ops_from_ref!(@binary [$($gen)*] $ty, Mul, mul, MulAssign, mul_assign);

        impl<$($gen)*> core::iter::Product<$ty> for $ty {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<Self as $crate::One>::one(), |acc, x| acc * &x)
            }
        }

        impl<'r, $($gen)*> core::iter::Product<&'r $ty> for $ty {
            fn product<I: Iterator<Item = &'r Self>>(iter: I) -> Self {
                iter.fold(<Self as $crate::One>::one(), |acc, x| acc * x)
            }
        }
    };
}

/// Embeds the unsigned integers into an extension through its `c0`.
macro_rules! impl_from_ints_via_c0 {
    ($ext:ident, $params:ident) => {
        impl_from_ints_via_c0!(@each $ext, $params, u128, u64, u32, u16, u8, bool);
    };
    (@each $ext:ident, $params:ident, $($int:ty),*) => {$(
        impl<P: $params> From<$int> for $ext<P> {
            fn from(value: $int) -> Self {
                let mut out = <Self as $crate::Zero>::zero();
                out.c0 = P::BaseField::from(value);
                out
            }
        }
    )*};
}

pub mod models;
pub use self::models::*;

/// Byte order of a fixed-width field encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

/// `+`, `-`, `*` and their assigning forms against a right-hand side of
/// type `Rhs`, in the manner of `num_traits::NumOps`.
pub trait FieldOps<Rhs = Self>:
    Sized
    + Add<Rhs, Output = Self>
    + Sub<Rhs, Output = Self>
    + Mul<Rhs, Output = Self>
    + AddAssign<Rhs>
    + SubAssign<Rhs>
    + MulAssign<Rhs>
{
}

impl<T, Rhs> FieldOps<Rhs> for T where
    T: Add<Rhs, Output = T>
        + Sub<Rhs, Output = T>
        + Mul<Rhs, Output = T>
        + AddAssign<Rhs>
        + SubAssign<Rhs>
        + MulAssign<Rhs>
{
}

/// A finite field: a prime field or an extension tower over one.
pub trait Field:
    'static
    + Copy
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + Hash
    + One
    + Zero
    + UniformRand
    + Neg<Output = Self>
    + FieldOps
    + for<'a> FieldOps<&'a Self>
    + Sum<Self>
    + for<'a> Sum<&'a Self>
    + Product<Self>
    + for<'a> Product<&'a Self>
    + From<u128>
    + From<u64>
    + From<u32>
    + From<u16>
    + From<u8>
    + From<bool>
{
    type BasePrimeField: PrimeField;

    /// Degree over `BasePrimeField`.
    fn extension_degree() -> u64;

    #[must_use]
    fn double(&self) -> Self;

    fn double_in_place(&mut self) -> &mut Self;

    #[must_use]
    fn square(&self) -> Self;

    fn square_in_place(&mut self) -> &mut Self;

    /// `self^-1`, or [`Error::NonInvertible`] for zero.
    fn inverse(&self) -> Result<Self, Error>;

    /// In-place [`Field::inverse`]; `self` is unchanged on error.
    fn inverse_in_place(&mut self) -> Result<&mut Self, Error> {
        *self = self.inverse()?;
        Ok(self)
    }

    /// Raises `self` to `p^power`, `p` the characteristic.
    fn frobenius_map(&mut self, power: usize);

    /// Square-and-multiply over the little-endian limbs of `exp`.
    #[must_use]
    fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        BitIteratorBE::without_leading_zeros(exp).fold(Self::one(), |mut acc, bit| {
            acc.square_in_place();
            if bit {
                acc *= self;
            }
            acc
        })
    }

    /// Sign bit used by point compression: the parity of the first
    /// non-zero base-field coefficient, `c0` first.
    fn sgn0(&self) -> bool;

    /// Bytes in the fixed-width encoding.
    fn encoded_size() -> usize {
        Self::extension_degree() as usize * <Self::BasePrimeField as Field>::encoded_size()
    }

    /// Appends `encoded_size()` bytes to `out`. Extension elements write
    /// their coefficients in order, `c0` first.
    fn write_bytes(&self, endianness: Endianness, out: &mut Vec<u8>);

    fn to_bytes(&self, endianness: Endianness) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::encoded_size());
        self.write_bytes(endianness, &mut out);
        out
    }

    /// Inverse of [`Field::to_bytes`]. Wrong lengths and unreduced
    /// coordinates are a [`Error::DecodingError`].
    fn from_bytes(bytes: &[u8], endianness: Endianness) -> Result<Self, Error>;
}

/// Constants of a prime field in Montgomery form with `R = 2^(64 * limbs)`.
/// Constants documented as field elements are stored multiplied by `R`.
pub trait FpParameters: 'static + Send + Sync + Sized {
    type BigInt: BigInteger;

    const MODULUS: Self::BigInt;

    const MODULUS_BITS: u32;

    /// `64 * limbs - MODULUS_BITS`: high bits cleared when sampling.
    const REPR_SHAVE_BITS: u32 =
        64 * <Self::BigInt as BigInteger>::NUM_LIMBS as u32 - Self::MODULUS_BITS;

    /// `R mod p`, the Montgomery form of one.
    const R: Self::BigInt;

    /// `R^2 mod p`.
    const R2: Self::BigInt;

    /// `-p^-1 mod 2^64`.
    const INV: u64;

    /// A generator of the multiplicative group.
    const GENERATOR: Self::BigInt;

    /// Bits that always fit below the modulus.
    const CAPACITY: u32 = Self::MODULUS_BITS - 1;

    /// `s` in `p - 1 = 2^s * t` with `t` odd.
    const TWO_ADICITY: u32;

    /// `GENERATOR^t`, a primitive `2^s`-th root of unity.
    const TWO_ADIC_ROOT_OF_UNITY: Self::BigInt;

    const T: Self::BigInt;

    const T_MINUS_ONE_DIV_TWO: Self::BigInt;

    const MODULUS_MINUS_ONE_DIV_TWO: Self::BigInt;
}

pub trait PrimeField: Field<BasePrimeField = Self> + FromStr<Err = Error> + Ord {
    type Params: FpParameters<BigInt = Self::BigInt>;
    type BigInt: BigInteger;

    /// `None` unless `repr < MODULUS`.
    fn from_repr(repr: Self::BigInt) -> Option<Self>;

    /// The canonical integer in `[0, MODULUS)`.
    fn into_repr(&self) -> Self::BigInt;

    fn multiplicative_generator() -> Self;

    fn two_adic_root_of_unity() -> Self;

    fn size_in_bits() -> usize {
        Self::Params::MODULUS_BITS as usize
    }
}

pub trait SquareRootField: Field {
    fn legendre(&self) -> LegendreSymbol;

    /// A root `r` with `r^2 = self`. Which of the two is unspecified.
    #[must_use]
    fn sqrt(&self) -> Option<Self>;

    fn sqrt_in_place(&mut self) -> Option<&mut Self> {
        let root = self.sqrt()?;
        *self = root;
        Some(self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LegendreSymbol {
    Zero = 0,
    QuadraticResidue = 1,
    QuadraticNonResidue = -1,
}

impl LegendreSymbol {
    pub fn is_zero(&self) -> bool {
        *self == LegendreSymbol::Zero
    }

    pub fn is_qnr(&self) -> bool {
        *self == LegendreSymbol::QuadraticNonResidue
    }

    pub fn is_qr(&self) -> bool {
        *self == LegendreSymbol::QuadraticResidue
    }
}

/// Tonelli-Shanks for a field with multiplicative order `2^s * t`, `t` odd,
/// given `c = qnr^t` for some non-residue `qnr`
/// (<https://eprint.iacr.org/2012/685.pdf>, algorithm 5).
pub fn tonelli_shanks<F: SquareRootField, S: AsRef<[u64]>>(
    a: &F,
    qnr_to_t: F,
    two_adicity: u32,
    t_minus_one_div_two: S,
) -> Option<F> {
    match a.legendre() {
        LegendreSymbol::Zero => return Some(*a),
        LegendreSymbol::QuadraticNonResidue => return None,
        LegendreSymbol::QuadraticResidue => {},
    }

    // x = a^((t+1)/2) and b = a^t; x^2 = a * b throughout.
    let w = a.pow(t_minus_one_div_two);
    let mut x = w * a;
    let mut b = x * &w;
    let mut c = qnr_to_t;
    let mut m = two_adicity;

    while !b.is_one() {
        // least i with b^(2^i) = 1
        let mut i = 0;
        let mut b_pow = b;
        while !b_pow.is_one() {
            b_pow.square_in_place();
            i += 1;
        }

        let mut e = c;
        for _ in 0..(m - i - 1) {
            e.square_in_place();
        }
        c = e.square();
        x *= &e;
        b *= &c;
        m = i;
    }
    Some(x)
}

/// The bits of little-endian `u64` limbs, most significant first.
#[derive(Debug)]
pub struct BitIteratorBE<Slice: AsRef<[u64]>> {
    s: Slice,
    n: usize,
}

impl<Slice: AsRef<[u64]>> BitIteratorBE<Slice> {
    pub fn new(s: Slice) -> Self {
        let n = 64 * s.as_ref().len();
        BitIteratorBE { s, n }
    }

    /// Starts at the most significant set bit.
    pub fn without_leading_zeros(s: Slice) -> impl Iterator<Item = bool> {
        Self::new(s).skip_while(|bit| !bit)
    }
}

impl<Slice: AsRef<[u64]>> Iterator for BitIteratorBE<Slice> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.n = self.n.checked_sub(1)?;
        let limb = self.s.as_ref()[self.n / 64];
        Some((limb >> (self.n % 64)) & 1 == 1)
    }
}

/// Replaces every non-zero entry of `v` by its inverse, paying for one
/// field inversion (Montgomery's trick). Zeros stay zero.
pub fn batch_inversion<F: Field>(v: &mut [F]) {
    // prefix[i] is the product of the first i non-zero entries.
    let mut prefix = Vec::with_capacity(v.len());
    let mut acc = F::one();
    for x in v.iter().filter(|x| !x.is_zero()) {
        prefix.push(acc);
        acc *= x;
    }

    let mut inv = match acc.inverse() {
        Ok(inv) => inv,
        Err(_) => return,
    };

    // Walking back, `inv` is the inverse of the product of the entries up
    // to and including `x`.
    for (x, before) in v
        .iter_mut()
        .rev()
        .filter(|x| !x.is_zero())
        .zip(prefix.into_iter().rev())
    {
        let next = inv * &*x;
        *x = inv * &before;
        inv = next;
    }
}
