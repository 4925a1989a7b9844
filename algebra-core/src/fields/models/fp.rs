//! Prime fields in Montgomery form over `N` limbs.

use ark_std::{
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    ops::{AddAssign, MulAssign, Neg, SubAssign},
    rand::{
        distributions::{Distribution, Standard},
        Rng,
    },
    str::FromStr,
    vec::Vec,
};
use num_traits::{One, Zero};

use crate::{
    biginteger::{
        arithmetic::{adc, mac},
        BigInt, BigInteger,
    },
    error::Error,
    fields::{
        tonelli_shanks, Endianness, Field, FpParameters, LegendreSymbol, PrimeField,
        SquareRootField,
    },
};

/// An element `a` of `Z/pZ` stored as `a * R mod p`, always below `p`.
#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Hash(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Fp<P, const N: usize>(
    pub BigInt<N>,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub PhantomData<P>,
);

pub type Fp256<P> = Fp<P, 4>;
pub type Fp320<P> = Fp<P, 5>;
pub type Fp384<P> = Fp<P, 6>;

/// Montgomery product `a * b / 2^(64N) mod p` by coarsely integrated
/// operand scanning. Inputs below `p` give an output below `p`.
fn montgomery_product<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    p: &[u64; N],
    inv: u64,
) -> [u64; N] {
    let mut t = [0u64; N];
    // t[N]; t[N + 1] only lives within one round as `top`.
    let mut hi = 0u64;

    for &b_i in b.iter() {
        let mut carry = 0;
        for (t_j, &a_j) in t.iter_mut().zip(a) {
            let (lo, c) = mac(*t_j, a_j, b_i, carry);
            *t_j = lo;
            carry = c;
        }
        let (sum, top) = adc(hi, carry, 0);
        hi = sum;

        // Add m * p so that the lowest limb vanishes, then drop it.
        let m = t[0].wrapping_mul(inv);
        let (_, mut carry) = mac(t[0], m, p[0], 0);
        for j in 1..N {
            let (lo, c) = mac(t[j], m, p[j], carry);
            t[j - 1] = lo;
            carry = c;
        }
        let (sum, c) = adc(hi, carry, 0);
        t[N - 1] = sum;
        hi = top + c;
    }

    let (mut out, modulus) = (BigInt(t), BigInt(*p));
    if hi != 0 || out >= modulus {
        out.sub_noborrow(&modulus);
    }
    out.0
}

impl<P, const N: usize> Fp<P, N> {
    /// Wraps limbs that are already in Montgomery form.
    #[inline]
    pub const fn new(element: BigInt<N>) -> Self {
        Fp(element, PhantomData)
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> Fp<P, N> {
    #[inline]
    fn is_valid(&self) -> bool {
        self.0 < P::MODULUS
    }

    #[inline]
    fn mont_mul(&self, other: &BigInt<N>) -> BigInt<N> {
        BigInt(montgomery_product(&self.0 .0, &other.0, &P::MODULUS.0, P::INV))
    }

    /// Reduces `value` and moves it into Montgomery form.
    fn from_u64(value: u64) -> Self {
        let mut repr = BigInt::from(value);
        while repr >= P::MODULUS {
            repr.sub_noborrow(&P::MODULUS);
        }
        Fp::new(Fp::<P, N>::new(repr).mont_mul(&P::R2))
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> Zero for Fp<P, N> {
    #[inline]
    fn zero() -> Self {
        Fp::new(BigInt::default())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> One for Fp<P, N> {
    #[inline]
    fn one() -> Self {
        Fp::new(P::R)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == P::R
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> Field for Fp<P, N> {
    type BasePrimeField = Self;

    fn extension_degree() -> u64 {
        1
    }

    #[inline]
    fn double(&self) -> Self {
        let mut out = *self;
        out.double_in_place();
        out
    }

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        let copy = *self;
        *self += &copy;
        self
    }

    #[inline]
    fn square(&self) -> Self {
        Fp::new(self.mont_mul(&self.0))
    }

    #[inline]
    fn square_in_place(&mut self) -> &mut Self {
        *self = self.square();
        self
    }

    /// Fermat inversion, `self^(p - 2)`.
    fn inverse(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::NonInvertible);
        }
        let mut exponent = P::MODULUS;
        exponent.sub_noborrow(&BigInt::from(2));
        Ok(self.pow(exponent))
    }

    fn frobenius_map(&mut self, _: usize) {}

    #[inline]
    fn sgn0(&self) -> bool {
        self.into_repr().is_odd()
    }

    #[inline]
    fn encoded_size() -> usize {
        ((P::MODULUS_BITS + 7) / 8) as usize
    }

    fn write_bytes(&self, endianness: Endianness, out: &mut Vec<u8>) {
        let size = Self::encoded_size();
        let repr = self.into_repr();
        match endianness {
            Endianness::Big => {
                let bytes = repr.to_bytes_be();
                out.extend_from_slice(&bytes[bytes.len() - size..]);
            },
            Endianness::Little => out.extend_from_slice(&repr.to_bytes_le()[..size]),
        }
    }

    fn from_bytes(bytes: &[u8], endianness: Endianness) -> Result<Self, Error> {
        if bytes.len() != Self::encoded_size() {
            return Err(Error::DecodingError);
        }
        let repr = match endianness {
            Endianness::Little => BigInt::from_bytes_le(bytes),
            Endianness::Big => {
                let le: Vec<u8> = bytes.iter().rev().copied().collect();
                BigInt::from_bytes_le(&le)
            },
        };
        repr.and_then(Self::from_repr).ok_or(Error::DecodingError)
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> PrimeField for Fp<P, N> {
    type Params = P;
    type BigInt = BigInt<N>;

    fn from_repr(repr: BigInt<N>) -> Option<Self> {
        let raw = Fp::<P, N>::new(repr);
        raw.is_valid().then(|| Fp::new(raw.mont_mul(&P::R2)))
    }

    fn into_repr(&self) -> BigInt<N> {
        self.mont_mul(&BigInt::from(1))
    }

    fn multiplicative_generator() -> Self {
        Fp::new(P::GENERATOR)
    }

    fn two_adic_root_of_unity() -> Self {
        Fp::new(P::TWO_ADIC_ROOT_OF_UNITY)
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> SquareRootField for Fp<P, N> {
    /// Euler's criterion.
    fn legendre(&self) -> LegendreSymbol {
        let s = self.pow(P::MODULUS_MINUS_ONE_DIV_TWO);
        if s.is_zero() {
            LegendreSymbol::Zero
        } else if s.is_one() {
            LegendreSymbol::QuadraticResidue
        } else {
            LegendreSymbol::QuadraticNonResidue
        }
    }

    fn sqrt(&self) -> Option<Self> {
        // GENERATOR^T is a non-residue raised to the odd T.
        tonelli_shanks(
            self,
            Self::two_adic_root_of_unity(),
            P::TWO_ADICITY,
            P::T_MINUS_ONE_DIV_TWO,
        )
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> Ord for Fp<P, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.into_repr().cmp(&other.into_repr())
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> PartialOrd for Fp<P, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> From<u64> for Fp<P, N> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> From<u128> for Fp<P, N> {
    fn from(value: u128) -> Self {
        let two_to_64 = Self::from(u64::MAX) + Self::one();
        Self::from((value >> 64) as u64) * two_to_64 + Self::from(value as u64)
    }
}

macro_rules! fp_from_small {
    ($($int:ty),*) => {$(
        impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> From<$int> for Fp<P, N> {
            fn from(value: $int) -> Self {
                Self::from_u64(u64::from(value))
            }
        }
    )*};
}

fp_from_small!(u32, u16, u8, bool);

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> Distribution<Fp<P, N>> for Standard {
    /// Rejection sampling over the limbs with the unused top bits cleared.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp<P, N> {
        loop {
            let mut limbs: [u64; N] = core::array::from_fn(|_| rng.gen());
            limbs[N - 1] &= u64::MAX >> P::REPR_SHAVE_BITS;
            let candidate = Fp::new(BigInt(limbs));
            if candidate.is_valid() {
                return candidate;
            }
        }
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> FromStr for Fp<P, N> {
    type Err = Error;

    /// Decimal digits without a sign or leading zeros, below the modulus.
    fn from_str(s: &str) -> Result<Self, Error> {
        if s.is_empty() || (s.len() > 1 && s.starts_with('0')) {
            return Err(Error::DecodingError);
        }

        let mut acc = BigInt::<N>::default();
        for c in s.chars() {
            let digit = c.to_digit(10).ok_or(Error::DecodingError)?;
            // acc >= 2^(MODULUS_BITS - 3) would put 10 * acc above p.
            if acc.num_bits() > P::MODULUS_BITS - 3 {
                return Err(Error::DecodingError);
            }
            let mut eight = acc;
            eight.muln(3);
            acc.mul2();
            acc.add_nocarry(&eight);
            acc.add_nocarry(&BigInt::from(u64::from(digit)));
        }
        Self::from_repr(acc).ok_or(Error::DecodingError)
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> fmt::Display for Fp<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp{}({})", 64 * N, self.into_repr())
    }
}

impl<P: FpParameters<BigInt = BigInt<N>>, const N: usize> Neg for Fp<P, N> {
    type Output = Self;

    fn neg(self) -> Self {
        if self.is_zero() {
            return self;
        }
        let mut out = P::MODULUS;
        out.sub_noborrow(&self.0);
        Fp::new(out)
    }
}

impl<'a, P: FpParameters<BigInt = BigInt<N>>, const N: usize> AddAssign<&'a Self> for Fp<P, N> {
    fn add_assign(&mut self, other: &Self) {
        // The spare top bit of the moduli keeps this from wrapping.
        self.0.add_nocarry(&other.0);
        if !self.is_valid() {
            self.0.sub_noborrow(&P::MODULUS);
        }
    }
}

impl<'a, P: FpParameters<BigInt = BigInt<N>>, const N: usize> SubAssign<&'a Self> for Fp<P, N> {
    fn sub_assign(&mut self, other: &Self) {
        if self.0.sub_noborrow(&other.0) {
            self.0.add_nocarry(&P::MODULUS);
        }
    }
}

impl<'a, P: FpParameters<BigInt = BigInt<N>>, const N: usize> MulAssign<&'a Self> for Fp<P, N> {
    fn mul_assign(&mut self, other: &Self) {
        self.0 = self.mont_mul(&other.0);
    }
}

impl_ops_from_ref!(additive [P: FpParameters<BigInt = BigInt<N>>, const N: usize] Fp<P, N>);
impl_ops_from_ref!(multiplicative [P: FpParameters<BigInt = BigInt<N>>, const N: usize] Fp<P, N>);
