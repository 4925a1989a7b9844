//! Fixed-width unsigned integers over little-endian `u64` limbs.

use ark_std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::Hash,
    rand::{
        distributions::{Distribution, Standard},
        Rng,
    },
    vec::Vec,
    UniformRand,
};

#[cfg(test)]
mod tests;

/// An `N`-limb unsigned integer, least significant limb first.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct BigInt<const N: usize>(pub [u64; N]);

pub type BigInteger64 = BigInt<1>;
pub type BigInteger128 = BigInt<2>;
pub type BigInteger256 = BigInt<4>;
pub type BigInteger320 = BigInt<5>;
pub type BigInteger384 = BigInt<6>;

impl<const N: usize> BigInt<N> {
    pub const fn new(limbs: [u64; N]) -> Self {
        BigInt(limbs)
    }
}

impl<const N: usize> Default for BigInt<N> {
    fn default() -> Self {
        BigInt([0u64; N])
    }
}

impl<const N: usize> Ord for BigInt<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl<const N: usize> PartialOrd for BigInt<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Display for BigInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        self.0.iter().rev().try_for_each(|limb| write!(f, "{:016X}", limb))
    }
}

impl<const N: usize> From<u64> for BigInt<N> {
    fn from(value: u64) -> Self {
        let mut limbs = [0u64; N];
        limbs[0] = value;
        BigInt(limbs)
    }
}

impl<const N: usize> AsRef<[u64]> for BigInt<N> {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl<const N: usize> AsMut<[u64]> for BigInt<N> {
    fn as_mut(&mut self) -> &mut [u64] {
        &mut self.0
    }
}

impl<const N: usize> Distribution<BigInt<N>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInt<N> {
        BigInt(core::array::from_fn(|_| rng.gen()))
    }
}

impl<const N: usize> BigInteger for BigInt<N> {
    const NUM_LIMBS: usize = N;
}

/// Operations shared by every limb width. All of them work on the limb
/// slice, so implementors only provide the storage.
pub trait BigInteger:
    Copy
    + Debug
    + Default
    + Display
    + Eq
    + Hash
    + Ord
    + Send
    + Sync
    + 'static
    + UniformRand
    + AsMut<[u64]>
    + AsRef<[u64]>
    + From<u64>
{
    const NUM_LIMBS: usize;

    /// `self += other`, returning whether the sum wrapped.
    fn add_nocarry(&mut self, other: &Self) -> bool {
        arithmetic::add_assign(self.as_mut(), other.as_ref())
    }

    /// `self -= other`, returning whether the difference wrapped.
    fn sub_noborrow(&mut self, other: &Self) -> bool {
        arithmetic::sub_assign(self.as_mut(), other.as_ref())
    }

    /// Doubles in place; the top bit falls off.
    fn mul2(&mut self) {
        self.muln(1);
    }

    /// Shifts left by `amt` bits.
    fn muln(&mut self, amt: u32) {
        arithmetic::shl(self.as_mut(), amt);
    }

    fn div2(&mut self) {
        self.divn(1);
    }

    /// Shifts right by `amt` bits.
    fn divn(&mut self, amt: u32) {
        arithmetic::shr(self.as_mut(), amt);
    }

    fn is_odd(&self) -> bool {
        self.as_ref()[0] & 1 == 1
    }

    fn is_even(&self) -> bool {
        !self.is_odd()
    }

    fn is_zero(&self) -> bool {
        self.as_ref().iter().all(|&limb| limb == 0)
    }

    /// Position of the highest set bit plus one; zero for zero.
    fn num_bits(&self) -> u32 {
        let limbs = self.as_ref();
        match limbs.iter().rposition(|&limb| limb != 0) {
            Some(top) => 64 * top as u32 + (64 - limbs[top].leading_zeros()),
            None => 0,
        }
    }

    fn get_bit(&self, i: usize) -> bool {
        self.as_ref()
            .get(i / 64)
            .map_or(false, |limb| (limb >> (i % 64)) & 1 == 1)
    }

    /// Bits from the highest set one down to bit zero.
    fn to_bits_be(&self) -> Vec<bool> {
        (0..self.num_bits() as usize)
            .rev()
            .map(|i| self.get_bit(i))
            .collect()
    }

    /// Non-adjacent form, least significant digit first.
    fn find_wnaf(&self) -> Vec<i64> {
        arithmetic::find_wnaf(self.as_ref())
    }

    fn to_bytes_le(&self) -> Vec<u8> {
        self.as_ref().iter().flat_map(|limb| limb.to_le_bytes()).collect()
    }

    fn to_bytes_be(&self) -> Vec<u8> {
        self.as_ref()
            .iter()
            .rev()
            .flat_map(|limb| limb.to_be_bytes())
            .collect()
    }

    /// Reads a little-endian integer of at most `8 * NUM_LIMBS` bytes.
    fn from_bytes_le(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > 8 * Self::NUM_LIMBS {
            return None;
        }
        let mut out = Self::default();
        let limbs = out.as_mut();
        for (i, byte) in bytes.iter().enumerate() {
            limbs[i / 8] |= u64::from(*byte) << (8 * (i % 8));
        }
        Some(out)
    }
}

/// Limb-level primitives. Carries and borrows are returned as the second
/// component rather than threaded through a `&mut`.
pub mod arithmetic {
    use ark_std::vec::Vec;

    /// `a + b + carry` as `(low, carry_out)`.
    #[inline(always)]
    pub const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
        let t = a as u128 + b as u128 + carry as u128;
        (t as u64, (t >> 64) as u64)
    }

    /// `a - b - borrow` as `(low, borrow_out)`, with `borrow` in {0, 1}.
    #[inline(always)]
    pub const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
        let t = (a as u128).wrapping_sub(b as u128 + borrow as u128);
        (t as u64, (t >> 127) as u64)
    }

    /// `a + b * c + carry` as `(low, high)`. Cannot overflow 128 bits.
    #[inline(always)]
    pub const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
        let t = a as u128 + (b as u128) * (c as u128) + carry as u128;
        (t as u64, (t >> 64) as u64)
    }

    /// `a += b` over equally long slices; returns the carry out.
    pub fn add_assign(a: &mut [u64], b: &[u64]) -> bool {
        let mut carry = 0;
        for (x, &y) in a.iter_mut().zip(b) {
            let (sum, c) = adc(*x, y, carry);
            *x = sum;
            carry = c;
        }
        carry != 0
    }

    /// `a -= b` over equally long slices; returns the borrow out.
    pub fn sub_assign(a: &mut [u64], b: &[u64]) -> bool {
        let mut borrow = 0;
        for (x, &y) in a.iter_mut().zip(b) {
            let (diff, bw) = sbb(*x, y, borrow);
            *x = diff;
            borrow = bw;
        }
        borrow != 0
    }

    pub fn shl(limbs: &mut [u64], amt: u32) {
        let (words, bits) = ((amt / 64) as usize, amt % 64);
        let len = limbs.len();
        for i in (0..len).rev() {
            let lo = i.checked_sub(words).map_or(0, |j| limbs[j]);
            let lower = i.checked_sub(words + 1).map_or(0, |j| limbs[j]);
            limbs[i] = if bits == 0 {
                lo
            } else {
                (lo << bits) | (lower >> (64 - bits))
            };
        }
    }

    pub fn shr(limbs: &mut [u64], amt: u32) {
        let (words, bits) = ((amt / 64) as usize, amt % 64);
        let len = limbs.len();
        for i in 0..len {
            let hi = limbs.get(i + words).copied().unwrap_or(0);
            let upper = limbs.get(i + words + 1).copied().unwrap_or(0);
            limbs[i] = if bits == 0 {
                hi
            } else {
                (hi >> bits) | (upper << (64 - bits))
            };
        }
    }

    fn add_small(limbs: &mut [u64], mut x: u64) {
        for limb in limbs.iter_mut() {
            let (sum, carry) = adc(*limb, x, 0);
            *limb = sum;
            x = carry;
            if x == 0 {
                break;
            }
        }
    }

    fn sub_small(limbs: &mut [u64], mut x: u64) {
        for limb in limbs.iter_mut() {
            let (diff, borrow) = sbb(*limb, x, 0);
            *limb = diff;
            x = borrow;
            if x == 0 {
                break;
            }
        }
    }

    /// Non-adjacent form of `num`: digits in {-1, 0, 1}, least significant
    /// first, with no two neighbouring digits non-zero.
    pub fn find_wnaf(num: &[u64]) -> Vec<i64> {
        // A spare limb absorbs the carry of rounding up.
        let mut k = num.to_vec();
        k.push(0);
        let mut digits = Vec::new();

        while k.iter().any(|&limb| limb != 0) {
            let digit = match k[0] & 3 {
                1 => {
                    sub_small(&mut k, 1);
                    1
                },
                3 => {
                    add_small(&mut k, 1);
                    -1
                },
                _ => 0,
            };
            digits.push(digit);
            shr(&mut k, 1);
        }
        digits
    }
}
