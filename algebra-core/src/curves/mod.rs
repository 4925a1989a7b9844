use crate::{
    error::Error,
    fields::{BitIteratorBE, Field, PrimeField, SquareRootField},
};
use ark_std::{
    cfg_iter,
    fmt::{Debug, Display},
    hash::Hash,
    iter::{self, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    vec::Vec,
    UniformRand,
};
use num_traits::Zero;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub mod encoding;
pub use self::encoding::*;

pub mod models;
pub use self::models::*;

/// A pairing-friendly curve: the groups `G1`, `G2`, `GT` and the map
/// `e: G1 x G2 -> GT`.
///
/// The pairing is split in two stages. [`PairingEngine::multi_miller_loop`]
/// evaluates line functions over precomputed inputs and produces an
/// unreduced value in `Fqk`; [`PairingEngine::final_exponentiation`] raises
/// it to `(p^k - 1) / r`. Only the reduced value is well defined: two
/// unreduced values that differ by an `r`-th power represent the same
/// pairing.
pub trait PairingEngine: Sized + 'static + Copy + Debug + Sync + Send {
    /// Order of `G1` and `G2`.
    type Fr: PrimeField + SquareRootField;

    /// Base field of `G1`.
    type Fq: PrimeField + SquareRootField;

    /// Base field of the twist carrying `G2`.
    type Fqe: SquareRootField;

    /// Field containing `GT`.
    type Fqk: Field;

    type G1Projective: ProjectiveCurve<BaseField = Self::Fq, ScalarField = Self::Fr, Affine = Self::G1Affine>
        + From<Self::G1Affine>
        + Into<Self::G1Affine>
        + MulAssign<Self::Fr>;

    type G1Affine: AffineCurve<BaseField = Self::Fq, ScalarField = Self::Fr, Projective = Self::G1Projective>
        + From<Self::G1Projective>
        + Into<Self::G1Projective>;

    type G1Prepared: Clone + Send + Sync + Debug;

    type G2Projective: ProjectiveCurve<BaseField = Self::Fqe, ScalarField = Self::Fr, Affine = Self::G2Affine>
        + From<Self::G2Affine>
        + Into<Self::G2Affine>
        + MulAssign<Self::Fr>;

    type G2Affine: AffineCurve<BaseField = Self::Fqe, ScalarField = Self::Fr, Projective = Self::G2Projective>
        + From<Self::G2Projective>
        + Into<Self::G2Projective>;

    type G2Prepared: Clone + Send + Sync + Debug;

    fn precompute_g1(p: &Self::G1Affine) -> Self::G1Prepared;

    /// Walks the loop count once and records every line coefficient.
    fn precompute_g2(q: &Self::G2Affine) -> Result<Self::G2Prepared, Error>;

    /// The product of the Miller loops of all pairs, computed over one
    /// shared chain of squarings. A pair with an identity input contributes
    /// `1`. The result is unreduced; see [`PairingEngine::miller_loop`].
    fn multi_miller_loop<'a, I>(pairs: I) -> Result<Self::Fqk, Error>
    where
        I: IntoIterator<Item = (&'a Self::G1Prepared, &'a Self::G2Prepared)>;

    /// `f^((p^k - 1) / r)`. Fails with [`Error::NonInvertible`] on zero.
    fn final_exponentiation(f: &Self::Fqk) -> Result<Self::Fqk, Error>;

    /// The Miller loop of one pair, before the final exponentiation.
    ///
    /// The unreduced value is only meaningful up to `r`-th powers and must
    /// not be compared across engines or against inverses. For BLS12 with a
    /// negative `x` the loop ends by conjugating `f` rather than inverting
    /// it. Conjugation is `f^(p^6)`, which differs from `f^-1` by the factor
    /// `f^(p^6 + 1)`; that factor is killed by the easy part of the final
    /// exponentiation, so the two agree only after
    /// [`PairingEngine::final_exponentiation`].
    fn miller_loop(p: &Self::G1Prepared, q: &Self::G2Prepared) -> Result<Self::Fqk, Error> {
        Self::multi_miller_loop(iter::once((p, q)))
    }

    fn double_miller_loop(
        p1: &Self::G1Prepared,
        q1: &Self::G2Prepared,
        p2: &Self::G1Prepared,
        q2: &Self::G2Prepared,
    ) -> Result<Self::Fqk, Error> {
        Self::multi_miller_loop([(p1, q1), (p2, q2)])
    }

    /// Precomputes both inputs and runs [`PairingEngine::miller_loop`].
    /// Like the Miller loop, the output is unreduced: for BLS12 with a
    /// negative `x` it is a conjugate, not an inverse, and equals other
    /// representatives of `e(p, q)` only after
    /// [`PairingEngine::final_exponentiation`]. Use
    /// [`PairingEngine::pair_reduced`] for a canonical `GT` element.
    fn pair<G1, G2>(p: G1, q: G2) -> Result<Self::Fqk, Error>
    where
        G1: Into<Self::G1Affine>,
        G2: Into<Self::G2Affine>,
    {
        let p = Self::precompute_g1(&p.into());
        let q = Self::precompute_g2(&q.into())?;
        Self::miller_loop(&p, &q)
    }

    /// `e(p, q)` in the order-`r` subgroup of `Fqk`.
    fn pair_reduced<G1, G2>(p: G1, q: G2) -> Result<Self::Fqk, Error>
    where
        G1: Into<Self::G1Affine>,
        G2: Into<Self::G2Affine>,
    {
        Self::final_exponentiation(&Self::pair(p, q)?)
    }

    /// `prod_i e(p_i, q_i)`. The Miller loops run independently (in
    /// parallel with the `parallel` feature) and share one final
    /// exponentiation.
    fn product_of_pairings(pairs: &[(Self::G1Affine, Self::G2Affine)]) -> Result<Self::Fqk, Error> {
        let loops = cfg_iter!(pairs)
            .map(|(p, q)| {
                let q = Self::precompute_g2(q)?;
                Self::miller_loop(&Self::precompute_g1(p), &q)
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Self::final_exponentiation(&loops.into_iter().product())
    }
}

/// A point of a prime-order curve group in a representation with a
/// denominator: homogeneous projective or Jacobian.
pub trait ProjectiveCurve:
    Eq
    + 'static
    + Copy
    + Default
    + Send
    + Sync
    + Hash
    + Debug
    + Display
    + UniformRand
    + Zero
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Mul<<Self as ProjectiveCurve>::ScalarField, Output = Self>
    + MulAssign<<Self as ProjectiveCurve>::ScalarField>
    + Sum<Self>
    + for<'a> Sum<&'a Self>
    + From<<Self as ProjectiveCurve>::Affine>
{
    const COFACTOR: &'static [u64];
    type ScalarField: PrimeField + SquareRootField;
    type BaseField: Field;
    type Affine: AffineCurve<Projective = Self, ScalarField = Self::ScalarField, BaseField = Self::BaseField>
        + From<Self>
        + Into<Self>;

    /// The fixed generator of the prime-order subgroup.
    fn prime_subgroup_generator() -> Self;

    /// Rescales every point to `Z = 1` with a single field inversion.
    fn batch_normalization(v: &mut [Self]);

    fn batch_normalization_into_affine(v: &[Self]) -> Vec<Self::Affine> {
        let mut v = v.to_vec();
        Self::batch_normalization(&mut v);
        v.into_iter().map(Into::into).collect()
    }

    /// `Z = 1`, or the identity.
    fn is_normalized(&self) -> bool;

    fn double(&self) -> Self {
        let mut out = *self;
        out.double_in_place();
        out
    }

    fn double_in_place(&mut self) -> &mut Self;

    fn into_affine(&self) -> Self::Affine {
        (*self).into()
    }

    fn add_mixed(mut self, other: &Self::Affine) -> Self {
        self.add_assign_mixed(other);
        self
    }

    /// `self += other` for an affine `other`, cheaper than a full addition.
    fn add_assign_mixed(&mut self, other: &Self::Affine);

    /// Double-and-add by an integer given as little-endian limbs.
    fn mul_bigint<S: AsRef<[u64]>>(self, by: S) -> Self {
        BitIteratorBE::without_leading_zeros(by).fold(Self::zero(), |mut acc, bit| {
            acc.double_in_place();
            if bit {
                acc += self;
            }
            acc
        })
    }
}

/// A point of a prime-order curve group as `(x, y)` plus an identity flag.
pub trait AffineCurve:
    Eq
    + 'static
    + Copy
    + Default
    + Send
    + Sync
    + Hash
    + Debug
    + Display
    + Zero
    + Neg<Output = Self>
    + PointEncoding
    + From<<Self as AffineCurve>::Projective>
{
    const COFACTOR: &'static [u64];
    type ScalarField: PrimeField + SquareRootField;
    type BaseField: Field;
    type Projective: ProjectiveCurve<Affine = Self, ScalarField = Self::ScalarField, BaseField = Self::BaseField>
        + From<Self>
        + Into<Self>
        + MulAssign<Self::ScalarField>;

    fn prime_subgroup_generator() -> Self;

    fn into_projective(&self) -> Self::Projective {
        (*self).into()
    }

    /// Double-and-add by little-endian limbs, adding `self` in mixed form.
    fn mul_bigint<S: AsRef<[u64]>>(&self, by: S) -> Self::Projective;

    /// Multiplies by the cofactor of the curve, landing in the prime-order
    /// subgroup.
    fn mul_by_cofactor(&self) -> Self;
}
