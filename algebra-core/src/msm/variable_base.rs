use crate::{
    biginteger::BigInteger,
    curves::{AffineCurve, ProjectiveCurve},
    error::Error,
    fields::{FpParameters, PrimeField},
    msm::{ln_without_floats, sum_par},
};
use ark_std::{cfg_into_iter, vec, vec::Vec};
use itertools::Itertools;
use num_traits::{One, Zero};
use tracing::{instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

type ScalarRepr<G> = <<G as AffineCurve>::ScalarField as PrimeField>::BigInt;

pub struct VariableBaseMSM;

impl VariableBaseMSM {
    fn window_size(num_scalars: usize) -> usize {
        if num_scalars < 32 {
            3
        } else {
            ln_without_floats(num_scalars) + 2
        }
    }

    /// Computes `sum_i scalars[i] * bases[i]` with Pippenger's bucket method.
    ///
    /// The scalars are canonical integers of the scalar field. Returns the
    /// identity for empty input, and [`Error::InvalidArgument`] when the two
    /// slices differ in length or a scalar is not below the field modulus.
    #[instrument(name = "variable base msm", skip_all, fields(size = bases.len()), level = "debug")]
    pub fn multi_scalar_mul<G: AffineCurve>(
        bases: &[G],
        scalars: &[ScalarRepr<G>],
    ) -> Result<G::Projective, Error> {
        if bases.len() != scalars.len() {
            return Err(Error::InvalidArgument(
                "multi-scalar multiplication needs as many scalars as bases",
            ));
        }
        let modulus = <G::ScalarField as PrimeField>::Params::MODULUS;
        if scalars.iter().any(|s| *s >= modulus) {
            return Err(Error::InvalidArgument(
                "scalar is not reduced modulo the scalar field",
            ));
        }
        if bases.is_empty() {
            return Ok(G::Projective::zero());
        }

        let c = Self::window_size(scalars.len());
        let num_bits = <G::ScalarField as PrimeField>::Params::MODULUS_BITS as usize;
        trace!(window = c, bits = num_bits);

        let one = G::ScalarField::one().into_repr();
        let window_starts: Vec<usize> = (0..num_bits).step_by(c).collect();

        let window_sums: Vec<G::Projective> = cfg_into_iter!(window_starts)
            .map(|start| Self::window_sum(bases, scalars, start, c, &one))
            .collect();

        Ok(sum_par(&window_sums))
    }

    /// The contribution of bits `start..start + c` of every scalar, already
    /// shifted up to its weight `2^start`.
    fn window_sum<G: AffineCurve>(
        bases: &[G],
        scalars: &[ScalarRepr<G>],
        start: usize,
        c: usize,
        one: &ScalarRepr<G>,
    ) -> G::Projective {
        let mut acc = G::Projective::zero();
        // Digit `d` lands in bucket `d - 1`; zero digits are dropped.
        let mut buckets = vec![G::Projective::zero(); (1 << c) - 1];

        for (scalar, base) in scalars.iter().zip_eq(bases) {
            if scalar.is_zero() {
                continue;
            }
            if scalar == one {
                if start == 0 {
                    acc.add_assign_mixed(base);
                }
                continue;
            }
            let mut shifted = *scalar;
            shifted.divn(start as u32);
            let digit = (shifted.as_ref()[0] % (1 << c)) as usize;
            if digit != 0 {
                buckets[digit - 1].add_assign_mixed(base);
            }
        }

        // sum_d d * B_d as a running sum over the buckets, highest first.
        let buckets = G::Projective::batch_normalization_into_affine(&buckets);
        let mut running = G::Projective::zero();
        for bucket in buckets.iter().rev() {
            running.add_assign_mixed(bucket);
            acc += &running;
        }

        for _ in 0..start {
            acc.double_in_place();
        }
        acc
    }
}
