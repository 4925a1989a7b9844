use crate::fields::{Field, PrimeField, SquareRootField};

#[macro_use]
pub mod short_weierstrass_affine;
pub mod short_weierstrass_jacobian;
pub mod short_weierstrass_projective;

pub mod bls12;
pub mod mnt4;
pub mod mnt6;
pub mod mnt_ate;

pub trait ModelParameters: Send + Sync + 'static {
    type BaseField: Field + SquareRootField;
    type ScalarField: PrimeField + SquareRootField;
}

/// Constants of a short Weierstrass curve `y^2 = x^3 + a * x + b`.
pub trait SWModelParameters: ModelParameters {
    const COEFF_A: Self::BaseField;
    const COEFF_B: Self::BaseField;
    /// Index of the prime-order subgroup in the group of rational points.
    const COFACTOR: &'static [u64];
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField);

    #[inline(always)]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        let mut copy = *elem;
        copy *= &Self::COEFF_A;
        copy
    }

    #[inline(always)]
    fn add_b(elem: &Self::BaseField) -> Self::BaseField {
        let mut copy = *elem;
        copy += &Self::COEFF_B;
        copy
    }
}
